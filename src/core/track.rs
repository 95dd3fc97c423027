//! Track data structure: a named timeline lane holding ordered clips.

use crate::core::clip::Clip;

/// Unique identifier for a track
pub type TrackId = u64;

/// A track is a named lane on the timeline.
///
/// Clips are kept in timeline order. Tracks themselves carry no playback
/// state; the session owns the playhead and play flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub clips: Vec<Clip>,
}

impl Track {
    /// Create a new empty track
    pub fn new(id: TrackId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            clips: Vec::new(),
        }
    }
}
