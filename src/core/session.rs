//! Editing-session state: transport flags, playhead position, and the track
//! list. All mutations arrive as [`Command`] values and are applied
//! synchronously; the UI reads the state back through the accessors each
//! frame.

use crate::core::time::{self, Seconds};
use crate::core::track::{Track, TrackId};

/// Fixed sequence parameters for one editing session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceSettings {
    pub duration_in_frames: u32,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl SequenceSettings {
    /// Total sequence length in seconds
    pub fn duration_seconds(&self) -> Seconds {
        self.duration_in_frames as f64 / self.fps as f64
    }
}

impl Default for SequenceSettings {
    fn default() -> Self {
        // 30 seconds at 30 fps, 1080p composition
        Self {
            duration_in_frames: 900,
            fps: 30,
            width: 1920,
            height: 1080,
        }
    }
}

/// Command sent to the session by UI widgets or the preview player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePlayback,
    SeekToFrame(u32),
    SeekToTime(Seconds),
    SeekToStart,
    SeekToEnd,
    AddTrack,
    RemoveTrack(TrackId),
}

/// Owns all mutable editor state for one session.
///
/// State is mutated only through [`EditorSession::apply`] or the operation
/// methods it dispatches to; there is exactly one owner and no interior
/// mutability, so every mutation is synchronous and atomic from the caller's
/// side.
#[derive(Debug, Clone)]
pub struct EditorSession {
    settings: SequenceSettings,
    playing: bool,
    position: Seconds,
    tracks: Vec<Track>,
    next_track_id: TrackId,
}

impl EditorSession {
    /// Create a session seeded with one video and one audio track
    pub fn new(settings: SequenceSettings) -> Self {
        let tracks = vec![
            Track::new(1, "Video Track 1"),
            Track::new(2, "Audio Track 1"),
        ];

        Self {
            settings,
            playing: false,
            position: 0.0,
            tracks,
            next_track_id: 3,
        }
    }

    /// Apply a command, mutating session state
    pub fn apply(&mut self, command: Command) {
        log::trace!("apply {:?}", command);
        match command {
            Command::TogglePlayback => self.toggle_playback(),
            Command::SeekToFrame(frame) => self.seek_to_frame(frame),
            Command::SeekToTime(seconds) => self.seek_to_time(seconds),
            Command::SeekToStart => self.seek_to_start(),
            Command::SeekToEnd => self.seek_to_end(),
            Command::AddTrack => {
                self.add_track();
            }
            Command::RemoveTrack(id) => {
                self.remove_track(id);
            }
        }
    }

    /// Flip the play/pause flag. The preview player starts or stops its clock
    /// in response; the session itself never advances the playhead.
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
        log::debug!(
            "playback {}",
            if self.playing { "started" } else { "paused" }
        );
    }

    /// Per-frame position report from the preview player
    pub fn seek_to_frame(&mut self, frame: u32) {
        self.set_position(time::frame_to_seconds(frame, self.settings.fps));
    }

    /// Direct scrubber interaction
    pub fn seek_to_time(&mut self, seconds: Seconds) {
        self.set_position(seconds);
    }

    pub fn seek_to_start(&mut self) {
        self.set_position(0.0);
    }

    pub fn seek_to_end(&mut self) {
        self.set_position(self.settings.duration_seconds());
    }

    fn set_position(&mut self, seconds: Seconds) {
        // Keep the playhead inside the sequence
        self.position = seconds.clamp(0.0, self.settings.duration_seconds());
    }

    /// Append a new empty track with a generated name. Returns the new id.
    ///
    /// Ids come from a counter that only counts up, so an id freed by
    /// `remove_track` is never handed out again within the session.
    pub fn add_track(&mut self) -> TrackId {
        let id = self.next_track_id;
        self.next_track_id += 1;

        let track = Track::new(id, format!("Track {}", id));
        log::debug!("added {}", track.name);
        self.tracks.push(track);
        id
    }

    /// Remove a track by id, preserving the order of the rest.
    ///
    /// Returns the removed track, or `None` if no track has that id.
    pub fn remove_track(&mut self, id: TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|track| track.id == id)?;
        let track = self.tracks.remove(index);
        log::debug!("removed {}", track.name);
        Some(track)
    }

    pub fn settings(&self) -> &SequenceSettings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current playhead position in seconds
    pub fn position(&self) -> Seconds {
        self.position
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SequenceSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_state() {
        let session = EditorSession::default();
        assert!(!session.is_playing());
        assert_eq!(session.position(), 0.0);
        assert_eq!(session.tracks().len(), 2);
        assert_eq!(session.tracks()[0].id, 1);
        assert_eq!(session.tracks()[0].name, "Video Track 1");
        assert_eq!(session.tracks()[1].id, 2);
        assert_eq!(session.tracks()[1].name, "Audio Track 1");
    }

    #[test]
    fn test_toggle_playback_twice_restores_flag() {
        let mut session = EditorSession::default();
        session.apply(Command::TogglePlayback);
        assert!(session.is_playing());
        session.apply(Command::TogglePlayback);
        assert!(!session.is_playing());
    }

    #[test]
    fn test_seek_to_frame_is_exact() {
        let mut session = EditorSession::default();
        session.apply(Command::SeekToFrame(75));
        assert_eq!(session.position(), 75.0 / 30.0);
        assert_eq!(session.position(), 2.5);
    }

    #[test]
    fn test_seek_to_start_then_end() {
        let mut session = EditorSession::default();
        session.apply(Command::SeekToStart);
        assert_eq!(session.position(), 0.0);
        session.apply(Command::SeekToEnd);
        assert_eq!(session.position(), 30.0);
    }

    #[test]
    fn test_seeks_clamp_to_sequence() {
        let mut session = EditorSession::default();
        session.apply(Command::SeekToTime(125.0));
        assert_eq!(session.position(), 30.0);
        session.apply(Command::SeekToTime(-5.0));
        assert_eq!(session.position(), 0.0);
        session.apply(Command::SeekToFrame(9000));
        assert_eq!(session.position(), 30.0);
    }

    #[test]
    fn test_add_track_grows_list_by_one() {
        let mut session = EditorSession::default();
        for n in 1..=5 {
            session.apply(Command::AddTrack);
            assert_eq!(session.tracks().len(), 2 + n);
        }
    }

    #[test]
    fn test_add_track_from_seed_state() {
        let mut session = EditorSession::default();
        let id = session.add_track();
        assert_eq!(id, 3);

        let track = session.tracks().last().unwrap();
        assert_eq!(track.id, 3);
        assert_eq!(track.name, "Track 3");
        assert!(track.clips.is_empty());
    }

    #[test]
    fn test_remove_track_from_seed_state() {
        let mut session = EditorSession::default();
        let removed = session.remove_track(1).unwrap();
        assert_eq!(removed.name, "Video Track 1");

        assert_eq!(session.tracks().len(), 1);
        assert_eq!(session.tracks()[0].id, 2);
        assert_eq!(session.tracks()[0].name, "Audio Track 1");
        assert!(session.tracks()[0].clips.is_empty());
    }

    #[test]
    fn test_remove_track_preserves_order_of_rest() {
        let mut session = EditorSession::default();
        session.add_track(); // 3
        session.add_track(); // 4
        session.add_track(); // 5

        session.apply(Command::RemoveTrack(3));
        let ids: Vec<_> = session.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_remove_unknown_track_is_a_no_op() {
        let mut session = EditorSession::default();
        assert!(session.remove_track(42).is_none());
        assert_eq!(session.tracks().len(), 2);

        let before = session.tracks().to_vec();
        session.apply(Command::RemoveTrack(42));
        assert_eq!(session.tracks(), &before[..]);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut session = EditorSession::default();
        let a = session.add_track(); // 3
        let b = session.add_track(); // 4
        session.remove_track(a);
        session.remove_track(b);

        // List is back to two entries, but the counter does not rewind
        let c = session.add_track();
        assert_eq!(c, 5);

        let ids: Vec<_> = session.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_scrub_does_not_change_play_flag() {
        let mut session = EditorSession::default();
        session.apply(Command::TogglePlayback);
        session.apply(Command::SeekToTime(12.0));
        assert!(session.is_playing());
        assert_eq!(session.position(), 12.0);
    }
}
