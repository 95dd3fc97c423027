//! Core types for the editing session.
//!
//! This module provides the data structures for the track list, the
//! placeholder clip record, time conversions, and the session controller
//! that owns all mutable editor state.

pub mod clip;
pub mod session;
pub mod time;
pub mod track;

// Re-export core data structures for easier access.
pub use clip::Clip;
pub use session::{Command, EditorSession, SequenceSettings};
pub use time::Seconds;
pub use track::{Track, TrackId};
