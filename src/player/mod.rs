//! Boundary to the external player component.
//!
//! The preview player owns the playback clock and the composition area;
//! actual media rendering stays behind this boundary. While the session's
//! play flag is set, the player advances frames on its own schedule and
//! reports each one back to the session.

pub mod clock;
pub mod preview;

pub use clock::PlayerClock;
pub use preview::PreviewPlayer;
