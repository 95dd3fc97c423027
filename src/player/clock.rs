//! Playback clock for the preview player.

use std::time::{Duration, Instant};

/// Clock state for the preview player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerClock {
    /// No playback active
    Stopped,
    /// Actively advancing from a starting frame
    Running {
        started_at: Instant,
        start_frame: u32,
    },
}

impl PlayerClock {
    /// Check if the clock is advancing
    pub fn is_running(&self) -> bool {
        matches!(self, PlayerClock::Running { .. })
    }

    /// Start advancing from the given frame
    pub fn start(&mut self, frame: u32) {
        *self = PlayerClock::Running {
            started_at: Instant::now(),
            start_frame: frame,
        };
    }

    /// Stop advancing. The session keeps the last reported position.
    pub fn stop(&mut self) {
        *self = PlayerClock::Stopped;
    }

    /// Current frame for a sequence of `duration_in_frames` at `fps`,
    /// wrapping back to the start when the sequence ends.
    ///
    /// Returns `None` while stopped.
    pub fn current_frame(&self, fps: u32, duration_in_frames: u32) -> Option<u32> {
        match self {
            PlayerClock::Stopped => None,
            PlayerClock::Running {
                started_at,
                start_frame,
            } => Some(frame_after(
                *start_frame,
                started_at.elapsed(),
                fps,
                duration_in_frames,
            )),
        }
    }
}

/// Frame reached `elapsed` after `start_frame`, wrapping at
/// `duration_in_frames`
fn frame_after(start_frame: u32, elapsed: Duration, fps: u32, duration_in_frames: u32) -> u32 {
    let advanced = (elapsed.as_secs_f64() * fps as f64).floor() as u64;
    ((start_frame as u64 + advanced) % duration_in_frames as u64) as u32
}
