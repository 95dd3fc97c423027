//! Time conversions between frames and seconds.
//!
//! The playhead is kept in seconds (f64); the preview player reports position
//! in whole frames at a fixed rate, so everything at the player boundary goes
//! through these conversions.

/// Playhead time in seconds since sequence start
pub type Seconds = f64;

/// Convert a frame index to seconds at the given frame rate
#[inline]
pub fn frame_to_seconds(frame: u32, fps: u32) -> Seconds {
    frame as f64 / fps as f64
}

/// Convert seconds to a frame index (floored) at the given frame rate
#[inline]
pub fn seconds_to_frame(seconds: Seconds, fps: u32) -> u32 {
    (seconds * fps as f64).floor() as u32
}

/// Format a playhead position as M:SS for the transport readout
pub fn format_position(seconds: Seconds) -> String {
    let minutes = (seconds / 60.0).floor() as i64;
    let secs = (seconds % 60.0).floor() as i64;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_conversion() {
        assert_eq!(frame_to_seconds(75, 30), 2.5);
        assert_eq!(seconds_to_frame(2.5, 30), 75);
        assert_eq!(frame_to_seconds(0, 30), 0.0);
    }

    #[test]
    fn test_seconds_to_frame_floors() {
        // A position partway through a frame maps to the frame being shown
        assert_eq!(seconds_to_frame(0.5 / 30.0, 30), 0);
        assert_eq!(seconds_to_frame(1.5 / 30.0, 30), 1);
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(125.0), "2:05");
        assert_eq!(format_position(0.0), "0:00");
        assert_eq!(format_position(30.0), "0:30");
        assert_eq!(format_position(59.9), "0:59");
        assert_eq!(format_position(60.0), "1:00");
    }

    #[test]
    fn test_conversion_roundtrip_on_frame_boundaries() {
        // Half-second boundaries are exact in binary, so the roundtrip is too
        for frame in [0u32, 15, 30, 45, 450, 885] {
            let seconds = frame_to_seconds(frame, 30);
            assert_eq!(seconds_to_frame(seconds, 30), frame);
        }
    }
}
