//! Preview player widget.
//!
//! Owns the playback clock and the composition area. While the session is
//! playing, the clock advances on the player's own schedule and every shown
//! frame is reported back through a `SeekToFrame` command; the widget never
//! mutates the session directly. The composition itself is rendered by the
//! external player engine, so the placeholder paints a black frame at the
//! sequence aspect ratio.

use egui::{Color32, Rounding, Sense, Ui, Vec2};

use crate::core::session::{Command, EditorSession};
use crate::core::time;
use crate::player::clock::PlayerClock;

/// Preview area bound to an editing session
pub struct PreviewPlayer {
    clock: PlayerClock,
}

impl PreviewPlayer {
    pub fn new() -> Self {
        Self {
            clock: PlayerClock::Stopped,
        }
    }

    /// Render the preview area for this UI pass.
    ///
    /// Returns the per-frame seek for the caller to apply while playing.
    pub fn show(&mut self, ui: &mut Ui, session: &EditorSession) -> Option<Command> {
        let settings = *session.settings();

        // Keep the clock in step with the session's play flag
        let mut command = None;
        if session.is_playing() {
            if !self.clock.is_running() {
                let frame = time::seconds_to_frame(session.position(), settings.fps);
                self.clock.start(frame);
            }
            if let Some(frame) = self.clock.current_frame(settings.fps, settings.duration_in_frames)
            {
                command = Some(Command::SeekToFrame(frame));
            }
            // The clock advances between passes, so keep repainting
            ui.ctx().request_repaint();
        } else if self.clock.is_running() {
            self.clock.stop();
        }

        // Composition area at the sequence aspect ratio
        let aspect = settings.width as f32 / settings.height as f32;
        let width = ui.available_width();
        let size = Vec2::new(width, width / aspect);
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter()
            .rect_filled(rect, Rounding::same(4.0), Color32::BLACK);

        command
    }
}

impl Default for PreviewPlayer {
    fn default() -> Self {
        Self::new()
    }
}
