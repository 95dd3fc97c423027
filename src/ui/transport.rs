//! Transport controls under the preview: skip/play/pause buttons, scrubber,
//! and the formatted position readout.

use egui::{RichText, Slider, Ui};

use crate::core::session::{Command, EditorSession};
use crate::core::time;

/// Render the transport row.
///
/// Returns the command for whichever control the user activated this pass.
pub fn show(ui: &mut Ui, session: &EditorSession) -> Option<Command> {
    let mut command = None;
    let settings = *session.settings();
    let duration = settings.duration_seconds();

    ui.horizontal(|ui| {
        if ui.button("⏮").on_hover_text("Skip to start").clicked() {
            command = Some(Command::SeekToStart);
        }

        let play_label = if session.is_playing() { "⏸" } else { "⏵" };
        if ui.button(play_label).on_hover_text("Play/pause").clicked() {
            command = Some(Command::TogglePlayback);
        }

        if ui.button("⏭").on_hover_text("Skip to end").clicked() {
            command = Some(Command::SeekToEnd);
        }
    });

    // Scrubber over the whole sequence, stepping one frame at a time
    let mut position = session.position();
    ui.spacing_mut().slider_width = ui.available_width();
    let response = ui.add(
        Slider::new(&mut position, 0.0..=duration)
            .step_by(1.0 / settings.fps as f64)
            .show_value(false),
    );
    if response.changed() {
        command = Some(Command::SeekToTime(position));
    }

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(time::format_position(session.position())).weak());
    });

    command
}
