//! Timeline panel: one row per track with a remove action, plus the
//! add-track header.

use egui::{Align, Layout, ScrollArea, Ui};

use crate::core::session::{Command, EditorSession};

/// Render the track list panel.
///
/// Returns the command for whichever action the user activated this pass.
pub fn show(ui: &mut Ui, session: &EditorSession) -> Option<Command> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.heading("Timeline");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("➕ Add Track").clicked() {
                command = Some(Command::AddTrack);
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for track in session.tracks() {
                ui.horizontal(|ui| {
                    ui.label(&track.name);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Remove track").clicked() {
                            command = Some(Command::RemoveTrack(track.id));
                        }
                    });
                });
            }
        });

    command
}
