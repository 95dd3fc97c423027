//! Application entry point.
//!
//! Uses eframe to bootstrap the editor window with winit/wgpu/egui
//! integration. The EditorApp from src/ui/app.rs is the main application UI.

use eframe::egui;
use reelcut::ui::EditorApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Reelcut Video Editor")
            .with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reelcut",
        native_options,
        Box::new(|cc| Box::new(EditorApp::new(cc))),
    )
}
