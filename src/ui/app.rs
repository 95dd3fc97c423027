//! Main application UI for the editor window.
//!
//! The app owns the editing session, the preview player, and whatever media
//! capabilities the host injected. Each update pass collects at most one
//! command per widget and applies them to the session; everything drawn is a
//! projection of current session state.

use eframe::{App, CreationContext};
use egui::{Align, Button, CentralPanel, Context, Layout, SidePanel, TopBottomPanel};

use crate::core::session::EditorSession;
use crate::media::{MediaExporter, MediaImporter};
use crate::player::PreviewPlayer;
use crate::ui::{track_list, transport};

/// Main editor application
pub struct EditorApp {
    session: EditorSession,
    player: PreviewPlayer,
    importer: Option<Box<dyn MediaImporter>>,
    exporter: Option<Box<dyn MediaExporter>>,
}

impl EditorApp {
    /// Create the editor with no media capabilities wired.
    ///
    /// Called by eframe during application initialization. Import and export
    /// stay disabled until a host injects the matching capability.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            session: EditorSession::default(),
            player: PreviewPlayer::new(),
            importer: None,
            exporter: None,
        }
    }

    /// Inject a source-media picker
    pub fn with_importer(mut self, importer: Box<dyn MediaImporter>) -> Self {
        self.importer = Some(importer);
        self
    }

    /// Inject a sequence renderer
    pub fn with_exporter(mut self, exporter: Box<dyn MediaExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    fn import_media(&mut self) {
        let Some(importer) = self.importer.as_mut() else {
            return;
        };
        match importer.import() {
            Ok(paths) => log::info!("picked {} source file(s)", paths.len()),
            Err(err) => log::error!("import failed: {err}"),
        }
    }

    fn export_sequence(&mut self) {
        let Some(exporter) = self.exporter.as_mut() else {
            return;
        };
        match exporter.export(&self.session) {
            Ok(path) => log::info!("exported sequence to {}", path.display()),
            Err(err) => log::error!("export failed: {err}"),
        }
    }
}

impl App for EditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Top panel: title and media actions
        TopBottomPanel::top("top_bar").resizable(false).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Video Editor");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .add_enabled(self.exporter.is_some(), Button::new("Export"))
                        .clicked()
                    {
                        self.export_sequence();
                    }
                    if ui
                        .add_enabled(self.importer.is_some(), Button::new("Import Media"))
                        .clicked()
                    {
                        self.import_media();
                    }
                });
            });
        });

        // Right panel: timeline track list
        SidePanel::right("timeline")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                if let Some(command) = track_list::show(ui, &self.session) {
                    self.session.apply(command);
                }
            });

        // Central panel: preview and transport controls
        CentralPanel::default().show(ctx, |ui| {
            if let Some(command) = self.player.show(ui, &self.session) {
                self.session.apply(command);
            }
            ui.add_space(8.0);
            if let Some(command) = transport::show(ui, &self.session) {
                self.session.apply(command);
            }
        });
    }
}
