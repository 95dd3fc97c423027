//! egui-based editor interface.

pub mod app;
pub mod track_list;
pub mod transport;

pub use app::EditorApp;
