//! Capability boundaries for media import and export.
//!
//! The editor ships no implementation of either trait. Hosts inject one at
//! construction time; until then the corresponding actions render disabled
//! rather than silently doing nothing.

use std::path::PathBuf;

use crate::core::session::EditorSession;

/// Error type for media capability operations
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("operation cancelled")]
    Cancelled,
    #[error("unsupported media: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Source-media picker backed by the host environment
pub trait MediaImporter {
    /// Pick source files to bring into the session.
    ///
    /// An empty list means nothing was selected.
    fn import(&mut self) -> Result<Vec<PathBuf>, MediaError>;
}

/// Sequence renderer backed by the host environment
pub trait MediaExporter {
    /// Render the session's sequence, returning the destination written
    fn export(&mut self, session: &EditorSession) -> Result<PathBuf, MediaError>;
}
