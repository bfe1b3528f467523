use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DrawingError;
use crate::history::HistoryStore;
use crate::renderer::Renderer;
use crate::session::DrawingSession;

/// Errors that can occur while saving or loading a drawing
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize drawing: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write drawing: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read drawing file: {0}")]
    ReadError(String),

    #[error("Invalid drawing data: {0}")]
    InvalidDrawing(#[from] DrawingError),

    #[error("Cannot restore a drawing while a gesture is in progress")]
    GestureInProgress,
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Everything needed to restore a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSnapshot {
    /// Crate version that wrote the snapshot
    pub version: String,
    /// Seconds since the UNIX epoch
    pub timestamp: u64,
    pub canvas_color: u32,
    pub state: HistoryStore,
}

impl DrawingSnapshot {
    /// Capture the history and background of a session.
    pub fn new<R: Renderer>(session: &DrawingSession<R>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: timestamp_secs(),
            canvas_color: session.canvas_color(),
            state: session.history().clone(),
        }
    }

    /// Put the captured history and background back into a session.
    ///
    /// Fails without touching the session if a gesture is in progress.
    pub fn restore<R: Renderer>(self, session: &mut DrawingSession<R>) -> PersistenceResult<()> {
        if session.is_tracking() {
            return Err(PersistenceError::GestureInProgress);
        }
        if self.version != env!("CARGO_PKG_VERSION") {
            warn!(
                "Snapshot version {} differs from current version {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        session.set_canvas_color(self.canvas_color);
        session.set_state(self.state);
        Ok(())
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a snapshot; unknown command kinds and invalid paint fail the load.
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        serde_json::from_str(json).map_err(|e| PersistenceError::InvalidDrawing(e.into()))
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        info!(
            "Saved drawing with {} strokes to {}",
            self.state.count(),
            path.display()
        );
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PersistenceError::ReadError(format!("{}: {}", path.display(), e)))?;
        let snapshot = Self::from_json(&json)?;
        info!(
            "Loaded drawing with {} strokes from {}",
            snapshot.state.count(),
            path.display()
        );
        Ok(snapshot)
    }
}

fn timestamp_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
