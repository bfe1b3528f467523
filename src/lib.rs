#![warn(clippy::all, rust_2018_idioms)]

//! Freehand stroke capture with multi-level undo/redo.
//!
//! Strokes are kept as vector command logs rather than pixels, so a drawing
//! can be serialized, replayed at any resolution and handed to any renderer.

pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod path;
pub mod renderer;
pub mod session;
pub mod state;
pub mod stroke;
pub mod tools;

pub use config::SessionConfig;
pub use error::{DrawingError, DrawingResult};
pub use event::{EventBus, EventHandler, EventLog, SessionEvent};
pub use history::HistoryStore;
pub use path::PathCommand;
pub use renderer::{EguiRenderer, NullRenderer, Renderer};
pub use session::DrawingSession;
pub use state::DrawingSnapshot;
pub use stroke::{PaintStyle, Stroke};
pub use tools::StrokeBuilder;
