mod persistence;
mod session_state;

pub use persistence::{DrawingSnapshot, PersistenceError, PersistenceResult};
pub(crate) use session_state::SessionState;
