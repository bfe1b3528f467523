use serde::{Deserialize, Serialize};

/// Radius of the dot recorded for a tap (press and release without movement).
pub const TAP_DOT_RADIUS: f32 = 0.1;

/// A single vector drawing instruction.
///
/// The set is closed: renderers and the (de)serializer match on it
/// exhaustively, so adding a variant changes the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathCommand {
    /// Drop any accumulated sub-path; every stroke starts with this.
    Reset,
    /// Set the pen position without drawing.
    MoveTo { x: f32, y: f32 },
    /// Quadratic curve from the pen position through control `(x1, y1)`
    /// to `(x2, y2)`, which becomes the new pen position.
    QuadTo { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Circle centred at `(x, y)`.
    AddCircle { x: f32, y: f32, radius: f32 },
}

impl PathCommand {
    /// Name of the variant as it appears in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PathCommand::Reset => "reset",
            PathCommand::MoveTo { .. } => "moveTo",
            PathCommand::QuadTo { .. } => "quadTo",
            PathCommand::AddCircle { .. } => "addCircle",
        }
    }
}
