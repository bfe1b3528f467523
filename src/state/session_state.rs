use crate::stroke::Stroke;
use crate::tools::StrokeBuilder;

/// Where a drawing session is in its gesture cycle.
///
/// ```text
///            Press
///   Idle ────────────► Tracking ──┐ Move
///    ▲                    │  ▲    │
///    │ Release / cancel   │  └────┘
///    └────────────────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub(crate) enum SessionState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A pointer is down and a stroke is being built
    Tracking { builder: StrokeBuilder },
}

impl SessionState {
    pub(crate) fn is_tracking(&self) -> bool {
        matches!(self, SessionState::Tracking { .. })
    }

    /// The stroke being drawn, if any
    pub(crate) fn in_progress(&self) -> Option<&Stroke> {
        match self {
            SessionState::Idle => None,
            SessionState::Tracking { builder } => Some(builder.stroke()),
        }
    }
}
