/// Notifications emitted by a drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The canvas went from empty to non-empty (`false`) or back (`true`).
    EmptyState(bool),
    /// A gesture started (`true`) or ended (`false`).
    DrawingInProgress(bool),
}
