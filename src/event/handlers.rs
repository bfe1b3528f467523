use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{EventHandler, SessionEvent};

/// Records every event it receives.
///
/// Clones share the same log, so one clone can be subscribed to a bus while
/// another is kept to inspect what was emitted.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Empty-state values in the order they were emitted
    pub fn empty_states(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::EmptyState(empty) => Some(*empty),
                _ => None,
            })
            .collect()
    }

    /// Drawing-in-progress values in the order they were emitted
    pub fn drawing_states(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::DrawingInProgress(active) => Some(*active),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &SessionEvent) {
        self.events.borrow_mut().push(*event);
    }
}
