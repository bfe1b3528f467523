use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};
use crate::stroke::Stroke;

/// Committed strokes plus the strokes that have been undone.
///
/// A stroke lives in exactly one of the two stacks. Committing always clears
/// the undone stack, and undo/redo move one stroke between the stack tails.
/// Undo and redo on an empty stack are no-ops that report `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStore {
    /// Oldest first
    history: Vec<Stroke>,
    /// Most recently undone last
    #[serde(default)]
    undone: Vec<Stroke>,
}

impl HistoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke and drop the redo timeline.
    pub fn commit(&mut self, stroke: Stroke) {
        self.history.push(stroke);
        self.undone.clear();
        debug!("Committed stroke, {} in history", self.history.len());
    }

    /// Move the newest stroke to the undone stack.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone stroke back into the history.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.history.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn undo_all(&mut self) {
        while self.undo() {}
    }

    pub fn redo_all(&mut self) {
        while self.redo() {}
    }

    /// Forget every undone stroke, so redo does nothing.
    pub fn clear_redo(&mut self) {
        self.undone.clear();
    }

    /// Reset both stacks.
    pub fn start_new(&mut self) {
        self.history.clear();
        self.undone.clear();
    }

    pub fn is_history_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_undone_empty(&self) -> bool {
        self.undone.is_empty()
    }

    /// Number of committed strokes
    pub fn count(&self) -> usize {
        self.history.len()
    }

    /// Number of strokes available to redo
    pub fn undone_count(&self) -> usize {
        self.undone.len()
    }

    pub fn stroke_at(&self, index: usize) -> DrawingResult<&Stroke> {
        self.history.get(index).ok_or(DrawingError::IndexOutOfRange {
            index,
            len: self.history.len(),
        })
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.history
    }

    /// Undone strokes, most recently undone last.
    pub fn undone_strokes(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn to_json(&self) -> DrawingResult<String> {
        serde_json::to_string(self).map_err(|e| DrawingError::Serialization(e.to_string()))
    }

    /// Decode a store. Unknown command kinds and invalid paint fail the load.
    pub fn from_json(json: &str) -> DrawingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
