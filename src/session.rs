use log::{debug, warn};

use crate::config::{SessionConfig, validate_tolerance};
use crate::error::DrawingResult;
use crate::event::{EventBus, EventHandler, SessionEvent};
use crate::history::HistoryStore;
use crate::renderer::{NullRenderer, Renderer};
use crate::state::SessionState;
use crate::stroke::{PaintStyle, Stroke, validate_stroke_width};
use crate::tools::StrokeBuilder;

/// Ties pointer input to the stroke builder and the history store.
///
/// Events must arrive in the order they happened: a press, any number of
/// moves, then a release. Events that do not fit the current state are
/// ignored and reported as not consumed. History operations are only
/// honoured between gestures.
///
/// The session runs on the thread that owns the drawing surface; hosts that
/// share it across threads must lock around the whole session.
#[derive(Debug)]
pub struct DrawingSession<R: Renderer = NullRenderer> {
    history: HistoryStore,
    state: SessionState,
    config: SessionConfig,
    events: EventBus,
    renderer: R,
}

impl DrawingSession<NullRenderer> {
    /// A session with nothing attached to paint on.
    pub fn new(config: SessionConfig) -> DrawingResult<Self> {
        Self::with_renderer(config, NullRenderer)
    }
}

impl<R: Renderer> DrawingSession<R> {
    pub fn with_renderer(config: SessionConfig, renderer: R) -> DrawingResult<Self> {
        config.validate()?;
        Ok(Self {
            history: HistoryStore::new(),
            state: SessionState::Idle,
            config,
            events: EventBus::new(),
            renderer,
        })
    }

    /// Register an observer for empty-state and drawing-in-progress events.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    // Pointer input

    /// Pointer went down. Drops the redo timeline and starts a stroke.
    pub fn on_press(&mut self, x: f32, y: f32) -> bool {
        if !self.config.is_drawing_enabled {
            return false;
        }
        if self.state.is_tracking() {
            warn!("Ignoring press at ({}, {}) while a gesture is in progress", x, y);
            return false;
        }

        self.history.clear_redo();
        let builder = StrokeBuilder::begin(x, y, self.paint_style());
        self.state = SessionState::Tracking { builder };
        debug!("Gesture started at ({}, {})", x, y);

        self.events.emit(SessionEvent::DrawingInProgress(true));
        self.repaint();
        true
    }

    /// Pointer moved while down.
    pub fn on_move(&mut self, x: f32, y: f32) -> bool {
        if !self.config.is_drawing_enabled {
            return false;
        }
        let tolerance = self.config.touch_tolerance;
        let SessionState::Tracking { builder } = &mut self.state else {
            warn!("Ignoring move to ({}, {}) with no gesture in progress", x, y);
            return false;
        };

        if builder.extend(x, y, tolerance) {
            self.repaint();
        }
        true
    }

    /// Pointer went up. Finishes the stroke and commits it.
    pub fn on_release(&mut self, x: f32, y: f32) -> bool {
        if !self.config.is_drawing_enabled {
            return false;
        }
        let SessionState::Tracking { builder } = std::mem::take(&mut self.state) else {
            warn!("Ignoring release at ({}, {}) with no gesture in progress", x, y);
            return false;
        };

        let stroke = builder.end(x, y);
        debug!(
            "Gesture ended at ({}, {}) with {} commands",
            x,
            y,
            stroke.commands().len()
        );

        let was_empty = self.history.is_history_empty();
        self.history.commit(stroke);
        if was_empty && !self.history.is_history_empty() {
            self.events.emit(SessionEvent::EmptyState(false));
        }
        self.events.emit(SessionEvent::DrawingInProgress(false));
        self.repaint();
        true
    }

    /// Abandon the gesture in progress without committing it.
    pub fn invalidate_in_progress(&mut self) {
        if let SessionState::Tracking { .. } = std::mem::take(&mut self.state) {
            debug!("Gesture cancelled");
            self.events.emit(SessionEvent::DrawingInProgress(false));
            self.repaint();
        }
    }

    // History

    /// Clear the canvas and both history stacks.
    pub fn start_new(&mut self) {
        if self.refuse_while_tracking("start_new") {
            return;
        }
        self.history.start_new();
        self.events.emit(SessionEvent::EmptyState(true));
        self.repaint();
    }

    pub fn undo(&mut self) -> bool {
        if self.refuse_while_tracking("undo") || !self.history.undo() {
            return false;
        }
        if self.history.is_history_empty() {
            self.events.emit(SessionEvent::EmptyState(true));
        }
        self.repaint();
        true
    }

    /// Undo everything. Looks like `start_new`, but `redo_all` can bring it back.
    pub fn undo_all(&mut self) {
        if self.refuse_while_tracking("undo_all") || self.history.is_history_empty() {
            return;
        }
        self.history.undo_all();
        self.events.emit(SessionEvent::EmptyState(true));
        self.repaint();
    }

    /// Redo the last undone stroke. Leaving an empty canvas emits
    /// `EmptyState(false)`.
    pub fn redo(&mut self) -> bool {
        if self.refuse_while_tracking("redo") || !self.history.redo() {
            return false;
        }
        if self.history.count() == 1 {
            self.events.emit(SessionEvent::EmptyState(false));
        }
        self.repaint();
        true
    }

    pub fn redo_all(&mut self) {
        if self.refuse_while_tracking("redo_all") || self.history.is_undone_empty() {
            return;
        }
        let was_empty = self.history.is_history_empty();
        self.history.redo_all();
        if was_empty {
            self.events.emit(SessionEvent::EmptyState(false));
        }
        self.repaint();
    }

    /// Forget undone strokes so redo does nothing.
    pub fn clear_redo(&mut self) {
        if self.refuse_while_tracking("clear_redo") {
            return;
        }
        self.history.clear_redo();
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Replace the whole history, e.g. with one loaded from storage.
    pub fn set_state(&mut self, history: HistoryStore) {
        if self.refuse_while_tracking("set_state") {
            return;
        }
        let was_empty = self.history.is_history_empty();
        self.history = history;
        let is_empty = self.history.is_history_empty();
        if was_empty != is_empty {
            self.events.emit(SessionEvent::EmptyState(is_empty));
        }
        self.repaint();
    }

    pub fn is_drawing_empty(&self) -> bool {
        self.history.is_history_empty()
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    /// The stroke being drawn right now, if any
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.state.in_progress()
    }

    // Settings. Each takes effect from the next gesture; the stroke in
    // progress keeps the paint it started with.

    /// Paint that the next gesture will be drawn with.
    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle::from_validated(
            self.config.paint_color,
            self.config.brush_size,
            self.config.is_erasing,
        )
    }

    /// Sets the stroke colour and repaints.
    pub fn set_paint_color(&mut self, color: u32) {
        self.config.paint_color = color;
        self.repaint();
    }

    pub fn paint_color(&self) -> u32 {
        self.config.paint_color
    }

    /// Sets the background colour and repaints.
    pub fn set_canvas_color(&mut self, color: u32) {
        self.config.canvas_color = color;
        self.repaint();
    }

    pub fn canvas_color(&self) -> u32 {
        self.config.canvas_color
    }

    pub fn set_brush_size(&mut self, size: f32) -> DrawingResult<()> {
        validate_stroke_width(size)?;
        self.config.brush_size = size;
        Ok(())
    }

    pub fn brush_size(&self) -> f32 {
        self.config.brush_size
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.config.is_erasing = erasing;
    }

    pub fn is_erasing(&self) -> bool {
        self.config.is_erasing
    }

    pub fn set_touch_tolerance(&mut self, tolerance: f32) -> DrawingResult<()> {
        validate_tolerance(tolerance)?;
        self.config.touch_tolerance = tolerance;
        Ok(())
    }

    pub fn touch_tolerance(&self) -> f32 {
        self.config.touch_tolerance
    }

    /// Turning drawing off ignores further input and cancels the gesture in
    /// progress.
    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        self.config.is_drawing_enabled = enabled;
        if !enabled {
            self.invalidate_in_progress();
        }
    }

    pub fn is_drawing_enabled(&self) -> bool {
        self.config.is_drawing_enabled
    }

    // Rendering

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Ask the renderer to draw the current history and stroke in progress.
    pub fn repaint(&mut self) {
        self.renderer.draw(
            self.history.strokes(),
            self.state.in_progress(),
            self.config.canvas_color,
        );
    }

    fn refuse_while_tracking(&self, operation: &str) -> bool {
        if self.state.is_tracking() {
            warn!("Ignoring {} while a gesture is in progress", operation);
            return true;
        }
        false
    }
}
