use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};
use crate::path::PathCommand;

/// Paint applied to a whole stroke.
///
/// `color` is a packed ARGB value (`0xAARRGGBB`). When `is_erasing` is set the
/// stroke clears what lies beneath it instead of painting over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPaintStyle")]
pub struct PaintStyle {
    color: u32,
    stroke_width: f32,
    is_erasing: bool,
}

impl PaintStyle {
    /// Create a paint style, rejecting widths that are not finite and positive.
    pub fn new(color: u32, stroke_width: f32, is_erasing: bool) -> DrawingResult<Self> {
        validate_stroke_width(stroke_width)?;
        Ok(Self::from_validated(color, stroke_width, is_erasing))
    }

    /// For values the caller has already validated.
    pub(crate) fn from_validated(color: u32, stroke_width: f32, is_erasing: bool) -> Self {
        Self {
            color,
            stroke_width,
            is_erasing,
        }
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_erasing(&self) -> bool {
        self.is_erasing
    }
}

/// Paint as stored, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaintStyle {
    color: u32,
    stroke_width: f32,
    is_erasing: bool,
}

impl TryFrom<RawPaintStyle> for PaintStyle {
    type Error = DrawingError;

    fn try_from(raw: RawPaintStyle) -> DrawingResult<Self> {
        Self::new(raw.color, raw.stroke_width, raw.is_erasing)
    }
}

pub(crate) fn validate_stroke_width(width: f32) -> DrawingResult<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(DrawingError::Validation(format!(
            "stroke width must be a positive number, got {}",
            width
        )))
    }
}

/// One freehand gesture: an ordered command log plus the paint it was drawn with.
///
/// Only the stroke builder appends commands; once a stroke has been handed
/// to the history it is never changed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    paint: PaintStyle,
    commands: Vec<PathCommand>,
}

impl Stroke {
    /// Create a stroke from an already built command log.
    pub fn new(paint: PaintStyle, commands: Vec<PathCommand>) -> Self {
        Self { paint, commands }
    }

    pub(crate) fn empty(paint: PaintStyle) -> Self {
        Self::new(paint, Vec::new())
    }

    pub(crate) fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn paint(&self) -> &PaintStyle {
        &self.paint
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding box of every point the stroke touches, padded by half the
    /// stroke width. Returns `Rect::NOTHING` when nothing has been drawn.
    pub fn bounds(&self) -> Rect {
        let mut min = Pos2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Pos2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut include = |x: f32, y: f32, extent: f32| {
            min.x = min.x.min(x - extent);
            min.y = min.y.min(y - extent);
            max.x = max.x.max(x + extent);
            max.y = max.y.max(y + extent);
        };

        for command in &self.commands {
            match *command {
                PathCommand::Reset => {}
                PathCommand::MoveTo { x, y } => include(x, y, 0.0),
                PathCommand::QuadTo { x1, y1, x2, y2 } => {
                    include(x1, y1, 0.0);
                    include(x2, y2, 0.0);
                }
                PathCommand::AddCircle { x, y, radius } => include(x, y, radius),
            }
        }

        if min.x > max.x || min.y > max.y {
            return Rect::NOTHING;
        }

        let padding = self.paint.stroke_width / 2.0;
        Rect::from_min_max(
            Pos2::new(min.x - padding, min.y - padding),
            Pos2::new(max.x + padding, max.y + padding),
        )
    }
}
