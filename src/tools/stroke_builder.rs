use log::trace;

use crate::path::{PathCommand, TAP_DOT_RADIUS};
use crate::stroke::{PaintStyle, Stroke};

/// Builds one stroke's command log from raw pointer samples.
///
/// Samples closer than the tolerance to the last recorded point are dropped,
/// and every recorded sample becomes a quadratic segment whose control point
/// is the previous sample and whose end is the midpoint between the two.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    stroke: Stroke,
    reference: (f32, f32),
    moved: bool,
}

impl StrokeBuilder {
    /// Start a stroke at the press point with a snapshot of the paint.
    pub fn begin(x: f32, y: f32, paint: PaintStyle) -> Self {
        let mut stroke = Stroke::empty(paint);
        stroke.push(PathCommand::Reset);
        stroke.push(PathCommand::MoveTo { x, y });
        Self {
            stroke,
            reference: (x, y),
            moved: false,
        }
    }

    /// Feed a move sample. Returns true if a curve segment was recorded.
    pub fn extend(&mut self, x: f32, y: f32, tolerance: f32) -> bool {
        let (ref_x, ref_y) = self.reference;
        let dx = (x - ref_x).abs();
        let dy = (y - ref_y).abs();

        if dx < tolerance && dy < tolerance {
            trace!("Dropped sample ({}, {}) within tolerance {}", x, y, tolerance);
            return false;
        }

        self.stroke.push(PathCommand::QuadTo {
            x1: ref_x,
            y1: ref_y,
            x2: (x + ref_x) / 2.0,
            y2: (y + ref_y) / 2.0,
        });
        self.reference = (x, y);
        self.moved = true;
        true
    }

    /// Finish the stroke at the release point.
    ///
    /// A release on the press point with no recorded movement becomes a tap
    /// dot, so the gesture stays visible.
    pub fn end(mut self, x: f32, y: f32) -> Stroke {
        if !self.moved && self.reference == (x, y) {
            self.stroke.push(PathCommand::AddCircle {
                x,
                y,
                radius: TAP_DOT_RADIUS,
            });
        }
        self.stroke
    }

    /// The stroke as built so far, for previewing.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// True once any sample got past the tolerance.
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
