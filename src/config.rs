use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};
use crate::stroke::validate_stroke_width;

pub const DEFAULT_TOUCH_TOLERANCE: f32 = 4.0;
pub const DEFAULT_PAINT_COLOR: u32 = 0xFF00_0000;
pub const DEFAULT_CANVAS_COLOR: u32 = 0xFFFF_FFFF;
pub const DEFAULT_BRUSH_SIZE: f32 = 8.0;

/// Initial settings for a drawing session.
///
/// Missing keys fall back to their defaults when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Minimum travel on either axis before a move sample is recorded.
    pub touch_tolerance: f32,
    /// Packed ARGB colour for new strokes.
    pub paint_color: u32,
    /// Packed ARGB background colour handed to the renderer.
    pub canvas_color: u32,
    pub brush_size: f32,
    pub is_erasing: bool,
    /// When false, pointer input is ignored.
    pub is_drawing_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            paint_color: DEFAULT_PAINT_COLOR,
            canvas_color: DEFAULT_CANVAS_COLOR,
            brush_size: DEFAULT_BRUSH_SIZE,
            is_erasing: false,
            is_drawing_enabled: true,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> DrawingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> DrawingResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> DrawingResult<()> {
        validate_tolerance(self.touch_tolerance)?;
        validate_stroke_width(self.brush_size)
    }
}

pub(crate) fn validate_tolerance(tolerance: f32) -> DrawingResult<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(DrawingError::Validation(format!(
            "touch tolerance must be a non-negative number, got {}",
            tolerance
        )))
    }
}
