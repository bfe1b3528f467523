use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use crate::path::PathCommand;
use crate::stroke::Stroke;

/// Consumes the command log and paints it.
///
/// The session calls `draw` after every change that affects what is visible.
pub trait Renderer {
    fn draw(&mut self, committed: &[Stroke], in_progress: Option<&Stroke>, background: u32);
}

/// Renderer for headless sessions; draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _committed: &[Stroke], _in_progress: Option<&Stroke>, _background: u32) {}
}

/// Convert a packed `0xAARRGGBB` value to an egui colour.
pub fn argb_to_color32(argb: u32) -> Color32 {
    let [a, r, g, b] = argb.to_be_bytes();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Turns strokes into egui shapes for a fixed viewport.
///
/// egui has no clear blend mode, so eraser strokes are painted in the
/// background colour.
#[derive(Debug, Clone)]
pub struct EguiRenderer {
    viewport: Rect,
    shapes: Vec<Shape>,
    frames: u64,
}

impl EguiRenderer {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            frames: 0,
        }
    }

    /// Shapes produced by the last `draw`, background first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// How many times `draw` has been called
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Hand the last frame to an egui painter.
    pub fn paint(&self, painter: &Painter) {
        painter.extend(self.shapes.iter().cloned());
    }

    fn push_stroke(&mut self, stroke: &Stroke, background: Color32) {
        if !stroke.bounds().intersects(self.viewport) {
            return;
        }

        let paint = stroke.paint();
        let color = if paint.is_erasing() {
            background
        } else {
            argb_to_color32(paint.color())
        };
        let line = EguiStroke::new(paint.stroke_width(), color);

        // Curves without a preceding move start at the origin.
        let mut pen = Pos2::ZERO;
        for command in stroke.commands() {
            match *command {
                PathCommand::Reset => pen = Pos2::ZERO,
                PathCommand::MoveTo { x, y } => pen = Pos2::new(x, y),
                PathCommand::QuadTo { x1, y1, x2, y2 } => {
                    let end = Pos2::new(x2, y2);
                    self.shapes.push(Shape::QuadraticBezier(
                        QuadraticBezierShape::from_points_stroke(
                            [pen, Pos2::new(x1, y1), end],
                            false,
                            Color32::TRANSPARENT,
                            line,
                        ),
                    ));
                    pen = end;
                }
                PathCommand::AddCircle { x, y, radius } => {
                    self.shapes
                        .push(Shape::circle_stroke(Pos2::new(x, y), radius, line));
                }
            }
        }
    }
}

impl Renderer for EguiRenderer {
    fn draw(&mut self, committed: &[Stroke], in_progress: Option<&Stroke>, background: u32) {
        let background = argb_to_color32(background);
        self.shapes.clear();
        self.shapes
            .push(Shape::rect_filled(self.viewport, 0.0, background));

        for stroke in committed.iter().chain(in_progress) {
            self.push_stroke(stroke, background);
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::PaintStyle;
    use egui::{pos2, vec2};

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
    }

    fn paint(color: u32, erasing: bool) -> PaintStyle {
        PaintStyle::new(color, 4.0, erasing).unwrap()
    }

    #[test]
    fn test_argb_conversion() {
        assert_eq!(argb_to_color32(0xFF00_0000), Color32::BLACK);
        assert_eq!(argb_to_color32(0xFFFF_FFFF), Color32::WHITE);
        assert_eq!(argb_to_color32(0xFFFF_0000), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_draw_builds_curves_and_dots() {
        let curve = Stroke::new(
            paint(0xFFFF_0000, false),
            vec![
                PathCommand::Reset,
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::QuadTo { x1: 0.0, y1: 0.0, x2: 5.0, y2: 5.0 },
            ],
        );
        let dot = Stroke::new(
            paint(0xFF00_00FF, false),
            vec![
                PathCommand::Reset,
                PathCommand::MoveTo { x: 50.0, y: 50.0 },
                PathCommand::AddCircle { x: 50.0, y: 50.0, radius: 0.1 },
            ],
        );

        let mut renderer = EguiRenderer::new(viewport());
        renderer.draw(&[curve], Some(&dot), 0xFFFF_FFFF);

        let shapes = renderer.shapes();
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Rect(_)));
        match &shapes[1] {
            Shape::QuadraticBezier(bezier) => {
                assert_eq!(bezier.points, [pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(5.0, 5.0)]);
            }
            other => panic!("expected a curve, got {:?}", other),
        }
        match &shapes[2] {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, pos2(50.0, 50.0));
                assert_eq!(circle.stroke.color, Color32::from_rgb(0, 0, 255));
            }
            other => panic!("expected a dot, got {:?}", other),
        }
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn test_eraser_uses_background() {
        let eraser = Stroke::new(
            paint(0xFFFF_0000, true),
            vec![
                PathCommand::Reset,
                PathCommand::MoveTo { x: 10.0, y: 10.0 },
                PathCommand::AddCircle { x: 10.0, y: 10.0, radius: 0.1 },
            ],
        );

        let mut renderer = EguiRenderer::new(viewport());
        renderer.draw(&[eraser], None, 0xFF00_FF00);

        match &renderer.shapes()[1] {
            Shape::Circle(circle) => {
                assert_eq!(circle.stroke.color, Color32::from_rgb(0, 255, 0));
            }
            other => panic!("expected a dot, got {:?}", other),
        }
    }

    #[test]
    fn test_offscreen_strokes_are_culled() {
        let offscreen = Stroke::new(
            paint(0xFF00_0000, false),
            vec![
                PathCommand::Reset,
                PathCommand::MoveTo { x: 500.0, y: 500.0 },
                PathCommand::AddCircle { x: 500.0, y: 500.0, radius: 0.1 },
            ],
        );

        let mut renderer = EguiRenderer::new(viewport());
        renderer.draw(&[offscreen], None, 0xFFFF_FFFF);
        assert_eq!(renderer.shapes().len(), 1);
    }

    #[test]
    fn test_paint_onto_painter() {
        let ctx = egui::Context::default();
        let painter = Painter::new(ctx, egui::LayerId::background(), viewport());

        let mut renderer = EguiRenderer::new(viewport());
        renderer.draw(&[], None, 0xFFFF_FFFF);
        renderer.paint(&painter);
    }
}
