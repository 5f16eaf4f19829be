//! A draw surface that records commands instead of rasterizing them.

use crate::renderer::{DrawSurface, RenderContext, Renderer, repaint};
use kurbo::{Ellipse, Line, Point, Rect};
use peniko::Color;
use shapepad_core::shapes::ShapeColor;

/// One recorded drawing primitive. Colors are kept as RGBA8 so frames compare exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { viewport: Rect, color: ShapeColor },
    FillRect { rect: Rect, color: ShapeColor },
    StrokeRect { rect: Rect, color: ShapeColor, width: f64 },
    FillEllipse { ellipse: Ellipse, color: ShapeColor },
    StrokeEllipse { ellipse: Ellipse, color: ShapeColor, width: f64 },
    StrokeLine { line: Line, color: ShapeColor, width: f64 },
    FillCircle { center: Point, radius: f64, color: ShapeColor },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, viewport: Rect, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            viewport,
            color: color.into(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.into(),
            width,
        });
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            ellipse,
            color: color.into(),
        });
    }

    fn stroke_ellipse(&mut self, ellipse: Ellipse, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeEllipse {
            ellipse,
            color: color.into(),
            width,
        });
    }

    fn stroke_line(&mut self, line: Line, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            line,
            color: color.into(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.into(),
        });
    }
}

impl Renderer for RecordingSurface {
    fn build_scene(&mut self, ctx: &RenderContext) {
        repaint(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use shapepad_core::Canvas;

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        surface.clear(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_build_scene_repaints() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Size::new(10.0, 10.0))
            .with_background(Color::from_rgba8(1, 2, 3, 255));
        let mut surface = RecordingSurface::new();
        surface.build_scene(&ctx);
        surface.build_scene(&ctx);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::Clear {
                viewport: Rect::new(0.0, 0.0, 10.0, 10.0),
                color: ShapeColor::rgb(1, 2, 3),
            }]
        );
    }
}
