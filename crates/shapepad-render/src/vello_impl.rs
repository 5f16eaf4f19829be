//! Vello-based renderer implementation.

use crate::renderer::{DrawSurface, RenderContext, Renderer, repaint};
use kurbo::{Affine, Circle, Ellipse, Line, Point, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Logical to physical pixel transform for the current frame.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl DrawSurface for VelloRenderer {
    fn clear(&mut self, viewport: Rect, color: Color) {
        self.scene.reset();
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &viewport);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, &rect);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.scene
            .stroke(&Stroke::new(width), self.transform, color, None, &rect);
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &ellipse);
    }

    fn stroke_ellipse(&mut self, ellipse: Ellipse, color: Color, width: f64) {
        self.scene
            .stroke(&Stroke::new(width), self.transform, color, None, &ellipse);
    }

    fn stroke_line(&mut self, line: Line, color: Color, width: f64) {
        self.scene
            .stroke(&Stroke::new(width), self.transform, color, None, &line);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let circle = Circle::new(center, radius);
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &circle);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.transform = Affine::scale(ctx.scale_factor);
        repaint(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Size, Vec2};
    use shapepad_core::Canvas;
    use shapepad_core::shapes::{Rectangle, Shape, ShapeColor};

    #[test]
    fn test_build_scene_fills_background() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Size::new(100.0, 100.0));
        let mut renderer = VelloRenderer::new();

        assert!(renderer.scene().encoding().is_empty());
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_take_scene_leaves_empty() {
        let mut canvas = Canvas::new();
        canvas.document.add_shape(Shape::Rectangle(Rectangle::new(
            Point::new(10.0, 10.0),
            Vec2::new(20.0, 20.0),
            ShapeColor::black(),
        )));
        let ctx = RenderContext::new(&canvas, Size::new(100.0, 100.0)).with_scale_factor(2.0);
        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx);

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}
