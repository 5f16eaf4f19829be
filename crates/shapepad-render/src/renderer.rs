//! Renderer trait abstraction.

use kurbo::{Ellipse, Line, Point, Rect, Size};
use peniko::Color;
use shapepad_core::canvas::Canvas;
use shapepad_core::shapes::Shape;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Radius of the dot marking the start of a selected line.
pub const SELECTION_MARKER_RADIUS: f64 = 5.0;

/// Default outline color for the selected shape.
pub const DEFAULT_SELECTION_COLOR: Color = Color::from_rgba8(59, 130, 246, 255);

/// Default stroke width for lines and outlines.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Outline color for the selected shape.
    pub selection_color: Color,
    /// Width of lines and outlines.
    pub stroke_width: f64,
    /// Prototype drawn next to the pointer in drawing mode.
    pub cursor_icon: Option<Shape>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::WHITE,
            selection_color: DEFAULT_SELECTION_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            cursor_icon: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_cursor_icon(mut self, icon: Option<Shape>) -> Self {
        self.cursor_icon = icon;
        self
    }

    fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            stroke_width: self.stroke_width,
            selection_color: self.selection_color,
        }
    }
}

/// Primitive drawing operations a backend provides, in logical coordinates.
pub trait DrawSurface {
    /// Fill `viewport` with `color`, discarding previous content.
    fn clear(&mut self, viewport: Rect, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color);

    fn stroke_ellipse(&mut self, ellipse: Ellipse, color: Color, width: f64);

    fn stroke_line(&mut self, line: Line, color: Color, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}

/// Stroke settings shared by every shape in a frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub stroke_width: f64,
    pub selection_color: Color,
}

/// Helper trait for shape rendering.
pub trait ShapeRenderer {
    /// Render a shape, outlining it when selected.
    fn render_shape(&mut self, shape: &Shape, selected: bool, style: DrawStyle);
}

impl<S: DrawSurface + ?Sized> ShapeRenderer for S {
    fn render_shape(&mut self, shape: &Shape, selected: bool, style: DrawStyle) {
        let color: Color = shape.color().into();
        match shape {
            Shape::Rectangle(rect) => {
                let bounds = rect.as_rect();
                self.fill_rect(bounds, color);
                if selected {
                    self.stroke_rect(bounds, style.selection_color, style.stroke_width);
                }
            }
            Shape::Ellipse(ellipse) => {
                let ellipse = ellipse.as_kurbo();
                self.fill_ellipse(ellipse, color);
                if selected {
                    self.stroke_ellipse(ellipse, style.selection_color, style.stroke_width);
                }
            }
            Shape::Line(line) => {
                self.stroke_line(line.as_kurbo(), color, style.stroke_width);
                if selected {
                    self.fill_circle(line.start(), SELECTION_MARKER_RADIUS, style.selection_color);
                }
            }
        }
    }
}

/// Full repaint: clear, committed shapes in order, then overlays.
pub fn repaint<S: DrawSurface + ?Sized>(surface: &mut S, ctx: &RenderContext) {
    let viewport = Rect::from_origin_size(Point::ZERO, ctx.viewport_size);
    surface.clear(viewport, ctx.background_color);

    let style = ctx.draw_style();
    for shape in ctx.canvas.document.shapes_ordered() {
        let selected = ctx.canvas.is_selected(shape.id());
        surface.render_shape(shape, selected, style);
    }

    if let Some(preview) = ctx.canvas.tool_manager.preview_shape() {
        surface.render_shape(preview, false, style);
    }

    if let Some(icon) = &ctx.cursor_icon {
        surface.render_shape(icon, false, style);
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use kurbo::Vec2;
    use shapepad_core::shapes::{Ellipse, Rectangle, ShapeColor};
    use shapepad_core::{Controller, MouseButton, Modifiers, PointerEvent, ToolKind};

    fn draw(controller: &mut Controller, tool: ToolKind, from: Point, to: Point) {
        controller.set_tool(tool);
        controller.handle_pointer_event(PointerEvent::Press {
            position: from,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        });
        controller.handle_pointer_event(PointerEvent::Release {
            position: to,
            button: MouseButton::Left,
        });
    }

    fn frame(controller: &Controller) -> Vec<DrawCommand> {
        let ctx = RenderContext::new(&controller.canvas, Size::new(400.0, 300.0))
            .with_cursor_icon(controller.cursor_icon());
        let mut surface = RecordingSurface::new();
        repaint(&mut surface, &ctx);
        surface.into_commands()
    }

    #[test]
    fn test_empty_canvas_only_clears() {
        let controller = Controller::default();
        let commands = frame(&controller);
        assert_eq!(
            commands,
            vec![DrawCommand::Clear {
                viewport: Rect::new(0.0, 0.0, 400.0, 300.0),
                color: ShapeColor::white(),
            }]
        );
    }

    #[test]
    fn test_shapes_painted_in_insertion_order() {
        let mut controller = Controller::default();
        draw(&mut controller, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        draw(&mut controller, ToolKind::Ellipse, Point::new(5.0, 5.0), Point::new(20.0, 20.0));
        draw(&mut controller, ToolKind::Line, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        controller.set_tool(ToolKind::Select);

        let commands = frame(&controller);
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(commands[1], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[2], DrawCommand::FillEllipse { .. }));
        assert!(matches!(commands[3], DrawCommand::StrokeLine { .. }));
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let mut controller = Controller::default();
        draw(&mut controller, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        draw(&mut controller, ToolKind::Line, Point::new(0.0, 0.0), Point::new(30.0, 40.0));

        assert_eq!(frame(&controller), frame(&controller));
    }

    #[test]
    fn test_selected_rectangle_gets_outline() {
        let rect = Rectangle::new(
            Point::new(10.0, 10.0),
            Vec2::new(-5.0, 20.0),
            ShapeColor::rgb(255, 0, 0),
        );
        let style = DrawStyle {
            stroke_width: 5.0,
            selection_color: Color::BLACK,
        };
        let mut surface = RecordingSurface::new();
        surface.render_shape(&Shape::Rectangle(rect), true, style);

        let bounds = Rect::new(5.0, 10.0, 10.0, 30.0);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::FillRect {
                    rect: bounds,
                    color: ShapeColor::rgb(255, 0, 0),
                },
                DrawCommand::StrokeRect {
                    rect: bounds,
                    color: ShapeColor::black(),
                    width: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_selected_ellipse_gets_outline() {
        let ellipse = Ellipse::new(Point::ZERO, Vec2::new(40.0, 20.0), ShapeColor::rgb(0, 128, 0));
        let style = DrawStyle {
            stroke_width: 3.0,
            selection_color: Color::BLACK,
        };
        let mut surface = RecordingSurface::new();
        surface.render_shape(&Shape::Ellipse(ellipse.clone()), true, style);
        surface.render_shape(&Shape::Ellipse(ellipse.clone()), false, style);

        let inscribed = kurbo::Ellipse::from_rect(Rect::new(0.0, 0.0, 40.0, 20.0));
        let fill = DrawCommand::FillEllipse {
            ellipse: inscribed,
            color: ShapeColor::rgb(0, 128, 0),
        };
        assert_eq!(
            surface.commands(),
            &[
                fill.clone(),
                DrawCommand::StrokeEllipse {
                    ellipse: inscribed,
                    color: ShapeColor::black(),
                    width: 3.0,
                },
                fill,
            ]
        );
    }

    #[test]
    fn test_selected_line_gets_start_marker() {
        let mut controller = Controller::default();
        draw(&mut controller, ToolKind::Line, Point::new(10.0, 10.0), Point::new(50.0, 10.0));
        let id = controller.canvas.document.shapes_ordered().map(Shape::id).next();
        if let Some(id) = id {
            controller.canvas.select(id);
        }
        controller.set_tool(ToolKind::Select);

        let commands = frame(&controller);
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::FillCircle { center, radius, .. })
                if *center == Point::new(10.0, 10.0)
                    && (*radius - SELECTION_MARKER_RADIUS).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_preview_and_cursor_overlay_last() {
        let mut controller = Controller::default();
        draw(&mut controller, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        controller.handle_pointer_event(PointerEvent::Press {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        });
        controller.handle_pointer_event(PointerEvent::Drag {
            position: Point::new(150.0, 120.0),
        });

        let commands = frame(&controller);
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(100.0, 100.0, 150.0, 120.0),
                color: ShapeColor::black(),
            }
        );

        controller.handle_pointer_event(PointerEvent::Release {
            position: Point::new(150.0, 120.0),
            button: MouseButton::Left,
        });
        let commands = frame(&controller);
        // Two committed rectangles, then the cursor icon.
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[3],
            DrawCommand::FillRect {
                rect: Rect::new(160.0, 130.0, 180.0, 150.0),
                color: ShapeColor::black(),
            }
        );
    }
}
