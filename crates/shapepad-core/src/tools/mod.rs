//! Tool system: which mode is active and the drawing gesture in progress.

use crate::shapes::{SUMMON_SIZE, Shape, ShapeColor, ShapeKind};
use kurbo::Point;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Ellipse,
    Rectangle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Select,
        ToolKind::Line,
        ToolKind::Ellipse,
        ToolKind::Rectangle,
    ];

    /// Shape kind this tool draws, `None` for the select tool.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Line => "Line",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Rectangle => "Rectangle",
        }
    }
}

/// State of a drawing interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Waiting for a press.
    #[default]
    Idle,
    /// A shape has been summoned and follows the pointer until release.
    Placing {
        /// The shape that will be committed on release.
        shape: Shape,
        /// Press point, also the shape's position.
        origin: Point,
        /// Set by the first drag; a release without one is a plain click.
        dragged: bool,
    },
}

/// Manages the current tool, the armed prototype and the gesture state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Template for new shapes. Present only in drawing mode.
    prototype: Option<Shape>,
}

impl ToolManager {
    /// Create a new tool manager in select mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool.
    ///
    /// Drawing tools arm a prototype carrying `color`. The select tool
    /// disarms it. Any placement in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind, color: ShapeColor) {
        self.current_tool = tool;
        self.prototype = tool.shape_kind().map(|kind| Shape::prototype(kind, color));
        self.state = ToolState::Idle;
    }

    pub fn prototype(&self) -> Option<&Shape> {
        self.prototype.as_ref()
    }

    /// True when a drawing tool is armed.
    pub fn is_drawing_mode(&self) -> bool {
        self.prototype.is_some()
    }

    /// Re-snapshot the prototype color.
    pub fn refresh_prototype_color(&mut self, color: ShapeColor) {
        if let Some(proto) = &mut self.prototype {
            proto.set_color(color);
        }
    }

    /// Begin placing a shape at `point`.
    ///
    /// Returns false when no prototype is armed.
    pub fn begin(&mut self, point: Point, color: ShapeColor) -> bool {
        self.refresh_prototype_color(color);
        let Some(proto) = &self.prototype else {
            return false;
        };
        self.state = ToolState::Placing {
            shape: proto.summon(point),
            origin: point,
            dragged: false,
        };
        true
    }

    /// Stretch the shape being placed so its far corner follows `point`.
    pub fn update(&mut self, point: Point) {
        if let ToolState::Placing {
            shape,
            origin,
            dragged,
        } = &mut self.state
        {
            shape.set_size(point - *origin);
            *dragged = true;
        }
    }

    /// Finish placing and hand back the shape to commit.
    ///
    /// A click with no drag keeps the summoned default size.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            ToolState::Placing {
                mut shape,
                origin,
                dragged,
            } => {
                if dragged || point != origin {
                    shape.set_size(point - origin);
                } else {
                    shape.set_size(SUMMON_SIZE);
                }
                Some(shape)
            }
            ToolState::Idle => None,
        }
    }

    /// Cancel the current interaction.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a placement is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Placing { .. })
    }

    /// Get the shape being placed, if any.
    pub fn preview_shape(&self) -> Option<&Shape> {
        match &self.state {
            ToolState::Placing { shape, .. } => Some(shape),
            ToolState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.current_tool, ToolKind::Select);
        assert!(!tm.is_drawing_mode());

        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());
        assert_eq!(tm.current_tool, ToolKind::Rectangle);
        assert!(tm.is_drawing_mode());
        assert_eq!(tm.prototype().map(Shape::kind), Some(ShapeKind::Rectangle));

        tm.set_tool(ToolKind::Select, ShapeColor::black());
        assert!(!tm.is_drawing_mode());
        assert!(tm.prototype().is_none());
    }

    #[test]
    fn test_exactly_one_tool_active() {
        let mut tm = ToolManager::new();
        for tool in [
            ToolKind::Line,
            ToolKind::Select,
            ToolKind::Ellipse,
            ToolKind::Ellipse,
            ToolKind::Rectangle,
        ] {
            tm.set_tool(tool, ShapeColor::black());
            let active = ToolKind::ALL
                .iter()
                .filter(|t| **t == tm.current_tool)
                .count();
            assert_eq!(active, 1);
            assert_eq!(tm.is_drawing_mode(), tool != ToolKind::Select);
        }
    }

    #[test]
    fn test_tool_interaction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());

        assert!(!tm.is_active());

        assert!(tm.begin(Point::new(10.0, 10.0), ShapeColor::black()));
        assert!(tm.is_active());

        tm.update(Point::new(40.0, 50.0));
        let preview = tm.preview_shape().map(Shape::size);
        assert_eq!(preview, Some(Vec2::new(30.0, 40.0)));

        let shape = tm.end(Point::new(60.0, 80.0));
        assert!(!tm.is_active());
        let shape = shape.map(|s| (s.position(), s.size()));
        assert_eq!(shape, Some((Point::new(10.0, 10.0), Vec2::new(50.0, 70.0))));
    }

    #[test]
    fn test_click_without_drag_keeps_default_size() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Ellipse, ShapeColor::black());

        tm.begin(Point::new(5.0, 5.0), ShapeColor::black());
        let shape = tm.end(Point::new(5.0, 5.0));
        assert_eq!(shape.map(|s| s.size()), Some(SUMMON_SIZE));
    }

    #[test]
    fn test_drag_back_to_origin_commits_dragged_extent() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());

        tm.begin(Point::new(10.0, 10.0), ShapeColor::black());
        tm.update(Point::new(200.0, 200.0));
        tm.update(Point::new(10.0, 10.0));
        assert_eq!(tm.preview_shape().map(Shape::size), Some(Vec2::ZERO));

        let shape = tm.end(Point::new(10.0, 10.0));
        assert_eq!(shape.map(|s| s.size()), Some(Vec2::ZERO));
    }

    #[test]
    fn test_begin_uses_current_color() {
        let red = ShapeColor::rgb(255, 0, 0);
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Line, ShapeColor::black());

        tm.begin(Point::ZERO, red);
        assert_eq!(tm.preview_shape().map(Shape::color), Some(red));
        assert_eq!(tm.prototype().map(Shape::color), Some(red));
    }

    #[test]
    fn test_drag_while_idle_is_noop() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());

        tm.update(Point::new(50.0, 50.0));
        assert!(tm.preview_shape().is_none());
        assert!(tm.end(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_cancel_interaction() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());

        tm.begin(Point::new(0.0, 0.0), ShapeColor::black());
        assert!(tm.is_active());

        tm.cancel();
        assert!(!tm.is_active());
    }

    #[test]
    fn test_select_tool_no_shape() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Select, ShapeColor::black());

        assert!(!tm.begin(Point::new(0.0, 0.0), ShapeColor::black()));
        let shape = tm.end(Point::new(100.0, 100.0));
        assert!(shape.is_none());
    }

    #[test]
    fn test_switching_tool_drops_placement() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle, ShapeColor::black());
        tm.begin(Point::ZERO, ShapeColor::black());

        tm.set_tool(ToolKind::Line, ShapeColor::black());
        assert!(!tm.is_active());
    }
}
