//! Shape definitions for the drawing canvas.

mod ellipse;
mod line;
mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use uuid::Uuid;

/// Size of a prototype shape, used for the cursor icon.
pub const PROTOTYPE_SIZE: Vec2 = Vec2::new(20.0, 20.0);

/// Default extent of a freshly summoned shape.
pub const SUMMON_SIZE: Vec2 = Vec2::new(50.0, 50.0);

/// Offset applied to a cloned shape so it does not cover the source.
pub const CLONE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Fill color of a shape (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Which variant a shape (or a tool) produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

/// Axis-aligned box spanned by `position` and `position + size`.
///
/// Negative size components are normalized, so the result always has
/// `x0 <= x1` and `y0 <= y1`.
pub fn bounding_box(position: Point, size: Vec2) -> Rect {
    Rect::from_points(position, position + size)
}

/// Strict containment: points on the edge are outside.
///
/// A box with zero width or height contains nothing.
pub fn strictly_contains(rect: Rect, point: Point) -> bool {
    point.x > rect.x0 && point.x < rect.x1 && point.y > rect.y0 && point.y < rect.y1
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Origin of the bounding box.
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    /// Offset from the origin to the opposite corner (or end point).
    fn size(&self) -> Vec2;

    fn set_size(&mut self, size: Vec2);

    fn color(&self) -> ShapeColor;

    fn set_color(&mut self, color: ShapeColor);

    /// Normalized bounding box.
    fn bounds(&self) -> Rect {
        bounding_box(self.position(), self.size())
    }

    /// Check if a point strictly falls inside the bounding box.
    fn hit_test(&self, point: Point) -> bool {
        strictly_contains(self.bounds(), point)
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
}

impl Shape {
    /// Prototype of the given kind: no meaningful position, icon-sized.
    pub fn prototype(kind: ShapeKind, color: ShapeColor) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line(Line::new(Point::ZERO, PROTOTYPE_SIZE, color)),
            ShapeKind::Ellipse => {
                Shape::Ellipse(Ellipse::new(Point::ZERO, PROTOTYPE_SIZE, color))
            }
            ShapeKind::Rectangle => {
                Shape::Rectangle(Rectangle::new(Point::ZERO, PROTOTYPE_SIZE, color))
            }
        }
    }

    /// Place a new instance of this shape's kind at `at`.
    ///
    /// The instance gets a fresh id, `SUMMON_SIZE` and this shape's color.
    pub fn summon(&self, at: Point) -> Self {
        let color = self.color();
        match self {
            Shape::Line(_) => Shape::Line(Line::new(at, SUMMON_SIZE, color)),
            Shape::Ellipse(_) => Shape::Ellipse(Ellipse::new(at, SUMMON_SIZE, color)),
            Shape::Rectangle(_) => Shape::Rectangle(Rectangle::new(at, SUMMON_SIZE, color)),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Shape::Line(s) => s.position(),
            Shape::Ellipse(s) => s.position(),
            Shape::Rectangle(s) => s.position(),
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Shape::Line(s) => s.set_position(position),
            Shape::Ellipse(s) => s.set_position(position),
            Shape::Rectangle(s) => s.set_position(position),
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            Shape::Line(s) => s.size(),
            Shape::Ellipse(s) => s.size(),
            Shape::Rectangle(s) => s.size(),
        }
    }

    pub fn set_size(&mut self, size: Vec2) {
        match self {
            Shape::Line(s) => s.set_size(size),
            Shape::Ellipse(s) => s.set_size(size),
            Shape::Rectangle(s) => s.set_size(size),
        }
    }

    pub fn color(&self) -> ShapeColor {
        match self {
            Shape::Line(s) => s.color(),
            Shape::Ellipse(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
        }
    }

    pub fn set_color(&mut self, color: ShapeColor) {
        match self {
            Shape::Line(s) => s.set_color(color),
            Shape::Ellipse(s) => s.set_color(color),
            Shape::Rectangle(s) => s.set_color(color),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point),
            Shape::Ellipse(s) => s.hit_test(point),
            Shape::Rectangle(s) => s.hit_test(point),
        }
    }

    /// Move the shape by `delta`, keeping its size.
    pub fn translate(&mut self, delta: Vec2) {
        let position = self.position() + delta;
        self.set_position(position);
    }

    /// Regenerate the shape's ID with a new unique identifier.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Line(s) => s.id = new_id,
            Shape::Ellipse(s) => s.id = new_id,
            Shape::Rectangle(s) => s.id = new_id,
        }
    }

    /// Copy of this shape moved by `offset`, with a fresh id.
    pub fn duplicate(&self, offset: Vec2) -> Self {
        let mut copy = self.clone();
        copy.regenerate_id();
        copy.translate(offset);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_normalizes_negative_size() {
        let rect = bounding_box(Point::new(100.0, 100.0), Vec2::new(-40.0, -20.0));
        assert!((rect.x0 - 60.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 80.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 100.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strict_containment() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(strictly_contains(rect, Point::new(5.0, 5.0)));
        assert!(!strictly_contains(rect, Point::new(0.0, 5.0)));
        assert!(!strictly_contains(rect, Point::new(10.0, 5.0)));
        assert!(!strictly_contains(rect, Point::new(5.0, 10.0)));
        assert!(!strictly_contains(rect, Point::new(11.0, 5.0)));
    }

    #[test]
    fn test_zero_area_contains_nothing() {
        let rect = bounding_box(Point::new(5.0, 5.0), Vec2::new(0.0, 30.0));
        assert!(!strictly_contains(rect, Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_prototype_is_icon_sized() {
        let proto = Shape::prototype(ShapeKind::Ellipse, ShapeColor::black());
        assert_eq!(proto.kind(), ShapeKind::Ellipse);
        assert_eq!(proto.size(), PROTOTYPE_SIZE);
    }

    #[test]
    fn test_summon_keeps_kind_and_color() {
        let red = ShapeColor::rgb(255, 0, 0);
        let proto = Shape::prototype(ShapeKind::Rectangle, red);
        let placed = proto.summon(Point::new(12.0, 34.0));

        assert_eq!(placed.kind(), ShapeKind::Rectangle);
        assert_eq!(placed.color(), red);
        assert_eq!(placed.position(), Point::new(12.0, 34.0));
        assert_eq!(placed.size(), SUMMON_SIZE);
        assert_ne!(placed.id(), proto.id());
    }

    #[test]
    fn test_duplicate_gets_fresh_id_and_offset() {
        let shape = Shape::prototype(ShapeKind::Line, ShapeColor::black()).summon(Point::ZERO);
        let copy = shape.duplicate(CLONE_OFFSET);

        assert_ne!(copy.id(), shape.id());
        assert_eq!(copy.position(), Point::new(20.0, 20.0));
        assert_eq!(copy.size(), shape.size());
        assert_eq!(copy.color(), shape.color());
    }

    #[test]
    fn test_color_roundtrip_through_peniko() {
        let color = ShapeColor::new(10, 20, 30, 255);
        let peniko: Color = color.into();
        assert_eq!(ShapeColor::from(peniko), color);
    }
}
