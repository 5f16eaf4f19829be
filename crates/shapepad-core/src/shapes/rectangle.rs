//! Rectangle shape.

use super::{ShapeColor, ShapeId, ShapeTrait, bounding_box};
use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corner the rectangle was drawn from.
    pub position: Point,
    /// Offset to the opposite corner. May be negative.
    pub size: Vec2,
    pub color: ShapeColor,
}

impl Rectangle {
    pub fn new(position: Point, size: Vec2, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            color,
        }
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        bounding_box(self.position, self.size)
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(
            Point::new(10.0, 20.0),
            Vec2::new(100.0, 50.0),
            ShapeColor::black(),
        );
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.size.x - 100.0).abs() < f64::EPSILON);
        assert!((rect.size.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let rect = Rectangle::new(Point::ZERO, Vec2::new(100.0, 100.0), ShapeColor::black());
        assert!(rect.hit_test(Point::new(50.0, 50.0)));
        assert!(!rect.hit_test(Point::new(150.0, 50.0)));
        assert!(!rect.hit_test(Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_hit_test_dragged_up_left() {
        let rect = Rectangle::new(
            Point::new(100.0, 100.0),
            Vec2::new(-50.0, -50.0),
            ShapeColor::black(),
        );
        assert!(rect.hit_test(Point::new(75.0, 75.0)));
        assert!(!rect.hit_test(Point::new(125.0, 125.0)));
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(
            Point::new(10.0, 20.0),
            Vec2::new(100.0, 50.0),
            ShapeColor::black(),
        );
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
