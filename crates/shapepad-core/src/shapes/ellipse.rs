//! Ellipse shape.

use super::{ShapeColor, ShapeId, ShapeTrait, bounding_box};
use kurbo::{Ellipse as KurboEllipse, Point, Vec2};
use uuid::Uuid;

/// An ellipse inscribed in its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Corner of the bounding box the ellipse was drawn from.
    pub position: Point,
    /// Offset to the opposite corner of the bounding box. May be negative.
    pub size: Vec2,
    pub color: ShapeColor,
}

impl Ellipse {
    pub fn new(position: Point, size: Vec2, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            color,
        }
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(bounding_box(self.position, self.size))
    }
}

impl ShapeTrait for Ellipse {
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
