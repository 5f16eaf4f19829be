//! Line shape.

use super::{ShapeColor, ShapeId, ShapeTrait};
use kurbo::{Line as KurboLine, Point, Vec2};
use uuid::Uuid;

/// A straight segment from `position` to `position + size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub position: Point,
    /// Offset from the start point to the end point.
    pub size: Vec2,
    pub color: ShapeColor,
}

impl Line {
    pub fn new(position: Point, size: Vec2, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            color,
        }
    }

    pub fn start(&self) -> Point {
        self.position
    }

    pub fn end(&self) -> Point {
        self.position + self.size
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start(), self.end())
    }
}

impl ShapeTrait for Line {
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
