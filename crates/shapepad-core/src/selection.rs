//! Manipulation of the selected shape by dragging.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Vec2};

/// What a drag on the selected shape does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManipulationKind {
    /// Translate the shape, keeping the grab offset.
    Move,
    /// Grow or shrink the shape by the drag delta.
    Resize,
}

/// A drag in progress on the selected shape.
#[derive(Debug, Clone)]
pub struct ManipulationState {
    /// The shape being manipulated.
    pub shape_id: ShapeId,
    pub kind: ManipulationKind,
    /// Starting point of the drag.
    pub start_point: Point,
    /// Current point of the drag.
    pub current_point: Point,
    /// Shape as it was when the drag began.
    pub original_shape: Shape,
}

impl ManipulationState {
    /// Create a new manipulation state.
    pub fn new(kind: ManipulationKind, start_point: Point, original_shape: Shape) -> Self {
        Self {
            shape_id: original_shape.id(),
            kind,
            start_point,
            current_point: start_point,
            original_shape,
        }
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Record the pointer and return the shape as it should now look.
    pub fn update(&mut self, point: Point) -> Shape {
        self.current_point = point;
        let delta = self.delta();
        let mut shape = self.original_shape.clone();
        match self.kind {
            ManipulationKind::Move => shape.translate(delta),
            ManipulationKind::Resize => shape.set_size(self.original_shape.size() + delta),
        }
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeColor, ShapeKind};

    fn placed_rect() -> Shape {
        let mut shape = Shape::prototype(ShapeKind::Rectangle, ShapeColor::black())
            .summon(Point::new(100.0, 100.0));
        shape.set_size(Vec2::new(40.0, 30.0));
        shape
    }

    #[test]
    fn test_move_keeps_grab_offset() {
        let shape = placed_rect();
        let mut state = ManipulationState::new(ManipulationKind::Move, Point::new(110.0, 120.0), shape);

        let moved = state.update(Point::new(150.0, 125.0));
        assert_eq!(moved.position(), Point::new(140.0, 105.0));
        assert_eq!(moved.size(), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn test_resize_adds_delta_to_size() {
        let shape = placed_rect();
        let mut state =
            ManipulationState::new(ManipulationKind::Resize, Point::new(110.0, 120.0), shape);

        let resized = state.update(Point::new(100.0, 140.0));
        assert_eq!(resized.position(), Point::new(100.0, 100.0));
        assert_eq!(resized.size(), Vec2::new(30.0, 50.0));
    }

    #[test]
    fn test_updates_are_relative_to_original() {
        let shape = placed_rect();
        let id = shape.id();
        let mut state = ManipulationState::new(ManipulationKind::Move, Point::ZERO, shape);

        state.update(Point::new(50.0, 50.0));
        let moved = state.update(Point::new(10.0, 0.0));
        assert_eq!(moved.position(), Point::new(110.0, 100.0));
        assert_eq!(moved.id(), id);
        assert_eq!(state.delta(), Vec2::new(10.0, 0.0));
    }
}
