//! Canvas document and state management.

use crate::shapes::{CLONE_OFFSET, Shape, ShapeColor, ShapeId};
use crate::tools::{ToolKind, ToolManager};
use kurbo::Point;

/// Committed shapes in insertion order, which is also paint order.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the others.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shapes back to front.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Topmost shape whose bounding box strictly contains `point`.
    ///
    /// Scans in insertion order and keeps the last match.
    pub fn shape_at_point(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.hit_test(point))
            .last()
            .map(Shape::id)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// The canvas state: document, selection and active tool.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub document: CanvasDocument,
    pub tool_manager: ToolManager,
    /// At most one selected shape.
    selection: Option<ShapeId>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self {
            document: CanvasDocument::new(),
            tool_manager: ToolManager::new(),
            selection: None,
        }
    }

    /// Select a shape, replacing any previous selection.
    pub fn select(&mut self, id: ShapeId) {
        self.selection = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|id| self.document.get_shape(id))
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection == Some(id)
    }

    /// Set the current tool, arming a prototype with `color`.
    pub fn set_tool(&mut self, tool: ToolKind, color: ShapeColor) {
        self.tool_manager.set_tool(tool, color);
    }

    /// Delete the selected shape, returning it.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selection.take()?;
        self.document.remove_shape(id)
    }

    /// Append an offset copy of the selected shape and select the copy.
    pub fn clone_selected(&mut self) -> Option<ShapeId> {
        let copy = self.selected_shape()?.duplicate(CLONE_OFFSET);
        let id = copy.id();
        self.document.add_shape(copy);
        self.select(id);
        Some(id)
    }
}
