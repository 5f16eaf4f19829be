//! Interaction controller: routes pointer events and toolbar commands to the canvas.

use crate::canvas::Canvas;
use crate::input::{MouseButton, PointerEvent};
use crate::selection::{ManipulationKind, ManipulationState};
use crate::shapes::{PROTOTYPE_SIZE, Shape, ShapeColor, ShapeId};
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};

/// Offset between the pointer and the cursor icon in drawing mode.
pub const CURSOR_ICON_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Owns the canvas and interprets user input against it.
#[derive(Debug, Clone)]
pub struct Controller {
    pub canvas: Canvas,
    /// Drag in progress on the selected shape (selection mode only).
    manipulation: Option<ManipulationState>,
    /// Current color picker value.
    picker_color: ShapeColor,
    /// Pointer position while it is over the canvas.
    pointer: Option<Point>,
    needs_repaint: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ShapeColor::default())
    }
}

impl Controller {
    pub fn new(picker_color: ShapeColor) -> Self {
        Self {
            canvas: Canvas::new(),
            manipulation: None,
            picker_color,
            pointer: None,
            needs_repaint: true,
        }
    }

    pub fn current_tool(&self) -> ToolKind {
        self.canvas.tool_manager.current_tool
    }

    pub fn picker_color(&self) -> ShapeColor {
        self.picker_color
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.canvas.selection()
    }

    pub fn is_manipulating(&self) -> bool {
        self.manipulation.is_some()
    }

    /// Returns whether a repaint was requested since the last call.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Switch tools. Any gesture in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.current_tool() {
            return;
        }
        log::info!("Tool changed to {}", tool.label());
        self.manipulation = None;
        self.canvas.set_tool(tool, self.picker_color);
        self.needs_repaint = true;
    }

    /// Update the picker color. Takes effect on the next placement.
    pub fn set_picker_color(&mut self, color: ShapeColor) {
        if color != self.picker_color {
            self.picker_color = color;
            self.canvas.tool_manager.refresh_prototype_color(color);
            self.needs_repaint = true;
        }
    }

    pub fn delete_selected(&mut self) -> Option<Shape> {
        self.manipulation = None;
        let removed = self.canvas.delete_selected()?;
        log::info!("Deleted {} {}", removed.kind().name(), removed.id());
        self.needs_repaint = true;
        Some(removed)
    }

    pub fn clone_selected(&mut self) -> Option<ShapeId> {
        self.manipulation = None;
        let id = self.canvas.clone_selected()?;
        log::info!("Cloned selection as {id}");
        self.needs_repaint = true;
        Some(id)
    }

    /// Abort the current gesture, or clear the selection when idle.
    pub fn cancel(&mut self) {
        if self.canvas.tool_manager.is_active() {
            self.canvas.tool_manager.cancel();
        } else if let Some(state) = self.manipulation.take() {
            if let Some(shape) = self.canvas.document.get_shape_mut(state.shape_id) {
                *shape = state.original_shape;
            }
        } else {
            self.canvas.clear_selection();
        }
        self.needs_repaint = true;
    }

    /// Handle a pointer event. Every event requests a repaint.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press {
                position,
                button: MouseButton::Left,
                modifiers,
            } => {
                log::debug!("press {} {}", position.x, position.y);
                self.pointer = Some(position);
                if self.canvas.tool_manager.is_drawing_mode() {
                    self.canvas.tool_manager.begin(position, self.picker_color);
                } else {
                    let kind = if modifiers.shift {
                        ManipulationKind::Resize
                    } else {
                        ManipulationKind::Move
                    };
                    self.press_select(position, kind);
                }
            }
            PointerEvent::Press { .. } => {}
            PointerEvent::Drag { position } => {
                log::debug!("drag {} {}", position.x, position.y);
                self.pointer = Some(position);
                if self.canvas.tool_manager.is_drawing_mode() {
                    self.canvas.tool_manager.update(position);
                } else {
                    self.drag_select(position);
                }
            }
            PointerEvent::Release {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer = Some(position);
                if let Some(shape) = self.canvas.tool_manager.end(position) {
                    log::info!(
                        "Committed {} at ({}, {}) size ({}, {})",
                        shape.kind().name(),
                        shape.position().x,
                        shape.position().y,
                        shape.size().x,
                        shape.size().y
                    );
                    self.canvas.document.add_shape(shape);
                }
                self.manipulation = None;
            }
            PointerEvent::Release { .. } => {}
            PointerEvent::Move { position } => {
                self.pointer = Some(position);
            }
            PointerEvent::Enter => {
                self.canvas
                    .tool_manager
                    .refresh_prototype_color(self.picker_color);
            }
            PointerEvent::Leave => {
                self.pointer = None;
            }
        }
        self.needs_repaint = true;
    }

    fn press_select(&mut self, position: Point, kind: ManipulationKind) {
        self.canvas.clear_selection();
        self.manipulation = None;

        let Some(id) = self.canvas.document.shape_at_point(position) else {
            return;
        };
        self.canvas.select(id);
        if let Some(shape) = self.canvas.document.get_shape(id) {
            self.manipulation = Some(ManipulationState::new(kind, position, shape.clone()));
        }
    }

    fn drag_select(&mut self, position: Point) {
        let Some(state) = &mut self.manipulation else {
            return;
        };
        let updated = state.update(position);
        if let Some(shape) = self.canvas.document.get_shape_mut(state.shape_id) {
            *shape = updated;
        }
    }

    /// Prototype drawn next to the pointer while a drawing tool waits for a press.
    pub fn cursor_icon(&self) -> Option<Shape> {
        if self.canvas.tool_manager.is_active() {
            return None;
        }
        let pointer = self.pointer?;
        let mut icon = self.canvas.tool_manager.prototype()?.clone();
        icon.set_position(pointer + CURSOR_ICON_OFFSET);
        icon.set_size(PROTOTYPE_SIZE);
        Some(icon)
    }
}
