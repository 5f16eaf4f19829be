//! Input state management for mouse events.
//!
//! Raw button and motion reports are folded into [`PointerEvent`]s the
//! controller understands: a motion while the left button is held is a drag.

use kurbo::Point;
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Motion with the left button held.
    Drag { position: Point },
    Release {
        position: Point,
        button: MouseButton,
    },
    /// Motion with no button held.
    Move { position: Point },
    /// Pointer entered the canvas.
    Enter,
    /// Pointer left the canvas.
    Leave,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Press { position, .. }
            | PointerEvent::Drag { position }
            | PointerEvent::Release { position, .. }
            | PointerEvent::Move { position } => Some(*position),
            PointerEvent::Enter | PointerEvent::Leave => None,
        }
    }
}

/// Tracks the pointer across raw events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Current modifier keys state.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn pointer_down(&mut self, button: MouseButton) -> PointerEvent {
        self.pressed_buttons.insert(button);
        PointerEvent::Press {
            position: self.pointer_position,
            button,
            modifiers: self.modifiers,
        }
    }

    /// Returns `None` for a release whose press we never saw.
    pub fn pointer_up(&mut self, button: MouseButton) -> Option<PointerEvent> {
        self.pressed_buttons
            .remove(&button)
            .then_some(PointerEvent::Release {
                position: self.pointer_position,
                button,
            })
    }

    pub fn pointer_moved(&mut self, position: Point) -> PointerEvent {
        self.pointer_position = position;
        if self.is_button_down(MouseButton::Left) {
            PointerEvent::Drag { position }
        } else {
            PointerEvent::Move { position }
        }
    }

    pub fn pointer_entered(&self) -> PointerEvent {
        PointerEvent::Enter
    }

    /// Buttons stay held across a leave so the release still ends the gesture.
    pub fn pointer_left(&self) -> PointerEvent {
        PointerEvent::Leave
    }
}
