//! Shapepad Core Library
//!
//! Platform-agnostic shape model, canvas state and interaction logic for the
//! Shapepad drawing app.

pub mod canvas;
pub mod controller;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, CanvasDocument};
pub use controller::Controller;
pub use input::{InputState, Modifiers, MouseButton, PointerEvent};
pub use selection::{ManipulationKind, ManipulationState};
pub use shapes::{Shape, ShapeColor, ShapeId, ShapeKind};
pub use tools::{ToolKind, ToolManager};
