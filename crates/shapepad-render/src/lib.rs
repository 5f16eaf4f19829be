//! Shapepad Render Library
//!
//! Renderer abstraction and implementations for Shapepad.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod recording;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{
    DEFAULT_SELECTION_COLOR, DEFAULT_STROKE_WIDTH, DrawStyle, DrawSurface, RenderContext,
    RenderResult, Renderer, RendererError, SELECTION_MARKER_RADIUS, ShapeRenderer, repaint,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
