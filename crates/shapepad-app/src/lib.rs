//! Shapepad Application
//!
//! The desktop shell: windowing, input translation, the egui toolbar and
//! configuration.

mod app;
pub mod config;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::{App, AppError};
pub use config::{AppConfig, ConfigError};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
