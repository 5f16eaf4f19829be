//! Application configuration loaded from an optional JSON file.

use peniko::Color;
use serde::Deserialize;
use shapepad_core::shapes::ShapeColor;
use shapepad_render::{DEFAULT_SELECTION_COLOR, DEFAULT_STROKE_WIDTH};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SHAPEPAD_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shapepad.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

/// Parse a color string like "#ff0000".
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgba8(r, g, b, 255))
}

/// On-disk shape of the config. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ConfigFile {
    title: String,
    width: u32,
    height: u32,
    background_color: String,
    selection_color: String,
    initial_color: String,
    stroke_width: f64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            title: "Shapepad".to_string(),
            width: 1024,
            height: 768,
            background_color: "#ffffff".to_string(),
            selection_color: "#3b82f6".to_string(),
            initial_color: "#000000".to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

fn color_field(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Outline of the selected shape.
    pub selection_color: Color,
    /// Color picker value at startup.
    pub initial_color: ShapeColor,
    pub stroke_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shapepad".to_string(),
            width: 1024,
            height: 768,
            background_color: Color::WHITE,
            selection_color: DEFAULT_SELECTION_COLOR,
            initial_color: ShapeColor::black(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(Self {
            title: file.title,
            width: file.width,
            height: file.height,
            background_color: color_field("background_color", &file.background_color)?,
            selection_color: color_field("selection_color", &file.selection_color)?,
            initial_color: color_field("initial_color", &file.initial_color)?.into(),
            stroke_width: file.stroke_width,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `$SHAPEPAD_CONFIG` or `./shapepad.json`, falling back to defaults.
    pub fn load() -> Self {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let Some(path) = config_path(env_path, Path::new(DEFAULT_CONFIG_FILE)) else {
            log::debug!("No config file, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// An explicit path always wins, even if missing, so typos get reported.
fn config_path(explicit: Option<PathBuf>, fallback: &Path) -> Option<PathBuf> {
    explicit.or_else(|| fallback.exists().then(|| fallback.to_path_buf()))
}
