//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;
use shapepad_core::input::Modifiers;
use shapepad_core::tools::ToolKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: UiAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: UiAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+D").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.command()
            && self.shift == modifiers.shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("V", false, false, "Select tool", UiAction::SetTool(ToolKind::Select)),
            Shortcut::new("L", false, false, "Line tool", UiAction::SetTool(ToolKind::Line)),
            Shortcut::new("E", false, false, "Ellipse tool", UiAction::SetTool(ToolKind::Ellipse)),
            Shortcut::new(
                "R",
                false,
                false,
                "Rectangle tool",
                UiAction::SetTool(ToolKind::Rectangle),
            ),
            Shortcut::new("D", true, false, "Clone selected shape", UiAction::CloneSelected),
            Shortcut::new("Delete", false, false, "Delete selected shape", UiAction::DeleteSelected),
            Shortcut::new(
                "Backspace",
                false,
                false,
                "Delete selected shape",
                UiAction::DeleteSelected,
            ),
            Shortcut::new("Escape", false, false, "Cancel current action", UiAction::Cancel),
        ]
    }

    /// Look up the action bound to `key` with the given modifiers.
    pub fn action_for(key: &str, modifiers: Modifiers) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, modifiers))
            .map(|s| s.action)
    }

    /// Print all shortcuts to the log.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:12} {}", shortcut.format(), shortcut.description);
        }
    }
}
