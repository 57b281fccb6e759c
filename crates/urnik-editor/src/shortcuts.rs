//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The map lives in Rust so the browser bridge and native tests agree.
//!
//! - Ctrl+Z = undo the last hide
//! - Ctrl+O = order the timetable onto the day grid

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Restore the most recently hidden box.
    Undo,
    /// Snap every box onto the 20 % grid.
    Order,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Undo => "undo",
            ShortcutAction::Order => "order",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Only the Control key counts as the modifier, on every platform; ⌘ is
/// left to the browser. Keys are compared against `KeyboardEvent.key`
/// exactly, so Ctrl+Shift+Z (`"Z"`) is not an undo.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        _alt: bool,
        _meta: bool,
    ) -> Option<ShortcutAction> {
        if !ctrl {
            return None;
        }

        match key {
            "z" => Some(ShortcutAction::Undo),
            "o" => Some(ShortcutAction::Order),
            _ => None,
        }
    }
}
