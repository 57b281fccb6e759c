//! Input abstraction layer.
//!
//! Normalizes DOM `click` and `keydown` events into an `InputEvent` the
//! controller consumes without knowing about the browser.

use urnik_core::BoxId;

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// Mouse button, numbered as `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl MouseButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A click that landed on a box.
    Click { target: BoxId, button: MouseButton },

    /// A key press anywhere in the document.
    Key { key: String, mods: Modifiers },
}

impl InputEvent {
    pub fn click(target: BoxId) -> Self {
        Self::Click {
            target,
            button: MouseButton::Primary,
        }
    }

    pub fn key(key: &str, mods: Modifiers) -> Self {
        Self::Key {
            key: key.to_string(),
            mods,
        }
    }
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The document was mutated.
    pub changed: bool,
    /// The browser's default action for this event must be suppressed.
    pub prevent_default: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        changed: false,
        prevent_default: false,
    };
}
