#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use giobot_core::Direction;

/// What a key press means to the client, after bindings are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyAction {
    Nudge(Direction),
    Cancel,
    ToggleSplit,
    Quit,
}

/// A discrete event from the windowing layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InputEvent {
    /// Primary button pressed at window pixel `(x, y)`.
    PointerDown { x: f64, y: f64 },
    /// A raw key press, resolved through the client's [`KeyBindings`].
    ///
    /// [`KeyBindings`]: crate::KeyBindings
    KeyPress { key: String },
    /// A key already resolved to an action.
    Key { action: KeyAction },
    /// The window's drawable area changed size.
    Resized { width: f64, height: f64 },
}

impl InputEvent {
    pub fn pointer(x: f64, y: f64) -> Self {
        InputEvent::PointerDown { x, y }
    }

    pub fn press(key: impl Into<String>) -> Self {
        InputEvent::KeyPress { key: key.into() }
    }

    pub fn key(action: KeyAction) -> Self {
        InputEvent::Key { action }
    }

    pub fn nudge(direction: Direction) -> Self {
        InputEvent::key(KeyAction::Nudge(direction))
    }
}
