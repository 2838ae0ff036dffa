#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use giobot_core::Direction;

use crate::KeyAction;

/// Key names for each client action. Names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub cancel: String,
    pub toggle_split: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            up: "w".to_string(),
            down: "s".to_string(),
            cancel: "space".to_string(),
            toggle_split: "e".to_string(),
            quit: "q".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        let key = normalize(key);
        self.bindings()
            .into_iter()
            .find(|(name, _)| normalize(name) == key)
            .map(|(_, action)| action)
    }

    fn bindings(&self) -> [(&str, KeyAction); 7] {
        [
            (self.left.as_str(), KeyAction::Nudge(Direction::Left)),
            (self.right.as_str(), KeyAction::Nudge(Direction::Right)),
            (self.up.as_str(), KeyAction::Nudge(Direction::Up)),
            (self.down.as_str(), KeyAction::Nudge(Direction::Down)),
            (self.cancel.as_str(), KeyAction::Cancel),
            (self.toggle_split.as_str(), KeyAction::ToggleSplit),
            (self.quit.as_str(), KeyAction::Quit),
        ]
    }

    /// Key names bound to more than one action.
    pub fn conflicts(&self) -> Vec<String> {
        let names: Vec<String> = self.bindings().iter().map(|(n, _)| normalize(n)).collect();
        let mut dupes: Vec<String> = names
            .iter()
            .enumerate()
            .filter(|(i, n)| names[..*i].contains(n))
            .map(|(_, n)| n.clone())
            .collect();
        dupes.dedup();
        dupes
    }
}

fn normalize(key: &str) -> String {
    if key == " " {
        return "space".to_string();
    }
    key.trim().to_ascii_lowercase()
}
