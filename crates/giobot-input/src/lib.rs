//! Input events, key bindings, and the move-intent state machine.
//!
//! Input arrives as an explicit queue of [`InputEvent`]s drained once per tick;
//! [`MoveIntent`] turns the resulting selections and nudges into [`MoveCommand`]s.
//!
//! [`MoveCommand`]: giobot_core::MoveCommand

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod event;
pub mod intent;
pub mod keys;

pub use event::{InputEvent, KeyAction};
pub use intent::{IntentEvent, IntentState, MoveIntent};
pub use keys::KeyBindings;
