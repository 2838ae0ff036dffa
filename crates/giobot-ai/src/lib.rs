//! Decision hook capability for automated play.
//!
//! A hook is consulted once per rendered snapshot. It may read the snapshot and
//! return moves, which go through the same sink as moves made from the keyboard.
//! Any memory a hook keeps between snapshots lives in its explicit `State`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod general;
pub mod hook;

pub use general::{GeneralContext, GeneralLocator};
pub use hook::{DecisionHook, NoopHook};
