//! Screen geometry and deterministic draw plans for the giobot client.
//!
//! [`Viewport`] maps between pixels and grid cells. [`render`] turns a snapshot into a
//! [`DrawPlan`] that a backend can replay with whatever graphics API it owns.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod color;
pub mod render;
pub mod viewport;

pub use color::{ColorParseError, Rgba};
pub use render::{render, DrawOp, DrawPlan, TextAnchor, Theme};
pub use viewport::{Rect, Viewport};
