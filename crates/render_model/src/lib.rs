//! Render Model - Work order to render tree conversion
//!
//! This crate turns the document and session state into a positioned cell
//! grid and a toolbar description that the page shell draws as-is.

mod controls;
mod converter;
mod format;
mod merge;
mod render_item;

pub use controls::*;
pub use converter::*;
pub use format::*;
pub use merge::*;
pub use render_item::*;
