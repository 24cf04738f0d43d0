//! Document Model - Work order items, detail rows and merge state
//!
//! This crate holds the authoritative in-memory state of a textile work order:
//! fabric items with their colour/quantity rows, and the per-column merge flags
//! that the table renderer reads. It never makes rendering decisions itself.

mod column;
mod error;
mod field;
mod merge;
mod seed;
mod work_order;

pub use column::*;
pub use error::*;
pub use field::*;
pub use merge::*;
pub use work_order::*;
