//! Edit Engine - Edit actions and session state for work orders
//!
//! This crate turns user gestures into [`EditAction`] commands, applies them
//! to the document model, and tracks the edit-mode state machine.

mod action;
mod binding;
mod command;
mod error;
mod executor;

pub use action::*;
pub use binding::*;
pub use command::*;
pub use error::*;
pub use executor::*;
