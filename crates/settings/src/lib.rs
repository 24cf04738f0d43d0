//! Settings - Persisted renderer and editing options

mod error;
mod settings;

pub use error::*;
pub use settings::*;
