//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocModelError {
    #[error("Unknown merge column: {0}")]
    UnknownColumn(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
