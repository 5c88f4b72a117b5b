//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidSplit`] thrown when an expense's split group is empty.
//! - [`InvalidAmount`] thrown when a monetary amount fails validation.
//! - [`UnknownCategory`] thrown when a category code cannot be parsed.
//!
//!  [`InvalidSplit`]: EngineError::InvalidSplit
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`UnknownCategory`]: EngineError::UnknownCategory
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidSplit(a), Self::InvalidSplit(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            _ => false,
        }
    }
}
