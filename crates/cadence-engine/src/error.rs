//! Error types for cadence-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Unknown interval: {0}")]
    UnknownInterval(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, CadenceError>;
