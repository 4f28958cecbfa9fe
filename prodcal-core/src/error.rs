//! Error types for the prodcal pipeline.

use thiserror::Error;

/// Errors that can occur while turning a raw calendar feed into intervals.
#[derive(Error, Debug)]
pub enum ProdCalError {
    #[error("Malformed calendar document: {0}")]
    MalformedInput(String),
}

/// Result type alias for prodcal operations.
pub type ProdCalResult<T> = Result<T, ProdCalError>;
