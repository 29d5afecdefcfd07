//! Console input error types.

use std::io;
use thiserror::Error;

/// Errors produced while reading answers from the user.
///
/// The `Invalid*` variants are recoverable: the console reports them and asks
/// again. `Closed` and `Io` end the conversation.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid choice '{0}'. Please select 1, 2, or 3.")]
    InvalidDecision(String),

    #[error("Invalid choice '{0}'. Please enter a number between 1 and 4.")]
    InvalidSoilType(String),

    #[error("Invalid range '{0}'. Please enter two whole numbers separated by a space.")]
    InvalidRange(String),

    #[error("Input stream closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the console should report the error and prompt again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDecision(_) | Self::InvalidSoilType(_) | Self::InvalidRange(_)
        )
    }
}
