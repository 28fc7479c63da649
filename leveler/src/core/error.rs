//! Error kinds for rejected decision requests.

use thiserror::Error;

/// A malformed request. Each variant carries a human-readable detail.
///
/// "No candidate stack" is not an error; the engine turns it into
/// [`Action::Warning`](crate::core::types::Action::Warning) or
/// [`Action::Finished`](crate::core::types::Action::Finished).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("invalid claw position: {0}")]
    InvalidClawPosition(String),

    #[error("invalid stack collection: {0}")]
    InvalidStackCollection(String),

    #[error("invalid holding flag: {0}")]
    InvalidHoldingFlag(String),

    #[error("invalid stack count: {0}")]
    InvalidStackCount(String),

    #[error("invalid total box count: {0}")]
    InvalidTotalBoxCount(String),

    #[error("invalid box amount per stack: {0}")]
    InvalidBoxAmountPerStack(String),

    #[error("non-numeric input: {0}")]
    NonNumericInput(String),
}

impl DecisionError {
    /// Stable kind label, independent of the detail message.
    pub fn kind(&self) -> &'static str {
        match self {
            DecisionError::InvalidClawPosition(_) => "InvalidClawPosition",
            DecisionError::InvalidStackCollection(_) => "InvalidStackCollection",
            DecisionError::InvalidHoldingFlag(_) => "InvalidHoldingFlag",
            DecisionError::InvalidStackCount(_) => "InvalidStackCount",
            DecisionError::InvalidTotalBoxCount(_) => "InvalidTotalBoxCount",
            DecisionError::InvalidBoxAmountPerStack(_) => "InvalidBoxAmountPerStack",
            DecisionError::NonNumericInput(_) => "NonNumericInput",
        }
    }
}
