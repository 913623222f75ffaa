//! Error handling for the randomized sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("failed to randomly sort values within the allotted shuffle budget of {max_attempts} attempts")]
    ShuffleBudgetExceeded { max_attempts: usize },

    #[error("invalid value: {value}")]
    InvalidValue { value: String },

    #[error("invalid shuffle budget: {message}")]
    InvalidBudget { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // The budget running out is a sorting failure, not a usage or
            // system error.
            SortError::ShuffleBudgetExceeded { .. } => crate::EXIT_FAILURE,

            SortError::InvalidValue { .. }
            | SortError::InvalidBudget { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,
        }
    }

    /// Create a budget exhaustion error
    pub fn shuffle_budget_exceeded(max_attempts: usize) -> Self {
        SortError::ShuffleBudgetExceeded { max_attempts }
    }

    /// Create an invalid value error
    pub fn invalid_value(value: &str) -> Self {
        SortError::InvalidValue {
            value: value.to_string(),
        }
    }

    /// Create an invalid budget error
    pub fn invalid_budget(message: &str) -> Self {
        SortError::InvalidBudget {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;
