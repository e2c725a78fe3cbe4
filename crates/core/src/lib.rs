//! Shared primitives for all Rust crates in Memberlens.

#![forbid(unsafe_code)]

/// Identity primitives shared across services.
pub mod identity;

use thiserror::Error;

pub use identity::{CALLING_CONTEXT_ID, UserIdentity};

/// Result type used across Memberlens crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// Errors are cloneable so one failed directory lookup can be observed by
/// every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Identity or principal is absent in a directory.
    #[error("not found: {0}")]
    NotFound(String),

    /// A directory call failed before a usable response was received.
    #[error("directory transport failure: {0}")]
    TransportFailure(String),

    /// A directory returned a payload that cannot be mapped to a record.
    #[error("malformed directory response: {0}")]
    MalformedResponse(String),

    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
