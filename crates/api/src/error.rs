// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tatami::{CoreError, LookupError};
use tatami_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// Validation rejections are not errors; they come back inside a successful
/// [`crate::RegistrationOutcome`] so the caller can present every collected
/// reason at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The tournament or category configuration violates a domain invariant.
    #[error("Configuration error: {0}")]
    Configuration(#[from] DomainError),
    /// A data-access collaborator failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(err) => Self::Configuration(err),
            CoreError::LookupFailed(err) => Self::Lookup(err),
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
