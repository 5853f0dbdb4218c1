// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tatami_domain::DomainError;

/// A failure in a caller-supplied data-access collaborator.
///
/// The duplicate-registration lookup and the category resolver belong to the
/// surrounding application; their timeout and retry policy live there, not
/// in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    /// Description of the failed lookup.
    pub message: String,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lookup failed: {}", self.message)
    }
}

impl std::error::Error for LookupError {}

/// Errors that can occur while deciding a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain configuration invariant was violated.
    DomainViolation(DomainError),
    /// A caller-supplied lookup collaborator failed.
    LookupFailed(LookupError),
    /// A payment status string is not recognized.
    InvalidPaymentStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A payment status transition is not permitted.
    InvalidPaymentTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::LookupFailed(err) => write!(f, "{err}"),
            Self::InvalidPaymentStatus { status } => {
                write!(f, "Unknown payment status: {status}")
            }
            Self::InvalidPaymentTransition { from, to, reason } => {
                write!(f, "Cannot move payment from '{from}' to '{to}': {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<LookupError> for CoreError {
    fn from(err: LookupError) -> Self {
        Self::LookupFailed(err)
    }
}
