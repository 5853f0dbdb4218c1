// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration eligibility validation.
//!
//! Every check runs regardless of earlier failures so the participant can
//! correct all problems at once. Rejections are expected, recoverable
//! outcomes returned as data; only configuration problems (an unresolved
//! category constraint) are errors.

use crate::types::CategoryConstraint;
use serde::{Deserialize, Serialize};

/// One reason a registration request was rejected.
///
/// `Display` renders the message shown to the participant, including the
/// allowed values where that helps them correct the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The participant is already registered in this tournament and category.
    DuplicateRegistration,
    /// The submitted weight class is not offered by the category.
    InvalidWeight {
        /// The submitted weight in kilograms.
        submitted: u16,
        /// The weight classes the category allows.
        allowed: Vec<u16>,
    },
    /// The submitted belt level is not offered by the category.
    InvalidBelt {
        /// The submitted belt level.
        submitted: String,
        /// The belt levels the category allows.
        allowed: Vec<String>,
    },
    /// The participant is younger than the category minimum.
    TooYoung {
        /// The participant's age in years.
        age: i32,
        /// The category's minimum age, inclusive.
        minimum: u8,
    },
    /// The participant is older than the category maximum.
    TooOld {
        /// The participant's age in years.
        age: i32,
        /// The category's maximum age, inclusive.
        maximum: u8,
    },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRegistration => {
                write!(
                    f,
                    "You are already registered in this category. Choose another category or cancel the previous registration"
                )
            }
            Self::InvalidWeight { submitted, allowed } => {
                let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "The selected weight ({submitted} kg) is not available in this category. Available weights: {} kg",
                    allowed.join(", ")
                )
            }
            Self::InvalidBelt { submitted, allowed } => {
                write!(
                    f,
                    "The selected belt ({submitted}) is not available in this category. Available belts: {}",
                    allowed.join(", ")
                )
            }
            Self::TooYoung { age, minimum } => {
                write!(
                    f,
                    "You are too young for this category. Your age: {age}. Minimum age: {minimum}"
                )
            }
            Self::TooOld { age, maximum } => {
                write!(
                    f,
                    "You are too old for this category. Your age: {age}. Maximum age: {maximum}"
                )
            }
        }
    }
}

/// The outcome of validating one registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    /// Every check passed.
    Accepted,
    /// At least one check failed; all collected reasons, in check order.
    Rejected {
        /// The collected rejection reasons.
        reasons: Vec<RejectionReason>,
    },
}

impl EligibilityOutcome {
    /// Returns whether the request was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Validates one registration against its category constraint.
///
/// Checks run in a fixed order (duplicate, weight, belt, age) and none is
/// skipped because an earlier one failed. The duplicate decision is made by
/// the caller's existing-registrations lookup and passed in as a plain flag;
/// this function performs no I/O.
///
/// # Arguments
///
/// * `weight` - The submitted weight class in kilograms
/// * `belt` - The submitted belt level
/// * `age_years` - The participant's age as of today, per [`crate::age_in_years`]
/// * `constraint` - The resolved constraint of the chosen category
/// * `already_registered` - Whether a prior registration exists for the same
///   tournament, category, and participant identity
#[must_use]
pub fn check_eligibility(
    weight: u16,
    belt: &str,
    age_years: i32,
    constraint: &CategoryConstraint,
    already_registered: bool,
) -> EligibilityOutcome {
    let mut reasons = Vec::new();

    if already_registered {
        reasons.push(RejectionReason::DuplicateRegistration);
    }

    if !constraint.weight_values().contains(&weight) {
        reasons.push(RejectionReason::InvalidWeight {
            submitted: weight,
            allowed: constraint.weight_values().to_vec(),
        });
    }

    if !constraint
        .belt_values()
        .iter()
        .any(|level| level.as_str() == belt)
    {
        reasons.push(RejectionReason::InvalidBelt {
            submitted: belt.to_owned(),
            allowed: constraint.belt_values().to_vec(),
        });
    }

    if let Some(minimum) = constraint.age_from()
        && age_years < i32::from(minimum)
    {
        reasons.push(RejectionReason::TooYoung {
            age: age_years,
            minimum,
        });
    }
    if let Some(maximum) = constraint.age_to()
        && age_years > i32::from(maximum)
    {
        reasons.push(RejectionReason::TooOld {
            age: age_years,
            maximum,
        });
    }

    if reasons.is_empty() {
        EligibilityOutcome::Accepted
    } else {
        EligibilityOutcome::Rejected { reasons }
    }
}
