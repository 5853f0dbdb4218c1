// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::CategoryId;
use crate::window::WindowTier;
use rust_decimal::Decimal;

/// Errors raised when tournament configuration violates a domain invariant.
///
/// These are configuration errors: fatal to the calling operation and never
/// silently defaulted. Validation *rejections* (wrong weight, duplicate
/// registration, age out of range) are not errors; they are returned as
/// [`crate::RejectionReason`] data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tournament was configured with an early or late window but no
    /// regular window.
    MissingRegularWindow,
    /// A registration window start was configured without a price.
    MissingPrice {
        /// The window tier missing its price.
        tier: WindowTier,
    },
    /// A registration price was configured without a window start.
    MissingStart {
        /// The window tier missing its start.
        tier: WindowTier,
    },
    /// A registration price is negative.
    NegativePrice {
        /// The window tier with the invalid price.
        tier: WindowTier,
        /// The invalid price value.
        price: Decimal,
    },
    /// Registration windows are not in chronological order.
    WindowsOutOfOrder {
        /// The tier that must start first.
        first: WindowTier,
        /// The tier that must start later.
        second: WindowTier,
    },
    /// The registration deadline is not after every configured window start.
    DeadlineBeforeWindow {
        /// The window tier starting at or after the deadline.
        tier: WindowTier,
    },
    /// A category constraint has no allowed weight classes.
    EmptyWeightValues,
    /// A category constraint contains a zero weight class.
    InvalidWeightValue {
        /// The invalid weight value.
        weight: u16,
    },
    /// A category constraint has no allowed belt levels.
    EmptyBeltValues,
    /// A category constraint has `age_from` greater than `age_to`.
    InvalidAgeWindow {
        /// The lower inclusive age bound.
        age_from: u8,
        /// The upper inclusive age bound.
        age_to: u8,
    },
    /// A registration request references a category with no resolved
    /// constraint.
    CategoryNotResolved {
        /// The unresolved category.
        category: CategoryId,
    },
    /// A tournament schedule is internally inconsistent.
    InvalidSchedule {
        /// Description of the inconsistency.
        reason: String,
    },
    /// A tournament phase string is not recognized.
    InvalidPhase {
        /// The unrecognized phase string.
        phase: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRegularWindow => {
                write!(
                    f,
                    "Early or late registration is configured but the regular window start is missing"
                )
            }
            Self::MissingPrice { tier } => {
                write!(f, "The {tier} registration window has a start but no price")
            }
            Self::MissingStart { tier } => {
                write!(f, "The {tier} registration price has no window start")
            }
            Self::NegativePrice { tier, price } => {
                write!(f, "The {tier} registration price {price} is negative")
            }
            Self::WindowsOutOfOrder { first, second } => {
                write!(
                    f,
                    "The {first} registration window must start before the {second} window"
                )
            }
            Self::DeadlineBeforeWindow { tier } => {
                write!(
                    f,
                    "The registration deadline must be after the {tier} window start"
                )
            }
            Self::EmptyWeightValues => {
                write!(f, "Category constraint has no allowed weight classes")
            }
            Self::InvalidWeightValue { weight } => {
                write!(f, "Weight class must be positive, got {weight}")
            }
            Self::EmptyBeltValues => {
                write!(f, "Category constraint has no allowed belt levels")
            }
            Self::InvalidAgeWindow { age_from, age_to } => {
                write!(
                    f,
                    "Minimum age {age_from} is greater than maximum age {age_to}"
                )
            }
            Self::CategoryNotResolved { category } => {
                write!(f, "Category {category} has no resolved constraint")
            }
            Self::InvalidSchedule { reason } => {
                write!(f, "Invalid tournament schedule: {reason}")
            }
            Self::InvalidPhase { phase } => {
                write!(f, "Unknown tournament phase: {phase}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
