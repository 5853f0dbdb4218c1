// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical identifier of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentId(pub i64);

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier of a tournament category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub i64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prospective tournament participant.
///
/// Participants either hold an account with a profile or register as a
/// one-off guest identified by email. The two cases are an explicit closed
/// enum so that call sites dispatch with a match instead of probing for the
/// presence of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Participant {
    /// A participant with a registered account.
    Registered {
        /// The canonical profile identifier.
        profile_id: i64,
    },
    /// A participant without an account.
    Guest {
        /// The guest's contact email.
        email: String,
    },
}

impl Participant {
    /// Returns the identity key used for duplicate-registration checks.
    #[must_use]
    pub fn key(&self) -> ParticipantKey {
        match self {
            Self::Registered { profile_id } => ParticipantKey::Profile(*profile_id),
            Self::Guest { email } => ParticipantKey::Email(email.to_lowercase()),
        }
    }
}

/// Opaque participant identity for duplicate-registration lookups.
///
/// Guest emails are normalized to lowercase so that the same guest cannot
/// register twice under a differently-cased address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKey {
    /// Identity of a registered participant.
    Profile(i64),
    /// Identity of a guest participant.
    Email(String),
}

impl std::fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(profile_id) => write!(f, "profile:{profile_id}"),
            Self::Email(email) => write!(f, "email:{email}"),
        }
    }
}

/// The constraints a registration must satisfy for one tournament category.
///
/// Constraints are created at tournament-setup time, either from a standard
/// category template or as a tournament-specific override, and are read-only
/// during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConstraint {
    /// Allowed weight classes in kilograms.
    weight_values: Vec<u16>,
    /// Allowed belt levels.
    belt_values: Vec<String>,
    /// Minimum age in years, inclusive.
    age_from: Option<u8>,
    /// Maximum age in years, inclusive.
    age_to: Option<u8>,
    /// Whether this constraint overrides the standard template values.
    /// Informational only; does not change evaluation.
    is_customized: bool,
}

impl CategoryConstraint {
    /// Creates a validated `CategoryConstraint`.
    ///
    /// # Arguments
    ///
    /// * `weight_values` - Allowed weight classes (must be non-empty, all positive)
    /// * `belt_values` - Allowed belt levels (must be non-empty)
    /// * `age_from` - Optional minimum age in years, inclusive
    /// * `age_to` - Optional maximum age in years, inclusive
    /// * `is_customized` - Whether the values override the standard template
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `weight_values` is empty or contains a zero weight
    /// - `belt_values` is empty
    /// - both age bounds are present and `age_from > age_to`
    pub fn new(
        weight_values: Vec<u16>,
        belt_values: Vec<String>,
        age_from: Option<u8>,
        age_to: Option<u8>,
        is_customized: bool,
    ) -> Result<Self, DomainError> {
        if weight_values.is_empty() {
            return Err(DomainError::EmptyWeightValues);
        }
        if let Some(weight) = weight_values.iter().copied().find(|weight| *weight == 0) {
            return Err(DomainError::InvalidWeightValue { weight });
        }
        if belt_values.is_empty() {
            return Err(DomainError::EmptyBeltValues);
        }
        if let (Some(from), Some(to)) = (age_from, age_to)
            && from > to
        {
            return Err(DomainError::InvalidAgeWindow {
                age_from: from,
                age_to: to,
            });
        }

        Ok(Self {
            weight_values,
            belt_values,
            age_from,
            age_to,
            is_customized,
        })
    }

    /// Returns the allowed weight classes.
    #[must_use]
    pub fn weight_values(&self) -> &[u16] {
        &self.weight_values
    }

    /// Returns the allowed belt levels.
    #[must_use]
    pub fn belt_values(&self) -> &[String] {
        &self.belt_values
    }

    /// Returns the minimum age in years, if bounded.
    #[must_use]
    pub const fn age_from(&self) -> Option<u8> {
        self.age_from
    }

    /// Returns the maximum age in years, if bounded.
    #[must_use]
    pub const fn age_to(&self) -> Option<u8> {
        self.age_to
    }

    /// Returns whether this constraint overrides the standard template.
    #[must_use]
    pub const fn is_customized(&self) -> bool {
        self.is_customized
    }
}

/// One registration attempt, alive only for the duration of a validation
/// call. Not persisted by the rules core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// The tournament being registered for.
    pub tournament: TournamentId,
    /// The chosen category.
    pub category: CategoryId,
    /// The submitted weight class in kilograms.
    pub weight: u16,
    /// The submitted belt level.
    pub belt: String,
    /// The participant submitting the registration.
    pub participant: Participant,
    /// The participant's birth date, from the profile or the form.
    pub birth_date: NaiveDate,
}
