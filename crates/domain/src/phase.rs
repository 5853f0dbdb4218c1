// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tournament lifecycle phase derived from the event schedule.
//!
//! The phase is computed, not stored. It describes where the tournament is
//! in its overall timeline; whether registration is actually open at a given
//! instant is decided by [`crate::WindowConfig`], which also accounts for
//! the window starts.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The key instants of a tournament's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSchedule {
    registration_deadline: DateTime<Utc>,
    tournament_start: DateTime<Utc>,
    tournament_end: DateTime<Utc>,
}

impl TournamentSchedule {
    /// Creates a validated `TournamentSchedule`.
    ///
    /// # Arguments
    ///
    /// * `registration_deadline` - Last instant registration is open
    /// * `tournament_start` - When competition begins
    /// * `tournament_end` - When competition ends
    ///
    /// # Errors
    ///
    /// Returns an error if the instants are not ordered
    /// `registration_deadline <= tournament_start < tournament_end`.
    pub fn new(
        registration_deadline: DateTime<Utc>,
        tournament_start: DateTime<Utc>,
        tournament_end: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if registration_deadline > tournament_start {
            return Err(DomainError::InvalidSchedule {
                reason: format!(
                    "registration deadline {registration_deadline} is after tournament start {tournament_start}"
                ),
            });
        }
        if tournament_start >= tournament_end {
            return Err(DomainError::InvalidSchedule {
                reason: format!(
                    "tournament start {tournament_start} is not before tournament end {tournament_end}"
                ),
            });
        }
        Ok(Self {
            registration_deadline,
            tournament_start,
            tournament_end,
        })
    }

    /// Returns the phase the tournament is in at `now`.
    #[must_use]
    pub fn phase(&self, now: DateTime<Utc>) -> TournamentPhase {
        if now < self.registration_deadline {
            TournamentPhase::RegistrationOpen
        } else if now < self.tournament_start {
            TournamentPhase::RegistrationClosed
        } else if now < self.tournament_end {
            TournamentPhase::InProgress
        } else {
            TournamentPhase::Completed
        }
    }
}

/// Coarse tournament lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// The registration deadline has not passed.
    RegistrationOpen,
    /// Registration has closed; competition has not begun.
    RegistrationClosed,
    /// Competition is underway.
    InProgress,
    /// Competition has finished.
    Completed,
}

impl TournamentPhase {
    /// Returns the string representation of this phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RegistrationOpen => "registration_open",
            Self::RegistrationClosed => "registration_closed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TournamentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TournamentPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration_open" => Ok(Self::RegistrationOpen),
            "registration_closed" => Ok(Self::RegistrationClosed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidPhase {
                phase: s.to_string(),
            }),
        }
    }
}
