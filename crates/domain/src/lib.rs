// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod age;
mod eligibility;
mod error;
mod phase;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use age::age_in_years;
pub use eligibility::{EligibilityOutcome, RejectionReason, check_eligibility};
pub use error::DomainError;
pub use phase::{TournamentPhase, TournamentSchedule};
pub use types::{
    CategoryConstraint, CategoryId, Participant, ParticipantKey, RegistrationRequest, TournamentId,
};
pub use window::{ActiveWindow, RegistrationStatus, WindowConfig, WindowTier};
