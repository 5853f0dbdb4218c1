// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handlers orchestrating the registration rules core.
//!
//! These functions are transport-agnostic: the surrounding application maps
//! its HTTP (or other) surface onto them and persists whatever they accept.

use crate::error::ApiError;
use crate::request_response::{RegistrationOutcome, RegistrationSubmission, TournamentStatusView};
use chrono::NaiveDate;
use tatami::{CategoryResolver, Clock, RegistrationDecision, RegistrationLookup, decide_registration};
use tatami_domain::{
    CategoryId, Participant, RegistrationRequest, TournamentId, TournamentSchedule, WindowConfig,
};

/// Reports the current registration standing of a tournament.
///
/// The open flag, price, and label all come from one window resolution at a
/// single instant.
///
/// # Arguments
///
/// * `windows` - The tournament's registration window configuration
/// * `schedule` - The tournament's overall timeline
/// * `clock` - Source of the current instant
#[must_use]
pub fn tournament_status(
    windows: &WindowConfig,
    schedule: &TournamentSchedule,
    clock: &impl Clock,
) -> TournamentStatusView {
    let now = clock.now();
    let status = windows.status(now);

    TournamentStatusView {
        is_open: status.is_open(),
        price: windows.current_price(now),
        status_label: status.to_string(),
        phase: schedule.phase(now).as_str().to_string(),
    }
}

/// Decides one registration submission.
///
/// Rejections come back inside a successful [`RegistrationOutcome`]; only
/// malformed input, configuration problems, and lookup failures are errors.
///
/// # Arguments
///
/// * `windows` - The tournament's registration window configuration
/// * `submission` - The submitted form data
/// * `clock` - Source of the current instant
/// * `registrations` - The caller's existing-registrations lookup
/// * `categories` - The caller's category constraint resolver
///
/// # Errors
///
/// Returns an error if:
/// - the birth date does not parse, or the participant fields are
///   inconsistent (neither or both of profile and email)
/// - the category has no resolved constraint
/// - a lookup collaborator fails
pub fn submit_registration(
    windows: &WindowConfig,
    submission: &RegistrationSubmission,
    clock: &impl Clock,
    registrations: &impl RegistrationLookup,
    categories: &impl CategoryResolver,
) -> Result<RegistrationOutcome, ApiError> {
    let request = parse_submission(submission)?;

    let decision = decide_registration(windows, &request, clock, registrations, categories)?;

    match decision {
        RegistrationDecision::Closed { status } => {
            tracing::info!(
                tournament = %request.tournament,
                category = %request.category,
                "registration attempt while closed: {status}"
            );
            Ok(RegistrationOutcome {
                accepted: false,
                price: None,
                status: Some(status.to_string()),
                rejections: Vec::new(),
            })
        }
        RegistrationDecision::Rejected { reasons } => {
            tracing::info!(
                tournament = %request.tournament,
                category = %request.category,
                rejections = reasons.len(),
                "registration rejected"
            );
            Ok(RegistrationOutcome {
                accepted: false,
                price: None,
                status: None,
                rejections: reasons.iter().map(ToString::to_string).collect(),
            })
        }
        RegistrationDecision::Accepted { price } => {
            tracing::info!(
                tournament = %request.tournament,
                category = %request.category,
                %price,
                "registration accepted"
            );
            Ok(RegistrationOutcome {
                accepted: true,
                price: Some(price),
                status: None,
                rejections: Vec::new(),
            })
        }
    }
}

/// Parses a raw submission into a domain registration request.
fn parse_submission(
    submission: &RegistrationSubmission,
) -> Result<RegistrationRequest, ApiError> {
    let participant = match (submission.profile_id, submission.email.as_deref()) {
        (Some(profile_id), None) => Participant::Registered { profile_id },
        (None, Some(email)) if !email.trim().is_empty() => Participant::Guest {
            email: email.to_string(),
        },
        _ => {
            tracing::warn!(
                tournament = submission.tournament_id,
                "submission has neither a profile nor a usable guest email"
            );
            return Err(ApiError::InvalidInput {
                field: String::from("participant"),
                message: String::from("exactly one of profile_id or email must be provided"),
            });
        }
    };

    let birth_date = NaiveDate::parse_from_str(&submission.birth_date, "%Y-%m-%d").map_err(
        |_| ApiError::InvalidInput {
            field: String::from("birth_date"),
            message: String::from("invalid birth date"),
        },
    )?;

    Ok(RegistrationRequest {
        tournament: TournamentId(submission.tournament_id),
        category: CategoryId(submission.category_id),
        weight: submission.weight,
        belt: submission.belt.clone(),
        participant,
        birth_date,
    })
}
