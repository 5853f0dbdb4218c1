// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The registration decision: window gating composed with eligibility.
//!
//! The window evaluator gates whether registration may be attempted at all;
//! the eligibility checker validates the specific request once gating
//! passes. Both read one immutable snapshot of their inputs, so concurrent
//! calls need no coordination.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::lookup::{CategoryResolver, RegistrationLookup};
use rust_decimal::Decimal;
use tatami_domain::{
    DomainError, EligibilityOutcome, RegistrationRequest, RegistrationStatus, RejectionReason,
    WindowConfig, age_in_years, check_eligibility,
};

/// The outcome of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDecision {
    /// Registration is not open; the status says why.
    Closed {
        /// The registration status at the time of the attempt.
        status: RegistrationStatus,
    },
    /// Registration is open but the request is ineligible.
    Rejected {
        /// All collected rejection reasons, in check order.
        reasons: Vec<RejectionReason>,
    },
    /// The request is accepted at the currently applicable price.
    Accepted {
        /// The price of the active pricing window.
        price: Decimal,
    },
}

/// Decides one registration attempt.
///
/// Evaluation order:
/// 1. Resolve the active pricing window once; if registration is not open
///    the decision is [`RegistrationDecision::Closed`] and no further check
///    runs.
/// 2. Resolve the category constraint; a category without a constraint is a
///    configuration error, not a validation rejection.
/// 3. Compute the participant's age as of today.
/// 4. Ask the caller's lookup whether this participant already registered.
/// 5. Run all eligibility checks, collecting every violation.
///
/// The accepted price comes from the same window resolution that answered
/// "open", so the two can never disagree.
///
/// # Arguments
///
/// * `windows` - The tournament's registration window configuration
/// * `request` - The registration being attempted
/// * `clock` - Source of the current instant
/// * `registrations` - The caller's existing-registrations lookup
/// * `categories` - The caller's category constraint resolver
///
/// # Errors
///
/// Returns an error if the category has no resolved constraint or a lookup
/// collaborator fails.
pub fn decide_registration(
    windows: &WindowConfig,
    request: &RegistrationRequest,
    clock: &impl Clock,
    registrations: &impl RegistrationLookup,
    categories: &impl CategoryResolver,
) -> Result<RegistrationDecision, CoreError> {
    let now = clock.now();
    let status = windows.status(now);
    if !status.is_open() {
        return Ok(RegistrationDecision::Closed { status });
    }

    let constraint = categories
        .resolve(request.category)?
        .ok_or(DomainError::CategoryNotResolved {
            category: request.category,
        })?;

    let age = age_in_years(request.birth_date, clock.today());
    let already_registered =
        registrations.exists(request.tournament, request.category, &request.participant.key())?;

    match check_eligibility(
        request.weight,
        &request.belt,
        age,
        &constraint,
        already_registered,
    ) {
        EligibilityOutcome::Accepted => {
            // The window was open above, so a price is always present.
            windows.current_price(now).map_or(
                Ok(RegistrationDecision::Closed { status }),
                |price| Ok(RegistrationDecision::Accepted { price }),
            )
        }
        EligibilityOutcome::Rejected { reasons } => {
            Ok(RegistrationDecision::Rejected { reasons })
        }
    }
}
