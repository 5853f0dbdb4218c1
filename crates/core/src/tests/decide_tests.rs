// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    InMemoryCategories, InMemoryRegistrations, adult_constraint, at, three_tier_windows,
};
use crate::clock::FixedClock;
use crate::decide::{RegistrationDecision, decide_registration};
use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tatami_domain::{
    CategoryId, DomainError, Participant, RegistrationRequest, RegistrationStatus, RejectionReason,
    TournamentId,
};

fn request() -> RegistrationRequest {
    RegistrationRequest {
        tournament: TournamentId(7),
        category: CategoryId(3),
        weight: 66,
        belt: String::from("white"),
        participant: Participant::Guest {
            email: String::from("a@x.com"),
        },
        birth_date: NaiveDate::from_ymd_opt(1999, 5, 1).unwrap(),
    }
}

fn categories() -> InMemoryCategories {
    InMemoryCategories::default().with_category(CategoryId(3), adult_constraint())
}

#[test]
fn test_valid_request_is_accepted_at_the_window_price() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::default();

    let decision =
        decide_registration(&windows, &request(), &clock, &registrations, &categories()).unwrap();

    assert_eq!(
        decision,
        RegistrationDecision::Accepted {
            price: Decimal::new(50, 0),
        }
    );
}

#[test]
fn test_accepted_price_follows_the_active_window() {
    let windows = three_tier_windows();
    let registrations = InMemoryRegistrations::default();
    let categories = categories();

    let cases = [
        (at(2024, 1, 10), Decimal::new(30, 0)),
        (at(2024, 2, 10), Decimal::new(50, 0)),
        (at(2024, 2, 25), Decimal::new(70, 0)),
    ];
    for (now, expected) in cases {
        let clock = FixedClock::new(now);
        let decision =
            decide_registration(&windows, &request(), &clock, &registrations, &categories)
                .unwrap();
        assert_eq!(decision, RegistrationDecision::Accepted { price: expected });
    }
}

#[test]
fn test_closed_before_first_window() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2023, 12, 1));
    let registrations = InMemoryRegistrations::default();

    let decision =
        decide_registration(&windows, &request(), &clock, &registrations, &categories()).unwrap();

    assert_eq!(
        decision,
        RegistrationDecision::Closed {
            status: RegistrationStatus::NotStarted,
        }
    );
}

#[test]
fn test_closed_after_deadline_skips_eligibility_and_lookup() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 3, 5));
    // A failing lookup proves the gate short-circuits before data access.
    let registrations = InMemoryRegistrations::failing();

    let decision =
        decide_registration(&windows, &request(), &clock, &registrations, &categories()).unwrap();

    assert_eq!(
        decision,
        RegistrationDecision::Closed {
            status: RegistrationStatus::Closed,
        }
    );
}

#[test]
fn test_duplicate_registration_is_rejected_with_valid_payload() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::default().with_row(
        TournamentId(7),
        CategoryId(3),
        Participant::Guest {
            email: String::from("a@x.com"),
        }
        .key(),
    );

    let decision =
        decide_registration(&windows, &request(), &clock, &registrations, &categories()).unwrap();

    assert_eq!(
        decision,
        RegistrationDecision::Rejected {
            reasons: vec![RejectionReason::DuplicateRegistration],
        }
    );
}

#[test]
fn test_same_participant_in_another_category_is_not_a_duplicate() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::default().with_row(
        TournamentId(7),
        CategoryId(9),
        Participant::Guest {
            email: String::from("a@x.com"),
        }
        .key(),
    );

    let decision =
        decide_registration(&windows, &request(), &clock, &registrations, &categories()).unwrap();

    assert!(matches!(decision, RegistrationDecision::Accepted { .. }));
}

#[test]
fn test_ineligible_request_collects_all_reasons() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::default();
    let mut request = request();
    request.weight = 999;
    request.belt = String::from("black");

    let decision =
        decide_registration(&windows, &request, &clock, &registrations, &categories()).unwrap();

    let RegistrationDecision::Rejected { reasons } = decision else {
        panic!("expected rejection");
    };
    assert_eq!(reasons.len(), 2);
    assert!(matches!(reasons[0], RejectionReason::InvalidWeight { .. }));
    assert!(matches!(reasons[1], RejectionReason::InvalidBelt { .. }));
}

#[test]
fn test_age_is_computed_as_of_the_clock_today() {
    let windows = three_tier_windows();
    let registrations = InMemoryRegistrations::default();
    let categories = categories();
    // Born 2006-02-15, category minimum 18.
    let mut request = request();
    request.birth_date = NaiveDate::from_ymd_opt(2006, 2, 15).unwrap();

    // The day before the 18th birthday: too young.
    let clock = FixedClock::new(at(2024, 2, 14));
    let decision =
        decide_registration(&windows, &request, &clock, &registrations, &categories).unwrap();
    assert_eq!(
        decision,
        RegistrationDecision::Rejected {
            reasons: vec![RejectionReason::TooYoung {
                age: 17,
                minimum: 18,
            }],
        }
    );

    // On the birthday itself: accepted.
    let clock = FixedClock::new(at(2024, 2, 15));
    let decision =
        decide_registration(&windows, &request, &clock, &registrations, &categories).unwrap();
    assert!(matches!(decision, RegistrationDecision::Accepted { .. }));
}

#[test]
fn test_unresolved_category_is_a_configuration_error() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::default();
    let empty = InMemoryCategories::default();

    let result = decide_registration(&windows, &request(), &clock, &registrations, &empty);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CategoryNotResolved {
                category: CategoryId(3),
            }
        ))
    );
}

#[test]
fn test_lookup_failure_propagates() {
    let windows = three_tier_windows();
    let clock = FixedClock::new(at(2024, 2, 10));
    let registrations = InMemoryRegistrations::failing();

    let result = decide_registration(&windows, &request(), &clock, &registrations, &categories());

    assert!(matches!(result, Err(CoreError::LookupFailed(_))));
}
