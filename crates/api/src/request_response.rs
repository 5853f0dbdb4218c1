// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry the raw strings the surrounding application collected
//! from the form; handlers parse them into domain types. Responses are
//! serializable views distinct from the domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One submitted registration form.
///
/// Exactly one of `profile_id` (an authenticated participant) or `email`
/// (a guest) must be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationSubmission {
    /// The tournament being registered for.
    pub tournament_id: i64,
    /// The chosen category.
    pub category_id: i64,
    /// The submitted weight class in kilograms.
    pub weight: u16,
    /// The submitted belt level.
    pub belt: String,
    /// The profile of an authenticated participant.
    pub profile_id: Option<i64>,
    /// The contact email of a guest participant.
    pub email: Option<String>,
    /// The participant's birth date (ISO 8601 date, `YYYY-MM-DD`).
    pub birth_date: String,
}

/// The decided outcome of one registration submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// Whether the registration was accepted.
    pub accepted: bool,
    /// The applicable price when accepted.
    pub price: Option<Decimal>,
    /// The registration status label when the window is closed.
    pub status: Option<String>,
    /// User-facing rejection messages, in check order.
    pub rejections: Vec<String>,
}

/// Current registration standing of one tournament.
///
/// All fields derive from a single window resolution, so the open flag,
/// price, and label always describe the same window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStatusView {
    /// Whether registration is currently open.
    pub is_open: bool,
    /// The currently applicable price, when open.
    pub price: Option<Decimal>,
    /// The user-facing registration status label.
    pub status_label: String,
    /// The coarse tournament lifecycle phase.
    pub phase: String,
}
