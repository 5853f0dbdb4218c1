// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar age computation for eligibility checks.

use chrono::{Datelike, NaiveDate};

/// Computes a participant's age in completed years as of `today`.
///
/// Calendar-year subtraction, minus one if the birthday has not yet
/// occurred this year. The month/day tuple comparison handles Feb 29
/// birthdays without special-casing leap years.
///
/// # Arguments
///
/// * `birth` - The participant's birth date
/// * `today` - The date to compute the age as of
#[must_use]
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}
