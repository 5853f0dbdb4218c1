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

mod clock;
mod decide;
mod error;
mod lookup;
mod payment;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decide::{RegistrationDecision, decide_registration};
pub use error::{CoreError, LookupError};
pub use lookup::{CategoryResolver, RegistrationLookup};
pub use payment::{PaymentConfig, PaymentStatus};
