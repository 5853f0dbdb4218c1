// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration window resolution for tiered tournament pricing.
//!
//! Tournaments configure up to three pricing windows: early, regular, and
//! late. The regular window is mandatory; early and late are optional.
//!
//! ## Invariants
//!
//! - A window start and its price are configured together or not at all
//! - Configured window starts are chronologically ordered:
//!   early < regular < late
//! - The registration deadline is after every configured window start
//! - Window starts are closed on the start side (`start <= now`) and the
//!   deadline is inclusive (`now <= deadline`)
//!
//! The "is registration open", "current price", and status-label questions
//! are all thin projections of one shared [`WindowConfig::resolve`] step, so
//! the three answers can never disagree on which window is active.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Names one of the three configurable pricing tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowTier {
    /// The early-bird pricing window.
    Early,
    /// The mandatory regular pricing window.
    Regular,
    /// The late pricing window.
    Late,
}

impl std::fmt::Display for WindowTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Early => "early",
            Self::Regular => "regular",
            Self::Late => "late",
        };
        write!(f, "{label}")
    }
}

/// A window start paired with the price that applies while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PricedWindow {
    start: DateTime<Utc>,
    price: Decimal,
}

/// The registration window configuration of one tournament.
///
/// Immutable snapshot owned by the caller; construction validates every
/// configuration invariant so that window resolution itself is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    early: Option<PricedWindow>,
    regular: PricedWindow,
    late: Option<PricedWindow>,
    registration_deadline: DateTime<Utc>,
}

impl WindowConfig {
    /// Creates a validated `WindowConfig` from individually optional parts,
    /// as they arrive from tournament setup.
    ///
    /// # Arguments
    ///
    /// * `early_start` / `early_price` - Early window, both or neither
    /// * `regular_start` / `regular_price` - Regular window, required
    /// * `late_start` / `late_price` - Late window, both or neither
    /// * `registration_deadline` - Last instant registration is open
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `regular_start` or `regular_price` is absent
    /// - a start is configured without its price, or a price without its start
    /// - any configured price is negative
    /// - configured starts are not ordered early < regular < late
    /// - the deadline is not after every configured start
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        early_start: Option<DateTime<Utc>>,
        early_price: Option<Decimal>,
        regular_start: Option<DateTime<Utc>>,
        regular_price: Option<Decimal>,
        late_start: Option<DateTime<Utc>>,
        late_price: Option<Decimal>,
        registration_deadline: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let regular = match (regular_start, regular_price) {
            (Some(start), Some(price)) => PricedWindow { start, price },
            (Some(_), None) => {
                return Err(DomainError::MissingPrice {
                    tier: WindowTier::Regular,
                });
            }
            (None, _) => return Err(DomainError::MissingRegularWindow),
        };
        let early = Self::pair(WindowTier::Early, early_start, early_price)?;
        let late = Self::pair(WindowTier::Late, late_start, late_price)?;

        for (tier, window) in [
            (WindowTier::Early, early.as_ref()),
            (WindowTier::Regular, Some(&regular)),
            (WindowTier::Late, late.as_ref()),
        ] {
            if let Some(window) = window {
                if window.price < Decimal::ZERO {
                    return Err(DomainError::NegativePrice {
                        tier,
                        price: window.price,
                    });
                }
                if window.start >= registration_deadline {
                    return Err(DomainError::DeadlineBeforeWindow { tier });
                }
            }
        }

        if let Some(early) = &early
            && early.start >= regular.start
        {
            return Err(DomainError::WindowsOutOfOrder {
                first: WindowTier::Early,
                second: WindowTier::Regular,
            });
        }
        if let Some(late) = &late
            && regular.start >= late.start
        {
            return Err(DomainError::WindowsOutOfOrder {
                first: WindowTier::Regular,
                second: WindowTier::Late,
            });
        }

        Ok(Self {
            early,
            regular,
            late,
            registration_deadline,
        })
    }

    fn pair(
        tier: WindowTier,
        start: Option<DateTime<Utc>>,
        price: Option<Decimal>,
    ) -> Result<Option<PricedWindow>, DomainError> {
        match (start, price) {
            (Some(start), Some(price)) => Ok(Some(PricedWindow { start, price })),
            (Some(_), None) => Err(DomainError::MissingPrice { tier }),
            (None, Some(_)) => Err(DomainError::MissingStart { tier }),
            (None, None) => Ok(None),
        }
    }

    /// Returns the last instant at which registration is open.
    #[must_use]
    pub const fn registration_deadline(&self) -> DateTime<Utc> {
        self.registration_deadline
    }

    /// Resolves which window is active at `now`.
    ///
    /// This is the single resolution step shared by
    /// [`Self::is_registration_open`], [`Self::current_price`], and
    /// [`Self::status`].
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp, supplied by the caller's clock
    #[must_use]
    pub fn resolve(&self, now: DateTime<Utc>) -> ActiveWindow {
        let first_start = self.early.map_or(self.regular.start, |early| early.start);
        if now < first_start {
            return ActiveWindow::NotStarted;
        }
        if now > self.registration_deadline {
            return ActiveWindow::Closed;
        }
        if self.early.is_some() && now < self.regular.start {
            return ActiveWindow::Early;
        }
        if let Some(late) = self.late
            && now >= late.start
        {
            return ActiveWindow::Late;
        }
        ActiveWindow::Regular
    }

    /// Returns whether registration is open at `now`.
    #[must_use]
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.resolve(now).is_open()
    }

    /// Returns the price applying at `now`, or `None` while registration is
    /// closed.
    #[must_use]
    pub fn current_price(&self, now: DateTime<Utc>) -> Option<Decimal> {
        match self.resolve(now) {
            ActiveWindow::Early => self.early.map(|window| window.price),
            ActiveWindow::Regular => Some(self.regular.price),
            ActiveWindow::Late => self.late.map(|window| window.price),
            ActiveWindow::NotStarted | ActiveWindow::Closed => None,
        }
    }

    /// Returns the registration status at `now`, including the instant the
    /// active window runs until. `Display` renders the user-facing label.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> RegistrationStatus {
        match self.resolve(now) {
            ActiveWindow::NotStarted => RegistrationStatus::NotStarted,
            ActiveWindow::Early => RegistrationStatus::Early {
                open_until: self.regular.start,
            },
            ActiveWindow::Regular => RegistrationStatus::Regular {
                open_until: self
                    .late
                    .map_or(self.registration_deadline, |late| late.start),
            },
            ActiveWindow::Late => RegistrationStatus::Late {
                open_until: self.registration_deadline,
            },
            ActiveWindow::Closed => RegistrationStatus::Closed,
        }
    }
}

/// The window active at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveWindow {
    /// The first configured window has not begun.
    NotStarted,
    /// The early window is active.
    Early,
    /// The regular window is active.
    Regular,
    /// The late window is active.
    Late,
    /// The registration deadline has passed.
    Closed,
}

impl ActiveWindow {
    /// Returns whether registration is open in this window.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Early | Self::Regular | Self::Late)
    }
}

/// Registration status with the boundary instant of the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "window", rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Registration has not started.
    NotStarted,
    /// Early registration, open until the regular window begins.
    Early {
        /// When the early window ends.
        open_until: DateTime<Utc>,
    },
    /// Regular registration, open until the late window begins or the
    /// deadline if no late window is configured.
    Regular {
        /// When the regular window ends.
        open_until: DateTime<Utc>,
    },
    /// Late registration, open until the deadline.
    Late {
        /// When registration closes.
        open_until: DateTime<Utc>,
    },
    /// Registration has closed.
    Closed,
}

impl RegistrationStatus {
    /// Returns whether registration is open in this status.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(
            self,
            Self::Early { .. } | Self::Regular { .. } | Self::Late { .. }
        )
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Registration has not started yet"),
            Self::Early { open_until } => {
                write!(
                    f,
                    "Early registration open until {}",
                    open_until.format("%Y-%m-%d")
                )
            }
            Self::Regular { open_until } => {
                write!(
                    f,
                    "Regular registration open until {}",
                    open_until.format("%Y-%m-%d")
                )
            }
            Self::Late { open_until } => {
                write!(
                    f,
                    "Late registration open until {}",
                    open_until.format("%Y-%m-%d")
                )
            }
            Self::Closed => write!(f, "Registration closed"),
        }
    }
}
