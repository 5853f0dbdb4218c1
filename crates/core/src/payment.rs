// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment gateway configuration and payment status lifecycle.
//!
//! The gateway itself (create/query/cancel calls) belongs to the
//! surrounding application. This module owns the configuration it needs,
//! passed explicitly at construction time instead of read from global
//! settings, and the status lifecycle its webhooks walk a payment through.

use crate::error::CoreError;
use std::str::FromStr;

/// Gateway credentials and redirect endpoints.
///
/// Constructed once by the surrounding application and passed to whatever
/// component talks to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    /// The gateway shop / merchant identifier.
    pub shop_id: String,
    /// The gateway API secret.
    pub secret_key: String,
    /// Where the gateway redirects after a completed payment.
    pub return_url: String,
    /// Where the gateway redirects after a cancelled payment.
    pub cancel_url: String,
    /// ISO 4217 currency code for registration fees.
    pub currency: String,
}

impl PaymentConfig {
    /// Creates a new `PaymentConfig`.
    ///
    /// # Arguments
    ///
    /// * `shop_id` - The gateway shop / merchant identifier
    /// * `secret_key` - The gateway API secret
    /// * `return_url` - Redirect target after a completed payment
    /// * `cancel_url` - Redirect target after a cancelled payment
    /// * `currency` - ISO 4217 currency code
    #[must_use]
    pub const fn new(
        shop_id: String,
        secret_key: String,
        return_url: String,
        cancel_url: String,
        currency: String,
    ) -> Self {
        Self {
            shop_id,
            secret_key,
            return_url,
            cancel_url,
            currency,
        }
    }
}

/// Payment states as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Payment created, awaiting the participant.
    Pending,
    /// Participant authorized the payment; gateway awaits capture.
    WaitingForCapture,
    /// Payment captured.
    Succeeded,
    /// Payment cancelled or expired.
    Canceled,
}

impl PaymentStatus {
    /// Returns the string representation used by the gateway.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::WaitingForCapture => "waiting_for_capture",
            Self::Succeeded => "succeeded",
            Self::Canceled => "canceled",
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Canceled)
    }

    /// Validates a transition from this status to another.
    ///
    /// Permitted transitions mirror the gateway lifecycle:
    /// - `Pending` → `WaitingForCapture`, `Succeeded`, or `Canceled`
    /// - `WaitingForCapture` → `Succeeded` or `Canceled`
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not permitted.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), CoreError> {
        if self.is_terminal() {
            return Err(CoreError::InvalidPaymentTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Pending => matches!(
                new_status,
                Self::WaitingForCapture | Self::Succeeded | Self::Canceled
            ),
            Self::WaitingForCapture => matches!(new_status, Self::Succeeded | Self::Canceled),
            Self::Succeeded | Self::Canceled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(CoreError::InvalidPaymentTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by payment lifecycle".to_string(),
            })
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "waiting_for_capture" => Ok(Self::WaitingForCapture),
            "succeeded" => Ok(Self::Succeeded),
            "canceled" => Ok(Self::Canceled),
            _ => Err(CoreError::InvalidPaymentStatus {
                status: s.to_string(),
            }),
        }
    }
}
