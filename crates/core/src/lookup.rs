// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator traits for caller-owned data access.
//!
//! The decision engine owns no storage. Existing registrations and category
//! constraints live in the surrounding application; these traits are the
//! seam through which it supplies them. Both are read-only from this crate's
//! point of view.

use crate::error::LookupError;
use tatami_domain::{CategoryConstraint, CategoryId, ParticipantKey, TournamentId};

/// Looks up whether a participant already registered in a category.
pub trait RegistrationLookup {
    /// Returns whether a prior registration exists for the same tournament,
    /// category, and participant identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data access fails.
    fn exists(
        &self,
        tournament: TournamentId,
        category: CategoryId,
        participant: &ParticipantKey,
    ) -> Result<bool, LookupError>;
}

/// Resolves the constraint configured for a category.
pub trait CategoryResolver {
    /// Returns the fully-populated constraint for `category`, or `None` if
    /// the category has no constraint configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data access fails.
    fn resolve(&self, category: CategoryId) -> Result<Option<CategoryConstraint>, LookupError>;
}
