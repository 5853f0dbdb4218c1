// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collaborators and fixtures shared by the API tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tatami::{CategoryResolver, LookupError, RegistrationLookup};
use tatami_domain::{
    CategoryConstraint, CategoryId, ParticipantKey, TournamentId, TournamentSchedule, WindowConfig,
};

#[derive(Debug, Default)]
pub struct InMemoryRegistrations {
    rows: HashSet<(TournamentId, CategoryId, ParticipantKey)>,
}

impl InMemoryRegistrations {
    pub fn with_row(
        mut self,
        tournament: TournamentId,
        category: CategoryId,
        participant: ParticipantKey,
    ) -> Self {
        self.rows.insert((tournament, category, participant));
        self
    }
}

impl RegistrationLookup for InMemoryRegistrations {
    fn exists(
        &self,
        tournament: TournamentId,
        category: CategoryId,
        participant: &ParticipantKey,
    ) -> Result<bool, LookupError> {
        Ok(self
            .rows
            .contains(&(tournament, category, participant.clone())))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategories {
    constraints: HashMap<CategoryId, CategoryConstraint>,
}

impl InMemoryCategories {
    pub fn with_category(mut self, category: CategoryId, constraint: CategoryConstraint) -> Self {
        self.constraints.insert(category, constraint);
        self
    }
}

impl CategoryResolver for InMemoryCategories {
    fn resolve(&self, category: CategoryId) -> Result<Option<CategoryConstraint>, LookupError> {
        Ok(self.constraints.get(&category).cloned())
    }
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn adult_constraint() -> CategoryConstraint {
    CategoryConstraint::new(
        vec![60, 66, 73],
        vec![String::from("white"), String::from("blue")],
        Some(18),
        Some(35),
        false,
    )
    .unwrap()
}

pub fn three_tier_windows() -> WindowConfig {
    WindowConfig::new(
        Some(at(2024, 1, 1)),
        Some(Decimal::new(30, 0)),
        Some(at(2024, 2, 1)),
        Some(Decimal::new(50, 0)),
        Some(at(2024, 2, 20)),
        Some(Decimal::new(70, 0)),
        at(2024, 3, 1),
    )
    .unwrap()
}

pub fn schedule() -> TournamentSchedule {
    TournamentSchedule::new(at(2024, 3, 1), at(2024, 4, 1), at(2024, 4, 3)).unwrap()
}
