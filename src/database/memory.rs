// ABOUTME: In-memory DatabaseProvider backed by concurrent maps
// ABOUTME: Uniqueness indexes stand in for SQL unique constraints under concurrency
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Provider
//!
//! `DashMap`-backed implementation used by tests and embedded hosts. The
//! one-active-goal-per-user and one-entry-per-measurement invariants are held
//! by dedicated index maps whose entry API gives atomic check-then-insert,
//! so concurrent racers lose with the same domain error a unique constraint
//! would produce.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::database::DatabaseProvider;
use crate::errors::{EngineError, EngineResult};
use crate::models::{BodyMeasurement, Goal, GoalStatus, ProgressEntry, UserProfile};

/// In-memory repository; cheap to clone, all clones share state
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    users: DashMap<Uuid, UserProfile>,
    measurements: DashMap<Uuid, BodyMeasurement>,
    goals: DashMap<Uuid, Goal>,
    progress: DashMap<Uuid, ProgressEntry>,
    /// user_id -> id of that user's ACTIVE goal
    active_goal_by_user: DashMap<Uuid, Uuid>,
    /// measurement_id -> id of the entry that consumed it
    entry_by_measurement: DashMap<Uuid, Uuid>,
}

impl InMemoryDatabase {
    /// Create an empty in-memory repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatabaseProvider for InMemoryDatabase {
    async fn create_user(&self, user: &UserProfile) -> EngineResult<()> {
        self.inner.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: Uuid) -> EngineResult<Option<UserProfile>> {
        Ok(self.inner.users.get(&user_id).map(|u| u.value().clone()))
    }

    async fn create_measurement(&self, measurement: &BodyMeasurement) -> EngineResult<()> {
        self.inner
            .measurements
            .insert(measurement.id, measurement.clone());
        Ok(())
    }

    async fn get_measurement(&self, id: Uuid) -> EngineResult<Option<BodyMeasurement>> {
        Ok(self.inner.measurements.get(&id).map(|m| m.value().clone()))
    }

    async fn create_goal(&self, goal: &Goal) -> EngineResult<()> {
        // Atomic claim of the user's single ACTIVE slot. Losers of a race
        // hit the occupied arm and receive the domain error.
        match self.inner.active_goal_by_user.entry(goal.user_id) {
            Entry::Occupied(_) => return Err(EngineError::ActiveGoalExists),
            Entry::Vacant(slot) => {
                slot.insert(goal.id);
            }
        }
        self.inner.goals.insert(goal.id, goal.clone());
        Ok(())
    }

    async fn get_goal(&self, id: Uuid) -> EngineResult<Option<Goal>> {
        Ok(self.inner.goals.get(&id).map(|g| g.value().clone()))
    }

    async fn find_active_goal(&self, user_id: Uuid) -> EngineResult<Option<Goal>> {
        let Some(goal_id) = self.inner.active_goal_by_user.get(&user_id).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.inner.goals.get(&goal_id).map(|g| g.value().clone()))
    }

    async fn update_goal(&self, goal: &Goal) -> EngineResult<()> {
        if !self.inner.goals.contains_key(&goal.id) {
            return Err(EngineError::GoalNotFound(goal.id));
        }
        // Leaving ACTIVE releases the user's slot for a future goal.
        if goal.status != GoalStatus::Active {
            self.inner
                .active_goal_by_user
                .remove_if(&goal.user_id, |_, active_id| *active_id == goal.id);
        }
        self.inner.goals.insert(goal.id, goal.clone());
        Ok(())
    }

    async fn create_progress_entry(&self, entry: &ProgressEntry) -> EngineResult<()> {
        // Each measurement feeds at most one ledger entry, ever.
        match self.inner.entry_by_measurement.entry(entry.measurement_id) {
            Entry::Occupied(_) => {
                return Err(EngineError::MeasurementAlreadyLogged(entry.measurement_id))
            }
            Entry::Vacant(slot) => {
                slot.insert(entry.id);
            }
        }
        self.inner.progress.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn list_progress_entries(&self, goal_id: Uuid) -> EngineResult<Vec<ProgressEntry>> {
        let mut entries: Vec<ProgressEntry> = self
            .inner
            .progress
            .iter()
            .filter(|e| e.goal_id == goal_id)
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by_key(|e| e.week_number);
        Ok(entries)
    }
}
