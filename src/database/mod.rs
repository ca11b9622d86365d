// ABOUTME: Repository abstraction for the recomposition engine
// ABOUTME: Trait seam between pure engine logic and whatever store hosts the data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Abstraction Layer
//!
//! The engine never touches a store directly; it reaches persistence through
//! [`DatabaseProvider`]. Implementations must make the two creation methods
//! atomic with their uniqueness invariants (one ACTIVE goal per user, one
//! progress entry per measurement) so a race that slips past the services'
//! pre-checks still surfaces as the corresponding domain error rather than a
//! generic storage failure.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::EngineResult;
use crate::models::{BodyMeasurement, Goal, ProgressEntry, UserProfile};

pub mod memory;

/// Core repository trait consumed by every engine service
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    // ================================
    // Users
    // ================================

    /// Store a user profile
    async fn create_user(&self, user: &UserProfile) -> EngineResult<()>;

    /// Fetch a user profile by id
    async fn get_user(&self, user_id: Uuid) -> EngineResult<Option<UserProfile>>;

    // ================================
    // Measurements
    // ================================

    /// Store an immutable body measurement
    async fn create_measurement(&self, measurement: &BodyMeasurement) -> EngineResult<()>;

    /// Fetch a measurement by id
    async fn get_measurement(&self, id: Uuid) -> EngineResult<Option<BodyMeasurement>>;

    // ================================
    // Goals
    // ================================

    /// Store a new goal, enforcing at most one ACTIVE goal per user.
    ///
    /// Fails with [`crate::errors::EngineError::ActiveGoalExists`] when the
    /// user already holds an ACTIVE goal, including when two creations race.
    async fn create_goal(&self, goal: &Goal) -> EngineResult<()>;

    /// Fetch a goal by id
    async fn get_goal(&self, id: Uuid) -> EngineResult<Option<Goal>>;

    /// Fetch the user's ACTIVE goal, if any
    async fn find_active_goal(&self, user_id: Uuid) -> EngineResult<Option<Goal>>;

    /// Persist a goal's updated state (status transitions)
    async fn update_goal(&self, goal: &Goal) -> EngineResult<()>;

    // ================================
    // Progress ledger
    // ================================

    /// Append a progress entry, enforcing one entry per measurement ever.
    ///
    /// Fails with
    /// [`crate::errors::EngineError::MeasurementAlreadyLogged`] when the
    /// measurement was already consumed, including when two appends race.
    async fn create_progress_entry(&self, entry: &ProgressEntry) -> EngineResult<()>;

    /// List a goal's progress entries ordered by `week_number` ascending
    async fn list_progress_entries(&self, goal_id: Uuid) -> EngineResult<Vec<ProgressEntry>>;
}
