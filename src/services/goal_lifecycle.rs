// ABOUTME: Goal lifecycle service: creation, completion detection, cancellation
// ABOUTME: Enforces the single-active-goal invariant and derives the calorie prescription
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Goal Lifecycle
//!
//! Creation composes the pure components in order: active-goal check,
//! measurement resolution and ownership, boundary-shape and safety
//! validation, energy model, and timeline estimate, then commits the goal
//! with snapshots copied from the initial measurement. The one-active-goal
//! invariant is checked here and enforced again atomically by the
//! repository, so a concurrent double-create still loses with
//! [`EngineError::ActiveGoalExists`].

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::database::DatabaseProvider;
use crate::errors::{EngineError, EngineResult, SafetyViolation};
use crate::intelligence::{energy, safety, timeline};
use crate::models::{Goal, GoalStatus, GoalType, UserProfile};

/// Parameters for creating a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    /// Cutting or bulking
    pub goal_type: GoalType,
    /// The measurement the goal starts from
    pub initial_measurement_id: Uuid,
    /// Target body-fat percentage (cutting goals only)
    pub target_body_fat_percentage: Option<f64>,
    /// Ceiling body-fat percentage (bulking goals only)
    pub ceiling_body_fat_percentage: Option<f64>,
}

/// Exactly the type-appropriate boundary must be set; the other must be absent.
fn check_boundary_shape(data: &NewGoal) -> Result<(), SafetyViolation> {
    match data.goal_type {
        GoalType::Cutting => {
            if data.target_body_fat_percentage.is_none() {
                return Err(SafetyViolation::MissingBoundary(
                    "target body fat percentage required for cutting goals".into(),
                ));
            }
            if data.ceiling_body_fat_percentage.is_some() {
                return Err(SafetyViolation::MissingBoundary(
                    "ceiling body fat percentage must not be set for cutting goals".into(),
                ));
            }
        }
        GoalType::Bulking => {
            if data.ceiling_body_fat_percentage.is_none() {
                return Err(SafetyViolation::MissingBoundary(
                    "ceiling body fat percentage required for bulking goals".into(),
                ));
            }
            if data.target_body_fat_percentage.is_some() {
                return Err(SafetyViolation::MissingBoundary(
                    "target body fat percentage must not be set for bulking goals".into(),
                ));
            }
        }
    }
    Ok(())
}

/// Create a new body recomposition goal for the user.
///
/// # Errors
///
/// - [`EngineError::ActiveGoalExists`] when the user already has an ACTIVE goal
/// - [`EngineError::MeasurementNotFound`] when the initial measurement is absent
/// - [`EngineError::OwnershipMismatch`] when it belongs to a different user
/// - [`EngineError::SafetyViolation`] when boundaries fail shape or safety rules
pub async fn create_goal<DB: DatabaseProvider>(
    db: &DB,
    config: &EngineConfig,
    user: &UserProfile,
    data: NewGoal,
) -> EngineResult<Goal> {
    if db.find_active_goal(user.id).await?.is_some() {
        return Err(EngineError::ActiveGoalExists);
    }

    let measurement = db
        .get_measurement(data.initial_measurement_id)
        .await?
        .ok_or(EngineError::MeasurementNotFound(data.initial_measurement_id))?;
    if measurement.user_id != user.id {
        return Err(EngineError::ownership_mismatch(
            "initial measurement does not belong to this user",
        ));
    }

    check_boundary_shape(&data)?;
    safety::validate(
        data.goal_type,
        measurement.body_fat_percentage,
        data.target_body_fat_percentage,
        data.ceiling_body_fat_percentage,
        user.sex,
    )?;

    let now = Utc::now();
    let age = user.age_on(now.date_naive());
    let bmr = energy::bmr(measurement.weight_kg, user.height_cm, age, user.sex);
    let tdee = energy::tdee(bmr, user.activity_level);

    let (target_calories, estimated_weeks) = match data.goal_type {
        GoalType::Cutting => {
            let target = energy::cutting_target(tdee, user.sex, config.cutting_deficit);
            // Shape check above guarantees the boundary is present.
            let boundary = data.target_body_fat_percentage.unwrap_or_default();
            let weeks = timeline::estimate_weeks(
                measurement.body_fat_percentage,
                boundary,
                config.cutting_monthly_rate,
            );
            (target, weeks)
        }
        GoalType::Bulking => {
            let target = energy::bulking_target(tdee, config.bulking_surplus);
            let boundary = data.ceiling_body_fat_percentage.unwrap_or_default();
            let weeks = timeline::estimate_weeks(
                measurement.body_fat_percentage,
                boundary,
                config.bulking_monthly_rate,
            );
            (target, weeks)
        }
    };

    let goal = Goal {
        id: Uuid::new_v4(),
        user_id: user.id,
        goal_type: data.goal_type,
        status: GoalStatus::Active,
        initial_measurement_id: measurement.id,
        initial_body_fat_percentage: measurement.body_fat_percentage,
        initial_weight_kg: measurement.weight_kg,
        target_body_fat_percentage: data.target_body_fat_percentage,
        ceiling_body_fat_percentage: data.ceiling_body_fat_percentage,
        target_calories,
        estimated_weeks_to_goal: estimated_weeks,
        started_at: now,
        completed_at: None,
    };
    db.create_goal(&goal).await?;

    info!(
        user_id = %user.id,
        goal_id = %goal.id,
        goal_type = ?goal.goal_type,
        target_calories,
        estimated_weeks,
        "goal created"
    );

    Ok(goal)
}

/// Fetch a goal by id.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when absent.
pub async fn get_goal<DB: DatabaseProvider>(db: &DB, goal_id: Uuid) -> EngineResult<Goal> {
    db.get_goal(goal_id)
        .await?
        .ok_or(EngineError::GoalNotFound(goal_id))
}

/// Check whether the latest body-fat reading completes the goal, and commit
/// the transition when it does.
///
/// A no-op returning `false` unless the goal is ACTIVE. Cutting completes at
/// `latest_bf <= target`; bulking at `latest_bf >= ceiling`.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when the goal is absent.
pub async fn check_completion<DB: DatabaseProvider>(
    db: &DB,
    goal_id: Uuid,
    latest_bf: f64,
) -> EngineResult<bool> {
    let mut goal = get_goal(db, goal_id).await?;
    if !goal.is_active() {
        return Ok(false);
    }

    let completed = match goal.goal_type {
        GoalType::Cutting => goal
            .target_body_fat_percentage
            .is_some_and(|target| latest_bf <= target),
        GoalType::Bulking => goal
            .ceiling_body_fat_percentage
            .is_some_and(|ceiling| latest_bf >= ceiling),
    };
    if !completed {
        return Ok(false);
    }

    goal.status = GoalStatus::Completed;
    goal.completed_at = Some(Utc::now());
    db.update_goal(&goal).await?;

    info!(goal_id = %goal.id, latest_bf, "goal completed");
    Ok(true)
}

/// Cancel the user's goal by explicit request.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when absent,
/// [`EngineError::OwnershipMismatch`] when the goal belongs to another user,
/// and [`EngineError::GoalNotActive`] when it is not ACTIVE.
pub async fn cancel_goal<DB: DatabaseProvider>(
    db: &DB,
    goal_id: Uuid,
    user_id: Uuid,
) -> EngineResult<Goal> {
    let mut goal = get_goal(db, goal_id).await?;
    if goal.user_id != user_id {
        return Err(EngineError::ownership_mismatch(
            "goal does not belong to this user",
        ));
    }
    if !goal.is_active() {
        return Err(EngineError::GoalNotActive(goal_id));
    }

    goal.status = GoalStatus::Cancelled;
    db.update_goal(&goal).await?;

    info!(goal_id = %goal.id, "goal cancelled");
    Ok(goal)
}
