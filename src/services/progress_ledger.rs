// ABOUTME: Append-only progress ledger with cadence validation and delta computation
// ABOUTME: Flags bulking ceiling/rate warnings and triggers completion on ceiling contact
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Progress Ledger
//!
//! Appends weekly checkpoints to a goal's ledger. Each append validates the
//! 7-day cadence against the previous checkpoint's measurement timestamp,
//! computes signed deltas, judges the cumulative trajectory against the
//! goal-type window, and, for bulking goals, attaches transient ceiling and
//! rate warnings. The warnings live only on the response: the stored entry
//! is immutable and they are recomputed on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::database::DatabaseProvider;
use crate::errors::{EngineError, EngineResult};
use crate::intelligence::physiological_constants::progress::{
    BULKING_MAX_WEEKLY_GAIN, BULKING_MIN_WEEKLY_GAIN, CEILING_PROXIMITY_PERCENT,
    CUTTING_MAX_WEEKLY_LOSS, CUTTING_MIN_WEEKLY_LOSS, MAX_BULKING_RATE_PER_WEEK,
};
use crate::models::{Goal, GoalStatus, GoalType, ProgressEntry};

/// A newly appended progress entry with its transient annotations.
///
/// The warnings are response-only: recomputed at append/read time, never
/// persisted with the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedProgress {
    /// The persisted ledger entry
    pub entry: ProgressEntry,
    /// Warning when at or within 1% of the bulking ceiling
    pub ceiling_warning: Option<String>,
    /// Warning when body fat is gained faster than 0.5%/week
    pub rate_warning: Option<String>,
}

/// The baseline a new entry's deltas and cadence are measured against
struct Checkpoint {
    body_fat_percentage: f64,
    weight_kg: f64,
    measured_at: DateTime<Utc>,
}

/// Whether cumulative progress since goal start meets the expected window.
///
/// Cutting expects `0.4..=1.2` percentage points of loss per elapsed week,
/// judged on the absolute cumulative change. Bulking expects `0.1..=0.6`
/// points of gain per elapsed week, judged on the signed change: a bulk
/// that is losing fat is never on track.
#[must_use]
pub fn is_on_track(goal_type: GoalType, cumulative_bf_change: f64, weeks_elapsed: u32) -> bool {
    let weeks = f64::from(weeks_elapsed);
    match goal_type {
        GoalType::Cutting => {
            let expected_min = CUTTING_MIN_WEEKLY_LOSS * weeks;
            let expected_max = CUTTING_MAX_WEEKLY_LOSS * weeks;
            let total_loss = cumulative_bf_change.abs();
            (expected_min..=expected_max).contains(&total_loss)
        }
        GoalType::Bulking => {
            let expected_min = BULKING_MIN_WEEKLY_GAIN * weeks;
            let expected_max = BULKING_MAX_WEEKLY_GAIN * weeks;
            (expected_min..=expected_max).contains(&cumulative_bf_change)
        }
    }
}

/// Check proximity to the bulking ceiling.
///
/// Returns the warning message (if any) and whether the goal should complete.
#[must_use]
pub fn check_bulking_ceiling(current_bf: f64, ceiling_bf: f64) -> (Option<String>, bool) {
    let diff = ceiling_bf - current_bf;

    if diff <= 0.0 {
        return (Some("Ceiling reached - bulking goal complete!".to_owned()), true);
    }

    if diff < CEILING_PROXIMITY_PERCENT {
        return (
            Some(format!(
                "Approaching ceiling! Only {diff:.1}% remaining. \
                 Consider transitioning to maintenance or cutting."
            )),
            false,
        );
    }

    (None, false)
}

/// Check whether body fat is being gained too fast during a bulk.
#[must_use]
pub fn check_bulking_rate(previous_bf: f64, current_bf: f64, weeks: i64) -> Option<String> {
    if weeks <= 0 {
        return None;
    }

    let rate = (current_bf - previous_bf) / weeks as f64;
    if rate > MAX_BULKING_RATE_PER_WEEK {
        return Some(format!(
            "Gaining body fat too quickly ({rate:.2}%/week). \
             Ideal bulk rate is 0.1-0.3%/week. Consider reducing caloric surplus."
        ));
    }

    None
}

async fn prior_checkpoint<DB: DatabaseProvider>(
    db: &DB,
    goal: &Goal,
    entries: &[ProgressEntry],
) -> EngineResult<Checkpoint> {
    let measurement_id = entries
        .iter()
        .max_by_key(|e| e.logged_at)
        .map_or(goal.initial_measurement_id, |last| last.measurement_id);

    let measurement = db
        .get_measurement(measurement_id)
        .await?
        .ok_or(EngineError::MeasurementNotFound(measurement_id))?;

    Ok(Checkpoint {
        body_fat_percentage: measurement.body_fat_percentage,
        weight_kg: measurement.weight_kg,
        measured_at: measurement.measured_at,
    })
}

/// Append a new progress entry to the goal's ledger.
///
/// # Errors
///
/// - [`EngineError::GoalNotFound`] / [`EngineError::GoalNotActive`]
/// - [`EngineError::MeasurementNotFound`] when the measurement is absent
/// - [`EngineError::OwnershipMismatch`] when it belongs to another user
/// - [`EngineError::TooSoon`] when taken under 7 whole days after the
///   previous checkpoint, carrying the actual day count
/// - [`EngineError::MeasurementAlreadyLogged`] when the measurement already
///   feeds an entry (also how a concurrent double-append loses)
pub async fn append_progress<DB: DatabaseProvider>(
    db: &DB,
    config: &EngineConfig,
    goal_id: Uuid,
    measurement_id: Uuid,
    notes: Option<String>,
) -> EngineResult<LoggedProgress> {
    let mut goal = db
        .get_goal(goal_id)
        .await?
        .ok_or(EngineError::GoalNotFound(goal_id))?;
    if !goal.is_active() {
        return Err(EngineError::GoalNotActive(goal_id));
    }

    let entries = db.list_progress_entries(goal_id).await?;

    let measurement = db
        .get_measurement(measurement_id)
        .await?
        .ok_or(EngineError::MeasurementNotFound(measurement_id))?;
    if measurement.user_id != goal.user_id {
        return Err(EngineError::ownership_mismatch(
            "measurement does not belong to the goal's user",
        ));
    }

    let week_number = entries.len() as u32 + 1;

    let prior = prior_checkpoint(db, &goal, &entries).await?;
    let days_since_prior = (measurement.measured_at - prior.measured_at).num_days();
    if days_since_prior < config.min_days_between_checkpoints {
        warn!(
            goal_id = %goal_id,
            days = days_since_prior,
            "progress entry rejected: cadence violation"
        );
        return Err(EngineError::TooSoon {
            days: days_since_prior,
        });
    }

    let body_fat_change = measurement.body_fat_percentage - prior.body_fat_percentage;
    let weight_change_kg = measurement.weight_kg - prior.weight_kg;

    let cumulative_bf_change =
        measurement.body_fat_percentage - goal.initial_body_fat_percentage;
    let on_track = is_on_track(goal.goal_type, cumulative_bf_change, week_number);

    let mut ceiling_warning = None;
    let mut rate_warning = None;
    let mut should_complete = false;

    if goal.goal_type == GoalType::Bulking {
        if let Some(ceiling) = goal.ceiling_body_fat_percentage {
            let (warning, complete) =
                check_bulking_ceiling(measurement.body_fat_percentage, ceiling);
            ceiling_warning = warning;
            should_complete = complete;
        }

        if !entries.is_empty() {
            let weeks_between = (days_since_prior / 7).max(1);
            rate_warning = check_bulking_rate(
                prior.body_fat_percentage,
                measurement.body_fat_percentage,
                weeks_between,
            );
            if let Some(message) = &rate_warning {
                warn!(goal_id = %goal_id, "{message}");
            }
        }
    }

    let entry = ProgressEntry {
        id: Uuid::new_v4(),
        goal_id,
        measurement_id,
        week_number,
        body_fat_percentage: measurement.body_fat_percentage,
        weight_kg: measurement.weight_kg,
        body_fat_change,
        weight_change_kg,
        is_on_track: on_track,
        notes,
        logged_at: Utc::now(),
    };
    db.create_progress_entry(&entry).await?;

    // Ceiling contact closes the goal as part of the same logical operation.
    if should_complete {
        goal.status = GoalStatus::Completed;
        goal.completed_at = Some(Utc::now());
        db.update_goal(&goal).await?;
        info!(goal_id = %goal_id, "bulking goal completed at ceiling");
    }

    info!(
        goal_id = %goal_id,
        week = week_number,
        body_fat = measurement.body_fat_percentage,
        on_track,
        "progress logged"
    );

    Ok(LoggedProgress {
        entry,
        ceiling_warning,
        rate_warning,
    })
}

/// List a goal's ledger ordered by week number.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when the goal is absent.
pub async fn list_progress<DB: DatabaseProvider>(
    db: &DB,
    goal_id: Uuid,
) -> EngineResult<Vec<ProgressEntry>> {
    if db.get_goal(goal_id).await?.is_none() {
        return Err(EngineError::GoalNotFound(goal_id));
    }
    db.list_progress_entries(goal_id).await
}
