// ABOUTME: Trends report orchestration over the repository seam
// ABOUTME: Loads the goal and its ordered ledger, delegates to the pure analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Trends Service
//!
//! Thin orchestration: load a consistent (goal, ledger) snapshot and hand it
//! to [`crate::intelligence::trend_analyzer`]. Calling twice on an unchanged
//! ledger returns identical output.

use uuid::Uuid;

use crate::database::DatabaseProvider;
use crate::errors::{EngineError, EngineResult};
use crate::intelligence::trend_analyzer::{self, TrendsReport};

/// Produce the trends report for a goal.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when the goal is absent.
pub async fn get_trends<DB: DatabaseProvider>(db: &DB, goal_id: Uuid) -> EngineResult<TrendsReport> {
    let goal = db
        .get_goal(goal_id)
        .await?
        .ok_or(EngineError::GoalNotFound(goal_id))?;
    let entries = db.list_progress_entries(goal_id).await?;

    Ok(trend_analyzer::analyze(&goal, &entries))
}
