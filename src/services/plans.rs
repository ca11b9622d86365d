// ABOUTME: Diet-plan generation for an existing goal
// ABOUTME: Macro breakdown at the latest checkpoint weight and the prescribed calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Diet Plans
//!
//! Composes the goal's calorie prescription with a macronutrient breakdown
//! at the most recent known bodyweight (the initial snapshot until the
//! ledger has entries).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::DatabaseProvider;
use crate::errors::{EngineError, EngineResult};
use crate::intelligence::macros::{calculate_macros, MacronutrientBreakdown};
use crate::models::GoalType;

/// Daily nutrition prescription derived from a goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    /// Goal the plan belongs to
    pub goal_id: Uuid,
    /// Cutting or bulking
    pub goal_type: GoalType,
    /// Prescribed daily calories from goal creation
    pub daily_calorie_target: i32,
    /// Bodyweight the macros were computed at (kg)
    pub reference_weight_kg: f64,
    /// Macronutrient split of the calorie target
    pub macros: MacronutrientBreakdown,
}

/// Build the diet plan for a goal.
///
/// # Errors
///
/// Returns [`EngineError::GoalNotFound`] when the goal is absent.
pub async fn diet_plan<DB: DatabaseProvider>(db: &DB, goal_id: Uuid) -> EngineResult<DietPlan> {
    let goal = db
        .get_goal(goal_id)
        .await?
        .ok_or(EngineError::GoalNotFound(goal_id))?;

    let entries = db.list_progress_entries(goal_id).await?;
    let reference_weight_kg = entries
        .iter()
        .max_by_key(|e| e.week_number)
        .map_or(goal.initial_weight_kg, |latest| latest.weight_kg);

    let macros = calculate_macros(goal.target_calories, goal.goal_type, reference_weight_kg);

    Ok(DietPlan {
        goal_id: goal.id,
        goal_type: goal.goal_type,
        daily_calorie_target: goal.target_calories,
        reference_weight_kg,
        macros,
    })
}
