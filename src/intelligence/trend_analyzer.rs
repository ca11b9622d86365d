// ABOUTME: Trend classification and trends reporting over a goal's progress ledger
// ABOUTME: Weekly averages, percent-complete, adjustment suggestions, weeks-remaining estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Trend Analyzer
//!
//! Consumes a goal and its ordered progress ledger and produces a
//! [`TrendsReport`]: percent-complete, goal-level on-track status, a trend
//! verdict over the most recent window, a templated adjustment suggestion,
//! and a remaining-weeks estimate. Pure functions throughout; the analysis
//! of an unchanged ledger is always identical.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intelligence::physiological_constants::trend::{
    BULKING_IMPROVING_MAX, BULKING_IMPROVING_MIN, BULKING_PLATEAU_BELOW, BULKING_WORSENING_ABOVE,
    CUTTING_IMPROVING_BELOW, CUTTING_PLATEAU_ABOVE, ON_TRACK_RATIO, WINDOW_ENTRIES,
};
use crate::models::{Goal, GoalType, ProgressEntry};

/// Trajectory verdict over the recent ledger window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Change rate is in the desirable band for the goal type
    Improving,
    /// Little or no movement
    Plateau,
    /// Moving in a harmful direction (bulking: gaining too fast)
    Worsening,
    /// Fewer entries than the classification window needs
    InsufficientData,
}

impl Trend {
    /// Wire-format name of the verdict
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Plateau => "plateau",
            Self::Worsening => "worsening",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

/// Aggregated trend analysis for one goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsReport {
    /// Goal being analyzed
    pub goal_id: Uuid,
    /// Percent of the body-fat distance covered, clamped to 0-100
    pub progress_percentage: f64,
    /// Number of logged checkpoints
    pub weeks_elapsed: usize,
    /// Whether at least 60% of checkpoints were individually on track
    pub is_on_track: bool,
    /// Mean per-entry body-fat change (% points)
    pub weekly_bf_change_avg: f64,
    /// Mean per-entry weight change (kg)
    pub weekly_weight_change_avg: f64,
    /// Trajectory verdict
    pub trend: Trend,
    /// Recommended plan adjustment, when one applies
    pub adjustment_suggestion: Option<String>,
    /// Estimated weeks to the boundary at the observed rate;
    /// `None` when the observed rate is exactly zero
    pub estimated_weeks_remaining: Option<i64>,
}

/// Produce the full trends report for a goal and its ordered ledger.
///
/// `entries` must be sorted by `week_number` ascending. With fewer than two
/// entries the report carries zeroed averages, an `insufficient_data`
/// verdict, and falls back to the goal's creation-time weeks estimate.
#[must_use]
pub fn analyze(goal: &Goal, entries: &[ProgressEntry]) -> TrendsReport {
    if entries.len() < 2 {
        return TrendsReport {
            goal_id: goal.id,
            progress_percentage: 0.0,
            weeks_elapsed: entries.len(),
            is_on_track: false,
            weekly_bf_change_avg: 0.0,
            weekly_weight_change_avg: 0.0,
            trend: Trend::InsufficientData,
            adjustment_suggestion: Some(
                "Keep logging weekly measurements to track progress".to_owned(),
            ),
            estimated_weeks_remaining: Some(i64::from(goal.estimated_weeks_to_goal)),
        };
    }

    let weeks_elapsed = entries.len();
    let weekly_bf_change_avg =
        entries.iter().map(|e| e.body_fat_change).sum::<f64>() / weeks_elapsed as f64;
    let weekly_weight_change_avg =
        entries.iter().map(|e| e.weight_change_kg).sum::<f64>() / weeks_elapsed as f64;

    let progress_percentage = progress_percentage(goal, entries);

    let on_track_count = entries.iter().filter(|e| e.is_on_track).count();
    let is_on_track = on_track_count as f64 / weeks_elapsed as f64 >= ON_TRACK_RATIO;

    let trend = classify_trend(entries, goal.goal_type);
    let adjustment_suggestion =
        suggest_adjustment(goal.goal_type, trend, is_on_track, weekly_bf_change_avg);

    let latest = &entries[entries.len() - 1];
    let estimated_weeks_remaining =
        estimate_weeks_remaining(goal, latest.body_fat_percentage, weekly_bf_change_avg);

    TrendsReport {
        goal_id: goal.id,
        progress_percentage,
        weeks_elapsed,
        is_on_track,
        weekly_bf_change_avg,
        weekly_weight_change_avg,
        trend,
        adjustment_suggestion,
        estimated_weeks_remaining,
    }
}

/// Percent of the body-fat distance from initial snapshot to boundary covered
/// by the latest checkpoint, clamped to 0-100. Zero when the ledger is empty.
#[must_use]
pub fn progress_percentage(goal: &Goal, entries: &[ProgressEntry]) -> f64 {
    let Some(latest) = entries.iter().max_by_key(|e| e.week_number) else {
        return 0.0;
    };
    let Some(boundary) = goal.boundary_body_fat() else {
        return 0.0;
    };

    let current_bf = latest.body_fat_percentage;
    let initial_bf = goal.initial_body_fat_percentage;

    let progress = match goal.goal_type {
        GoalType::Cutting => (initial_bf - current_bf) / (initial_bf - boundary) * 100.0,
        GoalType::Bulking => (current_bf - initial_bf) / (boundary - initial_bf) * 100.0,
    };

    progress.clamp(0.0, 100.0)
}

/// Classify the trajectory from the most recent window of entries.
///
/// Requires at least three entries; averages their individual per-week
/// body-fat changes and places the average against goal-type bands.
#[must_use]
pub fn classify_trend(entries: &[ProgressEntry], goal_type: GoalType) -> Trend {
    if entries.len() < WINDOW_ENTRIES {
        return Trend::InsufficientData;
    }

    let recent = &entries[entries.len() - WINDOW_ENTRIES..];
    let avg_change =
        recent.iter().map(|e| e.body_fat_change).sum::<f64>() / recent.len() as f64;

    match goal_type {
        GoalType::Cutting => {
            if avg_change < CUTTING_IMPROVING_BELOW {
                Trend::Improving
            } else if avg_change > CUTTING_PLATEAU_ABOVE {
                Trend::Plateau
            } else {
                // Moderate loss between the two thresholds also reads as improving.
                Trend::Improving
            }
        }
        GoalType::Bulking => {
            if (BULKING_IMPROVING_MIN..=BULKING_IMPROVING_MAX).contains(&avg_change) {
                Trend::Improving
            } else if avg_change < BULKING_PLATEAU_BELOW {
                Trend::Plateau
            } else if avg_change > BULKING_WORSENING_ABOVE {
                Trend::Worsening
            } else {
                Trend::Improving
            }
        }
    }
}

/// Templated adjustment suggestion keyed on goal type, verdict, goal-level
/// on-track status, and the observed average weekly body-fat change.
#[must_use]
pub fn suggest_adjustment(
    goal_type: GoalType,
    trend: Trend,
    is_on_track: bool,
    weekly_bf_change_avg: f64,
) -> Option<String> {
    if trend == Trend::InsufficientData {
        return Some("Keep logging weekly measurements to track progress".to_owned());
    }

    let message = match goal_type {
        GoalType::Cutting => {
            if trend == Trend::Improving && is_on_track {
                "Maintain current plan - excellent progress!"
            } else if trend == Trend::Plateau {
                "Progress has slowed. Consider increasing daily deficit by 100-200 calories \
                 or adding 1-2 cardio sessions per week."
            } else if !is_on_track && weekly_bf_change_avg > -0.3 {
                "Progress slower than expected. Verify calorie tracking accuracy and consider \
                 increasing training volume."
            } else if weekly_bf_change_avg < -1.0 {
                "Progress faster than expected - you may be losing muscle. Consider reducing \
                 deficit by 100-200 calories."
            } else {
                "Progress is steady - keep up the good work!"
            }
        }
        GoalType::Bulking => {
            if trend == Trend::Improving && is_on_track {
                "Maintain current plan - lean gaining on track!"
            } else if trend == Trend::Plateau {
                "Weight gain has stalled. Consider increasing daily surplus by 100-200 calories."
            } else if trend == Trend::Worsening {
                "Gaining fat too quickly. Consider reducing daily surplus by 100-200 calories \
                 to stay lean."
            } else {
                "Progress is steady - continue current approach!"
            }
        }
    };

    Some(message.to_owned())
}

/// Estimate whole weeks remaining to the boundary at the observed average
/// weekly rate.
///
/// `None` when the observed rate is exactly zero or the goal carries no
/// boundary; `Some(0)` when the boundary is already reached or passed, or
/// when the observed direction points away from it.
#[must_use]
pub fn estimate_weeks_remaining(
    goal: &Goal,
    current_bf: f64,
    weekly_bf_change_avg: f64,
) -> Option<i64> {
    if weekly_bf_change_avg == 0.0 {
        return None;
    }
    let boundary = goal.boundary_body_fat()?;

    let (remaining, weeks) = match goal.goal_type {
        GoalType::Cutting => {
            let remaining = current_bf - boundary;
            (remaining, remaining / weekly_bf_change_avg.abs())
        }
        GoalType::Bulking => {
            let remaining = boundary - current_bf;
            (remaining, remaining / weekly_bf_change_avg)
        }
    };

    if remaining <= 0.0 {
        return Some(0);
    }
    Some(if weeks > 0.0 { weeks as i64 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalStatus;
    use chrono::Utc;

    fn cutting_goal() -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            goal_type: GoalType::Cutting,
            status: GoalStatus::Active,
            initial_measurement_id: Uuid::new_v4(),
            initial_body_fat_percentage: 22.5,
            initial_weight_kg: 80.0,
            target_body_fat_percentage: Some(15.0),
            ceiling_body_fat_percentage: None,
            target_calories: 2311,
            estimated_weeks_to_goal: 43,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    fn bulking_goal() -> Goal {
        Goal {
            goal_type: GoalType::Bulking,
            initial_body_fat_percentage: 12.0,
            target_body_fat_percentage: None,
            ceiling_body_fat_percentage: Some(18.0),
            ..cutting_goal()
        }
    }

    fn entry(goal_id: Uuid, week: u32, bf: f64, bf_change: f64, on_track: bool) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            goal_id,
            measurement_id: Uuid::new_v4(),
            week_number: week,
            body_fat_percentage: bf,
            weight_kg: 80.0 - f64::from(week),
            body_fat_change: bf_change,
            weight_change_kg: -0.5,
            is_on_track: on_track,
            notes: None,
            logged_at: Utc::now(),
        }
    }

    #[test]
    fn test_insufficient_data_below_two_entries() {
        let goal = cutting_goal();
        let single = vec![entry(goal.id, 1, 21.9, -0.6, true)];

        for entries in [&[][..], &single[..]] {
            let report = analyze(&goal, entries);
            assert_eq!(report.trend, Trend::InsufficientData);
            assert!((report.progress_percentage - 0.0).abs() < f64::EPSILON);
            assert!((report.weekly_bf_change_avg - 0.0).abs() < f64::EPSILON);
            assert!(!report.is_on_track);
            assert_eq!(report.estimated_weeks_remaining, Some(43));
            assert!(report
                .adjustment_suggestion
                .as_deref()
                .unwrap()
                .contains("Keep logging"));
        }
    }

    #[test]
    fn test_two_entries_classify_as_insufficient_but_average() {
        let goal = cutting_goal();
        let entries = vec![
            entry(goal.id, 1, 21.9, -0.6, true),
            entry(goal.id, 2, 21.3, -0.6, true),
        ];
        let report = analyze(&goal, &entries);
        assert_eq!(report.trend, Trend::InsufficientData);
        assert!((report.weekly_bf_change_avg - (-0.6)).abs() < 1e-9);
        assert!(report.is_on_track);
    }

    #[test]
    fn test_cutting_strong_loss_is_improving() {
        let goal = cutting_goal();
        let entries = vec![
            entry(goal.id, 1, 22.0, -0.5, true),
            entry(goal.id, 2, 21.5, -0.5, true),
            entry(goal.id, 3, 21.0, -0.5, true),
        ];
        assert_eq!(classify_trend(&entries, GoalType::Cutting), Trend::Improving);
    }

    #[test]
    fn test_cutting_slow_loss_is_plateau() {
        let goal = cutting_goal();
        let entries = vec![
            entry(goal.id, 1, 22.4, -0.1, false),
            entry(goal.id, 2, 22.3, -0.1, false),
            entry(goal.id, 3, 22.2, -0.1, false),
        ];
        assert_eq!(classify_trend(&entries, GoalType::Cutting), Trend::Plateau);
    }

    #[test]
    fn test_cutting_moderate_loss_band_reads_improving() {
        // Average change of -0.3 sits between the two thresholds.
        let goal = cutting_goal();
        let entries = vec![
            entry(goal.id, 1, 22.2, -0.3, false),
            entry(goal.id, 2, 21.9, -0.3, false),
            entry(goal.id, 3, 21.6, -0.3, false),
        ];
        assert_eq!(classify_trend(&entries, GoalType::Cutting), Trend::Improving);
    }

    #[test]
    fn test_bulking_bands() {
        let goal = bulking_goal();
        let lean = vec![
            entry(goal.id, 1, 12.3, 0.3, true),
            entry(goal.id, 2, 12.6, 0.3, true),
            entry(goal.id, 3, 12.9, 0.3, true),
        ];
        assert_eq!(classify_trend(&lean, GoalType::Bulking), Trend::Improving);

        let stalled = vec![
            entry(goal.id, 1, 12.0, 0.0, false),
            entry(goal.id, 2, 12.0, 0.0, false),
            entry(goal.id, 3, 12.1, 0.1, false),
        ];
        assert_eq!(classify_trend(&stalled, GoalType::Bulking), Trend::Plateau);

        let fast = vec![
            entry(goal.id, 1, 12.7, 0.7, false),
            entry(goal.id, 2, 13.4, 0.7, false),
            entry(goal.id, 3, 14.1, 0.7, false),
        ];
        assert_eq!(classify_trend(&fast, GoalType::Bulking), Trend::Worsening);
    }

    #[test]
    fn test_progress_percentage_cutting() {
        let goal = cutting_goal();
        // 22.5 -> 18.75 out of 22.5 -> 15.0 is exactly half way.
        let entries = vec![
            entry(goal.id, 1, 20.0, -2.5, true),
            entry(goal.id, 2, 18.75, -1.25, true),
        ];
        let pct = progress_percentage(&goal, &entries);
        assert!((pct - 50.0).abs() < 1e-9, "pct = {pct}");
    }

    #[test]
    fn test_progress_percentage_clamped() {
        let goal = cutting_goal();
        // Moving away from the target clamps at zero.
        let regressed = vec![entry(goal.id, 1, 23.5, 1.0, false)];
        assert!((progress_percentage(&goal, &regressed) - 0.0).abs() < f64::EPSILON);

        // Past the target clamps at 100.
        let overshot = vec![entry(goal.id, 1, 14.0, -8.5, true)];
        assert!((progress_percentage(&goal, &overshot) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_on_track_ratio_threshold() {
        let goal = cutting_goal();
        // 2 of 3 on track = 0.667 >= 0.6
        let entries = vec![
            entry(goal.id, 1, 22.0, -0.5, true),
            entry(goal.id, 2, 21.5, -0.5, true),
            entry(goal.id, 3, 21.4, -0.1, false),
        ];
        assert!(analyze(&goal, &entries).is_on_track);

        // 1 of 3 = 0.333 < 0.6
        let entries = vec![
            entry(goal.id, 1, 22.0, -0.5, true),
            entry(goal.id, 2, 21.9, -0.1, false),
            entry(goal.id, 3, 21.8, -0.1, false),
        ];
        assert!(!analyze(&goal, &entries).is_on_track);
    }

    #[test]
    fn test_weeks_remaining_zero_rate_is_none() {
        let goal = cutting_goal();
        assert_eq!(estimate_weeks_remaining(&goal, 20.0, 0.0), None);
    }

    #[test]
    fn test_weeks_remaining_cutting() {
        let goal = cutting_goal();
        // 20.0 -> 15.0 at 0.5/week = 10 weeks
        assert_eq!(estimate_weeks_remaining(&goal, 20.0, -0.5), Some(10));
        // Already past the target.
        assert_eq!(estimate_weeks_remaining(&goal, 14.5, -0.5), Some(0));
    }

    #[test]
    fn test_weeks_remaining_bulking_negative_rate_floors_at_zero() {
        let goal = bulking_goal();
        // Losing fat while bulking: the estimate floors at zero rather than
        // reporting a negative horizon.
        assert_eq!(estimate_weeks_remaining(&goal, 13.0, -0.2), Some(0));
        assert_eq!(estimate_weeks_remaining(&goal, 13.0, 0.5), Some(10));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let goal = cutting_goal();
        let entries = vec![
            entry(goal.id, 1, 22.0, -0.5, true),
            entry(goal.id, 2, 21.5, -0.5, true),
            entry(goal.id, 3, 21.0, -0.5, true),
        ];
        let a = analyze(&goal, &entries);
        let b = analyze(&goal, &entries);
        assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
    }

    #[test]
    fn test_cutting_on_track_improving_suggests_maintaining() {
        let suggestion =
            suggest_adjustment(GoalType::Cutting, Trend::Improving, true, -0.6).unwrap();
        assert!(suggestion.contains("Maintain current plan"));
    }

    #[test]
    fn test_bulking_worsening_suggests_reducing_surplus() {
        let suggestion =
            suggest_adjustment(GoalType::Bulking, Trend::Worsening, false, 0.8).unwrap();
        assert!(suggestion.contains("reducing daily surplus"));
    }
}
