// ABOUTME: Integration tests for trend analysis and diet-plan generation
// ABOUTME: Insufficient-data handling, verdict bands, idempotence, and macro composition

mod common;

use chrono::Duration;
use uuid::Uuid;

use common::{base_time, create_male_user, create_test_database, store_measurement};
use recomp_engine::config::EngineConfig;
use recomp_engine::database::memory::InMemoryDatabase;
use recomp_engine::errors::EngineError;
use recomp_engine::intelligence::Trend;
use recomp_engine::models::{GoalType, UserProfile};
use recomp_engine::services::goal_lifecycle::{create_goal, NewGoal};
use recomp_engine::services::plans::diet_plan;
use recomp_engine::services::progress_ledger::append_progress;
use recomp_engine::services::trends::get_trends;

async fn start_goal(
    db: &InMemoryDatabase,
    user: &UserProfile,
    goal_type: GoalType,
    initial_bf: f64,
    boundary: f64,
) -> recomp_engine::models::Goal {
    let m = store_measurement(db, user.id, 80.0, initial_bf, base_time()).await;
    let (target, ceiling) = match goal_type {
        GoalType::Cutting => (Some(boundary), None),
        GoalType::Bulking => (None, Some(boundary)),
    };
    create_goal(
        db,
        &EngineConfig::default(),
        user,
        NewGoal {
            goal_type,
            initial_measurement_id: m.id,
            target_body_fat_percentage: target,
            ceiling_body_fat_percentage: ceiling,
        },
    )
    .await
    .unwrap()
}

/// Log weekly readings, one per element, 7 days apart starting a week after
/// the goal's initial measurement.
async fn log_weeks(
    db: &InMemoryDatabase,
    user: &UserProfile,
    goal_id: Uuid,
    readings: &[(f64, f64)], // (weight_kg, body_fat)
) {
    let config = EngineConfig::default();
    for (i, &(weight, bf)) in readings.iter().enumerate() {
        let day = 7 * (i as i64 + 1);
        let m = store_measurement(db, user.id, weight, bf, base_time() + Duration::days(day)).await;
        append_progress(db, &config, goal_id, m.id, None).await.unwrap();
    }
}

#[tokio::test]
async fn test_insufficient_data_under_two_entries() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Cutting, 22.5, 15.0).await;

    // Empty ledger.
    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::InsufficientData);
    assert!((report.progress_percentage - 0.0).abs() < f64::EPSILON);
    assert!((report.weekly_bf_change_avg - 0.0).abs() < f64::EPSILON);
    assert!(!report.is_on_track);
    assert_eq!(report.weeks_elapsed, 0);
    // Falls back to the creation-time estimate.
    assert_eq!(
        report.estimated_weeks_remaining,
        Some(i64::from(goal.estimated_weeks_to_goal))
    );
    assert!(report.adjustment_suggestion.unwrap().contains("Keep logging"));

    // A single entry is still insufficient.
    log_weeks(&db, &user, goal.id, &[(79.0, 21.9)]).await;
    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::InsufficientData);
    assert_eq!(report.weeks_elapsed, 1);
    assert!((report.progress_percentage - 0.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_trends_unknown_goal() {
    let db = create_test_database().await;
    let err = get_trends(&db, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, EngineError::GoalNotFound(_)));
}

#[tokio::test]
async fn test_cutting_improving_report() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Cutting, 22.5, 15.0).await;

    // Steady 0.5-point weekly losses, all inside the on-track window.
    log_weeks(
        &db,
        &user,
        goal.id,
        &[(79.5, 22.0), (79.0, 21.5), (78.5, 21.0)],
    )
    .await;

    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::Improving);
    assert!(report.is_on_track);
    assert!((report.weekly_bf_change_avg - (-0.5)).abs() < 1e-9);
    assert!((report.weekly_weight_change_avg - (-0.5)).abs() < 1e-6);
    // 1.5 of the 7.5-point distance covered.
    assert!((report.progress_percentage - 20.0).abs() < 1e-6);
    // 6.0 points remaining at 0.5/week.
    assert_eq!(report.estimated_weeks_remaining, Some(12));
    assert!(report.adjustment_suggestion.unwrap().contains("Maintain current plan"));
}

#[tokio::test]
async fn test_cutting_plateau_report() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Cutting, 22.5, 15.0).await;

    // A good first week, then three stalled ones.
    log_weeks(
        &db,
        &user,
        goal.id,
        &[(79.5, 22.0), (79.4, 21.9), (79.3, 21.8), (79.2, 21.7)],
    )
    .await;

    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::Plateau);
    assert!(!report.is_on_track);
    assert!(report
        .adjustment_suggestion
        .unwrap()
        .contains("increasing daily deficit"));
}

#[tokio::test]
async fn test_bulking_worsening_report() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Bulking, 12.0, 18.0).await;

    // 0.7 points gained every week: past the 0.6 worsening line.
    log_weeks(
        &db,
        &user,
        goal.id,
        &[(72.7, 12.7), (73.4, 13.4), (74.1, 14.1)],
    )
    .await;

    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::Worsening);
    assert!(!report.is_on_track);
    assert!(report
        .adjustment_suggestion
        .unwrap()
        .contains("reducing daily surplus"));
    // Progress still accrues toward the ceiling: 2.1 of 6.0 points.
    assert!((report.progress_percentage - 35.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_bulking_lean_gain_improving() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Bulking, 12.0, 18.0).await;

    // 0.3 points per week sits in the lean-gain band and the on-track window.
    log_weeks(
        &db,
        &user,
        goal.id,
        &[(72.3, 12.3), (72.6, 12.6), (72.9, 12.9)],
    )
    .await;

    let report = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(report.trend, Trend::Improving);
    assert!(report.is_on_track);
    assert!(report.adjustment_suggestion.unwrap().contains("lean gaining"));
}

#[tokio::test]
async fn test_get_trends_is_idempotent() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Cutting, 22.5, 15.0).await;
    log_weeks(
        &db,
        &user,
        goal.id,
        &[(79.5, 22.0), (79.0, 21.5), (78.5, 21.0)],
    )
    .await;

    let first = get_trends(&db, goal.id).await.unwrap();
    let second = get_trends(&db, goal.id).await.unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn test_diet_plan_uses_latest_checkpoint_weight() {
    let db = create_test_database().await;
    let user = create_male_user(&db).await;
    let goal = start_goal(&db, &user, GoalType::Cutting, 22.5, 15.0).await;

    // Before any entries, macros run off the initial snapshot weight.
    let plan = diet_plan(&db, goal.id).await.unwrap();
    assert_eq!(plan.daily_calorie_target, goal.target_calories);
    assert!((plan.reference_weight_kg - 80.0).abs() < f64::EPSILON);
    assert_eq!(plan.macros.protein_grams, 192); // 80kg x 2.4 g/kg

    log_weeks(&db, &user, goal.id, &[(78.0, 21.9)]).await;
    let plan = diet_plan(&db, goal.id).await.unwrap();
    assert!((plan.reference_weight_kg - 78.0).abs() < f64::EPSILON);
    assert_eq!(plan.macros.protein_grams, 187); // 78kg x 2.4 g/kg

    let err = diet_plan(&db, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, EngineError::GoalNotFound(_)));
}
