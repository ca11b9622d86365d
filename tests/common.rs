// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: In-memory database setup, user factories, and measurement helpers
#![allow(dead_code)]

//! Shared test utilities for `recomp_engine`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::Once;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use recomp_engine::database::memory::InMemoryDatabase;
use recomp_engine::database::DatabaseProvider;
use recomp_engine::models::{
    ActivityLevel, BodyMeasurement, CalculationMethod, RawMeasurements, Sex, UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> InMemoryDatabase {
    init_test_logging();
    InMemoryDatabase::new()
}

/// A timestamp safely in the past to build measurement schedules from
pub fn base_time() -> DateTime<Utc> {
    Utc::now() - Duration::days(90)
}

/// Male test user: 175cm, moderately active, 30 years old at any plausible
/// test run date (date of birth ~30.1 years back).
pub async fn create_male_user(db: &InMemoryDatabase) -> UserProfile {
    let user = UserProfile {
        id: Uuid::new_v4(),
        sex: Sex::Male,
        height_cm: 175.0,
        date_of_birth: Utc::now().date_naive() - Duration::days(10_980),
        activity_level: ActivityLevel::ModeratelyActive,
        preferred_method: CalculationMethod::Navy,
    };
    db.create_user(&user).await.unwrap();
    user
}

/// Female test user: 165cm, lightly active, 28 years old
pub async fn create_female_user(db: &InMemoryDatabase) -> UserProfile {
    let user = UserProfile {
        id: Uuid::new_v4(),
        sex: Sex::Female,
        height_cm: 165.0,
        date_of_birth: birth_date_years_ago(28),
        activity_level: ActivityLevel::LightlyActive,
        preferred_method: CalculationMethod::Navy,
    };
    db.create_user(&user).await.unwrap();
    user
}

fn birth_date_years_ago(years: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(years * 366)
}

/// Store a measurement record directly with a chosen body-fat percentage.
///
/// Integration tests drive the engine with measurement records as plain
/// data; the derivation path has its own coverage.
pub async fn store_measurement(
    db: &InMemoryDatabase,
    user_id: Uuid,
    weight_kg: f64,
    body_fat_percentage: f64,
    measured_at: DateTime<Utc>,
) -> BodyMeasurement {
    let measurement = BodyMeasurement {
        id: Uuid::new_v4(),
        user_id,
        weight_kg,
        method: CalculationMethod::Navy,
        raw: RawMeasurements {
            waist_cm: Some(90.0),
            neck_cm: Some(38.0),
            ..RawMeasurements::default()
        },
        body_fat_percentage,
        notes: None,
        measured_at,
    };
    db.create_measurement(&measurement).await.unwrap();
    measurement
}
