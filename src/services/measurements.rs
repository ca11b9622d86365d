// ABOUTME: Measurement intake service validating raw inputs and deriving body fat
// ABOUTME: Produces the immutable evidentiary records all downstream tracking builds on
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Measurement Intake
//!
//! Turns a raw submission into a stored [`BodyMeasurement`]: range-validate
//! the inputs, derive the body-fat percentage for the requested method using
//! the user's sex, calendar age, and height, reject implausible results, and
//! persist. Measurements are never mutated after this point.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::database::DatabaseProvider;
use crate::errors::EngineResult;
use crate::intelligence::{body_composition, validation};
use crate::models::{BodyMeasurement, CalculationMethod, RawMeasurements, UserProfile};

/// A raw measurement submission
#[derive(Debug, Clone)]
pub struct NewMeasurement {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Calculation method the raw inputs were taken for
    pub method: CalculationMethod,
    /// Method-specific raw inputs
    pub raw: RawMeasurements,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the measurement was taken
    pub measured_at: DateTime<Utc>,
}

/// Validate, derive, and persist a new body measurement.
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::OutOfRange`] when the weight, any
/// provided raw input, or the derived body-fat percentage falls outside its
/// band, and [`crate::errors::EngineError::MissingInput`] when the method
/// and sex require a raw input that was not provided.
pub async fn record_measurement<DB: DatabaseProvider>(
    db: &DB,
    user: &UserProfile,
    submission: NewMeasurement,
) -> EngineResult<BodyMeasurement> {
    validation::validate_weight(submission.weight_kg)?;
    validation::validate_raw(&submission.raw)?;

    let age = user.age_on(submission.measured_at.date_naive());
    let body_fat_percentage = body_composition::calculate(
        submission.method,
        user.sex,
        age,
        user.height_cm,
        &submission.raw,
    )?;
    validation::validate_body_fat_range(body_fat_percentage)?;

    let measurement = BodyMeasurement {
        id: Uuid::new_v4(),
        user_id: user.id,
        weight_kg: submission.weight_kg,
        method: submission.method,
        raw: submission.raw,
        body_fat_percentage,
        notes: submission.notes,
        measured_at: submission.measured_at,
    };
    db.create_measurement(&measurement).await?;

    info!(
        user_id = %user.id,
        measurement_id = %measurement.id,
        body_fat = body_fat_percentage,
        "measurement recorded"
    );

    Ok(measurement)
}
