// ABOUTME: Range validation for raw anthropometric inputs and derived body fat
// ABOUTME: Rejects values outside human-physiology bounds before any calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Measurement Validation
//!
//! Bounds checks on raw inputs (weight, circumferences, skinfolds) and the
//! derived body-fat percentage. A value outside these bands indicates bad
//! input, not an unusual subject, so each check fails fast with
//! [`EngineError::OutOfRange`].

use crate::errors::{EngineError, EngineResult};
use crate::intelligence::physiological_constants::measurement_bounds::{
    MAX_BODY_FAT_PERCENT, MAX_CIRCUMFERENCE_CM, MAX_SKINFOLD_MM, MAX_WEIGHT_KG,
    MIN_BODY_FAT_PERCENT, MIN_CIRCUMFERENCE_CM, MIN_SKINFOLD_MM, MIN_WEIGHT_KG,
};
use crate::models::RawMeasurements;

/// Validate body weight is within 30-300 kg.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] outside the band.
pub fn validate_weight(weight_kg: f64) -> EngineResult<()> {
    if weight_kg < MIN_WEIGHT_KG {
        return Err(EngineError::out_of_range(format!(
            "weight too low (minimum {MIN_WEIGHT_KG} kg)"
        )));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(EngineError::out_of_range(format!(
            "weight too high (maximum {MAX_WEIGHT_KG} kg)"
        )));
    }
    Ok(())
}

/// Validate a circumference is within 10-200 cm.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] outside the band, naming the site.
pub fn validate_circumference(value: f64, site: &str) -> EngineResult<()> {
    if value < MIN_CIRCUMFERENCE_CM {
        return Err(EngineError::out_of_range(format!(
            "{site} too small (minimum {MIN_CIRCUMFERENCE_CM} cm)"
        )));
    }
    if value > MAX_CIRCUMFERENCE_CM {
        return Err(EngineError::out_of_range(format!(
            "{site} too large (maximum {MAX_CIRCUMFERENCE_CM} cm)"
        )));
    }
    Ok(())
}

/// Validate a skinfold is within 1-60 mm.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] outside the band, naming the site.
pub fn validate_skinfold(value: f64, site: &str) -> EngineResult<()> {
    if value < MIN_SKINFOLD_MM {
        return Err(EngineError::out_of_range(format!(
            "{site} too small (minimum {MIN_SKINFOLD_MM} mm)"
        )));
    }
    if value > MAX_SKINFOLD_MM {
        return Err(EngineError::out_of_range(format!(
            "{site} too large (maximum {MAX_SKINFOLD_MM} mm)"
        )));
    }
    Ok(())
}

/// Validate every provided raw measurement against its band.
///
/// Absent fields are skipped; method-specific presence requirements are the
/// calculators' concern, not this function's.
///
/// # Errors
///
/// Returns the first [`EngineError::OutOfRange`] encountered.
pub fn validate_raw(raw: &RawMeasurements) -> EngineResult<()> {
    let circumferences = [
        (raw.waist_cm, "waist circumference"),
        (raw.neck_cm, "neck circumference"),
        (raw.hip_cm, "hip circumference"),
    ];
    for (value, site) in circumferences {
        if let Some(v) = value {
            validate_circumference(v, site)?;
        }
    }

    let skinfolds = [
        (raw.chest_mm, "chest skinfold"),
        (raw.abdomen_mm, "abdomen skinfold"),
        (raw.thigh_mm, "thigh skinfold"),
        (raw.tricep_mm, "tricep skinfold"),
        (raw.suprailiac_mm, "suprailiac skinfold"),
        (raw.midaxillary_mm, "midaxillary skinfold"),
        (raw.subscapular_mm, "subscapular skinfold"),
    ];
    for (value, site) in skinfolds {
        if let Some(v) = value {
            validate_skinfold(v, site)?;
        }
    }

    Ok(())
}

/// Validate a derived body-fat percentage is within the 3-50 engine band.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`]; an out-of-band derived value means
/// the raw inputs were implausible.
pub fn validate_body_fat_range(body_fat_percentage: f64) -> EngineResult<()> {
    if body_fat_percentage < MIN_BODY_FAT_PERCENT {
        return Err(EngineError::out_of_range(format!(
            "calculated body fat {body_fat_percentage}% too low (minimum {MIN_BODY_FAT_PERCENT}%); check measurement inputs"
        )));
    }
    if body_fat_percentage > MAX_BODY_FAT_PERCENT {
        return Err(EngineError::out_of_range(format!(
            "calculated body fat {body_fat_percentage}% too high (maximum {MAX_BODY_FAT_PERCENT}%); check measurement inputs"
        )));
    }
    Ok(())
}
