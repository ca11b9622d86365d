// ABOUTME: Body-fat percentage calculators using validated anthropometric formulas
// ABOUTME: US Navy circumference method plus Jackson-Pollock 3-site and 7-site skinfolds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Body Composition Calculators
//!
//! Pure conversions from raw anthropometric inputs to a body-fat percentage.
//! Three incompatible methods are supported; which raw fields are required
//! depends on the method and the subject's sex.
//!
//! # Scientific References
//!
//! - Hodgdon, J.A., & Beckett, M.B. (1984). Prediction of percent body fat
//!   for U.S. Navy men and women from body circumferences and height.
//!   Naval Health Research Center reports 84-29 / 84-11.
//! - Jackson, A.S., & Pollock, M.L. (1978). Generalized equations for
//!   predicting body density of men. *British Journal of Nutrition*, 40.
//! - Jackson, A.S., Pollock, M.L., & Ward, A. (1980). Generalized equations
//!   for predicting body density of women. *Medicine and Science in Sports
//!   and Exercise*, 12(3).
//! - Siri, W.E. (1961). Body composition from fluid spaces and density.
//!
//! Results are rounded to two decimals and are **not** clamped here: a
//! wildly out-of-range result indicates bad input, and rejecting it is the
//! caller's responsibility.

use crate::errors::{EngineError, EngineResult};
use crate::models::{CalculationMethod, RawMeasurements, Sex};

/// Round to two decimal places
#[must_use]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Siri equation: convert body density to body-fat percentage
fn siri(density: f64) -> f64 {
    495.0 / density - 450.0
}

fn require(value: Option<f64>, message: &str) -> EngineResult<f64> {
    value.ok_or_else(|| EngineError::missing_input(message.to_owned()))
}

/// Calculate body-fat percentage using the US Navy circumference method.
///
/// Men: `86.010 x log10(waist - neck) - 70.041 x log10(height) + 36.76`
/// Women: `163.205 x log10(waist + hip - neck) - 97.684 x log10(height) - 78.387`
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] if waist or neck is absent, or if
/// the subject is female and hip is absent.
pub fn calculate_navy(
    sex: Sex,
    height_cm: f64,
    waist_cm: Option<f64>,
    neck_cm: Option<f64>,
    hip_cm: Option<f64>,
) -> EngineResult<f64> {
    let waist = require(waist_cm, "waist measurement required for Navy method")?;
    let neck = require(neck_cm, "neck measurement required for Navy method")?;

    let body_fat = match sex {
        Sex::Male => {
            86.010 * (waist - neck).log10() - 70.041 * height_cm.log10() + 36.76
        }
        Sex::Female => {
            let hip = require(hip_cm, "hip measurement required for women using Navy method")?;
            163.205 * (waist + hip - neck).log10() - 97.684 * height_cm.log10() - 78.387
        }
    };

    Ok(round_2dp(body_fat))
}

/// Calculate body-fat percentage using the Jackson-Pollock 3-site method.
///
/// Men sum {chest, abdomen, thigh}; women sum {tricep, suprailiac, thigh}.
/// A sex-specific body-density polynomial in (sum, age) feeds the Siri
/// equation.
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] if the sex-appropriate skinfold
/// triple is incomplete.
pub fn calculate_three_site(sex: Sex, age: u32, raw: &RawMeasurements) -> EngineResult<f64> {
    let age = f64::from(age);

    let density = match sex {
        Sex::Male => {
            let chest = require(raw.chest_mm, "chest, abdomen, and thigh skinfolds required for men")?;
            let abdomen =
                require(raw.abdomen_mm, "chest, abdomen, and thigh skinfolds required for men")?;
            let thigh =
                require(raw.thigh_mm, "chest, abdomen, and thigh skinfolds required for men")?;
            let sum = chest + abdomen + thigh;
            1.10938 - 0.0008267 * sum + 0.0000016 * sum * sum - 0.0002574 * age
        }
        Sex::Female => {
            let tricep = require(
                raw.tricep_mm,
                "tricep, suprailiac, and thigh skinfolds required for women",
            )?;
            let suprailiac = require(
                raw.suprailiac_mm,
                "tricep, suprailiac, and thigh skinfolds required for women",
            )?;
            let thigh = require(
                raw.thigh_mm,
                "tricep, suprailiac, and thigh skinfolds required for women",
            )?;
            let sum = tricep + suprailiac + thigh;
            1.0994921 - 0.0009929 * sum + 0.0000023 * sum * sum - 0.0001392 * age
        }
    };

    Ok(round_2dp(siri(density)))
}

/// Calculate body-fat percentage using the Jackson-Pollock 7-site method.
///
/// Requires all seven skinfolds regardless of sex; the density polynomial
/// coefficients differ by sex.
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] if any of the seven skinfolds is
/// absent.
pub fn calculate_seven_site(sex: Sex, age: u32, raw: &RawMeasurements) -> EngineResult<f64> {
    let sum = require(raw.chest_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.midaxillary_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.tricep_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.subscapular_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.abdomen_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.suprailiac_mm, "all seven skinfolds required for 7-site method")?
        + require(raw.thigh_mm, "all seven skinfolds required for 7-site method")?;
    let age = f64::from(age);

    let density = match sex {
        Sex::Male => 1.112 - 0.00043499 * sum + 0.00000055 * sum * sum - 0.00028826 * age,
        Sex::Female => 1.097 - 0.00046971 * sum + 0.00000056 * sum * sum - 0.00012828 * age,
    };

    Ok(round_2dp(siri(density)))
}

/// Calculate body-fat percentage using the given method.
///
/// # Errors
///
/// Returns [`EngineError::MissingInput`] if the method/sex-required raw
/// measurements are incomplete.
pub fn calculate(
    method: CalculationMethod,
    sex: Sex,
    age: u32,
    height_cm: f64,
    raw: &RawMeasurements,
) -> EngineResult<f64> {
    match method {
        CalculationMethod::Navy => {
            calculate_navy(sex, height_cm, raw.waist_cm, raw.neck_cm, raw.hip_cm)
        }
        CalculationMethod::ThreeSite => calculate_three_site(sex, age, raw),
        CalculationMethod::SevenSite => calculate_seven_site(sex, age, raw),
    }
}
