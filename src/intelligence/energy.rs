// ABOUTME: Energy expenditure model using the Mifflin-St Jeor equation
// ABOUTME: BMR, activity-scaled TDEE, and goal-type calorie targets with safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Energy Model
//!
//! Converts physiology and stated activity into daily calorie numbers.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - McArdle, W.D., et al. (2010). *Exercise Physiology* (activity factors).

use crate::intelligence::physiological_constants::energy::{
    EXTREMELY_ACTIVE_FACTOR, LIGHTLY_ACTIVE_FACTOR, MIN_CALORIES_FEMALE, MIN_CALORIES_MALE,
    MODERATELY_ACTIVE_FACTOR, SEDENTARY_FACTOR, VERY_ACTIVE_FACTOR,
};
use crate::models::{ActivityLevel, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Men: `10w + 6.25h - 5a + 5`; women: `10w + 6.25h - 5a - 161`.
/// Rounded to the nearest integer calorie.
#[must_use]
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    let adjusted = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    adjusted.round() as i32
}

/// Activity multiplier for a tier
#[must_use]
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_FACTOR,
        ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_FACTOR,
        ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_FACTOR,
        ActivityLevel::VeryActive => VERY_ACTIVE_FACTOR,
        ActivityLevel::ExtremelyActive => EXTREMELY_ACTIVE_FACTOR,
    }
}

/// Calculate Total Daily Energy Expenditure from BMR and activity level,
/// rounded to the nearest integer calorie.
#[must_use]
pub fn tdee(bmr: i32, activity_level: ActivityLevel) -> i32 {
    (f64::from(bmr) * activity_factor(activity_level)).round() as i32
}

/// Daily calorie target for a cutting goal.
///
/// Applies the deficit, then enforces the sex-specific minimum safe intake
/// (men 1500, women 1200). The floor always wins, even when that shrinks
/// the requested deficit.
#[must_use]
pub fn cutting_target(tdee: i32, sex: Sex, deficit: i32) -> i32 {
    let minimum = match sex {
        Sex::Male => MIN_CALORIES_MALE,
        Sex::Female => MIN_CALORIES_FEMALE,
    };
    (tdee - deficit).max(minimum)
}

/// Daily calorie target for a bulking goal. No ceiling is applied.
#[must_use]
pub fn bulking_target(tdee: i32, surplus: i32) -> i32 {
    tdee + surplus
}
