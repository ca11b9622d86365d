// ABOUTME: Macronutrient breakdown from a daily calorie target and bodyweight
// ABOUTME: Protein by g/kg, fat by calorie fraction, remainder to carbohydrate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Macronutrient Distribution
//!
//! Splits a daily calorie target into protein, carbohydrate, and fat grams.
//! Cutting prioritizes protein (2.4 g/kg) to preserve muscle in a deficit;
//! bulking runs moderate protein (2.0 g/kg) with more carbohydrate for
//! training volume.
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.

use serde::{Deserialize, Serialize};

use crate::intelligence::physiological_constants::macros::{
    BULKING_FAT_FRACTION, BULKING_PROTEIN_G_PER_KG, CUTTING_FAT_FRACTION,
    CUTTING_PROTEIN_G_PER_KG, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN_OR_CARB,
};
use crate::models::GoalType;

/// Macronutrient split for a daily calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientBreakdown {
    /// Daily protein (g)
    pub protein_grams: i32,
    /// Calories from protein
    pub protein_calories: i32,
    /// Protein share of total calories (%)
    pub protein_percentage: f64,
    /// Daily carbohydrate (g)
    pub carbs_grams: i32,
    /// Calories from carbohydrate
    pub carbs_calories: i32,
    /// Carbohydrate share of total calories (%)
    pub carbs_percentage: f64,
    /// Daily fat (g)
    pub fat_grams: i32,
    /// Calories from fat
    pub fat_calories: i32,
    /// Fat share of total calories (%)
    pub fat_percentage: f64,
    /// Calories accounted for after gram truncation
    pub total_calories: i32,
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate the macronutrient breakdown for a calorie target.
///
/// Protein is set by bodyweight, fat by a share of total calories, and the
/// remaining calories go to carbohydrate. Grams truncate toward zero, so the
/// reported total can differ slightly from the input target; the percentages
/// describe the reported total.
#[must_use]
pub fn calculate_macros(
    calories: i32,
    goal_type: GoalType,
    weight_kg: f64,
) -> MacronutrientBreakdown {
    let (protein_per_kg, fat_fraction) = match goal_type {
        GoalType::Cutting => (CUTTING_PROTEIN_G_PER_KG, CUTTING_FAT_FRACTION),
        GoalType::Bulking => (BULKING_PROTEIN_G_PER_KG, BULKING_FAT_FRACTION),
    };

    let protein_grams = (weight_kg * protein_per_kg) as i32;
    let protein_calories = protein_grams * KCAL_PER_G_PROTEIN_OR_CARB as i32;

    let fat_calories = (f64::from(calories) * fat_fraction) as i32;
    let fat_grams = (f64::from(fat_calories) / KCAL_PER_G_FAT) as i32;

    let carbs_calories = calories - protein_calories - fat_calories;
    let carbs_grams = (f64::from(carbs_calories) / KCAL_PER_G_PROTEIN_OR_CARB) as i32;

    let total_calories = protein_calories
        + fat_grams * KCAL_PER_G_FAT as i32
        + carbs_grams * KCAL_PER_G_PROTEIN_OR_CARB as i32;
    let total = f64::from(total_calories);

    MacronutrientBreakdown {
        protein_grams,
        protein_calories,
        protein_percentage: round_1dp(f64::from(protein_calories) / total * 100.0),
        carbs_grams,
        carbs_calories: carbs_grams * KCAL_PER_G_PROTEIN_OR_CARB as i32,
        carbs_percentage: round_1dp(
            f64::from(carbs_grams * KCAL_PER_G_PROTEIN_OR_CARB as i32) / total * 100.0,
        ),
        fat_grams,
        fat_calories: fat_grams * KCAL_PER_G_FAT as i32,
        fat_percentage: round_1dp(f64::from(fat_grams * KCAL_PER_G_FAT as i32) / total * 100.0),
        total_calories,
    }
}
