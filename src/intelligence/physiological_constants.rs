// ABOUTME: Physiological constants for body composition and energy calculations
// ABOUTME: Research-backed bounds, rates, and thresholds used across the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Physiological constants based on sports science research
//!
//! Scientifically-established values used throughout the engine. Grouped by
//! concern so each consumer imports only the band it needs.

/// Bounds on raw anthropometric inputs and the derived body-fat percentage
pub mod measurement_bounds {
    /// Minimum plausible body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Minimum plausible circumference (cm)
    pub const MIN_CIRCUMFERENCE_CM: f64 = 10.0;
    /// Maximum plausible circumference (cm)
    pub const MAX_CIRCUMFERENCE_CM: f64 = 200.0;

    /// Minimum plausible skinfold (mm)
    pub const MIN_SKINFOLD_MM: f64 = 1.0;
    /// Maximum plausible skinfold (mm)
    pub const MAX_SKINFOLD_MM: f64 = 60.0;

    /// Minimum accepted derived body-fat percentage.
    /// Essential fat in lean male athletes bottoms out near 3%.
    pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;
    /// Maximum accepted derived body-fat percentage.
    /// Values above 50% indicate bad inputs rather than a valid reading.
    pub const MAX_BODY_FAT_PERCENT: f64 = 50.0;
}

/// Safe goal boundaries for cutting and bulking
///
/// References:
/// - ACSM body composition position stands (essential fat floors)
pub mod safety {
    /// Lowest safe cutting target for men (%), inclusive
    pub const SAFE_MIN_TARGET_MALE: f64 = 8.0;
    /// Lowest safe cutting target for women (%), inclusive
    pub const SAFE_MIN_TARGET_FEMALE: f64 = 15.0;
    /// Highest safe bulking ceiling (%), inclusive
    pub const SAFE_MAX_CEILING: f64 = 30.0;
}

/// Energy expenditure model constants
///
/// References:
/// - Mifflin, M.D., et al. (1990). A new predictive equation for resting
///   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
/// - McArdle et al. (2010) activity factors
pub mod energy {
    /// Activity multiplier: little or no exercise
    pub const SEDENTARY_FACTOR: f64 = 1.2;
    /// Activity multiplier: exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE_FACTOR: f64 = 1.375;
    /// Activity multiplier: exercise 3-5 days/week
    pub const MODERATELY_ACTIVE_FACTOR: f64 = 1.55;
    /// Activity multiplier: exercise 6-7 days/week
    pub const VERY_ACTIVE_FACTOR: f64 = 1.725;
    /// Activity multiplier: hard training twice a day
    pub const EXTREMELY_ACTIVE_FACTOR: f64 = 1.9;

    /// Default daily deficit for cutting goals (middle of the 300-500 band)
    pub const CUTTING_DEFICIT_KCAL: i32 = 400;
    /// Default daily surplus for bulking goals (middle of the 200-300 band)
    pub const BULKING_SURPLUS_KCAL: i32 = 250;

    /// Minimum safe daily intake for men (kcal); the floor always wins
    pub const MIN_CALORIES_MALE: i32 = 1500;
    /// Minimum safe daily intake for women (kcal); the floor always wins
    pub const MIN_CALORIES_FEMALE: i32 = 1200;
}

/// Timeline estimation rates
pub mod timeline {
    /// Average weeks per calendar month
    pub const WEEKS_PER_MONTH: f64 = 4.33;
    /// Assumed cutting rate (% body fat per month, middle of 0.5-1.0)
    pub const CUTTING_MONTHLY_RATE: f64 = 0.75;
    /// Assumed bulking rate (% body fat per month, middle of 0.1-0.3)
    pub const BULKING_MONTHLY_RATE: f64 = 0.2;
}

/// Progress cadence and on-track windows
pub mod progress {
    /// Minimum whole days between successive checkpoints
    pub const MIN_DAYS_BETWEEN_CHECKPOINTS: i64 = 7;

    /// Cutting: minimum expected cumulative loss per elapsed week (% points)
    pub const CUTTING_MIN_WEEKLY_LOSS: f64 = 0.4;
    /// Cutting: maximum expected cumulative loss per elapsed week (% points)
    pub const CUTTING_MAX_WEEKLY_LOSS: f64 = 1.2;
    /// Bulking: minimum expected cumulative gain per elapsed week (% points)
    pub const BULKING_MIN_WEEKLY_GAIN: f64 = 0.1;
    /// Bulking: maximum expected cumulative gain per elapsed week (% points)
    pub const BULKING_MAX_WEEKLY_GAIN: f64 = 0.6;

    /// Proximity band under the bulking ceiling that triggers a warning (%)
    pub const CEILING_PROXIMITY_PERCENT: f64 = 1.0;
    /// Bulking gain rate above which a warning is raised (%/week)
    pub const MAX_BULKING_RATE_PER_WEEK: f64 = 0.5;
}

/// Trend classification thresholds over the recent ledger window
pub mod trend {
    /// Number of most recent entries the classification looks at
    pub const WINDOW_ENTRIES: usize = 3;

    /// Cutting: average weekly change below this is a strong loss
    pub const CUTTING_IMPROVING_BELOW: f64 = -0.4;
    /// Cutting: average weekly change above this is slow or no loss
    pub const CUTTING_PLATEAU_ABOVE: f64 = -0.2;

    /// Bulking: lower edge of the lean-gain band
    pub const BULKING_IMPROVING_MIN: f64 = 0.2;
    /// Bulking: upper edge of the lean-gain band
    pub const BULKING_IMPROVING_MAX: f64 = 0.5;
    /// Bulking: average weekly change below this is a stall
    pub const BULKING_PLATEAU_BELOW: f64 = 0.1;
    /// Bulking: average weekly change above this is excessive fat gain
    pub const BULKING_WORSENING_ABOVE: f64 = 0.6;

    /// Fraction of individually on-track entries for goal-level on-track
    pub const ON_TRACK_RATIO: f64 = 0.6;
}

/// Macronutrient distribution coefficients
///
/// References:
/// - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
///   *Journal of Sports Sciences*, 29(sup1).
pub mod macros {
    /// Cutting protein intake (g per kg bodyweight, middle of 2.2-2.6)
    pub const CUTTING_PROTEIN_G_PER_KG: f64 = 2.4;
    /// Cutting fat share of total calories (middle of 20-25%)
    pub const CUTTING_FAT_FRACTION: f64 = 0.22;
    /// Bulking protein intake (g per kg bodyweight, middle of 1.8-2.2)
    pub const BULKING_PROTEIN_G_PER_KG: f64 = 2.0;
    /// Bulking fat share of total calories (middle of 25-30%)
    pub const BULKING_FAT_FRACTION: f64 = 0.27;

    /// Energy density of protein and carbohydrate (kcal/g)
    pub const KCAL_PER_G_PROTEIN_OR_CARB: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}
