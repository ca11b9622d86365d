// ABOUTME: Domain entities and enums for body recomposition tracking
// ABOUTME: Users, measurements, goals, and the append-only progress ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Domain Models
//!
//! Plain data objects consumed and produced by the engine. Measurements and
//! progress entries are append-only evidentiary records: once stored they are
//! never mutated, and goals snapshot the measurement values they were created
//! from so history cannot change retroactively.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex for body-fat and energy calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher BMR, Navy formula without hip)
    Male,
    /// Female (lower BMR, Navy formula requires hip)
    Female,
}

impl Sex {
    /// Plural noun used in safety messages ("males" / "females")
    #[must_use]
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Male => "males",
            Self::Female => "females",
        }
    }
}

/// Body-fat calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// US Navy circumference method
    #[serde(rename = "navy")]
    Navy,
    /// Jackson-Pollock 3-site skinfold method
    #[serde(rename = "3_site")]
    ThreeSite,
    /// Jackson-Pollock 7-site skinfold method
    #[serde(rename = "7_site")]
    SevenSite,
}

/// Activity level tier for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
    /// Hard training twice a day
    ExtremelyActive,
}

/// Type of body recomposition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Fat loss toward a target body-fat percentage
    Cutting,
    /// Controlled gain up to a body-fat ceiling
    Bulking,
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Goal is being tracked
    Active,
    /// Boundary reached; tracking closed
    Completed,
    /// Abandoned by explicit user action
    Cancelled,
}

/// A registered user's physiology and preferences (read-only input here)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Activity level tier
    pub activity_level: ActivityLevel,
    /// Preferred body-fat calculation method
    pub preferred_method: CalculationMethod,
}

impl UserProfile {
    /// Whole-year age on the given date, by calendar-date comparison.
    ///
    /// Subtracts birth year and backs off one year when the birthday has not
    /// yet occurred in `on`'s year.
    #[must_use]
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        let mut age = on.year() - self.date_of_birth.year();
        if (on.month(), on.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }
}

/// Method-specific raw anthropometric inputs.
///
/// Circumferences are in centimeters, skinfolds in millimeters. Which fields
/// are required depends on the calculation method and the user's sex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMeasurements {
    /// Waist circumference (cm) - Navy
    pub waist_cm: Option<f64>,
    /// Neck circumference (cm) - Navy
    pub neck_cm: Option<f64>,
    /// Hip circumference (cm) - Navy, women only
    pub hip_cm: Option<f64>,
    /// Chest skinfold (mm)
    pub chest_mm: Option<f64>,
    /// Abdomen skinfold (mm)
    pub abdomen_mm: Option<f64>,
    /// Thigh skinfold (mm)
    pub thigh_mm: Option<f64>,
    /// Tricep skinfold (mm)
    pub tricep_mm: Option<f64>,
    /// Suprailiac skinfold (mm)
    pub suprailiac_mm: Option<f64>,
    /// Midaxillary skinfold (mm) - 7-site
    pub midaxillary_mm: Option<f64>,
    /// Subscapular skinfold (mm) - 7-site
    pub subscapular_mm: Option<f64>,
}

/// A snapshot of the user's body at one point in time.
///
/// Immutable once stored: the append-only evidentiary record every
/// downstream calculation builds on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Body weight in kilograms (30-300)
    pub weight_kg: f64,
    /// Calculation method the raw inputs were taken for
    pub method: CalculationMethod,
    /// Method-specific raw inputs
    pub raw: RawMeasurements,
    /// Derived body-fat percentage (3-50, two decimals)
    pub body_fat_percentage: f64,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the measurement was taken
    pub measured_at: DateTime<Utc>,
}

/// A body recomposition goal with creation-time snapshots.
///
/// Exactly one of `target_body_fat_percentage` (cutting) or
/// `ceiling_body_fat_percentage` (bulking) is set. At most one goal per user
/// is ACTIVE at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Cutting or bulking
    pub goal_type: GoalType,
    /// Lifecycle status
    pub status: GoalStatus,
    /// The measurement the goal started from
    pub initial_measurement_id: Uuid,
    /// Body-fat percentage copied from the initial measurement
    pub initial_body_fat_percentage: f64,
    /// Weight copied from the initial measurement
    pub initial_weight_kg: f64,
    /// Target body-fat percentage (cutting goals)
    pub target_body_fat_percentage: Option<f64>,
    /// Ceiling body-fat percentage (bulking goals)
    pub ceiling_body_fat_percentage: Option<f64>,
    /// Prescribed daily calories
    pub target_calories: i32,
    /// Estimated weeks to reach the boundary, from creation-time rates
    pub estimated_weeks_to_goal: i32,
    /// When tracking began
    pub started_at: DateTime<Utc>,
    /// Set only on transition to COMPLETED
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// The boundary body-fat percentage for this goal's type
    /// (target for cutting, ceiling for bulking).
    #[must_use]
    pub fn boundary_body_fat(&self) -> Option<f64> {
        match self.goal_type {
            GoalType::Cutting => self.target_body_fat_percentage,
            GoalType::Bulking => self.ceiling_body_fat_percentage,
        }
    }

    /// Whether the goal is still being tracked
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// One checkpoint in a goal's append-only progress ledger.
///
/// Week numbers are 1-based and strictly increasing; each measurement feeds
/// at most one entry, ever. Deltas are signed against the immediately
/// preceding checkpoint (the goal's initial measurement for week 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Owning goal
    pub goal_id: Uuid,
    /// The measurement this checkpoint consumed
    pub measurement_id: Uuid,
    /// Week number since goal start (1, 2, 3, ...)
    pub week_number: u32,
    /// Body-fat percentage at this checkpoint
    pub body_fat_percentage: f64,
    /// Weight at this checkpoint (kg)
    pub weight_kg: f64,
    /// Body-fat change versus the previous checkpoint (negative = loss)
    pub body_fat_change: f64,
    /// Weight change versus the previous checkpoint (negative = loss)
    pub weight_change_kg: f64,
    /// Whether cumulative progress met the expected rate this week
    pub is_on_track: bool,
    /// Optional user notes
    pub notes: Option<String>,
    /// When this entry was logged
    pub logged_at: DateTime<Utc>,
}
