// ABOUTME: Physiological safety rules for goal boundaries
// ABOUTME: Sex-specific cutting floors, the bulking ceiling cap, and ordering checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Goal Safety Validation
//!
//! Predicate rules a goal's boundary must pass before the goal is committed.
//! Cutting targets may not go below the essential-fat floor (8% men, 15%
//! women, inclusive) and must sit strictly below the current body fat.
//! Bulking ceilings may not exceed 30% and must sit strictly above the
//! current body fat.

use crate::errors::SafetyViolation;
use crate::intelligence::physiological_constants::safety::{
    SAFE_MAX_CEILING, SAFE_MIN_TARGET_FEMALE, SAFE_MIN_TARGET_MALE,
};
use crate::models::{GoalType, Sex};

/// Validate goal boundaries against physiological safety rules.
///
/// The boundary for the goal's type must be present; the caller is expected
/// to have rejected an extraneous boundary of the other kind already.
///
/// # Errors
///
/// Returns [`SafetyViolation::MissingBoundary`] when the type-required
/// boundary is absent, [`SafetyViolation::UnsafeTarget`] when it falls
/// outside the safe band, and [`SafetyViolation::InvalidOrdering`] when it
/// sits on the wrong side of the current body-fat percentage.
pub fn validate(
    goal_type: GoalType,
    current_bf: f64,
    target_bf: Option<f64>,
    ceiling_bf: Option<f64>,
    sex: Sex,
) -> Result<(), SafetyViolation> {
    match goal_type {
        GoalType::Cutting => {
            let target = target_bf.ok_or_else(|| {
                SafetyViolation::MissingBoundary(
                    "target body fat percentage required for cutting goals".into(),
                )
            })?;

            let min_bf = match sex {
                Sex::Male => SAFE_MIN_TARGET_MALE,
                Sex::Female => SAFE_MIN_TARGET_FEMALE,
            };
            if target < min_bf {
                return Err(SafetyViolation::UnsafeTarget(format!(
                    "target body fat too low; minimum safe level is {min_bf}% for {}",
                    sex.plural()
                )));
            }

            if target >= current_bf {
                return Err(SafetyViolation::InvalidOrdering(
                    "target body fat must be lower than current body fat for cutting goals".into(),
                ));
            }
        }
        GoalType::Bulking => {
            let ceiling = ceiling_bf.ok_or_else(|| {
                SafetyViolation::MissingBoundary(
                    "ceiling body fat percentage required for bulking goals".into(),
                )
            })?;

            if ceiling > SAFE_MAX_CEILING {
                return Err(SafetyViolation::UnsafeTarget(format!(
                    "ceiling body fat too high; maximum safe level is {SAFE_MAX_CEILING}%"
                )));
            }

            if ceiling <= current_bf {
                return Err(SafetyViolation::InvalidOrdering(
                    "ceiling body fat must be higher than current body fat for bulking goals"
                        .into(),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutting_floor_is_inclusive() {
        // Exactly at the floor passes for both sexes.
        assert!(validate(GoalType::Cutting, 22.0, Some(8.0), None, Sex::Male).is_ok());
        assert!(validate(GoalType::Cutting, 28.0, Some(15.0), None, Sex::Female).is_ok());

        // A hair below the floor is rejected.
        assert!(matches!(
            validate(GoalType::Cutting, 22.0, Some(7.99), None, Sex::Male),
            Err(SafetyViolation::UnsafeTarget(_))
        ));
        assert!(matches!(
            validate(GoalType::Cutting, 28.0, Some(14.99), None, Sex::Female),
            Err(SafetyViolation::UnsafeTarget(_))
        ));
    }

    #[test]
    fn test_cutting_target_must_be_below_current() {
        assert!(matches!(
            validate(GoalType::Cutting, 15.0, Some(15.0), None, Sex::Male),
            Err(SafetyViolation::InvalidOrdering(_))
        ));
        assert!(matches!(
            validate(GoalType::Cutting, 15.0, Some(18.0), None, Sex::Male),
            Err(SafetyViolation::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_cutting_requires_target() {
        assert!(matches!(
            validate(GoalType::Cutting, 22.0, None, Some(18.0), Sex::Male),
            Err(SafetyViolation::MissingBoundary(_))
        ));
    }

    #[test]
    fn test_bulking_ceiling_cap() {
        assert!(validate(GoalType::Bulking, 12.0, None, Some(30.0), Sex::Male).is_ok());
        assert!(matches!(
            validate(GoalType::Bulking, 12.0, None, Some(30.01), Sex::Male),
            Err(SafetyViolation::UnsafeTarget(_))
        ));
    }

    #[test]
    fn test_bulking_ceiling_must_be_above_current() {
        assert!(matches!(
            validate(GoalType::Bulking, 18.0, None, Some(18.0), Sex::Male),
            Err(SafetyViolation::InvalidOrdering(_))
        ));
        assert!(matches!(
            validate(GoalType::Bulking, 18.0, None, Some(16.0), Sex::Female),
            Err(SafetyViolation::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_bulking_requires_ceiling() {
        assert!(matches!(
            validate(GoalType::Bulking, 12.0, Some(10.0), None, Sex::Male),
            Err(SafetyViolation::MissingBoundary(_))
        ));
    }
}
