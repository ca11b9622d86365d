// ABOUTME: Weeks-to-goal estimation from body-fat delta and assumed monthly rate
// ABOUTME: Shared by cutting and bulking goal creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Timeline Estimation
//!
//! `weeks = round(|current - boundary| / (monthly_rate / 4.33))`.
//!
//! Evidence-based defaults: cutting 0.75% body fat per month (middle of the
//! 0.5-1.0 band), bulking 0.2% per month (middle of 0.1-0.3). Callers pass
//! the goal's target (cutting) or ceiling (bulking) as the boundary.

use crate::intelligence::physiological_constants::timeline::WEEKS_PER_MONTH;

/// Estimate whole weeks to move from `current_bf` to `boundary_bf` at the
/// given monthly rate, rounded to the nearest integer.
#[must_use]
pub fn estimate_weeks(current_bf: f64, boundary_bf: f64, monthly_rate: f64) -> i32 {
    let bf_difference = (current_bf - boundary_bf).abs();
    let rate_per_week = monthly_rate / WEEKS_PER_MONTH;
    (bf_difference / rate_per_week).round() as i32
}
