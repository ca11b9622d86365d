// ABOUTME: Pure calculation and decision rules for body recomposition tracking
// ABOUTME: Body-fat formulas, energy model, safety rules, and trend classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Intelligence Module
//!
//! The deterministic arithmetic core of the engine. Everything here is a
//! stateless pure function over plain data: no I/O, no shared mutable state,
//! and identical outputs for identical inputs.

/// Body-fat percentage calculators (Navy, 3-site, 7-site)
pub mod body_composition;

/// BMR, TDEE, and calorie target calculations
pub mod energy;

/// Macronutrient distribution for a calorie target
pub mod macros;

/// Research-backed constants grouped by concern
pub mod physiological_constants;

/// Goal boundary safety rules
pub mod safety;

/// Weeks-to-goal estimation
pub mod timeline;

/// Trend classification and trends reporting
pub mod trend_analyzer;

/// Range validation for raw inputs and derived values
pub mod validation;

pub use macros::MacronutrientBreakdown;
pub use trend_analyzer::{Trend, TrendsReport};
