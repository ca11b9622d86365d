// ABOUTME: Engine configuration with environment variable overrides
// ABOUTME: Calorie deficit/surplus, monthly rate assumptions, and cadence minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Configuration
//!
//! Tunables the calculation services consume. Every field has a
//! research-backed default and can be overridden through `RECOMP_*`
//! environment variables; unparseable values fall back to the default.

use std::env;

use crate::intelligence::physiological_constants::{energy, progress, timeline};

/// Runtime tunables for goal creation and progress tracking
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Daily calorie deficit applied to cutting goals (kcal)
    pub cutting_deficit: i32,
    /// Daily calorie surplus applied to bulking goals (kcal)
    pub bulking_surplus: i32,
    /// Assumed body-fat loss rate for cutting timelines (%/month)
    pub cutting_monthly_rate: f64,
    /// Assumed body-fat gain rate for bulking timelines (%/month)
    pub bulking_monthly_rate: f64,
    /// Minimum whole days between progress checkpoints
    pub min_days_between_checkpoints: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cutting_deficit: energy::CUTTING_DEFICIT_KCAL,
            bulking_surplus: energy::BULKING_SURPLUS_KCAL,
            cutting_monthly_rate: timeline::CUTTING_MONTHLY_RATE,
            bulking_monthly_rate: timeline::BULKING_MONTHLY_RATE,
            min_days_between_checkpoints: progress::MIN_DAYS_BETWEEN_CHECKPOINTS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cutting_deficit: env_parsed("RECOMP_CUTTING_DEFICIT", defaults.cutting_deficit),
            bulking_surplus: env_parsed("RECOMP_BULKING_SURPLUS", defaults.bulking_surplus),
            cutting_monthly_rate: env_parsed(
                "RECOMP_CUTTING_MONTHLY_RATE",
                defaults.cutting_monthly_rate,
            ),
            bulking_monthly_rate: env_parsed(
                "RECOMP_BULKING_MONTHLY_RATE",
                defaults.bulking_monthly_rate,
            ),
            min_days_between_checkpoints: env_parsed(
                "RECOMP_MIN_DAYS_BETWEEN_CHECKPOINTS",
                defaults.min_days_between_checkpoints,
            ),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
