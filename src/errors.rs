// ABOUTME: Unified domain error taxonomy for the recomposition engine
// ABOUTME: Caller-recoverable typed failures surfaced from every engine operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Error Taxonomy
//!
//! Every engine operation returns one of these typed, caller-recoverable
//! failures. Nothing here represents a crash: each variant describes a
//! client-correctable input condition and is never retried automatically.
//! Unexpected repository failures are not translated by this module.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Physiological safety rule violated by requested goal parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafetyViolation {
    /// Boundary value outside the safe physiological band
    #[error("{0}")]
    UnsafeTarget(String),

    /// Boundary on the wrong side of the current body-fat percentage
    #[error("{0}")]
    InvalidOrdering(String),

    /// Required boundary for the goal type absent (or the wrong one present)
    #[error("{0}")]
    MissingBoundary(String),
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Calculator lacks a raw measurement required by the chosen method/sex
    #[error("missing input: {0}")]
    MissingInput(String),

    /// An input or derived value falls outside its defined numeric bound
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// The user already has an ACTIVE goal
    #[error("user already has an active goal; complete or cancel it before creating a new one")]
    ActiveGoalExists,

    /// Referenced measurement does not exist
    #[error("measurement {0} not found")]
    MeasurementNotFound(Uuid),

    /// Referenced goal does not exist
    #[error("goal {0} not found")]
    GoalNotFound(Uuid),

    /// Goal exists but is not in the ACTIVE state
    #[error("goal {0} is not active")]
    GoalNotActive(Uuid),

    /// Referenced entity belongs to a different user
    #[error("{0}")]
    OwnershipMismatch(String),

    /// Goal parameters fail physiological safety rules
    #[error("unsafe goal: {0}")]
    SafetyViolation(#[from] SafetyViolation),

    /// Progress cadence violated; carries the actual elapsed day count
    #[error("must wait at least 7 days between progress entries (only {days} days since last checkpoint)")]
    TooSoon {
        /// Whole days elapsed since the previous checkpoint
        days: i64,
    },

    /// The measurement was already consumed by another progress entry
    #[error("measurement {0} has already been logged as a progress entry")]
    MeasurementAlreadyLogged(Uuid),
}

impl EngineError {
    /// Missing calculator input
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// Value outside its defined bound
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Entity owned by a different user
    pub fn ownership_mismatch(message: impl Into<String>) -> Self {
        Self::OwnershipMismatch(message.into())
    }
}
