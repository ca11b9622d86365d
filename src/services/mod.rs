// ABOUTME: Engine services orchestrating pure rules over the repository seam
// ABOUTME: Measurement intake, goal lifecycle, progress ledger, trends, and diet plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Services Module
//!
//! The engine's operational surface. Each service is a set of free functions
//! generic over [`crate::database::DatabaseProvider`]: load a consistent
//! snapshot, apply the pure rules from [`crate::intelligence`], and commit.
//! These map one-to-one onto the host application's API operations.

/// Goal creation, completion detection, and cancellation
pub mod goal_lifecycle;

/// Measurement intake: validate, derive body fat, persist
pub mod measurements;

/// Diet-plan macro generation for an existing goal
pub mod plans;

/// Progress ledger append and listing
pub mod progress_ledger;

/// Trends report orchestration
pub mod trends;

pub use goal_lifecycle::NewGoal;
pub use measurements::NewMeasurement;
pub use progress_ledger::LoggedProgress;
