// ABOUTME: Main library entry point for the recomp-engine analytics crate
// ABOUTME: Body recomposition goal lifecycle, calculators, and progress trend analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Recomp Engine
//!
//! A body recomposition tracking engine: converts periodic anthropometric
//! measurements into body-fat percentages, derives calorie prescriptions from
//! physiology and activity, and turns a weekly measurement ledger into trend
//! verdicts and adjustment recommendations.
//!
//! The engine performs no I/O of its own. Persistence is reached through the
//! [`database::DatabaseProvider`] trait; HTTP transport, authentication, and
//! the storage backend are the host application's concern.
//!
//! ## Architecture
//!
//! - **Models**: plain domain entities (users, measurements, goals, ledger entries)
//! - **Intelligence**: pure calculation and decision rules (body-fat formulas,
//!   energy model, safety rules, trend classification)
//! - **Services**: orchestration over the repository seam (goal lifecycle,
//!   progress ledger, trends, diet plans)
//! - **Database**: repository abstraction plus an in-memory provider
//!
//! ## Example
//!
//! ```rust,no_run
//! use recomp_engine::config::EngineConfig;
//! use recomp_engine::database::memory::InMemoryDatabase;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = EngineConfig::from_env();
//!     let database = InMemoryDatabase::new();
//!     println!("cutting deficit: {} kcal", config.cutting_deficit);
//!     let _ = database;
//! }
//! ```

/// Engine tunables with environment overrides
pub mod config;

/// Repository abstraction and the in-memory provider
pub mod database;

/// Typed domain error taxonomy
pub mod errors;

/// Pure calculation and decision rules
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain entities and enums
pub mod models;

/// Orchestration over the repository seam
pub mod services;
