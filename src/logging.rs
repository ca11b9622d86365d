// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Env-driven level selection with a quiet fallback for embedded use
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging setup built on `tracing-subscriber`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info` for this crate.
/// Safe to call once per process; later calls are ignored if a subscriber
/// is already installed.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recomp_engine=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
