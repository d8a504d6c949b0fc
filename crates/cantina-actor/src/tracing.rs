//! # Observability & Tracing
//!
//! Structured logging for the whole system. Every actor logs its lifecycle at `info`
//! (`Actor started`, `Created`, `Committed`, `Shutdown`), every request at `debug` with its
//! payload, and every failure or rollback at `warn`. Typed clients add `#[instrument]` spans,
//! so a request shows up nested under the call that issued it.
//!
//! ```bash
//! RUST_LOG=info cargo run                   # lifecycle and results
//! RUST_LOG=debug cargo run                  # full payloads
//! RUST_LOG=cantina_actor=debug cargo run    # runtime only
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once: later calls are ignored, which lets tests and binaries share it.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already identifies the source
        .compact()
        .try_init();
}
