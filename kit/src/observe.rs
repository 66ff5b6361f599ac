//! Tracing bootstrap for hosts embedding the flow engine.

use tracing_subscriber::EnvFilter;

/// Initialize a simple stdout tracing subscriber for development
///
/// Honors `RUST_LOG` when set; otherwise keeps transitions visible at
/// debug while everything else stays at info.
pub fn init_stdout_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rumbo_core=debug,rumbo_flow=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
