//! Opt-in `tracing` setup for binaries built on `scrolly-chart`.
//!
//! The library only emits events; hosts that already install a subscriber
//! can ignore this module.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "scrolly_chart=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `DEFAULT_LOG_FILTER`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_LOG_FILTER)
}

/// Same as `init_default_tracing` with an explicit fallback filter.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
