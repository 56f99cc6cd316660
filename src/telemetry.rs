//! Telemetry helpers for applications embedding `chart-overlay-rs`.
//!
//! Tracing setup is explicit and opt-in. Hosts that already own a global
//! subscriber skip this module entirely and the crate's `tracing` calls flow
//! into theirs.

/// Installs a compact `tracing` subscriber reading `RUST_LOG`, falling back
/// to `fallback_filter` (any `EnvFilter` directive, e.g.
/// `"chart_overlay=debug"`) when the variable is unset or malformed.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

/// [`init_tracing_with_filter`] with an `info` fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}
