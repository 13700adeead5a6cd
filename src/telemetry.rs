//! Telemetry helpers for applications embedding `stackbar-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call one of
//! the helpers below or install their own `tracing` subscriber and
//! filters before constructing an engine.

/// Fallback filter when `RUST_LOG` is unset: engine events at debug,
/// everything else at info.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info,stackbar_rs=debug";

/// Initializes a default `tracing` subscriber when the `telemetry`
/// feature is enabled, honoring `RUST_LOG` when present.
///
/// Returns `true` when initialization succeeds. Returns `false` when no
/// initialization is performed (feature disabled) or if a global
/// subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        return init_tracing_with_filter(DEFAULT_FILTER);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Like [`init_default_tracing`], with an explicit fallback filter
/// directive (e.g. `"stackbar_rs=trace"`) instead of the default one.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
