//! Logging for the `chartprep` binary.
//!
//! Library code only emits `tracing` events; embedding applications are free
//! to install their own subscriber instead of calling `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a compact subscriber filtered by `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]).
///
/// Events are written to stderr: stdout carries the Vega-Lite JSON and must
/// stay parseable when piped into a renderer.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
