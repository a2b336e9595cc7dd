//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Default directives when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_FILTER: &str = "campusgate=info,campusgate_core=info,campusgate_ui=info";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_FILTER`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!(
            "campusgate={level},campusgate_core={level},campusgate_ui={level}"
        )),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Install the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing
/// one is kept and the refusal is logged through it.
pub fn init(level: Option<&str>) -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "tracing subscriber already installed");
            false
        }
    }
}
