//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,vista_ui=debug";

/// Install a fmt subscriber, honouring `RUST_LOG` when present.
///
/// Calling this more than once is harmless; later calls keep the first subscriber.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber with an explicit fallback filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("Global subscriber already installed, keeping it");
    }
}
