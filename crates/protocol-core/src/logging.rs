use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Error returned when a global subscriber could not be installed,
/// usually because one is already set.
pub type TryInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the default fmt subscriber (`info`, overridable through `RUST_LOG`).
pub fn init() {
    init_with(&LogConfig::default());
}

/// Install a fmt subscriber using `config`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_with(config: &LogConfig) {
    if let Err(err) = try_init_with(config) {
        tracing::debug!("logging already initialised: {}", err);
    }
}

/// Install a fmt subscriber using `config`, reporting failure.
pub fn try_init_with(config: &LogConfig) -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.ansi)
        .try_init()
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}
