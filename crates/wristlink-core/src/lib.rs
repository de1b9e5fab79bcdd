pub mod config;

pub use config::{Config, LocationConfig, SurfaceConfig, ValidationResult, WeatherConfig};

use anyhow::Result;

/// Initialize the bridge runtime (logging).
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Wristlink core initialized");
    Ok(())
}
