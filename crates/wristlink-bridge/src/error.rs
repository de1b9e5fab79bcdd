//! Coordinator-level error type.

use thiserror::Error;
use wristlink_device::RejectReason;
use wristlink_settings::SettingsError;
use wristlink_weather::WeatherError;

/// Why one event's cycle ended early.
///
/// Every variant is terminal for its cycle only: the event loop logs it
/// and the next host event starts clean.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Weather pipeline failed: {0}")]
    Weather(#[from] WeatherError),

    #[error("Dropped configuration payload: {0}")]
    Settings(#[from] SettingsError),

    #[error("Device rejected message: {0}")]
    Rejected(RejectReason),
}
