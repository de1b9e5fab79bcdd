use serde::Deserialize;
use std::time::Duration;

/// A single geolocation reading.
///
/// Used once to build one provider request, then discarded; the bridge
/// never caches fixes across cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Bounds for one fix request.
#[derive(Debug, Clone, Copy)]
pub struct FixRequest {
    /// Abandon the attempt after this long
    pub timeout: Duration,
    /// Accept a cached fix no older than this
    pub maximum_age: Duration,
}

impl Default for FixRequest {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// Wire shape of the provider response. Only `main.temp` is consumed;
/// anything else in the body is ignored, and a body without it is a
/// parse failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderResponse {
    pub(crate) main: MainSection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainSection {
    /// Current temperature in Kelvin
    pub(crate) temp: f64,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Provider returned status {status}")]
    Provider { status: u16 },
    #[error("Parse error: {0}")]
    Parse(String),
}
