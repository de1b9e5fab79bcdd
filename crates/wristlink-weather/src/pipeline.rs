//! The fetch cycle: fix -> fetch -> convert -> payload.

use std::sync::Arc;

use wristlink_device::TransportDict;

use crate::location::{acquire_fix, LocationSource};
use crate::provider::WeatherProvider;
use crate::types::{FixRequest, WeatherError};

/// Kelvin to whole-degree Celsius.
///
/// Rounds half away from zero: 272.65 K is -0.5 C and becomes -1.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}

/// One weather refresh, composed as a sequential pipeline that
/// short-circuits on the first failure.
///
/// A pipeline value is cheap to share; every [`run`](Self::run) call is an
/// independent cycle, so overlapping runs never observe each other.
#[derive(Clone)]
pub struct WeatherPipeline {
    source: Arc<dyn LocationSource>,
    provider: WeatherProvider,
    request: FixRequest,
}

impl WeatherPipeline {
    pub fn new(
        source: Arc<dyn LocationSource>,
        provider: WeatherProvider,
        request: FixRequest,
    ) -> Self {
        Self {
            source,
            provider,
            request,
        }
    }

    /// Run a full cycle and shape the weather payload.
    ///
    /// Every failure is terminal for this cycle; the next fetch happens
    /// only on the next host event.
    pub async fn run(&self) -> Result<TransportDict, WeatherError> {
        let fix = acquire_fix(self.source.as_ref(), &self.request).await?;
        tracing::debug!("Acquired fix at {:.4},{:.4}", fix.latitude, fix.longitude);

        let kelvin = self.provider.fetch_current_kelvin(&fix).await?;
        let celsius = kelvin_to_celsius(kelvin);
        tracing::info!("Current temperature: {} C", celsius);

        Ok(TransportDict::weather(celsius))
    }
}
