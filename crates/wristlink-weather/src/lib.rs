//! Weather fetch pipeline.
//!
//! One cycle runs fix acquisition, a single provider request, unit
//! conversion, and payload shaping. Cycles are independent: a failure in
//! one never schedules a retry, and nothing except the injected provider
//! endpoint survives between them.

pub mod location;
pub mod pipeline;
pub mod provider;
pub mod types;

pub use location::{acquire_fix, LocationSource, StaticLocationSource};
pub use pipeline::{kelvin_to_celsius, WeatherPipeline};
pub use provider::WeatherProvider;
pub use types::{Fix, FixRequest, LocationError, WeatherError};
