//! Fix acquisition.

use async_trait::async_trait;

use crate::types::{Fix, FixRequest, LocationError};

/// Source of geolocation fixes, normally backed by the host's location
/// service.
///
/// Implementations may serve a reading cached within
/// `request.maximum_age` instead of forcing a fresh sensor read. The
/// bounded wait is enforced by the caller (see [`acquire_fix`]), so
/// implementations are free to block for as long as the host does.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn request_fix(&self, request: &FixRequest) -> Result<Fix, LocationError>;
}

/// Fixed-coordinate source for hosts without a location service.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationSource {
    fix: Fix,
}

impl StaticLocationSource {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Fix {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationSource for StaticLocationSource {
    async fn request_fix(&self, _request: &FixRequest) -> Result<Fix, LocationError> {
        Ok(self.fix)
    }
}

/// Request a fix with the bounded wait from `request.timeout`.
///
/// A source that outlives the bound is abandoned and reported as
/// [`LocationError::Timeout`]; no retry is scheduled here.
pub async fn acquire_fix(
    source: &dyn LocationSource,
    request: &FixRequest,
) -> Result<Fix, LocationError> {
    match tokio::time::timeout(request.timeout, source.request_fix(request)).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}
