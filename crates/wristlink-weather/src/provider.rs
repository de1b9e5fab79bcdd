//! Weather provider HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::types::{Fix, ProviderResponse, WeatherError};

/// Client for the provider's current-weather endpoint.
///
/// The endpoint and credential are injected so tests can substitute a
/// fake provider.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch the current temperature in Kelvin for `fix`.
    ///
    /// One GET, no retry. A non-2xx status or a body without `main.temp`
    /// fails the calling cycle.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_current_kelvin(&self, fix: &Fix) -> Result<f64, WeatherError> {
        let url = format!(
            "{}?lat={}&lon={}&appid={}",
            self.base_url, fix.latitude, fix.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Provider {
                status: status.as_u16(),
            });
        }

        let body: ProviderResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!("Provider returned {} K", body.main.temp);
        Ok(body.main.temp)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_fix() -> Fix {
        Fix {
            latitude: 52.52,
            longitude: 13.405,
        }
    }

    async fn provider_for(server: &MockServer) -> WeatherProvider {
        let base_url = format!("{}/data/2.5/weather", server.uri());
        WeatherProvider::new(&base_url, "test_key").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_current_kelvin() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "52.52"))
            .and(query_param("lon", "13.405"))
            .and(query_param("appid", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": {"temp": 300.15}
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server).await;
        let kelvin = provider.fetch_current_kelvin(&test_fix()).await.unwrap();

        assert!((kelvin - 300.15).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_non_success_status_is_provider_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "cod": 401, "message": "Invalid API key"
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server).await;
        let result = provider.fetch_current_kelvin(&test_fix()).await;

        assert!(matches!(
            result,
            Err(WeatherError::Provider { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_missing_temp_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"main": {}})),
            )
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server).await;
        let result = provider.fetch_current_kelvin(&test_fix()).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server).await;
        let result = provider.fetch_current_kelvin(&test_fix()).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }
}
