// OpenWeatherMap forecast client
use crate::application::forecast_provider::{ForecastError, ForecastProvider};
use crate::domain::city::City;
use crate::domain::forecast::ForecastResponse;
use async_trait::async_trait;
use reqwest::StatusCode;

const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// `base_url` is the full forecast endpoint, query parameters are appended to it.
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn build_forecast_url(&self, city: &City) -> String {
        format!(
            "{}?q={}&appid={}&units={}",
            self.base_url,
            urlencoding::encode(city.as_str()),
            urlencoding::encode(&self.api_key),
            UNITS
        )
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    async fn fetch_forecast(&self, city: &City) -> Result<ForecastResponse, ForecastError> {
        let url = self.build_forecast_url(city);
        tracing::debug!("Requesting forecast for {} from {}", city, self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ForecastError::Unreachable(e.without_url().to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ForecastError::NotFound {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ForecastError::Unreachable(e.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|e| ForecastError::Malformed(e.to_string()))
    }
}
