// Port for fetching raw forecasts
use crate::domain::city::City;
use crate::domain::forecast::{ForecastResponse, PayloadError};
use async_trait::async_trait;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "City not found or API limit reached.";
pub const UNREACHABLE_MESSAGE: &str = "Forecast service is unreachable.";
pub const MALFORMED_MESSAGE: &str = "Forecast data could not be read.";

#[derive(Debug, Error)]
pub enum ForecastError {
    /// Any non-200 answer; unknown city, bad credential and rate limiting all land here.
    #[error("forecast request returned status {status}")]
    NotFound { status: u16 },

    #[error("forecast service unreachable: {0}")]
    Unreachable(String),

    #[error("malformed forecast payload: {0}")]
    Malformed(String),
}

impl ForecastError {
    /// Text shown on the dashboard in place of metrics and charts.
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::NotFound { .. } => NOT_FOUND_MESSAGE,
            ForecastError::Unreachable(_) => UNREACHABLE_MESSAGE,
            ForecastError::Malformed(_) => MALFORMED_MESSAGE,
        }
    }
}

impl From<PayloadError> for ForecastError {
    fn from(e: PayloadError) -> Self {
        ForecastError::Malformed(e.to_string())
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the multi-day forecast for a city with exactly one outbound request
    async fn fetch_forecast(&self, city: &City) -> Result<ForecastResponse, ForecastError>;
}
