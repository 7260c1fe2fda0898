// Dashboard service - Use case for rendering one page of the dashboard
use crate::application::forecast_provider::{ForecastError, ForecastProvider};
use crate::application::location_service::LocationService;
use crate::application::table_builder::build_table;
use crate::domain::city::City;
use crate::domain::dashboard::{Dashboard, DashboardOutcome, DashboardPage};
use crate::domain::forecast::{CurrentConditions, ForecastTable};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    location: LocationService,
    forecasts: Arc<dyn ForecastProvider>,
}

impl DashboardService {
    pub fn new(location: LocationService, forecasts: Arc<dyn ForecastProvider>) -> Self {
        Self {
            location,
            forecasts,
        }
    }

    /// Run resolve -> fetch -> build for one render.
    ///
    /// `city_input` is what the user submitted, `None` on a first visit, in
    /// which case the input is seeded with the geolocated city.
    pub async fn render(&self, city_input: Option<&str>) -> DashboardPage {
        let input_value = match city_input {
            Some(input) => input.to_string(),
            None => self.location.resolve_default_city().await.to_string(),
        };

        let outcome = match City::parse(&input_value) {
            Some(city) => self.build_dashboard(city).await,
            None => DashboardOutcome::Prompt,
        };

        DashboardPage {
            input_value,
            outcome,
        }
    }

    /// Fetch and flatten the forecast without building any view.
    pub async fn forecast_table(&self, city: &City) -> Result<ForecastTable, ForecastError> {
        let response = self.forecasts.fetch_forecast(city).await?;
        Ok(build_table(&response)?)
    }

    async fn build_dashboard(&self, city: City) -> DashboardOutcome {
        match self.load(&city).await {
            Ok(Some((current, table))) => {
                tracing::debug!("Rendering {} forecast records for {}", table.len(), city);
                DashboardOutcome::Rendered(Dashboard::new(city, &current, &table))
            }
            Ok(None) => {
                tracing::info!("Forecast for {} has no samples", city);
                DashboardOutcome::NoData { city }
            }
            Err(e) => {
                match &e {
                    ForecastError::Malformed(_) => {
                        tracing::error!("Error reading forecast for {}: {}", city, e)
                    }
                    _ => tracing::warn!("Error fetching forecast for {}: {}", city, e),
                }
                DashboardOutcome::Failed {
                    message: e.user_message().to_string(),
                }
            }
        }
    }

    async fn load(
        &self,
        city: &City,
    ) -> Result<Option<(CurrentConditions, ForecastTable)>, ForecastError> {
        let response = self.forecasts.fetch_forecast(city).await?;

        let Some(current) = CurrentConditions::from_response(&response)? else {
            return Ok(None);
        };
        let table = build_table(&response)?;

        Ok(Some((current, table)))
    }
}
