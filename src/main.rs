// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::location_service::LocationService;
use crate::domain::city::City;
use crate::infrastructure::config::{load_dashboard_config, API_KEY_ENV};
use crate::infrastructure::ipinfo_client::IpInfoClient;
use crate::infrastructure::openweather_client::OpenWeatherClient;
use crate::infrastructure::page_renderer::PageRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::page::configure_page;
use crate::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;
    configure_page(config.page.clone())?;

    let api_key = config.forecast.api_key.clone().unwrap_or_else(|| {
        tracing::warn!("{} is not set, forecast requests will be rejected", API_KEY_ENV);
        String::new()
    });

    // Create adapters (infrastructure layer)
    let forecast_client = Arc::new(OpenWeatherClient::new(
        reqwest::Client::new(),
        config.forecast.base_url.clone(),
        api_key,
    ));
    let geo_client = Arc::new(IpInfoClient::new(
        config.location.lookup_url.clone(),
        Duration::from_secs(config.location.timeout_secs),
    )?);
    let renderer = Arc::new(PageRenderer::new()?);

    // Create services (application layer)
    let default_city = City::parse(&config.location.default_city).unwrap_or_default();
    let location_service = LocationService::new(geo_client, default_city);
    let dashboard_service = DashboardService::new(location_service, forecast_client);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        renderer,
    });

    // Build router (presentation layer)
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_address))?;
    tracing::info!("Starting weather-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
