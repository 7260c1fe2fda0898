// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;
pub mod page;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, forecast_table, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/forecast", get(forecast_table))
        .route("/healthz", get(health_check))
        .with_state(state)
}
