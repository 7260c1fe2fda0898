// HTTP request handlers
use crate::application::forecast_provider::ForecastError;
use crate::domain::city::City;
use crate::domain::forecast::ForecastTable;
use crate::infrastructure::page_renderer::EMPTY_CITY_PROMPT;
use crate::presentation::app_state::AppState;
use crate::presentation::page::page_settings;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

#[derive(Serialize)]
struct ForecastBody {
    city: City,
    records: ForecastTable,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page; one request is one full render
pub async fn dashboard_page(
    Query(query): Query<CityQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let page = state.dashboard_service.render(query.city.as_deref()).await;

    match state.renderer.render(page_settings(), &page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Error rendering dashboard page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Forecast table as JSON
pub async fn forecast_table(
    Query(query): Query<CityQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(city) = query.city.as_deref().and_then(City::parse) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": EMPTY_CITY_PROMPT })),
        )
            .into_response();
    };

    match state.dashboard_service.forecast_table(&city).await {
        Ok(records) => Json(ForecastBody { city, records }).into_response(),
        Err(e) => {
            tracing::warn!("Error fetching forecast table for {}: {}", city, e);
            let status = match e {
                ForecastError::NotFound { .. } => StatusCode::NOT_FOUND,
                ForecastError::Unreachable(_) | ForecastError::Malformed(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };
            (status, Json(json!({ "error": e.user_message() }))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::tests::{
        scenario_response, service_with, FakeForecastProvider,
    };
    use crate::infrastructure::page_renderer::PageRenderer;
    use crate::presentation::router;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app(forecasts: FakeForecastProvider) -> axum::Router {
        let state = Arc::new(AppState {
            dashboard_service: service_with(|| Ok(Some("Paris".to_string())), Arc::new(forecasts)),
            renderer: Arc::new(PageRenderer::new().unwrap()),
        });
        router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(app(FakeForecastProvider::new(scenario_response)), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_first_visit_seeds_geolocated_city() {
        let (status, body) = get(app(FakeForecastProvider::new(scenario_response)), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="Paris""#));
        assert!(body.contains("Current Weather in Paris"));
        assert!(body.contains("15.2°C"));
    }

    #[tokio::test]
    async fn test_submitted_city_is_fetched() {
        let forecasts = Arc::new(FakeForecastProvider::new(scenario_response));
        let state = Arc::new(AppState {
            dashboard_service: service_with(|| Ok(None), forecasts.clone()),
            renderer: Arc::new(PageRenderer::new().unwrap()),
        });

        let (status, body) = get(router(state), "/?city=S%C3%A3o+Paulo").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Current Weather in São Paulo"));
        assert_eq!(*forecasts.requested.lock().unwrap(), vec!["São Paulo".to_string()]);
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let forecasts = FakeForecastProvider::new(|| Err(ForecastError::NotFound { status: 404 }));
        let (status, body) = get(app(forecasts), "/?city=Atlantis").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("City not found or API limit reached."));
        assert!(!body.contains("Current Weather"));
        assert!(!body.contains("Plotly.newPlot"));
    }

    #[tokio::test]
    async fn test_empty_city_prompts() {
        let (_, body) = get(app(FakeForecastProvider::new(scenario_response)), "/?city=").await;
        assert!(body.contains(EMPTY_CITY_PROMPT));
        assert!(!body.contains("Current Weather"));
    }

    #[tokio::test]
    async fn test_forecast_api() {
        let (status, body) = get(
            app(FakeForecastProvider::new(scenario_response)),
            "/api/forecast?city=Paris",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["city"], "Paris");
        assert_eq!(json["records"].as_array().unwrap().len(), 1);
        assert_eq!(json["records"][0]["temperature"], 15.2);
        assert_eq!(json["records"][0]["wind_speed"], 3.4);
    }

    #[tokio::test]
    async fn test_forecast_api_errors() {
        let forecasts = FakeForecastProvider::new(|| Err(ForecastError::NotFound { status: 401 }));
        let (status, body) = get(app(forecasts), "/api/forecast?city=Paris").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("City not found or API limit reached."));

        let forecasts =
            FakeForecastProvider::new(|| Err(ForecastError::Unreachable("refused".to_string())));
        let (status, _) = get(app(forecasts), "/api/forecast?city=Paris").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = get(
            app(FakeForecastProvider::new(scenario_response)),
            "/api/forecast?city=%20",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
