// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::page_renderer::PageRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub renderer: Arc<PageRenderer>,
}
