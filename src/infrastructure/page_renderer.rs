// HTML page rendering with Tera
use crate::domain::dashboard::{Dashboard, DashboardOutcome, DashboardPage};
use crate::infrastructure::config::PageSettings;
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATE_NAME: &str = "dashboard.html";
const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.html");

pub const EMPTY_CITY_PROMPT: &str = "Enter a city name to see its forecast.";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("chart serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, DASHBOARD_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, settings: &PageSettings, page: &DashboardPage) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("title", &settings.title);
        context.insert("layout", settings.layout.as_str());
        context.insert("input_value", &page.input_value);

        let mut prompt: Option<String> = None;
        let mut error: Option<&str> = None;
        let mut dashboard: Option<&Dashboard> = None;

        match &page.outcome {
            DashboardOutcome::Prompt => prompt = Some(EMPTY_CITY_PROMPT.to_string()),
            DashboardOutcome::NoData { city } => {
                prompt = Some(format!("No forecast data available for {}.", city))
            }
            DashboardOutcome::Failed { message } => error = Some(message.as_str()),
            DashboardOutcome::Rendered(d) => dashboard = Some(d),
        }

        let charts_json = match dashboard {
            Some(d) => script_safe_json(&d.charts)?,
            None => "[]".to_string(),
        };

        context.insert("prompt", &prompt);
        context.insert("error", &error);
        context.insert("dashboard", &dashboard);
        context.insert("charts_json", &charts_json);

        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// JSON that can sit inside a `<script>` element without closing it.
fn script_safe_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
