// Dashboard domain model
use super::city::City;
use super::forecast::{CurrentConditions, ForecastField, ForecastTable};
use serde::Serialize;

const CHART_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub id: &'static str,
    pub tab: &'static str,
    pub title: String,
    pub y_label: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl TrendChart {
    pub fn new(field: ForecastField, table: &ForecastTable) -> Self {
        let x = table
            .records()
            .iter()
            .map(|r| r.datetime.format(CHART_TIME_FORMAT).to_string())
            .collect();

        Self {
            id: field.column_name(),
            tab: field.label(),
            title: field.chart_title(),
            y_label: field.column_name(),
            x,
            y: table.column(field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub city: City,
    pub metrics: Vec<Metric>,
    pub charts: Vec<TrendChart>,
}

impl Dashboard {
    pub fn new(city: City, current: &CurrentConditions, table: &ForecastTable) -> Self {
        let metrics = ForecastField::ALL
            .iter()
            .map(|field| Metric {
                label: field.metric_label(),
                value: field.format_value(current.value(*field)),
            })
            .collect();

        let charts = ForecastField::ALL
            .iter()
            .map(|field| TrendChart::new(*field, table))
            .collect();

        Self {
            city,
            metrics,
            charts,
        }
    }
}

/// What a single page render shows below the city input.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutcome {
    /// The city input was empty.
    Prompt,
    Rendered(Dashboard),
    /// The forecast arrived but had no samples.
    NoData { city: City },
    Failed { message: String },
}

/// Everything one render of the page needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    /// Value shown in the city text input.
    pub input_value: String,
    pub outcome: DashboardOutcome,
}
