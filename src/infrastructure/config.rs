use serde::Deserialize;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub location: LocationSettings,
    #[serde(default)]
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastSettings {
    #[serde(default = "default_forecast_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationSettings {
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub layout: PageLayout,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Centered,
    Wide,
}

impl PageLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageLayout::Centered => "centered",
            PageLayout::Wide => "wide",
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_forecast_url() -> String {
    "https://api.openweathermap.org/data/2.5/forecast".to_string()
}

fn default_lookup_url() -> String {
    "https://ipinfo.io".to_string()
}

fn default_lookup_timeout() -> u64 {
    5
}

fn default_city() -> String {
    crate::domain::city::DEFAULT_CITY.to_string()
}

fn default_title() -> String {
    "Dynamic Weather Dashboard".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            base_url: default_forecast_url(),
            api_key: None,
        }
    }
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            lookup_url: default_lookup_url(),
            default_city: default_city(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            layout: PageLayout::default(),
        }
    }
}

/// Load `config/dashboard.*` (optional), then `WEATHER_*` variables, then the API key.
///
/// Nested keys use a double underscore, e.g. `WEATHER_SERVER__BIND_ADDRESS`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("WEATHER")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("forecast.api_key", std::env::var(API_KEY_ENV).ok())?
        .build()?;

    Ok(settings.try_deserialize()?)
}
