// Forecast domain models - payload schema and derived time series
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a successful forecast API call.
///
/// Nested fields are optional at decode time so that a missing value is
/// reported as a [`PayloadError`] naming the exact field, rather than
/// rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastSample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastSample {
    pub dt: Option<i64>,
    pub main: Option<MainGroup>,
    pub wind: Option<WindGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainGroup {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindGroup {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("forecast sample {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("forecast sample {index} has out-of-range timestamp {dt}")]
    InvalidTimestamp { index: usize, dt: i64 },
}

impl ForecastSample {
    /// Convert a raw sample into a record, `index` is only used for error reporting.
    pub fn to_record(&self, index: usize) -> Result<ForecastRecord, PayloadError> {
        let missing = |field| PayloadError::MissingField { index, field };

        let dt = self.dt.ok_or_else(|| missing("dt"))?;
        let main = self.main.as_ref().ok_or_else(|| missing("main"))?;
        let wind = self.wind.as_ref().ok_or_else(|| missing("wind"))?;

        let datetime = DateTime::from_timestamp(dt, 0)
            .ok_or(PayloadError::InvalidTimestamp { index, dt })?
            .with_timezone(&Local);

        Ok(ForecastRecord {
            datetime,
            temperature: main.temp.ok_or_else(|| missing("main.temp"))?,
            humidity: main.humidity.ok_or_else(|| missing("main.humidity"))?,
            pressure: main.pressure.ok_or_else(|| missing("main.pressure"))?,
            wind_speed: wind.speed.ok_or_else(|| missing("wind.speed"))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub datetime: DateTime<Local>,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}

/// Records in the same order as the samples they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastTable {
    records: Vec<ForecastRecord>,
}

impl ForecastTable {
    pub fn new(records: Vec<ForecastRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column(&self, field: ForecastField) -> Vec<f64> {
        self.records.iter().map(|r| field.value_of(r)).collect()
    }
}

/// The first sample of a response, treated as "now".
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions(pub ForecastRecord);

impl CurrentConditions {
    /// `Ok(None)` when the response has no samples.
    pub fn from_response(response: &ForecastResponse) -> Result<Option<Self>, PayloadError> {
        response
            .list
            .first()
            .map(|sample| sample.to_record(0).map(Self))
            .transpose()
    }

    pub fn value(&self, field: ForecastField) -> f64 {
        field.value_of(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastField {
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
}

impl ForecastField {
    /// Display order for metrics and tabs.
    pub const ALL: [ForecastField; 4] = [
        ForecastField::Temperature,
        ForecastField::Humidity,
        ForecastField::Pressure,
        ForecastField::WindSpeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ForecastField::Temperature => "Temperature",
            ForecastField::Humidity => "Humidity",
            ForecastField::Pressure => "Pressure",
            ForecastField::WindSpeed => "Wind Speed",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ForecastField::Temperature => "°C",
            ForecastField::Humidity => "%",
            ForecastField::Pressure => "hPa",
            ForecastField::WindSpeed => "m/s",
        }
    }

    /// Column name as it appears in the table, e.g. `wind_speed`.
    pub fn column_name(&self) -> &'static str {
        match self {
            ForecastField::Temperature => "temperature",
            ForecastField::Humidity => "humidity",
            ForecastField::Pressure => "pressure",
            ForecastField::WindSpeed => "wind_speed",
        }
    }

    pub fn value_of(&self, record: &ForecastRecord) -> f64 {
        match self {
            ForecastField::Temperature => record.temperature,
            ForecastField::Humidity => record.humidity,
            ForecastField::Pressure => record.pressure,
            ForecastField::WindSpeed => record.wind_speed,
        }
    }

    /// "Temperature (°C)"
    pub fn metric_label(&self) -> String {
        format!("{} ({})", self.label(), self.unit())
    }

    /// "15.2°C", "60%", "1012 hPa", "3.4 m/s"
    pub fn format_value(&self, value: f64) -> String {
        match self {
            ForecastField::Temperature | ForecastField::Humidity => {
                format!("{}{}", value, self.unit())
            }
            ForecastField::Pressure | ForecastField::WindSpeed => {
                format!("{} {}", value, self.unit())
            }
        }
    }

    pub fn chart_title(&self) -> String {
        format!("{} Over Time", self.label())
    }
}
