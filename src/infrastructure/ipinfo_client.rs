// ipinfo.io geolocation client
use crate::application::geo_lookup::{GeoLookup, GeoLookupError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    city: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IpInfoClient {
    client: reqwest::Client,
    lookup_url: String,
}

impl IpInfoClient {
    pub fn new(lookup_url: String, timeout: Duration) -> Result<Self, GeoLookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeoLookupError::Unreachable(e.to_string()))?;

        Ok(Self { client, lookup_url })
    }
}

#[async_trait]
impl GeoLookup for IpInfoClient {
    async fn lookup_city(&self) -> Result<Option<String>, GeoLookupError> {
        let response = self
            .client
            .get(&self.lookup_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GeoLookupError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoLookupError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeoLookupError::Unreachable(e.to_string()))?;
        let info: IpInfoResponse =
            serde_json::from_str(&body).map_err(|e| GeoLookupError::Malformed(e.to_string()))?;

        Ok(info.city)
    }
}
