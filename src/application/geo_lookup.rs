// Port for IP based geolocation
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoLookupError {
    #[error("geolocation service unreachable: {0}")]
    Unreachable(String),

    #[error("geolocation service returned status {0}")]
    Status(u16),

    #[error("malformed geolocation response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// City of the caller's public IP, `None` when the service does not know it
    async fn lookup_city(&self) -> Result<Option<String>, GeoLookupError>;
}
