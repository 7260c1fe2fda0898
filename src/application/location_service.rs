// Location service - Use case for picking the default city
use crate::application::geo_lookup::{GeoLookup, GeoLookupError};
use crate::domain::city::City;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Unreachable,
    Status(u16),
    Malformed,
    MissingCity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationResolution {
    Located(City),
    Fallback { city: City, reason: FallbackReason },
}

impl LocationResolution {
    pub fn into_city(self) -> City {
        match self {
            LocationResolution::Located(city) => city,
            LocationResolution::Fallback { city, .. } => city,
        }
    }
}

#[derive(Clone)]
pub struct LocationService {
    lookup: Arc<dyn GeoLookup>,
    default_city: City,
}

impl LocationService {
    pub fn new(lookup: Arc<dyn GeoLookup>, default_city: City) -> Self {
        Self {
            lookup,
            default_city,
        }
    }

    /// One lookup, no retries and nothing cached between calls.
    pub async fn resolve(&self) -> LocationResolution {
        let reason = match self.lookup.lookup_city().await {
            Ok(Some(name)) => match City::parse(&name) {
                Some(city) => return LocationResolution::Located(city),
                None => FallbackReason::MissingCity,
            },
            Ok(None) => FallbackReason::MissingCity,
            Err(GeoLookupError::Unreachable(e)) => {
                tracing::warn!("Geolocation lookup failed: {}", e);
                FallbackReason::Unreachable
            }
            Err(GeoLookupError::Status(status)) => {
                tracing::warn!("Geolocation lookup returned status {}", status);
                FallbackReason::Status(status)
            }
            Err(GeoLookupError::Malformed(e)) => {
                tracing::warn!("Geolocation response could not be parsed: {}", e);
                FallbackReason::Malformed
            }
        };

        tracing::debug!(
            "Falling back to default city {} ({:?})",
            self.default_city,
            reason
        );

        LocationResolution::Fallback {
            city: self.default_city.clone(),
            reason,
        }
    }

    pub async fn resolve_default_city(&self) -> City {
        self.resolve().await.into_city()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct FakeGeoLookup {
        result: fn() -> Result<Option<String>, GeoLookupError>,
        pub calls: AtomicUsize,
    }

    impl FakeGeoLookup {
        pub(crate) fn new(result: fn() -> Result<Option<String>, GeoLookupError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GeoLookup for FakeGeoLookup {
        async fn lookup_city(&self) -> Result<Option<String>, GeoLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn service(result: fn() -> Result<Option<String>, GeoLookupError>) -> LocationService {
        LocationService::new(Arc::new(FakeGeoLookup::new(result)), City::default())
    }

    #[tokio::test]
    async fn test_located_city() {
        let resolution = service(|| Ok(Some("Paris".to_string()))).resolve().await;
        assert_eq!(resolution, LocationResolution::Located(City::new("Paris")));
    }

    async fn assert_fallback(
        result: fn() -> Result<Option<String>, GeoLookupError>,
        reason: FallbackReason,
    ) {
        assert_eq!(
            service(result).resolve().await,
            LocationResolution::Fallback {
                city: City::new("New York"),
                reason
            }
        );
    }

    #[tokio::test]
    async fn test_fallback_reasons() {
        assert_fallback(|| Ok(None), FallbackReason::MissingCity).await;
        assert_fallback(|| Ok(Some("  ".to_string())), FallbackReason::MissingCity).await;
        assert_fallback(
            || Err(GeoLookupError::Unreachable("timed out".to_string())),
            FallbackReason::Unreachable,
        )
        .await;
        assert_fallback(|| Err(GeoLookupError::Status(429)), FallbackReason::Status(429)).await;
        assert_fallback(
            || Err(GeoLookupError::Malformed("expected value".to_string())),
            FallbackReason::Malformed,
        )
        .await;
    }

    #[tokio::test]
    async fn test_resolve_default_city_does_not_cache() {
        let lookup = Arc::new(FakeGeoLookup::new(|| Ok(Some("Oslo".to_string()))));
        let service = LocationService::new(lookup.clone(), City::default());

        assert_eq!(service.resolve_default_city().await.as_str(), "Oslo");
        assert_eq!(service.resolve_default_city().await.as_str(), "Oslo");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
    }
}
