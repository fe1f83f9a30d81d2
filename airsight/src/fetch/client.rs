//! Reading client trait and HTTP implementation.
//!
//! The [`ReadingClient`] trait abstracts over the air quality data service,
//! allowing the dispatcher and refresh daemon to work against mocks in
//! tests. The [`HttpReadingClient`] implementation fetches readings from
//! the service's JSON endpoints via `reqwest`.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use super::error::FetchError;
use crate::coord::GeoPoint;
use crate::source::{Reading, SourceId};

/// Default HTTP timeout for reading fetches.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default base URL of the air quality data service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Wire format of one reading from the data service.
///
/// Both fields are optional: a source may answer without an index (no
/// measurement available) or without pollutant detail. Unknown fields in
/// the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingDto {
    pub aqi: Option<f64>,
    pub pollutants: Option<HashMap<String, f64>>,
}

impl ReadingDto {
    /// Validates the payload and converts it into a [`Reading`].
    ///
    /// A missing index is valid (the presentation layer substitutes its
    /// own defaults); a negative index is not and is rejected here, at
    /// the trust boundary.
    pub fn into_reading(self) -> Result<Reading, FetchError> {
        if let Some(aqi) = self.aqi {
            if aqi < 0.0 {
                return Err(FetchError::InvalidReading(aqi));
            }
        }

        let reading = Reading::new(self.aqi);
        Ok(match self.pollutants {
            Some(map) => reading.with_pollutants(map),
            None => reading,
        })
    }
}

/// Trait for fetching the latest reading of one source.
///
/// Implementations fetch the reading for the given source at the given
/// reference point.
pub trait ReadingClient: Send + Sync {
    /// Fetch the current reading for `source` at `point`.
    fn fetch_reading(
        &self,
        source: SourceId,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Reading, FetchError>> + Send;
}

/// HTTP client against the air quality data service.
///
/// Each source maps to its own endpoint under `/api/airquality/`. Uses a
/// reusable `reqwest::Client` with connection pooling and timeouts.
pub struct HttpReadingClient {
    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    /// Base URL of the data service, without trailing slash.
    base_url: String,
}

impl HttpReadingClient {
    /// Create a new HTTP reading client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint URL for one source.
    fn endpoint(&self, source: SourceId) -> String {
        let path = match source {
            SourceId::Current => "current",
            SourceId::Satellite => "tempo",
            SourceId::Ground => "openaq",
        };
        format!("{}/api/airquality/{}", self.base_url, path)
    }
}

impl ReadingClient for HttpReadingClient {
    async fn fetch_reading(
        &self,
        source: SourceId,
        point: GeoPoint,
    ) -> Result<Reading, FetchError> {
        let url = self.endpoint(source);

        let response = self
            .http
            .get(&url)
            .query(&[("lat", point.lat), ("lon", point.lon)])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let dto: ReadingDto =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(source = %source, url = %url, aqi = ?dto.aqi, "Reading fetched");

        dto.into_reading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = HttpReadingClient::new("http://localhost:5000/", DEFAULT_HTTP_TIMEOUT).unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_endpoint_per_source() {
        let client = HttpReadingClient::new(DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT).unwrap();
        assert_eq!(
            client.endpoint(SourceId::Current),
            "http://localhost:5000/api/airquality/current"
        );
        assert_eq!(
            client.endpoint(SourceId::Satellite),
            "http://localhost:5000/api/airquality/tempo"
        );
        assert_eq!(
            client.endpoint(SourceId::Ground),
            "http://localhost:5000/api/airquality/openaq"
        );
    }

    #[test]
    fn test_dto_deserialize_full() {
        let json = r#"{"aqi": 68.0, "pollutants": {"pm25": 12.5, "o3": 41.0}}"#;
        let dto: ReadingDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.aqi, Some(68.0));
        let pollutants = dto.pollutants.as_ref().unwrap();
        assert_eq!(pollutants["pm25"], 12.5);
        assert_eq!(pollutants["o3"], 41.0);
    }

    #[test]
    fn test_dto_deserialize_missing_fields() {
        let dto: ReadingDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.aqi, None);
        assert!(dto.pollutants.is_none());
    }

    #[test]
    fn test_dto_deserialize_null_aqi() {
        let dto: ReadingDto = serde_json::from_str(r#"{"aqi": null}"#).unwrap();
        assert_eq!(dto.aqi, None);
    }

    #[test]
    fn test_dto_deserialize_ignores_extra_fields() {
        // The service includes provenance fields we don't consume
        let json = r#"{
            "aqi": 42,
            "station": "NYC-001",
            "updated_at": "2026-03-01T12:00:00Z",
            "quality_flags": ["validated"]
        }"#;

        let dto: ReadingDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.aqi, Some(42.0));
    }

    #[test]
    fn test_into_reading_carries_pollutants() {
        let json = r#"{"aqi": 55.0, "pollutants": {"no2": 18.0}}"#;
        let dto: ReadingDto = serde_json::from_str(json).unwrap();

        let reading = dto.into_reading().unwrap();
        assert_eq!(reading.aqi, Some(55.0));
        assert_eq!(reading.pollutants.unwrap()["no2"], 18.0);
    }

    #[test]
    fn test_into_reading_allows_missing_aqi() {
        let dto: ReadingDto = serde_json::from_str("{}").unwrap();
        let reading = dto.into_reading().unwrap();
        assert_eq!(reading.aqi, None);
    }

    #[test]
    fn test_into_reading_rejects_negative_aqi() {
        let dto: ReadingDto = serde_json::from_str(r#"{"aqi": -3.0}"#).unwrap();
        let result = dto.into_reading();
        assert!(matches!(result, Err(FetchError::InvalidReading(v)) if v == -3.0));
    }

    #[test]
    fn test_into_reading_accepts_zero() {
        let dto: ReadingDto = serde_json::from_str(r#"{"aqi": 0.0}"#).unwrap();
        let reading = dto.into_reading().unwrap();
        assert_eq!(reading.aqi, Some(0.0));
    }
}
