use std::time::Duration;

use async_trait::async_trait;
use drivehire_core::{
    entities::{GeocodingStatus, MapPoint, ReverseGeocoding},
    gateways::geocode::{GeocodingError, ReverseGeocodingGateway},
};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A reverse geocoding gateway for the Google Maps Geocoding API
/// and services that speak the same JSON dialect.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base_url: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn try_new(
        api_key: String,
        api_base_url: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, GeocodingError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(transport_error)?;
        let api_base_url = api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            client,
            api_base_url,
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct JsonResponse {
    status: String,
    #[serde(default)]
    results: Vec<JsonResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonResult {
    formatted_address: String,
}

fn transport_error(err: reqwest::Error) -> GeocodingError {
    GeocodingError::Transport(err.to_string())
}

fn parse_response(body: &str) -> Result<ReverseGeocoding, GeocodingError> {
    let JsonResponse {
        status,
        results,
        error_message,
    } = serde_json::from_str(body).map_err(|err| GeocodingError::MalformedResponse(err.to_string()))?;
    if let Some(msg) = error_message {
        log::debug!("Geocoding service responded with status {status}: {msg}");
    }
    let formatted_addresses = results.into_iter().map(|r| r.formatted_address).collect();
    Ok(ReverseGeocoding {
        status: GeocodingStatus::from(status.as_str()),
        formatted_addresses,
    })
}

#[async_trait]
impl ReverseGeocodingGateway for GoogleMaps {
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        let latlng = pos.to_string();
        let response = self
            .client
            .get(&self.api_base_url)
            .query(&[("latlng", latlng.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;
        let http_status = response.status();
        if !http_status.is_success() {
            log::debug!("Geocoding service response: {response:?}");
            let status = GeocodingStatus::Other(format!("HTTP_{}", http_status.as_u16()));
            return Ok(ReverseGeocoding::failed(status));
        }
        let body = response.text().await.map_err(transport_error)?;
        parse_response(&body)
    }
}
