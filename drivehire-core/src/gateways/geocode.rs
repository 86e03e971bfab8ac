use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{MapPoint, ReverseGeocoding};

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Geocoding request failed: {0}")]
    Transport(String),
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ReverseGeocodingGateway: Send + Sync {
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError>;
}

#[async_trait]
impl<G> ReverseGeocodingGateway for Box<G>
where
    G: ReverseGeocodingGateway + ?Sized,
{
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        (**self).reverse_geocode(pos).await
    }
}

#[async_trait]
impl<G> ReverseGeocodingGateway for Arc<G>
where
    G: ReverseGeocodingGateway + ?Sized,
{
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        (**self).reverse_geocode(pos).await
    }
}
