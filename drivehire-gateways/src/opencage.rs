use async_trait::async_trait;
use drivehire_core::{
    entities::{GeocodingStatus, MapPoint, ReverseGeocoding},
    gateways::geocode::{GeocodingError, ReverseGeocodingGateway},
};
use geocoding::{Opencage, Point, Reverse};

/// A reverse geocoding gateway for opencagedata.com.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub const fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

fn into_reverse_geocoding(address: Option<String>) -> ReverseGeocoding {
    match address {
        Some(address) => ReverseGeocoding::found(vec![address]),
        None => ReverseGeocoding::failed(GeocodingStatus::ZeroResults),
    }
}

#[async_trait]
impl ReverseGeocodingGateway for OpenCage {
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        let api_key = self.api_key.clone();
        // The client of the geocoding crate is blocking
        let address = tokio::task::spawn_blocking(move || {
            let oc_req = Opencage::new(api_key);
            let point = Point::new(pos.lng(), pos.lat());
            oc_req.reverse(&point).map_err(|err| err.to_string())
        })
        .await
        .map_err(|err| GeocodingError::Transport(err.to_string()))?
        .map_err(GeocodingError::Transport)?;
        Ok(into_reverse_geocoding(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_opencage_results() {
        let res = into_reverse_geocoding(Some("MG Road, Pune".into()));
        assert_eq!(GeocodingStatus::Ok, res.status);
        assert_eq!(Some("MG Road, Pune"), res.first_address());

        let res = into_reverse_geocoding(None);
        assert_eq!(GeocodingStatus::ZeroResults, res.status);
        assert_eq!(None, res.first_address());
    }
}
