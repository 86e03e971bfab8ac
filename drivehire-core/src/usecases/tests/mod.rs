use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::prelude::*;

#[derive(Debug, Clone)]
enum Response {
    Geocoding(ReverseGeocoding),
    TransportError,
}

/// A scripted geocoding gateway that records every request.
#[derive(Debug)]
pub struct MockGeoGw {
    response: Mutex<Response>,
    requested: Mutex<Vec<MapPoint>>,
    calls: AtomicUsize,
}

impl MockGeoGw {
    fn new(response: Response) -> Self {
        Self {
            response: Mutex::new(response),
            requested: Mutex::new(vec![]),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn found(addresses: &[&str]) -> Self {
        Self::new(Response::Geocoding(ReverseGeocoding {
            status: GeocodingStatus::Ok,
            formatted_addresses: addresses.iter().map(ToString::to_string).collect(),
        }))
    }

    pub fn status(status: GeocodingStatus) -> Self {
        Self::new(Response::Geocoding(ReverseGeocoding::failed(status)))
    }

    pub fn transport_error() -> Self {
        Self::new(Response::TransportError)
    }

    pub fn respond_with_addresses(&self, addresses: &[&str]) {
        *self.response.lock() = Response::Geocoding(ReverseGeocoding::found(
            addresses.iter().map(ToString::to_string).collect(),
        ));
    }

    pub fn respond_with_status(&self, status: GeocodingStatus) {
        *self.response.lock() = Response::Geocoding(ReverseGeocoding::failed(status));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<MapPoint> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl ReverseGeocodingGateway for MockGeoGw {
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(pos);
        let response = self.response.lock().clone();
        match response {
            Response::Geocoding(res) => Ok(res),
            Response::TransportError => Err(GeocodingError::Transport("connection refused".into())),
        }
    }
}
