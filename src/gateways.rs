use crate::config;
use anyhow::Result;
use async_trait::async_trait;
use drivehire_core::{
    entities::{GeocodingStatus, MapPoint, ReverseGeocoding},
    gateways::geocode::{GeocodingError, ReverseGeocodingGateway},
};
use drivehire_gateways::{google_maps::GoogleMaps, opencage::OpenCage};

pub type GeoCodingGw = Box<dyn ReverseGeocodingGateway + 'static>;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeoCodingGw> {
    let gw: GeoCodingGw = match &cfg.gateway {
        Some(config::GeocodingGateway::GoogleMaps {
            api_key,
            api_base_url,
        }) => {
            log::info!("Use Google Maps geocoding gateway");
            let gw = GoogleMaps::try_new(
                api_key.clone(),
                api_base_url.clone(),
                cfg.request_timeout,
            )?;
            Box::new(gw)
        }
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(api_key.clone()))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoGw)
        }
    };
    Ok(gw)
}

struct DummyGeoGw;

#[async_trait]
impl ReverseGeocodingGateway for DummyGeoGw {
    async fn reverse_geocode(&self, pos: MapPoint) -> Result<ReverseGeocoding, GeocodingError> {
        log::debug!("Cannot resolve address of ({pos}) because no geocoding gateway was configured");
        Ok(ReverseGeocoding::failed(GeocodingStatus::NotConfigured))
    }
}
