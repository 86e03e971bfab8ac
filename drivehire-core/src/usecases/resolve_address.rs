use std::sync::Arc;

use super::prelude::*;

/// Resolve a position into a postal address.
///
/// Cached addresses are returned without contacting the gateway.
/// Failed lookups are logged and never cached, i.e. the next
/// request for the same position will ask the gateway again.
pub async fn resolve_address<G>(gateway: &G, cache: &AddressCache, pos: MapPoint) -> Option<String>
where
    G: ReverseGeocodingGateway + ?Sized,
{
    let key = pos.coordinate_key();
    if let Some(address) = cache.get(&key) {
        log::debug!("Found cached address of ({key})");
        return Some(address);
    }
    match gateway.reverse_geocode(pos).await {
        Ok(res) => {
            let Some(address) = res.first_address() else {
                log::log!(
                    miss_log_level(&res.status),
                    "Could not resolve address of ({key}): status = {}",
                    res.status
                );
                return None;
            };
            log::debug!("Resolved address of ({key}): {address}");
            let address = address.to_owned();
            cache.put(key, address.clone());
            Some(address)
        }
        Err(err) => {
            log::error!("Failed to resolve address of ({key}): {err}");
            None
        }
    }
}

/// Unsuccessful answers are warnings unless geocoding is disabled.
fn miss_log_level(status: &GeocodingStatus) -> log::Level {
    match status {
        GeocodingStatus::NotConfigured => log::Level::Debug,
        _ => log::Level::Warn,
    }
}

/// A gateway bundled with the cache it fills.
pub struct AddressResolver<G> {
    gateway: G,
    cache: Arc<AddressCache>,
}

impl<G> AddressResolver<G>
where
    G: ReverseGeocodingGateway,
{
    pub fn new(gateway: G, cache: Arc<AddressCache>) -> Self {
        Self { gateway, cache }
    }

    pub fn cache(&self) -> &Arc<AddressCache> {
        &self.cache
    }

    /// Both coordinates are required. Nothing is looked
    /// up if one of them is missing.
    pub async fn resolve(&self, lat: Option<f64>, lng: Option<f64>) -> Option<String> {
        let (Some(lat), Some(lng)) = (lat, lng) else {
            return None;
        };
        self.resolve_pos(MapPoint::from_lat_lng_deg(lat, lng)).await
    }

    pub async fn resolve_pos(&self, pos: MapPoint) -> Option<String> {
        resolve_address(&self.gateway, &self.cache, pos).await
    }
}
