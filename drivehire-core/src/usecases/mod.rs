mod display_address;
mod resolve_address;

#[cfg(test)]
pub mod tests;

pub use self::{display_address::*, resolve_address::*};

mod prelude {
    pub use crate::{
        address_cache::AddressCache,
        entities::*,
        gateways::geocode::{GeocodingError, ReverseGeocodingGateway},
    };
}
