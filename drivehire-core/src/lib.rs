pub mod address_cache;
pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use drivehire_entities::{geo::*, geocoding::*, location::*, zone::*};
}
