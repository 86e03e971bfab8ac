use super::*;
use drivehire_entities as e;
use thiserror::Error;

impl From<LocationRecord> for e::location::LocationRecord {
    fn from(from: LocationRecord) -> Self {
        let LocationRecord {
            address,
            city,
            coordinates,
        } = from;
        let Coordinates {
            latitude,
            longitude,
        } = coordinates.unwrap_or(Coordinates {
            latitude: None,
            longitude: None,
        });
        Self {
            address,
            city,
            lat: latitude,
            lng: longitude,
        }
    }
}

impl From<e::location::LocationRecord> for LocationRecord {
    fn from(from: e::location::LocationRecord) -> Self {
        let e::location::LocationRecord {
            address,
            city,
            lat,
            lng,
        } = from;
        let coordinates = (lat.is_some() || lng.is_some()).then_some(Coordinates {
            latitude: lat,
            longitude: lng,
        });
        Self {
            address,
            city,
            coordinates,
        }
    }
}

impl From<LatLng> for e::geo::MapPoint {
    fn from(from: LatLng) -> Self {
        Self::from_lat_lng_deg(from.lat, from.lng)
    }
}

impl From<e::geo::MapPoint> for LatLng {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<e::zone::ServiceZone> for ServiceZone {
    fn from(from: e::zone::ServiceZone) -> Self {
        let geometry = GeoJsonPolygon {
            kind: GeoJsonPolygonType::Polygon,
            coordinates: vec![from.to_geojson_ring()],
        };
        Self {
            name: from.name().to_owned(),
            geometry,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneConversionError {
    #[error("The polygon has no exterior ring")]
    MissingExteriorRing,
    #[error("Polygons with holes are not supported")]
    UnsupportedHoles,
    #[error(transparent)]
    Invalid(#[from] e::zone::ZoneInvalidation),
}

impl TryFrom<ServiceZone> for e::zone::ServiceZone {
    type Error = ZoneConversionError;
    fn try_from(from: ServiceZone) -> Result<Self, Self::Error> {
        let ServiceZone { name, geometry } = from;
        let GeoJsonPolygon { coordinates, .. } = geometry;
        let mut rings = coordinates.into_iter();
        let exterior = rings
            .next()
            .ok_or(ZoneConversionError::MissingExteriorRing)?;
        if rings.next().is_some() {
            return Err(ZoneConversionError::UnsupportedHoles);
        }
        Ok(Self::try_from_geojson_ring(name, &exterior)?)
    }
}
