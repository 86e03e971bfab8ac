use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Create a point without checking the ranges of the coordinates.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a point only if both coordinates are within their valid ranges.
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }

    pub fn coordinate_key(self) -> CoordinateKey {
        CoordinateKey::from(self)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The exact textual form of a [`MapPoint`].
///
/// Two keys are only equal if both coordinates format to the
/// same decimal representation, i.e. there is no rounding and
/// no proximity matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateKey(String);

impl CoordinateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MapPoint> for CoordinateKey {
    fn from(from: MapPoint) -> Self {
        Self(from.to_string())
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_key_uses_shortest_decimal_form() {
        let key = MapPoint::from_lat_lng_deg(19.0760, 72.8777).coordinate_key();
        assert_eq!("19.076,72.8777", key.as_str());
        let key = MapPoint::from_lat_lng_deg(-33.0, 151.25).coordinate_key();
        assert_eq!("-33,151.25", key.as_str());
    }

    #[test]
    fn coordinate_keys_are_not_fuzzy() {
        let a = MapPoint::from_lat_lng_deg(19.0760, 72.8777).coordinate_key();
        let b = MapPoint::from_lat_lng_deg(19.07601, 72.8777).coordinate_key();
        assert_ne!(a, b);
        let c = MapPoint::from_lat_lng_deg(19.076, 72.8777).coordinate_key();
        assert_eq!(a, c);
    }

    #[test]
    fn validate_ranges() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.5).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }
}
