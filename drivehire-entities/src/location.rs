use crate::geo::MapPoint;

/// A place as delivered by the backend.
///
/// Every field is optional and empty strings are treated
/// like missing values.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationRecord {
    pub address : Option<String>,
    pub city    : Option<String>,
    pub lat     : Option<f64>,
    pub lng     : Option<f64>,
}

impl LocationRecord {
    /// The position of the record if both coordinates are present.
    pub fn pos(&self) -> Option<MapPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(MapPoint::from_lat_lng_deg(lat, lng)),
            _ => None,
        }
    }

    /// The text that can be shown without contacting any
    /// geocoding service.
    ///
    /// The city is appended unless it is already part of the
    /// address (compared case-insensitively).
    pub fn display_text(&self, append_city: bool) -> String {
        let address = non_empty(self.address.as_deref());
        let city = if append_city {
            non_empty(self.city.as_deref())
        } else {
            None
        };
        match (address, city) {
            (Some(address), Some(city)) if !contains_ignore_case(address, city) => {
                format!("{address}, {city}")
            }
            (Some(address), _) => address.to_owned(),
            (None, Some(city)) => city.to_owned(),
            (None, None) => String::new(),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
