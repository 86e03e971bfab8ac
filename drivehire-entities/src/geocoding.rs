use std::fmt;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_CONFIGURED: &str = "NOT_CONFIGURED";

/// The status code reported by a reverse geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingStatus {
    Ok,
    ZeroResults,
    /// No geocoding service is available.
    NotConfigured,
    /// Any other status, kept verbatim.
    Other(String),
}

impl GeocodingStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => STATUS_OK,
            Self::ZeroResults => STATUS_ZERO_RESULTS,
            Self::NotConfigured => STATUS_NOT_CONFIGURED,
            Self::Other(status) => status,
        }
    }
}

impl From<&str> for GeocodingStatus {
    fn from(from: &str) -> Self {
        match from {
            STATUS_OK => Self::Ok,
            STATUS_ZERO_RESULTS => Self::ZeroResults,
            STATUS_NOT_CONFIGURED => Self::NotConfigured,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for GeocodingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answer of a reverse geocoding service, most specific address first.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseGeocoding {
    pub status: GeocodingStatus,
    pub formatted_addresses: Vec<String>,
}

impl ReverseGeocoding {
    pub fn found(formatted_addresses: Vec<String>) -> Self {
        let status = if formatted_addresses.is_empty() {
            GeocodingStatus::ZeroResults
        } else {
            GeocodingStatus::Ok
        };
        Self {
            status,
            formatted_addresses,
        }
    }

    pub fn failed(status: GeocodingStatus) -> Self {
        Self {
            status,
            formatted_addresses: vec![],
        }
    }

    /// The most specific address of a successful lookup.
    pub fn first_address(&self) -> Option<&str> {
        if !self.status.is_ok() {
            return None;
        }
        self.formatted_addresses.first().map(String::as_str)
    }
}
