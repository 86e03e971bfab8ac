pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::location::*;

    #[derive(Debug)]
    pub struct LocationRecordBuild {
        record: LocationRecord,
    }

    impl LocationRecordBuild {
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = Some(address.into());
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.record.city = Some(city.into());
            self
        }
        pub fn lat(mut self, lat: f64) -> Self {
            self.record.lat = Some(lat);
            self
        }
        pub fn lng(mut self, lng: f64) -> Self {
            self.record.lng = Some(lng);
            self
        }
        pub fn pos(self, lat: f64, lng: f64) -> Self {
            self.lat(lat).lng(lng)
        }
        pub fn finish(self) -> LocationRecord {
            self.record
        }
    }

    impl Builder for LocationRecord {
        type Build = LocationRecordBuild;
        fn build() -> Self::Build {
            Self::Build {
                record: LocationRecord::default(),
            }
        }
    }
}
