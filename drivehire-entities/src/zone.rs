use std::collections::HashSet;

use thiserror::Error;

use crate::geo::{CoordinateKey, MapPoint};

const MIN_DISTINCT_VERTICES: usize = 3;

/// A geofence in which the service is offered.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceZone {
    name: String,
    // Open path, i.e. the first vertex is not repeated at the end.
    path: Vec<MapPoint>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneInvalidation {
    #[error("The zone name is empty")]
    EmptyName,
    #[error("Vertex #{0} is not a valid position")]
    InvalidVertex(usize),
    #[error("A zone needs at least 3 distinct vertices (found {0})")]
    TooFewVertices(usize),
}

impl ServiceZone {
    pub fn try_new(
        name: impl Into<String>,
        mut path: Vec<MapPoint>,
    ) -> Result<Self, ZoneInvalidation> {
        let name: String = name.into();
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(ZoneInvalidation::EmptyName);
        }
        if let Some(idx) = path.iter().position(|p| !p.is_valid()) {
            return Err(ZoneInvalidation::InvalidVertex(idx));
        }
        if path.len() > 1 && path.first() == path.last() {
            path.pop();
        }
        let distinct = path
            .iter()
            .map(|p| p.coordinate_key())
            .collect::<HashSet<CoordinateKey>>()
            .len();
        if distinct < MIN_DISTINCT_VERTICES {
            return Err(ZoneInvalidation::TooFewVertices(distinct));
        }
        Ok(Self { name, path })
    }

    /// Restore a zone from a GeoJSON linear ring of `[lng, lat]` positions.
    pub fn try_from_geojson_ring(
        name: impl Into<String>,
        ring: &[[f64; 2]],
    ) -> Result<Self, ZoneInvalidation> {
        let path = ring
            .iter()
            .map(|[lng, lat]| MapPoint::from_lat_lng_deg(*lat, *lng))
            .collect();
        Self::try_new(name, path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &[MapPoint] {
        &self.path
    }

    /// The closed GeoJSON linear ring of `[lng, lat]` positions.
    pub fn to_geojson_ring(&self) -> Vec<[f64; 2]> {
        self.path
            .iter()
            .chain(self.path.first())
            .map(|p| [p.lng(), p.lat()])
            .collect()
    }

    /// Even-odd test whether the position lies inside of the zone.
    pub fn contains(&self, pos: MapPoint) -> bool {
        let (x, y) = (pos.lng(), pos.lat());
        let mut inside = false;
        let mut j = self.path.len() - 1;
        for (i, vi) in self.path.iter().enumerate() {
            let vj = self.path[j];
            let (xi, yi) = (vi.lng(), vi.lat());
            let (xj, yj) = (vj.lng(), vj.lat());
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> MapPoint {
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    fn pune_triangle() -> Vec<MapPoint> {
        vec![p(18.5, 73.8), p(18.6, 73.9), p(18.5, 74.0)]
    }

    #[test]
    fn closed_ring_in_lng_lat_order() {
        let zone = ServiceZone::try_new("Pune", pune_triangle()).unwrap();
        assert_eq!(
            vec![[73.8, 18.5], [73.9, 18.6], [74.0, 18.5], [73.8, 18.5]],
            zone.to_geojson_ring()
        );
    }

    #[test]
    fn drop_closing_vertex() {
        let mut path = pune_triangle();
        path.push(path[0]);
        let zone = ServiceZone::try_new("Pune", path).unwrap();
        assert_eq!(3, zone.path().len());
        assert_eq!(4, zone.to_geojson_ring().len());
    }

    #[test]
    fn restore_from_ring() {
        let ring = [[73.8, 18.5], [73.9, 18.6], [74.0, 18.5], [73.8, 18.5]];
        let zone = ServiceZone::try_from_geojson_ring("Pune", &ring).unwrap();
        assert_eq!(pune_triangle(), zone.path());
        assert_eq!(ring.to_vec(), zone.to_geojson_ring());
    }

    #[test]
    fn reject_invalid_zones() {
        assert_eq!(
            Err(ZoneInvalidation::EmptyName),
            ServiceZone::try_new(" ", pune_triangle())
        );
        assert_eq!(
            Err(ZoneInvalidation::TooFewVertices(2)),
            ServiceZone::try_new("x", vec![p(1.0, 1.0), p(2.0, 2.0), p(1.0, 1.0)])
        );
        assert_eq!(
            Err(ZoneInvalidation::TooFewVertices(2)),
            ServiceZone::try_new("x", vec![p(1.0, 1.0), p(2.0, 2.0), p(2.0, 2.0), p(1.0, 1.0)])
        );
        assert_eq!(
            Err(ZoneInvalidation::TooFewVertices(0)),
            ServiceZone::try_new("x", vec![])
        );
        assert_eq!(
            Err(ZoneInvalidation::InvalidVertex(1)),
            ServiceZone::try_new("x", vec![p(1.0, 1.0), p(91.0, 2.0), p(3.0, 3.0)])
        );
    }

    #[test]
    fn contains_position() {
        let zone = ServiceZone::try_new(
            "square",
            vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)],
        )
        .unwrap();
        assert!(zone.contains(p(5.0, 5.0)));
        assert!(zone.contains(p(0.5, 9.5)));
        assert!(!zone.contains(p(10.5, 5.0)));
        assert!(!zone.contains(p(-1.0, -1.0)));

        let zone = ServiceZone::try_new("Pune", pune_triangle()).unwrap();
        assert!(zone.contains(p(18.55, 73.9)));
        assert!(!zone.contains(p(18.59, 73.81)));
    }
}
