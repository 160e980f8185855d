// Shared bounding rectangle for one conversion pass
use geo::BoundingRect;
use geo_types::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::models::GeoRegion;

/// Longitude/latitude extent of an entire dataset.
///
/// A value of this type always satisfies `min <= max` on both axes. Spans may
/// still be zero; the projector rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    fn from_rect(rect: Rect<f64>) -> Self {
        Self {
            min_lng: rect.min().x,
            max_lng: rect.max().x,
            min_lat: rect.min().y,
            max_lat: rect.max().y,
        }
    }

    fn include(&mut self, rect: Rect<f64>) {
        self.min_lng = self.min_lng.min(rect.min().x);
        self.max_lng = self.max_lng.max(rect.max().x);
        self.min_lat = self.min_lat.min(rect.min().y);
        self.max_lat = self.max_lat.max(rect.max().y);
    }
}

/// Scans every vertex of every ring of every region.
///
/// Fails with [`MapError::EmptyDataset`] when there is nothing to scan, either
/// because `regions` is empty or because all of its rings are.
pub fn compute_bounds(regions: &[GeoRegion]) -> Result<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for rect in regions
        .iter()
        .flat_map(|region| region.rings.iter())
        .filter_map(|ring| ring.bounding_rect())
    {
        match bounds.as_mut() {
            Some(b) => b.include(rect),
            None => bounds = Some(Bounds::from_rect(rect)),
        }
    }

    bounds.ok_or(MapError::EmptyDataset)
}
