use geo_types::{Coord, LineString};
use serde::Deserialize;

use crate::error::{MapError, Result};
use crate::models::GeoRegion;

// GeoJSON FeatureCollection of district polygons, as published for the map
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: DistrictProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistrictProperties {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub name_eng: String,
    #[serde(default)]
    pub base_year: Option<String>,
}

// Positions are [lng, lat] with an optional trailing altitude
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

impl Geometry {
    /// Rings in document order; a MultiPolygon's polygons are flattened.
    fn into_rings(self) -> Result<Vec<LineString<f64>>> {
        let rings = match self {
            Geometry::Polygon { coordinates } => coordinates,
            Geometry::MultiPolygon { coordinates } => coordinates.into_iter().flatten().collect(),
        };
        rings.into_iter().map(ring_from_positions).collect()
    }
}

fn ring_from_positions(positions: Vec<Vec<f64>>) -> Result<LineString<f64>> {
    positions
        .into_iter()
        .map(|p| match p.as_slice() {
            [lng, lat, ..] => Ok(Coord { x: *lng, y: *lat }),
            _ => Err(MapError::InvalidInput(format!(
                "position needs at least 2 values, got {}",
                p.len()
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

impl FeatureCollection {
    pub fn into_regions(self) -> Result<Vec<GeoRegion>> {
        self.features
            .into_iter()
            .map(|feature| {
                let DistrictProperties {
                    code,
                    name,
                    name_eng,
                    base_year,
                } = feature.properties;
                Ok(GeoRegion {
                    code,
                    name,
                    name_eng,
                    base_year,
                    rings: feature.geometry.into_rings()?,
                })
            })
            .collect()
    }
}

/// Parses a GeoJSON FeatureCollection string into districts, keeping feature order.
pub fn parse_feature_collection(json: &str) -> Result<Vec<GeoRegion>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    collection.into_regions()
}
