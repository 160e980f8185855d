// Label anchor: vertex average of the projected primary ring
use geo_types::LineString;

use crate::bounds::Bounds;
use crate::error::{MapError, Result};
use crate::models::{Canvas, CenterPoint};
use crate::projection::Projector;

/// Mean of the projected vertices of the first ring.
///
/// Later rings are ignored. This is a vertex average, not an area-weighted
/// centroid: on concave outlines, or outlines with unevenly spaced vertices,
/// the point drifts toward dense segments and may fall outside the shape.
pub fn compute_centroid(rings: &[LineString<f64>], bounds: &Bounds, canvas: &Canvas) -> Result<CenterPoint> {
    let projector = Projector::new(*bounds, *canvas)?;
    centroid_with(&projector, rings).ok_or(MapError::EmptyRing { code: None })
}

pub(crate) fn centroid_with(projector: &Projector, rings: &[LineString<f64>]) -> Option<CenterPoint> {
    let ring = rings.first().filter(|ring| !ring.0.is_empty())?;

    let (sum_x, sum_y) = ring
        .coords()
        .map(|c| projector.project(*c))
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let n = ring.0.len() as f64;

    Some(CenterPoint {
        x: sum_x / n,
        y: sum_y / n,
    })
}
