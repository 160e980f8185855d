// SVG path serialization of projected rings
use std::fmt::Write;

use geo_types::LineString;

use crate::bounds::Bounds;
use crate::error::Result;
use crate::models::Canvas;
use crate::projection::Projector;

/// Digits after the decimal point for every emitted coordinate.
pub const PATH_PRECISION: usize = 2;

/// Serializes rings as `M x y L x y ... Z`, one subpath per ring.
///
/// Every non-empty ring is closed with `Z` even when its last vertex already
/// repeats the first. Empty rings are skipped.
pub fn serialize_path(rings: &[LineString<f64>], bounds: &Bounds, canvas: &Canvas) -> Result<String> {
    let projector = Projector::new(*bounds, *canvas)?;
    Ok(serialize_with(&projector, rings))
}

pub(crate) fn serialize_with(projector: &Projector, rings: &[LineString<f64>]) -> String {
    let mut path = String::new();

    for ring in rings {
        for (i, coord) in ring.coords().enumerate() {
            let (x, y) = projector.project(*coord);
            let command = if i == 0 { 'M' } else { 'L' };
            if !path.is_empty() {
                path.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(path, "{command} {x:.prec$} {y:.prec$}", prec = PATH_PRECISION);
        }
        if !ring.0.is_empty() {
            path.push_str(" Z");
        }
    }

    path
}
