// Linear lng/lat -> pixel rescale against the shared dataset bounds
use geo_types::Coord;

use crate::bounds::Bounds;
use crate::error::{Axis, MapError, Result};
use crate::models::Canvas;

/// Projector bound to one dataset rectangle and one canvas.
///
/// Construction rejects zero-width spans, so `project` never divides by zero
/// and never yields NaN or infinity for finite input.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    bounds: Bounds,
    canvas: Canvas,
}

impl Projector {
    pub fn new(bounds: Bounds, canvas: Canvas) -> Result<Self> {
        if !(bounds.lng_span() > 0.0) {
            return Err(MapError::DegenerateRange {
                axis: Axis::Longitude,
                value: bounds.min_lng,
            });
        }
        if !(bounds.lat_span() > 0.0) {
            return Err(MapError::DegenerateRange {
                axis: Axis::Latitude,
                value: bounds.min_lat,
            });
        }
        Ok(Self { bounds, canvas })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Latitude is inverted so north ends up at the top of the canvas.
    pub fn project(&self, coord: Coord<f64>) -> (f64, f64) {
        let b = &self.bounds;
        let nx = (coord.x - b.min_lng) / b.lng_span();
        let ny = 1.0 - (coord.y - b.min_lat) / b.lat_span();
        (nx * self.canvas.width(), ny * self.canvas.height())
    }
}

/// One-off projection of a single coordinate.
pub fn project(coord: Coord<f64>, bounds: &Bounds, canvas: &Canvas) -> Result<(f64, f64)> {
    Ok(Projector::new(*bounds, *canvas)?.project(coord))
}
