// Shared data structures passed between the pipeline stages and JavaScript
use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

pub const DEFAULT_CANVAS_SIZE: f64 = 1000.0;

/// One administrative district as read from the source dataset.
///
/// Rings are kept exactly as supplied: they are never auto-closed or
/// deduplicated, so a ring whose last vertex repeats the first keeps both.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRegion {
    pub code: String,
    pub name: String,
    pub name_eng: String,
    pub base_year: Option<String>,
    pub rings: Vec<LineString<f64>>,
}

impl GeoRegion {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        name_eng: impl Into<String>,
        rings: Vec<LineString<f64>>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            name_eng: name_eng.into(),
            base_year: None,
            rings,
        }
    }
}

/// Label anchor in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterPoint {
    pub x: f64,
    pub y: f64,
}

/// Render-ready district handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRegion {
    pub code: String,
    pub name: String,
    pub name_eng: String,
    pub path: String,
    pub center: CenterPoint,
}

/// Target drawing surface in pixels. Both sides are finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MapError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Builds a canvas from optional JS arguments, falling back to 1000 per side.
    pub fn from_options(width: Option<f64>, height: Option<f64>) -> Result<Self> {
        Self::new(
            width.unwrap_or(DEFAULT_CANVAS_SIZE),
            height.unwrap_or(DEFAULT_CANVAS_SIZE),
        )
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

/// SVG `viewBox` attribute matching a canvas.
pub fn view_box(canvas: &Canvas) -> String {
    format!("0 0 {} {}", canvas.width, canvas.height)
}
