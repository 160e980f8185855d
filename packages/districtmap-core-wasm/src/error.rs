//! Error types for district conversion

use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Coordinate axis of the shared bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Precondition failures of the projection pipeline.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("dataset contains no coordinates")]
    EmptyDataset,

    #[error("{axis} span collapses to a single value ({value}); cannot project")]
    DegenerateRange { axis: Axis, value: f64 },

    #[error("region {code:?} has no vertices in its first ring")]
    EmptyRing { code: Option<String> },

    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_wasm_bindgen::Error> for MapError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        MapError::InvalidInput(e.to_string())
    }
}

impl From<MapError> for JsValue {
    fn from(e: MapError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// Result type alias for district conversion
pub type Result<T> = std::result::Result<T, MapError>;
