use wasm_bindgen::prelude::*;
use serde_wasm_bindgen::{from_value, Serializer};
use js_sys::Date;

// Create a console module for logging
pub mod console;
pub mod error;
pub mod models;
pub mod bounds;
pub mod projection;
pub mod svg_path;
pub mod centroid;
pub mod geojson_features;
pub mod convert;

pub use bounds::{compute_bounds, Bounds};
pub use centroid::compute_centroid;
pub use convert::{convert, convert_geojson};
pub use error::{Axis, MapError, Result};
pub use geojson_features::{parse_feature_collection, FeatureCollection};
pub use models::{view_box, Canvas, CenterPoint, GeoRegion, RenderRegion};
pub use projection::{project, Projector};
pub use svg_path::{serialize_path, PATH_PRECISION};

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => ($crate::console::warn(&format!($($t)*)))
}

use std::sync::Once;
static INIT: Once = Once::new();

#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        console_log!("District map module initialized");
    });
}

// Plain JS objects ({code, name, name_eng, path, center: {x, y}}) rather than Maps
fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

fn finish(label: &str, started: f64, result: Result<Vec<RenderRegion>>) -> std::result::Result<JsValue, JsValue> {
    match result {
        Ok(districts) => {
            console_log!(
                "{}: converted {} districts in {:.1} ms",
                label,
                districts.len(),
                Date::now() - started
            );
            to_js(&districts)
        }
        Err(e) => {
            console_warn!("{}: conversion failed: {}", label, e);
            Err(e.into())
        }
    }
}

/// Convert an already-parsed GeoJSON FeatureCollection into render-ready districts.
/// Width and height default to 1000.
#[wasm_bindgen]
pub fn convert_districts(
    geojson: JsValue,
    width: Option<f64>,
    height: Option<f64>,
) -> std::result::Result<JsValue, JsValue> {
    let started = Date::now();
    let result = Canvas::from_options(width, height).and_then(|canvas| {
        let collection: FeatureCollection = from_value(geojson)?;
        let regions = collection.into_regions()?;
        convert(&regions, canvas)
    });
    finish("convert_districts", started, result)
}

/// Same as `convert_districts`, taking the raw GeoJSON text.
#[wasm_bindgen]
pub fn convert_districts_json(
    json: &str,
    width: Option<f64>,
    height: Option<f64>,
) -> std::result::Result<JsValue, JsValue> {
    let started = Date::now();
    let result = Canvas::from_options(width, height).and_then(|canvas| convert_geojson(json, canvas));
    finish("convert_districts_json", started, result)
}

/// SVG viewBox attribute for a canvas, e.g. "0 0 1000 1000".
#[wasm_bindgen]
pub fn create_view_box(width: Option<f64>, height: Option<f64>) -> std::result::Result<String, JsValue> {
    let canvas = Canvas::from_options(width, height)?;
    Ok(view_box(&canvas))
}

/// Project a single lng/lat pair; returns [x, y].
#[wasm_bindgen]
pub fn project_point(
    lng: f64,
    lat: f64,
    bounds: JsValue,
    width: Option<f64>,
    height: Option<f64>,
) -> std::result::Result<Vec<f64>, JsValue> {
    let bounds: Bounds = from_value(bounds).map_err(MapError::from)?;
    let canvas = Canvas::from_options(width, height)?;
    let (x, y) = project(geo_types::coord! { x: lng, y: lat }, &bounds, &canvas)?;
    Ok(vec![x, y])
}

/// Bounding rectangle ({min_lng, max_lng, min_lat, max_lat}) of a parsed FeatureCollection.
#[wasm_bindgen]
pub fn compute_dataset_bounds(geojson: JsValue) -> std::result::Result<JsValue, JsValue> {
    let collection: FeatureCollection = from_value(geojson).map_err(MapError::from)?;
    let regions = collection.into_regions()?;
    let bounds = compute_bounds(&regions)?;
    to_js(&bounds)
}
