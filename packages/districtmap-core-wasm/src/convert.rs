//! Dataset conversion: district boundaries in, render-ready SVG records out.
//!
//! Bounds are computed once per call and shared by every region, so all paths
//! in one result sit on the same scale. Nothing is cached between calls.

use crate::bounds::compute_bounds;
use crate::centroid::centroid_with;
use crate::error::{MapError, Result};
use crate::geojson_features::parse_feature_collection;
use crate::models::{Canvas, GeoRegion, RenderRegion};
use crate::projection::Projector;
use crate::svg_path::serialize_with;

/// Projects every region against the dataset's shared bounds.
///
/// Output order and length match `regions`. The first region that cannot be
/// converted fails the whole call.
pub fn convert(regions: &[GeoRegion], canvas: Canvas) -> Result<Vec<RenderRegion>> {
    let bounds = compute_bounds(regions)?;
    let projector = Projector::new(bounds, canvas)?;

    regions
        .iter()
        .map(|region| {
            let center = centroid_with(&projector, &region.rings).ok_or_else(|| MapError::EmptyRing {
                code: Some(region.code.clone()),
            })?;
            Ok(RenderRegion {
                code: region.code.clone(),
                name: region.name.clone(),
                name_eng: region.name_eng.clone(),
                path: serialize_with(&projector, &region.rings),
                center,
            })
        })
        .collect()
}

/// Parses a GeoJSON FeatureCollection and converts it in one step.
pub fn convert_geojson(json: &str, canvas: Canvas) -> Result<Vec<RenderRegion>> {
    let regions = parse_feature_collection(json)?;
    convert(&regions, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::LineString;
    use pretty_assertions::assert_eq;

    fn region(code: &str, ring: Vec<(f64, f64)>) -> GeoRegion {
        GeoRegion::new(code, code, code.to_uppercase(), vec![LineString::from(ring)])
    }

    fn seoul_sample() -> Vec<GeoRegion> {
        vec![
            region("b", vec![(126.95, 37.52), (127.02, 37.51), (127.0, 37.58)]),
            region("a", vec![(127.0, 37.5), (127.1, 37.5), (127.1, 37.6), (127.0, 37.6)]),
            region("c", vec![(126.9, 37.55), (126.97, 37.49), (126.99, 37.57), (126.93, 37.6)]),
        ]
    }

    #[test]
    fn jongno_example() {
        let regions = vec![GeoRegion::new(
            "11110",
            "종로구",
            "Jongno-gu",
            vec![LineString::from(vec![
                (127.0, 37.5),
                (127.1, 37.5),
                (127.1, 37.6),
                (127.0, 37.6),
            ])],
        )];

        let out = convert(&regions, Canvas::default()).unwrap();
        assert_eq!(out.len(), 1);
        let jongno = &out[0];
        assert_eq!(jongno.code, "11110");
        assert_eq!(jongno.name, "종로구");
        assert_eq!(jongno.name_eng, "Jongno-gu");
        assert!(jongno.path.starts_with("M 0.00 1000.00"), "{}", jongno.path);
        assert_eq!(
            jongno.path,
            "M 0.00 1000.00 L 1000.00 1000.00 L 1000.00 0.00 L 0.00 0.00 Z"
        );
        assert!((jongno.center.x - 500.0).abs() < 1e-6);
        assert!((jongno.center.y - 500.0).abs() < 1e-6);
    }

    #[test]
    fn preserves_order_and_count() {
        let regions = seoul_sample();
        let out = convert(&regions, Canvas::default()).unwrap();
        let codes: Vec<&str> = out.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["b", "a", "c"]);
        assert_eq!(out[2].name_eng, "C");
    }

    #[test]
    fn centers_stay_on_canvas() {
        let canvas = Canvas::new(640.0, 480.0).unwrap();
        for r in convert(&seoul_sample(), canvas).unwrap() {
            assert!((0.0..=640.0).contains(&r.center.x), "{r:?}");
            assert!((0.0..=480.0).contains(&r.center.y), "{r:?}");
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let regions = seoul_sample();
        let first = convert(&regions, Canvas::default()).unwrap();
        let second = convert(&regions, Canvas::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn regions_share_one_scale() {
        // "a" alone fills the canvas; next to "c" it must shrink
        let alone = convert(&seoul_sample()[1..2], Canvas::default()).unwrap();
        let together = convert(&seoul_sample(), Canvas::default()).unwrap();
        assert!(alone[0].path.starts_with("M 0.00 1000.00"));
        assert!(!together[1].path.starts_with("M 0.00 1000.00"));
        assert!(together[1].path.starts_with("M 500.00 909.09"), "{}", together[1].path);
    }

    #[test]
    fn canvas_size_changes_only_the_scale() {
        let small = convert(&seoul_sample(), Canvas::new(100.0, 100.0).unwrap()).unwrap();
        let large = convert(&seoul_sample(), Canvas::new(1000.0, 1000.0).unwrap()).unwrap();
        for (s, l) in small.iter().zip(&large) {
            assert!((s.center.x * 10.0 - l.center.x).abs() < 1e-6);
            assert!((s.center.y * 10.0 - l.center.y).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_dataset_fails() {
        assert!(matches!(
            convert(&[], Canvas::default()),
            Err(MapError::EmptyDataset)
        ));
    }

    #[test]
    fn shared_meridian_fails_instead_of_producing_nan() {
        let regions = vec![
            region("a", vec![(127.0, 37.5), (127.0, 37.6)]),
            region("b", vec![(127.0, 37.55), (127.0, 37.7)]),
        ];
        assert!(matches!(
            convert(&regions, Canvas::default()),
            Err(MapError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn region_with_empty_first_ring_names_the_region() {
        let mut regions = seoul_sample();
        regions[2].rings.insert(0, LineString::new(vec![]));
        match convert(&regions, Canvas::default()) {
            Err(MapError::EmptyRing { code }) => assert_eq!(code.as_deref(), Some("c")),
            other => panic!("expected EmptyRing, got {other:?}"),
        }
    }

    #[test]
    fn converts_geojson_text() {
        let json = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "properties": {"code": "11110", "name": "종로구", "name_eng": "Jongno-gu"},
            "geometry": {"type": "Polygon", "coordinates": [[[127.0, 37.5], [127.1, 37.5], [127.1, 37.6]]]}
        }]}"#;
        let out = convert_geojson(json, Canvas::default()).unwrap();
        assert_eq!(out[0].path, "M 0.00 1000.00 L 1000.00 1000.00 L 1000.00 0.00 Z");
    }
}
