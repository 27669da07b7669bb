// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use zonegen_geometry::{
    build_base_polygon, shoelace_area, Error, FloorLayout, Footprint, PerimeterSide, Point3,
    Polygon,
};

const SAMPLES: [(f64, f64); 6] = [
    (100.0, 40.0),
    (600.0, 100.0),
    (45.5, 31.2),
    (1250.0, 180.0),
    (80.0, 60.0),
    (12.0, 14.0),
];

#[test]
fn footprint_convention_holds() {
    for (area, perimeter) in SAMPLES {
        let fp = Footprint::from_area_perimeter(area, perimeter).unwrap();
        assert_relative_eq!(fp.width, area / (perimeter / 4.0), max_relative = 1e-12);
        assert_relative_eq!(fp.length, area / fp.width, max_relative = 1e-12);
        assert_relative_eq!(fp.width * fp.length, area, max_relative = 1e-12);
    }
}

#[test]
fn base_polygon_area_matches_rectangle() {
    for (area, perimeter) in SAMPLES {
        let fp = Footprint::from_area_perimeter(area, perimeter).unwrap();
        let polygon = build_base_polygon(fp.width, fp.length, 0.0);
        assert_relative_eq!(polygon.area_xy(), fp.width * fp.length, max_relative = 1e-12);

        // Rotation keeps the area
        let rotated = fp.base_polygon(73.0);
        assert_relative_eq!(rotated.area_xy(), area, max_relative = 1e-9);
    }
}

#[test]
fn rotation_round_trip() {
    let polygon = Polygon::new(vec![
        Point3::new(3.0, -1.0, 0.5),
        Point3::new(7.5, 2.0, 0.5),
        Point3::new(-4.0, 9.0, 0.5),
    ])
    .unwrap();
    for degrees in [0.0_f64, 15.0, 90.0, 137.5, -200.0, 359.0] {
        let theta = degrees.to_radians();
        let back = polygon.rotated(theta).rotated(-theta);
        assert!(back.is_close(&polygon, 1e-9), "{degrees}°");
    }
}

#[test]
fn unit_square_scenario() {
    let fp = Footprint::from_area_perimeter(100.0, 40.0).unwrap();
    assert_eq!(fp.width, 10.0);
    assert_eq!(fp.length, 10.0);
    assert_eq!(
        fp.base_polygon(0.0).points(),
        &[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ]
    );
}

#[test]
fn rejects_non_positive_input() {
    for (area, perimeter) in [(0.0, 40.0), (100.0, 0.0), (-5.0, 10.0), (f64::NAN, 4.0)] {
        assert!(matches!(
            Footprint::from_area_perimeter(area, perimeter),
            Err(Error::InvalidGeometryInput { .. })
        ));
    }
}

#[test]
fn deep_perimeter_never_yields_core() {
    for (area, perimeter) in SAMPLES {
        let fp = Footprint::from_area_perimeter(area, perimeter).unwrap();
        let base = fp.base_polygon(25.0).as_quad().unwrap();
        let half = fp.width.min(fp.length) / 2.0;
        for factor in [1.0, 1.01, 1.5, 3.0] {
            let layout = FloorLayout::decompose(&base, half * factor, true);
            assert!(!layout.has_core(), "{area} {perimeter} x{factor}");
        }
    }
}

#[test]
fn rotated_layout_tiles_footprint() {
    let fp = Footprint::from_area_perimeter(600.0, 100.0).unwrap();
    let base = fp.base_polygon(-35.0).as_quad().unwrap();
    let layout = FloorLayout::decompose(&base, 4.0, true);
    let total: f64 = PerimeterSide::ALL
        .iter()
        .filter_map(|&s| layout.perimeter_quad(s))
        .map(|q| shoelace_area(&q))
        .sum::<f64>()
        + layout.core_quad().map(|q| shoelace_area(&q)).unwrap_or(0.0);
    assert_relative_eq!(total, 600.0, max_relative = 1e-9);
}
