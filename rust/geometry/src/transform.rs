// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar transforms applied to footprint points
//!
//! Footprints are only ever rotated about the vertical axis through the origin
//! and stacked vertically, so the full 4x4 placement machinery is not needed
//! here. Z is carried through rotations unchanged.

use nalgebra::Point3;

/// Rotate a point about the origin by `angle_rad` in the XY plane
///
/// Uses the standard 2D rotation `(x', y') = (cos·x − sin·y, sin·x + cos·y)`.
#[inline]
pub fn rotate_about_origin(p: &Point3<f64>, angle_rad: f64) -> Point3<f64> {
    let (sin, cos) = angle_rad.sin_cos();
    Point3::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y, p.z)
}

/// Rotate a slice of points about the origin by `angle_rad`
pub fn rotate_points(points: &[Point3<f64>], angle_rad: f64) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| rotate_about_origin(p, angle_rad))
        .collect()
}

/// Shift a slice of points vertically by `dz`
pub fn translate_points_z(points: &[Point3<f64>], dz: f64) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| Point3::new(p.x, p.y, p.z + dz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let p = rotate_about_origin(&Point3::new(1.0, 0.0, 2.0), FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 2.0);
    }

    #[test]
    fn rotation_round_trip_restores_points() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(12.5, 0.0, 0.0),
            Point3::new(12.5, 7.25, 3.0),
            Point3::new(-4.0, 7.25, 3.0),
        ];
        for deg in [13.0_f64, 90.0, 181.5, -47.0, 359.0] {
            let theta = deg.to_radians();
            let back = rotate_points(&rotate_points(&pts, theta), -theta);
            for (a, b) in pts.iter().zip(back.iter()) {
                assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
                assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
                assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn translate_only_touches_z() {
        let moved = translate_points_z(&[Point3::new(1.0, 2.0, 3.0)], 2.5);
        assert_eq!(moved[0], Point3::new(1.0, 2.0, 5.5));
    }
}
