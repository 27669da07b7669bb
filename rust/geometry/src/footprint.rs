// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular footprint derived from area and perimeter

use crate::error::{Error, Result};
use crate::polygon::Polygon;
use crate::transform::rotate_about_origin;
use nalgebra::Point3;

/// Width and length of the rectangle standing in for a building footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub length: f64,
}

impl Footprint {
    /// Solve the rectangle from gross floor area and perimeter
    ///
    /// Uses `width = area / (perimeter / 4)` and `length = area / width`. This
    /// is not the exact rectangle with the given perimeter; calibrated models
    /// depend on this convention, so it must not be "corrected".
    pub fn from_area_perimeter(area: f64, perimeter: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(area) || !valid(perimeter) {
            return Err(Error::InvalidGeometryInput { area, perimeter });
        }

        let width = area / (perimeter / 4.0);
        let length = area / width;
        Ok(Self { width, length })
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Oriented base polygon at z = 0 (see [`build_base_polygon`])
    pub fn base_polygon(&self, orientation_deg: f64) -> Polygon {
        build_base_polygon(self.width, self.length, orientation_deg)
    }
}

/// Axis-aligned rectangle `A(0,0) B(w,0) C(w,l) D(0,l)` rotated about the origin
///
/// Rotation is skipped entirely for an orientation of exactly zero so that the
/// unrotated corners are exact.
pub fn build_base_polygon(width: f64, length: f64, orientation_deg: f64) -> Polygon {
    let mut corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(width, 0.0, 0.0),
        Point3::new(width, length, 0.0),
        Point3::new(0.0, length, 0.0),
    ];

    if orientation_deg != 0.0 {
        let theta = orientation_deg.to_radians();
        for c in corners.iter_mut() {
            *c = rotate_about_origin(c, theta);
        }
    }

    Polygon::from_quad(corners)
}
