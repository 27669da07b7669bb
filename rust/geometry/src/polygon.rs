// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered vertex loops
//!
//! A [`Polygon`] is an ordered sequence of at least three 3D points. The order
//! defines the winding and therefore the outward normal of any surface built
//! from it, so none of the operations here reorder vertices implicitly.

use crate::error::{Error, Result};
use crate::transform::{rotate_points, translate_points_z};
use nalgebra::Point3;

/// Four ordered corners of a rectangular footprint or zone base
pub type Quad = [Point3<f64>; 4];

/// Ordered planar vertex loop
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point3<f64>>,
}

impl Polygon {
    /// Create a polygon, rejecting loops with fewer than 3 vertices
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::DegeneratePolygon(points.len()));
        }
        Ok(Self { points })
    }

    /// Create a polygon from four ordered corners
    pub fn from_quad(quad: Quad) -> Self {
        Self {
            points: quad.to_vec(),
        }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the corners as a quad if the polygon has exactly 4 vertices
    pub fn as_quad(&self) -> Option<Quad> {
        match self.points.as_slice() {
            [a, b, c, d] => Some([*a, *b, *c, *d]),
            _ => None,
        }
    }

    /// Same vertices in reverse order (flips the normal)
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Copy shifted vertically by `dz`
    pub fn translated_z(&self, dz: f64) -> Self {
        Self {
            points: translate_points_z(&self.points, dz),
        }
    }

    /// Copy rotated about the origin by `angle_rad` in the XY plane
    pub fn rotated(&self, angle_rad: f64) -> Self {
        Self {
            points: rotate_points(&self.points, angle_rad),
        }
    }

    /// Signed XY area; positive for counter-clockwise winding seen from +Z
    pub fn signed_area_xy(&self) -> f64 {
        signed_shoelace_area(&self.points)
    }

    /// Unsigned XY area via the shoelace formula
    pub fn area_xy(&self) -> f64 {
        shoelace_area(&self.points)
    }

    /// Vertex average
    pub fn centroid(&self) -> Point3<f64> {
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / n)
    }

    /// True if both polygons have the same vertex sequence within `eps`
    pub fn is_close(&self, other: &Self, eps: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| (a - b).amax() < eps)
    }
}

/// Signed shoelace area of a vertex loop projected onto XY
pub fn signed_shoelace_area(points: &[Point3<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    twice / 2.0
}

/// Unsigned shoelace area of a vertex loop projected onto XY
pub fn shoelace_area(points: &[Point3<f64>]) -> f64 {
    signed_shoelace_area(points).abs()
}
