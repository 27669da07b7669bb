// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inward offset of a rectangular footprint
//!
//! Each edge is shifted along its left-hand normal `(-Δy, Δx) / |edge|`, which
//! points inward for the counter-clockwise rectangles produced by
//! [`crate::footprint::build_base_polygon`]. Adjacent shifted lines are then
//! intersected to recover the inner corners.
//!
//! Precondition: the input must be that convex, consistently wound rectangle.
//! For other quads the sign of the normal is not guaranteed to point inward and
//! the result is unspecified.

use crate::polygon::Quad;
use nalgebra::{Point2, Point3};

/// Denominators below this are treated as parallel lines
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Infinite line through two points in the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

/// Shift the edge `p1 -> p2` along its left-hand normal by `distance`
///
/// Returns `None` for a zero-length edge, which has no normal.
pub fn offset_edge(p1: &Point3<f64>, p2: &Point3<f64>, distance: f64) -> Option<Line2> {
    let vx = p2.x - p1.x;
    let vy = p2.y - p1.y;
    let length = (vx * vx + vy * vy).sqrt();
    if length < PARALLEL_EPSILON {
        return None;
    }
    let nx = -vy / length;
    let ny = vx / length;

    Some(Line2 {
        start: Point2::new(p1.x + nx * distance, p1.y + ny * distance),
        end: Point2::new(p2.x + nx * distance, p2.y + ny * distance),
    })
}

/// Intersection of two infinite lines, or `None` if they are (nearly) parallel
pub fn intersect_lines(a: &Line2, b: &Line2) -> Option<Point2<f64>> {
    let (x1, y1) = (a.start.x, a.start.y);
    let (x2, y2) = (a.end.x, a.end.y);
    let (x3, y3) = (b.start.x, b.start.y);
    let (x4, y4) = (b.end.x, b.end.y);

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;

    Some(Point2::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1)))
}

/// Offset the rectangle `[A, B, C, D]` inward by `depth`
///
/// Returns `[A2, B2, C2, D2]` where A2 = front ∩ left, B2 = front ∩ right,
/// C2 = rear ∩ right, D2 = rear ∩ left. Front/right/rear/left are the edges
/// A→B, B→C, C→D, D→A. A2/B2 take the z of A, C2/D2 the z of C.
///
/// Returns `None` when any edge is degenerate, any pair of offset lines is
/// parallel, or the offset overshoots (an inner edge runs opposite to its
/// outer edge, which happens once `depth` reaches half the shorter side).
pub fn inward_offset(quad: &Quad, depth: f64) -> Option<Quad> {
    let [a, b, c, d] = quad;

    let front = offset_edge(a, b, depth)?;
    let right = offset_edge(b, c, depth)?;
    let rear = offset_edge(c, d, depth)?;
    let left = offset_edge(d, a, depth)?;

    let a2 = intersect_lines(&front, &left)?;
    let b2 = intersect_lines(&front, &right)?;
    let c2 = intersect_lines(&rear, &right)?;
    let d2 = intersect_lines(&rear, &left)?;

    let inner = [
        Point3::new(a2.x, a2.y, a.z),
        Point3::new(b2.x, b2.y, a.z),
        Point3::new(c2.x, c2.y, c.z),
        Point3::new(d2.x, d2.y, c.z),
    ];

    if preserves_edge_directions(quad, &inner) {
        Some(inner)
    } else {
        None
    }
}

/// True if every edge of `inner` points the same way as the matching edge of `outer`
fn preserves_edge_directions(outer: &Quad, inner: &Quad) -> bool {
    (0..4).all(|i| {
        let j = (i + 1) % 4;
        let outer_dir = (outer[j] - outer[i]).xy();
        let inner_dir = (inner[j] - inner[i]).xy();
        outer_dir.dot(&inner_dir) > 0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::build_base_polygon;
    use approx::assert_relative_eq;

    fn rect(w: f64, l: f64) -> Quad {
        build_base_polygon(w, l, 0.0).as_quad().unwrap()
    }

    #[test]
    fn offset_edge_moves_left() {
        let line = offset_edge(&Point3::origin(), &Point3::new(4.0, 0.0, 0.0), 1.5).unwrap();
        assert_relative_eq!(line.start.y, 1.5);
        assert_relative_eq!(line.end.y, 1.5);
        assert_relative_eq!(line.end.x, 4.0);
    }

    #[test]
    fn zero_length_edge_has_no_offset() {
        assert!(offset_edge(&Point3::origin(), &Point3::origin(), 1.0).is_none());
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Line2 {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(1.0, 0.0),
        };
        let b = Line2 {
            start: Point2::new(0.0, 1.0),
            end: Point2::new(1.0, 1.0),
        };
        assert!(intersect_lines(&a, &b).is_none());
    }

    #[test]
    fn perpendicular_lines_intersect() {
        let a = Line2 {
            start: Point2::new(0.0, 2.0),
            end: Point2::new(10.0, 2.0),
        };
        let b = Line2 {
            start: Point2::new(3.0, -5.0),
            end: Point2::new(3.0, 5.0),
        };
        let p = intersect_lines(&a, &b).unwrap();
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.0);
    }

    #[test]
    fn rectangle_offset_corners() {
        let inner = inward_offset(&rect(10.0, 20.0), 2.0).unwrap();
        let expected = [(2.0, 2.0), (8.0, 2.0), (8.0, 18.0), (2.0, 18.0)];
        for (p, (x, y)) in inner.iter().zip(expected) {
            assert_relative_eq!(p.x, x, epsilon = 1e-12);
            assert_relative_eq!(p.y, y, epsilon = 1e-12);
            assert_relative_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn rotated_rectangle_offset_keeps_area() {
        let quad = build_base_polygon(10.0, 20.0, 33.0).as_quad().unwrap();
        let inner = inward_offset(&quad, 2.0).unwrap();
        assert_relative_eq!(
            crate::polygon::shoelace_area(&inner),
            6.0 * 16.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn overshooting_offset_fails() {
        // Half the short side is 5; beyond that one axis flips.
        assert!(inward_offset(&rect(10.0, 20.0), 6.0).is_none());
        // Beyond half of both sides the loop flips twice and keeps its winding.
        assert!(inward_offset(&rect(10.0, 10.0), 7.0).is_none());
    }

    #[test]
    fn offset_at_exactly_half_side_collapses() {
        assert!(inward_offset(&rect(10.0, 20.0), 5.0).is_none());
    }
}
