// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zonegen Geometry
//!
//! Planar geometry behind building zone generation: a rectangular footprint
//! solved from area and perimeter, oriented about the origin, and optionally
//! split into perimeter strips around an inward-offset core.

pub mod error;
pub mod footprint;
pub mod layout;
pub mod offset;
pub mod polygon;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use error::{Error, Result};
pub use footprint::{build_base_polygon, Footprint};
pub use layout::{core_footprint, FloorLayout, PerimeterSide, MIN_CORE_AREA};
pub use offset::{inward_offset, intersect_lines, offset_edge, Line2};
pub use polygon::{shoelace_area, signed_shoelace_area, Polygon, Quad};
pub use transform::{rotate_about_origin, rotate_points, translate_points_z};
