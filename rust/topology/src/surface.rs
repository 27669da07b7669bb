// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surfaces and their thermal boundary conditions.

use serde::{Deserialize, Serialize};
use zonegen_geometry::Polygon;

use crate::keys::{SurfaceKey, SurfaceKind, ZoneKey};

/// Thermal exposure of one side of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    Outdoors,
    Ground,
    Adiabatic,
    /// Interzone partition; the key is the surface on the other side.
    Surface(SurfaceKey),
}

impl BoundaryCondition {
    /// Partner surface when this is an interzone partition.
    pub fn paired_surface(&self) -> Option<SurfaceKey> {
        match self {
            BoundaryCondition::Surface(key) => Some(*key),
            _ => None,
        }
    }

    pub fn is_outdoors(&self) -> bool {
        matches!(self, BoundaryCondition::Outdoors)
    }

    /// Name as used by downstream model writers.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryCondition::Outdoors => "Outdoors",
            BoundaryCondition::Ground => "Ground",
            BoundaryCondition::Adiabatic => "Adiabatic",
            BoundaryCondition::Surface(_) => "Surface",
        }
    }
}

/// Classification of a footprint edge: exterior facade or a wall shared with
/// a neighbouring building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    #[default]
    Facade,
    Shared,
}

impl EdgeType {
    /// Parses an edge label; unknown labels are treated as facade.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "facade" => EdgeType::Facade,
            "shared" => EdgeType::Shared,
            other => {
                tracing::warn!(label = other, "unrecognised edge label, treating as facade");
                EdgeType::Facade
            }
        }
    }

    /// Boundary condition of the exterior wall on this edge.
    pub fn boundary(self) -> BoundaryCondition {
        match self {
            EdgeType::Facade => BoundaryCondition::Outdoors,
            EdgeType::Shared => BoundaryCondition::Adiabatic,
        }
    }
}

/// One planar surface enclosing a zone.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Stable, building-unique name, e.g. `Zone1_Core_Wall_2`.
    pub name: String,
    pub kind: SurfaceKind,
    pub zone: ZoneKey,
    pub polygon: Polygon,
    pub(crate) boundary: BoundaryCondition,
    pub sun_exposed: bool,
    pub wind_exposed: bool,
}

impl Surface {
    /// Creates a surface; exposure follows the initial boundary.
    pub(crate) fn new(
        name: String,
        kind: SurfaceKind,
        zone: ZoneKey,
        polygon: Polygon,
        boundary: BoundaryCondition,
    ) -> Self {
        let exposed = boundary.is_outdoors();
        Self {
            name,
            kind,
            zone,
            polygon,
            boundary,
            sun_exposed: exposed,
            wind_exposed: exposed,
        }
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    pub fn paired_surface(&self) -> Option<SurfaceKey> {
        self.boundary.paired_surface()
    }
}
