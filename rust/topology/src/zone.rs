// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermal zones and floors.

use zonegen_geometry::{PerimeterSide, Polygon};

use crate::keys::{SurfaceKey, ZoneKey};

/// Number of surfaces enclosing every zone.
pub const SURFACES_PER_ZONE: usize = 6;

/// Index of the floor surface in a zone's surface list.
pub const FLOOR_SURFACE: usize = 0;

/// Index of the top (ceiling or roof) surface in a zone's surface list.
pub const TOP_SURFACE: usize = 5;

/// Index of the interior wall of a perimeter zone, the one facing the core.
pub const PERIMETER_INTERIOR_WALL: usize = 2;

/// Surface-list index of wall `k`.
pub const fn wall_surface(k: usize) -> usize {
    1 + k
}

/// Where a zone sits in its floor's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneRole {
    /// The only zone on a floor without a core.
    Single,
    Perimeter(PerimeterSide),
    Core,
}

impl ZoneRole {
    pub fn is_core(&self) -> bool {
        matches!(self, ZoneRole::Core)
    }

    /// Zone name for this role on floor `floor_index` (1-based).
    pub fn zone_name(&self, floor_index: usize) -> String {
        match self {
            ZoneRole::Single => format!("Zone{floor_index}"),
            ZoneRole::Perimeter(side) => format!("Zone{floor_index}_{side}Perimeter"),
            ZoneRole::Core => format!("Zone{floor_index}_Core"),
        }
    }
}

/// A thermal zone: one air volume with six enclosing surfaces.
#[derive(Debug, Clone)]
pub struct Zone {
    pub name: String,
    /// 1-based floor number.
    pub floor_index: usize,
    pub role: ZoneRole,
    /// Base polygon at floor level.
    pub footprint: Polygon,
    /// Base polygon lifted by the wall height.
    pub top: Polygon,
    /// `[Floor, Wall0, Wall1, Wall2, Wall3, Ceiling|Roof]`
    pub surfaces: [SurfaceKey; SURFACES_PER_ZONE],
}

impl Zone {
    pub fn is_core(&self) -> bool {
        self.role.is_core()
    }

    pub fn floor_surface(&self) -> SurfaceKey {
        self.surfaces[FLOOR_SURFACE]
    }

    pub fn wall(&self, k: usize) -> Option<SurfaceKey> {
        (k < 4).then(|| self.surfaces[wall_surface(k)])
    }

    pub fn top_surface(&self) -> SurfaceKey {
        self.surfaces[TOP_SURFACE]
    }
}

/// One storey of the building.
#[derive(Debug, Clone)]
pub struct Floor {
    /// 1-based floor number.
    pub index: usize,
    /// Zones in creation order (perimeters front, right, rear, left, then core).
    pub zones: Vec<ZoneKey>,
    pub is_ground_floor: bool,
    pub is_top_floor: bool,
}

impl Floor {
    pub fn has_core(&self) -> bool {
        self.zones.len() > 1
    }
}
