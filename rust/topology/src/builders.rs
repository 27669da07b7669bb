// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone construction: one base quad extruded into six enclosing surfaces.
//!
//! Surface order is fixed at `[Floor, Wall0, Wall1, Wall2, Wall3, Top]`, and
//! wall `k` spans footprint edge `k → k+1`. The linker relies on both.

use zonegen_geometry::{Point3, Polygon, Quad};

use crate::building::Building;
use crate::error::{Error, Result};
use crate::keys::{SurfaceKind, ZoneKey};
use crate::surface::{BoundaryCondition, Surface};
use crate::zone::{Zone, ZoneRole};

/// Everything needed to build one zone.
#[derive(Debug, Clone)]
pub struct ZoneInput {
    pub name: String,
    pub role: ZoneRole,
    /// 1-based floor number.
    pub floor_index: usize,
    /// Footprint at floor level.
    pub base: Quad,
    pub floor_boundary: BoundaryCondition,
    /// One per footprint edge; interior partitions start `Adiabatic` and are
    /// upgraded when linked.
    pub wall_boundaries: [BoundaryCondition; 4],
    pub is_top_floor: bool,
}

impl ZoneInput {
    /// Zone named after its role, with an Adiabatic floor, Outdoors walls and
    /// a ceiling.
    pub fn new(role: ZoneRole, floor_index: usize, base: Quad) -> Self {
        Self {
            name: role.zone_name(floor_index),
            role,
            floor_index,
            base,
            floor_boundary: BoundaryCondition::Adiabatic,
            wall_boundaries: [BoundaryCondition::Outdoors; 4],
            is_top_floor: false,
        }
    }

    pub fn floor_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.floor_boundary = boundary;
        self
    }

    pub fn wall_boundaries(mut self, boundaries: [BoundaryCondition; 4]) -> Self {
        self.wall_boundaries = boundaries;
        self
    }

    pub fn top_floor(mut self, is_top_floor: bool) -> Self {
        self.is_top_floor = is_top_floor;
        self
    }
}

impl Building {
    /// Builds a zone and its six surfaces from `input`.
    ///
    /// The top polygon is the base lifted by the building's wall height. The
    /// floor surface uses the base reversed; the roof or ceiling uses the top
    /// polygon as is. On the top floor the upper surface is an Outdoors roof,
    /// otherwise an Adiabatic ceiling awaiting the floor above.
    pub fn add_zone(&mut self, input: ZoneInput) -> Result<ZoneKey> {
        if self.zone_names.contains_key(&input.name) {
            return Err(Error::DuplicateName(input.name));
        }

        let base = input.base;
        let height = self.wall_height;
        let top: Quad = base.map(|p| Point3::new(p.x, p.y, p.z + height));

        let (top_kind, top_boundary) = if input.is_top_floor {
            (SurfaceKind::Roof, BoundaryCondition::Outdoors)
        } else {
            (SurfaceKind::Ceiling, BoundaryCondition::Adiabatic)
        };

        let name = input.name;
        let surfaces = &mut self.surfaces;
        let surface_names = &mut self.surface_names;

        let zone_key = self.zones.insert_with_key(|zone_key| {
            let mut add = |surface_name: String,
                           kind: SurfaceKind,
                           polygon: Polygon,
                           boundary: BoundaryCondition| {
                let key = surfaces.insert(Surface::new(
                    surface_name.clone(),
                    kind,
                    zone_key,
                    polygon,
                    boundary,
                ));
                surface_names.insert(surface_name, key);
                key
            };

            let floor = add(
                format!("{name}_Floor"),
                SurfaceKind::Floor,
                Polygon::from_quad(base).reversed(),
                input.floor_boundary,
            );
            let walls: [_; 4] = std::array::from_fn(|k| {
                let j = (k + 1) % 4;
                add(
                    format!("{name}_Wall_{k}"),
                    SurfaceKind::Wall,
                    Polygon::from_quad([base[k], base[j], top[j], top[k]]),
                    input.wall_boundaries[k],
                )
            });
            let upper = add(
                format!("{name}_{top_kind}"),
                top_kind,
                Polygon::from_quad(top),
                top_boundary,
            );

            Zone {
                name: name.clone(),
                floor_index: input.floor_index,
                role: input.role,
                footprint: Polygon::from_quad(base),
                top: Polygon::from_quad(top),
                surfaces: [floor, walls[0], walls[1], walls[2], walls[3], upper],
            }
        });

        self.zone_names.insert(name, zone_key);
        Ok(zone_key)
    }
}
