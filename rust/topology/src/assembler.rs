// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-building assembly, floor by floor.
//!
//! Floors are built in increasing order. Each floor's zones are created from
//! the same footprint lifted by one wall height per storey, linked
//! perimeter-to-core, then linked to the floor below.

use serde::{Deserialize, Serialize};
use zonegen_geometry::{Footprint, FloorLayout, PerimeterSide, Point3, Quad};

use crate::builders::ZoneInput;
use crate::building::Building;
use crate::error::{Error, Result};
use crate::matching::ZoneMatching;
use crate::surface::{BoundaryCondition, EdgeType};
use crate::zone::{Floor, ZoneRole};

/// Per-floor height (m) when neither an explicit height nor a total height
/// is given.
pub const DEFAULT_FLOOR_HEIGHT: f64 = 3.0;

/// Input for [`assemble_building`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    /// Gross floor area per storey (m²).
    pub area: f64,
    /// Footprint perimeter (m).
    pub perimeter: f64,
    /// Rotation of the footprint about the origin, degrees.
    #[serde(default)]
    pub orientation_deg: f64,
    pub num_floors: usize,
    #[serde(default)]
    pub total_height: Option<f64>,
    /// Explicit per-floor height; wins over `total_height`.
    #[serde(default)]
    pub wall_height: Option<f64>,
    /// Footprint edges A→B, B→C, C→D, D→A.
    #[serde(default)]
    pub edges: [EdgeType; 4],
    pub perimeter_depth: f64,
    pub has_core: bool,
    #[serde(default)]
    pub zone_matching: ZoneMatching,
}

impl BuildingSpec {
    /// Single-floor, all-facade building with no core.
    pub fn new(area: f64, perimeter: f64) -> Self {
        Self {
            area,
            perimeter,
            orientation_deg: 0.0,
            num_floors: 1,
            total_height: None,
            wall_height: None,
            edges: [EdgeType::Facade; 4],
            perimeter_depth: 0.0,
            has_core: false,
            zone_matching: ZoneMatching::ByName,
        }
    }
}

/// Per-floor height: explicit value, else `total_height / num_floors`, else
/// [`DEFAULT_FLOOR_HEIGHT`].
///
/// The default does not scale with the floor count.
pub fn resolve_wall_height(
    wall_height: Option<f64>,
    total_height: Option<f64>,
    num_floors: usize,
) -> f64 {
    match (wall_height, total_height) {
        (Some(h), _) => h,
        (None, Some(total)) if num_floors > 0 => total / num_floors as f64,
        _ => DEFAULT_FLOOR_HEIGHT,
    }
}

/// Builds the complete zone/surface topology for one building.
pub fn assemble_building(spec: &BuildingSpec) -> Result<Building> {
    let footprint = Footprint::from_area_perimeter(spec.area, spec.perimeter)?;
    if spec.num_floors == 0 {
        return Err(Error::InvalidFloorCount(spec.num_floors));
    }
    let wall_height = resolve_wall_height(spec.wall_height, spec.total_height, spec.num_floors);
    if !(wall_height.is_finite() && wall_height > 0.0) {
        return Err(Error::InvalidWallHeight(wall_height));
    }

    let polygon = footprint.base_polygon(spec.orientation_deg);
    let mut base = polygon
        .as_quad()
        .ok_or(zonegen_geometry::Error::DegeneratePolygon(polygon.len()))?;
    let edge_boundaries = spec.edges.map(EdgeType::boundary);

    let mut building = Building::new(wall_height);
    for index in 1..=spec.num_floors {
        let is_ground_floor = index == 1;
        let is_top_floor = index == spec.num_floors;
        let floor_boundary = if is_ground_floor {
            BoundaryCondition::Ground
        } else {
            BoundaryCondition::Adiabatic
        };

        let layout = FloorLayout::decompose(&base, spec.perimeter_depth, spec.has_core);
        if spec.has_core && !layout.has_core() {
            tracing::debug!(
                floor = index,
                perimeter_depth = spec.perimeter_depth,
                "core suppressed, floor stays a single zone"
            );
        }

        let template = |role: ZoneRole, quad: Quad| {
            ZoneInput::new(role, index, quad)
                .floor_boundary(floor_boundary)
                .top_floor(is_top_floor)
        };

        let mut zones = Vec::with_capacity(5);
        if let Some(core_quad) = layout.core_quad() {
            let mut perimeters = Vec::with_capacity(4);
            for side in PerimeterSide::ALL {
                let Some(quad) = layout.perimeter_quad(side) else {
                    continue;
                };
                // Exterior wall on the footprint edge; side walls touch the
                // neighbouring strips; the interior wall waits for the core.
                let mut walls = [BoundaryCondition::Adiabatic; 4];
                walls[0] = edge_boundaries[side.edge_index()];
                let key = building
                    .add_zone(template(ZoneRole::Perimeter(side), quad).wall_boundaries(walls))?;
                perimeters.push((side, key));
                zones.push(key);
            }
            let core = building.add_zone(
                template(ZoneRole::Core, core_quad)
                    .wall_boundaries([BoundaryCondition::Adiabatic; 4]),
            )?;
            zones.push(core);
            building.link_core_partitions(&perimeters, core)?;
        } else {
            let key = building.add_zone(
                template(ZoneRole::Single, *layout.base()).wall_boundaries(edge_boundaries),
            )?;
            zones.push(key);
        }

        building.floors.push(Floor {
            index,
            zones,
            is_ground_floor,
            is_top_floor,
        });

        if index > 1 {
            building.link_floors(index - 1, index, &spec.zone_matching)?;
        }

        base = base.map(|p| Point3::new(p.x, p.y, p.z + wall_height));
    }

    tracing::info!(
        floors = spec.num_floors,
        zones = building.zone_count(),
        surfaces = building.surface_count(),
        partitions = building.partition_count(),
        "building assembled"
    );
    Ok(building)
}
