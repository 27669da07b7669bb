// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interzone partition pairing.
//!
//! Within a floor, each perimeter zone's interior wall (wall 2) coincides
//! with one core wall: Front↔3, Right↔2, Rear↔1, Left↔0. Across floors, the
//! lower zone's ceiling is paired with the upper zone's floor.

use zonegen_geometry::PerimeterSide;

use crate::building::Building;
use crate::error::{Error, Result};
use crate::keys::{SurfaceKey, ZoneKey};
use crate::matching::ZoneMatching;
use crate::surface::BoundaryCondition;
use crate::zone::PERIMETER_INTERIOR_WALL;

/// Core wall that coincides with the interior wall of the perimeter strip on
/// `side`.
pub fn core_wall_for(side: PerimeterSide) -> usize {
    3 - side.edge_index()
}

impl Building {
    /// Pairs two surfaces as the two faces of one partition.
    ///
    /// Both become `Surface` boundaries naming each other. Linking an already
    /// paired surface to a new partner releases the old partner back to
    /// `Adiabatic`, so pairings stay symmetric.
    pub fn link_surfaces(&mut self, a: SurfaceKey, b: SurfaceKey) -> Result<()> {
        if a == b {
            let name = self.surface(a).ok_or(Error::SurfaceNotFound(a))?.name.clone();
            return Err(Error::SelfPartition(name));
        }
        let old_a = self.surface(a).ok_or(Error::SurfaceNotFound(a))?.paired_surface();
        let old_b = self.surface(b).ok_or(Error::SurfaceNotFound(b))?.paired_surface();

        for (old, keep) in [(old_a, b), (old_b, a)] {
            if let Some(old) = old.filter(|&o| o != keep) {
                if let Ok(stale) = self.surface_mut(old) {
                    stale.boundary = BoundaryCondition::Adiabatic;
                }
            }
        }

        self.surface_mut(a)?.boundary = BoundaryCondition::Surface(b);
        self.surface_mut(b)?.boundary = BoundaryCondition::Surface(a);
        Ok(())
    }

    /// Links every perimeter zone's interior wall to the matching core wall.
    pub fn link_core_partitions(
        &mut self,
        perimeters: &[(PerimeterSide, ZoneKey)],
        core: ZoneKey,
    ) -> Result<()> {
        let core_zone = self.zone(core).ok_or(Error::ZoneNotFound(core))?;
        let core_walls = core_zone.surfaces;

        for &(side, zone) in perimeters {
            let strip = self.zone(zone).ok_or(Error::ZoneNotFound(zone))?;
            let interior = strip.surfaces[1 + PERIMETER_INTERIOR_WALL];
            let core_wall = core_walls[1 + core_wall_for(side)];
            self.link_surfaces(interior, core_wall)?;
        }
        Ok(())
    }

    /// Links floor `upper`'s floor surfaces to floor `lower`'s ceilings.
    ///
    /// Returns the number of partitions created. Zones left without a partner
    /// keep their Adiabatic boundaries.
    pub fn link_floors(
        &mut self,
        lower: usize,
        upper: usize,
        matching: &ZoneMatching,
    ) -> Result<usize> {
        let lower_zones = self
            .floor(lower)
            .map(|f| f.zones.clone())
            .unwrap_or_default();
        let upper_zones = self
            .floor(upper)
            .map(|f| f.zones.clone())
            .unwrap_or_default();

        let pairs = matching.pair_zones(self, &lower_zones, &upper_zones);
        if pairs.len() != lower_zones.len() || pairs.len() != upper_zones.len() {
            tracing::debug!(
                lower,
                upper,
                lower_zones = lower_zones.len(),
                upper_zones = upper_zones.len(),
                paired = pairs.len(),
                "zone layouts differ between floors, unmatched zones stay adiabatic"
            );
        }

        let mut linked = 0;
        for (old_zone, new_zone) in pairs {
            let old = self.zone(old_zone).ok_or(Error::ZoneNotFound(old_zone))?;
            let ceiling = old
                .surfaces
                .iter()
                .copied()
                .find(|&s| self.surface(s).is_some_and(|s| s.kind.is_upper()));
            let floor = self
                .zone(new_zone)
                .ok_or(Error::ZoneNotFound(new_zone))?
                .floor_surface();

            if let Some(ceiling) = ceiling {
                self.link_surfaces(ceiling, floor)?;
                linked += 1;
            }
        }
        Ok(linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ZoneInput;
    use crate::zone::ZoneRole;
    use zonegen_geometry::build_base_polygon;

    fn two_zones() -> (Building, ZoneKey, ZoneKey) {
        let base = build_base_polygon(10.0, 10.0, 0.0).as_quad().unwrap();
        let mut building = Building::new(3.0);
        let a = building
            .add_zone(ZoneInput::new(ZoneRole::Single, 1, base))
            .unwrap();
        let b = building
            .add_zone(ZoneInput::new(ZoneRole::Single, 2, base))
            .unwrap();
        (building, a, b)
    }

    #[test]
    fn core_wall_mapping() {
        assert_eq!(core_wall_for(PerimeterSide::Front), 3);
        assert_eq!(core_wall_for(PerimeterSide::Right), 2);
        assert_eq!(core_wall_for(PerimeterSide::Rear), 1);
        assert_eq!(core_wall_for(PerimeterSide::Left), 0);
    }

    #[test]
    fn link_is_symmetric() {
        let (mut building, a, b) = two_zones();
        let ceiling = building.zone(a).unwrap().top_surface();
        let floor = building.zone(b).unwrap().floor_surface();

        building.link_surfaces(ceiling, floor).unwrap();
        assert_eq!(building.surface(ceiling).unwrap().paired_surface(), Some(floor));
        assert_eq!(building.surface(floor).unwrap().paired_surface(), Some(ceiling));
        assert_eq!(building.partition_count(), 1);

        // Relinking the same pair changes nothing
        building.link_surfaces(floor, ceiling).unwrap();
        assert_eq!(building.partition_count(), 1);
    }

    #[test]
    fn relink_releases_old_partner() {
        let (mut building, a, b) = two_zones();
        let ceiling = building.zone(a).unwrap().top_surface();
        let floor = building.zone(b).unwrap().floor_surface();
        let wall = building.zone(b).unwrap().wall(0).unwrap();

        building.link_surfaces(ceiling, floor).unwrap();
        building.link_surfaces(ceiling, wall).unwrap();

        assert_eq!(building.surface(ceiling).unwrap().paired_surface(), Some(wall));
        assert_eq!(
            building.surface(floor).unwrap().boundary(),
            BoundaryCondition::Adiabatic
        );
        assert_eq!(building.partition_count(), 1);
    }

    #[test]
    fn mismatched_layouts_pair_only_what_matches() {
        use crate::assembler::{assemble_building, BuildingSpec};
        use crate::zone::Floor;

        let mut spec = BuildingSpec::new(600.0, 100.0);
        spec.has_core = true;
        spec.perimeter_depth = 3.0;
        let mut building = assemble_building(&spec).unwrap();

        let base = build_base_polygon(24.0, 25.0, 0.0).as_quad().unwrap();
        let single = building
            .add_zone(ZoneInput::new(ZoneRole::Single, 2, base).top_floor(true))
            .unwrap();
        building.floors.push(Floor {
            index: 2,
            zones: vec![single],
            is_ground_floor: false,
            is_top_floor: true,
        });

        // Areas differ, so nothing lines up geometrically
        let by_centroid = building
            .link_floors(1, 2, &ZoneMatching::by_centroid())
            .unwrap();
        assert_eq!(by_centroid, 0);

        // Names zip positionally: the first sorted lower zone takes the only partner
        let by_name = building.link_floors(1, 2, &ZoneMatching::ByName).unwrap();
        assert_eq!(by_name, 1);
        let core_roof = building.surface_by_name("Zone1_Core_Roof").unwrap();
        let floor = building.zone(single).unwrap().floor_surface();
        assert_eq!(building.surface(core_roof).unwrap().paired_surface(), Some(floor));
        assert_eq!(building.partition_count(), 4 + 1);
    }

    #[test]
    fn self_link_rejected() {
        let (mut building, a, _) = two_zones();
        let wall = building.zone(a).unwrap().wall(1).unwrap();
        let err = building.link_surfaces(wall, wall).unwrap_err();
        assert!(matches!(err, Error::SelfPartition(name) if name == "Zone1_Wall_1"));
    }
}
