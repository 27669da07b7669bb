// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON snapshot of an assembled building.
//!
//! This is the record handed to downstream stages. Slot-map keys do not
//! survive serialization, so surfaces and partitions are addressed by their
//! building-unique names instead.

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::error::{Error, Result};
use crate::keys::SurfaceKind;
use crate::zone::Zone;

/// Serializable view of a [`Building`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSnapshot {
    pub wall_height: f64,
    pub total_height: f64,
    pub floors: Vec<FloorSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    pub index: usize,
    pub is_ground_floor: bool,
    pub is_top_floor: bool,
    pub zones: Vec<ZoneSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub name: String,
    pub is_core: bool,
    pub footprint: Vec<[f64; 3]>,
    pub surfaces: Vec<SurfaceSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub name: String,
    pub kind: SurfaceKind,
    pub zone: String,
    /// `Outdoors`, `Ground`, `Adiabatic` or `Surface`.
    pub boundary: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paired_surface: Option<String>,
    pub vertices: Vec<[f64; 3]>,
    pub sun_exposed: bool,
    pub wind_exposed: bool,
}

impl BuildingSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// All surfaces, floor by floor, zone by zone.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceSnapshot> {
        self.floors
            .iter()
            .flat_map(|f| f.zones.iter())
            .flat_map(|z| z.surfaces.iter())
    }
}

impl Building {
    /// Creates the name-addressed snapshot of this building.
    pub fn snapshot(&self) -> BuildingSnapshot {
        let floors = self
            .floors
            .iter()
            .map(|floor| FloorSnapshot {
                index: floor.index,
                is_ground_floor: floor.is_ground_floor,
                is_top_floor: floor.is_top_floor,
                zones: floor
                    .zones
                    .iter()
                    .filter_map(|&k| self.zone(k))
                    .map(|zone| self.zone_snapshot(zone))
                    .collect(),
            })
            .collect();

        BuildingSnapshot {
            wall_height: self.wall_height,
            total_height: self.total_height(),
            floors,
        }
    }

    /// Serializes the building snapshot to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        self.snapshot().to_json()
    }

    fn zone_snapshot(&self, zone: &Zone) -> ZoneSnapshot {
        let surfaces = zone
            .surfaces
            .iter()
            .filter_map(|&k| self.surface(k))
            .map(|s| SurfaceSnapshot {
                name: s.name.clone(),
                kind: s.kind,
                zone: zone.name.clone(),
                boundary: s.boundary().as_str().to_string(),
                paired_surface: s
                    .paired_surface()
                    .and_then(|p| self.surface(p))
                    .map(|p| p.name.clone()),
                vertices: s.polygon.points().iter().map(|p| [p.x, p.y, p.z]).collect(),
                sun_exposed: s.sun_exposed,
                wind_exposed: s.wind_exposed,
            })
            .collect();

        ZoneSnapshot {
            name: zone.name.clone(),
            is_core: zone.is_core(),
            footprint: zone.footprint.points().iter().map(|p| [p.x, p.y, p.z]).collect(),
            surfaces,
        }
    }
}
