// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for a building's zones and surfaces.
//!
//! The [`Building`] is the single owner of every zone and surface. Both live in
//! slot maps with stable keys; floors list their zones by key, zones list
//! their six surfaces by key, and interzone partitions reference their
//! partner by key. Name indices give the downstream contract (surfaces and
//! zones addressed by name) constant-time lookup.
//!
//! Zones and surfaces are never removed, so slot-map iteration order is
//! creation order.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::keys::{SurfaceKey, ZoneKey};
use crate::surface::{BoundaryCondition, Surface};
use crate::zone::{Floor, Zone};

/// A fully assembled building: floors, zones, surfaces and their pairings.
#[derive(Debug, Clone)]
pub struct Building {
    pub(crate) zones: SlotMap<ZoneKey, Zone>,
    pub(crate) surfaces: SlotMap<SurfaceKey, Surface>,
    pub(crate) floors: Vec<Floor>,

    pub(crate) zone_names: FxHashMap<String, ZoneKey>,
    pub(crate) surface_names: FxHashMap<String, SurfaceKey>,

    pub(crate) wall_height: f64,
}

impl Building {
    /// Creates an empty building with the given per-floor height.
    pub fn new(wall_height: f64) -> Self {
        Self {
            zones: SlotMap::with_key(),
            surfaces: SlotMap::with_key(),
            floors: Vec::new(),
            zone_names: FxHashMap::default(),
            surface_names: FxHashMap::default(),
            wall_height,
        }
    }

    pub fn wall_height(&self) -> f64 {
        self.wall_height
    }

    /// Height of all floors stacked.
    pub fn total_height(&self) -> f64 {
        self.wall_height * self.floors.len() as f64
    }

    /// Floors in increasing index order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Floor by 1-based index.
    pub fn floor(&self, index: usize) -> Option<&Floor> {
        index.checked_sub(1).and_then(|i| self.floors.get(i))
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn zone(&self, key: ZoneKey) -> Option<&Zone> {
        self.zones.get(key)
    }

    pub fn surface(&self, key: SurfaceKey) -> Option<&Surface> {
        self.surfaces.get(key)
    }

    pub fn zone_by_name(&self, name: &str) -> Option<ZoneKey> {
        self.zone_names.get(name).copied()
    }

    pub fn surface_by_name(&self, name: &str) -> Option<SurfaceKey> {
        self.surface_names.get(name).copied()
    }

    /// Zones in creation order.
    pub fn zones(&self) -> impl Iterator<Item = (ZoneKey, &Zone)> {
        self.zones.iter()
    }

    /// Surfaces in creation order.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceKey, &Surface)> {
        self.surfaces.iter()
    }

    /// The six surfaces of a zone, in surface-list order.
    pub fn zone_surfaces(&self, key: ZoneKey) -> Result<Vec<&Surface>> {
        let zone = self.zones.get(key).ok_or(Error::ZoneNotFound(key))?;
        zone.surfaces
            .iter()
            .map(|&s| self.surfaces.get(s).ok_or(Error::SurfaceNotFound(s)))
            .collect()
    }

    /// Number of partitions, counting each reciprocal pair once.
    pub fn partition_count(&self) -> usize {
        self.surfaces
            .values()
            .filter(|s| matches!(s.boundary, BoundaryCondition::Surface(_)))
            .count()
            / 2
    }

    pub(crate) fn surface_mut(&mut self, key: SurfaceKey) -> Result<&mut Surface> {
        self.surfaces.get_mut(key).ok_or(Error::SurfaceNotFound(key))
    }
}
