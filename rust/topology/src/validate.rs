// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural checks on an assembled building.

use crate::building::Building;
use crate::error::{Error, Result};
use crate::keys::SurfaceKind;

impl Building {
    /// Checks the surface-list contract of every zone and that every
    /// partition has a reciprocal partner.
    pub fn validate(&self) -> Result<()> {
        for (_, zone) in self.zones() {
            let malformed = |reason: String| Error::MalformedZone {
                zone: zone.name.clone(),
                reason,
            };
            for (i, &key) in zone.surfaces.iter().enumerate() {
                let surface = self.surface(key).ok_or(Error::SurfaceNotFound(key))?;
                let expected = match i {
                    0 => surface.kind == SurfaceKind::Floor,
                    5 => surface.kind.is_upper(),
                    _ => surface.kind == SurfaceKind::Wall,
                };
                if !expected {
                    return Err(malformed(format!(
                        "surface {i} ('{}') is a {}",
                        surface.name, surface.kind
                    )));
                }
                if self.zone(surface.zone).map(|z| &z.name) != Some(&zone.name) {
                    return Err(malformed(format!(
                        "surface '{}' belongs to another zone",
                        surface.name
                    )));
                }
            }
        }

        for (key, surface) in self.surfaces() {
            let Some(partner_key) = surface.paired_surface() else {
                continue;
            };
            let partner = self
                .surface(partner_key)
                .ok_or_else(|| Error::DanglingPartition(surface.name.clone()))?;
            if partner.paired_surface() != Some(key) {
                return Err(Error::AsymmetricPartition {
                    surface: surface.name.clone(),
                    partner: partner.name.clone(),
                });
            }
        }
        Ok(())
    }
}
