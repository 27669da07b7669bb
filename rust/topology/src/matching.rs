// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pairing of zones across adjacent floors.
//!
//! The default pairs zones by sorted name, positionally. It is exact for
//! floors with identical layouts and leaves the surplus unlinked otherwise.
//! Previously calibrated models depend on it, so geometric matching is only
//! available as an explicit opt-in.

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::keys::ZoneKey;

/// Default centroid distance (m) and relative area tolerance for
/// [`ZoneMatching::ByCentroid`].
pub const DEFAULT_CENTROID_TOLERANCE: f64 = 0.01;

fn default_tolerance() -> f64 {
    DEFAULT_CENTROID_TOLERANCE
}

/// Strategy for pairing a floor's zones with the floor below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ZoneMatching {
    /// Sort both floors' zone names and zip them.
    #[default]
    ByName,
    /// Pair each upper zone with the nearest unmatched lower zone whose XY
    /// centroid lies within `tolerance` metres and whose footprint area agrees
    /// within `tolerance` as a ratio.
    ByCentroid {
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
}

impl ZoneMatching {
    /// Centroid matching with the default tolerance.
    pub fn by_centroid() -> Self {
        ZoneMatching::ByCentroid {
            tolerance: DEFAULT_CENTROID_TOLERANCE,
        }
    }

    /// Parses `by-name` / `by-centroid`; anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "by-name" | "name" => Some(ZoneMatching::ByName),
            "by-centroid" | "centroid" => Some(ZoneMatching::by_centroid()),
            _ => None,
        }
    }

    /// Pairs `(lower, upper)` zones. Zones that find no partner are omitted.
    pub fn pair_zones(
        &self,
        building: &Building,
        lower: &[ZoneKey],
        upper: &[ZoneKey],
    ) -> Vec<(ZoneKey, ZoneKey)> {
        match *self {
            ZoneMatching::ByName => {
                let lower = sorted_by_name(building, lower);
                let upper = sorted_by_name(building, upper);
                lower.into_iter().zip(upper).collect()
            }
            ZoneMatching::ByCentroid { tolerance } => {
                pair_by_centroid(building, lower, upper, tolerance)
            }
        }
    }
}

fn sorted_by_name(building: &Building, zones: &[ZoneKey]) -> Vec<ZoneKey> {
    let mut named: Vec<(&str, ZoneKey)> = zones
        .iter()
        .filter_map(|&k| building.zone(k).map(|z| (z.name.as_str(), k)))
        .collect();
    named.sort_by(|a, b| a.0.cmp(b.0));
    named.into_iter().map(|(_, k)| k).collect()
}

fn pair_by_centroid(
    building: &Building,
    lower: &[ZoneKey],
    upper: &[ZoneKey],
    tolerance: f64,
) -> Vec<(ZoneKey, ZoneKey)> {
    // (key, plan centroid, area)
    let describe = |k: ZoneKey| {
        building
            .zone(k)
            .map(|z| (k, z.footprint.centroid().xy(), z.footprint.area_xy()))
    };
    let mut candidates: Vec<_> = lower.iter().filter_map(|&k| describe(k)).collect();

    let mut pairs = Vec::new();
    for target in sorted_by_name(building, upper) {
        let Some((_, target_centroid, ta)) = describe(target) else {
            continue;
        };
        let best = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                let scale = c.2.max(ta);
                scale > 0.0 && (c.2 - ta).abs() / scale <= tolerance
            })
            .map(|(i, c)| (i, nalgebra::distance(&c.1, &target_centroid)))
            .filter(|&(_, d)| d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((i, _)) = best {
            let (source, ..) = candidates.swap_remove(i);
            pairs.push((source, target));
        }
    }
    pairs
}
