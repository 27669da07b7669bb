// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reduction of a resolved depth range to one value.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lookup::DepthRange;

/// How a single perimeter depth is picked from its range.
///
/// Deserializes from the names below or the legacy codes `A` (midpoint) and
/// `B` (random uniform); any other string means minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum PickStrategy {
    #[default]
    Midpoint,
    RandomUniform,
    Minimum,
}

impl PickStrategy {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "a" | "midpoint" => PickStrategy::Midpoint,
            "b" | "random-uniform" | "random_uniform" | "random" => PickStrategy::RandomUniform,
            _ => PickStrategy::Minimum,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PickStrategy::Midpoint => "midpoint",
            PickStrategy::RandomUniform => "random-uniform",
            PickStrategy::Minimum => "minimum",
        }
    }

    /// Picks a value in `range`. Only [`PickStrategy::RandomUniform`] draws
    /// from `rng`, and only when the range is not a single point.
    pub fn pick<R: Rng>(&self, range: DepthRange, rng: &mut R) -> f64 {
        match self {
            PickStrategy::Midpoint => range.midpoint(),
            PickStrategy::RandomUniform => {
                if range.min < range.max && (range.max - range.min).is_finite() {
                    rng.random_range(range.min..=range.max)
                } else {
                    range.min
                }
            }
            PickStrategy::Minimum => range.min,
        }
    }
}

impl From<String> for PickStrategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for PickStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
