// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generator configuration.

use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use zonegen_topology::ZoneMatching;

use crate::error::{Error, Result};
use crate::lookup::CalibrationStage;
use crate::strategy::PickStrategy;

/// Per-run generation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Which lookup table to read.
    pub calibration_stage: CalibrationStage,
    /// How the perimeter depth is picked from its range.
    pub strategy: PickStrategy,
    /// Seed for the random-uniform strategy. Every building starts from this
    /// seed; without one each building draws from fresh entropy.
    pub random_seed: Option<u64>,
    /// Explicit per-floor height in metres; wins over a record's total height.
    pub wall_height: Option<f64>,
    /// How zones are paired across floors.
    pub zone_matching: ZoneMatching,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `ZONEGEN_CALIBRATION_STAGE`, `ZONEGEN_STRATEGY`,
    /// `ZONEGEN_RANDOM_SEED`, `ZONEGEN_WALL_HEIGHT` and
    /// `ZONEGEN_ZONE_MATCHING`. Unset or unparseable values keep their
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with a custom variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            calibration_stage: var("ZONEGEN_CALIBRATION_STAGE")
                .and_then(|v| CalibrationStage::from_name(&v))
                .unwrap_or(defaults.calibration_stage),
            strategy: var("ZONEGEN_STRATEGY")
                .map(|v| PickStrategy::from_name(&v))
                .unwrap_or(defaults.strategy),
            random_seed: var("ZONEGEN_RANDOM_SEED")
                .and_then(|v| v.trim().parse().ok())
                .or(defaults.random_seed),
            wall_height: var("ZONEGEN_WALL_HEIGHT")
                .and_then(|v| v.trim().parse().ok())
                .or(defaults.wall_height),
            zone_matching: var("ZONEGEN_ZONE_MATCHING")
                .and_then(|v| ZoneMatching::from_name(&v))
                .unwrap_or(defaults.zone_matching),
        }
    }

    /// Parses a JSON configuration; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(height) = self.wall_height {
            if !(height.is_finite() && height > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "wall_height must be positive, got {height}"
                )));
            }
        }
        if let ZoneMatching::ByCentroid { tolerance } = self.zone_matching {
            if !(tolerance.is_finite() && tolerance >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "centroid tolerance must be non-negative, got {tolerance}"
                )));
            }
        }
        Ok(())
    }

    /// Fresh generator for one building.
    pub fn rng(&self) -> Pcg64 {
        match self.random_seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        }
    }
}
