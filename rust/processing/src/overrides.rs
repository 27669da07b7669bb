// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Explicit per-building or per-type geometry overrides.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lookup::DepthRange;

/// Parameter an override row targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideParam {
    PerimeterDepth,
    HasCore,
    /// Parameters owned by other stages; ignored here.
    #[serde(other)]
    Other,
}

/// One override row.
///
/// `perimeter_depth` rows need both `min_val` and `max_val`; with
/// `fixed_value: true` the depth is locked to `min_val`. `has_core` rows set
/// the flag to `fixed_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    pub param_name: OverrideParam,
    #[serde(default)]
    pub min_val: Option<f64>,
    #[serde(default)]
    pub max_val: Option<f64>,
    #[serde(default)]
    pub fixed_value: Option<bool>,
}

/// What a matching row changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverrideEffect {
    DepthRange(DepthRange),
    HasCore(bool),
}

impl GeometryOverride {
    /// Parses a JSON array of override rows.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// True if every filter the row sets equals the building's value.
    pub fn applies_to(&self, building_id: i64, building_type: &str) -> bool {
        self.building_id.map_or(true, |id| id == building_id)
            && self
                .building_type
                .as_deref()
                .map_or(true, |t| t == building_type)
    }

    /// The change this row makes, if it is complete enough to make one.
    pub fn effect(&self) -> Option<OverrideEffect> {
        match self.param_name {
            OverrideParam::PerimeterDepth => {
                let (min, max) = (self.min_val?, self.max_val?);
                let range = if self.fixed_value == Some(true) {
                    DepthRange::fixed(min)
                } else {
                    DepthRange::new(min, max)
                };
                Some(OverrideEffect::DepthRange(range))
            }
            OverrideParam::HasCore => self.fixed_value.map(OverrideEffect::HasCore),
            OverrideParam::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<GeometryOverride> {
        GeometryOverride::list_from_json(json).unwrap()
    }

    #[test]
    fn filters() {
        let rows = parse(
            r#"[
                {"param_name": "has_core", "fixed_value": true},
                {"building_id": 7, "param_name": "has_core", "fixed_value": true},
                {"building_type": "Apartment", "param_name": "has_core", "fixed_value": true},
                {"building_id": 7, "building_type": "Apartment", "param_name": "has_core", "fixed_value": true}
            ]"#,
        );
        let hits: Vec<bool> = rows.iter().map(|r| r.applies_to(7, "Apartment")).collect();
        assert_eq!(hits, [true, true, true, true]);
        let hits: Vec<bool> = rows.iter().map(|r| r.applies_to(8, "Apartment")).collect();
        assert_eq!(hits, [true, false, true, false]);
        let hits: Vec<bool> = rows.iter().map(|r| r.applies_to(7, "Detached House")).collect();
        assert_eq!(hits, [true, true, false, false]);
    }

    #[test]
    fn effects() {
        let rows = parse(
            r#"[
                {"param_name": "perimeter_depth", "min_val": 2.0, "max_val": 4.0},
                {"param_name": "perimeter_depth", "min_val": 2.0, "max_val": 4.0, "fixed_value": true},
                {"param_name": "perimeter_depth", "min_val": 2.0},
                {"param_name": "has_core", "fixed_value": false},
                {"param_name": "has_core"},
                {"param_name": "wall_height", "min_val": 3.0, "max_val": 3.0}
            ]"#,
        );
        let effects: Vec<_> = rows.iter().map(GeometryOverride::effect).collect();
        assert_eq!(
            effects,
            [
                Some(OverrideEffect::DepthRange(DepthRange::new(2.0, 4.0))),
                Some(OverrideEffect::DepthRange(DepthRange::fixed(2.0))),
                None,
                Some(OverrideEffect::HasCore(false)),
                None,
                None,
            ]
        );
    }
}
