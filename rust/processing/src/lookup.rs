// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default perimeter-depth ranges and core flags per building type.
//!
//! Keyed by (function, subtype, calibration stage). Pre-calibration entries
//! carry the search range; post-calibration entries are the calibrated
//! values, usually a single point.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::GeometryRule;

/// Residential or non-residential use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingFunction {
    Residential,
    NonResidential,
}

impl BuildingFunction {
    /// `"residential"` in any case is residential; anything else is not.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("residential") {
            BuildingFunction::Residential
        } else {
            BuildingFunction::NonResidential
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingFunction::Residential => "residential",
            BuildingFunction::NonResidential => "non_residential",
        }
    }

    /// Subtype assumed when a record names none.
    pub fn default_subtype(&self) -> &'static str {
        match self {
            BuildingFunction::Residential => "Two-and-a-half-story House",
            BuildingFunction::NonResidential => "Office Function",
        }
    }
}

impl std::fmt::Display for BuildingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which table a parameter set belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationStage {
    #[default]
    PreCalibration,
    PostCalibration,
}

impl CalibrationStage {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "pre_calibration" => Some(CalibrationStage::PreCalibration),
            "post_calibration" => Some(CalibrationStage::PostCalibration),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalibrationStage::PreCalibration => "pre_calibration",
            CalibrationStage::PostCalibration => "post_calibration",
        }
    }
}

/// Closed range of perimeter depths in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: f64,
    pub max: f64,
}

impl DepthRange {
    /// Range between `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Default parameters for one (function, subtype, stage).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub perimeter_depth_range: DepthRange,
    pub has_core: bool,
}

/// Used when the table has no entry for a building.
pub const FALLBACK_ENTRY: LookupEntry = LookupEntry {
    perimeter_depth_range: DepthRange { min: 2.0, max: 3.0 },
    has_core: false,
};

type LookupKey = (BuildingFunction, String, CalibrationStage);

/// Geometry lookup table.
#[derive(Debug, Clone, Default)]
pub struct GeometryLookup {
    entries: FxHashMap<LookupKey, LookupEntry>,
}

impl GeometryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock table.
    pub fn builtin() -> Self {
        // (subtype, pre range, post range)
        const NON_RESIDENTIAL: [(&str, (f64, f64), (f64, f64)); 10] = [
            ("Accommodation Function", (2.0, 3.0), (2.5, 2.5)),
            ("Cell Function", (1.2, 2.2), (2.2, 2.2)),
            ("Education Function", (2.0, 3.0), (2.5, 2.5)),
            ("Healthcare Function", (3.0, 4.0), (3.5, 3.5)),
            ("Industrial Function", (3.0, 4.0), (3.5, 3.5)),
            ("Meeting Function", (1.0, 2.0), (2.0, 2.0)),
            ("Office Function", (2.5, 3.5), (3.0, 3.0)),
            ("Other Use Function", (1.8, 2.8), (2.3, 2.3)),
            ("Retail Function", (2.0, 3.0), (2.5, 2.5)),
            ("Sport Function", (1.5, 2.5), (2.5, 2.5)),
        ];
        const RESIDENTIAL: [(&str, (f64, f64), (f64, f64)); 5] = [
            ("Apartment", (1.8, 2.3), (2.3, 2.8)),
            ("Corner House", (2.0, 2.5), (2.5, 3.0)),
            ("Detached House", (2.0, 2.5), (2.5, 3.0)),
            ("Terrace or Semi-detached House", (2.0, 2.5), (2.5, 3.0)),
            ("Two-and-a-half-story House", (2.0, 2.5), (2.5, 3.0)),
        ];

        let mut lookup = Self::new();
        for (function, rows, has_core) in [
            (BuildingFunction::NonResidential, &NON_RESIDENTIAL[..], true),
            (BuildingFunction::Residential, &RESIDENTIAL[..], false),
        ] {
            for &(subtype, pre, post) in rows {
                for (stage, (a, b)) in [
                    (CalibrationStage::PreCalibration, pre),
                    (CalibrationStage::PostCalibration, post),
                ] {
                    lookup.insert(
                        function,
                        subtype,
                        stage,
                        LookupEntry {
                            perimeter_depth_range: DepthRange::new(a, b),
                            has_core,
                        },
                    );
                }
            }
        }
        lookup
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(
        &self,
        function: BuildingFunction,
        subtype: &str,
        stage: CalibrationStage,
    ) -> Option<&LookupEntry> {
        self.entries.get(&(function, subtype.to_string(), stage))
    }

    pub fn insert(
        &mut self,
        function: BuildingFunction,
        subtype: &str,
        stage: CalibrationStage,
        entry: LookupEntry,
    ) {
        self.entries
            .insert((function, subtype.to_string(), stage), entry);
    }

    /// Writes rule rows into the table in place.
    ///
    /// Each rule sets the depth range of its (function, type, stage) entry,
    /// creating it if needed; the stage defaults to pre-calibration. The
    /// core flag changes only when the rule carries one; new entries start
    /// without a core. Rules naming an unknown stage are skipped.
    pub fn apply_rules(&mut self, rules: &[GeometryRule]) {
        for rule in rules {
            let stage = match rule.stage() {
                Ok(stage) => stage.unwrap_or_default(),
                Err(name) => {
                    tracing::warn!(stage = %name, "skipping rule with unknown calibration stage");
                    continue;
                }
            };
            let key = (
                BuildingFunction::from_label(&rule.building_function),
                rule.building_type.trim().to_string(),
                stage,
            );
            let entry = self.entries.entry(key).or_insert(FALLBACK_ENTRY);
            entry.perimeter_depth_range = rule.depth_range();
            if let Some(has_core) = rule.has_core_value {
                entry.has_core = has_core;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_types() {
        let lookup = GeometryLookup::builtin();
        assert_eq!(lookup.len(), 30);

        let office = lookup
            .get(
                BuildingFunction::NonResidential,
                "Office Function",
                CalibrationStage::PreCalibration,
            )
            .unwrap();
        assert_eq!(office.perimeter_depth_range, DepthRange::new(2.5, 3.5));
        assert!(office.has_core);

        let apartment = lookup
            .get(
                BuildingFunction::Residential,
                "Apartment",
                CalibrationStage::PostCalibration,
            )
            .unwrap();
        assert_eq!(apartment.perimeter_depth_range, DepthRange::new(2.3, 2.8));
        assert!(!apartment.has_core);
    }

    #[test]
    fn subtype_lookup_is_exact() {
        let lookup = GeometryLookup::builtin();
        assert!(lookup
            .get(
                BuildingFunction::NonResidential,
                "office function",
                CalibrationStage::PreCalibration
            )
            .is_none());
        assert!(lookup
            .get(
                BuildingFunction::Residential,
                "Office Function",
                CalibrationStage::PreCalibration
            )
            .is_none());
    }

    #[test]
    fn function_labels() {
        assert_eq!(BuildingFunction::from_label(" Residential"), BuildingFunction::Residential);
        assert_eq!(BuildingFunction::from_label("non_residential"), BuildingFunction::NonResidential);
        assert_eq!(BuildingFunction::from_label("retail"), BuildingFunction::NonResidential);
    }

    #[test]
    fn depth_range_orders_bounds() {
        let range = DepthRange::new(3.0, 2.0);
        assert_eq!(range.min, 2.0);
        assert_eq!(range.max, 3.0);
        assert_eq!(range.midpoint(), 2.5);
        assert!(DepthRange::fixed(2.2).is_fixed());
    }

    #[test]
    fn apply_rules_patches_in_place() {
        let mut lookup = GeometryLookup::builtin();
        let rules: Vec<GeometryRule> = serde_json::from_str(
            r#"[
                {"building_function": "residential", "building_type": "Apartment",
                 "min_area": 0, "max_area": 1000, "min_perimeter": 0, "max_perimeter": 500,
                 "perimeter_depth_min": 4.0, "perimeter_depth_max": 5.0, "has_core_value": true},
                {"building_function": "non_residential", "building_type": "Office Function",
                 "calibration_stage": "post_calibration",
                 "min_area": 0, "max_area": 1000, "min_perimeter": 0, "max_perimeter": 500,
                 "perimeter_depth_min": 1.0, "perimeter_depth_max": 1.5},
                {"building_function": "non_residential", "building_type": "Garage",
                 "min_area": 0, "max_area": 1000, "min_perimeter": 0, "max_perimeter": 500,
                 "perimeter_depth_min": 2.0, "perimeter_depth_max": 2.0},
                {"building_function": "residential", "building_type": "Apartment",
                 "calibration_stage": "mid_calibration",
                 "min_area": 0, "max_area": 1000, "min_perimeter": 0, "max_perimeter": 500,
                 "perimeter_depth_min": 9.0, "perimeter_depth_max": 9.0}
            ]"#,
        )
        .unwrap();
        lookup.apply_rules(&rules);

        let apartment = lookup
            .get(BuildingFunction::Residential, "Apartment", CalibrationStage::PreCalibration)
            .unwrap();
        assert_eq!(apartment.perimeter_depth_range, DepthRange::new(4.0, 5.0));
        assert!(apartment.has_core);

        let office = lookup
            .get(
                BuildingFunction::NonResidential,
                "Office Function",
                CalibrationStage::PostCalibration,
            )
            .unwrap();
        assert_eq!(office.perimeter_depth_range, DepthRange::new(1.0, 1.5));
        assert!(office.has_core);

        let garage = lookup
            .get(BuildingFunction::NonResidential, "Garage", CalibrationStage::PreCalibration)
            .unwrap();
        assert_eq!(garage.perimeter_depth_range, DepthRange::fixed(2.0));
        assert!(!garage.has_core);
        assert_eq!(lookup.len(), 31);
    }
}
