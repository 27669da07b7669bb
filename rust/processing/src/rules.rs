// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry rules keyed on building type and size brackets.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lookup::{BuildingFunction, CalibrationStage, DepthRange};

/// One row of a geometry rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRule {
    pub building_function: String,
    /// Empty matches every type.
    #[serde(default)]
    pub building_type: String,
    /// Absent or empty matches every stage.
    #[serde(default)]
    pub calibration_stage: Option<String>,
    pub min_area: f64,
    pub max_area: f64,
    pub min_perimeter: f64,
    pub max_perimeter: f64,
    pub perimeter_depth_min: f64,
    pub perimeter_depth_max: f64,
    /// `None` leaves the core flag as it was.
    #[serde(default)]
    pub has_core_value: Option<bool>,
}

impl GeometryRule {
    /// Parses a JSON array of rules.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The rule's stage; `Err` carries an unrecognised stage name.
    pub fn stage(&self) -> std::result::Result<Option<CalibrationStage>, String> {
        match self.calibration_stage.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => CalibrationStage::from_name(name)
                .map(Some)
                .ok_or_else(|| name.to_string()),
        }
    }

    pub fn depth_range(&self) -> DepthRange {
        DepthRange::new(self.perimeter_depth_min, self.perimeter_depth_max)
    }

    /// True if this rule covers the building.
    ///
    /// Function compares case-insensitively, type exactly; area and
    /// perimeter brackets are closed.
    pub fn matches(
        &self,
        function: BuildingFunction,
        subtype: &str,
        stage: CalibrationStage,
        area: f64,
        perimeter: f64,
    ) -> bool {
        if !self
            .building_function
            .trim()
            .eq_ignore_ascii_case(function.as_str())
        {
            return false;
        }
        let rule_type = self.building_type.trim();
        if !rule_type.is_empty() && rule_type != subtype {
            return false;
        }
        match self.stage() {
            Ok(Some(rule_stage)) if rule_stage != stage => return false,
            Err(_) => return false,
            _ => {}
        }
        (self.min_area..=self.max_area).contains(&area)
            && (self.min_perimeter..=self.max_perimeter).contains(&perimeter)
    }
}

/// The last rule covering the building, if any.
pub fn pick_rule<'a>(
    rules: &'a [GeometryRule],
    function: BuildingFunction,
    subtype: &str,
    stage: CalibrationStage,
    area: f64,
    perimeter: f64,
) -> Option<&'a GeometryRule> {
    rules
        .iter()
        .rev()
        .find(|rule| rule.matches(function, subtype, stage, area, perimeter))
}
