// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building-attribute records as delivered by the upstream data source.
//!
//! Field names accept the source columns (`ogc_fid`, `gem_bouwlagen`,
//! `gem_hoogte`, `building_orientation`) as aliases. Missing fields take the
//! same defaults the generator has always used.

use serde::{Deserialize, Serialize};
use zonegen_topology::EdgeType;

use crate::error::{Error, Result};
use crate::lookup::BuildingFunction;

fn default_function() -> String {
    "residential".to_string()
}

fn default_area() -> f64 {
    100.0
}

fn default_perimeter() -> f64 {
    40.0
}

fn default_floors() -> usize {
    1
}

fn default_side() -> String {
    "facade".to_string()
}

/// One building's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(alias = "ogc_fid", default)]
    pub id: i64,
    #[serde(default = "default_function")]
    pub building_function: String,
    #[serde(default)]
    pub residential_type: Option<String>,
    #[serde(default)]
    pub non_residential_type: Option<String>,
    #[serde(default = "default_area")]
    pub area: f64,
    #[serde(default = "default_perimeter")]
    pub perimeter: f64,
    /// Degrees.
    #[serde(alias = "building_orientation", default)]
    pub orientation: f64,
    #[serde(alias = "gem_bouwlagen", default = "default_floors")]
    pub num_floors: usize,
    #[serde(alias = "gem_hoogte", default)]
    pub total_height: Option<f64>,
    #[serde(default = "default_side")]
    pub north_side: String,
    #[serde(default = "default_side")]
    pub east_side: String,
    #[serde(default = "default_side")]
    pub south_side: String,
    #[serde(default = "default_side")]
    pub west_side: String,
}

impl Default for BuildingRecord {
    fn default() -> Self {
        Self {
            id: 0,
            building_function: default_function(),
            residential_type: None,
            non_residential_type: None,
            area: default_area(),
            perimeter: default_perimeter(),
            orientation: 0.0,
            num_floors: default_floors(),
            total_height: None,
            north_side: default_side(),
            east_side: default_side(),
            south_side: default_side(),
            west_side: default_side(),
        }
    }
}

impl BuildingRecord {
    /// Parses a JSON array of records.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn function(&self) -> BuildingFunction {
        BuildingFunction::from_label(&self.building_function)
    }

    /// The record's residential or non-residential type, or the function's
    /// default type.
    pub fn subtype(&self) -> &str {
        let function = self.function();
        let given = match function {
            BuildingFunction::Residential => self.residential_type.as_deref(),
            BuildingFunction::NonResidential => self.non_residential_type.as_deref(),
        };
        given.unwrap_or(function.default_subtype())
    }

    /// Edge classifications for footprint edges A→B, B→C, C→D, D→A, taken
    /// from the north, east, south and west columns.
    pub fn edge_types(&self) -> [EdgeType; 4] {
        [
            &self.north_side,
            &self.east_side,
            &self.south_side,
            &self.west_side,
        ]
        .map(|label| EdgeType::from_label(label))
    }

    /// Rejects values the footprint solver does not cover.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRecord {
            id: self.id,
            reason,
        };
        if !self.orientation.is_finite() {
            return Err(invalid(format!("orientation {} is not finite", self.orientation)));
        }
        if let Some(height) = self.total_height {
            if !(height.is_finite() && height > 0.0) {
                return Err(invalid(format!("total height {height} is not positive")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_column_aliases() {
        let json = r#"[{
            "ogc_fid": 4210,
            "building_function": "Non_Residential",
            "non_residential_type": "Retail Function",
            "area": 250.0,
            "perimeter": 70.0,
            "building_orientation": 12.5,
            "gem_bouwlagen": 3,
            "gem_hoogte": 9.6,
            "east_side": "shared"
        }]"#;
        let records = BuildingRecord::list_from_json(json).unwrap();
        let record = &records[0];
        assert_eq!(record.id, 4210);
        assert_eq!(record.num_floors, 3);
        assert_eq!(record.total_height, Some(9.6));
        assert_eq!(record.orientation, 12.5);
        assert_eq!(record.function(), BuildingFunction::NonResidential);
        assert_eq!(record.subtype(), "Retail Function");
        assert_eq!(
            record.edge_types(),
            [EdgeType::Facade, EdgeType::Shared, EdgeType::Facade, EdgeType::Facade]
        );
    }

    #[test]
    fn defaults_for_missing_fields() {
        let record: BuildingRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, BuildingRecord::default());
        assert_eq!(record.area, 100.0);
        assert_eq!(record.perimeter, 40.0);
        assert_eq!(record.function(), BuildingFunction::Residential);
        assert_eq!(record.subtype(), "Two-and-a-half-story House");
    }

    #[test]
    fn non_residential_default_subtype() {
        let record = BuildingRecord {
            building_function: "office".to_string(),
            residential_type: Some("Apartment".to_string()),
            ..Default::default()
        };
        assert_eq!(record.subtype(), "Office Function");
    }

    #[test]
    fn validation() {
        assert!(BuildingRecord::default().validate().is_ok());

        let record = BuildingRecord {
            total_height: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(record.validate(), Err(Error::InvalidRecord { .. })));

        let record = BuildingRecord {
            orientation: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(record.validate(), Err(Error::InvalidRecord { .. })));
    }
}
