// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-building perimeter depth and core flag.
//!
//! Layers in increasing priority: lookup table (or its fallback), the last
//! matching rule, then every matching override in order. The pick strategy
//! reduces the final range to one depth.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lookup::{
    BuildingFunction, CalibrationStage, DepthRange, GeometryLookup, FALLBACK_ENTRY,
};
use crate::overrides::{GeometryOverride, OverrideEffect};
use crate::record::BuildingRecord;
use crate::rules::{pick_rule, GeometryRule};
use crate::strategy::PickStrategy;

/// Layer that last set a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// No lookup entry; built-in fallback.
    Default,
    Lookup,
    Rule,
    Override,
}

/// Resolved geometry parameters with their provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    pub building_id: i64,
    pub function: BuildingFunction,
    pub subtype: String,
    pub perimeter_depth: f64,
    pub perimeter_depth_range: DepthRange,
    pub has_core: bool,
    pub depth_source: ParameterSource,
    pub core_source: ParameterSource,
}

/// Resolves geometry parameters from a lookup table, rules and overrides.
#[derive(Debug, Clone)]
pub struct GeometryParameterResolver {
    lookup: GeometryLookup,
    rules: Vec<GeometryRule>,
    overrides: Vec<GeometryOverride>,
}

impl Default for GeometryParameterResolver {
    fn default() -> Self {
        Self::new(GeometryLookup::builtin())
    }
}

impl GeometryParameterResolver {
    pub fn new(lookup: GeometryLookup) -> Self {
        Self {
            lookup,
            rules: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<GeometryRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<GeometryOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn lookup(&self) -> &GeometryLookup {
        &self.lookup
    }

    pub fn rules(&self) -> &[GeometryRule] {
        &self.rules
    }

    pub fn overrides(&self) -> &[GeometryOverride] {
        &self.overrides
    }

    /// Resolves `(perimeter_depth, has_core)` for one building.
    pub fn resolve<R: Rng>(
        &self,
        record: &BuildingRecord,
        stage: CalibrationStage,
        strategy: PickStrategy,
        rng: &mut R,
    ) -> ResolvedGeometry {
        let function = record.function();
        let subtype = record.subtype();

        let (entry, source) = match self.lookup.get(function, subtype, stage) {
            Some(entry) => (*entry, ParameterSource::Lookup),
            None => {
                tracing::debug!(
                    building = record.id,
                    function = %function,
                    subtype,
                    stage = stage.as_str(),
                    "no lookup entry, using fallback range"
                );
                (FALLBACK_ENTRY, ParameterSource::Default)
            }
        };
        let mut range = entry.perimeter_depth_range;
        let mut has_core = entry.has_core;
        let (mut depth_source, mut core_source) = (source, source);

        if let Some(rule) = pick_rule(
            &self.rules,
            function,
            subtype,
            stage,
            record.area,
            record.perimeter,
        ) {
            range = rule.depth_range();
            depth_source = ParameterSource::Rule;
            if let Some(value) = rule.has_core_value {
                has_core = value;
                core_source = ParameterSource::Rule;
            }
        }

        for row in self
            .overrides
            .iter()
            .filter(|row| row.applies_to(record.id, subtype))
        {
            match row.effect() {
                Some(OverrideEffect::DepthRange(r)) => {
                    range = r;
                    depth_source = ParameterSource::Override;
                }
                Some(OverrideEffect::HasCore(value)) => {
                    has_core = value;
                    core_source = ParameterSource::Override;
                }
                None => {}
            }
        }

        let perimeter_depth = strategy.pick(range, rng);
        tracing::debug!(
            building = record.id,
            perimeter_depth,
            has_core,
            depth_source = ?depth_source,
            core_source = ?core_source,
            "resolved geometry parameters"
        );

        ResolvedGeometry {
            building_id: record.id,
            function,
            subtype: subtype.to_string(),
            perimeter_depth,
            perimeter_depth_range: range,
            has_core,
            depth_source,
            core_source,
        }
    }
}
