// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Zonegen Processing
//!
//! Turns building-attribute records into zone/surface topologies.
//!
//! Each record's perimeter depth and core flag are resolved from a geometry
//! lookup table, optional size-bracketed rules and explicit overrides, then
//! handed to the topology assembler. Batches run in parallel with `rayon`.
//!
//! ```
//! use zonegen_processing::{generate_building, BuildingRecord, GeneratorConfig,
//!     GeometryParameterResolver};
//!
//! let record = BuildingRecord {
//!     building_function: "non_residential".into(),
//!     non_residential_type: Some("Office Function".into()),
//!     area: 600.0,
//!     perimeter: 100.0,
//!     num_floors: 3,
//!     ..Default::default()
//! };
//! let generated = generate_building(
//!     &record,
//!     &GeometryParameterResolver::default(),
//!     &GeneratorConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(generated.building.zone_count(), 15);
//! ```

pub mod config;
pub mod error;
pub mod lookup;
pub mod overrides;
pub mod pipeline;
pub mod record;
pub mod resolver;
pub mod rules;
pub mod strategy;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use lookup::{BuildingFunction, CalibrationStage, DepthRange, GeometryLookup, LookupEntry};
pub use overrides::{GeometryOverride, OverrideEffect, OverrideParam};
pub use pipeline::{
    building_spec, generate_building, generate_building_with_rng, generate_buildings,
    try_generate_buildings, GeneratedBuilding,
};
pub use record::BuildingRecord;
pub use resolver::{GeometryParameterResolver, ParameterSource, ResolvedGeometry};
pub use rules::{pick_rule, GeometryRule};
pub use strategy::PickStrategy;
