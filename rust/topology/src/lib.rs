// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Zonegen Topology
//!
//! Thermal zone and surface topology for whole-building energy models.
//!
//! A [`Building`] owns every zone and surface in slot-map arenas. Each floor
//! is either one zone or four perimeter strips around a core; every zone is
//! enclosed by exactly six surfaces `[Floor, Wall0..Wall3, Ceiling|Roof]`.
//! Interzone partitions pair two surfaces by key, symmetrically: perimeter
//! interior walls with core walls on the same floor, and ceilings with the
//! floors of the storey above.
//!
//! ```
//! use zonegen_topology::{assemble_building, BuildingSpec};
//!
//! let mut spec = BuildingSpec::new(600.0, 100.0);
//! spec.num_floors = 2;
//! spec.has_core = true;
//! spec.perimeter_depth = 3.0;
//!
//! let building = assemble_building(&spec).unwrap();
//! assert_eq!(building.zone_count(), 10);
//! building.validate().unwrap();
//! ```

pub mod assembler;
pub mod builders;
pub mod building;
pub mod error;
pub mod keys;
pub mod linking;
pub mod matching;
pub mod serialization;
pub mod surface;
pub mod validate;
pub mod zone;

pub use assembler::{assemble_building, resolve_wall_height, BuildingSpec, DEFAULT_FLOOR_HEIGHT};
pub use builders::ZoneInput;
pub use building::Building;
pub use error::{Error, Result};
pub use keys::{SurfaceKey, SurfaceKind, ZoneKey};
pub use linking::core_wall_for;
pub use matching::{ZoneMatching, DEFAULT_CENTROID_TOLERANCE};
pub use serialization::{BuildingSnapshot, FloorSnapshot, SurfaceSnapshot, ZoneSnapshot};
pub use surface::{BoundaryCondition, EdgeType, Surface};
pub use zone::{Floor, Zone, ZoneRole};
