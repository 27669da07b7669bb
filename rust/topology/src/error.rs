// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology operations.

use crate::keys::{SurfaceKey, ZoneKey};

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or checking a building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Footprint input was rejected.
    #[error(transparent)]
    Geometry(#[from] zonegen_geometry::Error),

    /// A building needs at least one floor.
    #[error("number of floors must be at least 1, got {0}")]
    InvalidFloorCount(usize),

    /// A per-floor height must be positive and finite.
    #[error("wall height must be positive, got {0}")]
    InvalidWallHeight(f64),

    /// Surface key not found in the building.
    #[error("surface not found: {0:?}")]
    SurfaceNotFound(SurfaceKey),

    /// Zone key not found in the building.
    #[error("zone not found: {0:?}")]
    ZoneNotFound(ZoneKey),

    /// Zone names must be unique within a building.
    #[error("duplicate zone name '{0}'")]
    DuplicateName(String),

    /// A surface cannot be paired with itself.
    #[error("surface '{0}' cannot be paired with itself")]
    SelfPartition(String),

    /// A zone's surfaces do not follow [Floor, Wall x4, Ceiling|Roof].
    #[error("zone '{zone}' has a malformed surface list: {reason}")]
    MalformedZone { zone: String, reason: String },

    /// A partition names a surface that does not exist.
    #[error("surface '{0}' is paired with a missing surface")]
    DanglingPartition(String),

    /// A partition's partner does not point back.
    #[error("surface '{surface}' is paired with '{partner}', which is not paired back")]
    AsymmetricPartition { surface: String, partner: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
