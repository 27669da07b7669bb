// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for parameter resolution and generation.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] zonegen_geometry::Error),

    #[error(transparent)]
    Topology(#[from] zonegen_topology::Error),

    /// A building record carries a value the generator cannot use.
    #[error("invalid building record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rule or override table could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
