// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving footprint geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid geometry input: area={area}, perimeter={perimeter} (both must be positive)")]
    InvalidGeometryInput { area: f64, perimeter: f64 },

    #[error("Degenerate polygon: {0} vertices (at least 3 required)")]
    DegeneratePolygon(usize),
}
