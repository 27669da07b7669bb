// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keys and discriminants for building topology entities.
//!
//! Zones and surfaces live in slot maps owned by the [`crate::Building`]; the
//! keys below are their stable, type-safe handles. Partition pairing stores
//! the partner's [`SurfaceKey`], so a pairing can never name a surface of the
//! wrong type.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key for a thermal zone.
    pub struct ZoneKey;

    /// Key for a zone-enclosing surface (floor, wall, ceiling or roof).
    pub struct SurfaceKey;
}

/// What part of a zone's envelope a surface is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SurfaceKind {
    Floor,
    Wall,
    Ceiling,
    Roof,
}

impl SurfaceKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Floor => "Floor",
            SurfaceKind::Wall => "Wall",
            SurfaceKind::Ceiling => "Ceiling",
            SurfaceKind::Roof => "Roof",
        }
    }

    /// True for the upward-facing closing surface of a zone.
    pub fn is_upper(&self) -> bool {
        matches!(self, SurfaceKind::Ceiling | SurfaceKind::Roof)
    }
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_kind_names() {
        assert_eq!(SurfaceKind::Floor.as_str(), "Floor");
        assert_eq!(SurfaceKind::Wall.as_str(), "Wall");
        assert_eq!(SurfaceKind::Ceiling.to_string(), "Ceiling");
        assert_eq!(SurfaceKind::Roof.to_string(), "Roof");
    }

    #[test]
    fn upper_kinds() {
        assert!(SurfaceKind::Ceiling.is_upper());
        assert!(SurfaceKind::Roof.is_upper());
        assert!(!SurfaceKind::Floor.is_upper());
        assert!(!SurfaceKind::Wall.is_upper());
    }
}
