// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Perimeter/core decomposition of a floor footprint
//!
//! A floor is either one zone covering the whole footprint, or four perimeter
//! strips (front, right, rear, left) around an inner core. The core is the
//! inward offset of the footprint by the perimeter depth; when that offset
//! fails or the core is too small the floor silently stays a single zone.
//!
//! Vertex order of every quad here is load-bearing. Each perimeter quad is
//! built so its third edge (index 2) is the boundary with the core, and the
//! core quad is wound `[A2, D2, C2, B2]` so that core edge k lies on exactly
//! that boundary: Front↔3, Right↔2, Rear↔1, Left↔0.

use crate::offset::inward_offset;
use crate::polygon::{shoelace_area, Quad};

/// Cores with a smaller XY area (m²) are discarded
pub const MIN_CORE_AREA: f64 = 1e-3;

/// One of the four perimeter strips, named after the footprint edge it lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PerimeterSide {
    Front = 0,
    Right = 1,
    Rear = 2,
    Left = 3,
}

impl PerimeterSide {
    /// All sides in footprint edge order (A→B, B→C, C→D, D→A)
    pub const ALL: [PerimeterSide; 4] = [
        PerimeterSide::Front,
        PerimeterSide::Right,
        PerimeterSide::Rear,
        PerimeterSide::Left,
    ];

    /// Index of the footprint edge this strip lies on
    pub fn edge_index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerimeterSide::Front => "Front",
            PerimeterSide::Right => "Right",
            PerimeterSide::Rear => "Rear",
            PerimeterSide::Left => "Left",
        }
    }
}

impl std::fmt::Display for PerimeterSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one floor footprint is split into zones
#[derive(Debug, Clone, PartialEq)]
pub enum FloorLayout {
    /// One zone over the whole footprint
    SingleZone { base: Quad },
    /// Four perimeter strips plus a core
    PerimeterCore { base: Quad, core: Quad },
}

impl FloorLayout {
    /// Decide the layout for `base`
    ///
    /// Falls back to [`FloorLayout::SingleZone`] when `has_core` is false, the
    /// depth is not a positive finite number, the offset fails, or the core
    /// area is below [`MIN_CORE_AREA`].
    pub fn decompose(base: &Quad, perimeter_depth: f64, has_core: bool) -> Self {
        if has_core {
            if let Some(core) = core_footprint(base, perimeter_depth) {
                return FloorLayout::PerimeterCore { base: *base, core };
            }
        }
        FloorLayout::SingleZone { base: *base }
    }

    pub fn has_core(&self) -> bool {
        matches!(self, FloorLayout::PerimeterCore { .. })
    }

    pub fn base(&self) -> &Quad {
        match self {
            FloorLayout::SingleZone { base } | FloorLayout::PerimeterCore { base, .. } => base,
        }
    }

    /// Base quad of a perimeter strip; `None` for a single-zone layout
    ///
    /// Front `[A, B, B2, A2]`, Right `[B, C, C2, B2]`, Rear `[C, D, D2, C2]`,
    /// Left `[D, A, A2, D2]`.
    pub fn perimeter_quad(&self, side: PerimeterSide) -> Option<Quad> {
        let FloorLayout::PerimeterCore { base, core } = self else {
            return None;
        };
        let i = side.edge_index();
        let j = (i + 1) % 4;
        Some([base[i], base[j], core[j], core[i]])
    }

    /// Core base quad wound `[A2, D2, C2, B2]`; `None` for a single-zone layout
    pub fn core_quad(&self) -> Option<Quad> {
        match self {
            FloorLayout::PerimeterCore { core, .. } => Some([core[0], core[3], core[2], core[1]]),
            FloorLayout::SingleZone { .. } => None,
        }
    }
}

/// Inward offset of `base` by `perimeter_depth` if it yields a usable core
pub fn core_footprint(base: &Quad, perimeter_depth: f64) -> Option<Quad> {
    if !(perimeter_depth.is_finite() && perimeter_depth > 0.0) {
        return None;
    }
    let core = inward_offset(base, perimeter_depth)?;
    if shoelace_area(&core) < MIN_CORE_AREA {
        return None;
    }
    Some(core)
}
