//! The fixed wheel palette.
//!
//! Palette order defines wedge order: entry `i` is drawn in the angular span
//! `[i * step, (i + 1) * step)`. The same order is used to find which wedge a
//! previously chosen color belongs to.

use std::fmt;

use crate::color::Color;

/// Wheel colors, in wedge order.
///
/// Black, gray and white are spelled out as RGB triples so that lookups
/// against colors produced elsewhere compare like with like.
pub const PALETTE: [Color; 11] = [
    Color::rgb(1.0, 0.0, 0.0), // red
    Color::rgb(1.0, 0.5, 0.0), // orange
    Color::rgb(1.0, 1.0, 0.0), // yellow
    Color::rgb(0.0, 1.0, 0.0), // green
    Color::rgb(0.0, 1.0, 1.0), // cyan
    Color::rgb(0.0, 0.0, 1.0), // blue
    Color::rgb(0.5, 0.0, 0.5), // purple
    Color::rgb(0.6, 0.4, 0.2), // brown
    Color::rgb(0.0, 0.0, 0.0), // black
    Color::rgb(0.5, 0.5, 0.5), // gray
    Color::rgb(1.0, 1.0, 1.0), // white
];

const NAMES: [&str; 11] = [
    "red", "orange", "yellow", "green", "cyan", "blue", "purple", "brown", "black", "gray", "white",
];

/// Number of wedges on the wheel
pub const WEDGE_COUNT: usize = PALETTE.len();

/// Index of a wedge, always within `[0, WEDGE_COUNT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WedgeIndex(usize);

impl WedgeIndex {
    /// The first wedge (red), also the fallback selection.
    pub const FIRST: Self = Self(0);

    /// Validate a raw index.
    ///
    /// Out-of-range values yield `None`, which callers treat as "no highlight".
    pub fn new(index: usize) -> Option<Self> {
        (index < WEDGE_COUNT).then_some(Self(index))
    }

    /// Build from an index the caller has already clamped.
    pub(crate) fn clamped(index: usize) -> Self {
        Self(index.min(WEDGE_COUNT - 1))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Palette color of this wedge
    pub fn color(self) -> Color {
        PALETTE[self.0]
    }

    /// Human readable color name, used in logs
    pub fn name(self) -> &'static str {
        NAMES[self.0]
    }

    /// All wedges in palette order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..WEDGE_COUNT).map(Self)
    }
}

impl fmt::Display for WedgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

/// Find the wedge whose color equals `color` exactly.
pub fn index_of(color: Color) -> Option<WedgeIndex> {
    PALETTE.iter().position(|c| *c == color).map(WedgeIndex)
}

/// Selection to show when the wheel opens for `current`.
///
/// Colors that are not on the palette fall back to the first wedge.
pub fn initial_selection(current: Color) -> WedgeIndex {
    index_of(current).unwrap_or_else(|| {
        log::debug!("Color {:?} not on palette, selecting first wedge", current);
        WedgeIndex::FIRST
    })
}
