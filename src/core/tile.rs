//! Tiles: a type from the fixed catalog plus a rotation.
//!
//! ## Catalog
//!
//! Every tile type has four edges, each `Blank`, `Path` or `Water`,
//! listed clockwise from the top:
//!
//! | id | name           | N     | E     | S     | W     |
//! |----|----------------|-------|-------|-------|-------|
//! | 0  | path straight  | Path  | Blank | Path  | Blank |
//! | 1  | path corner    | Path  | Path  | Blank | Blank |
//! | 2  | path junction  | Path  | Path  | Path  | Blank |
//! | 3  | path crossing  | Path  | Path  | Path  | Path  |
//! | 4  | stream         | Water | Blank | Water | Blank |
//! | 5  | stream bend    | Water | Water | Blank | Blank |
//! | 6  | bridge         | Water | Path  | Water | Path  |
//! | 7  | meadow         | Blank | Blank | Blank | Blank |
//!
//! ## Rotation
//!
//! A rotation of `r` turns the tile `r * 90` degrees clockwise, so the edge
//! that ends up facing direction `d` is the unrotated edge at `d - r`.
//!
//! ```
//! use pop_puzzle::core::{Direction, EdgeKind, Rotation, Tile, TileTypeId};
//!
//! // A path corner opens north and east; a quarter turn opens east and south.
//! let tile = Tile::new(TileTypeId::new(1), Rotation::QUARTER);
//! assert_eq!(tile.edge(Direction::North), EdgeKind::Blank);
//! assert_eq!(tile.edge(Direction::East), EdgeKind::Path);
//! assert_eq!(tile.edge(Direction::South), EdgeKind::Path);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Direction;

/// Index into the tile catalog. `-1` is the empty sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileTypeId(pub i8);

impl TileTypeId {
    /// Sentinel for "no tile". Distinct from every catalog entry.
    pub const EMPTY: Self = Self(-1);

    #[must_use]
    pub const fn new(id: i8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 < 0
    }

    /// Catalog entry for this type, if it names one.
    #[must_use]
    pub fn definition(self) -> Option<&'static TileDef> {
        if self.is_empty() {
            None
        } else {
            TILE_CATALOG.get(self.0 as usize)
        }
    }
}

impl std::fmt::Display for TileTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "TileType(empty)")
        } else {
            write!(f, "TileType({})", self.0)
        }
    }
}

/// Orientation in quarter turns clockwise, always in `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rotation(u8);

/// A raw rotation outside `0..4`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("rotation {0} is not one of 0, 1, 2, 3")]
pub struct InvalidRotation(pub u8);

impl Rotation {
    pub const NONE: Self = Self(0);
    pub const QUARTER: Self = Self(1);
    pub const HALF: Self = Self(2);
    pub const THREE_QUARTERS: Self = Self(3);

    /// Build a rotation from a raw quarter-turn count.
    ///
    /// Returns `None` outside `0..4`.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Option<Self> {
        if quarter_turns < 4 {
            Some(Self(quarter_turns))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    /// One more quarter turn clockwise, wrapping at a full turn.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 4)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidRotation(value))
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

/// What runs across a tile edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Blank,
    Path,
    Water,
}

impl EdgeKind {
    /// Blank edges never link tiles together.
    #[must_use]
    pub const fn is_linkable(self) -> bool {
        !matches!(self, EdgeKind::Blank)
    }
}

/// Static description of a tile type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDef {
    pub id: TileTypeId,
    pub name: &'static str,
    /// Unrotated edges, indexed by [`Direction::slot`].
    pub edges: [EdgeKind; 4],
}

impl TileDef {
    const fn new(id: i8, name: &'static str, edges: [EdgeKind; 4]) -> Self {
        Self {
            id: TileTypeId(id),
            name,
            edges,
        }
    }

    /// Number of non-blank edges.
    #[must_use]
    pub fn open_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.is_linkable()).count()
    }
}

use EdgeKind::{Blank as B, Path as P, Water as W};

/// The fixed set of tile types.
pub const TILE_CATALOG: [TileDef; 8] = [
    TileDef::new(0, "path straight", [P, B, P, B]),
    TileDef::new(1, "path corner", [P, P, B, B]),
    TileDef::new(2, "path junction", [P, P, P, B]),
    TileDef::new(3, "path crossing", [P, P, P, P]),
    TileDef::new(4, "stream", [W, B, W, B]),
    TileDef::new(5, "stream bend", [W, W, B, B]),
    TileDef::new(6, "bridge", [W, P, W, P]),
    TileDef::new(7, "meadow", [B, B, B, B]),
];

/// A board cell's content: a tile type and its orientation.
///
/// Unoccupied cells hold [`Tile::EMPTY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileTypeId,
    pub rotation: Rotation,
}

impl Tile {
    pub const EMPTY: Self = Self {
        tile_type: TileTypeId::EMPTY,
        rotation: Rotation::NONE,
    };

    #[must_use]
    pub const fn new(tile_type: TileTypeId, rotation: Rotation) -> Self {
        Self { tile_type, rotation }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tile_type.is_empty()
    }

    /// The edge this tile presents towards `dir`, after rotation.
    ///
    /// Empty tiles and unknown types present blank edges everywhere.
    #[must_use]
    pub fn edge(&self, dir: Direction) -> EdgeKind {
        match self.tile_type.definition() {
            Some(def) => {
                let slot = (dir.slot() + 4 - self.rotation.quarter_turns() as usize) % 4;
                def.edges[slot]
            }
            None => EdgeKind::Blank,
        }
    }

    /// All four rotated edges, indexed by [`Direction::slot`].
    #[must_use]
    pub fn edges(&self) -> [EdgeKind; 4] {
        Direction::ALL.map(|d| self.edge(d))
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::EMPTY
    }
}
