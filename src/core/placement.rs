//! Placement records and solutions.
//!
//! Every accepted placement is recorded as a [`Placement`]. The ordered
//! list of them is the game's [`Solution`], which is what gets handed to an
//! external submission pathway and what [`crate::engine::verify_solution`]
//! replays.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;
use super::tile::{Rotation, Tile, TileTypeId};

/// One accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Cell the tile went into.
    pub coord: Coord,

    /// Orientation it was placed with.
    pub rotation: Rotation,

    /// Type the generator dealt for this move.
    pub tile_type: TileTypeId,
}

impl Placement {
    #[must_use]
    pub fn new(coord: Coord, rotation: Rotation, tile_type: TileTypeId) -> Self {
        Self {
            coord,
            rotation,
            tile_type,
        }
    }

    /// The tile this placement put on the board.
    #[must_use]
    pub fn tile(&self) -> Tile {
        Tile::new(self.tile_type, self.rotation)
    }
}

/// Errors from the binary solution codec.
#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("failed to encode solution: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode solution: {0}")]
    Decode(#[source] bincode::Error),
}

/// Ordered record of the placements made in a game.
///
/// Backed by a persistent vector, so taking a copy from a live engine
/// is O(1). Serialized as a plain sequence and decoded through `Vec`, whose
/// preallocation is capped regardless of the length prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Placement>", into = "Vec<Placement>")]
pub struct Solution {
    placements: Vector<Placement>,
}

impl Solution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, placement: Placement) {
        self.placements.push_back(placement);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.placements.clear();
    }

    /// Serialize to the opaque byte form used for submission.
    pub fn encode(&self) -> Result<Vec<u8>, SolutionError> {
        bincode::serialize(self).map_err(SolutionError::Encode)
    }

    /// Parse the byte form produced by [`Solution::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SolutionError> {
        bincode::deserialize(bytes).map_err(SolutionError::Decode)
    }
}

impl FromIterator<Placement> for Solution {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Placement>> for Solution {
    fn from(placements: Vec<Placement>) -> Self {
        placements.into_iter().collect()
    }
}

impl From<Solution> for Vec<Placement> {
    fn from(solution: Solution) -> Self {
        solution.placements.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Placement;
    type IntoIter = im::vector::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
