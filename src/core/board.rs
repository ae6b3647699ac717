//! The N x N playing grid.
//!
//! `Board` only hands out copies of its cells. The engine is the single
//! writer; renderers work from [`Board::tile_at`] or a cloned snapshot.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::tile::Tile;

/// Square grid of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
    occupied: usize,
}

impl Board {
    /// Create an all-empty `size` x `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");

        Self {
            size,
            cells: vec![Tile::EMPTY; size * size],
            occupied: 0,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Copy of the cell at `coord`. Off-board coordinates read as empty.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Tile {
        coord
            .index(self.size)
            .map(|i| self.cells[i])
            .unwrap_or(Tile::EMPTY)
    }

    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.tile_at(coord).is_empty()
    }

    /// True if any edge-adjacent on-board cell holds a tile.
    #[must_use]
    pub fn has_neighbour(&self, coord: Coord) -> bool {
        coord
            .neighbours(self.size)
            .iter()
            .any(|&(_, n)| self.is_occupied(n))
    }

    /// Write a tile into an empty on-board cell.
    ///
    /// Returns `false` (and changes nothing) if the cell is off the board,
    /// already occupied, or `tile` is the empty sentinel. Callers are
    /// expected to have validated the placement already.
    pub(crate) fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        let Some(i) = coord.index(self.size) else {
            return false;
        };
        if tile.is_empty() || !self.cells[i].is_empty() {
            return false;
        }
        self.cells[i] = tile;
        self.occupied += 1;
        true
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Coord::from_index(i, size), t))
    }

    /// Iterate over occupied cells only, row-major.
    pub fn placed(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.iter().filter(|(_, t)| !t.is_empty())
    }

    /// Copy of the grid as rows of tiles.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(<[Tile]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::{Rotation, TileTypeId};

    fn tile(id: i8) -> Tile {
        Tile::new(TileTypeId::new(id), Rotation::NONE)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(8);
        assert_eq!(board.size(), 8);
        assert_eq!(board.capacity(), 64);
        assert_eq!(board.occupied(), 0);
        assert!(board.iter().all(|(_, t)| t.is_empty()));
    }

    #[test]
    #[should_panic(expected = "Board must have at least one cell")]
    fn test_zero_size_board() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_set_and_read() {
        let mut board = Board::new(4);
        assert!(board.set(Coord::new(1, 2), tile(3)));
        assert_eq!(board.tile_at(Coord::new(1, 2)), tile(3));
        assert_eq!(board.occupied(), 1);
        assert_eq!(board.rows()[2][1], tile(3));
    }

    #[test]
    fn test_set_rejects_occupied_and_off_board() {
        let mut board = Board::new(4);
        assert!(board.set(Coord::new(0, 0), tile(1)));
        assert!(!board.set(Coord::new(0, 0), tile(2)));
        assert!(!board.set(Coord::new(4, 0), tile(2)));
        assert!(!board.set(Coord::new(1, 0), Tile::EMPTY));
        assert_eq!(board.tile_at(Coord::new(0, 0)), tile(1));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_off_board_reads_empty() {
        let board = Board::new(4);
        assert_eq!(board.tile_at(Coord::new(-1, 0)), Tile::EMPTY);
        assert_eq!(board.tile_at(Coord::new(0, 4)), Tile::EMPTY);
    }

    #[test]
    fn test_has_neighbour_ignores_diagonals() {
        let mut board = Board::new(8);
        board.set(Coord::new(2, 2), tile(0));

        assert!(board.has_neighbour(Coord::new(2, 3)));
        assert!(board.has_neighbour(Coord::new(1, 2)));
        assert!(!board.has_neighbour(Coord::new(3, 3)));
        assert!(!board.has_neighbour(Coord::new(5, 5)));
    }

    #[test]
    fn test_full() {
        let mut board = Board::new(2);
        for i in 0..4 {
            assert!(!board.is_full());
            board.set(Coord::from_index(i, 2), tile(7));
        }
        assert!(board.is_full());
        assert_eq!(board.placed().count(), 4);
    }
}
