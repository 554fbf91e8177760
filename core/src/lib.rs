#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use grid::*;
pub use placement::*;
pub use tile::*;
pub use types::*;

mod error;
mod grid;
mod placement;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    pub bombs: CellCount,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord2, bombs: CellCount) -> Self {
        Self { size, bombs }
    }

    /// Rejects bad arguments eagerly instead of clamping them.
    pub fn new(size: Coord2, bombs: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 || bombs > mult(size.0, size.1) {
            return Err(GridError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(size, bombs))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Where the bombs are, independent of any reveal state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BombLayout {
    bombs: Array2<bool>,
    count: CellCount,
}

impl BombLayout {
    pub fn from_bomb_mask(bombs: Array2<bool>) -> Self {
        let count = bombs
            .iter()
            .filter(|&&is_bomb| is_bomb)
            .count()
            .try_into()
            .unwrap();
        Self { bombs, count }
    }

    /// Builds a layout with bombs at exactly the given positions. This is the
    /// deterministic construction path; gameplay layouts come from a
    /// [`BombPlacer`].
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut bombs: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in bomb_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GridError::InvalidCoords);
            }
            bombs[coords.to_nd_index()] = true;
        }

        Ok(Self::from_bomb_mask(bombs))
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::new_unchecked(self.size(), self.count)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.bombs.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.bombs.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.count
    }

    pub fn bomb_count(&self) -> CellCount {
        self.count
    }

    pub fn contains_bomb(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        moore_neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Coord2> for BombLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.bombs[coords.to_nd_index()]
    }
}
