use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: `Playing -> Lost` on revealing a bomb, `Playing -> Won`
/// on revealing the last safe cell. `Lost` and `Won` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridState {
    Playing,
    Lost,
    Won,
}

impl GridState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::Playing
    }
}

/// The sole stateful entity: fixed cell values plus a monotonically growing
/// reveal mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineGrid {
    values: Array2<Cell>,
    revealed: Array2<bool>,
    bomb_count: CellCount,
    revealed_count: CellCount,
    state: GridState,
}

impl MineGrid {
    /// Precomputes every safe cell's neighbor-bomb count from the layout;
    /// values never change after this.
    pub fn new(layout: BombLayout) -> Self {
        let size = layout.size();
        let values = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if layout.contains_bomb(coords) {
                Cell::Bomb
            } else {
                Cell::Clear(layout.adjacent_bomb_count(coords))
            }
        });

        Self {
            values,
            revealed: Array2::default(size.to_nd_index()),
            bomb_count: layout.bomb_count(),
            revealed_count: 0,
            state: GridState::default(),
        }
    }

    pub fn generate(config: GridConfig, seed: u64) -> Self {
        Self::new(SequentialPlacer::new(seed).place(config))
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn lost(&self) -> bool {
        matches!(self.state, GridState::Lost)
    }

    pub fn won(&self) -> bool {
        matches!(self.state, GridState::Won)
    }

    pub fn done(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.values.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.values.len().try_into().unwrap()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.total_cells() - self.revealed_count
    }

    pub fn valid_position(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn value_at(&self, coords: Coord2) -> TileView {
        if !self.valid_position(coords) {
            return TileView::Invalid;
        }
        // Losing masks the entire board at the model layer; every position
        // reports the invalid sentinel until the grid is thrown away.
        if self.lost() {
            return TileView::Invalid;
        }
        if !self.revealed[coords.to_nd_index()] {
            return TileView::Hidden;
        }
        match self.values[coords.to_nd_index()] {
            Cell::Bomb => TileView::Bomb,
            Cell::Clear(count) => TileView::Open(count),
        }
    }

    /// Reveals a cell, flooding outward from blanks. Returns whether the game
    /// is still alive (`!lost`). Out-of-bounds coordinates and terminal
    /// states are no-ops.
    pub fn reveal(&mut self, coords: Coord2) -> bool {
        if self.state.is_terminal() {
            return !self.lost();
        }
        if !self.valid_position(coords) {
            return true;
        }

        self.mark_revealed(coords);
        if self.values[coords.to_nd_index()].is_blank() {
            self.flood_reveal(coords);
        }

        if self.values[coords.to_nd_index()].is_bomb() {
            log::debug!("bomb hit at {:?}", coords);
            self.state = GridState::Lost;
        } else if self.unrevealed_count() == self.bomb_count {
            log::debug!("all safe cells revealed");
            self.state = GridState::Won;
        }

        !self.lost()
    }

    fn mark_revealed(&mut self, coords: Coord2) {
        let revealed = &mut self.revealed[coords.to_nd_index()];
        if !*revealed {
            *revealed = true;
            self.revealed_count += 1;
        }
    }

    /// Breadth-first expansion over the connected blank region plus its
    /// numbered ring. The FIFO queue and the queued-marker array are the open
    /// and closed sets: a cell already revealed or already queued is never
    /// enqueued again.
    fn flood_reveal(&mut self, start: Coord2) {
        let size = self.size();
        let mut queued: Array2<bool> = Array2::default(size.to_nd_index());
        let mut queue = VecDeque::from([start]);
        queued[start.to_nd_index()] = true;
        log::trace!("flood reveal from {:?}", start);

        while let Some(coords) = queue.pop_front() {
            self.mark_revealed(coords);

            // only blanks expand; numbered cells form the boundary ring
            if !self.values[coords.to_nd_index()].is_blank() {
                continue;
            }

            for neighbor in moore_neighbors(coords, size) {
                let idx = neighbor.to_nd_index();
                if !self.revealed[idx] && !queued[idx] {
                    queued[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, bombs: &[Coord2]) -> MineGrid {
        MineGrid::new(BombLayout::from_bomb_coords(size, bombs).unwrap())
    }

    #[test]
    fn single_safe_cell_wins_immediately() {
        let mut grid = grid((1, 1), &[]);

        assert!(grid.reveal((0, 0)));
        assert!(grid.won());
        assert!(!grid.lost());
        assert!(grid.done());
        assert_eq!(grid.unrevealed_count(), 0);
    }

    #[test]
    fn all_bomb_board_loses_on_any_reveal() {
        let mut grid = grid((2, 2), &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        assert!(!grid.reveal((1, 0)));
        assert!(grid.lost());
        assert!(!grid.won());
    }

    #[test]
    fn corner_bomb_flood_reveals_all_safe_cells_and_wins() {
        let mut grid = grid((3, 3), &[(2, 2)]);

        assert!(grid.reveal((0, 0)));
        assert!(grid.won());
        assert_eq!(grid.unrevealed_count(), 1);
        assert_eq!(grid.value_at((0, 0)), TileView::Open(0));
        assert_eq!(grid.value_at((1, 1)), TileView::Open(1));
        assert_eq!(grid.value_at((2, 2)), TileView::Hidden);
    }

    #[test]
    fn flood_stops_at_the_numbered_ring() {
        // a full column of bombs splits the board in two
        let mut grid = grid((5, 3), &[(2, 0), (2, 1), (2, 2)]);

        assert!(grid.reveal((0, 0)));
        assert!(!grid.done());

        for y in 0..3 {
            assert_eq!(grid.value_at((0, y)), TileView::Open(0));
            assert!(matches!(grid.value_at((1, y)), TileView::Open(n) if n > 0));
            assert_eq!(grid.value_at((2, y)), TileView::Hidden);
            assert_eq!(grid.value_at((3, y)), TileView::Hidden);
            assert_eq!(grid.value_at((4, y)), TileView::Hidden);
        }
        assert_eq!(grid.unrevealed_count(), 9);
    }

    #[test]
    fn reveal_is_idempotent_on_a_revealed_cell() {
        let mut grid = grid((5, 3), &[(2, 0), (2, 1), (2, 2)]);
        grid.reveal((0, 0));

        let snapshot = grid.clone();
        assert!(grid.reveal((0, 0)));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn out_of_bounds_reveal_is_a_no_op() {
        let mut grid = grid((3, 3), &[(1, 1)]);

        let snapshot = grid.clone();
        assert!(grid.reveal((9, 9)));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn out_of_bounds_query_reports_invalid() {
        let grid = grid((3, 3), &[(1, 1)]);
        assert_eq!(grid.value_at((3, 0)), TileView::Invalid);
        assert_eq!(grid.value_at((0, 3)), TileView::Invalid);
        assert_eq!(grid.value_at((200, 200)), TileView::Invalid);
    }

    #[test]
    fn losing_masks_every_position() {
        let mut grid = grid((2, 2), &[(0, 0)]);

        assert!(grid.reveal((1, 1)));
        assert_eq!(grid.value_at((1, 1)), TileView::Open(1));

        assert!(!grid.reveal((0, 0)));
        assert!(grid.lost());
        assert_eq!(grid.value_at((1, 1)), TileView::Invalid);
        assert_eq!(grid.value_at((0, 0)), TileView::Invalid);
    }

    #[test]
    fn lost_grid_freezes_all_reveals() {
        let mut grid = grid((3, 3), &[(0, 0)]);
        grid.reveal((0, 0));
        assert!(grid.lost());

        let snapshot = grid.clone();
        assert!(!grid.reveal((2, 2)));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn won_grid_freezes_all_reveals_and_stays_alive() {
        let mut grid = grid((2, 1), &[(0, 0)]);
        grid.reveal((1, 0));
        assert!(grid.won());

        let snapshot = grid.clone();
        assert!(grid.reveal((0, 0)));
        assert_eq!(grid, snapshot);
        assert!(grid.won());
        assert!(!grid.lost());
    }

    #[test]
    fn revealing_a_numbered_cell_does_not_flood() {
        let mut grid = grid((3, 3), &[(0, 0)]);

        assert!(grid.reveal((1, 1)));
        assert_eq!(grid.value_at((1, 1)), TileView::Open(1));
        assert_eq!(grid.unrevealed_count(), 8);
    }

    #[test]
    fn generated_grid_matches_its_config() {
        let config = GridConfig::new((8, 8), 12).unwrap();
        let grid = MineGrid::generate(config, 5);
        assert_eq!(grid.size(), (8, 8));
        assert_eq!(grid.bomb_count(), 12);
        assert_eq!(grid.unrevealed_count(), 64);
        assert!(!grid.done());
    }
}
