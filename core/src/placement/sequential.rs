use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Streaming weighted sampling without replacement: cells are visited once in
/// buffer order and each becomes a bomb with probability
/// `remaining_bombs / remaining_cells`, both counters shrinking as the pass
/// advances. Once the counters meet, every remaining cell is a bomb, so a
/// full pass places exactly `config.bombs` bombs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequentialPlacer {
    seed: u64,
}

impl SequentialPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Same scheme with caller-provided randomness.
    pub fn place_with<R: Rng>(config: GridConfig, rng: &mut R) -> BombLayout {
        let mut remaining_bombs = config.bombs;
        let mut remaining_cells = config.total_cells();
        let mut bombs: Array2<bool> = Array2::default(config.size.to_nd_index());

        for cell in bombs.iter_mut() {
            if remaining_bombs > 0
                && rng.random_ratio(u32::from(remaining_bombs), u32::from(remaining_cells))
            {
                *cell = true;
                remaining_bombs -= 1;
            }
            remaining_cells -= 1;
        }

        BombLayout::from_bomb_mask(bombs)
    }
}

impl BombPlacer for SequentialPlacer {
    fn place(self, config: GridConfig) -> BombLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Self::place_with(config, &mut rng)
    }
}
