use crate::*;
pub use sequential::*;

mod sequential;

/// Strategy producing a bomb layout for a validated grid configuration.
pub trait BombPlacer {
    fn place(self, config: GridConfig) -> BombLayout;
}
