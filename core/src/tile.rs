use serde::{Deserialize, Serialize};

/// Per-cell value, assigned once at construction and immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Bomb,
    /// Exact count of bomb-adjacent Moore neighbors, `0..=8`.
    Clear(u8),
}

impl Cell {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Clear(0))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// What a query sees at a position: the out-of-bounds/masked and unrevealed
/// sentinels are variants rather than magic numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Invalid,
    Hidden,
    Bomb,
    Open(u8),
}
