use minegrid_core::{Coord, Coord2, MineGrid, TileView};

use crate::surface::{Color, Surface};

const BANNER_FONT: &str = "bold 50px monospace";
const BANNER_POS: (u32, u32) = (100, 225);

/// Translates grid state into drawing calls. Holds no game state of its own
/// and never mutates the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    tile_size: u32,
}

impl BoardView {
    pub const fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Draws every cell whose pixel rect starts inside the surface's visible
    /// area. Masked positions are skipped entirely, leaving prior surface
    /// content untouched.
    pub fn draw<S: Surface>(&self, grid: &MineGrid, surface: &S) {
        let (visible_w, visible_h) = surface.visible_size();
        let (cols, rows) = grid.size();
        let ts = self.tile_size;

        for tile_x in 0..cols {
            let x = u32::from(tile_x) * ts;
            if x >= visible_w {
                break;
            }
            for tile_y in 0..rows {
                let y = u32::from(tile_y) * ts;
                if y >= visible_h {
                    break;
                }

                match grid.value_at((tile_x, tile_y)) {
                    TileView::Invalid => {}
                    TileView::Hidden => {
                        surface.fill_rect(x, y, ts, ts, Color::Gray);
                        surface.draw_rect(x, y, ts, ts, Color::Black);
                    }
                    TileView::Open(0) => {
                        surface.fill_rect(x, y, ts, ts, Color::White);
                        surface.draw_rect(x, y, ts, ts, Color::Black);
                    }
                    TileView::Open(count) => {
                        surface.fill_rect(x, y, ts, ts, Color::Gray);
                        surface.draw_text(&count.to_string(), x, y + ts, Color::Green);
                    }
                    TileView::Bomb => {
                        surface.fill_rect(x, y, ts, ts, Color::Black);
                    }
                }
            }
        }
    }

    /// Floor division by the tile size. `None` when the pixel maps outside
    /// the addressable coordinate range; the grid treats that the same as any
    /// out-of-bounds reveal.
    pub fn tile_at_pixel(&self, px: i32, py: i32) -> Option<Coord2> {
        let ts = self.tile_size as i32;
        let x = Coord::try_from(px.div_euclid(ts)).ok()?;
        let y = Coord::try_from(py.div_euclid(ts)).ok()?;
        Some((x, y))
    }

    pub fn draw_banner<S: Surface>(&self, surface: &S, text: &str) {
        surface.set_font(BANNER_FONT);
        surface.draw_text(text, BANNER_POS.0, BANNER_POS.1, Color::Red);
    }
}
