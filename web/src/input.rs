use minegrid_core::MineGrid;

use crate::surface::Surface;
use crate::view::BoardView;

pub const LOST_BANNER: &str = "Hit a bomb";
pub const WON_BANNER: &str = "You won";

/// The single registered pointer handler: translate the click, reveal, and
/// redraw. Performs no validation of its own; the grid already tolerates
/// arbitrary coordinates.
#[derive(Copy, Clone, Debug)]
pub struct ClickHandler {
    view: BoardView,
}

impl ClickHandler {
    pub const fn new(view: BoardView) -> Self {
        Self { view }
    }

    pub fn handle_click<S: Surface>(&self, grid: &mut MineGrid, surface: &S, px: i32, py: i32) {
        // a finished board stays frozen on screen
        if grid.done() {
            return;
        }

        if let Some(coords) = self.view.tile_at_pixel(px, py) {
            let alive = grid.reveal(coords);
            log::trace!("click at ({px}, {py}) -> {coords:?}, alive: {alive}");
        }

        surface.clear();
        self.view.draw(grid, surface);

        if grid.lost() {
            log::debug!("game lost");
            self.view.draw_banner(surface, LOST_BANNER);
        } else if grid.won() {
            log::debug!("game won");
            self.view.draw_banner(surface, WON_BANNER);
        }
    }
}
