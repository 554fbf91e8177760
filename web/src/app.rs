use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use minegrid_core::{GridConfig, MineGrid};
use wasm_bindgen::prelude::*;

use crate::canvas::Canvas2d;
use crate::input::ClickHandler;
use crate::view::BoardView;

const BOARD_SIZE: (u8, u8) = (25, 25);
const BOMBS: u16 = 100;
const TILE_SIZE: u32 = 10;
const BOARD_FONT: &str = "sans-serif";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    console_error_panic_hook::set_once();

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let seed = args.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    log::debug!("seed: {seed}");

    let config = GridConfig::new(BOARD_SIZE, BOMBS).expect("board constants are valid");
    let grid = Rc::new(RefCell::new(MineGrid::generate(config, seed)));

    let canvas = Rc::new(Canvas2d::attach("canvas", Some(BOARD_FONT)));
    let view = BoardView::new(TILE_SIZE);
    let handler = ClickHandler::new(view);

    let listener = {
        let grid = grid.clone();
        let surface = canvas.clone();
        canvas.on_click_relative(move |x, y| {
            handler.handle_click(&mut grid.borrow_mut(), &*surface, x, y);
        })
    };
    // the handler lives for the page lifetime
    listener.forget();

    view.draw(&grid.borrow(), &*canvas);
    log::debug!("App started");
}
