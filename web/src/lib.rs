pub use input::*;
pub use surface::*;
pub use view::*;

mod input;
mod surface;
mod view;

#[cfg(target_arch = "wasm32")]
pub use canvas::*;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(test)]
pub(crate) mod testing;
