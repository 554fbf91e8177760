/// Palette used by the board view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Gray,
    Green,
    Red,
}

impl Color {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Capability set of the external rendering surface. The board view only
/// draws through this trait; the canvas implementation lives behind the wasm
/// target gate.
pub trait Surface {
    fn fill_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color);
    /// Outline only.
    fn draw_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color);
    fn draw_text(&self, text: &str, x: u32, y: u32, color: Color);
    fn set_font(&self, font: &str);
    fn clear(&self);
    /// Visible pixel bounds of the surface.
    fn visible_size(&self) -> (u32, u32);
}
