use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::surface::{Color, Surface};

/// Canvas-backed [`Surface`] for the browser build.
pub struct Canvas2d {
    node: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Looks up the canvas element by id. Panics when the element is missing
    /// or is not a canvas; the app cannot run without it.
    pub fn attach(id: &str, font: Option<&str>) -> Self {
        let node: HtmlCanvasElement = gloo::utils::document()
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("Could not find id={id:?} element"))
            .dyn_into()
            .unwrap_or_else(|_| panic!("{id:?} is not a canvas"));
        let ctx: CanvasRenderingContext2d = node
            .get_context("2d")
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("Could not get 2d context for {id:?}"))
            .dyn_into()
            .expect("Unexpected rendering context type");

        if let Some(font) = font {
            ctx.set_font(font);
        }

        Self { node, ctx }
    }

    /// Registers a click listener reporting positions relative to the canvas
    /// origin. Dropping the returned listener deregisters the handler.
    pub fn on_click_relative(&self, mut callback: impl FnMut(i32, i32) + 'static) -> EventListener {
        let node = self.node.clone();
        EventListener::new(&self.node, "click", move |event| {
            let event: &MouseEvent = event.unchecked_ref();
            let x = event.page_x() - node.offset_left();
            let y = event.page_y() - node.offset_top();
            callback(x, y);
        })
    }
}

impl Surface for Canvas2d {
    fn fill_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx
            .fill_rect(x.into(), y.into(), w.into(), h.into());
    }

    fn draw_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.ctx.set_stroke_style_str(color.css());
        self.ctx
            .stroke_rect(x.into(), y.into(), w.into(), h.into());
    }

    fn draw_text(&self, text: &str, x: u32, y: u32, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_text(text, x.into(), y.into()).ok();
    }

    fn set_font(&self, font: &str) {
        self.ctx.set_font(font);
    }

    fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.node.width().into(), self.node.height().into());
    }

    fn visible_size(&self) -> (u32, u32) {
        let rect = self.node.get_bounding_client_rect();
        (rect.width() as u32, rect.height() as u32)
    }
}
