use std::cell::RefCell;

use crate::surface::{Color, Surface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    FillRect {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawRect {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: u32,
        y: u32,
        color: Color,
    },
    SetFont(String),
    Clear,
}

/// Surface stand-in that records every drawing call in order.
pub(crate) struct RecordingSurface {
    size: (u32, u32),
    ops: RefCell<Vec<Op>>,
}

impl RecordingSurface {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ops: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn take_ops(&self) -> Vec<Op> {
        self.ops.take()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.ops.borrow_mut().push(Op::FillRect { x, y, w, h, color });
    }

    fn draw_rect(&self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.ops.borrow_mut().push(Op::DrawRect { x, y, w, h, color });
    }

    fn draw_text(&self, text: &str, x: u32, y: u32, color: Color) {
        self.ops.borrow_mut().push(Op::DrawText {
            text: text.into(),
            x,
            y,
            color,
        });
    }

    fn set_font(&self, font: &str) {
        self.ops.borrow_mut().push(Op::SetFont(font.into()));
    }

    fn clear(&self) {
        self.ops.borrow_mut().push(Op::Clear);
    }

    fn visible_size(&self) -> (u32, u32) {
        self.size
    }
}
