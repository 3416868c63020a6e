use crate::coords::Rect;
use crate::paint::{Color, PaintFlags};
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub flags: PaintFlags,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, flags: PaintFlags) -> Self {
        Self { rect, flags }
    }
}

impl DisplayList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, state: StateIds, rect: Rect, flags: PaintFlags) {
        self.push(state, DrawCmd::Rect(RectCmd::new(rect, flags)));
    }

    /// Records a solid filled rectangle.
    #[inline]
    pub fn push_fill_rect(&mut self, state: StateIds, rect: Rect, color: Color) {
        self.push_rect(state, rect, PaintFlags::fill(color));
    }
}
