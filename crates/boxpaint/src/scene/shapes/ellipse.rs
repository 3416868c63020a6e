use crate::coords::Rect;
use crate::paint::{Color, PaintFlags};
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Ellipse inscribed in `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub rect: Rect,
    pub flags: PaintFlags,
}

impl DisplayList {
    /// Records a filled ellipse.
    #[inline]
    pub fn push_fill_ellipse(&mut self, state: StateIds, rect: Rect, color: Color) {
        self.push(state, DrawCmd::Ellipse(EllipseCmd { rect, flags: PaintFlags::fill(color) }));
    }

    /// Records an ellipse outline of `width`.
    #[inline]
    pub fn push_stroke_ellipse(&mut self, state: StateIds, rect: Rect, color: Color, width: f32) {
        self.push(
            state,
            DrawCmd::Ellipse(EllipseCmd { rect, flags: PaintFlags::stroke(color, width) }),
        );
    }
}
