use crate::coords::{CornerRadii, Rect};
use crate::paint::PaintFlags;
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub flags: PaintFlags,
}

/// Fill of `outer` minus `inner` (a ring with independently rounded edges).
///
/// Used for solid borders whose sides differ in width.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleRoundedRectCmd {
    pub outer: Rect,
    pub outer_radii: CornerRadii,
    pub inner: Rect,
    pub inner_radii: CornerRadii,
    pub flags: PaintFlags,
}

impl DisplayList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        state: StateIds,
        rect: Rect,
        radii: CornerRadii,
        flags: PaintFlags,
    ) {
        self.push(state, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, flags }));
    }

    /// Records a ring fill between two rounded rectangles.
    #[inline]
    pub fn push_double_rounded_rect(
        &mut self,
        state: StateIds,
        outer: (Rect, CornerRadii),
        inner: (Rect, CornerRadii),
        flags: PaintFlags,
    ) {
        self.push(
            state,
            DrawCmd::DoubleRoundedRect(DoubleRoundedRectCmd {
                outer: outer.0,
                outer_radii: outer.1,
                inner: inner.0,
                inner_radii: inner.1,
                flags,
            }),
        );
    }
}
