use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Closed polygon fill. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DisplayList {
    #[inline]
    pub fn push_fill_path(&mut self, state: StateIds, points: Vec<Vec2>, color: Color) {
        self.push(state, DrawCmd::FillPath(FillPathCmd { points, color }));
    }
}
