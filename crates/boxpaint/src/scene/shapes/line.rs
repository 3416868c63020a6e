use crate::coords::Vec2;
use crate::paint::{Color, PaintFlags, StrokeCap};
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Stroke style of a decoration line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeStyle {
    None,
    #[default]
    Solid,
    Dotted,
    Dashed,
    Double,
    Wavy,
}

/// Border side drawn as a stroked segment along its centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub flags: PaintFlags,
}

/// Dotted or dashed text decoration stroke.
///
/// The renderer derives the dash intervals from `style` and `thickness`;
/// `cap` records whether dots are drawn as round caps.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeLineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: f32,
    pub style: StrokeStyle,
    pub cap: StrokeCap,
    pub color: Color,
    pub antialias: bool,
}

impl DisplayList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, state: StateIds, from: Vec2, to: Vec2, flags: PaintFlags) {
        self.push(state, DrawCmd::Line(LineCmd { from, to, flags }));
    }

    #[inline]
    pub fn push_stroke_line(&mut self, state: StateIds, cmd: StrokeLineCmd) {
        self.push(state, DrawCmd::StrokeLine(cmd));
    }
}
