use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Parameters of a cubic-bezier wave.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WaveDefinition {
    /// Horizontal span of one bezier segment.
    pub wavelength: f32,
    /// Vertical distance of the control points from the midline.
    pub control_point_distance: f32,
    /// Starting x of the first segment.
    pub phase: f32,
}

impl WaveDefinition {
    #[inline]
    pub const fn new(wavelength: f32, control_point_distance: f32, phase: f32) -> Self {
        Self { wavelength, control_point_distance, phase }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    CubicTo { cp1: Vec2, cp2: Vec2, to: Vec2 },
}

/// Sequence of path verbs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.verbs.push(PathVerb::MoveTo(p));
    }

    pub fn cubic_to(&mut self, cp1: Vec2, cp2: Vec2, to: Vec2) {
        self.verbs.push(PathVerb::CubicTo { cp1, cp2, to });
    }
}

/// Wavy decoration payload.
///
/// `tile_path` is drawn once inside `tile_rect` (one wavelength wide); the
/// renderer repeats that tile horizontally to fill `paint_rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct WavyLineCmd {
    pub paint_rect: Rect,
    pub tile_rect: Rect,
    pub tile_path: Path,
    pub thickness: f32,
    pub color: Color,
    pub wave: WaveDefinition,
}

impl DisplayList {
    #[inline]
    pub fn push_wavy_line(&mut self, state: StateIds, cmd: WavyLineCmd) {
        self.push(state, DrawCmd::WavyLine(cmd));
    }
}
