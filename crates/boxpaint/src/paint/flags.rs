use super::{Color, Shadow};

/// How geometry is painted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    StrokeAndFill,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Two-interval dash pattern: `on` length, then `off` length.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
    pub phase: f32,
}

impl DashPattern {
    #[inline]
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off, phase: 0.0 }
    }
}

/// Paint parameters attached to a shape operation.
///
/// Mirrors what a renderer needs to configure its paint object: color,
/// fill vs. stroke, stroke geometry and an optional dash pattern. Fills can
/// carry drop shadows (box shadows on backgrounds).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintFlags {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub dash: Option<DashPattern>,
    pub shadows: Vec<Shadow>,
}

impl PaintFlags {
    /// Plain fill in `color`.
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    /// Solid stroke of `width` with butt caps and miter joins.
    #[inline]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_dash(mut self, dash: DashPattern, cap: StrokeCap) -> Self {
        self.dash = Some(dash);
        self.cap = cap;
        self
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        matches!(self.style, PaintStyle::Stroke | PaintStyle::StrokeAndFill)
    }
}
