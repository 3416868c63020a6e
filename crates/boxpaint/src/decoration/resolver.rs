use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{StrokeStyle, WaveDefinition};

use super::line::{DecorationGeometry, DecorationLine, DecorationLines, DecorationStyle};

/// Wave used for spelling and grammar error lines.
pub const ERROR_WAVE: WaveDefinition = WaveDefinition::new(4.0, 2.5, 0.0);

/// Font metrics the decoration offsets are derived from.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DecorationMetrics {
    pub font_size: f32,
    pub ascent: f32,
    pub descent: f32,
    /// Font-supplied underline position (positive = below the baseline).
    pub underline_position: Option<f32>,
    pub underline_thickness: Option<f32>,
}

/// Everything shared by the decorations of one text fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorationContext {
    /// Left end of the lines on the baseline.
    pub origin: Vec2,
    pub width: f32,
    pub metrics: DecorationMetrics,
    pub decorations: Vec<DecorationLine>,
    /// Paint every line in opaque black (text used as a clip mask).
    pub text_clip: bool,
}

/// Computes the geometry of each decoration line of a fragment.
///
/// Resolution is a pure function of the context, the entry index and the
/// requested line; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct DecorationResolver {
    ctx: DecorationContext,
    union_lines: DecorationLines,
    antialias: bool,
}

impl DecorationResolver {
    pub fn new(ctx: DecorationContext) -> Self {
        let union_lines = ctx.decorations.iter().fold(DecorationLines::empty(), |acc, d| acc | d.lines);
        let antialias = ctx
            .decorations
            .iter()
            .any(|d| matches!(d.style, DecorationStyle::Dotted | DecorationStyle::Dashed));
        Self { ctx, union_lines, antialias }
    }

    #[inline]
    pub fn context(&self) -> &DecorationContext {
        &self.ctx
    }

    #[inline]
    pub fn decorations(&self) -> &[DecorationLine] {
        &self.ctx.decorations
    }

    /// True when some entry requests any of `lines`.
    #[inline]
    pub fn has_any(&self, lines: DecorationLines) -> bool {
        self.union_lines.intersects(lines)
    }

    #[inline]
    pub fn antialias(&self) -> bool {
        self.antialias
    }

    /// Color entry `index` is painted with outside the shadow pass.
    pub fn line_color(&self, index: usize) -> Color {
        match self.ctx.decorations.get(index) {
            Some(_) if self.ctx.text_clip => Color::black(),
            Some(d) => d.color,
            None => Color::black(),
        }
    }

    /// Resolved thickness of entry `index`.
    ///
    /// Explicit thickness is rounded to whole pixels. Automatic thickness
    /// prefers the font's underline thickness, then a tenth of the font size.
    pub fn thickness(&self, index: usize) -> f32 {
        let explicit = self.ctx.decorations.get(index).map_or(0.0, |d| d.thickness);
        if explicit > 0.0 {
            return explicit.round();
        }
        self.ctx
            .metrics
            .underline_thickness
            .unwrap_or(self.ctx.metrics.font_size / 10.0)
    }

    /// Geometry of `line` for entry `index`.
    ///
    /// `line` must be exactly one of the line flags; returns `None` when the
    /// entry does not request it.
    pub fn resolve(&self, index: usize, line: DecorationLines) -> Option<DecorationGeometry> {
        let entry = self.ctx.decorations.get(index)?;
        if !entry.lines.intersects(line) {
            return None;
        }

        let geometry = if line == DecorationLines::UNDERLINE {
            self.underline(index, entry)
        } else if line == DecorationLines::OVERLINE {
            self.overline(index, entry)
        } else if line == DecorationLines::LINE_THROUGH {
            self.line_through(index, entry)
        } else if line.has_spelling_or_grammar_error() {
            self.error_line(index, entry)
        } else {
            return None;
        };
        log::trace!("decoration {index} {line:?}: {geometry:?}");
        Some(geometry)
    }

    fn underline(&self, index: usize, entry: &DecorationLine) -> DecorationGeometry {
        let base = self.ctx.metrics.underline_position.unwrap_or(self.ctx.metrics.descent);
        let t = self.thickness(index);
        self.line_data(entry, t, base + entry.offset_adjustment, t + 1.0, t + 1.0)
    }

    fn overline(&self, index: usize, entry: &DecorationLine) -> DecorationGeometry {
        let t = self.thickness(index);
        self.line_data(entry, t, -self.ctx.metrics.ascent, -(t + 1.0), -(t + 1.0))
    }

    fn line_through(&self, index: usize, entry: &DecorationLine) -> DecorationGeometry {
        let t = self.thickness(index);
        let offset = 2.0 * self.ctx.metrics.ascent / 3.0 - t / 2.0;
        self.line_data(entry, t, -offset, (t + 1.0).floor(), 0.0)
    }

    /// Spelling/grammar error: always wavy with the fixed error wave.
    fn error_line(&self, index: usize, entry: &DecorationLine) -> DecorationGeometry {
        let t = self.thickness(index);
        let rect = self.line_rect(self.ctx.metrics.descent + entry.offset_adjustment, t);
        let mut geometry =
            DecorationGeometry::new(StrokeStyle::Wavy, rect, t + 1.0, t + 1.0, Some(ERROR_WAVE));
        geometry.antialias = true;
        geometry
    }

    fn line_data(
        &self,
        entry: &DecorationLine,
        thickness: f32,
        offset: f32,
        double_offset: f32,
        wavy_offset: f32,
    ) -> DecorationGeometry {
        let rect = self.line_rect(offset, thickness);
        let mut geometry =
            DecorationGeometry::new(entry.style.stroke_style(), rect, double_offset, wavy_offset, None);
        geometry.antialias = self.antialias;
        geometry
    }

    fn line_rect(&self, offset: f32, thickness: f32) -> Rect {
        Rect::new(self.ctx.origin.x, self.ctx.origin.y + offset, self.ctx.width, thickness)
    }
}
