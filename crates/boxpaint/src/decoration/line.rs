use bitflags::bitflags;

use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{StrokeStyle, WaveDefinition};

bitflags! {
    /// Which lines a decoration entry requests. Several may be set at once.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct DecorationLines: u8 {
        const UNDERLINE = 1 << 0;
        const OVERLINE = 1 << 1;
        const LINE_THROUGH = 1 << 2;
        const SPELLING_ERROR = 1 << 3;
        const GRAMMAR_ERROR = 1 << 4;
    }
}

impl DecorationLines {
    /// Lines painted before the glyphs.
    pub const UNDER_OR_OVER: Self = Self::UNDERLINE
        .union(Self::OVERLINE)
        .union(Self::SPELLING_ERROR)
        .union(Self::GRAMMAR_ERROR);

    #[inline]
    pub fn has_spelling_or_grammar_error(self) -> bool {
        self.intersects(Self::SPELLING_ERROR | Self::GRAMMAR_ERROR)
    }
}

/// CSS `text-decoration-style`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DecorationStyle {
    #[default]
    Solid,
    Double,
    Dotted,
    Dashed,
    Wavy,
}

impl DecorationStyle {
    #[inline]
    pub fn stroke_style(self) -> StrokeStyle {
        match self {
            DecorationStyle::Solid => StrokeStyle::Solid,
            DecorationStyle::Double => StrokeStyle::Double,
            DecorationStyle::Dotted => StrokeStyle::Dotted,
            DecorationStyle::Dashed => StrokeStyle::Dashed,
            DecorationStyle::Wavy => StrokeStyle::Wavy,
        }
    }
}

/// One entry of a fragment's decoration list.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DecorationLine {
    pub lines: DecorationLines,
    pub style: DecorationStyle,
    pub color: Color,
    /// `0` means automatic.
    pub thickness: f32,
    /// `text-underline-offset`; applies to underlines and error lines.
    pub offset_adjustment: f32,
}

impl DecorationLine {
    pub fn new(lines: DecorationLines, style: DecorationStyle, color: Color) -> Self {
        Self { lines, style, color, ..Self::default() }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_offset_adjustment(mut self, adjustment: f32) -> Self {
        self.offset_adjustment = adjustment;
        self
    }
}

/// Placement of one decoration line, ready for synthesis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DecorationGeometry {
    pub stroke_style: StrokeStyle,
    /// `(x, y, width, thickness)`.
    pub line_rect: Rect,
    /// Distance from the first to the second line of a double decoration.
    pub double_offset: f32,
    /// Vertical shift of a wavy line; zero for other styles.
    pub wavy_offset: f32,
    /// Wave parameters; default for non-wavy styles.
    pub wave: WaveDefinition,
    pub antialias: bool,
}

impl DecorationGeometry {
    /// Builds the geometry, deriving the wave from the thickness when the
    /// style is wavy and no explicit wave is given.
    pub fn new(
        stroke_style: StrokeStyle,
        line_rect: Rect,
        double_offset: f32,
        wavy_offset: f32,
        wave: Option<WaveDefinition>,
    ) -> Self {
        let mut geometry = Self { stroke_style, line_rect, double_offset, ..Self::default() };
        if stroke_style == StrokeStyle::Wavy {
            geometry.wave = wave.unwrap_or_else(|| make_wave(line_rect.height()));
            geometry.wavy_offset = wavy_offset;
        }
        geometry
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.line_rect.height()
    }
}

/// Wave parameters for a wavy line of `thickness`.
///
/// Half-pixel wavelength and control distance keep the curve's extrema on
/// pixel centers. The phase starts one wavelength early so both ends can be
/// clipped identically.
pub fn make_wave(thickness: f32) -> WaveDefinition {
    let t = thickness.max(1.0);
    let wavelength = 1.0 + 2.0 * (2.0 * t + 0.5).round();
    let control_point_distance = 0.5 + (3.0 * t + 0.5).round();
    WaveDefinition::new(wavelength, control_point_distance, -wavelength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_from_thickness() {
        // t = 2: wavelength 1 + 2 * round(4.5) = 11, cp 0.5 + round(6.5) = 7.5
        assert_eq!(make_wave(2.0), WaveDefinition::new(11.0, 7.5, -11.0));
        // thin lines use the 1px wave
        assert_eq!(make_wave(0.3), make_wave(1.0));
        assert_eq!(make_wave(1.0), WaveDefinition::new(7.0, 4.5, -7.0));
    }

    #[test]
    fn only_wavy_geometry_keeps_wave_and_offset() {
        let rect = Rect::new(0.0, 10.0, 50.0, 2.0);
        let solid = DecorationGeometry::new(StrokeStyle::Solid, rect, 3.0, 3.0, None);
        assert_eq!(solid.wavy_offset, 0.0);
        assert_eq!(solid.wave, WaveDefinition::default());

        let wavy = DecorationGeometry::new(StrokeStyle::Wavy, rect, 3.0, 3.0, None);
        assert_eq!(wavy.wavy_offset, 3.0);
        assert_eq!(wavy.wave, make_wave(2.0));

        let custom = WaveDefinition::new(4.0, 2.5, 0.0);
        let error = DecorationGeometry::new(StrokeStyle::Wavy, rect, 3.0, 3.0, Some(custom));
        assert_eq!(error.wave, custom);
    }

    #[test]
    fn error_lines_are_under_or_over() {
        assert!(DecorationLines::UNDER_OR_OVER.contains(DecorationLines::GRAMMAR_ERROR));
        assert!(!DecorationLines::UNDER_OR_OVER.contains(DecorationLines::LINE_THROUGH));
        assert!((DecorationLines::SPELLING_ERROR | DecorationLines::UNDERLINE).has_spelling_or_grammar_error());
        assert!(!DecorationLines::OVERLINE.has_spelling_or_grammar_error());
    }
}
