//! Tunable constants shared by the painters.

/// Font metrics used when a fragment carries no shaped runs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FallbackFont {
    pub size: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Default for FallbackFont {
    fn default() -> Self {
        Self { size: 16.0, ascent: 14.0, descent: 4.0 }
    }
}

/// Heuristic thresholds and factors of the paint engine.
///
/// Changing the defaults breaks conformance runs; use it for experiments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintConfig {
    /// Border sides at least this wide are stroked along their centerline
    /// instead of filled as thin rects.
    pub thick_edge_threshold: f32,
    /// Dotted decorations thinner than this are drawn as dashes.
    pub thin_dotted_threshold: f32,
    /// RGB multiplier for the dark half of inset/outset/groove/ridge borders.
    pub relief_darken_factor: f32,
    /// Outline width of `circle` list markers.
    pub marker_stroke_width: f32,
    pub fallback_font: FallbackFont,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            thick_edge_threshold: 10.0,
            thin_dotted_threshold: 2.0,
            relief_darken_factor: 0.7,
            marker_stroke_width: 1.0,
            fallback_font: FallbackFont::default(),
        }
    }
}
