use crate::coords::{AffineTransform, Rect, Vec2};
use crate::decoration::DecorationLine;
use crate::paint::{Color, Shadow, Visibility};
use crate::scene::{NodeId, StateIds};

/// Font of a glyph run, as the shaper resolved it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub typeface_id: u32,
    /// Font size in CSS pixels.
    pub size: f32,
    pub weight: u16,
    pub width: u8,
    pub slant: u8,
    pub scale_x: f32,
    pub skew_x: f32,
    pub embolden: bool,
    pub linear_metrics: bool,
    pub subpixel: bool,
    pub force_auto_hinting: bool,
    pub ascent: f32,
    pub descent: f32,
    /// Underline position from the font tables (positive = below the baseline).
    pub underline_position: Option<f32>,
    pub underline_thickness: Option<f32>,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: String::new(),
            typeface_id: 0,
            size: 16.0,
            weight: 400,
            width: 5,
            slant: 0,
            scale_x: 1.0,
            skew_x: 0.0,
            embolden: false,
            linear_metrics: true,
            subpixel: true,
            force_auto_hinting: false,
            ascent: 0.0,
            descent: 0.0,
            underline_position: None,
            underline_thickness: None,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GlyphPositioning {
    /// One x position per glyph.
    #[default]
    Horizontal,
    /// Full x/y positions.
    Full,
}

/// Glyphs shaped with a single font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRun {
    pub font: FontDescriptor,
    pub glyphs: Vec<u16>,
    pub positions: Vec<f32>,
    pub offset: Vec2,
    pub positioning: GlyphPositioning,
}

impl GlyphRun {
    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// Shaper output for a fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeResult {
    pub runs: Vec<GlyphRun>,
    /// Ink bounds relative to the text origin.
    pub bounds: Rect,
}

impl ShapeResult {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Slice of text to paint, with its shaped glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub from: u32,
    pub to: u32,
    pub shape: ShapeResult,
}

impl TextFragment {
    #[inline]
    pub fn has_shape_result(&self) -> bool {
        !self.shape.is_empty()
    }
}

/// SVG `paint-order`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintOrder {
    #[default]
    Normal,
    FillStrokeMarkers,
    FillMarkersStroke,
    StrokeFillMarkers,
    StrokeMarkersFill,
    MarkersFillStroke,
    MarkersStrokeFill,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPaintStyle {
    pub current_color: Color,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub emphasis_mark_color: Color,
    pub stroke_width: f32,
    /// `None` and an empty list both mean no text shadow.
    pub shadows: Option<Vec<Shadow>>,
    pub paint_order: PaintOrder,
}

impl TextPaintStyle {
    /// Declared shadows, empty when there are none.
    #[inline]
    pub fn shadow_list(&self) -> &[Shadow] {
        self.shadows.as_deref().unwrap_or(&[])
    }

    /// Style used when the glyphs serve as a clip mask: only coverage
    /// matters, so every color is opaque black and shadows are dropped.
    pub fn for_text_clip(&self) -> Self {
        Self {
            current_color: Color::black(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            emphasis_mark_color: Color::black(),
            stroke_width: self.stroke_width,
            shadows: None,
            paint_order: PaintOrder::Normal,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintPhase {
    #[default]
    Foreground,
    TextClip,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
    VerticalLr,
}

impl WritingMode {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == WritingMode::HorizontalTb
    }
}

/// SVG text placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SvgTextInfo {
    pub scaling_factor: f32,
    pub transform: Option<AffineTransform>,
}

impl Default for SvgTextInfo {
    fn default() -> Self {
        Self { scaling_factor: 1.0, transform: None }
    }
}

/// `text-combine-upright` placement inside a vertical line.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextCombine {
    pub left_adjustment: f32,
    /// Absolute baseline y of the combined text.
    pub top_adjustment: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmphasisMark {
    /// Mark glyph string, e.g. `"•"`. Empty paints nothing.
    pub mark: String,
    /// Vertical offset from the text baseline; negative places the marks
    /// over the line.
    pub offset: f32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SymbolMarkerKind {
    Disc,
    Circle,
    Square,
    DisclosureOpen,
    DisclosureClosed,
}

/// List marker drawn as a shape instead of text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SymbolMarker {
    pub kind: SymbolMarkerKind,
    pub rect: Rect,
    pub color: Color,
    /// Right-to-left inline direction; flips closed disclosure triangles.
    pub rtl: bool,
}

/// Everything needed to paint one text fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPaintInput {
    pub fragment: TextFragment,
    /// Fragment box; its top-left is the decoration origin.
    pub bbox: Rect,
    pub style: TextPaintStyle,
    pub decorations: Vec<DecorationLine>,
    pub visibility: Visibility,
    pub paint_phase: PaintPhase,
    pub writing_mode: WritingMode,
    pub svg: Option<SvgTextInfo>,
    pub text_combine: Option<TextCombine>,
    pub emphasis_mark: Option<EmphasisMark>,
    pub symbol_marker: Option<SymbolMarker>,
    pub is_ellipsis: bool,
    pub is_line_break: bool,
    pub is_flow_control: bool,
    pub node_id: NodeId,
    pub state: StateIds,
}
