//! Text fragment painting: glyph blobs, emphasis marks, symbol markers and
//! the decorations around them.

mod input;
mod marker;
mod painter;

pub use input::{
    EmphasisMark, FontDescriptor, GlyphPositioning, GlyphRun, PaintOrder, PaintPhase, ShapeResult,
    SvgTextInfo, SymbolMarker, SymbolMarkerKind, TextCombine, TextFragment, TextPaintInput, TextPaintStyle,
    WritingMode,
};
pub use marker::{PhysicalDirection, disclosure_points};
pub use painter::TextPainter;
