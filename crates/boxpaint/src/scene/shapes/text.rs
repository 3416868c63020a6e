use crate::coords::{Rect, Vec2};
use crate::paint::{Color, PaintFlags};
use crate::scene::{DisplayList, DrawCmd, NodeId, StateIds};
use crate::text::{GlyphRun, PaintOrder};

/// Pre-shaped glyph runs drawn at `origin` (baseline-left).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlobCmd {
    pub origin: Vec2,
    pub node_id: NodeId,
    pub flags: PaintFlags,
    /// Ink bounds relative to `origin`.
    pub bounds: Rect,
    pub runs: Vec<GlyphRun>,
    pub paint_order: PaintOrder,
}

/// Emphasis mark glyph repeated at every listed x position.
#[derive(Debug, Clone, PartialEq)]
pub struct EmphasisMarksCmd {
    pub origin: Vec2,
    pub mark: String,
    pub positions: Vec<f32>,
    pub color: Color,
    pub font_size: f32,
}

impl DisplayList {
    #[inline]
    pub fn push_text_blob(&mut self, state: StateIds, cmd: TextBlobCmd) {
        self.push(state, DrawCmd::TextBlob(cmd));
    }

    #[inline]
    pub fn push_emphasis_marks(&mut self, state: StateIds, cmd: EmphasisMarksCmd) {
        self.push(state, DrawCmd::EmphasisMarks(cmd));
    }
}
