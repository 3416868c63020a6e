use crate::coords::{AffineTransform, CornerRadii, Rect, Vec2};
use crate::paint::{Color, PaintFlags, Shadow};
use crate::scene::shapes::line::StrokeLineCmd;
use crate::scene::shapes::text::{EmphasisMarksCmd, TextBlobCmd};
use crate::scene::shapes::wavy::WavyLineCmd;
use crate::scene::{DisplayList, StateIds};

/// Appender that stamps one fixed `StateIds` onto every operation.
///
/// Painters receive their property-tree ids once per call; the recorder
/// keeps them out of every drawing helper signature.
#[derive(Debug, Default)]
pub struct Recorder {
    state: StateIds,
    list: DisplayList,
}

impl Recorder {
    #[inline]
    pub fn new(state: StateIds) -> Self {
        Self { state, list: DisplayList::new() }
    }

    #[inline]
    pub fn state(&self) -> StateIds {
        self.state
    }

    #[inline]
    pub fn list(&self) -> &DisplayList {
        &self.list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn finish(self) -> DisplayList {
        self.list
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn rect(&mut self, rect: Rect, flags: PaintFlags) {
        self.list.push_rect(self.state, rect, flags);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.push_fill_rect(self.state, rect, color);
    }

    pub fn rounded_rect(&mut self, rect: Rect, radii: CornerRadii, flags: PaintFlags) {
        self.list.push_rounded_rect(self.state, rect, radii, flags);
    }

    pub fn double_rounded_rect(
        &mut self,
        outer: (Rect, CornerRadii),
        inner: (Rect, CornerRadii),
        flags: PaintFlags,
    ) {
        self.list.push_double_rounded_rect(self.state, outer, inner, flags);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, flags: PaintFlags) {
        self.list.push_line(self.state, from, to, flags);
    }

    pub fn stroke_line(&mut self, cmd: StrokeLineCmd) {
        self.list.push_stroke_line(self.state, cmd);
    }

    pub fn wavy_line(&mut self, cmd: WavyLineCmd) {
        self.list.push_wavy_line(self.state, cmd);
    }

    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.list.push_fill_ellipse(self.state, rect, color);
    }

    pub fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: f32) {
        self.list.push_stroke_ellipse(self.state, rect, color, width);
    }

    pub fn fill_path(&mut self, points: Vec<Vec2>, color: Color) {
        self.list.push_fill_path(self.state, points, color);
    }

    // ── text ──────────────────────────────────────────────────────────────

    pub fn text_blob(&mut self, cmd: TextBlobCmd) {
        self.list.push_text_blob(self.state, cmd);
    }

    pub fn emphasis_marks(&mut self, cmd: EmphasisMarksCmd) {
        self.list.push_emphasis_marks(self.state, cmd);
    }

    // ── effects / state ───────────────────────────────────────────────────

    pub fn shadows(&mut self, shadows: &[Shadow]) {
        self.list.push_shadows(self.state, shadows);
    }

    pub fn clear_shadow(&mut self) {
        self.list.push_clear_shadow(self.state);
    }

    pub fn save(&mut self) {
        self.list.push_save(self.state);
    }

    pub fn restore(&mut self) {
        self.list.push_restore(self.state);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.list.push_scale(self.state, sx, sy);
    }

    pub fn concat(&mut self, transform: AffineTransform) {
        self.list.push_concat(self.state, transform);
    }
}
