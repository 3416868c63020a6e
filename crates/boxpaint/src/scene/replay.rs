use anyhow::{Context, Result};

use crate::coords::{AffineTransform, Vec2};
use crate::scene::shapes::effects::ShadowCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::{LineCmd, StrokeLineCmd};
use crate::scene::shapes::path::FillPathCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::{DoubleRoundedRectCmd, RoundedRectCmd};
use crate::scene::shapes::text::{EmphasisMarksCmd, TextBlobCmd};
use crate::scene::shapes::wavy::WavyLineCmd;
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Rendering backend fed by [`DisplayList::replay`].
///
/// One method per operation family. Every call receives the property-tree
/// state the operation was recorded under; backends that do not model
/// property trees ignore it.
pub trait Canvas {
    fn rect(&mut self, state: StateIds, cmd: &RectCmd) -> Result<()>;
    fn rounded_rect(&mut self, state: StateIds, cmd: &RoundedRectCmd) -> Result<()>;
    fn double_rounded_rect(&mut self, state: StateIds, cmd: &DoubleRoundedRectCmd) -> Result<()>;
    fn line(&mut self, state: StateIds, cmd: &LineCmd) -> Result<()>;
    fn stroke_line(&mut self, state: StateIds, cmd: &StrokeLineCmd) -> Result<()>;
    fn wavy_line(&mut self, state: StateIds, cmd: &WavyLineCmd) -> Result<()>;
    fn text_blob(&mut self, state: StateIds, cmd: &TextBlobCmd) -> Result<()>;
    fn emphasis_marks(&mut self, state: StateIds, cmd: &EmphasisMarksCmd) -> Result<()>;
    fn ellipse(&mut self, state: StateIds, cmd: &EllipseCmd) -> Result<()>;
    fn fill_path(&mut self, state: StateIds, cmd: &FillPathCmd) -> Result<()>;
    fn shadow(&mut self, state: StateIds, cmd: &ShadowCmd) -> Result<()>;
    fn clear_shadow(&mut self, state: StateIds) -> Result<()>;
    fn save(&mut self, state: StateIds) -> Result<()>;
    fn restore(&mut self, state: StateIds) -> Result<()>;
    fn scale(&mut self, state: StateIds, factor: Vec2) -> Result<()>;
    fn concat(&mut self, state: StateIds, transform: &AffineTransform) -> Result<()>;
}

impl DisplayList {
    /// Dispatches every item to `canvas` in paint order.
    ///
    /// Stops at the first backend failure; the error names the item index
    /// and operation kind.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        log::debug!("replay: {} item(s)", self.len());

        for (index, item) in self.items().iter().enumerate() {
            let state = item.state;
            let res = match &item.cmd {
                DrawCmd::Rect(cmd) => canvas.rect(state, cmd),
                DrawCmd::RoundedRect(cmd) => canvas.rounded_rect(state, cmd),
                DrawCmd::DoubleRoundedRect(cmd) => canvas.double_rounded_rect(state, cmd),
                DrawCmd::Line(cmd) => canvas.line(state, cmd),
                DrawCmd::StrokeLine(cmd) => canvas.stroke_line(state, cmd),
                DrawCmd::WavyLine(cmd) => canvas.wavy_line(state, cmd),
                DrawCmd::TextBlob(cmd) => canvas.text_blob(state, cmd),
                DrawCmd::EmphasisMarks(cmd) => canvas.emphasis_marks(state, cmd),
                DrawCmd::Ellipse(cmd) => canvas.ellipse(state, cmd),
                DrawCmd::FillPath(cmd) => canvas.fill_path(state, cmd),
                DrawCmd::Shadow(cmd) => canvas.shadow(state, cmd),
                DrawCmd::ClearShadow => canvas.clear_shadow(state),
                DrawCmd::Save => canvas.save(state),
                DrawCmd::Restore => canvas.restore(state),
                DrawCmd::Scale(factor) => canvas.scale(state, *factor),
                DrawCmd::Concat(transform) => canvas.concat(state, transform),
            };
            res.with_context(|| format!("replay failed at item {index} ({})", item.cmd.name()))?;
        }
        Ok(())
    }
}
