use crate::coords::{AffineTransform, Vec2};
use crate::scene::shapes::effects::ShadowCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::{LineCmd, StrokeLineCmd};
use crate::scene::shapes::path::FillPathCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::{DoubleRoundedRectCmd, RoundedRectCmd};
use crate::scene::shapes::text::{EmphasisMarksCmd, TextBlobCmd};
use crate::scene::shapes::wavy::WavyLineCmd;

/// Renderer-agnostic paint operation.
///
/// The set is closed: renderers and comparators match it exhaustively.
///
/// Extending the scene:
/// - add a payload under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add the matching `Canvas` method in `scene::replay`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled or stroked axis-aligned rectangle.
    Rect(RectCmd),
    /// Filled or stroked rounded rectangle.
    RoundedRect(RoundedRectCmd),
    /// Fill of the area between two rounded rectangles.
    DoubleRoundedRect(DoubleRoundedRectCmd),
    /// Stroked line segment (border sides).
    Line(LineCmd),
    /// Stroked decoration line (dotted / dashed text decorations).
    StrokeLine(StrokeLineCmd),
    /// Wavy decoration: a bezier tile repeated across a paint rect.
    WavyLine(WavyLineCmd),
    TextBlob(TextBlobCmd),
    EmphasisMarks(EmphasisMarksCmd),
    /// Filled or stroked ellipse inscribed in a rect.
    Ellipse(EllipseCmd),
    /// Filled closed polygon.
    FillPath(FillPathCmd),
    /// Installs a drop shadow for subsequent draws.
    Shadow(ShadowCmd),
    /// Removes every installed drop shadow.
    ClearShadow,
    Save,
    Restore,
    /// Scales the current transform by `(sx, sy)`.
    Scale(Vec2),
    /// Post-multiplies the current transform.
    Concat(AffineTransform),
}

impl DrawCmd {
    /// Stable short name, used in logs and comparison reports.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::DoubleRoundedRect(_) => "double_rounded_rect",
            DrawCmd::Line(_) => "line",
            DrawCmd::StrokeLine(_) => "stroke_line",
            DrawCmd::WavyLine(_) => "wavy_line",
            DrawCmd::TextBlob(_) => "text_blob",
            DrawCmd::EmphasisMarks(_) => "emphasis_marks",
            DrawCmd::Ellipse(_) => "ellipse",
            DrawCmd::FillPath(_) => "fill_path",
            DrawCmd::Shadow(_) => "shadow",
            DrawCmd::ClearShadow => "clear_shadow",
            DrawCmd::Save => "save",
            DrawCmd::Restore => "restore",
            DrawCmd::Scale(_) => "scale",
            DrawCmd::Concat(_) => "concat",
        }
    }
}
