//! Feeding painter output to a `Canvas` backend.

use anyhow::{ensure, Result};

use boxpaint::border::{BorderPaintInput, BorderPainter, BorderStyle, Sides};
use boxpaint::coords::{AffineTransform, Rect, Vec2};
use boxpaint::decoration::{DecorationLine, DecorationLines, DecorationStyle};
use boxpaint::paint::Color;
use boxpaint::scene::{
    Canvas, DoubleRoundedRectCmd, EllipseCmd, EmphasisMarksCmd, FillPathCmd, LineCmd, RectCmd, RoundedRectCmd,
    ShadowCmd, StateIds, StrokeLineCmd, TextBlobCmd, WavyLineCmd,
};
use boxpaint::text::{FontDescriptor, GlyphRun, SvgTextInfo, TextPaintInput, TextPainter};

/// Tracks save depth and the calls it received.
#[derive(Default)]
struct Tracer {
    calls: Vec<&'static str>,
    depth: usize,
    shadows: usize,
    /// Fail once this many calls went through.
    fail_after: Option<usize>,
}

impl Tracer {
    fn call(&mut self, name: &'static str) -> Result<()> {
        if let Some(limit) = self.fail_after {
            ensure!(self.calls.len() < limit, "device lost");
        }
        self.calls.push(name);
        Ok(())
    }
}

impl Canvas for Tracer {
    fn rect(&mut self, _: StateIds, _: &RectCmd) -> Result<()> {
        self.call("rect")
    }
    fn rounded_rect(&mut self, _: StateIds, _: &RoundedRectCmd) -> Result<()> {
        self.call("rounded_rect")
    }
    fn double_rounded_rect(&mut self, _: StateIds, _: &DoubleRoundedRectCmd) -> Result<()> {
        self.call("double_rounded_rect")
    }
    fn line(&mut self, _: StateIds, _: &LineCmd) -> Result<()> {
        self.call("line")
    }
    fn stroke_line(&mut self, _: StateIds, _: &StrokeLineCmd) -> Result<()> {
        self.call("stroke_line")
    }
    fn wavy_line(&mut self, _: StateIds, cmd: &WavyLineCmd) -> Result<()> {
        ensure!(cmd.tile_rect.width() > 0.0, "empty wave tile");
        self.call("wavy_line")
    }
    fn text_blob(&mut self, _: StateIds, _: &TextBlobCmd) -> Result<()> {
        self.call("text_blob")
    }
    fn emphasis_marks(&mut self, _: StateIds, _: &EmphasisMarksCmd) -> Result<()> {
        self.call("emphasis_marks")
    }
    fn ellipse(&mut self, _: StateIds, _: &EllipseCmd) -> Result<()> {
        self.call("ellipse")
    }
    fn fill_path(&mut self, _: StateIds, _: &FillPathCmd) -> Result<()> {
        self.call("fill_path")
    }
    fn shadow(&mut self, _: StateIds, _: &ShadowCmd) -> Result<()> {
        self.shadows += 1;
        self.call("shadow")
    }
    fn clear_shadow(&mut self, _: StateIds) -> Result<()> {
        self.shadows = 0;
        self.call("clear_shadow")
    }
    fn save(&mut self, _: StateIds) -> Result<()> {
        self.depth += 1;
        self.call("save")
    }
    fn restore(&mut self, _: StateIds) -> Result<()> {
        ensure!(self.depth > 0, "restore without save");
        self.depth -= 1;
        self.call("restore")
    }
    fn scale(&mut self, _: StateIds, _: Vec2) -> Result<()> {
        self.call("scale")
    }
    fn concat(&mut self, _: StateIds, _: &AffineTransform) -> Result<()> {
        self.call("concat")
    }
}

fn svg_text() -> TextPaintInput {
    let mut input = TextPaintInput {
        bbox: Rect::new(0.0, 0.0, 40.0, 20.0),
        decorations: vec![DecorationLine::new(
            DecorationLines::UNDERLINE | DecorationLines::SPELLING_ERROR,
            DecorationStyle::Solid,
            Color::black(),
        )],
        svg: Some(SvgTextInfo { scaling_factor: 2.0, ..Default::default() }),
        ..Default::default()
    };
    input.fragment.to = 2;
    input.fragment.shape.runs = vec![GlyphRun {
        font: FontDescriptor { ascent: 12.0, descent: 4.0, ..Default::default() },
        glyphs: vec![1, 2],
        positions: vec![0.0, 8.0],
        ..Default::default()
    }];
    input
}

#[test]
fn replay_visits_every_op_in_order() -> Result<()> {
    let list = TextPainter::new().paint(&svg_text());
    let mut canvas = Tracer::default();
    list.replay(&mut canvas)?;

    assert_eq!(canvas.calls, ["save", "scale", "wavy_line", "text_blob", "restore"]);
    assert_eq!(canvas.depth, 0);
    Ok(())
}

#[test]
fn replay_error_names_failing_item() {
    let input = BorderPaintInput {
        geometry: Rect::new(0.0, 0.0, 50.0, 50.0),
        widths: Sides::all(3.0),
        colors: Sides::all(Color::black()),
        styles: Some(Sides::all(BorderStyle::Groove)),
        ..Default::default()
    };
    let list = BorderPainter::new().paint(&input);
    assert!(list.len() > 2);

    let mut canvas = Tracer { fail_after: Some(2), ..Default::default() };
    let err = list.replay(&mut canvas).expect_err("third call fails");

    assert_eq!(canvas.calls.len(), 2);
    let message = format!("{err:#}");
    assert!(message.starts_with("replay failed at item 2 ("), "{message}");
    assert!(message.ends_with("device lost"), "{message}");
}
