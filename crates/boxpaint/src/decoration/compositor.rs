use crate::config::PaintConfig;
use crate::paint::{Color, Shadow};
use crate::scene::Recorder;

use super::line::DecorationLines;
use super::resolver::{DecorationContext, DecorationResolver};
use super::synth::DecorationLinePainter;

/// Pass of the shadow protocol being painted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShadowPhase {
    /// Content painted in black under installed shadows.
    Shadow,
    Foreground,
}

/// Paints `content` once per required pass.
///
/// With shadows: install them (last-declared first), paint the shadow pass,
/// clear them, then paint the foreground pass. Without shadows only the
/// foreground pass runs.
pub fn paint_with_text_shadow<F>(rec: &mut Recorder, shadows: &[Shadow], mut content: F)
where
    F: FnMut(&mut Recorder, ShadowPhase),
{
    if !shadows.is_empty() {
        rec.shadows(shadows);
        content(rec, ShadowPhase::Shadow);
        rec.clear_shadow();
    }
    content(rec, ShadowPhase::Foreground);
}

/// Paints the decoration groups of one text fragment.
#[derive(Debug, Clone)]
pub struct DecorationPainter {
    resolver: DecorationResolver,
    lines: DecorationLinePainter,
    shadows: Vec<Shadow>,
}

impl DecorationPainter {
    pub fn new(ctx: DecorationContext, shadows: Vec<Shadow>, config: PaintConfig) -> Self {
        Self {
            resolver: DecorationResolver::new(ctx),
            lines: DecorationLinePainter::with_config(config),
            shadows,
        }
    }

    #[inline]
    pub fn resolver(&self) -> &DecorationResolver {
        &self.resolver
    }

    /// Underlines, overlines and error lines (painted before the glyphs).
    ///
    /// An entry carrying a spelling or grammar error paints only the error
    /// line; its underline and overline are skipped.
    pub fn paint_under_or_over(&self, rec: &mut Recorder) {
        if !self.resolver.has_any(DecorationLines::UNDER_OR_OVER) {
            return;
        }
        paint_with_text_shadow(rec, &self.shadows, |rec, phase| {
            for (i, entry) in self.resolver.decorations().iter().enumerate() {
                let color = self.color_for_phase(i, phase);

                if entry.lines.has_spelling_or_grammar_error() {
                    let error = entry.lines & (DecorationLines::SPELLING_ERROR | DecorationLines::GRAMMAR_ERROR);
                    self.paint_line(i, error, color, rec);
                    continue;
                }
                self.paint_line(i, DecorationLines::UNDERLINE, color, rec);
                self.paint_line(i, DecorationLines::OVERLINE, color, rec);
            }
        });
    }

    /// Line-throughs (painted after the glyphs).
    pub fn paint_line_through(&self, rec: &mut Recorder) {
        if !self.resolver.has_any(DecorationLines::LINE_THROUGH) {
            return;
        }
        paint_with_text_shadow(rec, &self.shadows, |rec, phase| {
            for i in 0..self.resolver.decorations().len() {
                let color = self.color_for_phase(i, phase);
                self.paint_line(i, DecorationLines::LINE_THROUGH, color, rec);
            }
        });
    }

    fn paint_line(&self, index: usize, line: DecorationLines, color: Color, rec: &mut Recorder) {
        if let Some(geometry) = self.resolver.resolve(index, line) {
            self.lines.synthesize(&geometry, color, rec);
        }
    }

    fn color_for_phase(&self, index: usize, phase: ShadowPhase) -> Color {
        match phase {
            ShadowPhase::Shadow => Color::black(),
            ShadowPhase::Foreground => self.resolver.line_color(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::decoration::{DecorationLine, DecorationMetrics, DecorationStyle};
    use crate::scene::{DrawCmd, StateIds};

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    fn painter(decorations: Vec<DecorationLine>, shadows: Vec<Shadow>) -> DecorationPainter {
        let ctx = DecorationContext {
            origin: Vec2::new(0.0, 20.0),
            width: 50.0,
            metrics: DecorationMetrics { font_size: 16.0, ascent: 14.0, descent: 4.0, ..Default::default() },
            decorations,
            text_clip: false,
        };
        DecorationPainter::new(ctx, shadows, PaintConfig::default())
    }

    fn solid(lines: DecorationLines) -> DecorationLine {
        DecorationLine::new(lines, DecorationStyle::Solid, RED)
    }

    /// `(kind, color)` per op; color is `None` for non-drawing ops.
    fn summary(rec: Recorder) -> Vec<(&'static str, Option<Color>)> {
        rec.finish()
            .cmds()
            .map(|cmd| {
                let color = match cmd {
                    DrawCmd::Rect(r) => Some(r.flags.color),
                    DrawCmd::WavyLine(w) => Some(w.color),
                    _ => None,
                };
                (cmd.name(), color)
            })
            .collect()
    }

    #[test]
    fn shadow_protocol_paints_black_then_true_colors() {
        let shadows = vec![
            Shadow::new(1.0, 1.0, 0.0, Color::black()),
            Shadow::new(2.0, 2.0, 4.0, Color::black()),
        ];
        let p = painter(vec![solid(DecorationLines::UNDERLINE)], shadows);
        let mut rec = Recorder::new(StateIds::default());
        p.paint_under_or_over(&mut rec);

        assert_eq!(
            summary(rec),
            [
                ("shadow", None),
                ("shadow", None),
                ("rect", Some(Color::black())),
                ("clear_shadow", None),
                ("rect", Some(RED)),
            ]
        );
    }

    #[test]
    fn group_without_matching_lines_emits_nothing() {
        let shadows = vec![Shadow::new(1.0, 1.0, 0.0, Color::black())];
        let p = painter(vec![solid(DecorationLines::UNDERLINE)], shadows);
        let mut rec = Recorder::new(StateIds::default());
        p.paint_line_through(&mut rec);
        assert!(rec.is_empty());
    }

    #[test]
    fn error_line_replaces_underline_and_overline_of_its_entry() {
        let p = painter(
            vec![
                solid(DecorationLines::SPELLING_ERROR | DecorationLines::UNDERLINE | DecorationLines::OVERLINE),
                solid(DecorationLines::UNDERLINE | DecorationLines::OVERLINE),
            ],
            vec![],
        );
        let mut rec = Recorder::new(StateIds::default());
        p.paint_under_or_over(&mut rec);

        let kinds: Vec<_> = summary(rec).into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ["wavy_line", "rect", "rect"]);
    }

    #[test]
    fn underline_precedes_overline_within_an_entry() {
        let p = painter(vec![solid(DecorationLines::OVERLINE | DecorationLines::UNDERLINE)], vec![]);
        let mut rec = Recorder::new(StateIds::default());
        p.paint_under_or_over(&mut rec);

        let tops: Vec<_> = rec
            .finish()
            .cmds()
            .map(|cmd| match cmd {
                DrawCmd::Rect(r) => r.rect.top(),
                other => panic!("unexpected {}", other.name()),
            })
            .collect();
        // underline at baseline + descent, overline at baseline - ascent
        assert_eq!(tops, [24.0, 6.0]);
    }
}
