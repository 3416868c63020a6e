use crate::config::PaintConfig;
use crate::coords::{AffineTransform, Rect, Vec2};
use crate::decoration::{DecorationContext, DecorationMetrics, DecorationPainter};
use crate::paint::{PaintFlags, PaintStyle};
use crate::scene::{DisplayList, EmphasisMarksCmd, Recorder, TextBlobCmd};

use super::input::{PaintPhase, ShapeResult, TextCombine, TextPaintInput, TextPaintStyle, WritingMode};
use super::marker::paint_symbol_marker;

/// Paints one text fragment.
///
/// Order: under/overlines, glyphs, line-throughs, emphasis marks. Symbol
/// markers replace all of it.
#[derive(Debug, Clone, Default)]
pub struct TextPainter {
    config: PaintConfig,
}

impl TextPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn paint(&self, input: &TextPaintInput) -> DisplayList {
        let mut rec = Recorder::new(input.state);

        if !input.visibility.is_visible() {
            log::debug!("text: node {:?} not visible", input.node_id);
            return rec.finish();
        }

        if let Some(marker) = &input.symbol_marker {
            paint_symbol_marker(marker, input.writing_mode, self.config.marker_stroke_width, &mut rec);
            return rec.finish();
        }

        let fragment = &input.fragment;
        if fragment.from >= fragment.to {
            log::debug!("text: node {:?} empty range", input.node_id);
            return rec.finish();
        }
        if !fragment.has_shape_result() && !input.is_line_break {
            log::debug!("text: node {:?} has no shaped runs", input.node_id);
            return rec.finish();
        }
        if input.is_flow_control && input.decorations.is_empty() {
            log::debug!("text: node {:?} flow control without decorations", input.node_id);
            return rec.finish();
        }

        let text_clip = input.paint_phase == PaintPhase::TextClip;
        let style = if text_clip { input.style.for_text_clip() } else { input.style.clone() };

        let shape = &fragment.shape;
        let scale = input.svg.map_or(1.0, |svg| svg.scaling_factor);
        let svg_transform = input.svg.and_then(|svg| svg.transform);
        let rotation = writing_mode_rotation(input.bbox, input.writing_mode);
        let origin = text_origin(input.bbox, shape, scale, input.text_combine.as_ref());

        let saved = scale != 1.0 || svg_transform.is_some() || rotation.is_some();
        if saved {
            rec.save();
            if scale != 1.0 {
                rec.scale(1.0 / scale, 1.0 / scale);
            }
            if let Some(t) = svg_transform {
                rec.concat(t);
            }
            if let Some(r) = rotation {
                rec.concat(r);
            }
        }

        let decorations = (!input.decorations.is_empty()).then(|| {
            DecorationPainter::new(
                DecorationContext {
                    origin: input.bbox.origin,
                    width: input.bbox.width(),
                    metrics: self.decoration_metrics(shape),
                    decorations: input.decorations.clone(),
                    text_clip,
                },
                style.shadow_list().to_vec(),
                self.config,
            )
        });

        if let Some(d) = &decorations {
            d.paint_under_or_over(&mut rec);
        }

        if decorations.is_none() {
            // Without decorations the glyph shadows ride on the blob itself;
            // nothing clears them afterwards.
            rec.shadows(style.shadow_list());
        }
        rec.text_blob(TextBlobCmd {
            origin,
            node_id: input.node_id,
            flags: text_flags(&style),
            bounds: shape.bounds,
            runs: shape.runs.clone(),
            paint_order: style.paint_order,
        });

        if let Some(d) = &decorations {
            d.paint_line_through(&mut rec);
        }

        if let Some(mark) = input.emphasis_mark.as_ref().filter(|m| !m.mark.is_empty()) {
            if !input.is_ellipsis {
                let positions = shape
                    .runs
                    .iter()
                    .flat_map(|run| run.positions.iter().map(move |p| p + run.offset.x))
                    .collect();
                rec.emphasis_marks(EmphasisMarksCmd {
                    origin: Vec2::new(origin.x, origin.y + mark.offset),
                    mark: mark.mark.clone(),
                    positions,
                    color: style.emphasis_mark_color,
                    font_size: shape.runs.first().map_or(self.config.fallback_font.size, |r| r.font.size),
                });
            }
        }

        if saved {
            rec.restore();
        }

        log::debug!("text: node {:?} emitted {} op(s)", input.node_id, rec.len());
        rec.finish()
    }

    /// Decoration metrics from the first run, or the fallback font.
    fn decoration_metrics(&self, shape: &ShapeResult) -> DecorationMetrics {
        match shape.runs.first() {
            Some(run) => DecorationMetrics {
                font_size: run.font.size,
                ascent: run.font.ascent,
                descent: run.font.descent,
                underline_position: run.font.underline_position,
                underline_thickness: run.font.underline_thickness,
            },
            None => {
                let f = self.config.fallback_font;
                DecorationMetrics {
                    font_size: f.size,
                    ascent: f.ascent,
                    descent: f.descent,
                    underline_position: None,
                    underline_thickness: None,
                }
            }
        }
    }
}

/// Baseline-left origin of the glyphs.
fn text_origin(bbox: Rect, shape: &ShapeResult, scale: f32, combine: Option<&TextCombine>) -> Vec2 {
    let ascent = shape.runs.first().map_or(0.0, |r| r.font.ascent);
    let mut origin = Vec2::new(bbox.left(), bbox.top() + ascent * scale);
    if let Some(c) = combine {
        origin.x += c.left_adjustment;
        origin.y = c.top_adjustment;
    }
    origin
}

/// Rotation about the box center for vertical writing modes.
fn writing_mode_rotation(bbox: Rect, mode: WritingMode) -> Option<AffineTransform> {
    let degrees = match mode {
        WritingMode::HorizontalTb => return None,
        WritingMode::VerticalRl => 90.0,
        WritingMode::VerticalLr => -90.0,
    };
    Some(AffineTransform::rotation_about(degrees, bbox.center()))
}

fn text_flags(style: &TextPaintStyle) -> PaintFlags {
    let mut flags = PaintFlags::fill(style.fill_color);
    flags.stroke_width = style.stroke_width;
    if style.stroke_width > 0.0 {
        flags.style = PaintStyle::StrokeAndFill;
    }
    flags
}
