use crate::config::PaintConfig;
use crate::coords::{Rect, Vec2};
use crate::paint::{Color, StrokeCap};
use crate::scene::{Path, Recorder, StrokeLineCmd, StrokeStyle, WaveDefinition, WavyLineCmd};

use super::line::DecorationGeometry;

/// Turns resolved decoration geometry into paint operations.
#[derive(Debug, Clone, Default)]
pub struct DecorationLinePainter {
    config: PaintConfig,
}

impl DecorationLinePainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self { config }
    }

    /// Emits the operations for one decoration line in `color`.
    pub fn synthesize(&self, geometry: &DecorationGeometry, color: Color, rec: &mut Recorder) {
        if geometry.line_rect.width() <= 0.0 {
            return;
        }

        match geometry.stroke_style {
            StrokeStyle::None => {}
            StrokeStyle::Solid | StrokeStyle::Double => {
                rec.fill_rect(snap_y(geometry.line_rect), color);
                if geometry.stroke_style == StrokeStyle::Double {
                    let second = Rect {
                        origin: geometry.line_rect.origin + Vec2::new(0.0, geometry.double_offset),
                        size: geometry.line_rect.size,
                    };
                    rec.fill_rect(snap_y(second), color);
                }
            }
            StrokeStyle::Dotted | StrokeStyle::Dashed => {
                let thickness = geometry.thickness().round();
                let (mut from, mut to) = snapped_endpoints(geometry.line_rect);

                if (thickness as i32) % 2 != 0 {
                    from.y += 0.5;
                    to.y += 0.5;
                }

                let dashed = self.renders_as_dashes(thickness, geometry.stroke_style);
                if !dashed {
                    // Round caps overhang the endpoints by half the thickness.
                    from.x += thickness / 2.0;
                    to.x -= thickness / 2.0;
                }

                rec.stroke_line(StrokeLineCmd {
                    from,
                    to,
                    thickness,
                    style: geometry.stroke_style,
                    cap: if dashed { StrokeCap::Butt } else { StrokeCap::Round },
                    color,
                    antialias: geometry.antialias,
                });
            }
            StrokeStyle::Wavy => {
                let wave = geometry.wave;
                let pattern = wavy_pattern_rect(geometry.thickness(), &wave);
                rec.wavy_line(WavyLineCmd {
                    paint_rect: wavy_paint_rect(geometry, pattern),
                    tile_rect: Rect::new(0.0, 0.0, wave.wavelength, pattern.height()),
                    tile_path: wavy_path(&wave),
                    thickness: geometry.thickness(),
                    color,
                    wave,
                });
            }
        }
    }

    /// Area the line covers, for invalidation and culling.
    pub fn bounds(&self, geometry: &DecorationGeometry) -> Rect {
        match geometry.stroke_style {
            StrokeStyle::Dotted | StrokeStyle::Dashed => {
                let thickness = geometry.thickness().round();
                let (from, to) = snapped_endpoints(geometry.line_rect);
                Rect::new(from.x, from.y - thickness / 2.0, to.x - from.x, thickness)
            }
            StrokeStyle::Wavy => {
                let pattern = wavy_pattern_rect(geometry.thickness(), &geometry.wave);
                wavy_paint_rect(geometry, pattern)
            }
            StrokeStyle::Double => {
                let mut rect = geometry.line_rect;
                if geometry.double_offset < 0.0 {
                    rect.origin.y += geometry.double_offset;
                }
                rect.size.y += geometry.double_offset.abs();
                rect
            }
            StrokeStyle::Solid | StrokeStyle::None => geometry.line_rect,
        }
    }

    /// Thin dotted lines fall back to dashes; dots need round caps to read as dots.
    fn renders_as_dashes(&self, thickness: f32, style: StrokeStyle) -> bool {
        style == StrokeStyle::Dashed
            || (style == StrokeStyle::Dotted && thickness < self.config.thin_dotted_threshold)
    }
}

/// Snaps the top edge to the pixel grid and floors the height to at least 1.
fn snap_y(rect: Rect) -> Rect {
    Rect::new(
        rect.left(),
        (rect.top() + 0.5).floor(),
        rect.width(),
        rect.height().floor().max(1.0),
    )
}

fn snapped_endpoints(rect: Rect) -> (Vec2, Vec2) {
    let mid_y = (rect.top() + (rect.height() / 2.0).max(0.5)).floor();
    (Vec2::new(rect.left(), mid_y), Vec2::new(rect.right(), mid_y))
}

/// Three cubic segments around `y = 0.5`, starting at the wave phase.
pub fn wavy_path(wave: &WaveDefinition) -> Path {
    let wl = wave.wavelength;
    let cp = wave.control_point_distance;

    let mut path = Path::new();
    path.move_to(Vec2::new(wave.phase, 0.5));

    let mut x = wave.phase;
    for _ in 0..3 {
        path.cubic_to(
            Vec2::new(x + wl * 0.5, 0.5 + cp),
            Vec2::new(x + wl * 0.5, 0.5 - cp),
            Vec2::new(x + wl, 0.5),
        );
        x += wl;
    }
    path
}

/// Where one tile of the stroked wave lands when painted at the origin.
fn wavy_pattern_rect(thickness: f32, wave: &WaveDefinition) -> Rect {
    let amplitude = wave.control_point_distance;
    let top = (0.5 - amplitude - thickness / 2.0).floor();
    let bottom = (0.5 + amplitude + thickness / 2.0).ceil();
    Rect::new(0.0, top, wave.wavelength, bottom - top)
}

fn wavy_paint_rect(geometry: &DecorationGeometry, pattern: Rect) -> Rect {
    let line = geometry.line_rect;
    Rect::new(
        line.left() + pattern.left(),
        line.top() + pattern.top() + geometry.wavy_offset,
        line.width(),
        pattern.height(),
    )
}
