//! Op-by-op comparison of two display lists.
//!
//! Used by conformance runs: the expected list is recorded from a known-good
//! engine, the actual one comes from the painters here. Operations are compared
//! pairwise by index; floats within tolerance count as equal.

use std::fmt;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, PaintFlags};
use crate::scene::{DisplayList, DrawCmd, DrawItem, PathVerb};

/// Maximum accepted absolute differences.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    /// Coordinates, lengths, widths, offsets (CSS pixels).
    pub geometry: f32,
    /// Per color channel.
    pub color: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { geometry: 0.5, color: 0.01 }
    }
}

impl Tolerance {
    /// Exact comparison.
    pub const fn exact() -> Self {
        Self { geometry: 0.0, color: 0.0 }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DifferenceKind {
    /// Different operation kinds at the same index.
    Kind,
    State,
    Geometry,
    Color,
    /// Discrete fields: styles, caps, glyph ids, flags.
    Attribute,
    /// Present in the expected list only.
    Missing,
    /// Present in the actual list only.
    Extra,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub index: usize,
    pub kind: DifferenceKind,
    pub detail: String,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {:?}: {}", self.index, self.kind, self.detail)
    }
}

/// Lists every difference between `expected` and `actual`.
///
/// Each index contributes at most one difference, the first one found in
/// the order kind, state, attributes, geometry, color.
pub fn diff(expected: &DisplayList, actual: &DisplayList, tolerance: Tolerance) -> Vec<Difference> {
    let mut out = Vec::new();
    let (exp, act) = (expected.items(), actual.items());

    for (index, (e, a)) in exp.iter().zip(act).enumerate() {
        if let Some((kind, detail)) = compare_item(e, a, tolerance) {
            out.push(Difference { index, kind, detail });
        }
    }

    for (index, item) in exp.iter().enumerate().skip(act.len()) {
        out.push(Difference { index, kind: DifferenceKind::Missing, detail: item.cmd.name().to_owned() });
    }
    for (index, item) in act.iter().enumerate().skip(exp.len()) {
        out.push(Difference { index, kind: DifferenceKind::Extra, detail: item.cmd.name().to_owned() });
    }

    log::debug!(
        "compare: {} expected, {} actual, {} difference(s)",
        exp.len(),
        act.len(),
        out.len()
    );
    out
}

fn compare_item(e: &DrawItem, a: &DrawItem, tol: Tolerance) -> Option<(DifferenceKind, String)> {
    if e.cmd.name() != a.cmd.name() {
        return Some((DifferenceKind::Kind, format!("expected {}, got {}", e.cmd.name(), a.cmd.name())));
    }
    if e.state != a.state {
        return Some((DifferenceKind::State, format!("expected {:?}, got {:?}", e.state, a.state)));
    }

    let (se, sa) = (Sample::of(&e.cmd), Sample::of(&a.cmd));

    if se.attrs != sa.attrs {
        return Some((DifferenceKind::Attribute, format!("expected {:?}, got {:?}", se.attrs, sa.attrs)));
    }

    if se.geometry.len() != sa.geometry.len() {
        return Some((
            DifferenceKind::Geometry,
            format!("expected {} value(s), got {}", se.geometry.len(), sa.geometry.len()),
        ));
    }
    if let Some((i, (x, y))) =
        se.geometry.iter().zip(&sa.geometry).enumerate().find(|(_, (x, y))| !within(**x, **y, tol.geometry))
    {
        return Some((DifferenceKind::Geometry, format!("value {i}: expected {x}, got {y}")));
    }

    if se.colors.len() != sa.colors.len() {
        return Some((
            DifferenceKind::Color,
            format!("expected {} color(s), got {}", se.colors.len(), sa.colors.len()),
        ));
    }
    let channels = |c: &Color| [c.r, c.g, c.b, c.a];
    if let Some((i, (x, y))) = se.colors.iter().zip(&sa.colors).enumerate().find(|(_, (x, y))| {
        channels(x).iter().zip(channels(y)).any(|(p, q)| !within(*p, q, tol.color))
    }) {
        return Some((DifferenceKind::Color, format!("color {i}: expected {x:?}, got {y:?}")));
    }

    None
}

#[inline]
fn within(a: f32, b: f32, tolerance: f32) -> bool {
    a == b || (a - b).abs() <= tolerance
}

/// Flattened view of one operation: numbers, colors and discrete fields.
#[derive(Debug, Default)]
struct Sample {
    geometry: Vec<f32>,
    colors: Vec<Color>,
    attrs: Vec<String>,
}

impl Sample {
    fn of(cmd: &DrawCmd) -> Self {
        let mut s = Sample::default();
        match cmd {
            DrawCmd::Rect(c) => {
                s.rect(c.rect);
                s.flags(&c.flags);
            }
            DrawCmd::RoundedRect(c) => {
                s.rect(c.rect);
                s.geometry.extend(c.radii.to_array());
                s.flags(&c.flags);
            }
            DrawCmd::DoubleRoundedRect(c) => {
                s.rect(c.outer);
                s.geometry.extend(c.outer_radii.to_array());
                s.rect(c.inner);
                s.geometry.extend(c.inner_radii.to_array());
                s.flags(&c.flags);
            }
            DrawCmd::Line(c) => {
                s.points(&[c.from, c.to]);
                s.flags(&c.flags);
            }
            DrawCmd::StrokeLine(c) => {
                s.points(&[c.from, c.to]);
                s.geometry.push(c.thickness);
                s.colors.push(c.color);
                s.attr(c.style);
                s.attr(c.cap);
                s.attr(c.antialias);
            }
            DrawCmd::WavyLine(c) => {
                s.rect(c.paint_rect);
                s.rect(c.tile_rect);
                s.geometry.extend([c.thickness, c.wave.wavelength, c.wave.control_point_distance, c.wave.phase]);
                for verb in &c.tile_path.verbs {
                    match verb {
                        PathVerb::MoveTo(p) => s.points(&[*p]),
                        PathVerb::CubicTo { cp1, cp2, to } => s.points(&[*cp1, *cp2, *to]),
                    }
                    s.attr(std::mem::discriminant(verb));
                }
                s.colors.push(c.color);
            }
            DrawCmd::TextBlob(c) => {
                s.point(c.origin);
                s.rect(c.bounds);
                s.flags(&c.flags);
                s.attr(c.node_id);
                s.attr(c.paint_order);
                for run in &c.runs {
                    s.geometry.push(run.font.size);
                    s.geometry.extend(&run.positions);
                    s.point(run.offset);
                    s.attr(&run.glyphs);
                    s.attr(run.font.typeface_id);
                }
            }
            DrawCmd::EmphasisMarks(c) => {
                s.point(c.origin);
                s.geometry.push(c.font_size);
                s.geometry.extend(&c.positions);
                s.colors.push(c.color);
                s.attr(&c.mark);
            }
            DrawCmd::Ellipse(c) => {
                s.rect(c.rect);
                s.flags(&c.flags);
            }
            DrawCmd::FillPath(c) => {
                s.points(&c.points);
                s.colors.push(c.color);
            }
            DrawCmd::Shadow(c) => {
                s.point(c.offset);
                s.geometry.push(c.blur_sigma);
                s.colors.push(c.color);
            }
            DrawCmd::ClearShadow | DrawCmd::Save | DrawCmd::Restore => {}
            DrawCmd::Scale(f) => s.point(*f),
            DrawCmd::Concat(t) => s.geometry.extend(bytemuck::cast_slice::<_, f32>(std::slice::from_ref(t))),
        }
        s
    }

    fn rect(&mut self, r: Rect) {
        self.geometry.extend(r.ltrb());
    }

    fn point(&mut self, p: Vec2) {
        self.points(&[p]);
    }

    fn points(&mut self, points: &[Vec2]) {
        self.geometry.extend_from_slice(bytemuck::cast_slice(points));
    }

    fn flags(&mut self, f: &PaintFlags) {
        self.colors.push(f.color);
        self.geometry.push(f.stroke_width);
        self.attr(f.style);
        self.attr(f.cap);
        self.attr(f.join);
        self.attr(f.dash.is_some());
        if let Some(d) = f.dash {
            self.geometry.extend([d.on, d.off, d.phase]);
        }
        self.attr(f.shadows.len());
        for shadow in &f.shadows {
            self.point(shadow.offset);
            self.geometry.push(shadow.blur);
            self.colors.push(shadow.color);
        }
    }

    fn attr(&mut self, value: impl fmt::Debug) {
        self.attrs.push(format!("{value:?}"));
    }
}
