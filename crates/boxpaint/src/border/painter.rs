use crate::config::PaintConfig;
use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::{Color, DashPattern, PaintFlags, StrokeCap, Visibility};
use crate::scene::{DisplayList, NodeId, Recorder, StateIds};

use super::edge::{BorderProperties, BorderStyle, BoxSide, Edge, Sides};

/// Forces a specific rendering strategy instead of automatic selection.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BorderRenderHint {
    #[default]
    Auto,
    StrokedRect,
    DrawLine,
    FilledThinRect,
    DoubleStroked,
    DottedLines,
    GrooveRidge,
}

/// Resolved border style and geometry of one box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderPaintInput {
    /// Border-box rect.
    pub geometry: Rect,
    pub widths: Sides<f32>,
    pub colors: Sides<Color>,
    /// `None` paints every side solid.
    pub styles: Option<Sides<BorderStyle>>,
    pub radii: Option<CornerRadii>,
    pub visibility: Visibility,
    pub node_id: NodeId,
    pub state: StateIds,
    pub hint: BorderRenderHint,
}

impl BorderPaintInput {
    pub fn edge(&self, side: BoxSide) -> Edge {
        Edge {
            width: self.widths.get(side),
            color: self.colors.get(side),
            style: self.styles.map_or(BorderStyle::Solid, |s| s.get(side)),
        }
    }

    pub fn edges(&self) -> [Edge; 4] {
        BoxSide::ALL.map(|side| self.edge(side))
    }
}

/// Compiles a box border into paint operations.
#[derive(Debug, Clone, Default)]
pub struct BorderPainter {
    config: PaintConfig,
}

impl BorderPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn paint(&self, input: &BorderPaintInput) -> DisplayList {
        let mut rec = Recorder::new(input.state);

        if !input.visibility.is_visible() {
            log::debug!("border: node {:?} not visible", input.node_id);
            return rec.finish();
        }
        if input.widths.is_zero() {
            log::debug!("border: node {:?} has no border widths", input.node_id);
            return rec.finish();
        }

        let edges = input.edges();
        let props = BorderProperties::analyze(&edges, input.radii.as_ref());
        if props.visible_edge_count == 0 {
            log::debug!("border: node {:?} has no visible edges", input.node_id);
            return rec.finish();
        }

        log::debug!("border: node {:?} hint {:?} props {:?}", input.node_id, input.hint, props);

        match input.hint {
            BorderRenderHint::DrawLine => self.paint_sides_as_lines(input, &edges, &mut rec),
            BorderRenderHint::FilledThinRect => {
                self.paint_sides_as_filled_rects(input, &edges, &mut rec)
            }
            BorderRenderHint::DoubleStroked => self.paint_double(input, &edges, &props, &mut rec),
            BorderRenderHint::DottedLines => self.paint_dotted(input, &edges, &mut rec),
            BorderRenderHint::GrooveRidge => {
                self.paint_groove_ridge(input, &edges, &props, &mut rec)
            }
            BorderRenderHint::Auto | BorderRenderHint::StrokedRect => {
                if !self.paint_fast_path(input, &edges, &props, &mut rec) {
                    self.paint_sides(input, &edges, &mut rec);
                }
            }
        }

        rec.finish()
    }

    // ── fast path ─────────────────────────────────────────────────────────

    /// Single-shape rendering of a uniform solid border.
    ///
    /// Returns false (having emitted nothing) when the border does not qualify.
    fn paint_fast_path(
        &self,
        input: &BorderPaintInput,
        edges: &[Edge; 4],
        props: &BorderProperties,
        rec: &mut Recorder,
    ) -> bool {
        if !props.is_uniform_color || !props.is_uniform_style {
            return false;
        }

        let first = edges[props.first_visible_edge];
        if first.style != BorderStyle::Solid || props.visible_edge_count != 4 {
            return false;
        }

        let w = first.width;
        let flags = stroke_flags(first.color, w, first.style);

        match (props.is_uniform_width, props.is_rounded, input.radii) {
            (true, false, _) => {
                log::trace!("border: fast path stroked rect, width {w}");
                rec.rect(input.geometry.inset(w / 2.0), flags);
            }
            (true, true, Some(radii)) => {
                log::trace!("border: fast path stroked rounded rect, width {w}");
                rec.rounded_rect(input.geometry.inset(w / 2.0), radii.shrink(w / 2.0), flags);
            }
            (false, true, Some(radii)) => {
                log::trace!("border: fast path double rounded rect fill");
                let Sides { top, right, bottom, left } = input.widths;
                rec.double_rounded_rect(
                    (input.geometry, radii),
                    (
                        input.geometry.inset_sides(top, right, bottom, left),
                        radii.shrink_sides(top, right, bottom, left),
                    ),
                    PaintFlags::fill(first.color),
                );
            }
            _ => return false,
        }
        true
    }

    // ── per-side strategies ───────────────────────────────────────────────

    fn paint_sides(&self, input: &BorderPaintInput, edges: &[Edge; 4], rec: &mut Recorder) {
        for (side, edge) in BoxSide::ALL.into_iter().zip(edges) {
            if !edge.should_render() {
                continue;
            }
            if edge.width < self.config.thick_edge_threshold {
                self.paint_side_as_filled_rect(input.geometry, side, edge, rec);
            } else {
                self.paint_side_as_line(input.geometry, side, edge, rec);
            }
        }
    }

    fn paint_sides_as_lines(&self, input: &BorderPaintInput, edges: &[Edge; 4], rec: &mut Recorder) {
        for (side, edge) in BoxSide::ALL.into_iter().zip(edges) {
            if edge.should_render() {
                self.paint_side_as_line(input.geometry, side, edge, rec);
            }
        }
    }

    fn paint_sides_as_filled_rects(
        &self,
        input: &BorderPaintInput,
        edges: &[Edge; 4],
        rec: &mut Recorder,
    ) {
        for (side, edge) in BoxSide::ALL.into_iter().zip(edges) {
            if edge.should_render() {
                self.paint_side_as_filled_rect(input.geometry, side, edge, rec);
            }
        }
    }

    fn paint_side_as_filled_rect(&self, g: Rect, side: BoxSide, edge: &Edge, rec: &mut Recorder) {
        let w = edge.width;
        let [l, t, r, b] = g.ltrb();
        let rect = match side {
            BoxSide::Top => Rect::from_ltrb(l, t, r, t + w),
            BoxSide::Right => Rect::from_ltrb(r - w, t, r, b),
            BoxSide::Bottom => Rect::from_ltrb(l, b - w, r, b),
            BoxSide::Left => Rect::from_ltrb(l, t, l + w, b),
        };
        log::trace!("border: {side:?} filled rect {:?}", rect.ltrb());
        rec.fill_rect(rect, self.border_color(edge.color, side, edge.style));
    }

    fn paint_side_as_line(&self, g: Rect, side: BoxSide, edge: &Edge, rec: &mut Recorder) {
        let (from, to) = centerline(g, side, edge.width);
        log::trace!("border: {side:?} stroked line, width {}", edge.width);
        let color = self.border_color(edge.color, side, edge.style);
        rec.line(from, to, stroke_flags(color, edge.width, edge.style));
    }

    // ── forced strategies ─────────────────────────────────────────────────

    /// Two solid strokes of `ceil(W/3)` at the outer and inner thirds.
    fn paint_double(
        &self,
        input: &BorderPaintInput,
        edges: &[Edge; 4],
        props: &BorderProperties,
        rec: &mut Recorder,
    ) {
        let first = edges[props.first_visible_edge];
        let w = first.width;
        let sw = (w / 3.0).ceil();
        let outer = input.geometry.inset(sw / 2.0);
        let inner = input.geometry.inset(w - sw / 2.0);
        let flags = stroke_flags(first.color, sw, BorderStyle::Solid);

        log::trace!("border: double, stroke {sw}");
        match input.radii.filter(|_| props.is_rounded) {
            Some(radii) => {
                rec.rounded_rect(outer, radii.shrink(sw / 2.0), flags.clone());
                rec.rounded_rect(inner, radii.shrink((w + sw) / 2.0), flags);
            }
            None => {
                rec.rect(outer, flags.clone());
                rec.rect(inner, flags);
            }
        }
    }

    fn paint_dotted(&self, input: &BorderPaintInput, edges: &[Edge; 4], rec: &mut Recorder) {
        for (side, edge) in BoxSide::ALL.into_iter().zip(edges) {
            if !edge.should_render() {
                continue;
            }
            let (from, to) = centerline(input.geometry, side, edge.width);
            rec.line(from, to, stroke_flags(edge.color, edge.width, BorderStyle::Dotted));
        }
    }

    /// Each visible side as an outer and an inner half-width strip.
    fn paint_groove_ridge(
        &self,
        input: &BorderPaintInput,
        edges: &[Edge; 4],
        props: &BorderProperties,
        rec: &mut Recorder,
    ) {
        let first = edges[props.first_visible_edge];
        let w = first.width;
        let half = w / 2.0;
        let is_groove = first.style == BorderStyle::Groove;
        let dark = first.color.dark(self.config.relief_darken_factor);
        let light = first.color;
        let [l, t, r, b] = input.geometry.ltrb();

        for (side, edge) in BoxSide::ALL.into_iter().zip(edges) {
            if !edge.should_render() {
                continue;
            }
            let (outer_color, inner_color) = if is_groove == side.is_top_or_left() {
                (dark, light)
            } else {
                (light, dark)
            };
            let (outer, inner) = match side {
                BoxSide::Top => (
                    Rect::from_ltrb(l, t, r, t + half),
                    Rect::from_ltrb(l, t + half, r, t + w),
                ),
                BoxSide::Bottom => (
                    Rect::from_ltrb(l, b - half, r, b),
                    Rect::from_ltrb(l, b - w, r, b - half),
                ),
                BoxSide::Right => (
                    Rect::from_ltrb(r - half, t, r, b),
                    Rect::from_ltrb(r - w, t, r - half, b),
                ),
                BoxSide::Left => (
                    Rect::from_ltrb(l, t, l + half, b),
                    Rect::from_ltrb(l + half, t, l + w, b),
                ),
            };
            rec.fill_rect(outer, outer_color);
            rec.fill_rect(inner, inner_color);
        }
    }

    // ── helpers ───────────────────────────────────────────────────────────

    /// Relief shading for inset/outset/groove/ridge sides.
    pub fn border_color(&self, color: Color, side: BoxSide, style: BorderStyle) -> Color {
        let inset_like = match style {
            BorderStyle::Inset | BorderStyle::Groove => true,
            BorderStyle::Outset | BorderStyle::Ridge => false,
            _ => return color,
        };
        if side.is_top_or_left() == inset_like {
            color.dark(self.config.relief_darken_factor)
        } else {
            color
        }
    }
}

/// Segment along the middle of a side's border strip.
fn centerline(g: Rect, side: BoxSide, width: f32) -> (Vec2, Vec2) {
    let half = width / 2.0;
    let [l, t, r, b] = g.ltrb();
    match side {
        BoxSide::Top => (Vec2::new(l, t + half), Vec2::new(r, t + half)),
        BoxSide::Right => (Vec2::new(r - half, t), Vec2::new(r - half, b)),
        BoxSide::Bottom => (Vec2::new(l, b - half), Vec2::new(r, b - half)),
        BoxSide::Left => (Vec2::new(l + half, t), Vec2::new(l + half, b)),
    }
}

/// Stroke flags with the dash pattern implied by `style`.
fn stroke_flags(color: Color, width: f32, style: BorderStyle) -> PaintFlags {
    let flags = PaintFlags::stroke(color, width);
    match style {
        BorderStyle::Dotted => flags.with_dash(DashPattern::new(width, width), StrokeCap::Round),
        BorderStyle::Dashed => flags.with_dash(DashPattern::new(3.0 * width, width), StrokeCap::Butt),
        _ => flags,
    }
}
