use crate::coords::CornerRadii;
use crate::paint::Color;

/// CSS `border-style`.
///
/// Numeric codes: `none = 0` .. `double = 9`, in declaration order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BorderStyle {
    None,
    Hidden,
    Inset,
    Groove,
    Outset,
    Ridge,
    Dotted,
    Dashed,
    #[default]
    Solid,
    Double,
}

impl BorderStyle {
    /// Parses a CSS keyword. Unknown keywords resolve to `Solid`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "none" => BorderStyle::None,
            "hidden" => BorderStyle::Hidden,
            "inset" => BorderStyle::Inset,
            "groove" => BorderStyle::Groove,
            "outset" => BorderStyle::Outset,
            "ridge" => BorderStyle::Ridge,
            "dotted" => BorderStyle::Dotted,
            "dashed" => BorderStyle::Dashed,
            "double" => BorderStyle::Double,
            "solid" => BorderStyle::Solid,
            other => {
                log::debug!("unknown border style {other:?}, using solid");
                BorderStyle::Solid
            }
        }
    }
}

impl From<u8> for BorderStyle {
    /// Unknown codes resolve to `Solid`.
    fn from(code: u8) -> Self {
        match code {
            0 => BorderStyle::None,
            1 => BorderStyle::Hidden,
            2 => BorderStyle::Inset,
            3 => BorderStyle::Groove,
            4 => BorderStyle::Outset,
            5 => BorderStyle::Ridge,
            6 => BorderStyle::Dotted,
            7 => BorderStyle::Dashed,
            9 => BorderStyle::Double,
            _ => BorderStyle::Solid,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoxSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BoxSide {
    /// Paint order of the per-side strategies.
    pub const ALL: [BoxSide; 4] = [BoxSide::Top, BoxSide::Right, BoxSide::Bottom, BoxSide::Left];

    #[inline]
    pub fn is_top_or_left(self) -> bool {
        matches!(self, BoxSide::Top | BoxSide::Left)
    }
}

/// One value per box side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    #[inline]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(v: T) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn get(&self, side: BoxSide) -> T {
        match side {
            BoxSide::Top => self.top,
            BoxSide::Right => self.right,
            BoxSide::Bottom => self.bottom,
            BoxSide::Left => self.left,
        }
    }
}

impl Sides<f32> {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Resolved border of one side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Edge {
    pub width: f32,
    pub color: Color,
    pub style: BorderStyle,
}

impl Edge {
    #[inline]
    pub const fn new(width: f32, color: Color, style: BorderStyle) -> Self {
        Self { width, color, style }
    }

    #[inline]
    pub fn should_render(&self) -> bool {
        self.width > 0.0
            && !matches!(self.style, BorderStyle::None | BorderStyle::Hidden)
            && !self.color.is_fully_transparent()
    }

    /// Occupies space but paints nothing.
    #[inline]
    pub fn present_but_invisible(&self) -> bool {
        self.width > 0.0 && (self.style == BorderStyle::Hidden || self.color.is_fully_transparent())
    }
}

/// Summary of the four edges that drives strategy selection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderProperties {
    pub visible_edge_count: u32,
    /// Index into `BoxSide::ALL` of the first visible edge; meaningless when
    /// `visible_edge_count == 0`.
    pub first_visible_edge: usize,
    pub is_uniform_width: bool,
    pub is_uniform_color: bool,
    pub is_uniform_style: bool,
    pub is_rounded: bool,
}

impl Default for BorderProperties {
    fn default() -> Self {
        Self {
            visible_edge_count: 0,
            first_visible_edge: 0,
            is_uniform_width: true,
            is_uniform_color: true,
            is_uniform_style: true,
            is_rounded: false,
        }
    }
}

impl BorderProperties {
    /// Classifies `edges` (top, right, bottom, left).
    ///
    /// Uniformity compares every visible edge against the first visible one
    /// by exact equality. An edge that takes space but paints nothing breaks
    /// width and color uniformity without counting as visible.
    pub fn analyze(edges: &[Edge; 4], radii: Option<&CornerRadii>) -> Self {
        let mut props = Self::default();

        for (i, edge) in edges.iter().enumerate() {
            if !edge.should_render() {
                if edge.present_but_invisible() {
                    props.is_uniform_width = false;
                    props.is_uniform_color = false;
                }
                continue;
            }

            props.visible_edge_count += 1;
            if props.visible_edge_count == 1 {
                props.first_visible_edge = i;
                continue;
            }

            let first = &edges[props.first_visible_edge];
            props.is_uniform_style &= edge.style == first.style;
            props.is_uniform_width &= edge.width == first.width;
            props.is_uniform_color &= edge.color == first.color;
        }

        props.is_rounded = radii.is_some_and(|r| !r.is_zero());
        props
    }

    #[inline]
    pub fn first_visible_side(&self) -> BoxSide {
        BoxSide::ALL[self.first_visible_edge]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: f32) -> Edge {
        Edge::new(w, Color::black(), BorderStyle::Solid)
    }

    // ── edge predicates ───────────────────────────────────────────────────

    #[test]
    fn edge_render_predicates() {
        assert!(solid(1.0).should_render());
        assert!(!solid(0.0).should_render());
        assert!(!Edge::new(2.0, Color::black(), BorderStyle::None).should_render());

        let hidden = Edge::new(2.0, Color::black(), BorderStyle::Hidden);
        assert!(!hidden.should_render());
        assert!(hidden.present_but_invisible());

        let clear = Edge::new(2.0, Color::transparent(), BorderStyle::Solid);
        assert!(!clear.should_render());
        assert!(clear.present_but_invisible());

        // `none` takes no space in this model's sense: not present either.
        assert!(!Edge::new(2.0, Color::black(), BorderStyle::None).present_but_invisible());
    }

    #[test]
    fn unknown_styles_resolve_to_solid() {
        assert_eq!(BorderStyle::from_keyword("ridge"), BorderStyle::Ridge);
        assert_eq!(BorderStyle::from_keyword(" Dotted "), BorderStyle::Dotted);
        assert_eq!(BorderStyle::from_keyword("wobbly"), BorderStyle::Solid);
        assert_eq!(BorderStyle::from(9), BorderStyle::Double);
        assert_eq!(BorderStyle::from(42), BorderStyle::Solid);
    }

    // ── analyze ───────────────────────────────────────────────────────────

    #[test]
    fn uniform_box_is_uniform() {
        let p = BorderProperties::analyze(&[solid(2.0); 4], None);
        assert_eq!(p.visible_edge_count, 4);
        assert_eq!(p.first_visible_edge, 0);
        assert!(p.is_uniform_width && p.is_uniform_color && p.is_uniform_style);
        assert!(!p.is_rounded);
    }

    #[test]
    fn first_visible_edge_seeds_comparison() {
        let edges = [solid(0.0), solid(3.0), solid(3.0), solid(3.0)];
        let p = BorderProperties::analyze(&edges, None);
        assert_eq!(p.visible_edge_count, 3);
        assert_eq!(p.first_visible_side(), BoxSide::Right);
        assert!(p.is_uniform_width);
    }

    #[test]
    fn hidden_edge_breaks_width_and_color_uniformity() {
        let mut edges = [solid(2.0); 4];
        edges[2].style = BorderStyle::Hidden;
        let p = BorderProperties::analyze(&edges, None);

        assert_eq!(p.visible_edge_count, 3);
        assert!(!p.is_uniform_width);
        assert!(!p.is_uniform_color);
        assert!(p.is_uniform_style);
    }

    #[test]
    fn translucent_visible_edge_breaks_color_uniformity() {
        let mut edges = [solid(1.0); 4];
        edges[3].color = Color::new(0.0, 0.0, 0.0, 0.5);
        let p = BorderProperties::analyze(&edges, None);
        assert_eq!(p.visible_edge_count, 4);
        assert!(!p.is_uniform_color);
    }

    #[test]
    fn rounded_requires_a_positive_radius() {
        let edges = [solid(1.0); 4];
        assert!(!BorderProperties::analyze(&edges, Some(&CornerRadii::zero())).is_rounded);
        assert!(BorderProperties::analyze(&edges, Some(&CornerRadii::all(4.0))).is_rounded);

        let mut one = [0.0; 8];
        one[5] = 0.5;
        assert!(BorderProperties::analyze(&edges, Some(&CornerRadii::from_array(one))).is_rounded);
    }
}
