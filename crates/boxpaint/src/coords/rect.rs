use super::Vec2;

/// Axis-aligned rectangle in CSS pixels (top-left origin, +Y down).
///
/// Paint operations store rects as origin + size. Border math is easier to
/// read in edge form, so [`Rect::from_ltrb`] and the edge accessors convert
/// between the two without rounding.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from its left, top, right and bottom edges.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    /// `[left, top, right, bottom]`.
    #[inline]
    pub fn ltrb(self) -> [f32; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Moves every edge inward by `d`.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        self.inset_sides(d, d, d, d)
    }

    /// Moves each edge inward by its own amount.
    ///
    /// The result never has a negative width or height: when the insets
    /// overlap, the far edges collapse onto the near ones.
    #[inline]
    pub fn inset_sides(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        let l = self.left() + left;
        let t = self.top() + top;
        let r = (self.right() - right).max(l);
        let b = (self.bottom() - bottom).max(t);
        Self::from_ltrb(l, t, r, b)
    }

    /// Maps a point given in unit coordinates (`0..=1` on each axis) into the rect.
    #[inline]
    pub fn map_unit(self, u: f32, v: f32) -> Vec2 {
        Vec2::new(self.origin.x + u * self.size.x, self.origin.y + v * self.size.y)
    }
}
