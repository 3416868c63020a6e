use super::Vec2;

/// Per-corner elliptical radii for a rounded rectangle (CSS pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Each corner carries an `x` (horizontal) and `y` (vertical) radius, so the
/// flattened form is `[tl_x, tl_y, tr_x, tr_y, br_x, br_y, bl_x, bl_y]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Circular radius `r` on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::new(r, r);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Builds radii from the flattened `[tl_x, tl_y, tr_x, tr_y, br_x, br_y, bl_x, bl_y]` form.
    #[inline]
    pub const fn from_array(v: [f32; 8]) -> Self {
        Self {
            top_left: Vec2::new(v[0], v[1]),
            top_right: Vec2::new(v[2], v[3]),
            bottom_right: Vec2::new(v[4], v[5]),
            bottom_left: Vec2::new(v[6], v[7]),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 8] {
        [
            self.top_left.x,
            self.top_left.y,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.bottom_left.x,
            self.bottom_left.y,
        ]
    }

    /// True when no component is positive.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.to_array().iter().all(|&r| r <= 0.0)
    }

    /// Shrinks every component by `d`, clamping at zero.
    ///
    /// Used to move a radius from the outer border edge onto a stroke centerline.
    #[inline]
    pub fn shrink(self, d: f32) -> Self {
        Self::from_array(self.to_array().map(|r| (r - d).max(0.0)))
    }

    /// Shrinks each corner by the widths of the two sides meeting at it,
    /// clamping at zero. `x` radii lose the left/right width, `y` radii the
    /// top/bottom width.
    #[inline]
    pub fn shrink_sides(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        let sub = |r: f32, d: f32| (r - d).max(0.0);
        Self {
            top_left: Vec2::new(sub(self.top_left.x, left), sub(self.top_left.y, top)),
            top_right: Vec2::new(sub(self.top_right.x, right), sub(self.top_right.y, top)),
            bottom_right: Vec2::new(sub(self.bottom_right.x, right), sub(self.bottom_right.y, bottom)),
            bottom_left: Vec2::new(sub(self.bottom_left.x, left), sub(self.bottom_left.y, bottom)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_form_round_trips_corner_order() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let radii = CornerRadii::from_array(v);
        assert_eq!(radii.top_right, Vec2::new(3.0, 4.0));
        assert_eq!(radii.bottom_left, Vec2::new(7.0, 8.0));
        assert_eq!(radii.to_array(), v);
    }

    #[test]
    fn zero_detection() {
        assert!(CornerRadii::zero().is_zero());
        assert!(CornerRadii::default().is_zero());
        let mut one = [0.0; 8];
        one[5] = 0.5;
        assert!(!CornerRadii::from_array(one).is_zero());
    }

    #[test]
    fn shrink_is_clamped_and_monotone() {
        let radii = CornerRadii::from_array([0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0]);
        let mut previous = radii.to_array();
        for step in 1..=40 {
            let shrunk = radii.shrink(step as f32).to_array();
            for (i, (&now, &before)) in shrunk.iter().zip(previous.iter()).enumerate() {
                assert!(now >= 0.0, "component {i} went negative");
                assert!(now <= before, "component {i} grew");
                assert_eq!(now, (radii.to_array()[i] - step as f32).max(0.0));
            }
            previous = shrunk;
        }
    }

    #[test]
    fn shrink_sides_pairs_widths_with_corners() {
        let radii = CornerRadii::all(10.0).shrink_sides(1.0, 2.0, 3.0, 4.0);
        assert_eq!(radii.to_array(), [6.0, 9.0, 8.0, 9.0, 8.0, 7.0, 6.0, 7.0]);
    }

    #[test]
    fn shrink_sides_clamps_at_zero() {
        let radii = CornerRadii::all(2.0).shrink_sides(5.0, 5.0, 5.0, 5.0);
        assert!(radii.is_zero());
        assert!(radii.to_array().iter().all(|&r| r == 0.0));
    }
}
