use crate::coords::Vec2;

use super::Color;

/// A drop shadow as declared in style (`text-shadow` / `box-shadow`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    /// Blur radius in CSS pixels.
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    #[inline]
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self { offset: Vec2::new(offset_x, offset_y), blur, color }
    }

    /// Gaussian sigma for the blur radius (`blur / 2`).
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.blur / 2.0
    }
}
