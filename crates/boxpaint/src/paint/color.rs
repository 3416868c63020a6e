use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Colors arrive already resolved (no color management happens here), and
/// equality is exact: two edges share a color only if every channel matches.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 1.0
    }

    #[inline]
    pub fn is_fully_transparent(self) -> bool {
        self.a == 0.0
    }

    /// Darkened variant used for the shaded sides of relief borders.
    ///
    /// RGB is scaled by `factor`; alpha is preserved.
    #[inline]
    pub fn dark(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_normalizes() {
        let c = Color::from_rgba8(255, 0, 51, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 1.0));
        assert!(c.is_opaque());
    }

    #[test]
    fn dark_keeps_alpha() {
        let c = Color::new(1.0, 0.5, 0.0, 0.25).dark(0.7);
        assert!((c.r - 0.7).abs() < 1e-6);
        assert!((c.g - 0.35).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn transparency_predicates() {
        assert!(Color::transparent().is_fully_transparent());
        assert!(!Color::black().is_fully_transparent());
        assert!(!Color::new(0.0, 0.0, 0.0, 0.5).is_opaque());
    }
}
