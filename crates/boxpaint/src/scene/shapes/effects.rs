use crate::coords::{AffineTransform, Vec2};
use crate::paint::{Color, Shadow};
use crate::scene::{DisplayList, DrawCmd, StateIds};

/// Drop shadow installed for the draws that follow it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowCmd {
    pub offset: Vec2,
    pub blur_sigma: f32,
    pub color: Color,
}

impl From<&Shadow> for ShadowCmd {
    fn from(shadow: &Shadow) -> Self {
        Self { offset: shadow.offset, blur_sigma: shadow.sigma(), color: shadow.color }
    }
}

impl DisplayList {
    /// Installs `shadows` last-declared first, so earlier declarations end up on top.
    pub fn push_shadows(&mut self, state: StateIds, shadows: &[Shadow]) {
        for shadow in shadows.iter().rev() {
            self.push(state, DrawCmd::Shadow(shadow.into()));
        }
    }

    #[inline]
    pub fn push_clear_shadow(&mut self, state: StateIds) {
        self.push(state, DrawCmd::ClearShadow);
    }

    #[inline]
    pub fn push_save(&mut self, state: StateIds) {
        self.push(state, DrawCmd::Save);
    }

    #[inline]
    pub fn push_restore(&mut self, state: StateIds) {
        self.push(state, DrawCmd::Restore);
    }

    #[inline]
    pub fn push_scale(&mut self, state: StateIds, sx: f32, sy: f32) {
        self.push(state, DrawCmd::Scale(Vec2::new(sx, sy)));
    }

    #[inline]
    pub fn push_concat(&mut self, state: StateIds, transform: AffineTransform) {
        self.push(state, DrawCmd::Concat(transform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadows_are_installed_in_reverse_declaration_order() {
        let declared: Vec<Shadow> = (0..4)
            .map(|i| Shadow::new(i as f32, 0.0, 2.0 * i as f32, Color::black()))
            .collect();

        let mut list = DisplayList::new();
        list.push_shadows(StateIds::default(), &declared);

        let offsets: Vec<f32> = list
            .cmds()
            .map(|cmd| match cmd {
                DrawCmd::Shadow(s) => s.offset.x,
                other => panic!("unexpected {}", other.name()),
            })
            .collect();
        assert_eq!(offsets, [3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn shadow_sigma_is_half_blur() {
        let cmd = ShadowCmd::from(&Shadow::new(1.0, 2.0, 6.0, Color::black()));
        assert_eq!(cmd.blur_sigma, 3.0);
        assert_eq!(cmd.offset, Vec2::new(1.0, 2.0));
    }
}
