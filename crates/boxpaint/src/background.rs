//! Background color and box-shadow fill.

use crate::coords::{CornerRadii, Rect};
use crate::paint::{Color, PaintFlags, Shadow, Visibility};
use crate::scene::{DisplayList, Recorder, StateIds};

/// One `box-shadow` layer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxShadow {
    pub shadow: Shadow,
    /// Inset shadows are drawn inside the padding box by a separate pass
    /// and never attach to the background fill.
    pub inset: bool,
}

impl BoxShadow {
    #[inline]
    pub const fn outer(shadow: Shadow) -> Self {
        Self { shadow, inset: false }
    }

    #[inline]
    pub const fn inset(shadow: Shadow) -> Self {
        Self { shadow, inset: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundPaintInput {
    /// Border box.
    pub rect: Rect,
    pub radii: Option<CornerRadii>,
    /// `None` means no background color is declared.
    pub color: Option<Color>,
    /// Declaration order.
    pub shadows: Vec<BoxShadow>,
    pub visibility: Visibility,
    pub state: StateIds,
}

/// Fills the background of a box.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundPainter;

impl BackgroundPainter {
    pub fn new() -> Self {
        Self
    }

    pub fn paint(&self, input: &BackgroundPaintInput) -> DisplayList {
        let mut rec = Recorder::new(input.state);

        let Some(color) = input.color else {
            return rec.finish();
        };
        if !input.visibility.is_visible() {
            log::debug!("background: not visible");
            return rec.finish();
        }

        let mut flags = PaintFlags::fill(color);
        flags.shadows = input.shadows.iter().filter(|s| !s.inset).map(|s| s.shadow).collect();

        match input.radii.filter(|r| !r.is_zero()) {
            Some(radii) => rec.rounded_rect(input.rect, radii, flags),
            None => rec.rect(input.rect, flags),
        }

        rec.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    fn input() -> BackgroundPaintInput {
        BackgroundPaintInput {
            rect: Rect::new(0.0, 0.0, 50.0, 20.0),
            color: Some(GREEN),
            ..Default::default()
        }
    }

    #[test]
    fn no_color_or_hidden_is_empty() {
        let mut i = input();
        i.color = None;
        assert!(BackgroundPainter::new().paint(&i).is_empty());

        let mut i = input();
        i.visibility = Visibility::Hidden;
        assert!(BackgroundPainter::new().paint(&i).is_empty());
    }

    #[test]
    fn zero_radii_fill_a_plain_rect() {
        let mut i = input();
        i.radii = Some(CornerRadii::zero());
        let list = BackgroundPainter::new().paint(&i);
        let [item] = list.items() else { panic!("expected one op") };
        let DrawCmd::Rect(r) = &item.cmd else { panic!("expected rect") };
        assert_eq!(r.rect, i.rect);
        assert_eq!(r.flags, PaintFlags::fill(GREEN));
    }

    #[test]
    fn rounded_fill_carries_outer_shadows_in_order() {
        let first = Shadow::new(1.0, 1.0, 4.0, Color::black());
        let second = Shadow::new(0.0, 2.0, 0.0, GREEN);
        let mut i = input();
        i.radii = Some(CornerRadii::all(5.0));
        i.shadows = vec![
            BoxShadow::outer(first),
            BoxShadow::inset(Shadow::new(3.0, 3.0, 1.0, Color::black())),
            BoxShadow::outer(second),
        ];

        let list = BackgroundPainter::new().paint(&i);
        let [item] = list.items() else { panic!("expected one op") };
        let DrawCmd::RoundedRect(r) = &item.cmd else { panic!("expected rounded rect") };
        assert_eq!(r.flags.shadows, [first, second]);
        assert_eq!(r.flags.shadows[0].sigma(), 2.0);
    }
}
