/// CSS `visibility` of the box being painted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}
