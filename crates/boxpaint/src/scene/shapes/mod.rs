pub mod effects;
pub mod ellipse;
pub mod line;
pub mod path;
pub mod rect;
pub mod rounded_rect;
pub mod text;
pub mod wavy;
