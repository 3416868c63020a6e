//! Paint model shared between painters and renderers.
//!
//! Scope:
//! - color representation (straight alpha, `f32` channels)
//! - paint flags (fill/stroke, caps, joins, dash patterns)
//! - shadow declarations
//! - box visibility
//!
//! Geometry types remain in `coords`.

mod color;
mod flags;
mod shadow;
mod visibility;

pub use color::Color;
pub use flags::{DashPattern, PaintFlags, PaintStyle, StrokeCap, StrokeJoin};
pub use shadow::Shadow;
pub use visibility::Visibility;
