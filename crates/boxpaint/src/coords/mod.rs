//! Coordinate and geometry types shared by every painter.
//!
//! Canonical space:
//! - CSS pixels, already laid out
//! - Origin top-left
//! - +X right, +Y down
//!
//! Painters never round geometry here; snapping is a per-operation decision
//! made where the operation is built.

mod corner_radii;
mod rect;
mod transform;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use transform::AffineTransform;
pub use vec2::Vec2;
