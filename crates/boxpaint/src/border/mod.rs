//! Border rendering strategy engine.
//!
//! `edge` classifies the four sides; `painter` picks a strategy (one stroked
//! shape, a ring fill, per-side rects/lines, or a forced hint) and emits the
//! operations for it.

mod edge;
mod painter;

pub use edge::{BorderProperties, BorderStyle, BoxSide, Edge, Sides};
pub use painter::{BorderPaintInput, BorderPainter, BorderRenderHint};
