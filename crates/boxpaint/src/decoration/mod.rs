//! Text decoration geometry and compositing.
//!
//! - `line`: decoration model and derived geometry
//! - `resolver`: thickness and offsets per decoration entry
//! - `synth`: geometry to paint operations (rects, dotted strokes, wave tiles)
//! - `compositor`: group ordering and the shadow-then-foreground protocol

mod compositor;
mod line;
mod resolver;
mod synth;

pub use compositor::{paint_with_text_shadow, DecorationPainter, ShadowPhase};
pub use line::{make_wave, DecorationGeometry, DecorationLine, DecorationLines, DecorationStyle};
pub use resolver::{DecorationContext, DecorationMetrics, DecorationResolver, ERROR_WAVE};
pub use synth::{wavy_path, DecorationLinePainter};
