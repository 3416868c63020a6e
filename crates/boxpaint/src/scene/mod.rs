//! Scene (paint operation stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic paint operations
//! - keep paint order exactly as recorded (append-only, never re-sorted)
//! - keep shape-specific payloads and helpers isolated per file under `scene::shapes`
//! - hand the stream to a renderer through the `Canvas` seam

mod cmd;
mod list;
mod recorder;
mod replay;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DisplayList, DrawItem, NodeId, StateIds};
pub use recorder::Recorder;
pub use replay::Canvas;

pub use shapes::effects::ShadowCmd;
pub use shapes::ellipse::EllipseCmd;
pub use shapes::line::{LineCmd, StrokeLineCmd, StrokeStyle};
pub use shapes::path::FillPathCmd;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::{DoubleRoundedRectCmd, RoundedRectCmd};
pub use shapes::text::{EmphasisMarksCmd, TextBlobCmd};
pub use shapes::wavy::{Path, PathVerb, WaveDefinition, WavyLineCmd};
