//! Boxpaint crate.
//!
//! Compiles already-resolved box styles (borders, backgrounds, text and its
//! decorations) into ordered, renderer-agnostic paint operations.
//!
//! Painters are pure: each call takes an input record and returns a fresh
//! `DisplayList`. Rasterization is left to a `Canvas` implementation.

pub mod background;
pub mod border;
pub mod compare;
pub mod config;
pub mod coords;
pub mod decoration;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
