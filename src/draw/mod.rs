//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing building blocks of the mockup:
//! - [`Color`]: 8-bit RGBA color with the mockup palette
//! - [`Canvas`]: the ARGB32 buffer everything is composed on
//! - [`FontResolver`]: font lookup with a guaranteed fallback
//! - Gradient, glow, rounded rectangle and text rendering functions

pub mod blur;
pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use error::RenderError;
pub use font::{FontCandidate, FontResolver, FontSource, ResolvedFont};
pub use render::{
    Anchor, Outline, TextStyle, draw_glow, draw_rounded_rect, draw_text, fill_ellipse, fill_rect,
    gradient_row_color, paint_vertical_gradient,
};
