//! Phone frame with its caption.

use super::{Pen, SCREEN_H, SCREEN_RADIUS, SCREEN_TOP, SCREEN_W};
use crate::draw::color::{ACCENT_DARK, WHITE};
use crate::draw::render::{Anchor, TextStyle};
use crate::draw::{Canvas, RenderError};
use crate::util::Rect;

/// Frame fill: near-opaque white so the background glows shine through a little
const FRAME_ALPHA: u8 = 245;

/// Bounding box of the phone frame at horizontal offset `x`.
pub fn frame_bounds(x: f64) -> Rect {
    Rect::from_origin_size(x, SCREEN_TOP, SCREEN_W, SCREEN_H)
}

/// Draws the rounded phone frame at `x` and centers `title` 30px above it.
pub fn draw_phone_frame(canvas: &Canvas, x: f64, title: &str) -> Result<(), RenderError> {
    let pen = Pen::new(canvas)?;
    pen.card(frame_bounds(x), SCREEN_RADIUS, WHITE.with_alpha(FRAME_ALPHA))?;
    pen.text(
        title,
        x + SCREEN_W / 2.0,
        SCREEN_TOP - 30.0,
        TextStyle::bold(26.0, ACCENT_DARK),
        Anchor::MiddleMiddle,
    )
}
