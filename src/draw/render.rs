//! Cairo-based drawing primitives used by the mockup screens.

use super::canvas::{Canvas, new_layer};
use super::color::Color;
use super::error::RenderError;
use super::font::FontResolver;
use crate::util::{self, Rect};
use cairo::{Context, ImageSurface};
use std::f64::consts::{FRAC_PI_2, PI};

/// Outline drawn on top of a rounded rectangle's fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub width: f64,
}

/// Reference point a text label is positioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// (x, y) is the top-left corner of the line
    #[default]
    LeftTop,
    /// (x, y) is the left edge, vertically centered
    LeftMiddle,
    /// (x, y) is the center of the line
    MiddleMiddle,
    /// (x, y) is the top edge, horizontally centered
    MiddleTop,
}

impl Anchor {
    /// Offset from the anchor point to the layout origin for a line of the
    /// given size.
    pub fn offset(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Anchor::LeftTop => (0.0, 0.0),
            Anchor::LeftMiddle => (0.0, -height / 2.0),
            Anchor::MiddleMiddle => (-width / 2.0, -height / 2.0),
            Anchor::MiddleTop => (-width / 2.0, 0.0),
        }
    }
}

/// Font size, weight and color of a text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in pixels
    pub size: f64,
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size: f64, color: Color) -> Self {
        Self {
            size,
            bold: false,
            color,
        }
    }

    pub const fn bold(size: f64, color: Color) -> Self {
        Self {
            size,
            bold: true,
            color,
        }
    }
}

// ============================================================================
// Gradient
// ============================================================================

/// Color of row `y` in a vertical gradient of `height` rows.
///
/// Channels are interpolated linearly and truncated. A single-row gradient
/// uses the top color.
pub fn gradient_row_color(top: Color, bottom: Color, y: i32, height: i32) -> Color {
    let ratio = if height > 1 {
        y as f64 / (height - 1) as f64
    } else {
        0.0
    };
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - ratio) + b as f64 * ratio) as u8;
    Color::rgb(
        mix(top.r, bottom.r),
        mix(top.g, bottom.g),
        mix(top.b, bottom.b),
    )
}

/// Paints a vertical gradient over a `width` x `height` region at the origin.
///
/// Each row is filled with a single opaque color from
/// [`gradient_row_color`].
pub fn paint_vertical_gradient(
    ctx: &Context,
    width: i32,
    height: i32,
    top: Color,
    bottom: Color,
) -> Result<(), RenderError> {
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::None);
    for y in 0..height {
        gradient_row_color(top, bottom, y, height).apply(ctx);
        ctx.rectangle(0.0, y as f64, width as f64, 1.0);
        ctx.fill()?;
    }
    ctx.restore()?;
    Ok(())
}

// ============================================================================
// Glow
// ============================================================================

/// Renders the blurred ellipse of a glow on a transparent canvas-sized layer.
///
/// The layer size is always `width` x `height`, wherever `bbox` lies.
pub fn glow_layer(
    width: i32,
    height: i32,
    bbox: &Rect,
    color: Color,
    blur: f64,
    opacity: u8,
) -> Result<ImageSurface, RenderError> {
    let mut layer = new_layer(width, height)?;
    {
        let ctx = Context::new(&layer)?;
        fill_ellipse(&ctx, bbox, color.with_alpha(opacity))?;
    }
    layer.flush();

    let stride = layer.stride() as usize;
    {
        let mut data = layer.data()?;
        super::blur::gaussian_blur(&mut data, width as usize, height as usize, stride, blur);
    }
    layer.mark_dirty();
    Ok(layer)
}

/// Draws a soft highlight: a filled ellipse, Gaussian-blurred by `blur`
/// pixels, composited over the canvas.
pub fn draw_glow(
    canvas: &Canvas,
    bbox: Rect,
    color: Color,
    blur: f64,
    opacity: u8,
) -> Result<(), RenderError> {
    log::debug!("Glow at {:?} (blur {}, opacity {})", bbox, blur, opacity);
    let layer = glow_layer(canvas.width(), canvas.height(), &bbox, color, blur, opacity)?;
    canvas.composite(&layer, 0.0, 0.0)
}

// ============================================================================
// Rounded rectangles
// ============================================================================

/// Adds a rounded rectangle sub-path. The radius is clamped to half the
/// shorter side.
fn rounded_rect_path(ctx: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    ctx.new_sub_path();
    ctx.arc(x + width - r, y + r, r, -FRAC_PI_2, 0.0);
    ctx.arc(x + width - r, y + height - r, r, 0.0, FRAC_PI_2);
    ctx.arc(x + r, y + height - r, r, FRAC_PI_2, PI);
    ctx.arc(x + r, y + r, r, PI, 3.0 * FRAC_PI_2);
    ctx.close_path();
}

/// Renders a rounded rectangle filling a new `width` x `height` layer.
pub fn rounded_rect_layer(
    width: i32,
    height: i32,
    radius: f64,
    fill: Color,
    outline: Option<Outline>,
) -> Result<ImageSurface, RenderError> {
    let layer = new_layer(width, height)?;
    {
        let ctx = Context::new(&layer)?;
        let (w, h) = (width as f64, height as f64);

        rounded_rect_path(&ctx, 0.0, 0.0, w, h, radius);
        fill.apply(&ctx);
        ctx.fill()?;

        if let Some(outline) = outline.filter(|o| o.width > 0.0) {
            let inset = outline.width / 2.0;
            rounded_rect_path(
                &ctx,
                inset,
                inset,
                w - outline.width,
                h - outline.width,
                (radius - inset).max(0.0),
            );
            outline.color.apply(&ctx);
            ctx.set_line_width(outline.width);
            ctx.stroke()?;
        }
    }
    layer.flush();
    Ok(layer)
}

/// Draws a rounded rectangle on its own layer, then composites that layer at
/// the box origin so corners blend with whatever is underneath.
///
/// Boxes smaller than one pixel draw nothing.
pub fn draw_rounded_rect(
    canvas: &Canvas,
    bbox: Rect,
    radius: f64,
    fill: Color,
    outline: Option<Outline>,
) -> Result<(), RenderError> {
    let Some((width, height)) = bbox.pixel_size() else {
        log::debug!("Skipping empty rounded rect {:?}", bbox);
        return Ok(());
    };
    let layer = rounded_rect_layer(width, height, radius, fill, outline)?;
    canvas.composite(&layer, bbox.x1, bbox.y1)
}

// ============================================================================
// Plain shapes
// ============================================================================

/// Fills the ellipse inscribed in `bbox`.
pub fn fill_ellipse(ctx: &Context, bbox: &Rect, color: Color) -> Result<(), RenderError> {
    let (cx, cy, rx, ry) = util::ellipse_bounds(bbox);
    if rx <= 0.0 || ry <= 0.0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
    ctx.restore()?;

    color.apply(ctx);
    ctx.fill()?;
    Ok(())
}

/// Fills an axis-aligned rectangle.
pub fn fill_rect(ctx: &Context, bbox: &Rect, color: Color) -> Result<(), RenderError> {
    ctx.rectangle(bbox.x1, bbox.y1, bbox.width(), bbox.height());
    color.apply(ctx);
    ctx.fill()?;
    Ok(())
}

// ============================================================================
// Text
// ============================================================================

/// Lays out one line of text with Pango and draws it relative to `anchor`.
///
/// The line's logical extents decide the anchor offset, so centered labels
/// stay centered regardless of which font the resolver picked.
pub fn draw_text(
    ctx: &Context,
    fonts: &FontResolver,
    text: &str,
    x: f64,
    y: f64,
    style: TextStyle,
    anchor: Anchor,
) -> Result<(), RenderError> {
    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let font = fonts.resolve(style.size, style.bold);
    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.description));
    layout.set_text(text);

    let (_ink, logical) = layout.pixel_extents();
    let (dx, dy) = anchor.offset(logical.width() as f64, logical.height() as f64);

    ctx.move_to(x + dx, y + dy);
    style.color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()?;
    Ok(())
}
