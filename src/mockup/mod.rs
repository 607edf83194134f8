//! The CoffeeNote personal center mockup.
//!
//! [`compose`] draws the whole image: background gradient, ambient glows,
//! three phone frames with their screens, and the page caption. Every
//! coordinate is a constant, so the output only depends on which fonts are
//! installed.

pub mod frame;
pub mod screens;

use crate::draw::color::{ACCENT, ACCENT_DARK, BG_BOTTOM, BG_TOP, PEACH, TEXT_SECONDARY};
use crate::draw::render::{self, Anchor, TextStyle};
use crate::draw::{Canvas, Color, FontResolver, RenderError};
use crate::util::Rect;
use std::path::{Path, PathBuf};

pub use screens::Screen;

/// Canvas width in pixels
pub const WIDTH: i32 = 1500;
/// Canvas height in pixels
pub const HEIGHT: i32 = 900;

/// Phone screen width
pub const SCREEN_W: f64 = 360.0;
/// Phone screen height
pub const SCREEN_H: f64 = 780.0;
/// Corner radius of the phone frame
pub const SCREEN_RADIUS: f64 = 60.0;
/// Top edge of every phone frame
pub const SCREEN_TOP: f64 = 60.0;

/// Default output file name
pub const OUTPUT_FILE_NAME: &str = "personal_center_ui.png";

/// The three phones: horizontal offset, caption, and screen content.
pub const PHONES: [(f64, &str, Screen); 3] = [
    (120.0, "「我的」主入口", Screen::Main),
    (570.0, "常用冲煮设备", Screen::Devices),
    (1020.0, "豆子库存管理", Screen::Inventory),
];

const PAGE_TITLE: &str = "CoffeeNote · 个人中心视觉稿";
const PAGE_SUBTITLE: &str = "高光玻璃风 · 浅咖啡色系";

/// Background glows: bounding box, color, blur radius, opacity.
const AMBIENT_GLOWS: [(Rect, Color, f64, u8); 2] = [
    (Rect::new(150.0, 50.0, 550.0, 450.0), ACCENT, 120.0, 60),
    (Rect::new(900.0, 350.0, 1300.0, 700.0), PEACH, 140.0, 50),
];

/// Composes the full mockup on a new canvas.
pub fn compose(fonts: FontResolver) -> Result<Canvas, RenderError> {
    let canvas = Canvas::new(WIDTH, HEIGHT, fonts)?;

    log::debug!("Painting background");
    {
        let ctx = canvas.context()?;
        render::paint_vertical_gradient(&ctx, WIDTH, HEIGHT, BG_TOP, BG_BOTTOM)?;
    }
    for (bbox, color, blur, opacity) in AMBIENT_GLOWS {
        render::draw_glow(&canvas, bbox, color, blur, opacity)?;
    }

    for (x, title, screen) in PHONES {
        log::debug!("Drawing {:?} screen at x={}", screen, x);
        frame::draw_phone_frame(&canvas, x, title)?;
        screen.draw(&canvas, x)?;
    }

    {
        let pen = Pen::new(&canvas)?;
        let center = WIDTH as f64 / 2.0;
        pen.text(
            PAGE_TITLE,
            center,
            30.0,
            TextStyle::bold(34.0, ACCENT_DARK),
            Anchor::MiddleTop,
        )?;
        pen.text(
            PAGE_SUBTITLE,
            center,
            80.0,
            TextStyle::regular(22.0, TEXT_SECONDARY),
            Anchor::MiddleTop,
        )?;
    }

    Ok(canvas)
}

/// Composes the mockup and writes it as a PNG to `path`.
pub fn render_to_file(fonts: FontResolver, path: &Path) -> Result<PathBuf, RenderError> {
    let canvas = compose(fonts)?;
    canvas.save_png(path)
}

/// Default output location: [`OUTPUT_FILE_NAME`] next to the running
/// executable, or in the working directory if that cannot be determined.
pub fn default_output_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(OUTPUT_FILE_NAME)
}

/// Drawing helper bundling the canvas with one Cairo context for direct
/// shape and text calls.
pub(crate) struct Pen<'a> {
    canvas: &'a Canvas,
    ctx: cairo::Context,
}

impl<'a> Pen<'a> {
    pub(crate) fn new(canvas: &'a Canvas) -> Result<Self, RenderError> {
        Ok(Self {
            canvas,
            ctx: canvas.context()?,
        })
    }

    pub(crate) fn text(
        &self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
        anchor: Anchor,
    ) -> Result<(), RenderError> {
        render::draw_text(&self.ctx, self.canvas.fonts(), text, x, y, style, anchor)
    }

    /// Rounded rectangle without outline.
    pub(crate) fn card(&self, bbox: Rect, radius: f64, fill: Color) -> Result<(), RenderError> {
        render::draw_rounded_rect(self.canvas, bbox, radius, fill, None)
    }

    pub(crate) fn glow(
        &self,
        bbox: Rect,
        color: Color,
        blur: f64,
        opacity: u8,
    ) -> Result<(), RenderError> {
        render::draw_glow(self.canvas, bbox, color, blur, opacity)
    }

    pub(crate) fn ellipse(&self, bbox: Rect, color: Color) -> Result<(), RenderError> {
        render::fill_ellipse(&self.ctx, &bbox, color)
    }

    pub(crate) fn rect(&self, bbox: Rect, color: Color) -> Result<(), RenderError> {
        render::fill_rect(&self.ctx, &bbox, color)
    }
}
