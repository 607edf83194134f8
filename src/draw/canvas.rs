//! The pixel buffer the mockup is composed on.

use super::color::{Color, TRANSPARENT};
use super::error::RenderError;
use super::font::FontResolver;
use cairo::{Context, Format, ImageSurface};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// ARGB32 canvas plus the font resolver used for its text.
///
/// Drawing functions borrow the canvas and open short-lived Cairo contexts
/// on it; pixel readback only works while no context is alive.
pub struct Canvas {
    surface: ImageSurface,
    fonts: FontResolver,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: i32, height: i32, fonts: FontResolver) -> Result<Self, RenderError> {
        Ok(Self {
            surface: new_layer(width, height)?,
            fonts,
        })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn fonts(&self) -> &FontResolver {
        &self.fonts
    }

    /// Opens a drawing context on the canvas.
    pub fn context(&self) -> Result<Context, RenderError> {
        Ok(Context::new(&self.surface)?)
    }

    /// Alpha-composites `layer` onto the canvas with its origin at (x, y).
    pub fn composite(&self, layer: &ImageSurface, x: f64, y: f64) -> Result<(), RenderError> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(layer, x, y)?;
        ctx.paint()?;
        Ok(())
    }

    /// Reads back one pixel as straight (non-premultiplied) RGBA.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Color, RenderError> {
        read_pixel(&mut self.surface, x, y)
    }

    /// Copies the canvas into an opaque RGB24 surface, discarding alpha.
    pub fn flatten(&self) -> Result<ImageSurface, RenderError> {
        let flat = ImageSurface::create(Format::Rgb24, self.width(), self.height())?;
        {
            let ctx = Context::new(&flat)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        flat.flush();
        Ok(flat)
    }

    /// Flattens the canvas and encodes it as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        let flat = self.flatten()?;
        flat.write_to_png(writer)?;
        Ok(())
    }

    /// Flattens the canvas and writes it as a PNG file.
    ///
    /// Creates missing parent directories. Returns the path written.
    pub fn save_png(&self, path: &Path) -> Result<PathBuf, RenderError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_png(&mut writer)?;
        writer.flush()?;

        let written_size = fs::metadata(path)?.len();
        log::debug!("File written: {} bytes", written_size);

        Ok(path.to_path_buf())
    }
}

/// Creates a transparent ARGB32 surface.
pub fn new_layer(width: i32, height: i32) -> Result<ImageSurface, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    Ok(ImageSurface::create(Format::ARgb32, width, height)?)
}

/// Reads one pixel of an image surface as straight RGBA.
///
/// Pixels outside the surface read as transparent. RGB24 surfaces read as
/// opaque.
pub fn read_pixel(surface: &mut ImageSurface, x: i32, y: i32) -> Result<Color, RenderError> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return Ok(TRANSPARENT);
    }
    surface.flush();
    let format = surface.format();
    let stride = surface.stride() as usize;
    let data = surface.data()?;
    let offset = y as usize * stride + x as usize * 4;
    let bytes = [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ];
    let argb = u32::from_ne_bytes(bytes);

    let a = if format == Format::Rgb24 {
        255
    } else {
        (argb >> 24) as u8
    };
    let r = (argb >> 16) as u8;
    let g = (argb >> 8) as u8;
    let b = argb as u8;

    Ok(Color::rgba(
        unpremultiply(r, a),
        unpremultiply(g, a),
        unpremultiply(b, a),
        a,
    ))
}

fn unpremultiply(value: u8, alpha: u8) -> u8 {
    match alpha {
        0 => 0,
        255 => value,
        _ => ((value as u32 * 255 + alpha as u32 / 2) / alpha as u32).min(255) as u8,
    }
}
