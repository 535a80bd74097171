// File: crates/chart-core/src/raster.rs
// Summary: CPU raster surface lifecycle, RGBA readback and PNG encoding/writing.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::options::RenderOptions;
use crate::text::TextShaper;

/// Tightly packed RGBA8 pixels: (pixels, width, height, row stride in bytes).
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

/// Create a surface sized for `opts`, clear it, scale the canvas from points to
/// pixels, run `draw` over the full page rectangle and read the pixels back.
pub fn rasterize<F>(opts: &RenderOptions, draw: F) -> Result<Rgba8>
where
    F: FnOnce(&skia::Canvas, &TextShaper, RectF),
{
    let (width, height) = opts.pixel_size();
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;
    log::debug!("raster surface {}x{} px at {} dpi", width, height, opts.dpi);

    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        let scale = opts.scale();
        canvas.scale((scale, scale));
        let shaper = TextShaper::new();
        let (w_pt, h_pt) = opts.size_pt();
        draw(canvas, &shaper, RectF::from_ltwh(0.0, 0.0, w_pt, h_pt));
    }

    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::ReadPixels);
    }
    Ok((pixels, width as u32, height as u32, stride))
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or(ChartError::BufferSize { width, height })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
