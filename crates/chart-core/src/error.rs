// File: crates/chart-core/src/error.rs
// Summary: Error type for rendering and encoding failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back pixels from the raster surface")]
    ReadPixels,
    #[error("pixel buffer does not match a {width}x{height} RGBA image")]
    BufferSize { width: u32, height: u32 },
    #[error("figure has no panels to render")]
    EmptyFigure,
    #[error("PNG encoding failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
