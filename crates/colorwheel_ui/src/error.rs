use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid canvas size {0}: must be finite and positive")]
    InvalidSize(f32),

    #[error("Failed to allocate {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("Path has no drawable geometry")]
    PathConstruction,

    #[error("Image data does not match {width}x{height}")]
    ImageData { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, RenderError>;
