use std::sync::Arc;

use crate::error::{RenderError, Result};

/// A rasterized bitmap, shared by reference.
///
/// Pixels are stored as premultiplied RGBA8, the format tiny-skia produces.
/// Cloning is cheap, so views can hold the same image every frame without
/// re-rendering it.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelImage {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl WheelImage {
    /// Wrap premultiplied RGBA8 data.
    pub fn from_premultiplied(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(RenderError::ImageData { width, height });
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    pub(crate) fn from_pixmap(pixmap: tiny_skia::Pixmap) -> Self {
        let width = pixmap.width();
        let height = pixmap.height();
        Self {
            data: Arc::new(pixmap.take()),
            width,
            height,
        }
    }

    pub(crate) fn as_pixmap(&self) -> Option<tiny_skia::PixmapRef<'_>> {
        tiny_skia::PixmapRef::from_bytes(&self.data, self.width, self.height)
    }

    /// Raw premultiplied pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha RGBA of one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.as_pixmap()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Convert to a straight-alpha image for encoding.
    pub fn to_rgba_image(&self) -> Option<::image::RgbaImage> {
        let pixmap = self.as_pixmap()?;
        let straight: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        ::image::RgbaImage::from_raw(self.width, self.height, straight)
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> ::image::ImageResult<()> {
        let path = path.as_ref();
        let img = self.to_rgba_image().ok_or_else(|| {
            ::image::ImageError::Parameter(::image::error::ParameterError::from_kind(
                ::image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
        img.save_with_format(path, ::image::ImageFormat::Png)?;
        log::debug!("Wrote {}x{} PNG to {:?}", self.width, self.height, path);
        Ok(())
    }
}
