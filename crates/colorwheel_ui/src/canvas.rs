//! Software drawing surface.
//!
//! Every drawing operation takes the canvas explicitly; there is no ambient
//! "current context". Shadows are produced by drawing into a scratch layer,
//! blurring its alpha channel and compositing the tinted result underneath.

use crate::bitmap::WheelImage;
use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::layout::Bounds;
use crate::wedge::WedgePath;

/// A soft shadow cast by whatever is drawn inside [`Canvas::with_shadow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius in pixels
    pub blur: f32,
    pub offset: (f32, f32),
}

impl Shadow {
    /// Black shadow centered under the content
    pub fn ambient(blur: f32) -> Self {
        Self {
            color: Color::BLACK,
            blur,
            offset: (0.0, 0.0),
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.color = self.color.with_alpha(opacity);
        self
    }

    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = (dx, dy);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub join: LineJoin,
}

impl StrokeStyle {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            join: LineJoin::Miter,
        }
    }

    pub fn join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    fn to_skia(self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            line_join: match self.join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            ..Default::default()
        }
    }
}

/// A transparent RGBA surface backed by a tiny-skia pixmap.
pub struct Canvas {
    pixmap: tiny_skia::Pixmap,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::PixmapAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole canvas with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn fill_path(&mut self, path: &WedgePath, color: Color) -> Result<()> {
        let path = path.to_skia().ok_or(RenderError::PathConstruction)?;
        self.pixmap.fill_path(
            &path,
            &paint(color),
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    pub fn stroke_path(&mut self, path: &WedgePath, color: Color, style: StrokeStyle) -> Result<()> {
        let path = path.to_skia().ok_or(RenderError::PathConstruction)?;
        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &style.to_skia(),
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    /// Fill a rectangle, rounding its corners by `corner_radius`.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color, corner_radius: f32) -> Result<()> {
        let path = rounded_rect(bounds, corner_radius).ok_or(RenderError::PathConstruction)?;
        self.pixmap.fill_path(
            &path,
            &paint(color),
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    /// Draw `image` mapped through `transform`.
    pub fn draw_image(
        &mut self,
        image: &WheelImage,
        transform: tiny_skia::Transform,
        opacity: f32,
    ) -> Result<()> {
        let src = image.as_pixmap().ok_or(RenderError::ImageData {
            width: image.width(),
            height: image.height(),
        })?;
        self.draw_pixmap(src, transform, opacity);
        Ok(())
    }

    /// Composite another canvas of any size at the origin.
    pub fn draw_canvas(&mut self, other: &Canvas, opacity: f32) {
        self.draw_pixmap(
            other.pixmap.as_ref(),
            tiny_skia::Transform::identity(),
            opacity,
        );
    }

    /// Run `draw` on a scratch layer and composite it with a shadow beneath.
    ///
    /// The shadow follows the alpha of everything `draw` produced, so only the
    /// content drawn inside the closure casts it.
    pub fn with_shadow<F>(&mut self, shadow: Shadow, draw: F) -> Result<()>
    where
        F: FnOnce(&mut Canvas) -> Result<()>,
    {
        let mut layer = Canvas::new(self.width(), self.height())?;
        draw(&mut layer)?;

        let cast = layer.cast_shadow(shadow)?;
        self.draw_pixmap(
            cast.pixmap.as_ref(),
            tiny_skia::Transform::from_translate(shadow.offset.0, shadow.offset.1),
            1.0,
        );
        self.draw_canvas(&layer, 1.0);
        Ok(())
    }

    pub fn into_image(self) -> WheelImage {
        WheelImage::from_pixmap(self.pixmap)
    }

    fn draw_pixmap(
        &mut self,
        src: tiny_skia::PixmapRef<'_>,
        transform: tiny_skia::Transform,
        opacity: f32,
    ) {
        let paint = tiny_skia::PixmapPaint {
            opacity: opacity.clamp(0.0, 1.0),
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap.draw_pixmap(0, 0, src, &paint, transform, None);
    }

    /// Blurred, tinted copy of this canvas's alpha channel.
    fn cast_shadow(&self, shadow: Shadow) -> Result<Canvas> {
        let (width, height) = (self.width(), self.height());
        let alpha: Vec<u8> = self.pixmap.pixels().iter().map(|p| p.alpha()).collect();
        let mask = ::image::GrayImage::from_raw(width, height, alpha)
            .ok_or(RenderError::ImageData { width, height })?;
        // Blur radius is treated as two standard deviations
        let blurred = if shadow.blur > 0.0 {
            ::image::imageops::blur(&mask, shadow.blur / 2.0)
        } else {
            mask
        };

        let [r, g, b, a] = shadow.color.to_rgba8();
        let mut data = Vec::with_capacity(blurred.len() * 4);
        for px in blurred.pixels() {
            let alpha = (px.0[0] as u32 * a as u32 + 127) / 255;
            let premultiply = |c: u8| ((c as u32 * alpha + 127) / 255) as u8;
            data.extend_from_slice(&[premultiply(r), premultiply(g), premultiply(b), alpha as u8]);
        }

        let size = tiny_skia::IntSize::from_wh(width, height)
            .ok_or(RenderError::PixmapAllocation { width, height })?;
        let pixmap = tiny_skia::Pixmap::from_vec(data, size)
            .ok_or(RenderError::ImageData { width, height })?;
        Ok(Canvas { pixmap })
    }
}

fn paint(color: Color) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn rounded_rect(bounds: Bounds, radius: f32) -> Option<tiny_skia::Path> {
    let rect = tiny_skia::Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height)?;
    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0);
    if r <= 0.0 {
        return Some(tiny_skia::PathBuilder::from_rect(rect));
    }

    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.quad_to(rt, t, rt, t + r);
    pb.line_to(rt, b - r);
    pb.quad_to(rt, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.quad_to(l, b, l, b - r);
    pb.line_to(l, t + r);
    pb.quad_to(l, t, l + r, t);
    pb.close();
    pb.finish()
}
