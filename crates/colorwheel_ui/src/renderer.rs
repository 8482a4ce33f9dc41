use crate::bitmap::WheelImage;
use crate::canvas::{Canvas, Shadow};
use crate::color::Color;
use crate::error::Result;
use crate::layout::Bounds;
use crate::transition::Transform;

/// A draw command recorded during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
        corner_radius: f32,
        shadow: Option<Shadow>,
    },
    DrawImage {
        image: WheelImage,
        bounds: Bounds,
        transform: Transform,
        opacity: f32,
        shadow: Option<Shadow>,
    },
}

/// Collects what widgets want on screen.
///
/// Widgets only record commands; the host toolkit presents them. For
/// headless use, [`Renderer::rasterize`] composites the list in software.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.fill_rounded_rect(bounds, color, 0.0, None);
    }

    pub fn fill_rounded_rect(
        &mut self,
        bounds: Bounds,
        color: Color,
        corner_radius: f32,
        shadow: Option<Shadow>,
    ) {
        self.draw_commands.push(DrawCommand::FillRect {
            bounds,
            color,
            corner_radius,
            shadow,
        });
    }

    /// Request `image` stretched to `bounds`, placed by `transform`.
    pub fn draw_image(
        &mut self,
        image: &WheelImage,
        bounds: Bounds,
        transform: Transform,
        opacity: f32,
        shadow: Option<Shadow>,
    ) {
        if opacity <= 0.0 {
            log::trace!("Skipping invisible image at {:?}", bounds);
            return;
        }
        self.draw_commands.push(DrawCommand::DrawImage {
            image: image.clone(),
            bounds,
            transform,
            opacity,
            shadow,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.draw_commands)
    }

    pub fn clear(&mut self) {
        self.draw_commands.clear();
    }

    /// Composite the recorded commands onto a `width` x `height` image.
    pub fn rasterize(&self, width: u32, height: u32, background: Color) -> Result<WheelImage> {
        let mut canvas = Canvas::new(width, height)?;
        canvas.clear(background);

        for cmd in &self.draw_commands {
            match cmd {
                DrawCommand::FillRect {
                    bounds,
                    color,
                    corner_radius,
                    shadow,
                } => match shadow {
                    Some(shadow) => canvas.with_shadow(*shadow, |layer| {
                        layer.fill_rect(*bounds, *color, *corner_radius)
                    })?,
                    None => canvas.fill_rect(*bounds, *color, *corner_radius)?,
                },
                DrawCommand::DrawImage {
                    image,
                    bounds,
                    transform,
                    opacity,
                    shadow,
                } => {
                    let placement = transform.to_skia(*bounds, image.width(), image.height());
                    match shadow {
                        // Opacity applies to the content and its shadow together
                        Some(shadow) => {
                            let mut layer = Canvas::new(width, height)?;
                            layer.with_shadow(*shadow, |inner| {
                                inner.draw_image(image, placement, 1.0)
                            })?;
                            canvas.draw_canvas(&layer, *opacity);
                        }
                        None => canvas.draw_image(image, placement, *opacity)?,
                    }
                }
            }
        }

        log::trace!(
            "Rasterized {} commands into {}x{}",
            self.draw_commands.len(),
            width,
            height
        );
        Ok(canvas.into_image())
    }
}
