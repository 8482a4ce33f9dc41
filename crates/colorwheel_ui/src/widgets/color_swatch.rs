//! Color swatch widget for displaying the current color

use crate::canvas::Shadow;
use crate::color::Color;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

const CORNER_RADIUS: f32 = 2.0;
const DEFAULT_SIZE: f32 = 40.0;

/// A filled, rounded rectangle with a drop shadow.
///
/// Purely visual: it never consumes input.
pub struct ColorSwatch {
    color: Color,
    size: Size,
    shadow: Shadow,
}

impl ColorSwatch {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            size: Size::square(DEFAULT_SIZE),
            shadow: Shadow::ambient(3.0).opacity(0.75).offset(2.0, 2.0),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl<M> Widget<M> for ColorSwatch {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.size.width.min(available.width),
            self.size.height.min(available.height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        log::trace!("ColorSwatch draw: color={:?}, bounds={:?}", self.color, bounds);
        renderer.fill_rounded_rect(bounds, self.color, CORNER_RADIUS, Some(self.shadow));
    }
}

/// Create a swatch showing `color`
pub fn color_swatch(color: Color) -> ColorSwatch {
    ColorSwatch::new(color)
}
