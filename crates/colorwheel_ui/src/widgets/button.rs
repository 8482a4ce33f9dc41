//! Button widget

use crate::bitmap::WheelImage;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::transition::Transform;
use crate::widget::{EventResult, Widget};

/// A clickable button drawn from a background image
pub struct Button<M> {
    image: WheelImage,
    on_click: Option<M>,
    enabled: bool,
}

impl<M> Button<M> {
    /// Create a new button showing the given image
    pub fn new(image: WheelImage) -> Self {
        Self {
            image,
            on_click: None,
            enabled: true,
        }
    }

    /// Set the click handler
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    /// Disabled buttons let presses fall through to whatever is underneath
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<M: Clone + 'static> Widget<M> for Button<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            (self.image.width() as f32).min(available.width),
            (self.image.height() as f32).min(available.height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.draw_image(&self.image, bounds, Transform::IDENTITY, 1.0, None);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if !self.enabled {
            return EventResult::None;
        }
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } if bounds.contains(*position) => {
                log::debug!("Button pressed at {:?}", position);
                match &self.on_click {
                    Some(msg) => EventResult::Message(msg.clone()),
                    None => EventResult::Redraw,
                }
            }
            _ => EventResult::None,
        }
    }
}

/// Create a button with an image background
pub fn button<M>(image: WheelImage) -> Button<M> {
    Button::new(image)
}
