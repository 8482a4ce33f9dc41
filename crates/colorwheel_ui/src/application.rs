use web_time::Instant;

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Core application trait that defines the lifecycle of a colorwheel_ui application.
///
/// This trait follows the Elm Architecture: applications maintain state,
/// respond to messages, and produce a view.
pub trait Application {
    /// Messages represent events that can update the application state.
    type Message: 'static;

    /// Update the application state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Produce the view tree for the current application state.
    fn view(&self) -> Element<Self::Message>;

    /// Advance animations to `now`. Called by the host once per frame.
    fn tick(&mut self, now: Instant) {
        let _ = now;
    }
}

/// Drives an [`Application`] without a window.
///
/// The host toolkit (or a script) feeds events and frame ticks in, and
/// presents the display list returned by [`Runtime::frame`].
pub struct Runtime<A: Application> {
    app: A,
    viewport: Size,
}

impl<A: Application> Runtime<A> {
    pub fn new(app: A, viewport: Size) -> Self {
        log::debug!("Runtime started with viewport {:?}", viewport);
        Self { app, viewport }
    }

    /// Route `event` through the current view and apply any resulting
    /// message. Returns whether the application was updated.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let message = {
            let mut root = self.app.view();
            root.layout(self.viewport);
            root.on_event(event, Bounds::from_size(self.viewport))
                .into_message()
        };

        match message {
            Some(message) => {
                self.app.update(message);
                true
            }
            None => {
                log::trace!("Event {:?} produced no message", event);
                false
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.app.tick(now);
    }

    /// Build the view and record its draw commands
    pub fn frame(&self) -> Renderer {
        let mut renderer = Renderer::new();
        let mut root = self.app.view();
        root.layout(self.viewport);
        root.draw(&mut renderer, Bounds::from_size(self.viewport));
        renderer
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }
}
