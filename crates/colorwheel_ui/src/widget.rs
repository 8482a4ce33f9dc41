//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Outcome of offering an event to a widget
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventResult<M> {
    /// The widget did not use the event; it may go to whatever is underneath
    #[default]
    None,
    /// The event was consumed and only visual state changed
    Redraw,
    /// The event was consumed and produced a message
    Message(M),
}

impl<M> EventResult<M> {
    /// Whether the event should stop propagating
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResult::None)
    }

    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(msg) => Some(msg),
            EventResult::None | EventResult::Redraw => None,
        }
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(msg: Option<M>) -> Self {
        match msg {
            Some(msg) => EventResult::Message(msg),
            None => EventResult::None,
        }
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }
}
