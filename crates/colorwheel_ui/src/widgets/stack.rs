//! Absolutely positioned layers

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// Children drawn back to front at fixed positions.
///
/// Child bounds are relative to the stack's own origin. Events go to the
/// topmost child first; a press nobody consumes becomes the background
/// message, and dismissal events (Escape, focus loss) become the escape
/// message.
pub struct Stack<M> {
    children: Vec<(Bounds, Element<M>)>,
    on_background_press: Option<M>,
    on_escape: Option<M>,
}

impl<M> Stack<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            on_background_press: None,
            on_escape: None,
        }
    }

    /// Add a layer above the existing ones
    pub fn push(mut self, bounds: Bounds, child: impl Widget<M> + 'static) -> Self {
        self.children.push((bounds, Element::new(child)));
        self
    }

    pub fn on_background_press(mut self, message: M) -> Self {
        self.on_background_press = Some(message);
        self
    }

    pub fn on_escape(mut self, message: M) -> Self {
        self.on_escape = Some(message);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<M> Default for Stack<M> {
    fn default() -> Self {
        Self::new()
    }
}

fn offset(child: Bounds, origin: Bounds) -> Bounds {
    Bounds::new(origin.x + child.x, origin.y + child.y, child.width, child.height)
}

impl<M: Clone + 'static> Widget<M> for Stack<M> {
    fn layout(&mut self, available: Size) -> Size {
        for (bounds, child) in &mut self.children {
            child.layout(bounds.size());
        }
        available
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (child_bounds, child) in &self.children {
            child.draw(renderer, offset(*child_bounds, bounds));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if event.is_dismissal() {
            if let Some(msg) = &self.on_escape {
                log::debug!("Stack: dismissal event {:?}", event);
                return EventResult::Message(msg.clone());
            }
        }

        for (child_bounds, child) in self.children.iter_mut().rev() {
            let result = child.on_event(event, offset(*child_bounds, bounds));
            if result.is_consumed() {
                return result;
            }
        }

        match event {
            Event::MousePress { position, .. } if bounds.contains(*position) => {
                match &self.on_background_press {
                    Some(msg) => {
                        log::debug!("Stack: background press at {:?}", position);
                        EventResult::Message(msg.clone())
                    }
                    None => EventResult::None,
                }
            }
            _ => EventResult::None,
        }
    }
}

/// Create an empty stack
pub fn stack<M>() -> Stack<M> {
    Stack::new()
}
