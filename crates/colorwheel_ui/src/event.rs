use crate::layout::Point;

/// Input events delivered to widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer or touch went down.
    MousePress { button: MouseButton, position: Point },
    /// Pointer or touch went up.
    MouseRelease { button: MouseButton, position: Point },
    /// Pointer moved.
    MouseMove { position: Point },
    /// Keyboard key pressed.
    KeyPress { key: KeyCode },
    /// The window lost focus.
    FocusLost,
}

impl Event {
    /// A left-button press (a tap) at `position`
    pub fn tap(position: Point) -> Self {
        Event::MousePress {
            button: MouseButton::Left,
            position,
        }
    }

    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position } => Some(*position),
            Event::KeyPress { .. } | Event::FocusLost => None,
        }
    }

    /// Whether this event should close a transient popup
    pub fn is_dismissal(&self) -> bool {
        matches!(
            self,
            Event::KeyPress {
                key: KeyCode::Escape
            } | Event::FocusLost
        )
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// The only key the widgets care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
}
