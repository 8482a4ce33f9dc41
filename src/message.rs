//! Application message types for the color wheel host screen.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use colorwheel_ui::{Color, WedgeIndex};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Trigger button pressed
    OpenWheel,
    /// A wedge was tapped on the live wheel
    ColorChosen(WedgeIndex, Color),
    /// Press that landed on nothing interactive
    BackgroundPressed,
    /// Escape or focus loss while the wheel is up
    DismissWheel,
}
