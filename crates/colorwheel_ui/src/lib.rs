//! colorwheel_ui - A wedge-based color wheel picker and the small widget
//! layer it lives in.
//!
//! The wheel is rasterized in software (tiny-skia) into a [`WheelImage`];
//! widgets record draw commands into a [`Renderer`] and turn input
//! [`Event`]s into application messages.
//!
//! ```ignore
//! use colorwheel_ui::prelude::*;
//!
//! let image = render_wheel(250.0, false, Some(WedgeIndex::FIRST))?;
//! let wheel = color_wheel(image).on_select(|(index, color)| Message::Chosen(index, color));
//! ```

mod application;
mod bitmap;
mod callback;
mod canvas;
mod color;
mod element;
mod error;
mod event;
mod hit_test;
mod layout;
mod palette;
mod render;
mod renderer;
mod transition;
mod wedge;
mod widget;
mod widgets;

pub use application::{Application, Runtime};
pub use bitmap::WheelImage;
pub use callback::Callback;
pub use canvas::{Canvas, LineJoin, Shadow, StrokeStyle};
pub use color::Color;
pub use element::Element;
pub use error::{RenderError, Result};
pub use event::{Event, KeyCode, MouseButton};
pub use hit_test::{hit_test, point_at_angle, touch_angle, wedge_for_angle, wedge_mid_angle};
pub use layout::{Bounds, Point, Size};
pub use palette::{index_of, initial_selection, WedgeIndex, PALETTE, WEDGE_COUNT};
pub use render::{
    add_wedge, render_wheel, wheel_layout, WheelLayout, IMAGE_SHADOW_BLUR, OUTLINE_SHADOW_BLUR,
    OUTLINE_WIDTH,
};
pub use renderer::{DrawCommand, Renderer};
pub use transition::{Appearance, Transform, Transition};
pub use wedge::{
    angle_step, hole_radius, polar, shortest_sweep, wedge_path, wheel_radius, ArcDirection,
    PathSegment, WedgePath, WedgeSpan, INTERIOR_HOLE_FRACTION, PADDING_FOR_SHADOW,
};
pub use widget::{EventResult, Widget};

// Re-export widgets
pub use widgets::{
    button, color_swatch, color_wheel, stack, Button, ColorSwatch, ColorWheel, Stack,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Runtime};
    pub use crate::bitmap::WheelImage;
    pub use crate::color::Color;
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::palette::{initial_selection, WedgeIndex};
    pub use crate::render::render_wheel;
    pub use crate::transition::{Appearance, Transform, Transition};
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{button, color_swatch, color_wheel, stack};
}
