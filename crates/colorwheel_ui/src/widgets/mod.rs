// Widget implementations

mod button;
mod color_swatch;
mod color_wheel;
mod stack;

pub use button::{button, Button};
pub use color_swatch::{color_swatch, ColorSwatch};
pub use color_wheel::{color_wheel, ColorWheel};
pub use stack::{stack, Stack};

// Re-export Element for convenience (it's actually in the element module)
pub use crate::Element;
