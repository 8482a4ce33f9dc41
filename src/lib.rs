//! ColorWheel - a popup color wheel picker demo
//!
//! A host screen with a trigger button and a color swatch; the button spins up
//! a wedge-based color wheel, and tapping a wedge sets the swatch color.

pub mod config;
mod constants;
pub mod demo;
mod host;
mod message;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use demo::DemoError;
pub use host::HostScreen;
pub use message::Message;
