//! Frontend abstraction layer
//!
//! The game never talks to a window directly. Once per tick the driver:
//! - polls an `InputSource` for discrete events
//! - hands them to the `App`
//! - passes the resulting `Frame` to a `RenderSink`

pub mod input;
pub mod render;

pub use input::{InputEvent, InputSource, tick_input};
pub use render::{ButtonView, Frame, RenderSink};
