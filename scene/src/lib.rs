//! Platform-free state of the sprite viewer.
//!
//! Everything here is plain data: the backend translates SDL events into
//! [`InputEvent`]s and turns a [`Frame`] into draw calls.

pub mod config;
pub mod input;
pub mod math;
pub mod viewer;

pub use config::ViewerConfig;
pub use input::{InputEvent, Key};
pub use math::{Color, Rect, Size};
pub use viewer::{DrawCmd, Frame, RunState, Viewer};
