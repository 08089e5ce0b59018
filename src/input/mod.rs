//! Input handling: platform-agnostic pointer and wheel events consumed by
//! the camera controller.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, MouseButton};
