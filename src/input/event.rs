use glam::DVec2;

/// Platform-agnostic pointer events.
///
/// These are fed into
/// [`CameraController::handle_event`](crate::camera::controller::CameraController::handle_event).
/// Coordinates are in the host's pixel space (X right, Y down); no DPI
/// normalization is applied.
///
/// # Example
///
/// ```ignore
/// let changed = controller.handle_event(
///     InputEvent::Wheel { delta: 120.0, x: 400.0, y: 300.0 },
///     &picker,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Any mouse button released.
    PointerUp {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Cursor moved to absolute screen position.
    PointerMoved {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Scroll wheel (positive = zoom in, negative = zoom out).
    Wheel {
        /// Wheel delta in host units (e.g. 120 per notch).
        delta: f64,
        /// Horizontal cursor position in pixels.
        x: f64,
        /// Vertical cursor position in pixels.
        y: f64,
    },
}

impl InputEvent {
    /// Screen position carried by the event.
    #[must_use]
    pub fn screen_pos(&self) -> DVec2 {
        match *self {
            Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y }
            | Self::PointerMoved { x, y }
            | Self::Wheel { x, y, .. } => DVec2::new(x, y),
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Starts an orbit drag.
    Left,
    /// Secondary (right) mouse button. Starts a pan drag.
    Right,
    /// Middle mouse button (wheel click). Ignored by the controller.
    Middle,
    /// Back, forward or vendor buttons. Ignored by the controller.
    Other,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}
