//! Orbit camera: spherical orbit model, interaction state machine, look-at
//! pose and fit-to-bounds.

/// Axis-aligned bounding boxes for fit-to-bounds.
pub mod bounds;
/// Orbit controller managing rotation, pan, zoom and fitting.
pub mod controller;
/// Camera pose value type and GPU uniform.
pub mod core;
/// Field-of-view frustum used by fit-to-bounds.
pub mod frustum;
/// Spherical coordinates with a cached Cartesian offset.
pub mod spherical;

pub use bounds::BoundingBox;
pub use controller::{CameraController, InteractionMode};
pub use self::core::{CameraPose, CameraUniform};
pub use frustum::FitFrustum;
pub use spherical::SphericalCoordinate;
