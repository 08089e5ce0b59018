use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wheel-delta non-linearity: each unit of delta scales the radius by
/// `1 − ZOOM_FALLOFF`. Tuned so one 120-unit notch feels the same at any
/// distance; not user-tunable.
pub const ZOOM_FALLOFF: f64 = 0.000_416;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera control parameters.
pub struct CameraOptions {
    /// World units moved per pixel of pan drag.
    #[schemars(title = "Pan Sensitivity", range(min = 0.001, max = 1.0), extend("step" = 0.005))]
    pub pan_sensitivity: f64,
    /// Radians rotated per pixel of orbit drag.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_sensitivity: f64,
    /// Multiplier on the wheel delta before the fixed zoom falloff.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_sensitivity: f64,
    /// Radius at or beyond which zooming out is refused.
    #[schemars(title = "Zoom Out Limit", range(min = 1.0, max = 10000.0), extend("step" = 10.0))]
    pub zoom_distance_floor: f64,
    /// Smallest orbit radius zoom-in may reach; closer zooms are refused.
    #[schemars(title = "Zoom In Limit", range(min = 0.0001, max = 100.0), extend("step" = 0.01))]
    pub min_zoom_radius: f64,
    /// Slide the orbit target toward the surface under the cursor on zoom.
    #[schemars(title = "Zoom To Cursor")]
    pub zoom_to_object: bool,
    /// Horizontal field of view (degrees) used by fit-to-bounds. Clamped
    /// into the open range (0, 180) when the fit runs.
    #[schemars(skip)]
    pub fit_fov_horizontal: f64,
    /// Vertical field of view (degrees) used by fit-to-bounds.
    #[schemars(skip)]
    pub fit_fov_vertical: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pan_sensitivity: 0.05,
            rotate_sensitivity: 0.01,
            zoom_sensitivity: 1.0,
            zoom_distance_floor: 150.0,
            min_zoom_radius: 0.01,
            zoom_to_object: true,
            fit_fov_horizontal: 60.0,
            fit_fov_vertical: 35.0,
        }
    }
}
