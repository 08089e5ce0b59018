//! Field-of-view frustum used to fit bounds into the view.
//!
//! Works directly in view space (camera looks down −Z): a point fits when
//! its lateral offsets stay within the horizontal and vertical half-angles.

use glam::DVec3;

/// Narrowest full field of view (degrees) a fit frustum will use.
pub const MIN_FIT_FOV: f64 = 0.1;
/// Widest full field of view (degrees) a fit frustum will use.
pub const MAX_FIT_FOV: f64 = 179.9;

/// Symmetric perspective frustum described by its half-angle tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitFrustum {
    /// `tan(horizontal_fov / 2)`.
    pub tan_half_x: f64,
    /// `tan(vertical_fov / 2)`.
    pub tan_half_y: f64,
}

impl FitFrustum {
    /// Build from full horizontal and vertical fields of view in degrees.
    ///
    /// Each angle is clamped into `[MIN_FIT_FOV, MAX_FIT_FOV]` so both
    /// tangents are finite and positive. NaN maps to the narrow end.
    #[must_use]
    pub fn from_degrees(fov_x: f64, fov_y: f64) -> Self {
        Self {
            tan_half_x: half_angle_tan(fov_x),
            tan_half_y: half_angle_tan(fov_y),
        }
    }

    /// How far the camera must move back along its local +Z so that the
    /// view-space point `p` lands inside the frustum.
    ///
    /// Negative results mean the camera could move that much closer.
    #[inline]
    #[must_use]
    pub fn required_backoff(&self, p: DVec3) -> f64 {
        let z_fit_x = -p.x.abs() / self.tan_half_x;
        let z_fit_y = -p.y.abs() / self.tan_half_y;
        // The axis demanding the deeper z wins
        p.z - z_fit_x.min(z_fit_y)
    }

    /// Test if a view-space point is in front of the camera and within both
    /// half-angles, allowing `tolerance` of slack on the tangent ratios.
    #[must_use]
    pub fn contains(&self, p: DVec3, tolerance: f64) -> bool {
        let depth = -p.z;
        if depth <= 0.0 {
            return false;
        }
        p.x.abs() / depth <= self.tan_half_x + tolerance
            && p.y.abs() / depth <= self.tan_half_y + tolerance
    }
}

fn half_angle_tan(fov: f64) -> f64 {
    // f64::max drops NaN
    let fov = fov.max(MIN_FIT_FOV).min(MAX_FIT_FOV);
    (fov * 0.5).to_radians().tan()
}
