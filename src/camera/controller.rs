use glam::{DMat3, DMat4, DVec2, DVec3};

use crate::camera::bounds::BoundingBox;
use crate::camera::core::{CameraPose, CameraUniform};
use crate::camera::frustum::FitFrustum;
use crate::camera::spherical::SphericalCoordinate;
use crate::error::OrbitError;
use crate::input::{InputEvent, MouseButton};
use crate::options::{CameraOptions, ZOOM_FALLOFF};
use crate::picking::ScenePicker;

const WORLD_UP: DVec3 = DVec3::Y;

/// True when the eye at `target + spherical` is finite and still
/// distinguishable from `target`, so a look direction exists.
fn orbit_is_resolvable(target: DVec3, spherical: &SphericalCoordinate) -> bool {
    let position = target + spherical.cartesian_offset();
    target.is_finite()
        && position.is_finite()
        && (position - target).try_normalize().is_some()
}

/// Drag state of the controller.
///
/// Zoom is a one-shot operation per wheel event and never becomes a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// No drag in progress; pointer moves are ignored.
    Idle,
    /// Secondary-button drag translating target and eye together.
    Pan {
        /// Pointer position at the previous drag step.
        last: DVec2,
    },
    /// Primary-button drag orbiting the eye around the target.
    Rotate {
        /// Pointer position at the previous drag step.
        last: DVec2,
    },
}

/// Orbit camera around a target point.
///
/// The eye position is never stored independently: after every operation it
/// equals `target + spherical.cartesian_offset()`, and the look-at basis is
/// rebuilt from scratch whenever the orbit changes.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: DVec3,
    target: DVec3,
    spherical: SphericalCoordinate,
    mode: InteractionMode,
    pose: CameraPose,
    options: CameraOptions,

    home_target: DVec3,
    home_spherical: SphericalCoordinate,
}

impl CameraController {
    /// Create a controller with the eye at `position` looking at `target`.
    ///
    /// Fails if the two points coincide, if the eye sits directly above or
    /// below the target (no horizontal orbit direction), or if either point
    /// is not finite.
    pub fn new(
        position: DVec3,
        target: DVec3,
        options: CameraOptions,
    ) -> Result<Self, OrbitError> {
        if !position.is_finite() || !target.is_finite() {
            return Err(OrbitError::NonFinite);
        }
        let spherical =
            SphericalCoordinate::from_cartesian(position - target, true)?;

        let mut controller = Self {
            position,
            target,
            spherical,
            mode: InteractionMode::Idle,
            pose: CameraPose::default(),
            options,
            home_target: target,
            home_spherical: spherical,
        };
        controller.update_transform(true);
        Ok(controller)
    }

    // ── Pointer state machine ────────────────────────────────────────────

    /// Primary button starts an orbit drag, secondary starts a pan drag;
    /// other buttons leave the mode untouched.
    pub fn pointer_down(&mut self, button: MouseButton, screen: DVec2) {
        let mode = match button {
            MouseButton::Left => InteractionMode::Rotate { last: screen },
            MouseButton::Right => InteractionMode::Pan { last: screen },
            MouseButton::Middle | MouseButton::Other => return,
        };
        log::debug!("camera mode {:?} -> {mode:?}", self.mode);
        self.mode = mode;
    }

    /// End any drag.
    pub fn pointer_up(&mut self) {
        if self.mode != InteractionMode::Idle {
            log::debug!("camera mode {:?} -> Idle", self.mode);
        }
        self.mode = InteractionMode::Idle;
    }

    /// Advance the active drag to `screen`. Returns true if the pose
    /// changed.
    pub fn pointer_move(&mut self, screen: DVec2) -> bool {
        match self.mode {
            InteractionMode::Idle => false,
            InteractionMode::Pan { last } => {
                self.mode = InteractionMode::Pan { last: screen };
                self.pan(last - screen);
                true
            }
            InteractionMode::Rotate { last } => {
                self.mode = InteractionMode::Rotate { last: screen };
                self.rotate(last - screen);
                true
            }
        }
    }

    /// Wheel input: zoom at `screen` regardless of the current mode.
    pub fn wheel(
        &mut self,
        delta: f64,
        screen: DVec2,
        picker: &impl ScenePicker,
    ) -> bool {
        self.zoom(screen, delta, picker)
    }

    /// Dispatch a platform-agnostic input event. Returns true if the pose
    /// changed.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        picker: &impl ScenePicker,
    ) -> bool {
        let screen = event.screen_pos();
        match event {
            InputEvent::PointerDown { button, .. } => {
                self.pointer_down(button, screen);
                false
            }
            InputEvent::PointerUp { .. } => {
                self.pointer_up();
                false
            }
            InputEvent::PointerMoved { .. } => self.pointer_move(screen),
            InputEvent::Wheel { delta, .. } => {
                self.wheel(delta, screen, picker)
            }
        }
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Orbit by a screen-space delta (previous − current pointer position).
    ///
    /// X drives the azimuth, Y drives the polar angle. A polar step that
    /// would reach a pole is dropped.
    pub fn rotate(&mut self, delta: DVec2) {
        let speed = self.options.rotate_sensitivity;
        self.spherical
            .set_azimuth(self.spherical.azimuth() + speed * delta.x);
        self.spherical
            .set_polar(self.spherical.polar() + speed * -delta.y);
        self.update_transform(true);
    }

    /// Translate target and eye together by a screen-space delta
    /// (previous − current pointer position).
    ///
    /// The delta is interpreted in the camera's local XY plane and carried
    /// into world space by the current look-at basis; orbit angles and
    /// radius are untouched.
    pub fn pan(&mut self, delta: DVec2) {
        let speed = self.options.pan_sensitivity;
        let local = DVec3::new(delta.x * speed, -delta.y * speed, 0.0);
        let world = self.pose.rotation * local;

        self.target += world;
        self.position += world;
        self.update_transform(false);
    }

    /// Zoom by a wheel `delta` (positive = in) with the cursor at `screen`.
    ///
    /// Zooming out is refused once the radius has reached the configured
    /// floor, and zooming in once it would drop below `min_zoom_radius`.
    /// When zoom-to-object is enabled and `picker` reports a surface under
    /// the cursor, the target slides toward it in proportion to the radius
    /// change. Returns true if the pose changed.
    pub fn zoom(
        &mut self,
        screen: DVec2,
        delta: f64,
        picker: &impl ScenePicker,
    ) -> bool {
        if delta == 0.0 || !delta.is_finite() {
            return false;
        }
        let old_radius = self.spherical.radius();
        if delta < 0.0 && old_radius >= self.options.zoom_distance_floor {
            log::debug!(
                "zoom out refused at radius {old_radius} (floor {})",
                self.options.zoom_distance_floor
            );
            return false;
        }

        let multiplier =
            1.0 - ZOOM_FALLOFF * (delta * self.options.zoom_sensitivity).abs();
        if multiplier <= 0.0 {
            log::debug!("zoom delta {delta} too large, ignoring");
            return false;
        }
        let new_radius = if delta > 0.0 {
            old_radius * multiplier
        } else {
            old_radius / multiplier
        };
        if delta > 0.0 && new_radius < self.options.min_zoom_radius {
            log::debug!(
                "zoom in refused at radius {old_radius} (limit {})",
                self.options.min_zoom_radius
            );
            return false;
        }

        let mut spherical = self.spherical;
        spherical.set_radius(new_radius);
        let mut target = self.target;
        if self.options.zoom_to_object {
            if let Some(hit) = picker.pick(screen) {
                let to_hit = hit.point - target;
                let distance = to_hit.length();
                let shift = distance - distance / old_radius * new_radius;
                target += to_hit.normalize_or_zero() * shift;
            }
        }

        if !orbit_is_resolvable(target, &spherical) {
            log::debug!(
                "zoom to radius {new_radius} puts the eye on the target, ignoring"
            );
            return false;
        }
        self.spherical = spherical;
        self.target = target;
        self.update_transform(true);
        true
    }

    /// Center the target on `bounds` and back the camera off until every
    /// corner fits inside the configured fit field of view.
    ///
    /// The look direction is kept. Centring happens first so the per-corner
    /// projection test runs against a view already aimed at the new target.
    pub fn fit_to_bounds(&mut self, bounds: &BoundingBox) {
        if !bounds.is_finite() {
            return;
        }
        self.target = bounds.center();
        self.update_transform(true);

        if bounds.size() == DVec3::ZERO {
            log::debug!("fit to empty bounds: centred only");
            return;
        }

        let frustum = FitFrustum::from_degrees(
            self.options.fit_fov_horizontal,
            self.options.fit_fov_vertical,
        );
        let view = self.pose.view_matrix();
        let backoff = bounds
            .corners()
            .iter()
            .map(|corner| frustum.required_backoff(view.transform_point3(*corner)))
            .fold(f64::NEG_INFINITY, f64::max);

        let radius = self.spherical.radius() + backoff;
        let mut spherical = self.spherical;
        spherical.set_radius(radius);
        if radius > 0.0 && orbit_is_resolvable(self.target, &spherical) {
            log::debug!("fit to bounds: radius {radius}");
            self.spherical = spherical;
            self.update_transform(true);
        }
    }

    /// Fit the bounding box of `points`. Does nothing for an empty slice.
    pub fn fit_to_points(&mut self, points: &[DVec3]) {
        if let Some(bounds) = BoundingBox::from_points(points) {
            self.fit_to_bounds(&bounds);
        }
    }

    /// Return to the pose the controller was created with and end any
    /// drag.
    pub fn reset(&mut self) {
        self.target = self.home_target;
        self.spherical = self.home_spherical;
        self.mode = InteractionMode::Idle;
        self.update_transform(true);
    }

    // ── Transform derivation ─────────────────────────────────────────────

    fn update_transform(&mut self, spherical_changed: bool) {
        if spherical_changed {
            self.position = self.target + self.spherical.cartesian_offset();
            self.update_look_at_basis();
        }
        self.pose.translation = self.position;
    }

    fn update_look_at_basis(&mut self) {
        // Camera looks down its negative local Z
        let z_axis = (self.position - self.target).normalize();
        let x_axis = WORLD_UP.cross(z_axis).normalize();
        // Unit length already: z and x are orthonormal
        let y_axis = z_axis.cross(x_axis);
        self.pose.rotation = DMat3::from_cols(x_axis, y_axis, z_axis);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Look-at target in world space.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Orbit coordinates of the eye relative to the target.
    #[must_use]
    pub fn spherical(&self) -> &SphericalCoordinate {
        &self.spherical
    }

    /// Current drag mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Current pose (rotation + translation) by value.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Camera space → world space.
    #[must_use]
    pub fn camera_matrix(&self) -> DMat4 {
        self.pose.camera_matrix()
    }

    /// World space → camera space.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        self.pose.view_matrix()
    }

    /// Single-precision GPU uniform for the current pose.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.pose);
        uniform
    }

    /// Active tunables.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the tunables. Takes effect from the next operation.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }
}
