//! Spherical orbit coordinates with a cached Cartesian offset.
//!
//! The math uses the textbook Z-up frame (polar angle measured from +Z,
//! azimuth in the XY plane). Scene space is Y-up, so conversions remap
//! `(x, y, z) → (x, z, -y)` on the way out and the inverse on the way in.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

use crate::error::OrbitError;

/// Camera offset from its target expressed as radius, azimuth and polar
/// angle.
///
/// The Cartesian offset is recomputed eagerly on every mutation and can only
/// be read, never written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinate {
    radius: f64,
    azimuth: f64,
    polar: f64,
    cartesian_offset: DVec3,
}

impl Default for SphericalCoordinate {
    fn default() -> Self {
        Self::from_parts(1.0, 0.0, FRAC_PI_2)
    }
}

/// Whether `polar` lies strictly inside (0, π).
#[inline]
fn is_valid_polar(polar: f64) -> bool {
    polar > 0.0 && polar < PI
}

impl SphericalCoordinate {
    /// Create a coordinate from radius, azimuth and polar angle (radians).
    ///
    /// Fails with [`OrbitError::PolarOutOfRange`] if `polar` is not strictly
    /// between 0 and π.
    pub fn new(
        radius: f64,
        azimuth: f64,
        polar: f64,
    ) -> Result<Self, OrbitError> {
        if !is_valid_polar(polar) {
            return Err(OrbitError::PolarOutOfRange(polar));
        }
        Ok(Self::from_parts(radius, azimuth, polar))
    }

    fn from_parts(radius: f64, azimuth: f64, polar: f64) -> Self {
        let mut coord = Self {
            radius,
            azimuth,
            polar,
            cartesian_offset: DVec3::ZERO,
        };
        coord.refresh_cartesian();
        coord
    }

    /// Derive spherical coordinates from a Cartesian offset.
    ///
    /// `y_is_up` selects the scene convention of `v`; when set, the vector is
    /// remapped into the Z-up frame before conversion. Azimuth is normalized
    /// into `[0, 2π)`.
    ///
    /// A zero-length offset has no defined angles and yields
    /// [`OrbitError::ZeroOffset`]. An offset lying on the up axis (polar
    /// exactly 0 or π) yields [`OrbitError::OffsetOnPoleAxis`].
    pub fn from_cartesian(
        v: DVec3,
        y_is_up: bool,
    ) -> Result<Self, OrbitError> {
        if !v.is_finite() {
            return Err(OrbitError::NonFinite);
        }
        let v = if y_is_up { DVec3::new(v.x, -v.z, v.y) } else { v };

        let radius = v.length();
        if radius == 0.0 {
            return Err(OrbitError::ZeroOffset);
        }

        let mut azimuth = v.y.atan2(v.x);
        if azimuth < 0.0 {
            azimuth += TAU;
        }
        let polar = (v.z / radius).clamp(-1.0, 1.0).acos();
        if !is_valid_polar(polar) {
            return Err(OrbitError::OffsetOnPoleAxis);
        }

        Ok(Self::from_parts(radius, azimuth, polar))
    }

    /// Convert to a Cartesian offset in the requested convention.
    #[must_use]
    pub fn to_cartesian(&self, y_is_up: bool) -> DVec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        let x = self.radius * sin_polar * cos_azimuth;
        let y = self.radius * sin_polar * sin_azimuth;
        let z = self.radius * cos_polar;

        if y_is_up {
            DVec3::new(x, z, -y)
        } else {
            DVec3::new(x, y, z)
        }
    }

    /// Distance from the target.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Horizontal orbit angle (radians, unbounded).
    #[inline]
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Angle from the up axis (radians, always inside (0, π)).
    #[inline]
    #[must_use]
    pub fn polar(&self) -> f64 {
        self.polar
    }

    /// Cached Y-up Cartesian offset for the current triple.
    #[inline]
    #[must_use]
    pub fn cartesian_offset(&self) -> DVec3 {
        self.cartesian_offset
    }

    /// Set the radius and refresh the Cartesian offset.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.refresh_cartesian();
    }

    /// Set the azimuth and refresh the Cartesian offset.
    pub fn set_azimuth(&mut self, azimuth: f64) {
        self.azimuth = azimuth;
        self.refresh_cartesian();
    }

    /// Set the polar angle.
    ///
    /// Values outside the open interval (0, π) are ignored without any
    /// signal to the caller; the previous angle stays in effect.
    pub fn set_polar(&mut self, polar: f64) {
        if !is_valid_polar(polar) {
            log::trace!("ignoring polar angle {polar} outside (0, π)");
            return;
        }
        self.polar = polar;
        self.refresh_cartesian();
    }

    fn refresh_cartesian(&mut self) {
        self.cartesian_offset = self.to_cartesian(true);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn round_trips_through_both_conventions() {
        let vectors = [
            DVec3::new(0.0, 20.0, 20.0),
            DVec3::new(3.0, -4.0, 12.0),
            DVec3::new(-7.5, 0.25, -1.0),
            DVec3::new(1e-3, 2e-3, -5e-3),
        ];
        for v in vectors {
            for y_is_up in [true, false] {
                let coord =
                    SphericalCoordinate::from_cartesian(v, y_is_up).unwrap();
                assert_vec_close(coord.to_cartesian(y_is_up), v);
            }
        }
    }

    #[test]
    fn default_viewport_offset_angles() {
        let coord = SphericalCoordinate::from_cartesian(
            DVec3::new(0.0, 20.0, 20.0),
            true,
        )
        .unwrap();
        assert!((coord.radius() - 800.0_f64.sqrt()).abs() < EPS);
        assert!((coord.azimuth() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((coord.polar() - FRAC_PI_4).abs() < EPS);
        assert_vec_close(coord.cartesian_offset(), DVec3::new(0.0, 20.0, 20.0));
    }

    #[test]
    fn azimuth_is_normalized_into_full_turn() {
        for v in [
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(-1.0, 0.0, 1.0),
            DVec3::new(-1.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
        ] {
            let coord = SphericalCoordinate::from_cartesian(v, true).unwrap();
            assert!((0.0..TAU).contains(&coord.azimuth()));
        }
    }

    #[test]
    fn polar_rejects_poles_and_negatives() {
        let mut coord = SphericalCoordinate::new(5.0, 0.3, 1.0).unwrap();
        let before = coord;

        coord.set_polar(0.0);
        assert_eq!(coord, before);
        coord.set_polar(PI);
        assert_eq!(coord, before);
        coord.set_polar(-0.5);
        assert_eq!(coord, before);
        coord.set_polar(4.0);
        assert_eq!(coord, before);

        coord.set_polar(FRAC_PI_2);
        assert_eq!(coord.polar(), FRAC_PI_2);
        assert_vec_close(
            coord.cartesian_offset(),
            coord.to_cartesian(true),
        );
    }

    #[test]
    fn setters_keep_offset_consistent() {
        let mut coord = SphericalCoordinate::default();
        coord.set_radius(12.0);
        coord.set_azimuth(-7.0);
        coord.set_polar(2.5);
        assert_vec_close(coord.cartesian_offset(), coord.to_cartesian(true));
        assert!((coord.cartesian_offset().length() - 12.0).abs() < EPS);
    }

    #[test]
    fn constructor_rejects_polar_outside_interval() {
        assert!(matches!(
            SphericalCoordinate::new(1.0, 0.0, 0.0),
            Err(OrbitError::PolarOutOfRange(_))
        ));
        assert!(matches!(
            SphericalCoordinate::new(1.0, 0.0, PI),
            Err(OrbitError::PolarOutOfRange(_))
        ));
    }

    #[test]
    fn zero_vector_is_rejected() {
        assert!(matches!(
            SphericalCoordinate::from_cartesian(DVec3::ZERO, true),
            Err(OrbitError::ZeroOffset)
        ));
        assert!(matches!(
            SphericalCoordinate::from_cartesian(DVec3::ZERO, false),
            Err(OrbitError::ZeroOffset)
        ));
    }

    #[test]
    fn offset_on_up_axis_is_rejected() {
        assert!(matches!(
            SphericalCoordinate::from_cartesian(DVec3::new(0.0, 3.0, 0.0), true),
            Err(OrbitError::OffsetOnPoleAxis)
        ));
        assert!(matches!(
            SphericalCoordinate::from_cartesian(
                DVec3::new(0.0, 0.0, -3.0),
                false
            ),
            Err(OrbitError::OffsetOnPoleAxis)
        ));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(matches!(
            SphericalCoordinate::from_cartesian(
                DVec3::new(f64::NAN, 1.0, 1.0),
                true
            ),
            Err(OrbitError::NonFinite)
        ));
    }
}
