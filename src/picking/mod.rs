//! Scene ray-pick seam.
//!
//! The controller never traverses the scene itself. During a zoom it asks an
//! injected [`ScenePicker`] what lies under the cursor and uses the hit
//! point, if any, to slide the orbit target toward the surface.

use glam::{DVec2, DVec3};

/// Surface hit returned by a ray-pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// World-space intersection point.
    pub point: DVec3,
    /// Surface normal at the hit, when the collaborator provides one.
    pub normal: Option<DVec3>,
}

impl PickHit {
    /// Hit with a point only.
    #[must_use]
    pub fn at(point: DVec3) -> Self {
        Self {
            point,
            normal: None,
        }
    }
}

/// Maps a screen position to the scene surface under it.
///
/// Called synchronously from within a zoom; implementations may be
/// arbitrarily expensive but must return before the zoom can finish.
pub trait ScenePicker {
    /// Pick the scene at `screen` (collaborator pixel space).
    fn pick(&self, screen: DVec2) -> Option<PickHit>;
}

impl<F> ScenePicker for F
where
    F: Fn(DVec2) -> Option<PickHit>,
{
    fn pick(&self, screen: DVec2) -> Option<PickHit> {
        self(screen)
    }
}

/// Picker for scenes with nothing to hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPick;

impl ScenePicker for NoPick {
    fn pick(&self, _screen: DVec2) -> Option<PickHit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_pickers() {
        let picker = |screen: DVec2| {
            (screen.x > 0.0).then(|| PickHit::at(DVec3::new(screen.x, 0.0, 0.0)))
        };
        assert_eq!(
            picker.pick(DVec2::new(3.0, 1.0)).map(|h| h.point),
            Some(DVec3::new(3.0, 0.0, 0.0))
        );
        assert!(picker.pick(DVec2::new(-1.0, 1.0)).is_none());
        assert!(NoPick.pick(DVec2::ZERO).is_none());
    }
}
