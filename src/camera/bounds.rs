//! Axis-aligned bounding boxes used by fit-to-bounds.

use glam::DVec3;

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Box spanning two arbitrary opposite corners.
    #[must_use]
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box given by its minimum corner and non-negative extent per axis.
    #[must_use]
    pub fn from_origin_size(origin: DVec3, size: DVec3) -> Self {
        Self::new(origin, origin + size)
    }

    /// Tightest box around `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Centroid of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// The eight corners: bottom face (min y) first, then top face.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_corners() {
        let b = BoundingBox::new(
            DVec3::new(1.0, -2.0, 3.0),
            DVec3::new(-1.0, 2.0, -3.0),
        );
        assert_eq!(b.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b.max, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center(), DVec3::ZERO);
        assert_eq!(b.size(), DVec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn origin_size_matches_location_form() {
        let b = BoundingBox::from_origin_size(
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::ONE,
        );
        assert_eq!(b.center(), DVec3::ZERO);
        assert_eq!(b.max, DVec3::splat(0.5));
    }

    #[test]
    fn corners_are_distinct_and_on_box() {
        let b = BoundingBox::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0));
        let corners = b.corners();
        for (i, a) in corners.iter().enumerate() {
            assert!(a.cmpge(b.min).all() && a.cmple(b.max).all());
            for c in &corners[i + 1..] {
                assert_ne!(a, c);
            }
        }
    }

    #[test]
    fn from_points_handles_empty_and_cloud() {
        assert!(BoundingBox::from_points(&[]).is_none());
        let b = BoundingBox::from_points(&[
            DVec3::new(1.0, 5.0, -2.0),
            DVec3::new(-3.0, 0.0, 4.0),
            DVec3::new(0.0, 2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b.min, DVec3::new(-3.0, 0.0, -2.0));
        assert_eq!(b.max, DVec3::new(1.0, 5.0, 4.0));
    }
}
