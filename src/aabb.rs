use crate::float_types::Real;
use nalgebra::Point3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing all `points`, or `None` if there are none.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3<Real>>) -> Option<Self> {
        points.into_iter().fold(None, |aabb, p| {
            Some(match aabb {
                None => Aabb::new(*p, *p),
                Some(Aabb { mins, maxs }) => Aabb::new(mins.inf(p), maxs.sup(p)),
            })
        })
    }
}
