//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use crate::math::{find_rotation, lerp, lerp_point};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// A vertex of a polygon, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it is copied verbatim and
    ///   only carried along by the kernel, never used for classification.
    ///
    /// Non-finite coordinates are replaced with `0.0`.
    #[inline]
    pub fn new(mut pos: Point3<Real>, mut normal: Vector3<Real>) -> Self {
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }
        for c in normal.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        Vertex { pos, normal }
    }

    /// Flip vertex normal in place.
    ///
    /// # Example
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use bspcsg::mesh::vertex::Vertex;
    /// let mut v = Vertex::new(Point3::new(1.0, 2.0, 3.0), Vector3::x());
    /// v.flip();
    /// assert_eq!(v.pos, Point3::new(1.0, 2.0, 3.0), "position remains the same");
    /// assert_eq!(v.normal, -Vector3::x(), "the normal is negated");
    /// ```
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Normals are linearly interpolated as well and are not renormalized.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        Vertex::new(
            lerp_point(&self.pos, &other.pos, t),
            lerp(&self.normal, &other.normal, t),
        )
    }

    /// Apply an affine transform. The position goes through the full matrix,
    /// the normal only through its rotation part.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Vertex {
        self.transform_with_rotation(matrix, &find_rotation(matrix))
    }

    pub(crate) fn transform_with_rotation(
        &self,
        matrix: &Matrix4<Real>,
        rotation: &Matrix3<Real>,
    ) -> Vertex {
        Vertex::new(matrix.transform_point(&self.pos), rotation * self.normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VertexEpsilon {
    pub position: <Point3<Real> as approx::AbsDiffEq>::Epsilon,
    pub normal: <Vector3<Real> as approx::AbsDiffEq>::Epsilon,
}

impl approx::AbsDiffEq for Vertex {
    type Epsilon = VertexEpsilon;

    fn default_epsilon() -> Self::Epsilon {
        Self::Epsilon {
            position: Point3::<Real>::default_epsilon(),
            normal: Vector3::<Real>::default_epsilon(),
        }
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.pos, &other.pos, epsilon.position)
            && approx::AbsDiffEq::abs_diff_eq(&self.normal, &other.normal, epsilon.normal)
    }
}

impl approx::RelativeEq for Vertex {
    fn default_max_relative() -> Self::Epsilon {
        Self::Epsilon {
            position: Point3::<Real>::default_max_relative(),
            normal: Vector3::<Real>::default_max_relative(),
        }
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(
            &self.pos,
            &other.pos,
            epsilon.position,
            max_relative.position,
        ) && approx::RelativeEq::relative_eq(
            &self.normal,
            &other.normal,
            epsilon.normal,
            max_relative.normal,
        )
    }
}

impl approx::UlpsEq for Vertex {
    fn default_max_ulps() -> u32 {
        Point3::<Real>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.pos, &other.pos, epsilon.position, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.normal, &other.normal, epsilon.normal, max_ulps)
    }
}
