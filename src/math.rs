//! Small linear-algebra helpers on top of `nalgebra`.

use crate::float_types::Real;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn lerp(a: &Vector3<Real>, b: &Vector3<Real>, t: Real) -> Vector3<Real> {
    a + (b - a) * t
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp_point(a: &Point3<Real>, b: &Point3<Real>, t: Real) -> Point3<Real> {
    a + (b - a) * t
}

/// Translation part of an affine transform.
pub fn find_translation(matrix: &Matrix4<Real>) -> Vector3<Real> {
    Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)])
}

/// Per-axis scale of an affine transform, i.e. the length of each basis column.
pub fn find_scale(matrix: &Matrix4<Real>) -> Vector3<Real> {
    let linear = matrix.fixed_view::<3, 3>(0, 0);
    Vector3::new(
        linear.column(0).norm(),
        linear.column(1).norm(),
        linear.column(2).norm(),
    )
}

/// Rotation part of an affine transform: the upper 3×3 block with the scale
/// divided out of each column. Columns with zero scale are left untouched.
pub fn find_rotation(matrix: &Matrix4<Real>) -> Matrix3<Real> {
    let scale = find_scale(matrix);
    let mut rotation: Matrix3<Real> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    for (i, s) in scale.iter().enumerate() {
        if *s > Real::EPSILON {
            rotation.column_mut(i).unscale_mut(*s);
        }
    }
    rotation
}
