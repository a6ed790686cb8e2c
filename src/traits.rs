use crate::float_types::Real;
use crate::mesh::Geometry;
use crate::mesh::boolean::{intersect, merge, subtract};
use crate::options::Options;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};
use std::ops::{BitAnd, BitOr, Sub};

/// Boolean operations + transformations
pub trait CsgOps: Sized + Clone {
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn inverse(&self) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Rotates by x_degrees, y_degrees, z_degrees, applied in x, y, z order
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Scales by scale_x, scale_y, scale_z
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }
}

/// The boolean operators run with [`Options::default`]; call the functions in
/// [`crate::mesh::boolean`] to pass options explicitly.
impl<S: Clone> CsgOps for Geometry<S> {
    fn union(&self, other: &Self) -> Self {
        merge(self, other, &Options::default())
    }

    fn difference(&self, other: &Self) -> Self {
        subtract(self, other, &Options::default())
    }

    fn intersection(&self, other: &Self) -> Self {
        intersect(self, other, &Options::default())
    }

    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        Geometry::transform(self, matrix)
    }

    fn inverse(&self) -> Self {
        Geometry::inverse(self)
    }
}

impl<S: Clone> BitOr for &Geometry<S> {
    type Output = Geometry<S>;

    fn bitor(self, rhs: Self) -> Geometry<S> {
        self.union(rhs)
    }
}

impl<S: Clone> Sub for &Geometry<S> {
    type Output = Geometry<S>;

    fn sub(self, rhs: Self) -> Geometry<S> {
        self.difference(rhs)
    }
}

impl<S: Clone> BitAnd for &Geometry<S> {
    type Output = Geometry<S>;

    fn bitand(self, rhs: Self) -> Geometry<S> {
        self.intersection(rhs)
    }
}
