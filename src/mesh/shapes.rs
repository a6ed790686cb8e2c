//! Primitive solids: cube, sphere and cylinder.
//!
//! Degenerate parameters produce a [`Geometry`] carrying
//! [`Error::NotSupported`] rather than NaN-filled polygons.

use crate::errors::{Error, ErrorPolicy, LogCategory, report_error};
use crate::float_types::{PI, Real, TAU};
use crate::mesh::Geometry;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Default number of longitude subdivisions of spheres and cylinders.
pub const DEFAULT_SLICES: usize = 16;
/// Default number of latitude subdivisions of spheres.
pub const DEFAULT_STACKS: usize = 8;

// Corner indices per face; bit 0/1/2 of an index selects -/+ along x/y/z.
const CUBE_FACES: [([usize; 4], [Real; 3]); 6] = [
    ([0, 4, 6, 2], [-1.0, 0.0, 0.0]),
    ([1, 3, 7, 5], [1.0, 0.0, 0.0]),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
    ([2, 6, 7, 3], [0.0, 1.0, 0.0]),
    ([0, 2, 3, 1], [0.0, 0.0, -1.0]),
    ([4, 5, 7, 6], [0.0, 0.0, 1.0]),
];

fn unsupported<S: Clone>(shape: &str, reason: &str) -> Geometry<S> {
    let error = Error::NotSupported(format!("{shape}: {reason}"));
    report_error(LogCategory::Shapes, &error, "could not create shape", ErrorPolicy::Fail);
    Geometry::from_error(error)
}

fn is_positive(value: Real) -> bool {
    value.is_finite() && value > 0.0
}

impl<S: Clone> Geometry<S> {
    /// Axis-aligned cube with six outward-facing quads, spanning
    /// `center ± size` on every axis.
    ///
    /// # Example
    /// ```
    /// # use bspcsg::mesh::Geometry;
    /// # use nalgebra::Point3;
    /// let cube = Geometry::<()>::cube(Point3::origin(), 1.0);
    /// assert_eq!(cube.len(), 6);
    /// ```
    pub fn cube(center: Point3<Real>, size: Real) -> Self {
        Self::cuboid(center, Vector3::repeat(size))
    }

    /// Axis-aligned box spanning `center ± half_extents`.
    pub fn cuboid(center: Point3<Real>, half_extents: Vector3<Real>) -> Self {
        if !half_extents.iter().all(|&e| is_positive(e)) {
            return unsupported("cube", "extents must be positive");
        }

        let corner = |i: usize| {
            let dir = Vector3::new(
                if i & 1 != 0 { 1.0 } else { -1.0 },
                if i & 2 != 0 { 1.0 } else { -1.0 },
                if i & 4 != 0 { 1.0 } else { -1.0 },
            );
            center + half_extents.component_mul(&dir)
        };

        let polygons = CUBE_FACES
            .iter()
            .map(|(indices, [nx, ny, nz])| {
                let normal = Vector3::new(*nx, *ny, *nz);
                let vertices = indices
                    .iter()
                    .map(|&i| Vertex::new(corner(i), normal))
                    .collect();
                Polygon::new(vertices, None)
            })
            .collect();

        Geometry::from_polygons(polygons)
    }

    /// UV sphere with `slices` longitude and `stacks` latitude subdivisions.
    /// The polar rows are triangles, every other row is made of quads.
    pub fn sphere(center: Point3<Real>, radius: Real, slices: usize, stacks: usize) -> Self {
        if !is_positive(radius) {
            return unsupported("sphere", "radius must be positive");
        }
        if slices < 3 || stacks < 2 {
            return unsupported("sphere", "needs at least 3 slices and 2 stacks");
        }

        let vertex = |i: usize, j: usize| {
            let theta = TAU * i as Real / slices as Real;
            let phi = PI * j as Real / stacks as Real;
            let dir = Vector3::new(theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            Vertex::new(center + dir * radius, dir)
        };

        let mut polygons = Vec::with_capacity(slices * stacks);
        for i in 0..slices {
            for j in 0..stacks {
                let mut vertices = Vec::with_capacity(4);
                vertices.push(vertex(i, j));
                if j > 0 {
                    vertices.push(vertex(i + 1, j));
                }
                if j < stacks - 1 {
                    vertices.push(vertex(i + 1, j + 1));
                }
                vertices.push(vertex(i, j + 1));
                polygons.push(Polygon::new(vertices, None));
            }
        }

        Geometry::from_polygons(polygons)
    }

    /// Cylinder around the axis `start → end`. Each slice contributes a cap
    /// triangle at either end and one side quad.
    pub fn cylinder(start: Point3<Real>, end: Point3<Real>, radius: Real, slices: usize) -> Self {
        if !is_positive(radius) {
            return unsupported("cylinder", "radius must be positive");
        }
        if slices < 3 {
            return unsupported("cylinder", "needs at least 3 slices");
        }

        let ray = end - start;
        let Some(axis_z) = ray.try_normalize(Real::EPSILON) else {
            return unsupported("cylinder", "start and end coincide");
        };

        // Cross with whichever world axis is far from parallel to the cylinder axis.
        let is_y = axis_z.y.abs() > 0.5;
        let helper = if is_y { Vector3::x() } else { Vector3::y() };
        let axis_x = helper.cross(&axis_z).normalize();
        let axis_y = axis_x.cross(&axis_z).normalize();

        let start_v = Vertex::new(start, -axis_z);
        let end_v = Vertex::new(end, axis_z);

        let point = |stack: Real, slice: usize, normal_blend: Real| {
            let angle = TAU * slice as Real / slices as Real;
            let out = axis_x * angle.cos() + axis_y * angle.sin();
            let pos = start + ray * stack + out * radius;
            let normal = out * (1.0 - normal_blend.abs()) + axis_z * normal_blend;
            Vertex::new(pos, normal)
        };

        let mut polygons = Vec::with_capacity(slices * 3);
        for i in 0..slices {
            polygons.push(Polygon::new(
                vec![start_v, point(0.0, i, -1.0), point(0.0, i + 1, -1.0)],
                None,
            ));
            polygons.push(Polygon::new(
                vec![
                    point(0.0, i + 1, 0.0),
                    point(0.0, i, 0.0),
                    point(1.0, i, 0.0),
                    point(1.0, i + 1, 0.0),
                ],
                None,
            ));
            polygons.push(Polygon::new(
                vec![end_v, point(1.0, i + 1, 1.0), point(1.0, i, 1.0)],
                None,
            ));
        }

        Geometry::from_polygons(polygons)
    }

    /// Upright cylinder of `height` centred on `center`, axis along +Y.
    pub fn cylinder_centered(center: Point3<Real>, height: Real, radius: Real, slices: usize) -> Self {
        if !is_positive(height) {
            return unsupported("cylinder", "height must be positive");
        }
        let half = Vector3::new(0.0, height / 2.0, 0.0);
        Self::cylinder(center - half, center + half, radius, slices)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn degenerate_parameters_are_not_supported() {
        let origin = Point3::origin();
        let cases = [
            Geometry::<()>::cube(origin, 0.0),
            Geometry::<()>::cube(origin, -1.0),
            Geometry::<()>::cube(origin, Real::NAN),
            Geometry::<()>::sphere(origin, 1.0, 2, 8),
            Geometry::<()>::sphere(origin, 1.0, 16, 1),
            Geometry::<()>::sphere(origin, 0.0, 16, 8),
            Geometry::<()>::cylinder(origin, origin, 1.0, 16),
            Geometry::<()>::cylinder(origin, Point3::new(0.0, 1.0, 0.0), 1.0, 2),
            Geometry::<()>::cylinder_centered(origin, 0.0, 1.0, 16),
        ];

        for geometry in cases {
            assert_eq!(geometry.error().map(Error::kind), Some(ErrorKind::NotSupported));
            assert!(geometry.is_empty());
        }
    }

    #[test]
    fn cuboid_spans_half_extents() {
        let cuboid = Geometry::<()>::cuboid(Point3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0));
        let aabb = cuboid.bounding_box().unwrap();
        assert_eq!(aabb.mins, Point3::new(0.0, -2.0, -3.0));
        assert_eq!(aabb.maxs, Point3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn minimal_sphere_has_only_caps() {
        let sphere = Geometry::<()>::sphere(Point3::origin(), 1.0, 3, 2);
        assert_eq!(sphere.len(), 6);
        assert!(sphere.polygons().iter().all(|p| p.vertices.len() == 3));
    }
}
