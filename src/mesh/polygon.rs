//! Struct and functions for working with planar `Polygon`s without holes

use crate::float_types::Real;
use crate::math::find_rotation;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use nalgebra::{Matrix3, Matrix4};

/// A convex, planar polygon with an optional caller-defined `shared` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S: Clone> {
    /// Vertices in winding order
    pub vertices: Vec<Vertex>,

    /// Plane through the first three vertices
    pub plane: Plane,

    /// Generic payload carried through every split and copy
    pub shared: Option<S>,
}

impl<S: Clone> Polygon<S> {
    /// Create a polygon from vertices. The plane is derived from the first
    /// three vertices and is null if they are collinear.
    ///
    /// # Panics
    /// If fewer than three vertices are given.
    pub fn new(vertices: Vec<Vertex>, shared: Option<S>) -> Self {
        assert!(vertices.len() >= 3, "degenerate polygon");

        let plane = Plane::from_points(&vertices[0].pos, &vertices[1].pos, &vertices[2].pos);

        Polygon {
            vertices,
            plane,
            shared,
        }
    }

    /// Reverses winding order, flips vertex normals, and flips the plane normal
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    pub fn flipped(&self) -> Self {
        let mut polygon = self.clone();
        polygon.flip();
        polygon
    }

    /// Apply an affine transform to every vertex; the plane is derived anew.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        self.transform_with_rotation(matrix, &find_rotation(matrix))
    }

    pub(crate) fn transform_with_rotation(
        &self,
        matrix: &Matrix4<Real>,
        rotation: &Matrix3<Real>,
    ) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.transform_with_rotation(matrix, rotation))
            .collect();
        Polygon::new(vertices, self.shared.clone())
    }

    /// Iterate over the edges of the polygon as pairs of consecutive vertices,
    /// closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
    }

    /// Whether every vertex lies within `epsilon` of the polygon's plane.
    /// A polygon with a null plane is never planar.
    pub fn is_planar(&self, epsilon: Real) -> bool {
        !self.plane.is_null()
            && self
                .vertices
                .iter()
                .all(|v| self.plane.signed_distance(&v.pos).abs() <= epsilon)
    }

    /// Whether the polygon turns the same way at every corner, i.e. is convex
    /// and wound consistently with its plane. Collinear corners are accepted.
    pub fn is_convex(&self, epsilon: Real) -> bool {
        if self.plane.is_null() {
            return false;
        }

        let n = self.vertices.len();
        (0..n).all(|i| {
            let a = self.vertices[i].pos;
            let b = self.vertices[(i + 1) % n].pos;
            let c = self.vertices[(i + 2) % n].pos;
            (b - a).cross(&(c - b)).dot(&self.plane.normal) >= -epsilon
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn square() -> Polygon<()> {
        Polygon::new(
            vec![
                Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()),
                Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
                Vertex::new(Point3::new(1.0, 1.0, 0.0), Vector3::z()),
                Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()),
            ],
            None,
        )
    }

    #[test]
    #[should_panic(expected = "degenerate polygon")]
    fn fewer_than_three_vertices_panics() {
        let _ = Polygon::<()>::new(
            vec![
                Vertex::new(Point3::origin(), Vector3::z()),
                Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
            ],
            None,
        );
    }

    #[test]
    fn edges_close_the_loop() {
        let polygon = square();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].0.pos, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(edges[3].1.pos, Point3::origin());
    }

    #[test]
    fn square_is_convex_and_planar() {
        let polygon = square();
        assert!(polygon.is_planar(1e-5));
        assert!(polygon.is_convex(1e-5));
    }

    #[test]
    fn dented_polygon_is_not_convex() {
        let mut polygon = square();
        polygon.vertices.insert(
            2,
            Vertex::new(Point3::new(0.5, 0.5, 0.0), Vector3::z()),
        );
        assert!(polygon.is_planar(1e-5));
        assert!(!polygon.is_convex(1e-5));
    }

    #[test]
    fn lifted_vertex_is_not_planar() {
        let mut polygon = square();
        polygon.vertices[3].pos.z = 0.1;
        assert!(!polygon.is_planar(1e-5));
        assert!(polygon.is_planar(0.2));
    }

    #[test]
    fn transform_recomputes_plane() {
        let polygon = square().transform(&Matrix4::new_translation(&Vector3::new(0.0, 0.0, 3.0)));
        assert_eq!(polygon.plane.normal, Vector3::z());
        assert_eq!(polygon.plane.w, 3.0);
    }
}
