//! Oriented planes in Hessian normal form and the polygon splitting routine
//! the BSP tree is built on.

use crate::float_types::Real;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

// Plane classification bits, OR-ed together per polygon.
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// The four fragment buckets produced by [`Plane::split_polygon`]:
/// `(coplanar_front, coplanar_back, front, back)`.
pub type SplitResult<S> = (Vec<Polygon<S>>, Vec<Polygon<S>>, Vec<Polygon<S>>, Vec<Polygon<S>>);

/// A plane `normal · p = w`.
///
/// A zero `normal` marks the *null* plane: derived from degenerate input, or
/// not yet chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, or the zero vector for the null plane.
    pub normal: Vector3<Real>,
    /// Signed distance from the origin along `normal`.
    pub w: Real,
}

impl Plane {
    /// The null plane.
    pub const fn null() -> Self {
        Plane {
            normal: Vector3::new(0.0, 0.0, 0.0),
            w: 0.0,
        }
    }

    /// Build a plane from a normal and offset. The normal is normalized; a
    /// zero normal yields the null plane.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        match normal.try_normalize(0.0) {
            Some(normal) => Plane { normal, w },
            None => Plane::null(),
        }
    }

    /// Plane through three points, normal following the right-hand rule over
    /// `(b - a) × (c - a)`. Collinear or coincident points give the null plane.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Self {
        match (b - a).cross(&(c - a)).try_normalize(0.0) {
            Some(normal) => Plane {
                normal,
                w: normal.dot(&a.coords),
            },
            None => Plane::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.normal == Vector3::zeros()
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify `point` as [`FRONT`], [`BACK`] or [`COPLANAR`] within `epsilon`.
    #[inline]
    pub fn orient_point(&self, point: &Point3<Real>, epsilon: Real) -> i8 {
        let t = self.signed_distance(point);
        if t < -epsilon {
            BACK
        } else if t > epsilon {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Classify a whole polygon; the result is the OR of its vertex classes,
    /// so [`SPANNING`] means vertices on both sides.
    pub fn classify_polygon<S: Clone>(&self, polygon: &Polygon<S>, epsilon: Real) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos, epsilon))
    }

    /// Splits `polygon` by this plane, returning four buckets:
    /// `(coplanar_front, coplanar_back, front, back)`.
    ///
    /// Coplanar polygons go to the front bucket when their own normal agrees
    /// with this plane. Spanning polygons are cut into one front and one back
    /// fragment; fragments with fewer than three vertices are dropped. Every
    /// fragment keeps the `shared` tag of its source.
    pub fn split_polygon<S: Clone>(&self, polygon: &Polygon<S>, epsilon: Real) -> SplitResult<S> {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos, epsilon))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let (split_front, split_back) = self.split_vertices(&polygon.vertices, &types);
                if split_front.len() >= 3 {
                    front.push(Polygon::new(split_front, polygon.shared.clone()));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::new(split_back, polygon.shared.clone()));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }

    /// Walks the edges of a spanning polygon and distributes its vertices,
    /// inserting the edge intersections into both fragments.
    fn split_vertices(&self, vertices: &[Vertex], types: &[i8]) -> (Vec<Vertex>, Vec<Vertex>) {
        let mut split_front = Vec::with_capacity(vertices.len() + 1);
        let mut split_back = Vec::with_capacity(vertices.len() + 1);

        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            let (type_i, type_j) = (types[i], types[j]);
            let (vertex_i, vertex_j) = (&vertices[i], &vertices[j]);

            if type_i != BACK {
                split_front.push(*vertex_i);
            }
            if type_i != FRONT {
                split_back.push(*vertex_i);
            }

            if (type_i | type_j) == SPANNING {
                // With a zero epsilon the endpoints can straddle the plane by
                // less than Real::EPSILON; the crossing is then the start vertex.
                let denom = self.normal.dot(&(vertex_j.pos - vertex_i.pos));
                let vertex_new = if denom.abs() > Real::EPSILON {
                    let t = (self.w - self.normal.dot(&vertex_i.pos.coords)) / denom;
                    vertex_i.interpolate(vertex_j, t)
                } else {
                    *vertex_i
                };
                split_front.push(vertex_new);
                split_back.push(vertex_new);
            }
        }

        (split_front, split_back)
    }
}
