//! `Geometry` struct: a solid as a soup of convex polygons plus an error status

use crate::aabb::Aabb;
use crate::errors::Error;
use crate::float_types::Real;
use crate::math::find_rotation;
use crate::mesh::{polygon::Polygon, vertex::Vertex};
use nalgebra::Matrix4;

pub mod boolean;
pub mod bsp;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

/// The boundary of a solid, or the error that prevented computing it.
///
/// The polygon list of a geometry carrying an error is not meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry<S: Clone> {
    polygons: Vec<Polygon<S>>,
    error: Option<Error>,
}

impl<S: Clone> Default for Geometry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Geometry<S> {
    /// Returns a new empty, valid Geometry
    pub const fn new() -> Self {
        Geometry {
            polygons: Vec::new(),
            error: None,
        }
    }

    /// Build a Geometry from an existing polygon list
    pub const fn from_polygons(polygons: Vec<Polygon<S>>) -> Self {
        Geometry {
            polygons,
            error: None,
        }
    }

    /// A Geometry that only reports `error`
    pub const fn from_error(error: Error) -> Self {
        Geometry {
            polygons: Vec::new(),
            error: Some(error),
        }
    }

    pub fn polygons(&self) -> &[Polygon<S>] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        self.polygons
    }

    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Helper to collect all vertices, polygon by polygon.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect()
    }

    /// Bounding box of every vertex, `None` for an empty geometry.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.polygons
                .iter()
                .flat_map(|p| p.vertices.iter().map(|v| &v.pos)),
        )
    }

    /// Swap inside and outside by flipping every polygon.
    pub fn inverse(&self) -> Self {
        Geometry {
            polygons: self.polygons.iter().map(Polygon::flipped).collect(),
            error: self.error.clone(),
        }
    }

    /// Apply an affine transform: positions go through `matrix`, normals
    /// only through its rotation part.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let rotation = find_rotation(matrix);
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.transform_with_rotation(matrix, &rotation))
            .collect();

        Geometry {
            polygons,
            error: self.error.clone(),
        }
    }

    /// Indices of polygons that are not planar or not convex within `epsilon`.
    pub fn validate(&self, epsilon: Real) -> Vec<usize> {
        self.polygons
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_planar(epsilon) || !p.is_convex(epsilon))
            .map(|(i, _)| i)
            .collect()
    }
}

impl<S: Clone> From<Vec<Polygon<S>>> for Geometry<S> {
    fn from(polygons: Vec<Polygon<S>>) -> Self {
        Geometry::from_polygons(polygons)
    }
}

impl<S: Clone> From<Error> for Geometry<S> {
    fn from(error: Error) -> Self {
        Geometry::from_error(error)
    }
}
