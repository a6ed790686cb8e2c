//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use bspcsg::{
    float_types::Real,
    mesh::{Geometry, polygon::Polygon, vertex::Vertex},
};
use nalgebra::{Point3, Vector3};
use std::io;
use std::sync::{Arc, Mutex};

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of polygons.
pub fn bounding_box(polygons: &[Polygon<()>]) -> [Real; 6] {
    let mut min = Point3::new(Real::MAX, Real::MAX, Real::MAX);
    let mut max = Point3::new(Real::MIN, Real::MIN, Real::MIN);

    for v in polygons.iter().flat_map(|p| &p.vertices) {
        min = min.inf(&v.pos);
        max = max.sup(&v.pos);
    }

    [min.x, min.y, min.z, max.x, max.y, max.z]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let mut verts = Vec::new();
    for p in points {
        let pos = Point3::new(p[0], p[1], p[2]);
        // Vertex normals are carried along only; Polygon::new derives the plane.
        let normal = Vector3::z();
        verts.push(Vertex::new(pos, normal));
    }
    Polygon::new(verts, None)
}

/// Two unit cubes centred on `(-dx, -dy, +dz)` and `(+dx, +dy, -dz)`.
pub fn cube_pair(dx: Real, dy: Real, dz: Real) -> (Geometry<()>, Geometry<()>) {
    (
        Geometry::cube(Point3::new(-dx, -dy, dz), 1.0),
        Geometry::cube(Point3::new(dx, dy, -dz), 1.0),
    )
}

/// `count` parallel triangles stacked along +Z, 1 unit apart, all facing +Z.
pub fn triangle_stack(count: usize) -> Vec<Polygon<()>> {
    (0..count)
        .map(|i| {
            let z = i as Real;
            make_polygon_3d(&[[0.0, 0.0, z], [1.0, 0.0, z], [0.0, 1.0, z]])
        })
        .collect()
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a thread-local fmt subscriber and returns its result
/// together with everything that was logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
