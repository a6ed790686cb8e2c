mod support;

use bspcsg::mesh::{polygon::Polygon, vertex::Vertex};
use nalgebra::{Matrix4, Point3, Vector3};

use crate::support::make_polygon_3d;

#[test]
fn new_derives_plane_from_first_three_vertices() {
    let poly = make_polygon_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(poly.vertices.len(), 4);
    assert_eq!(poly.plane.normal, Vector3::z());
    assert_eq!(poly.plane.w, 0.0);
    assert!(poly.shared.is_none());
}

#[test]
fn flip() {
    let mut poly: Polygon<()> = Polygon::new(
        vec![
            Vertex::new(Point3::origin(), Vector3::z()),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()),
        ],
        None,
    );
    let plane_normal_before = poly.plane.normal;
    poly.flip();
    // The vertices should be reversed, and normal flipped
    assert_eq!(poly.vertices.len(), 3);
    assert_eq!(poly.vertices[0].pos, Point3::new(0.0, 1.0, 0.0));
    assert_eq!(poly.vertices[2].pos, Point3::origin());
    assert!(poly.vertices.iter().all(|v| v.normal == -Vector3::z()));
    assert_eq!(poly.plane.normal, -plane_normal_before);
}

#[test]
fn double_flip_is_identity() {
    let poly = make_polygon_3d(&[[0.0, 0.0, 1.0], [2.0, 0.0, 1.0], [2.0, 3.0, 1.0]]);
    assert_eq!(poly.flipped().flipped(), poly);
}

#[test]
fn transform_moves_positions_and_keeps_shared() {
    let poly: Polygon<u32> = Polygon::new(
        vec![
            Vertex::new(Point3::origin(), Vector3::z()),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()),
        ],
        Some(7),
    );
    let moved = poly.transform(&Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0)));

    assert_eq!(moved.vertices[0].pos, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(moved.vertices[0].normal, Vector3::z());
    assert_eq!(moved.plane.w, 3.0);
    assert_eq!(moved.shared, Some(7));
}

#[test]
fn diagnostics() {
    let triangle = make_polygon_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert!(triangle.is_planar(1e-5));
    assert!(triangle.is_convex(1e-5));

    // Self-intersecting outline.
    let bowtie = make_polygon_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
    assert!(bowtie.is_planar(1e-5));
    assert!(!bowtie.is_convex(1e-5));

    let collinear = make_polygon_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    assert!(collinear.plane.is_null());
    assert!(!collinear.is_planar(1e-5));
    assert!(!collinear.is_convex(1e-5));
}
