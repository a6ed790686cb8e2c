mod support;

use bspcsg::{
    errors::{Error, ErrorKind},
    io::{FileFormat, OffFormat, read_geometry, supported_formats, write_geometry},
    mesh::Geometry,
};
use nalgebra::{Point3, Vector3};
use std::path::{Path, PathBuf};

use crate::support::capture_logs;

/// A per-process scratch file name in the system temp directory.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bspcsg-{}-{name}", std::process::id()))
}

fn off(text: &str) -> Geometry<()> {
    Geometry::from_off(text)
}

fn format_error_line(geometry: &Geometry<()>) -> Option<usize> {
    match geometry.error() {
        Some(Error::FileFormat { line, .. }) => Some(*line),
        _ => None,
    }
}

#[test]
fn cube_round_trip() {
    let cube: Geometry<()> = Geometry::cube(Point3::origin(), 1.0);
    let text = cube.to_off();
    assert!(text.starts_with("OFF\n8 6 0\n"));
    assert_eq!(text.lines().count(), 2 + 8 + 6);

    let read = off(&text);
    assert!(read.is_valid());
    assert_eq!(read, cube);
}

#[test]
fn sphere_positions_round_trip() {
    let sphere: Geometry<()> = Geometry::sphere(Point3::new(0.1, 0.2, 0.3), 1.7, 16, 8);
    let read = off(&sphere.to_off());
    assert_eq!(read.len(), sphere.len());

    for (a, b) in sphere.polygons().iter().zip(read.polygons()) {
        assert_eq!(a.vertices.len(), b.vertices.len());
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.pos, vb.pos);
            approx::assert_relative_eq!(vb.normal.norm(), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn reader_skips_comments_and_blank_lines() {
    let text = "# a single triangle\nOFF\n\n3 1 0\n# vertices\n0 0 0\n1 0 0\n  0 1 0  \n\n3 0 1 2\n";
    let geometry = off(text);
    assert!(geometry.is_valid());
    assert_eq!(geometry.len(), 1);

    let triangle = &geometry.polygons()[0];
    assert_eq!(triangle.vertices[1].pos, Point3::new(1.0, 0.0, 0.0));
    assert_eq!(triangle.plane.normal, Vector3::z());
    assert!(triangle.vertices.iter().all(|v| v.normal == Vector3::z()));
}

#[test]
fn reader_accepts_empty_meshes() {
    let geometry = off("OFF\n0 0 0\n");
    assert!(geometry.is_valid());
    assert!(geometry.is_empty());
}

#[test]
fn reader_rejects_other_formats() {
    let geometry = off("ply\nformat ascii 1.0\n");
    assert_eq!(geometry.error().map(Error::kind), Some(ErrorKind::NotSupported));
}

#[test]
fn reader_reports_the_offending_line() {
    let vertices = "0 0 0\n1 0 0\n0 1 0\n";

    // Bad header
    assert_eq!(format_error_line(&off("OFF\nthree 1 0\n")), Some(2));
    // Bad coordinate
    assert_eq!(format_error_line(&off("OFF\n3 1 0\n0 0 0\n1 x 0\n")), Some(4));
    // Index out of range
    let text = format!("OFF\n3 1 0\n{vertices}3 0 1 3\n");
    assert_eq!(format_error_line(&off(&text)), Some(6));
    // Too few indices for a face
    let text = format!("OFF\n3 1 0\n{vertices}2 0 1\n");
    assert_eq!(format_error_line(&off(&text)), Some(6));
    // Missing index
    let text = format!("OFF\n3 1 0\n{vertices}3 0 1\n");
    assert_eq!(format_error_line(&off(&text)), Some(6));
}

#[test]
fn reader_reports_truncated_files() {
    assert_eq!(format_error_line(&off("OFF\n3 1 0\n0 0 0\n")), Some(3));

    let geometry = off("OFF\n3 2 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n");
    assert_eq!(format_error_line(&geometry), Some(6));
    assert!(geometry.is_empty());
}

#[test]
fn off_format_is_picked_by_extension() {
    let formats = supported_formats::<()>();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0].id(), "OFF");

    let format: &dyn FileFormat<()> = &OffFormat;
    assert!(format.accepts(Path::new("part.off")));
    assert!(format.accepts(Path::new("dir/PART.OFF")));
    assert!(!format.accepts(Path::new("part.stl")));
    assert!(!format.accepts(Path::new("off")));
}

#[test]
fn write_then_read_file() {
    let path = scratch("round-trip.off");
    let cylinder: Geometry<()> = Geometry::cylinder_centered(Point3::origin(), 2.0, 0.5, 12);

    write_geometry(&cylinder, &path).unwrap();
    let read: Geometry<()> = read_geometry(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(read.is_valid());
    assert_eq!(read.len(), cylinder.len());
    assert_eq!(read.to_off(), cylinder.to_off());
}

#[test]
fn unknown_extension_is_not_supported() {
    let path = scratch("model.xyz");
    let cube: Geometry<()> = Geometry::cube(Point3::origin(), 1.0);

    let error = write_geometry(&cube, &path).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotSupported);
    assert!(!path.exists());

    let read: Geometry<()> = read_geometry(&path);
    assert_eq!(read.error().map(Error::kind), Some(ErrorKind::NotSupported));
}

#[test]
fn missing_file_is_a_file_system_error() {
    let read: Geometry<()> = read_geometry(scratch("does-not-exist.off"));
    assert_eq!(read.error().map(Error::kind), Some(ErrorKind::FileSystem));

    let cube: Geometry<()> = Geometry::cube(Point3::origin(), 1.0);
    let error = write_geometry(&cube, scratch("no-such-dir").join("cube.off")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::FileSystem);
}

#[test]
fn read_failures_are_logged_on_the_io_channel() {
    let (geometry, logs) = capture_logs(|| off("OFF\n3 1 0\n0 0 0\n1 x 0\n"));
    assert_eq!(format_error_line(&geometry), Some(4));
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("bspcsg::io"), "{logs}");
    assert!(logs.contains("FileFormatError"), "{logs}");
}
