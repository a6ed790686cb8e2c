// main.rs
//
// Builds each primitive and every boolean operator once and writes the results
// as OFF files. Here, we do not use any shared data, so we bind the generic S to ().

use bspcsg::io::write_geometry;
use bspcsg::mesh::bsp::CountingInspector;
use bspcsg::{CsgOps, ErrorPolicy, Options, merge};
use nalgebra::Point3;
use std::fs;
use tracing_subscriber::EnvFilter;

// A type alias for convenience: no shared data, i.e. S = ()
type Geometry = bspcsg::Geometry<()>;

fn save(geometry: &Geometry, name: &str) {
    let path = format!("off/{name}.off");
    match write_geometry(geometry, &path) {
        Ok(()) => tracing::info!(%path, polygons = geometry.len(), "written"),
        Err(error) => tracing::error!(%path, %error, "could not write geometry"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Ensure the /off folder exists
    let _ = fs::create_dir_all("off");

    let cube = Geometry::cube(Point3::origin(), 1.0);
    let sphere = Geometry::sphere(Point3::origin(), 1.3, 16, 8);
    let cylinder = Geometry::cylinder_centered(Point3::origin(), 3.0, 0.6, 16);

    save(&cube, "cube");
    save(&sphere, "sphere");
    save(&cylinder, "cylinder");

    save(&cube.union(&sphere), "cube_union_sphere");
    save(&cube.difference(&sphere), "cube_minus_sphere");
    save(&cube.intersection(&sphere), "cube_intersect_sphere");

    // The classic: rounded cube with three holes drilled through
    let rounded = &cube & &sphere;
    let drill = &(&cylinder | &cylinder.rotate(90.0, 0.0, 0.0)) | &cylinder.rotate(0.0, 0.0, 90.0);
    save(&(&rounded - &drill), "drilled");

    // Count the tree events of one operation
    let inspector = CountingInspector::new();
    let options = Options::default()
        .with_error_policy(ErrorPolicy::LogAndContinue)
        .with_inspector(&inspector);
    let shifted = cube.translate(0.5, 0.5, 0.5);
    save(&merge(&cube, &shifted, &options), "cube_union_shifted");
    tracing::info!(
        builds = inspector.builds(),
        inverts = inspector.inverts(),
        clips = inspector.clips(),
        "inspected merge"
    );
}
