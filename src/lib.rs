//! **Constructive Solid Geometry (CSG)** on soups of convex polygons,
//! built around Boolean operations (*union*, *difference*, *intersection*)
//! evaluated with [BSP](mesh::bsp) trees.
//!
//! ```rust
//! use bspcsg::mesh::Geometry;
//! use bspcsg::traits::CsgOps;
//! use nalgebra::Point3;
//!
//! let a = Geometry::<()>::cube(Point3::new(-0.5, -0.5, 0.5), 1.0);
//! let b = Geometry::<()>::cube(Point3::new(0.5, 0.5, -0.5), 1.0);
//! let union = a.union(&b);
//! assert!(union.is_valid());
//! assert_eq!(union.len(), 24);
//! ```
//!
//! Errors never panic out of the kernel: they travel inside the returned
//! [`Geometry`](mesh::Geometry) and are logged through `tracing`.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod math;
pub mod mesh;
pub mod options;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{Error, ErrorKind, ErrorPolicy};
pub use mesh::Geometry;
pub use mesh::boolean::{intersect, merge, subtract};
pub use options::Options;
pub use traits::CsgOps;
