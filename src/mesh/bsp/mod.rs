//! Binary Space Partitioning (BSP) tree implementation
//!
//! The algorithms live behind the [`BspOps`] trait; [`Node`] offers them as
//! methods that take the per-call [`Options`].

pub mod inspect;
pub mod node;
pub mod serial;
pub mod traits;

pub use inspect::{CountingInspector, Event, EventKind, FnInspector, Inspection, Inspector};
pub use node::Node;
pub use serial::SerialBspOps;
pub use traits::BspOps;

use crate::errors::Error;
use crate::mesh::polygon::Polygon;
use crate::options::Options;

impl<S: Clone> Node<S> {
    /// Creates a new BSP tree from polygons
    pub fn from_polygons(polygons: &[Polygon<S>], options: &Options<S>) -> Result<Self, Error> {
        let mut node = Self::new();
        node.build(polygons, options)?;
        Ok(node)
    }

    /// Invert all polygons in the BSP tree
    pub fn invert(&mut self, options: &Options<S>) {
        SerialBspOps::new(*options).invert(self);
    }

    /// A deep copy of this tree, inverted
    pub fn inverted(&self, options: &Options<S>) -> Self {
        let mut node = self.clone();
        node.invert(options);
        node
    }

    /// Recursively remove all polygons that are inside this BSP tree
    pub fn clip_polygons(&self, polygons: &[Polygon<S>], options: &Options<S>) -> Vec<Polygon<S>> {
        SerialBspOps::new(*options).clip_polygons(self, polygons)
    }

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    pub fn clip_to(&mut self, other: &Node<S>, options: &Options<S>) {
        SerialBspOps::new(*options).clip_to(self, other);
    }

    /// Return all polygons in this BSP tree
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        SerialBspOps::new(Options::default()).all_polygons(self)
    }

    /// Build a BSP tree from the given polygons
    pub fn build(&mut self, polygons: &[Polygon<S>], options: &Options<S>) -> Result<(), Error> {
        SerialBspOps::new(*options).build(self, polygons)
    }
}
