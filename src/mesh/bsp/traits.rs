//! Traits defining BSP tree operations for dependency inversion

use crate::errors::Error;
use crate::mesh::bsp::node::Node;
use crate::mesh::polygon::Polygon;

/// Core BSP operations trait - implements algorithms on BSP nodes
pub trait BspOps<S: Clone> {
    /// Convert solid space to empty space and empty space to solid space
    fn invert(&self, node: &mut Node<S>);

    /// Recursively remove all polygons that are inside this BSP tree
    fn clip_polygons(&self, node: &Node<S>, polygons: &[Polygon<S>]) -> Vec<Polygon<S>>;

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    fn clip_to(&self, node: &mut Node<S>, other: &Node<S>);

    /// Add polygons to the BSP tree, splitting them as needed.
    ///
    /// Fails with [`Error::Recursion`] once a subtree reaches the recursion
    /// limit; polygons added before that stay in the tree.
    fn build(&self, node: &mut Node<S>, polygons: &[Polygon<S>]) -> Result<(), Error>;

    /// Return all polygons in this BSP tree, node by node in pre-order
    fn all_polygons(&self, node: &Node<S>) -> Vec<Polygon<S>>;
}
