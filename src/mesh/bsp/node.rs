//! BSP tree node data structure

use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;

/// A BSP tree node, containing polygons plus optional front/back subtrees
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S: Clone> {
    /// Splitting plane for this node *or* **None** while no polygon with a
    /// usable plane has been added.
    pub plane: Option<Plane>,

    /// Subtree of the *front* half‑space.
    pub front: Option<Box<Node<S>>>,

    /// Subtree of the *back* half‑space.
    pub back: Option<Box<Node<S>>>,

    /// Polygons that lie on `plane`, facing either way.
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Node<S> {
    /// Create a new empty BSP node
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// No plane, no polygons, no children.
    pub fn is_empty(&self) -> bool {
        self.plane.is_none()
            && self.polygons.is_empty()
            && self.front.is_none()
            && self.back.is_none()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            count += 1;
            stack.extend(current.front.as_deref());
            stack.extend(current.back.as_deref());
        }
        count
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((current, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [&current.front, &current.back].into_iter().flatten() {
                stack.push((child.as_ref(), depth + 1));
            }
        }
        deepest
    }
}
