//! Serial implementation of BSP operations

use crate::errors::{Error, LogCategory, report_error};
use crate::mesh::bsp::inspect::{Event, Inspection};
use crate::mesh::bsp::node::Node;
use crate::mesh::bsp::traits::BspOps;
use crate::mesh::polygon::Polygon;
use crate::options::Options;

/// Serial implementation of BSP operations, configured per call
#[derive(Debug, Clone)]
pub struct SerialBspOps<'a, S: Clone> {
    options: Options<'a, S>,
}

impl<'a, S: Clone> SerialBspOps<'a, S> {
    pub const fn new(options: Options<'a, S>) -> Self {
        Self { options }
    }

    fn inspect(&self, event: Event<'_, S>) -> Inspection {
        match self.options.inspector {
            Some(inspector) => inspector.inspect(event),
            None => Inspection::Proceed,
        }
    }

    fn build_level(
        &self,
        node: &mut Node<S>,
        polygons: &[Polygon<S>],
        level: usize,
    ) -> Result<(), Error> {
        if polygons.is_empty() {
            return Ok(());
        }

        let limit = self.options.recursion_limit;
        if level >= limit {
            return Err(Error::Recursion { limit });
        }

        if self.inspect(Event::Build { node: &*node, level }) == Inspection::Abort {
            tracing::debug!(target: "bspcsg::node", level, "build aborted by inspector");
            return Ok(());
        }

        let plane = match node.plane {
            Some(plane) => plane,
            None => match polygons.iter().find(|p| !p.plane.is_null()) {
                Some(first) => *node.plane.insert(first.plane),
                None => {
                    // Nothing here can split space.
                    node.polygons.extend_from_slice(polygons);
                    return Ok(());
                },
            },
        };

        let mut front = Vec::new();
        let mut back = Vec::new();

        for polygon in polygons {
            let (coplanar_front, coplanar_back, mut front_parts, mut back_parts) =
                plane.split_polygon(polygon, self.options.epsilon);

            node.polygons.extend(coplanar_front);
            node.polygons.extend(coplanar_back);
            front.append(&mut front_parts);
            back.append(&mut back_parts);
        }

        if !front.is_empty() {
            let child = node.front.get_or_insert_with(|| Box::new(Node::new()));
            self.build_level(child, &front, level + 1)?;
        }

        if !back.is_empty() {
            let child = node.back.get_or_insert_with(|| Box::new(Node::new()));
            self.build_level(child, &back, level + 1)?;
        }

        Ok(())
    }
}

impl<S: Clone> BspOps<S> for SerialBspOps<'_, S> {
    fn invert(&self, node: &mut Node<S>) {
        // Use iterative approach with a stack
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if self.inspect(Event::Invert { node: &*current }) == Inspection::Abort {
                continue;
            }

            current.polygons.iter_mut().for_each(|p| p.flip());
            if let Some(ref mut plane) = current.plane {
                plane.flip();
            }

            std::mem::swap(&mut current.front, &mut current.back);

            if let Some(ref mut front) = current.front {
                stack.push(front.as_mut());
            }
            if let Some(ref mut back) = current.back {
                stack.push(back.as_mut());
            }
        }
    }

    fn clip_polygons(&self, node: &Node<S>, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        let Some(plane) = node.plane else {
            return polygons.to_vec();
        };

        let mut front_polys = Vec::with_capacity(polygons.len());
        let mut back_polys = Vec::with_capacity(polygons.len());

        for polygon in polygons {
            let (coplanar_front, coplanar_back, front_parts, back_parts) =
                plane.split_polygon(polygon, self.options.epsilon);

            front_polys.extend(coplanar_front);
            front_polys.extend(front_parts);
            back_polys.extend(coplanar_back);
            back_polys.extend(back_parts);
        }

        let mut result = match &node.front {
            Some(front_node) => self.clip_polygons(front_node, &front_polys),
            None => front_polys,
        };

        // With no back subtree the back fragments are inside the solid.
        if let Some(back_node) = &node.back {
            result.extend(self.clip_polygons(back_node, &back_polys));
        }

        result
    }

    fn clip_to(&self, node: &mut Node<S>, other: &Node<S>) {
        if self.inspect(Event::Clip { node: &*node, other }) == Inspection::Abort {
            return;
        }

        node.polygons = self.clip_polygons(other, &node.polygons);

        if let Some(ref mut front) = node.front {
            self.clip_to(front, other);
        }

        if let Some(ref mut back) = node.back {
            self.clip_to(back, other);
        }
    }

    fn build(&self, node: &mut Node<S>, polygons: &[Polygon<S>]) -> Result<(), Error> {
        self.build_level(node, polygons, 0).inspect_err(|error| {
            report_error(
                LogCategory::Node,
                error,
                "could not build BSP tree",
                self.options.error_policy,
            );
        })
    }

    fn all_polygons(&self, node: &Node<S>) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            result.extend_from_slice(&current.polygons);

            // Back first so the front subtree is emitted first.
            stack.extend(current.back.as_deref());
            stack.extend(current.front.as_deref());
        }
        result
    }
}
