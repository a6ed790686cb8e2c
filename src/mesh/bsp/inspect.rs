//! Inspection hooks for stepping through BSP tree operations.
//!
//! An [`Inspector`] is called synchronously once per node, right before the
//! node is built, inverted or clipped. Returning [`Inspection::Abort`] skips
//! that node and its subtree. This is a debugging aid: the resulting tree is
//! partial, but no error is raised.

use crate::mesh::bsp::node::Node;
use std::cell::{Cell, RefCell};

/// What is about to happen to a node.
#[derive(Debug)]
pub enum Event<'n, S: Clone> {
    /// `node` is about to take in polygons at depth `level`.
    Build { node: &'n Node<S>, level: usize },
    /// `node` is about to be flipped.
    Invert { node: &'n Node<S> },
    /// `node`'s polygons are about to be clipped against `other`.
    Clip {
        node: &'n Node<S>,
        other: &'n Node<S>,
    },
}

impl<S: Clone> Clone for Event<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Clone> Copy for Event<'_, S> {}

/// Payload-free tag of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Build,
    Invert,
    Clip,
}

impl<'n, S: Clone> Event<'n, S> {
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Build { .. } => EventKind::Build,
            Event::Invert { .. } => EventKind::Invert,
            Event::Clip { .. } => EventKind::Clip,
        }
    }

    /// The node the event is about.
    pub const fn node(&self) -> &'n Node<S> {
        match *self {
            Event::Build { node, .. } | Event::Invert { node } | Event::Clip { node, .. } => node,
        }
    }
}

/// Verdict of an [`Inspector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inspection {
    #[default]
    Proceed,
    Abort,
}

/// Observer of BSP tree operations.
///
/// Inspectors run on the caller's stack inside the recursive hot path, so
/// they should return quickly.
pub trait Inspector<S: Clone> {
    fn inspect(&self, event: Event<'_, S>) -> Inspection;
}

/// An inspector that calls a closure for each event.
pub struct FnInspector<F> {
    func: RefCell<F>,
}

impl<F> FnInspector<F> {
    /// Creates a new inspector from a closure.
    pub const fn new(func: F) -> Self {
        Self {
            func: RefCell::new(func),
        }
    }

    pub fn into_inner(self) -> F {
        self.func.into_inner()
    }
}

impl<S, F> Inspector<S> for FnInspector<F>
where
    S: Clone,
    F: FnMut(Event<'_, S>) -> Inspection,
{
    fn inspect(&self, event: Event<'_, S>) -> Inspection {
        (self.func.borrow_mut())(event)
    }
}

/// Counts events per kind and optionally aborts once a step budget is spent,
/// which allows stepping through an operation one node at a time.
#[derive(Debug, Default)]
pub struct CountingInspector {
    builds: Cell<usize>,
    inverts: Cell<usize>,
    clips: Cell<usize>,
    budget: Option<usize>,
}

impl CountingInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Proceed for the first `steps` events, abort every event after that.
    pub fn with_budget(steps: usize) -> Self {
        Self {
            budget: Some(steps),
            ..Self::default()
        }
    }

    pub fn builds(&self) -> usize {
        self.builds.get()
    }

    pub fn inverts(&self) -> usize {
        self.inverts.get()
    }

    pub fn clips(&self) -> usize {
        self.clips.get()
    }

    pub fn total(&self) -> usize {
        self.builds() + self.inverts() + self.clips()
    }
}

impl<S: Clone> Inspector<S> for CountingInspector {
    fn inspect(&self, event: Event<'_, S>) -> Inspection {
        if self.budget.is_some_and(|budget| self.total() >= budget) {
            return Inspection::Abort;
        }

        let counter = match event.kind() {
            EventKind::Build => &self.builds,
            EventKind::Invert => &self.inverts,
            EventKind::Clip => &self.clips,
        };
        counter.set(counter.get() + 1);

        Inspection::Proceed
    }
}
