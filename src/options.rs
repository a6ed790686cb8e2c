//! Per-call configuration of the BSP kernel.

use crate::errors::ErrorPolicy;
use crate::float_types::{DEFAULT_RECURSION_LIMIT, Real, tolerance};
use crate::mesh::bsp::inspect::Inspector;
use std::fmt;

/// Tunables handed to every tree and boolean operation.
///
/// `Options` is `Copy`; derive variants with the `with_*` builders:
///
/// ```rust
/// # use bspcsg::options::Options;
/// let options = Options::<()>::default().with_epsilon(1e-7).with_recursion_limit(64);
/// assert_eq!(options.recursion_limit, 64);
/// ```
pub struct Options<'a, S: Clone> {
    /// Distance within which a point counts as lying on a plane.
    pub epsilon: Real,
    /// Maximum BSP tree depth a `build` may reach.
    pub recursion_limit: usize,
    /// Whether a failed `build` aborts the boolean operator.
    pub error_policy: ErrorPolicy,
    /// Optional observer invoked before each node is built, inverted or clipped.
    pub inspector: Option<&'a dyn Inspector<S>>,
}

impl<'a, S: Clone> Options<'a, S> {
    pub fn with_epsilon(mut self, epsilon: Real) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn with_inspector(mut self, inspector: &'a dyn Inspector<S>) -> Self {
        self.inspector = Some(inspector);
        self
    }
}

impl<S: Clone> Default for Options<'_, S> {
    fn default() -> Self {
        Self {
            epsilon: tolerance(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            error_policy: ErrorPolicy::default(),
            inspector: None,
        }
    }
}

impl<S: Clone> Clone for Options<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Clone> Copy for Options<'_, S> {}

impl<S: Clone> fmt::Debug for Options<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("epsilon", &self.epsilon)
            .field("recursion_limit", &self.recursion_limit)
            .field("error_policy", &self.error_policy)
            .field("inspector", &self.inspector.is_some())
            .finish()
    }
}
