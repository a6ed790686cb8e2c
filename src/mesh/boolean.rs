//! Boolean operators on [`Geometry`] built from two BSP trees.
//!
//! Every operator builds one tree per operand, removes the parts each solid
//! contributes inside the other through a fixed `clip_to`/`invert` sequence,
//! folds the remaining polygons of `b` into `a`, and flattens `a`.

use crate::errors::{Error, LogCategory, report_error};
use crate::mesh::Geometry;
use crate::mesh::bsp::Node;
use crate::mesh::polygon::Polygon;
use crate::options::Options;
use std::fmt;
use tracing::{debug, instrument};

/// The three boolean operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Merge,
    Subtract,
    Intersect,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Merge => "merge",
            Operation::Subtract => "subtract",
            Operation::Intersect => "intersect",
        })
    }
}

impl Operation {
    pub fn apply<S: Clone>(
        self,
        lhs: &Geometry<S>,
        rhs: &Geometry<S>,
        options: &Options<S>,
    ) -> Geometry<S> {
        match self {
            Operation::Merge => merge(lhs, rhs, options),
            Operation::Subtract => subtract(lhs, rhs, options),
            Operation::Intersect => intersect(lhs, rhs, options),
        }
    }
}

/// Union of `lhs` and `rhs`.
///
/// ```text
///     +-------+            +-------+
///     |       |            |       |
///     |  lhs  |            |       |
///     |    +--+----+   =   |       +----+
///     +----+--+    |       +----+       |
///          |  rhs  |            |       |
///          |       |            |       |
///          +-------+            +-------+
/// ```
pub fn merge<S: Clone>(lhs: &Geometry<S>, rhs: &Geometry<S>, options: &Options<S>) -> Geometry<S> {
    run(Operation::Merge, lhs, rhs, options, |a, b| {
        a.clip_to(b, options);
        b.clip_to(a, options);
        b.invert(options);
        b.clip_to(a, options);
        b.invert(options);
        a.build(&b.all_polygons(), options)
    })
}

/// `lhs` with the volume of `rhs` removed.
///
/// ```text
///     +-------+            +-------+
///     |       |            |       |
///     |  lhs  |            |       |
///     |    +--+----+   =   |    +--+
///     +----+--+    |       +----+
///          |  rhs  |
///          |       |
///          +-------+
/// ```
pub fn subtract<S: Clone>(
    lhs: &Geometry<S>,
    rhs: &Geometry<S>,
    options: &Options<S>,
) -> Geometry<S> {
    run(Operation::Subtract, lhs, rhs, options, |a, b| {
        a.invert(options);
        a.clip_to(b, options);
        b.clip_to(a, options);
        b.invert(options);
        b.clip_to(a, options);
        b.invert(options);
        let built = a.build(&b.all_polygons(), options);
        a.invert(options);
        built
    })
}

/// Volume shared by `lhs` and `rhs`.
///
/// ```text
///     +-------+
///     |       |
///     |  lhs  |
///     |    +--+----+   =   +--+
///     +----+--+    |       +--+
///          |  rhs  |
///          |       |
///          +-------+
/// ```
pub fn intersect<S: Clone>(
    lhs: &Geometry<S>,
    rhs: &Geometry<S>,
    options: &Options<S>,
) -> Geometry<S> {
    run(Operation::Intersect, lhs, rhs, options, |a, b| {
        a.invert(options);
        b.clip_to(a, options);
        b.invert(options);
        a.clip_to(b, options);
        b.clip_to(a, options);
        let built = a.build(&b.all_polygons(), options);
        a.invert(options);
        built
    })
}

fn run<S, F>(
    operation: Operation,
    lhs: &Geometry<S>,
    rhs: &Geometry<S>,
    options: &Options<S>,
    steps: F,
) -> Geometry<S>
where
    S: Clone,
    F: FnOnce(&mut Node<S>, &mut Node<S>) -> Result<(), Error>,
{
    match combine(operation, lhs, rhs, options, steps) {
        Ok(polygons) => Geometry::from_polygons(polygons),
        Err(error) => Geometry::from_error(error),
    }
}

#[instrument(level = "debug", target = "bspcsg::operator", skip_all, fields(op = %operation))]
fn combine<S, F>(
    operation: Operation,
    lhs: &Geometry<S>,
    rhs: &Geometry<S>,
    options: &Options<S>,
    steps: F,
) -> Result<Vec<Polygon<S>>, Error>
where
    S: Clone,
    F: FnOnce(&mut Node<S>, &mut Node<S>) -> Result<(), Error>,
{
    check_operand(operation, "left", lhs, options)?;
    check_operand(operation, "right", rhs, options)?;

    let mut a = Node::new();
    check_step(operation, "building the left tree", a.build(lhs.polygons(), options), options)?;

    let mut b = Node::new();
    check_step(operation, "building the right tree", b.build(rhs.polygons(), options), options)?;

    check_step(operation, "building the result tree", steps(&mut a, &mut b), options)?;

    let polygons = a.all_polygons();
    debug!(
        target: "bspcsg::operator",
        lhs = lhs.len(),
        rhs = rhs.len(),
        result = polygons.len(),
        "boolean operation finished"
    );
    Ok(polygons)
}

fn check_operand<S: Clone>(
    operation: Operation,
    side: &str,
    operand: &Geometry<S>,
    options: &Options<S>,
) -> Result<(), Error> {
    match operand.error() {
        Some(error) => check_step(
            operation,
            &format!("the {side} operand is invalid"),
            Err(error.clone()),
            options,
        ),
        None => Ok(()),
    }
}

fn check_step<S: Clone>(
    operation: Operation,
    stage: &str,
    result: Result<(), Error>,
    options: &Options<S>,
) -> Result<(), Error> {
    match result {
        Err(error)
            if report_error(
                LogCategory::Operator,
                &error,
                &format!("{operation}: {stage}"),
                options.error_policy,
            ) =>
        {
            Err(error)
        },
        _ => Ok(()),
    }
}
