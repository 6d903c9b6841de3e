//! Reusable field fixtures.
//!
//! - [`ramp2d`] / [`ramp3d`] — deterministic ramp fields whose value at
//!   a cell encodes its coordinates, so misrouted indices show up as
//!   wrong values rather than silent coincidences.
//! - [`ProbeField`] — a [`StaggeredField`] wrapper counting
//!   `interp_to` invocations through a shared counter.

use stagger_core::{BinOp, StaggerLocation, StaggeredField};
use stagger_field::{Field2D, Field3D};
use std::cell::Cell;
use std::rc::Rc;

/// A 2-D ramp: `f(x, y) = 100*x + y`.
pub fn ramp2d(nx: usize, ny: usize, location: StaggerLocation) -> Field2D {
    Field2D::from_fn(nx, ny, location, |x, y| (100 * x + y) as f32)
}

/// A 3-D ramp: `f(x, y, z) = 100*x + 10*y + z`.
pub fn ramp3d(nx: usize, ny: usize, nz: usize, location: StaggerLocation) -> Field3D {
    Field3D::from_fn(nx, ny, nz, location, |x, y, z| (100 * x + 10 * y + z) as f32)
}

/// A field wrapper that counts interpolation calls.
///
/// All counters produced by cloning or interpolating a probe share one
/// `Rc<Cell>`, so a test holds the counter it created and observes
/// every interpolation the cache performs, including those on cached
/// copies.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeField {
    inner: Field2D,
    interp_calls: Rc<Cell<usize>>,
}

impl ProbeField {
    /// Wrap `inner` with a fresh counter.
    pub fn new(inner: Field2D) -> Self {
        Self {
            inner,
            interp_calls: Rc::new(Cell::new(0)),
        }
    }

    /// The shared interpolation counter.
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.interp_calls)
    }

    /// Number of `interp_to` calls observed so far.
    pub fn interp_calls(&self) -> usize {
        self.interp_calls.get()
    }

    /// The wrapped field.
    pub fn inner(&self) -> &Field2D {
        &self.inner
    }
}

impl StaggeredField for ProbeField {
    fn location(&self) -> StaggerLocation {
        self.inner.location()
    }

    fn interp_to(&self, target: StaggerLocation) -> Self {
        self.interp_calls.set(self.interp_calls.get() + 1);
        Self {
            inner: self.inner.interp_to(target),
            interp_calls: Rc::clone(&self.interp_calls),
        }
    }

    fn fill(&mut self, value: f32) {
        self.inner.fill(value);
    }

    fn apply_op_assign(&mut self, op: BinOp, rhs: &Self) {
        self.inner.apply_op_assign(op, &rhs.inner);
    }

    fn apply_scalar_assign(&mut self, op: BinOp, rhs: f32) {
        self.inner.apply_scalar_assign(op, rhs);
    }

    fn apply_boundary(&mut self) {
        self.inner.apply_boundary();
    }
}
