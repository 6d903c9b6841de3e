//! The [`StaggeredField`] trait: the contract a field type must expose
//! to be wrapped by a `Flexible` cache.

use crate::location::StaggerLocation;
use crate::op::BinOp;

/// A grid field that carries a stagger-location tag and can be
/// interpolated to a different location.
///
/// The cache layer treats [`interp_to`](Self::interp_to) as an opaque
/// pure function: total over the four locations, deterministic, no
/// observable side effect besides allocating the returned field.
///
/// `Clone` is required so shared (caller-retained) cache slots can be
/// detached copy-on-write before in-place mutation.
pub trait StaggeredField: Clone {
    /// The stagger location this field's values are defined at.
    fn location(&self) -> StaggerLocation;

    /// Produce a copy of this field interpolated to `target`.
    ///
    /// The returned field reports `target` as its location. Must be
    /// total: every target in the enumeration yields a field.
    fn interp_to(&self, target: StaggerLocation) -> Self;

    /// Overwrite every element with `value`, keeping shape and location.
    fn fill(&mut self, value: f32);

    /// Element-wise compound update `self op= rhs` for a same-kind
    /// operand. Callers are responsible for location agreement; shape
    /// disagreement is a programming error.
    fn apply_op_assign(&mut self, op: BinOp, rhs: &Self);

    /// Element-wise compound update `self op= rhs` with a broadcast
    /// scalar operand.
    fn apply_scalar_assign(&mut self, op: BinOp, rhs: f32);

    /// Apply boundary conditions to this field's edge cells.
    fn apply_boundary(&mut self);

    /// Notification that external collaborators (e.g. a halo exchange)
    /// finished mutating this field's storage.
    ///
    /// Default: no bookkeeping.
    fn done_communication(&mut self) {}
}
