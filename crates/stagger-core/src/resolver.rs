//! Type promotion and indexing-strategy resolution for operator
//! bindings.
//!
//! Every generated arithmetic binding between field kinds is driven by
//! the table this module computes: the result kind (promotion), the
//! element-indexing strategy, and — via [`bindings`] — the full closed
//! set of (lhs, rhs, operator) combinations a binding exists for.
//! Keeping the table in one place guarantees the resolver and the
//! generated bindings cannot drift apart; the binding impls consult it
//! and the binding tests enumerate it.
//!
//! # Indexing strategies
//!
//! Operands of the same kind (or with a scalar side) share a storage
//! order, so a single linear pass over the flat element slice suffices
//! ([`IndexStrategy::Flat`]). Operands of *different* non-scalar kinds
//! store their elements in different orders — a 2-D field's linear
//! index is `y + x*ny` while a 3-D field's is `z + nz*(y + ny*x)` — so
//! each output coordinate `(x, y, z)` must be mapped into each
//! operand's own index independently, the 2-D operand ignoring `z`
//! ([`IndexStrategy::Coordinate`]). The reserved perpendicular-plane
//! kind would use `z + x*nz`; it is excluded from binding generation.

use crate::kind::FieldKind;
use crate::op::BinOp;

/// How a generated binding walks its operands' elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexStrategy {
    /// One linear pass over the total element count: storage order
    /// matches between operands, or a scalar broadcasts uniformly.
    Flat,
    /// Per-coordinate index mapping into each operand independently;
    /// required exactly when both operands are non-scalar fields of
    /// different kinds.
    Coordinate,
}

/// The resolver's verdict for one operator invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The operator being resolved.
    pub op: BinOp,
    /// The kind of the operation's result.
    pub result: FieldKind,
    /// How elements are indexed during evaluation.
    pub strategy: IndexStrategy,
}

/// One entry of the generated binding set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Left operand kind.
    pub lhs: FieldKind,
    /// Right operand kind.
    pub rhs: FieldKind,
    /// The resolver's verdict for this pair.
    pub resolution: Resolution,
}

/// Result-kind promotion. Symmetric and total over all kinds,
/// including the reserved perpendicular-plane kind.
///
/// Equal kinds promote to themselves; a scalar side promotes to the
/// other kind; two different non-scalar kinds promote to the most
/// general kind, [`FieldKind::ThreeD`].
pub fn promote(lhs: FieldKind, rhs: FieldKind) -> FieldKind {
    if lhs == rhs {
        lhs
    } else if lhs.is_scalar() {
        rhs
    } else if rhs.is_scalar() {
        lhs
    } else {
        FieldKind::ThreeD
    }
}

/// Resolve one operator invocation to a result kind and indexing
/// strategy.
pub fn resolve(op: BinOp, lhs: FieldKind, rhs: FieldKind) -> Resolution {
    let strategy = if !lhs.is_scalar() && !rhs.is_scalar() && lhs != rhs {
        IndexStrategy::Coordinate
    } else {
        IndexStrategy::Flat
    };
    Resolution {
        op,
        result: promote(lhs, rhs),
        strategy,
    }
}

/// Enumerate the generated binding set: every ordered pair of distinct
/// generated kinds, for every operator.
///
/// Equal-kind pairs are skipped — they are covered once, generically,
/// since no coordinate mapping is needed — which also excludes the
/// undefined scalar/scalar pair. The reserved perpendicular-plane kind
/// is not generated for.
pub fn bindings() -> Vec<Binding> {
    let mut out = Vec::new();
    for lhs in FieldKind::GENERATED {
        for rhs in FieldKind::GENERATED {
            if lhs == rhs {
                continue;
            }
            for op in BinOp::ALL {
                out.push(Binding {
                    lhs,
                    rhs,
                    resolution: resolve(op, lhs, rhs),
                });
            }
        }
    }
    out
}
