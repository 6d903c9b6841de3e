//! Arithmetic kernels and the generated operator bindings for plain
//! fields.
//!
//! Each binding the resolver's table names — every ordered pair of
//! distinct generated kinds plus the generic equal-kind pairs, for
//! each of the four operators — is emitted here by one macro over the
//! operator set, delegating to a shared kernel per kind pair. The
//! kernels consult the resolver's strategy, so the table and the
//! bindings cannot drift apart silently.
//!
//! Plain-field bindings assume their operands agree on stagger
//! location; interpolation between locations is the `Flexible`
//! wrapper's job (see `stagger-flex`).

use crate::{Field2D, Field3D};
use stagger_core::resolver::{resolve, IndexStrategy};
use stagger_core::{BinOp, FieldKind, StaggeredField};

/// Flat-pass combination of two 2-D fields.
pub fn combine_2d(op: BinOp, lhs: &Field2D, rhs: &Field2D) -> Field2D {
    debug_assert_eq!(
        resolve(op, FieldKind::TwoD, FieldKind::TwoD).strategy,
        IndexStrategy::Flat
    );
    let mut out = lhs.clone();
    out.apply_op_assign(op, rhs);
    out
}

/// Flat-pass combination of two 3-D fields.
pub fn combine_3d(op: BinOp, lhs: &Field3D, rhs: &Field3D) -> Field3D {
    debug_assert_eq!(
        resolve(op, FieldKind::ThreeD, FieldKind::ThreeD).strategy,
        IndexStrategy::Flat
    );
    let mut out = lhs.clone();
    out.apply_op_assign(op, rhs);
    out
}

/// Coordinate-strategy combination of a 3-D left operand with a 2-D
/// right operand. Each output coordinate `(x, y, z)` indexes each
/// operand independently; the 2-D operand ignores `z`.
pub fn combine_3d_2d(op: BinOp, lhs: &Field3D, rhs: &Field2D) -> Field3D {
    debug_assert_eq!(
        resolve(op, FieldKind::ThreeD, FieldKind::TwoD).strategy,
        IndexStrategy::Coordinate
    );
    assert_eq!(
        (lhs.nx(), lhs.ny()),
        (rhs.nx(), rhs.ny()),
        "field shape mismatch in mixed-kind operation"
    );
    debug_assert_eq!(lhs.location(), rhs.location());
    Field3D::from_fn(lhs.nx(), lhs.ny(), lhs.nz(), lhs.location(), |x, y, z| {
        op.apply(lhs.at(x, y, z), rhs.at(x, y))
    })
}

/// Coordinate-strategy combination of a 2-D left operand with a 3-D
/// right operand.
pub fn combine_2d_3d(op: BinOp, lhs: &Field2D, rhs: &Field3D) -> Field3D {
    debug_assert_eq!(
        resolve(op, FieldKind::TwoD, FieldKind::ThreeD).strategy,
        IndexStrategy::Coordinate
    );
    assert_eq!(
        (lhs.nx(), lhs.ny()),
        (rhs.nx(), rhs.ny()),
        "field shape mismatch in mixed-kind operation"
    );
    debug_assert_eq!(lhs.location(), rhs.location());
    Field3D::from_fn(rhs.nx(), rhs.ny(), rhs.nz(), lhs.location(), |x, y, z| {
        op.apply(lhs.at(x, y), rhs.at(x, y, z))
    })
}

/// Flat-pass combination of a 2-D field with a broadcast scalar.
pub fn combine_2d_scalar(op: BinOp, lhs: &Field2D, rhs: f32) -> Field2D {
    let mut out = lhs.clone();
    out.apply_scalar_assign(op, rhs);
    out
}

/// Flat-pass combination of a broadcast scalar with a 2-D field.
pub fn combine_scalar_2d(op: BinOp, lhs: f32, rhs: &Field2D) -> Field2D {
    let mut out = rhs.clone();
    for v in out.data_mut() {
        *v = op.apply(lhs, *v);
    }
    out
}

/// Flat-pass combination of a 3-D field with a broadcast scalar.
pub fn combine_3d_scalar(op: BinOp, lhs: &Field3D, rhs: f32) -> Field3D {
    let mut out = lhs.clone();
    out.apply_scalar_assign(op, rhs);
    out
}

/// Flat-pass combination of a broadcast scalar with a 3-D field.
pub fn combine_scalar_3d(op: BinOp, lhs: f32, rhs: &Field3D) -> Field3D {
    let mut out = rhs.clone();
    for v in out.data_mut() {
        *v = op.apply(lhs, *v);
    }
    out
}

macro_rules! impl_plain_binops {
    ($trait:ident, $method:ident, $op:expr) => {
        impl std::ops::$trait<&Field2D> for &Field2D {
            type Output = Field2D;
            fn $method(self, rhs: &Field2D) -> Field2D {
                combine_2d($op, self, rhs)
            }
        }

        impl std::ops::$trait<&Field3D> for &Field3D {
            type Output = Field3D;
            fn $method(self, rhs: &Field3D) -> Field3D {
                combine_3d($op, self, rhs)
            }
        }

        impl std::ops::$trait<&Field2D> for &Field3D {
            type Output = Field3D;
            fn $method(self, rhs: &Field2D) -> Field3D {
                combine_3d_2d($op, self, rhs)
            }
        }

        impl std::ops::$trait<&Field3D> for &Field2D {
            type Output = Field3D;
            fn $method(self, rhs: &Field3D) -> Field3D {
                combine_2d_3d($op, self, rhs)
            }
        }

        impl std::ops::$trait<f32> for &Field2D {
            type Output = Field2D;
            fn $method(self, rhs: f32) -> Field2D {
                combine_2d_scalar($op, self, rhs)
            }
        }

        impl std::ops::$trait<&Field2D> for f32 {
            type Output = Field2D;
            fn $method(self, rhs: &Field2D) -> Field2D {
                combine_scalar_2d($op, self, rhs)
            }
        }

        impl std::ops::$trait<f32> for &Field3D {
            type Output = Field3D;
            fn $method(self, rhs: f32) -> Field3D {
                combine_3d_scalar($op, self, rhs)
            }
        }

        impl std::ops::$trait<&Field3D> for f32 {
            type Output = Field3D;
            fn $method(self, rhs: &Field3D) -> Field3D {
                combine_scalar_3d($op, self, rhs)
            }
        }
    };
}

impl_plain_binops!(Mul, mul, BinOp::Mul);
impl_plain_binops!(Div, div, BinOp::Div);
impl_plain_binops!(Add, add, BinOp::Add);
impl_plain_binops!(Sub, sub, BinOp::Sub);
