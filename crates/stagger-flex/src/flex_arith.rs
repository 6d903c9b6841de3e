//! Generated operator bindings for wrapped operands.
//!
//! Dispatch rules, one binding per table entry and operand order:
//!
//! - wrapped ⊗ scalar evaluates the wrapper at its main location
//!   (never interpolates);
//! - wrapped ⊗ plain field evaluates the wrapper at *the plain
//!   operand's* stagger location, forcing a cache realization if that
//!   copy is not yet materialized, then applies the resolved indexing
//!   strategy for the kind pair.
//!
//! Compound assignment sugar (`*=` and friends) exists for scalar
//! right-hand sides only, where it cannot fail; a field right-hand
//! side must go through the fallible
//! [`Flexible::apply_in_place`], which checks location agreement.

use crate::Flexible;
use stagger_core::{BinOp, StaggeredField};
use stagger_field::arith;
use stagger_field::{Field2D, Field3D};

macro_rules! impl_flex_binops {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl std::ops::$trait<&Field2D> for &mut Flexible<Field2D> {
            type Output = Field2D;
            fn $method(self, rhs: &Field2D) -> Field2D {
                arith::combine_2d($op, self.get(Some(rhs.location())), rhs)
            }
        }

        impl std::ops::$trait<&Field3D> for &mut Flexible<Field3D> {
            type Output = Field3D;
            fn $method(self, rhs: &Field3D) -> Field3D {
                arith::combine_3d($op, self.get(Some(rhs.location())), rhs)
            }
        }

        impl std::ops::$trait<&Field2D> for &mut Flexible<Field3D> {
            type Output = Field3D;
            fn $method(self, rhs: &Field2D) -> Field3D {
                arith::combine_3d_2d($op, self.get(Some(rhs.location())), rhs)
            }
        }

        impl std::ops::$trait<&Field3D> for &mut Flexible<Field2D> {
            type Output = Field3D;
            fn $method(self, rhs: &Field3D) -> Field3D {
                arith::combine_2d_3d($op, self.get(Some(rhs.location())), rhs)
            }
        }

        impl std::ops::$trait<&mut Flexible<Field2D>> for &Field2D {
            type Output = Field2D;
            fn $method(self, rhs: &mut Flexible<Field2D>) -> Field2D {
                arith::combine_2d($op, self, rhs.get(Some(self.location())))
            }
        }

        impl std::ops::$trait<&mut Flexible<Field3D>> for &Field3D {
            type Output = Field3D;
            fn $method(self, rhs: &mut Flexible<Field3D>) -> Field3D {
                arith::combine_3d($op, self, rhs.get(Some(self.location())))
            }
        }

        impl std::ops::$trait<&mut Flexible<Field2D>> for &Field3D {
            type Output = Field3D;
            fn $method(self, rhs: &mut Flexible<Field2D>) -> Field3D {
                arith::combine_3d_2d($op, self, rhs.get(Some(self.location())))
            }
        }

        impl std::ops::$trait<&mut Flexible<Field3D>> for &Field2D {
            type Output = Field3D;
            fn $method(self, rhs: &mut Flexible<Field3D>) -> Field3D {
                arith::combine_2d_3d($op, self, rhs.get(Some(self.location())))
            }
        }

        impl std::ops::$trait<f32> for &mut Flexible<Field2D> {
            type Output = Field2D;
            fn $method(self, rhs: f32) -> Field2D {
                arith::combine_2d_scalar($op, self.get(None), rhs)
            }
        }

        impl std::ops::$trait<&mut Flexible<Field2D>> for f32 {
            type Output = Field2D;
            fn $method(self, rhs: &mut Flexible<Field2D>) -> Field2D {
                arith::combine_scalar_2d($op, self, rhs.get(None))
            }
        }

        impl std::ops::$trait<f32> for &mut Flexible<Field3D> {
            type Output = Field3D;
            fn $method(self, rhs: f32) -> Field3D {
                arith::combine_3d_scalar($op, self.get(None), rhs)
            }
        }

        impl std::ops::$trait<&mut Flexible<Field3D>> for f32 {
            type Output = Field3D;
            fn $method(self, rhs: &mut Flexible<Field3D>) -> Field3D {
                arith::combine_scalar_3d($op, self, rhs.get(None))
            }
        }

        impl<F: StaggeredField> std::ops::$assign_trait<f32> for Flexible<F> {
            fn $assign_method(&mut self, rhs: f32) {
                self.apply_scalar_in_place($op, rhs);
            }
        }
    };
}

impl_flex_binops!(Mul, mul, MulAssign, mul_assign, BinOp::Mul);
impl_flex_binops!(Div, div, DivAssign, div_assign, BinOp::Div);
impl_flex_binops!(Add, add, AddAssign, add_assign, BinOp::Add);
impl_flex_binops!(Sub, sub, SubAssign, sub_assign, BinOp::Sub);
