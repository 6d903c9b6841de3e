//! Concrete staggered-grid field types.
//!
//! This crate provides the two field types operator bindings are
//! generated for:
//!
//! - [`Field2D`]: one value per `(x, y)` cell, linear index `y + x*ny`
//! - [`Field3D`]: one value per `(x, y, z)` cell, linear index
//!   `z + nz*(y + ny*x)`
//!
//! Both carry a [`StaggerLocation`](stagger_core::StaggerLocation) tag
//! and implement [`StaggeredField`](stagger_core::StaggeredField),
//! including a deliberately simple interpolation collaborator:
//! two-point midpoint averaging along the staggered axis, routed via
//! the cell centre for staggered-to-staggered moves. Edges clamp in x
//! and y; z is periodic.
//!
//! The [`arith`] module carries the generated operator bindings
//! between plain fields and broadcast scalars, driven by the resolver
//! table in [`stagger_core::resolver`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod field2d;
pub mod field3d;

pub use field2d::Field2D;
pub use field3d::Field3D;
