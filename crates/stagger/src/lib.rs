//! Stagger: arithmetic over staggered-grid simulation fields.
//!
//! Fields on a staggered grid carry a [`StaggerLocation`] tag — cell
//! centre, or offset by half a cell along one axis — and combining
//! fields at different locations needs interpolation. [`Flexible`]
//! wraps a field and caches one interpolated copy per location, so
//! repeated mixed-location arithmetic interpolates once, not every
//! time.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Stagger sub-crates; for most users it is the only dependency
//! needed.
//!
//! # Quick start
//!
//! ```rust
//! use stagger::prelude::*;
//!
//! // A density-like quantity at the cell centre, wrapped for reuse.
//! let mut n = Flexible::new(Field3D::filled(8, 8, 4, StaggerLocation::Centre, 2.0));
//! // A 2-D profile staggered to the low-y face.
//! let v = Field2D::filled(8, 8, StaggerLocation::YLow, 3.0);
//!
//! // Mixed-kind multiply: evaluated at the profile's location; the
//! // wrapper interpolates (and caches) its YLow copy on first use.
//! let flux = &mut n * &v;
//! assert_eq!(flux.location(), StaggerLocation::YLow);
//! assert_eq!(flux.at(0, 0, 0), 6.0);
//! assert!(n.is_cached(StaggerLocation::YLow));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stagger-core` | Enumerations, errors, the resolver, core traits |
//! | [`field`] | `stagger-field` | Concrete field types and plain operator bindings |
//! | [`flex`]  | `stagger-flex`  | The `Flexible` cache and wrapped operator bindings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core enumerations, errors, the operator resolver, and the
/// [`StaggeredField`](types::StaggeredField) trait (`stagger-core`).
pub use stagger_core as types;

/// Concrete field types and the generated plain-field operator
/// bindings (`stagger-field`).
pub use stagger_field as field;

/// The [`Flexible`](flex::Flexible) cache and the generated
/// wrapped-operand bindings (`stagger-flex`).
pub use stagger_flex as flex;

/// The commonly used subset of the API.
pub mod prelude {
    pub use stagger_core::{
        BinOp, FieldKind, FlexError, LocationError, StaggerLocation, StaggeredField,
    };
    pub use stagger_field::{Field2D, Field3D};
    pub use stagger_flex::{Flexible, Slot};
}

pub use prelude::{Flexible, StaggerLocation};
