//! Lazy per-stagger-location field cache.
//!
//! Arithmetic between fields at different stagger locations needs an
//! interpolated copy of one operand, and re-interpolating on every
//! operator invocation is wasted work. [`Flexible`] wraps one field and
//! holds up to four materialized copies — one per
//! [`StaggerLocation`](stagger_core::StaggerLocation) — interpolating
//! lazily on read and invalidating cached copies when the main field
//! changes.
//!
//! The wrapper is single-threaded by construction: slots populated
//! from caller-retained storage hold an `Rc`, so a `Flexible` is never
//! `Sync` and each instance belongs to exactly one owning field object.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod flex_arith;
pub mod flexible;
pub mod slot;

pub use flexible::Flexible;
pub use slot::Slot;
