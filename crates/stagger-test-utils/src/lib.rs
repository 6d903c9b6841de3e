//! Test utilities for the Stagger workspace.
//!
//! Deterministic field fixtures plus [`ProbeField`], a wrapper that
//! counts interpolation invocations so caching behavior can be
//! asserted precisely.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{ramp2d, ramp3d, ProbeField};
