//! Shared fixture builders for Stagger benchmarks.

#![forbid(unsafe_code)]

use stagger_core::StaggerLocation;
use stagger_field::{Field2D, Field3D};

/// An `n × n` 2-D field with non-trivial, deterministic content.
pub fn sheet2d(n: usize, location: StaggerLocation) -> Field2D {
    Field2D::from_fn(n, n, location, |x, y| (x * n + y) as f32 * 0.25 + 1.0)
}

/// An `n × n × n` 3-D field with non-trivial, deterministic content.
pub fn cube3d(n: usize, location: StaggerLocation) -> Field3D {
    Field3D::from_fn(n, n, n, location, |x, y, z| {
        ((x * n + y) * n + z) as f32 * 0.25 + 1.0
    })
}
