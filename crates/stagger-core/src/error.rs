//! Error types for staggered-grid field arithmetic.
//!
//! Organized by subsystem: location conversion errors and cache-layer
//! (`Flexible`) errors. All errors are synchronous and local; nothing
//! at this layer retries.

use crate::location::StaggerLocation;
use std::error::Error;
use std::fmt;

/// A stagger-location value from an untyped source was outside the
/// four defined locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// A raw slot index was outside the defined range (0–3).
    InvalidSlot {
        /// The offending index.
        index: usize,
    },
    /// A location name failed to parse.
    UnknownName {
        /// The offending name.
        name: String,
    },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlot { index } => write!(
                f,
                "invalid stagger location: slot index {index} is outside 0..{}",
                StaggerLocation::COUNT
            ),
            Self::UnknownName { name } => {
                write!(f, "invalid stagger location: unknown name '{name}'")
            }
        }
    }
}

impl Error for LocationError {}

/// Errors from the `Flexible` cache layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlexError {
    /// An accessor received a stagger location outside the valid
    /// enumeration.
    InvalidLocation(LocationError),
    /// An in-place compound update's right-hand operand is at a
    /// stagger location different from the wrapper's main location.
    LocationMismatch {
        /// The wrapper's main location.
        main: StaggerLocation,
        /// The right-hand operand's location.
        rhs: StaggerLocation,
    },
    /// An operation defined on the wrapped field type but deliberately
    /// unsupported by the wrapper.
    NotImplemented {
        /// Name of the unsupported operation.
        operation: &'static str,
    },
}

impl fmt::Display for FlexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocation(err) => err.fmt(f),
            Self::LocationMismatch { main, rhs } => write!(
                f,
                "in-place update location mismatch: wrapper main is at {main}, \
                 rhs is at {rhs}"
            ),
            Self::NotImplemented { operation } => {
                write!(f, "{operation}: not implemented for flexible fields")
            }
        }
    }
}

impl Error for FlexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LocationError> for FlexError {
    fn from(err: LocationError) -> Self {
        Self::InvalidLocation(err)
    }
}
