//! The [`StaggerLocation`] enumeration and its slot-index mapping.

use crate::error::LocationError;
use std::fmt;
use std::str::FromStr;

/// Sub-cell position on a computational grid cell where a field's
/// values are defined.
///
/// A staggered discretization stores some quantities at the cell centre
/// and others on cell faces, offset by half a cell along one axis.
/// The four positions form a closed, ordered enumeration; the order is
/// stable and doubles as the slot index inside a
/// `Flexible` cache (`Centre` = 0 through `ZLow` = 3).
///
/// Accessors that need a "use the canonical location" input take
/// `Option<StaggerLocation>`, with `None` standing for the holder's
/// main location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaggerLocation {
    /// Cell centre.
    Centre,
    /// Half a cell towards negative x (the low-x face).
    XLow,
    /// Half a cell towards negative y (the low-y face).
    YLow,
    /// Half a cell towards negative z (the low-z face).
    ZLow,
}

impl StaggerLocation {
    /// Number of stagger slots.
    pub const COUNT: usize = 4;

    /// All locations, in slot-index order.
    pub const ALL: [StaggerLocation; Self::COUNT] = [
        StaggerLocation::Centre,
        StaggerLocation::XLow,
        StaggerLocation::YLow,
        StaggerLocation::ZLow,
    ];

    /// Stable slot index of this location (0–3).
    pub fn slot(self) -> usize {
        match self {
            Self::Centre => 0,
            Self::XLow => 1,
            Self::YLow => 2,
            Self::ZLow => 3,
        }
    }

    /// Look up a location from a raw slot index.
    ///
    /// Returns `Err(LocationError::InvalidSlot)` for indices outside
    /// the four defined slots.
    pub fn from_slot(index: usize) -> Result<Self, LocationError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(LocationError::InvalidSlot { index })
    }

    /// Stable lowercase name, used in diagnostics and parsing.
    pub fn name(self) -> &'static str {
        match self {
            Self::Centre => "centre",
            Self::XLow => "xlow",
            Self::YLow => "ylow",
            Self::ZLow => "zlow",
        }
    }
}

impl fmt::Display for StaggerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for StaggerLocation {
    type Error = LocationError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_slot(index)
    }
}

impl FromStr for StaggerLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|loc| loc.name() == s)
            .ok_or_else(|| LocationError::UnknownName {
                name: s.to_string(),
            })
    }
}
