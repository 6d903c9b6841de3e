//! The [`FieldKind`] enumeration used by the operator resolver.

use std::fmt;

/// Classification of an operand in a field arithmetic expression.
///
/// The resolver promotes a pair of kinds to a result kind and picks an
/// element-indexing strategy from them; see `stagger-ops`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A plain number, broadcast uniformly over the grid.
    Scalar,
    /// A two-dimensional field, one value per `(x, y)` cell.
    TwoD,
    /// A three-dimensional field, one value per `(x, y, z)` cell.
    ThreeD,
    /// A perpendicular-plane field, one value per `(x, z)` cell.
    ///
    /// Reserved: part of the type model but excluded from binding
    /// generation. Its linear index would be `z + x*nz`.
    Perp,
}

impl FieldKind {
    /// Every kind, including the reserved [`FieldKind::Perp`].
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Scalar,
        FieldKind::TwoD,
        FieldKind::ThreeD,
        FieldKind::Perp,
    ];

    /// The kinds operator bindings are generated for.
    pub const GENERATED: [FieldKind; 3] =
        [FieldKind::Scalar, FieldKind::TwoD, FieldKind::ThreeD];

    /// Whether this kind is a plain broadcast number rather than a field.
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::TwoD => "2d field",
            Self::ThreeD => "3d field",
            Self::Perp => "perpendicular-plane field",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_kinds_exclude_perp() {
        assert!(!FieldKind::GENERATED.contains(&FieldKind::Perp));
        assert!(FieldKind::ALL.contains(&FieldKind::Perp));
    }
}
