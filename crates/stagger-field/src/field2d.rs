//! Two-dimensional staggered fields.

use stagger_core::{BinOp, StaggerLocation, StaggeredField};

/// A two-dimensional field: one `f32` per `(x, y)` cell, tagged with
/// the stagger location its values are defined at.
///
/// Storage is a flat, contiguous `Vec<f32>` in x-major order; the
/// linear index of `(x, y)` is `y + x*ny`. This layout is a contract
/// shared with the flat-pass arithmetic kernels and must not change.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D {
    nx: usize,
    ny: usize,
    location: StaggerLocation,
    data: Vec<f32>,
}

impl Field2D {
    /// Create a zero-filled field.
    pub fn new(nx: usize, ny: usize, location: StaggerLocation) -> Self {
        Self::filled(nx, ny, location, 0.0)
    }

    /// Create a field with every element set to `value`.
    pub fn filled(nx: usize, ny: usize, location: StaggerLocation, value: f32) -> Self {
        Self {
            nx,
            ny,
            location,
            data: vec![value; nx * ny],
        }
    }

    /// Create a field by evaluating `f(x, y)` at every cell.
    pub fn from_fn(
        nx: usize,
        ny: usize,
        location: StaggerLocation,
        mut f: impl FnMut(usize, usize) -> f32,
    ) -> Self {
        let mut data = Vec::with_capacity(nx * ny);
        for x in 0..nx {
            for y in 0..ny {
                data.push(f(x, y));
            }
        }
        Self {
            nx,
            ny,
            location,
            data,
        }
    }

    /// Number of cells along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The stagger location this field's values are defined at.
    pub fn location(&self) -> StaggerLocation {
        self.location
    }

    /// Linear index of `(x, y)`: `y + x*ny`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y + x * self.ny
    }

    /// Value at `(x, y)`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Mutable reference to the value at `(x, y)`.
    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut f32 {
        let i = self.index(x, y);
        &mut self.data[i]
    }

    /// The flat element slice, in `y + x*ny` order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable flat element slice.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// This field, retagged to `location`. Values are unchanged.
    pub fn with_location(mut self, location: StaggerLocation) -> Self {
        self.location = location;
        self
    }

    /// Midpoint average towards the low-x face:
    /// `out(x, y) = (self(x-1, y) + self(x, y)) / 2`, clamped at x = 0.
    fn average_to_x_low(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for x in 0..self.nx {
            let xm = x.saturating_sub(1);
            for y in 0..self.ny {
                out.push(0.5 * (self.at(xm, y) + self.at(x, y)));
            }
        }
        out
    }

    /// Midpoint average back to the centre from low-x faces:
    /// `out(x, y) = (self(x, y) + self(x+1, y)) / 2`, clamped at x = nx-1.
    fn average_from_x_low(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for x in 0..self.nx {
            let xp = (x + 1).min(self.nx - 1);
            for y in 0..self.ny {
                out.push(0.5 * (self.at(x, y) + self.at(xp, y)));
            }
        }
        out
    }

    fn average_to_y_low(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for x in 0..self.nx {
            for y in 0..self.ny {
                let ym = y.saturating_sub(1);
                out.push(0.5 * (self.at(x, ym) + self.at(x, y)));
            }
        }
        out
    }

    fn average_from_y_low(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for x in 0..self.nx {
            for y in 0..self.ny {
                let yp = (y + 1).min(self.ny - 1);
                out.push(0.5 * (self.at(x, y) + self.at(x, yp)));
            }
        }
        out
    }

    fn with_data(&self, data: Vec<f32>, location: StaggerLocation) -> Self {
        Self {
            nx: self.nx,
            ny: self.ny,
            location,
            data,
        }
    }
}

impl StaggeredField for Field2D {
    fn location(&self) -> StaggerLocation {
        self.location
    }

    fn interp_to(&self, target: StaggerLocation) -> Self {
        use StaggerLocation::{Centre, XLow, YLow, ZLow};
        if target == self.location {
            return self.clone();
        }
        match (self.location, target) {
            (Centre, XLow) => self.with_data(self.average_to_x_low(), target),
            (Centre, YLow) => self.with_data(self.average_to_y_low(), target),
            (XLow, Centre) => self.with_data(self.average_from_x_low(), target),
            (YLow, Centre) => self.with_data(self.average_from_y_low(), target),
            // A 2-D field has no z extent: moving to or from the low-z
            // face leaves the values unchanged.
            (Centre, ZLow) | (ZLow, Centre) => self.clone().with_location(target),
            // Staggered-to-staggered moves route via the centre.
            (_, _) => self.interp_to(Centre).interp_to(target),
        }
    }

    fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    fn apply_op_assign(&mut self, op: BinOp, rhs: &Self) {
        assert_eq!(
            (self.nx, self.ny),
            (rhs.nx, rhs.ny),
            "field shape mismatch in compound update"
        );
        debug_assert_eq!(self.location, rhs.location);
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = op.apply(*a, *b);
        }
    }

    fn apply_scalar_assign(&mut self, op: BinOp, rhs: f32) {
        for a in &mut self.data {
            *a = op.apply(*a, rhs);
        }
    }

    fn apply_boundary(&mut self) {
        // Zero-gradient: edge cells copy the adjacent interior value.
        if self.nx >= 2 {
            for y in 0..self.ny {
                *self.at_mut(0, y) = self.at(1, y);
                let last = self.nx - 1;
                *self.at_mut(last, y) = self.at(last - 1, y);
            }
        }
        if self.ny >= 2 {
            for x in 0..self.nx {
                *self.at_mut(x, 0) = self.at(x, 1);
                let last = self.ny - 1;
                *self.at_mut(x, last) = self.at(x, last - 1);
            }
        }
    }
}
