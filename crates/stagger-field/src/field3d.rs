//! Three-dimensional staggered fields.

use stagger_core::{BinOp, StaggerLocation, StaggeredField};

/// A three-dimensional field: one `f32` per `(x, y, z)` cell, tagged
/// with the stagger location its values are defined at.
///
/// Storage is a flat, contiguous `Vec<f32>`; the linear index of
/// `(x, y, z)` is `z + nz*(y + ny*x)`. This layout is a contract
/// shared with the flat-pass arithmetic kernels and must not change.
///
/// The z axis is periodic (toroidal); x and y edges clamp.
#[derive(Clone, Debug, PartialEq)]
pub struct Field3D {
    nx: usize,
    ny: usize,
    nz: usize,
    location: StaggerLocation,
    data: Vec<f32>,
}

impl Field3D {
    /// Create a zero-filled field.
    pub fn new(nx: usize, ny: usize, nz: usize, location: StaggerLocation) -> Self {
        Self::filled(nx, ny, nz, location, 0.0)
    }

    /// Create a field with every element set to `value`.
    pub fn filled(
        nx: usize,
        ny: usize,
        nz: usize,
        location: StaggerLocation,
        value: f32,
    ) -> Self {
        Self {
            nx,
            ny,
            nz,
            location,
            data: vec![value; nx * ny * nz],
        }
    }

    /// Create a field by evaluating `f(x, y, z)` at every cell.
    pub fn from_fn(
        nx: usize,
        ny: usize,
        nz: usize,
        location: StaggerLocation,
        mut f: impl FnMut(usize, usize, usize) -> f32,
    ) -> Self {
        let mut data = Vec::with_capacity(nx * ny * nz);
        for x in 0..nx {
            for y in 0..ny {
                for z in 0..nz {
                    data.push(f(x, y, z));
                }
            }
        }
        Self {
            nx,
            ny,
            nz,
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

    /// Number of cells along z.
    pub fn nz(&self) -> usize {
        self.nz
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

    /// Linear index of `(x, y, z)`: `z + nz*(y + ny*x)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        z + self.nz * (y + self.ny * x)
    }

    /// Value at `(x, y, z)`.
    #[inline]
    pub fn at(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.index(x, y, z)]
    }

    /// Mutable reference to the value at `(x, y, z)`.
    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize, z: usize) -> &mut f32 {
        let i = self.index(x, y, z);
        &mut self.data[i]
    }

    /// The flat element slice, in `z + nz*(y + ny*x)` order.
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

    fn average_to_x_low(&self) -> Vec<f32> {
        self.map_coords(|f, x, y, z| {
            let xm = x.saturating_sub(1);
            0.5 * (f.at(xm, y, z) + f.at(x, y, z))
        })
    }

    fn average_from_x_low(&self) -> Vec<f32> {
        self.map_coords(|f, x, y, z| {
            let xp = (x + 1).min(f.nx - 1);
            0.5 * (f.at(x, y, z) + f.at(xp, y, z))
        })
    }

    fn average_to_y_low(&self) -> Vec<f32> {
        self.map_coords(|f, x, y, z| {
            let ym = y.saturating_sub(1);
            0.5 * (f.at(x, ym, z) + f.at(x, y, z))
        })
    }

    fn average_from_y_low(&self) -> Vec<f32> {
        self.map_coords(|f, x, y, z| {
            let yp = (y + 1).min(f.ny - 1);
            0.5 * (f.at(x, y, z) + f.at(x, yp, z))
        })
    }

    fn average_to_z_low(&self) -> Vec<f32> {
        // z is periodic: the low face of z = 0 averages with z = nz-1.
        self.map_coords(|f, x, y, z| {
            let zm = (z + f.nz - 1) % f.nz;
            0.5 * (f.at(x, y, zm) + f.at(x, y, z))
        })
    }

    fn average_from_z_low(&self) -> Vec<f32> {
        self.map_coords(|f, x, y, z| {
            let zp = (z + 1) % f.nz;
            0.5 * (f.at(x, y, z) + f.at(x, y, zp))
        })
    }

    fn map_coords(&self, f: impl Fn(&Self, usize, usize, usize) -> f32) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.data.len());
        for x in 0..self.nx {
            for y in 0..self.ny {
                for z in 0..self.nz {
                    out.push(f(self, x, y, z));
                }
            }
        }
        out
    }

    fn with_data(&self, data: Vec<f32>, location: StaggerLocation) -> Self {
        Self {
            nx: self.nx,
            ny: self.ny,
            nz: self.nz,
            location,
            data,
        }
    }
}

impl StaggeredField for Field3D {
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
            (Centre, ZLow) => self.with_data(self.average_to_z_low(), target),
            (XLow, Centre) => self.with_data(self.average_from_x_low(), target),
            (YLow, Centre) => self.with_data(self.average_from_y_low(), target),
            (ZLow, Centre) => self.with_data(self.average_from_z_low(), target),
            // Staggered-to-staggered moves route via the centre.
            (_, _) => self.interp_to(Centre).interp_to(target),
        }
    }

    fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    fn apply_op_assign(&mut self, op: BinOp, rhs: &Self) {
        assert_eq!(
            (self.nx, self.ny, self.nz),
            (rhs.nx, rhs.ny, rhs.nz),
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
        // Zero-gradient on the x and y edges; z is periodic and untouched.
        if self.nx >= 2 {
            for y in 0..self.ny {
                for z in 0..self.nz {
                    *self.at_mut(0, y, z) = self.at(1, y, z);
                    let last = self.nx - 1;
                    *self.at_mut(last, y, z) = self.at(last - 1, y, z);
                }
            }
        }
        if self.ny >= 2 {
            for x in 0..self.nx {
                for z in 0..self.nz {
                    *self.at_mut(x, 0, z) = self.at(x, 1, z);
                    let last = self.ny - 1;
                    *self.at_mut(x, last, z) = self.at(x, last - 1, z);
                }
            }
        }
    }
}
