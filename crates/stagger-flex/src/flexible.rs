//! The [`Flexible`] wrapper: one field, lazily cached at up to four
//! stagger locations.

use crate::slot::Slot;
use stagger_core::{BinOp, FlexError, StaggerLocation, StaggeredField};
use std::rc::Rc;

/// A field wrapper that caches interpolated copies per stagger location.
///
/// A `Flexible` is constructed from one concrete field; that field's
/// location becomes the *main* location and its slot is kept
/// materialized for the wrapper's whole lifetime. Reads at other
/// locations interpolate on demand and cache the result; writes to the
/// main field invalidate every cached secondary copy.
///
/// # Invariants
///
/// - The main slot is always populated.
/// - A populated slot at index `i` holds a field whose location is
///   exactly location `i`.
/// - The main location changes only through [`replace`](Self::replace)
///   or [`replace_shared`](Self::replace_shared).
///
/// # Caller contract
///
/// A secondary slot populated through [`set`](Self::set) is assumed to
/// be consistent with the main field; the cache performs no check.
pub struct Flexible<F: StaggeredField> {
    slots: [Slot<F>; StaggerLocation::COUNT],
    main: StaggerLocation,
}

impl<F: StaggeredField> Flexible<F> {
    /// Wrap `field`, taking ownership. Its location becomes the main
    /// location; all other slots start absent.
    pub fn new(field: F) -> Self {
        let mut flex = Self {
            slots: [Slot::Absent, Slot::Absent, Slot::Absent, Slot::Absent],
            main: field.location(),
        };
        flex.slots[flex.main.slot()] = Slot::Owned(field);
        flex
    }

    /// The canonical stagger location this wrapper was established with.
    pub fn main_location(&self) -> StaggerLocation {
        self.main
    }

    /// The main field, for call sites that are unaware of staggering.
    pub fn as_main(&self) -> &F {
        match self.slots[self.main.slot()].field() {
            Some(f) => f,
            None => unreachable!("main slot is always populated"),
        }
    }

    /// Whether a copy is currently materialized at `loc`.
    pub fn is_cached(&self, loc: StaggerLocation) -> bool {
        self.slots[loc.slot()].is_present()
    }

    /// The cached copy at `loc`, without materializing anything.
    pub fn peek(&self, loc: StaggerLocation) -> Option<&F> {
        self.slots[loc.slot()].field()
    }

    /// The field at `loc`, interpolating and caching on first access.
    ///
    /// `None` means the main location and never interpolates. For any
    /// other absent location the centre copy is materialized first —
    /// even when centre itself was not requested — because
    /// interpolation paths between staggered locations are defined via
    /// the centre as an intermediate; the requested location is then
    /// interpolated directly from the main field. Both copies are
    /// cached as owned slots.
    pub fn get(&mut self, loc: Option<StaggerLocation>) -> &F {
        let loc = loc.unwrap_or(self.main);
        let index = loc.slot();
        if !self.slots[index].is_present() {
            let centre = StaggerLocation::Centre.slot();
            if !self.slots[centre].is_present() {
                let copy = self.as_main().interp_to(StaggerLocation::Centre);
                self.slots[centre] = Slot::Owned(copy);
            }
            if !self.slots[index].is_present() {
                let copy = self.as_main().interp_to(loc);
                self.slots[index] = Slot::Owned(copy);
            }
        }
        match self.slots[index].field() {
            Some(f) => f,
            None => unreachable!("slot materialized above"),
        }
    }

    /// Like [`get`](Self::get), addressing the location by raw slot
    /// index, for callers holding untyped location values.
    ///
    /// Fails with [`FlexError::InvalidLocation`] when `index` is
    /// outside the four defined slots.
    pub fn get_slot(&mut self, index: usize) -> Result<&F, FlexError> {
        let loc = StaggerLocation::from_slot(index)?;
        Ok(self.get(Some(loc)))
    }

    /// Write `field` into the slot matching its own location, taking
    /// ownership.
    ///
    /// Writing at the main location is a *main replacement*: every
    /// slot is released first, since the identity of "main" is being
    /// redefined. Writing at any other location is a *secondary write*:
    /// only that slot's previous occupant is released; the main slot
    /// and other secondaries are untouched.
    pub fn set(&mut self, field: F) {
        let loc = field.location();
        self.adopt(loc, Slot::Owned(field));
    }

    /// Like [`set`](Self::set), but the slot shares the caller's
    /// storage instead of owning a copy.
    pub fn set_shared(&mut self, field: Rc<F>) {
        let loc = field.location();
        self.adopt(loc, Slot::Shared(field));
    }

    /// Full replacement: release every slot and re-establish the main
    /// location from `field`'s own location.
    pub fn replace(&mut self, field: F) {
        self.release_all();
        self.main = field.location();
        self.slots[self.main.slot()] = Slot::Owned(field);
    }

    /// Like [`replace`](Self::replace), with shared storage.
    pub fn replace_shared(&mut self, field: Rc<F>) {
        self.release_all();
        self.main = field.location();
        self.slots[self.main.slot()] = Slot::Shared(field);
    }

    /// Overwrite the main field's content with `value`, then release
    /// every secondary slot. The main location is untouched.
    pub fn assign_scalar(&mut self, value: f32) {
        self.main_mut().fill(value);
        self.invalidate_secondary();
    }

    /// Notification that external collaborators finished mutating the
    /// main field's storage (e.g. a halo exchange completed).
    ///
    /// Forwards the hook to the main field, then releases every
    /// secondary slot: cached copies were interpolated from content
    /// that no longer exists.
    pub fn done_communication(&mut self) {
        self.main_mut().done_communication();
        self.invalidate_secondary();
    }

    /// Apply `op` to every currently populated slot.
    ///
    /// Absent slots are never materialized: applying work to a copy
    /// nobody has requested would be wasted.
    pub fn broadcast(&mut self, mut op: impl FnMut(&mut F)) {
        for slot in &mut self.slots {
            if let Some(field) = slot.field_mut() {
                op(field);
            }
        }
    }

    /// Apply boundary conditions to every populated slot.
    pub fn apply_boundary(&mut self) {
        self.broadcast(|field| field.apply_boundary());
    }

    /// Boundary application for time derivatives is deliberately
    /// unsupported on flexible fields; this always fails rather than
    /// silently doing nothing.
    pub fn apply_time_derivative_boundary(&mut self) -> Result<(), FlexError> {
        Err(FlexError::NotImplemented {
            operation: "apply_time_derivative_boundary",
        })
    }

    /// In-place compound update `main op= rhs`.
    ///
    /// Legal only when `rhs` is at the main location; otherwise fails
    /// with [`FlexError::LocationMismatch`] naming both locations and
    /// leaving every slot unchanged. On success the secondary slots
    /// are released, as for [`assign_scalar`](Self::assign_scalar).
    pub fn apply_in_place(&mut self, op: BinOp, rhs: &F) -> Result<(), FlexError> {
        let rhs_loc = rhs.location();
        if rhs_loc != self.main {
            return Err(FlexError::LocationMismatch {
                main: self.main,
                rhs: rhs_loc,
            });
        }
        self.main_mut().apply_op_assign(op, rhs);
        self.invalidate_secondary();
        Ok(())
    }

    /// In-place compound update `main op= rhs` with a broadcast scalar.
    /// Infallible; releases the secondary slots.
    pub fn apply_scalar_in_place(&mut self, op: BinOp, rhs: f32) {
        self.main_mut().apply_scalar_assign(op, rhs);
        self.invalidate_secondary();
    }

    fn main_mut(&mut self) -> &mut F {
        match self.slots[self.main.slot()].field_mut() {
            Some(f) => f,
            None => unreachable!("main slot is always populated"),
        }
    }

    /// Release every secondary slot, leaving only main populated.
    fn invalidate_secondary(&mut self) {
        let main = self.main.slot();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index != main {
                slot.clear();
            }
        }
    }

    fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    fn adopt(&mut self, loc: StaggerLocation, slot: Slot<F>) {
        debug_assert_eq!(
            slot.field().map(|f| f.location()),
            Some(loc),
            "slot content location must match its slot"
        );
        if loc == self.main {
            self.release_all();
        } else {
            self.slots[loc.slot()].clear();
        }
        self.slots[loc.slot()] = slot;
    }
}
