//! Ownership-tagged cache slots.

use std::rc::Rc;

/// One cache slot: a field copy at a fixed stagger location, or nothing.
///
/// A populated slot is either owned by the cache outright or shared
/// with the caller through an `Rc`. The shared form models a slot the
/// caller populated from its own storage: dropping the cache's handle
/// can never free storage the caller still holds, so the original
/// design's borrowed-slot use-after-free hazard is unrepresentable.
///
/// Per-slot state machine: `Absent → Owned` or `Absent → Shared` on
/// adoption, `Owned/Shared → Absent` on invalidation. A slot never
/// moves between `Owned` and `Shared` without passing through `Absent`.
#[derive(Clone, Debug)]
pub enum Slot<F> {
    /// No copy cached at this location.
    Absent,
    /// A copy the cache owns and drops on invalidation.
    Owned(F),
    /// A copy shared with the caller; invalidation only drops the
    /// cache's reference.
    Shared(Rc<F>),
}

impl<F> Slot<F> {
    /// Whether the slot holds a field.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The cached field, if present.
    pub fn field(&self) -> Option<&F> {
        match self {
            Self::Absent => None,
            Self::Owned(f) => Some(f),
            Self::Shared(f) => Some(f),
        }
    }

    /// Empty the slot, dropping an owned occupant or releasing a
    /// shared reference.
    pub fn clear(&mut self) {
        *self = Self::Absent;
    }
}

impl<F: Clone> Slot<F> {
    /// Mutable access to the cached field, if present.
    ///
    /// A shared occupant is detached copy-on-write first, so mutation
    /// is never visible through the caller's alias.
    pub fn field_mut(&mut self) -> Option<&mut F> {
        match self {
            Self::Absent => None,
            Self::Owned(f) => Some(f),
            Self::Shared(f) => Some(Rc::make_mut(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_releases_shared_reference_without_freeing_caller_storage() {
        let caller = Rc::new(3usize);
        let mut slot = Slot::Shared(Rc::clone(&caller));
        assert_eq!(Rc::strong_count(&caller), 2);
        slot.clear();
        assert_eq!(Rc::strong_count(&caller), 1);
        assert_eq!(*caller, 3);
    }

    #[test]
    fn field_mut_detaches_shared_occupants() {
        let caller = Rc::new(vec![1, 2, 3]);
        let mut slot = Slot::Shared(Rc::clone(&caller));
        slot.field_mut().unwrap().push(4);
        // The caller's alias is untouched; the slot now holds its own copy.
        assert_eq!(*caller, vec![1, 2, 3]);
        assert_eq!(slot.field().unwrap(), &vec![1, 2, 3, 4]);
    }

    #[test]
    fn absent_reports_nothing() {
        let slot: Slot<u32> = Slot::Absent;
        assert!(!slot.is_present());
        assert!(slot.field().is_none());
    }
}
