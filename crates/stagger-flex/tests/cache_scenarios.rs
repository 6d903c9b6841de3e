//! End-to-end cache behavior: lazy materialization, the centre
//! intermediate, invalidation, and wrapped-operand dispatch.

use stagger_core::{BinOp, StaggerLocation, StaggeredField};
use stagger_field::Field3D;
use stagger_flex::Flexible;
use stagger_test_utils::{ramp2d, ramp3d, ProbeField};

#[test]
fn construction_and_default_read_never_interpolate() {
    let probe = ProbeField::new(ramp2d(4, 4, StaggerLocation::XLow));
    let counter = probe.counter();
    let expected = probe.inner().clone();

    let mut flex = Flexible::new(probe);
    assert_eq!(flex.main_location(), StaggerLocation::XLow);
    assert_eq!(flex.get(None).inner(), &expected);
    assert_eq!(counter.get(), 0);
}

#[test]
fn first_secondary_read_materializes_centre_as_a_byproduct() {
    let probe = ProbeField::new(ramp2d(4, 4, StaggerLocation::XLow));
    let counter = probe.counter();
    let original = probe.inner().clone();
    let mut flex = Flexible::new(probe);

    flex.get(Some(StaggerLocation::YLow));

    // Centre and YLow realized, one interpolation each; the main slot
    // is untouched and ZLow was never requested.
    assert_eq!(counter.get(), 2);
    assert!(flex.is_cached(StaggerLocation::Centre));
    assert!(flex.is_cached(StaggerLocation::YLow));
    assert!(flex.is_cached(StaggerLocation::XLow));
    assert!(!flex.is_cached(StaggerLocation::ZLow));
    assert_eq!(flex.get(None).inner(), &original);
}

#[test]
fn cached_reads_are_idempotent() {
    let probe = ProbeField::new(ramp2d(4, 4, StaggerLocation::XLow));
    let counter = probe.counter();
    let mut flex = Flexible::new(probe);

    flex.get(Some(StaggerLocation::YLow));
    let after_first = counter.get();

    flex.get(Some(StaggerLocation::Centre));
    flex.get(Some(StaggerLocation::YLow));
    flex.get(None);
    assert_eq!(counter.get(), after_first);
}

#[test]
fn requesting_centre_itself_interpolates_once() {
    let probe = ProbeField::new(ramp2d(4, 4, StaggerLocation::XLow));
    let counter = probe.counter();
    let mut flex = Flexible::new(probe);

    let centre = flex.get(Some(StaggerLocation::Centre));
    assert_eq!(centre.location(), StaggerLocation::Centre);
    assert_eq!(counter.get(), 1);
}

#[test]
fn replace_clears_the_cache_and_re_establishes_main() {
    let probe = ProbeField::new(ramp2d(4, 4, StaggerLocation::XLow));
    let counter = probe.counter();
    let mut flex = Flexible::new(probe);
    flex.get(Some(StaggerLocation::YLow));
    let before = counter.get();

    flex.replace(ProbeField::new(ramp2d(4, 4, StaggerLocation::Centre)));
    assert_eq!(flex.main_location(), StaggerLocation::Centre);
    assert!(!flex.is_cached(StaggerLocation::XLow));
    assert!(!flex.is_cached(StaggerLocation::YLow));

    // The YLow slot was cleared, so this read interpolates again —
    // through the replacement field's own counter.
    let replacement_counter = flex.get(None).counter();
    flex.get(Some(StaggerLocation::YLow));
    assert_eq!(counter.get(), before);
    assert_eq!(replacement_counter.get(), 1);
}

#[test]
fn wrapped_3d_times_plain_2d_evaluates_at_the_plain_operands_location() {
    let mut flex = Flexible::new(ramp3d(4, 4, 2, StaggerLocation::Centre));
    let rhs = ramp2d(4, 4, StaggerLocation::YLow);

    let result = &mut flex * &rhs;

    assert!(flex.is_cached(StaggerLocation::YLow));
    assert_eq!(result.location(), StaggerLocation::YLow);

    // The wrapped operand was interpolated to YLow before combining.
    let realized = flex.peek(StaggerLocation::YLow).unwrap().clone();
    for x in 0..4 {
        for y in 0..4 {
            for z in 0..2 {
                assert_eq!(result.at(x, y, z), realized.at(x, y, z) * rhs.at(x, y));
            }
        }
    }
}

#[test]
fn in_place_update_requires_the_main_location() {
    let mut flex = Flexible::new(Field3D::filled(4, 4, 2, StaggerLocation::Centre, 6.0));
    let wrong = Field3D::filled(4, 4, 2, StaggerLocation::ZLow, 2.0);

    let err = flex.apply_in_place(BinOp::Div, &wrong).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("centre") && msg.contains("zlow"), "{msg}");

    let right = wrong.with_location(StaggerLocation::Centre);
    flex.apply_in_place(BinOp::Div, &right).unwrap();
    assert!(flex.get(None).data().iter().all(|&v| v == 3.0));
}

#[test]
fn broadcast_applies_boundaries_to_cached_copies_only() {
    let mut flex = Flexible::new(ramp2d(4, 4, StaggerLocation::XLow));
    flex.get(Some(StaggerLocation::Centre));

    flex.apply_boundary();

    // Both populated slots had their edges rewritten.
    for loc in [StaggerLocation::XLow, StaggerLocation::Centre] {
        let field = flex.peek(loc).unwrap();
        assert_eq!(field.at(0, 1), field.at(1, 1), "{loc}");
    }
    assert!(!flex.is_cached(StaggerLocation::YLow));
    assert!(!flex.is_cached(StaggerLocation::ZLow));
}

#[test]
fn done_communication_invalidates_like_a_scalar_write() {
    let mut flex = Flexible::new(ramp2d(4, 4, StaggerLocation::XLow));
    flex.get(Some(StaggerLocation::YLow));
    flex.done_communication();
    assert_eq!(flex.main_location(), StaggerLocation::XLow);
    assert!(flex.is_cached(StaggerLocation::XLow));
    assert!(!flex.is_cached(StaggerLocation::Centre));
    assert!(!flex.is_cached(StaggerLocation::YLow));
}

#[test]
fn mixed_kind_wrapped_dispatch_matches_plain_kernels() {
    // Same operation with and without the wrapper, operands already at
    // a common location: the wrapper must be numerically transparent.
    let lhs = ramp3d(3, 3, 4, StaggerLocation::Centre);
    let rhs = ramp2d(3, 3, StaggerLocation::Centre);

    let plain = &lhs - &rhs;
    let mut flex = Flexible::new(lhs);
    let wrapped = &mut flex - &rhs;
    assert_eq!(plain, wrapped);
}
