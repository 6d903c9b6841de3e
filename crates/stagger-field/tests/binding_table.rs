//! Table-driven check that the generated operator bindings agree with
//! the resolver: every entry of the binding set evaluates with the
//! promoted result kind and the table's indexing strategy.

use stagger_core::resolver::{bindings, IndexStrategy};
use stagger_core::{BinOp, FieldKind, StaggerLocation};
use stagger_field::{Field2D, Field3D};

const NX: usize = 3;
const NY: usize = 4;
const NZ: usize = 2;
const SCALAR: f32 = 2.0;

fn sample_2d() -> Field2D {
    Field2D::from_fn(NX, NY, StaggerLocation::Centre, |x, y| (100 * x + y) as f32 + 1.0)
}

fn sample_3d() -> Field3D {
    Field3D::from_fn(NX, NY, NZ, StaggerLocation::Centre, |x, y, z| {
        (100 * x + 10 * y + z) as f32 + 1.0
    })
}

fn apply_2d_2d(op: BinOp, a: &Field2D, b: &Field2D) -> Field2D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_3d_2d(op: BinOp, a: &Field3D, b: &Field2D) -> Field3D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_2d_3d(op: BinOp, a: &Field2D, b: &Field3D) -> Field3D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_2d_scalar(op: BinOp, a: &Field2D, b: f32) -> Field2D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_scalar_2d(op: BinOp, a: f32, b: &Field2D) -> Field2D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_3d_scalar(op: BinOp, a: &Field3D, b: f32) -> Field3D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

fn apply_scalar_3d(op: BinOp, a: f32, b: &Field3D) -> Field3D {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
    }
}

#[test]
fn every_binding_matches_the_table() {
    let f2 = sample_2d();
    let f3 = sample_3d();

    for binding in bindings() {
        let op = binding.resolution.op;
        match (binding.lhs, binding.rhs) {
            (FieldKind::TwoD, FieldKind::ThreeD) => {
                assert_eq!(binding.resolution.result, FieldKind::ThreeD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Coordinate);
                let out = apply_2d_3d(op, &f2, &f3);
                for x in 0..NX {
                    for y in 0..NY {
                        for z in 0..NZ {
                            assert_eq!(
                                out.at(x, y, z),
                                op.apply(f2.at(x, y), f3.at(x, y, z)),
                                "2d {op} 3d at ({x},{y},{z})"
                            );
                        }
                    }
                }
            }
            (FieldKind::ThreeD, FieldKind::TwoD) => {
                assert_eq!(binding.resolution.result, FieldKind::ThreeD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Coordinate);
                let out = apply_3d_2d(op, &f3, &f2);
                for x in 0..NX {
                    for y in 0..NY {
                        for z in 0..NZ {
                            assert_eq!(
                                out.at(x, y, z),
                                op.apply(f3.at(x, y, z), f2.at(x, y)),
                                "3d {op} 2d at ({x},{y},{z})"
                            );
                        }
                    }
                }
            }
            (FieldKind::Scalar, FieldKind::TwoD) => {
                assert_eq!(binding.resolution.result, FieldKind::TwoD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Flat);
                let out = apply_scalar_2d(op, SCALAR, &f2);
                for x in 0..NX {
                    for y in 0..NY {
                        assert_eq!(out.at(x, y), op.apply(SCALAR, f2.at(x, y)));
                    }
                }
            }
            (FieldKind::TwoD, FieldKind::Scalar) => {
                assert_eq!(binding.resolution.result, FieldKind::TwoD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Flat);
                let out = apply_2d_scalar(op, &f2, SCALAR);
                for x in 0..NX {
                    for y in 0..NY {
                        assert_eq!(out.at(x, y), op.apply(f2.at(x, y), SCALAR));
                    }
                }
            }
            (FieldKind::Scalar, FieldKind::ThreeD) => {
                assert_eq!(binding.resolution.result, FieldKind::ThreeD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Flat);
                let out = apply_scalar_3d(op, SCALAR, &f3);
                assert_eq!(out.len(), f3.len());
                for (got, &v) in out.data().iter().zip(f3.data()) {
                    assert_eq!(*got, op.apply(SCALAR, v));
                }
            }
            (FieldKind::ThreeD, FieldKind::Scalar) => {
                assert_eq!(binding.resolution.result, FieldKind::ThreeD);
                assert_eq!(binding.resolution.strategy, IndexStrategy::Flat);
                let out = apply_3d_scalar(op, &f3, SCALAR);
                assert_eq!(out.len(), f3.len());
                for (got, &v) in out.data().iter().zip(f3.data()) {
                    assert_eq!(*got, op.apply(v, SCALAR));
                }
            }
            pair => panic!("unexpected binding pair {pair:?}"),
        }
    }
}

#[test]
fn equal_kind_pairs_are_covered_generically() {
    // Not in the binding table, but defined: same-kind operands take
    // the flat pass.
    let a = sample_2d();
    let b = sample_2d();
    let out = apply_2d_2d(BinOp::Sub, &a, &b);
    assert!(out.data().iter().all(|&v| v == 0.0));

    let c = sample_3d();
    let out = &c / &c;
    assert!(out.data().iter().all(|&v| v == 1.0));
}
