use super::*;
use crate::catalog::EdgeShape;
use nalgebra::{matrix, vector, Matrix3, Vector2};

fn close(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a - b).norm() < 1e-12
}

#[test]
fn match_segment_carries_canonical_endpoints() {
    let p = vector![0.25, -1.0];
    let q = vector![2.0, 0.5];
    let m = Affine2::match_segment(p, q);
    assert!(close(m.apply(vector![0.0, 0.0]), p));
    assert!(close(m.apply(vector![1.0, 0.0]), q));
    // similarity: (0,1) lands a quarter turn ccw from the edge direction
    let up = m.apply(vector![0.0, 1.0]) - p;
    let d = q - p;
    assert!(close(up, vector![-d.y, d.x]));
    assert!(m.is_orientation_preserving());
}

#[test]
fn orientation_table_matches_flags() {
    let pt = vector![0.2, 0.3];
    assert!(close(orientation(false, false).apply(pt), pt));
    assert!(close(orientation(false, true).apply(pt), vector![0.8, -0.3]));
    assert!(close(orientation(true, false).apply(pt), vector![0.8, 0.3]));
    assert!(close(orientation(true, true).apply(pt), vector![0.2, -0.3]));
    // ROT and FLIP swap the endpoints, ROFL keeps them
    for (flip, rot) in [(false, true), (true, false)] {
        let o = orientation(flip, rot);
        assert!(close(o.apply(vector![0.0, 0.0]), vector![1.0, 0.0]));
    }
    assert!(close(orientation(true, true).apply(vector![1.0, 0.0]), vector![1.0, 0.0]));
}

#[test]
fn half_transforms_meet_at_midpoint() {
    let mid = vector![0.5, 0.0];
    for shape in [EdgeShape::U, EdgeShape::S] {
        let h0 = half_transform(shape, 0);
        let h1 = half_transform(shape, 1);
        assert!(close(h0.apply(vector![0.0, 0.0]), vector![0.0, 0.0]));
        assert!(close(h0.apply(vector![1.0, 0.0]), mid));
        assert!(close(h1.apply(vector![1.0, 0.0]), mid));
        assert!(close(h1.apply(vector![0.0, 0.0]), vector![1.0, 0.0]));
    }
    // U mirrors across x = 0.5, S rotates about the midpoint
    let p = vector![0.4, 0.2];
    let u0 = half_transform(EdgeShape::U, 0).apply(p);
    let u1 = half_transform(EdgeShape::U, 1).apply(p);
    assert!(close(u1, vector![1.0 - u0.x, u0.y]));
    let s0 = half_transform(EdgeShape::S, 0).apply(p);
    let s1 = half_transform(EdgeShape::S, 1).apply(p);
    assert!(close(s1, vector![1.0 - s0.x, -s0.y]));
    assert_eq!(half_transform(EdgeShape::J, 1), Affine2::identity());
}

#[test]
fn coefficient_rows_with_bias() {
    let params = [2.0, -1.0];
    assert!((eval_scalar(&[1.0, 3.0, 0.5], &params) - (2.0 - 3.0 + 0.5)).abs() < 1e-15);
    assert!((eval_scalar(&[4.0], &[]) - 4.0).abs() < 1e-15);
    let p = eval_point(&[1.0, 0.0, 0.0, 0.0, 1.0, 1.0], &params);
    assert!(close(p, vector![2.0, 0.0]));
    // rows: m00 m01 tx m10 m11 ty
    let rows = [
        0.0, 0.0, 1.0, // m00
        0.0, 0.0, 0.0, // m01
        1.0, 0.0, 0.0, // tx = p0
        0.0, 0.0, 0.0, // m10
        0.0, 0.0, -1.0, // m11
        0.0, 1.0, 0.5, // ty = p1 + 0.5
    ];
    let a = eval_affine(&rows, &params);
    assert_eq!(a.m, matrix![1.0, 0.0; 0.0, -1.0]);
    assert!(close(a.t, vector![2.0, -0.5]));
    assert_eq!(a.to_rows(), [1.0, 0.0, 2.0, 0.0, -1.0, -0.5]);
}

#[test]
fn compose_inverse_and_homogeneous() {
    let a = Affine2::new(matrix![0.0, -1.0; 1.0, 0.0], vector![1.0, 2.0]);
    let b = Affine2::translation(vector![-3.0, 0.5]);
    let p = vector![0.7, -0.2];
    assert!(close((a * b).apply(p), a.apply(b.apply(p))));
    assert!(close((&a * &b).apply(p), a.compose(&b).apply(p)));
    let inv = a.inverse().unwrap();
    assert!(close(inv.apply(a.apply(p)), p));
    assert!(Affine2::new(nalgebra::Matrix2::zeros(), vector![1.0, 1.0])
        .inverse()
        .is_none());

    let h: Matrix3<f64> = a.to_homogeneous();
    let hp = h * vector![p.x, p.y, 1.0];
    assert!(close(vector![hp.x, hp.y], a.apply(p)));
    assert_eq!(Affine2::from_homogeneous(&h), a);
    assert!(close(a.translated(vector![1.0, 1.0]).apply(p), a.apply(p) + vector![1.0, 1.0]));
    assert!(close(a.apply_vector(vector![1.0, 0.0]), vector![0.0, 1.0]));
}
