use super::*;
use crate::catalog::NUM_TYPES;
use crate::fill::Placement;
use crate::testutil::{centroid, close, mapped, perturbed_params, trace_boundary, PointIndex};
use nalgebra::vector;
use proptest::prelude::*;

fn every_type() -> impl Iterator<Item = IsohedralTiling> {
    (0..NUM_TYPES).map(|t| IsohedralTiling::new(t).unwrap())
}

#[test]
fn unknown_type_is_rejected_without_side_effects() {
    assert_eq!(
        IsohedralTiling::new(NUM_TYPES).unwrap_err(),
        TilingError::UnknownType {
            index: NUM_TYPES,
            count: NUM_TYPES
        }
    );
    let mut t = IsohedralTiling::new(3).unwrap();
    let before = (t.tiling_type(), t.parameters().to_vec(), t.t1(), t.t2());
    assert!(t.reset(200).is_err());
    assert_eq!(before, (t.tiling_type(), t.parameters().to_vec(), t.t1(), t.t2()));
    t.reset(40).unwrap();
    assert_eq!(t.tiling_type(), 40);
    assert_eq!(t.parameters(), t.type_data().default_params);
}

#[test]
fn wrong_parameter_count_leaves_state_untouched() {
    let mut t = IsohedralTiling::new(0).unwrap();
    let np = t.num_parameters();
    let verts = t.vertices().to_vec();
    let err = t.set_parameters(&vec![0.5; np + 1]).unwrap_err();
    assert_eq!(
        err,
        TilingError::ParameterCount {
            expected: np,
            got: np + 1
        }
    );
    assert_eq!(t.parameters(), t.type_data().default_params);
    assert_eq!(t.vertices(), &verts[..]);
}

#[test]
fn checked_accessors_report_ranges() {
    let t = IsohedralTiling::new(0).unwrap();
    assert!(t.edge_shape(t.num_edge_shapes() - 1).is_ok());
    assert_eq!(
        t.edge_shape(t.num_edge_shapes()),
        Err(TilingError::EdgeShapeOutOfRange {
            id: t.num_edge_shapes(),
            count: t.num_edge_shapes()
        })
    );
    assert!(t.try_aspect_transform(0).is_ok());
    assert!(matches!(
        t.try_aspect_transform(t.num_aspects()),
        Err(TilingError::AspectOutOfRange { .. })
    ));
}

#[test]
fn edges_carry_their_endpoints() {
    for t in every_type() {
        let nv = t.num_vertices();
        for i in 0..nv {
            let m = t.edge_transform(i);
            let (mut p, mut q) = (t.vertex(i), t.vertex((i + 1) % nv));
            if t.is_edge_reversed(i) {
                std::mem::swap(&mut p, &mut q);
            }
            assert!(close(m.apply(vector![0.0, 0.0]), p, 1e-12), "type {}", t.tiling_type());
            assert!(close(m.apply(vector![1.0, 0.0]), q, 1e-12), "type {}", t.tiling_type());
        }
    }
}

#[test]
fn aspects_are_isometries_with_identity_first() {
    for t in every_type() {
        assert!(
            close(t.aspect_transform(0).t, vector![0.0, 0.0], 1e-12)
                && (t.aspect_transform(0).m - nalgebra::Matrix2::identity()).norm() < 1e-12,
            "type {}",
            t.tiling_type()
        );
        for a in 0..t.num_aspects() {
            let m = t.aspect_transform(a).m;
            let gram = m.transpose() * m;
            assert!((gram - nalgebra::Matrix2::identity()).norm() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn parameters_round_trip(
        ty in 0usize..NUM_TYPES,
        raw in prop::collection::vec(-3.0f64..3.0, MAX_PARAMS),
    ) {
        let mut t = IsohedralTiling::new(ty).unwrap();
        let np = t.num_parameters();
        t.set_parameters(&raw[..np]).unwrap();
        prop_assert_eq!(t.parameters(), &raw[..np]);
        // same inputs, same derived state
        let mut u = IsohedralTiling::new(ty).unwrap();
        u.set_parameters(&raw[..np]).unwrap();
        prop_assert_eq!(t.vertices(), u.vertices());
        prop_assert_eq!(t.t1(), u.t1());
    }

    #[test]
    fn colouring_is_a_lattice_action(
        ty in 0usize..NUM_TYPES,
        a in -40i64..40,
        b in -40i64..40,
        k in 0usize..12,
    ) {
        let t = IsohedralTiling::new(ty).unwrap();
        let k = k % t.num_aspects();
        let nc = i64::from(t.num_colours());
        let table = &t.type_data().colouring;
        let c = t.colour(a, b, k);
        prop_assert!(c < t.num_colours());
        prop_assert_eq!(t.colour(a + nc, b, k), c);
        prop_assert_eq!(t.colour(a, b - nc, k), c);
        prop_assert_eq!(t.colour(a + 1, b, k), table[12 + usize::from(c)]);
        prop_assert_eq!(t.colour(a, b + 1, k), table[15 + usize::from(c)]);
    }
}

#[test]
fn colour_is_periodic_far_from_the_origin() {
    for t in every_type() {
        let nc = i64::from(t.num_colours());
        let far = 4_000_000_000 / nc * nc;
        for k in 0..t.num_aspects() {
            assert_eq!(t.colour(far + 1, -far, k), t.colour(1, 0, k), "type {}", t.tiling_type());
        }
    }
}

/// Placements around the origin, wide enough that tiles near the origin have
/// all their neighbours present.
fn neighbourhood(t: &IsohedralTiling) -> (Vec<Placement>, f64) {
    let span = t.t1().norm() + t.t2().norm();
    let diam = 2.0 * t.vertices().iter().map(|v| v.norm()).fold(0.0, f64::max);
    let r = 3.0 * (span + diam);
    (t.fill_box(-r, -r, r, r).iter().collect(), span + diam)
}

fn edge_midpoints(t: &IsohedralTiling) -> Vec<nalgebra::Vector2<f64>> {
    let v = t.vertices();
    (0..v.len()).map(|i| (v[i] + v[(i + 1) % v.len()]) * 0.5).collect()
}

/// Every type at its defaults and at two nearby parameter vectors.
fn every_type_perturbed() -> impl Iterator<Item = IsohedralTiling> {
    every_type().flat_map(|t| {
        perturbed_params(t.type_data(), 2, 5 + t.tiling_type() as u64)
            .into_iter()
            .map(move |p| {
                let mut u = t.clone();
                u.set_parameters(&p).unwrap();
                u
            })
    })
}

#[test]
fn neighbouring_edge_curves_coincide() {
    for t in every_type_perturbed() {
        let boundary = trace_boundary(&t);
        let mut local: Vec<_> = boundary
            .iter()
            .flat_map(|seg| seg[1..seg.len() - 1].iter().copied())
            .collect();
        local.extend(edge_midpoints(&t));

        let (placements, radius) = neighbourhood(&t);
        let c0 = centroid(t.vertices());
        let mut index = PointIndex::default();
        let mut inner = Vec::new();
        for (n, p) in placements.iter().enumerate() {
            let pts = mapped(&p.transform, &local);
            for &q in &pts {
                index.insert(q, n);
            }
            if p.transform.apply(c0).norm() < radius {
                inner.push((n, pts));
            }
        }
        assert!(!inner.is_empty(), "type {}", t.tiling_type());
        for (n, pts) in inner {
            for q in pts {
                let owners = index.owners_near(q, 1e-6, n);
                assert_eq!(
                    owners.len(),
                    1,
                    "type {} at {:?}: point {q:?}",
                    t.tiling_type(),
                    t.parameters()
                );
            }
        }
    }
}

#[test]
fn neighbouring_copies_get_distinct_colours() {
    for t in every_type() {
        let mids = edge_midpoints(&t);
        let (placements, radius) = neighbourhood(&t);
        let c0 = centroid(t.vertices());
        let mut index = PointIndex::default();
        for (n, p) in placements.iter().enumerate() {
            for q in mapped(&p.transform, &mids) {
                index.insert(q, n);
            }
        }
        let mut pairs = 0;
        for (n, p) in placements.iter().enumerate() {
            if p.transform.apply(c0).norm() >= radius {
                continue;
            }
            let own = t.colour(p.t1, p.t2, p.aspect);
            for q in mapped(&p.transform, &mids) {
                for m in index.owners_near(q, 1e-6, n) {
                    let other = &placements[m];
                    assert_ne!(
                        own,
                        t.colour(other.t1, other.t2, other.aspect),
                        "type {}: ({}, {}, {}) vs ({}, {}, {})",
                        t.tiling_type(),
                        p.t1,
                        p.t2,
                        p.aspect,
                        other.t1,
                        other.t2,
                        other.aspect
                    );
                    pairs += 1;
                }
            }
        }
        assert!(pairs > 0, "type {}", t.tiling_type());
    }
}

#[test]
fn lattice_impl_matches_accessors() {
    let t = IsohedralTiling::new(12).unwrap();
    let l: &dyn Lattice = &t;
    assert_eq!(l.t1(), t.t1());
    assert_eq!(l.t2(), t.t2());
    assert_eq!(l.num_aspects(), t.num_aspects());
    assert_eq!(l.aspect_transform(0), t.aspect_transform(0));
}
