use super::*;
use crate::catalog::NUM_TYPES;
use crate::testutil::{close, trace_boundary};
use nalgebra::vector;

#[test]
fn shape_iter_visits_every_edge_from_both_ends() {
    for ty in 0..NUM_TYPES {
        let t = IsohedralTiling::new(ty).unwrap();
        let forward: Vec<_> = t.shape().collect();
        assert_eq!(forward.len(), t.num_vertices());
        assert_eq!(t.shape().len(), t.num_vertices());
        for (i, e) in forward.iter().enumerate() {
            assert_eq!(e.index, i);
            assert_eq!(e.id, t.edge_shape_id(i));
            assert_eq!(Ok(e.shape), t.edge_shape(e.id));
        }
        let mut backward: Vec<_> = t.shape().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

#[test]
fn shape_iter_is_fused_and_meets_in_the_middle() {
    let t = IsohedralTiling::new(0).unwrap();
    let mut it = t.shape();
    let first = it.next().unwrap();
    let last = it.next_back().unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(last.index, t.num_vertices() - 1);
    assert_eq!(it.len(), t.num_vertices() - 2);
    while it.next().is_some() {}
    assert!(it.next().is_none());
    assert!(it.next_back().is_none());
}

#[test]
fn part_counts_follow_edge_classes() {
    for ty in 0..NUM_TYPES {
        let t = IsohedralTiling::new(ty).unwrap();
        let expected: usize = t.shape().map(|e| e.shape.num_parts()).sum();
        let mut it = t.parts();
        assert_eq!(it.len(), expected);
        let parts: Vec<_> = it.by_ref().collect();
        assert_eq!(parts.len(), expected);
        assert!(it.next().is_none());
        for p in &parts {
            match p.shape {
                EdgeShape::J | EdgeShape::I => {
                    assert_eq!(p.part, 0);
                    assert_eq!(p.transform, t.edge_transform(p.edge));
                    assert_eq!(p.reversed, t.is_edge_reversed(p.edge));
                }
                EdgeShape::U | EdgeShape::S => {
                    assert_eq!(p.reversed, p.is_second_part());
                }
            }
        }
    }
}

#[test]
fn split_edges_meet_at_the_midpoint() {
    for ty in 0..NUM_TYPES {
        let t = IsohedralTiling::new(ty).unwrap();
        let nv = t.num_vertices();
        let parts: Vec<_> = t.parts().collect();
        for pair in parts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.edge != b.edge {
                continue;
            }
            let mid = (t.vertex(a.edge) + t.vertex((a.edge + 1) % nv)) * 0.5;
            assert!(close(a.transform.apply(vector![1.0, 0.0]), mid, 1e-12), "type {ty}");
            assert!(close(b.transform.apply(vector![1.0, 0.0]), mid, 1e-12), "type {ty}");
        }
    }
}

#[test]
fn traced_boundary_is_closed_and_starts_at_each_vertex() {
    for ty in 0..NUM_TYPES {
        let t = IsohedralTiling::new(ty).unwrap();
        let parts: Vec<_> = t.parts().collect();
        let segs = trace_boundary(&t);
        for k in 0..segs.len() {
            let end = *segs[k].last().unwrap();
            let next = segs[(k + 1) % segs.len()][0];
            assert!(close(end, next, 1e-9), "type {ty}: gap after part {k}");
            if parts[k].part == 0 {
                assert!(close(segs[k][0], t.vertex(parts[k].edge), 1e-9), "type {ty}");
            }
        }
    }
}

#[test]
fn symmetric_halves_respect_the_edge_class() {
    // Local frame of each edge: p at 0, q at 1, so a drawn point maps back to
    // canonical coordinates through the inverse of the plain segment match.
    for ty in 0..NUM_TYPES {
        let t = IsohedralTiling::new(ty).unwrap();
        let nv = t.num_vertices();
        let parts: Vec<_> = t.parts().collect();
        let segs = trace_boundary(&t);
        for k in 0..parts.len() {
            let p = parts[k];
            if p.part != 0 || !matches!(p.shape, EdgeShape::U | EdgeShape::S) {
                continue;
            }
            let frame = Affine2::match_segment(t.vertex(p.edge), t.vertex((p.edge + 1) % nv))
                .inverse()
                .unwrap();
            let first: Vec<_> = segs[k].iter().map(|&q| frame.apply(q)).collect();
            let second: Vec<_> = segs[k + 1].iter().map(|&q| frame.apply(q)).collect();
            for q in &first {
                let image = match p.shape {
                    EdgeShape::U => vector![1.0 - q.x, q.y],
                    _ => vector![1.0 - q.x, -q.y],
                };
                assert!(
                    second.iter().any(|&r| close(r, image, 1e-9)),
                    "type {ty}: edge {} breaks {} symmetry",
                    p.edge,
                    p.shape
                );
            }
        }
    }
}
