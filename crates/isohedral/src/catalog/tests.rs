use super::*;
use crate::geom::eval_point;
use crate::testutil::perturbed_params;

const GROUPS: [&str; 17] = [
    "p1", "p2", "pm", "pg", "cm", "pmm", "pmg", "pgg", "cmm", "p4", "p4m", "p4g", "p3", "p3m1",
    "p31m", "p6", "p6m",
];

#[test]
fn table_has_all_types_and_rejects_out_of_range() {
    assert_eq!(all_types().len(), NUM_TYPES);
    assert!(type_data(NUM_TYPES - 1).is_ok());
    match type_data(NUM_TYPES) {
        Err(TilingError::UnknownType { index, count }) => {
            assert_eq!(index, NUM_TYPES);
            assert_eq!(count, NUM_TYPES);
        }
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn record_lengths_are_consistent() {
    for (idx, t) in all_types().iter().enumerate() {
        let s = t.stride();
        assert!(t.num_params <= MAX_PARAMS, "type {idx}");
        assert!((3..=MAX_VERTICES).contains(&t.num_vertices), "type {idx}");
        assert!((1..=MAX_ASPECTS).contains(&t.num_aspects), "type {idx}");
        assert_eq!(t.edge_shapes.len(), t.num_edge_shapes, "type {idx}");
        assert_eq!(t.edge_orientations.len(), 2 * t.num_vertices, "type {idx}");
        assert_eq!(t.edge_shape_ids.len(), t.num_vertices, "type {idx}");
        assert_eq!(t.default_params.len(), t.num_params, "type {idx}");
        assert_eq!(t.tiling_vertex_coeffs.len(), 2 * t.num_vertices * s, "type {idx}");
        assert_eq!(t.translation_vector_coeffs.len(), 4 * s, "type {idx}");
        assert_eq!(t.aspect_xform_coeffs.len(), 6 * t.num_aspects * s, "type {idx}");
        // every shape id in range and used at least once
        for id in 0..t.num_edge_shapes {
            assert!(t.edge_shape_ids.contains(&id), "type {idx} shape {id} unused");
        }
        assert!(t.edge_shape_ids.iter().all(|&id| id < t.num_edge_shapes));
        assert!(GROUPS.contains(&t.symmetry_group), "type {idx}");
        assert_eq!(
            t.vertex_config.split('.').count(),
            t.num_vertices,
            "type {idx}"
        );
    }
}

#[test]
fn colour_permutations_generate_a_lattice_action() {
    for (idx, t) in all_types().iter().enumerate() {
        let nc = t.colour_count() as usize;
        assert!(nc == 2 || nc == 3, "type {idx}");
        for a in 0..t.num_aspects {
            assert!((t.colouring[a] as usize) < nc, "type {idx} aspect {a}");
        }
        let p1 = &t.colouring[12..15];
        let p2 = &t.colouring[15..18];
        for perm in [p1, p2] {
            let mut seen = [false; 3];
            for c in 0..nc {
                let d = perm[c] as usize;
                assert!(d < nc, "type {idx}");
                seen[d] = true;
            }
            assert!(seen[..nc].iter().all(|&s| s), "type {idx}: not a bijection");
            // π^nc = id
            for c in 0..nc {
                let mut d = c;
                for _ in 0..nc {
                    d = perm[d] as usize;
                }
                assert_eq!(d, c, "type {idx}");
            }
        }
        for c in 0..nc {
            let a = p2[p1[c] as usize];
            let b = p1[p2[c] as usize];
            assert_eq!(a, b, "type {idx}: permutations do not commute");
        }
    }
}

#[test]
fn tiles_fill_their_unit_cell_near_the_defaults() {
    for (idx, t) in all_types().iter().enumerate() {
        let s = t.stride();
        for p in perturbed_params(t, 3, 17 + idx as u64) {
            let p = &p[..];
            let verts: Vec<_> = (0..t.num_vertices)
                .map(|k| eval_point(&t.tiling_vertex_coeffs[2 * k * s..], p))
                .collect();
            assert!(verts[0].norm() < 1e-12, "type {idx} at {p:?}: vertex 0 off origin");
            assert!((verts[1].x - 1.0).abs() < 1e-12, "type {idx} at {p:?}");
            let n = verts.len();
            let area: f64 = (0..n)
                .map(|i| {
                    let a = verts[i];
                    let b = verts[(i + 1) % n];
                    a.x * b.y - b.x * a.y
                })
                .sum::<f64>()
                / 2.0;
            let t1 = eval_point(&t.translation_vector_coeffs, p);
            let t2 = eval_point(&t.translation_vector_coeffs[2 * s..], p);
            let det = t1.x * t2.y - t1.y * t2.x;
            assert!(area > 0.0, "type {idx} at {p:?}: clockwise tile");
            assert!(det > 0.0, "type {idx} at {p:?}: left-handed basis");
            assert!(
                (area * t.num_aspects as f64 - det).abs() < 1e-6,
                "type {idx} at {p:?}: area {area} x {} != {det}",
                t.num_aspects
            );
        }
    }
}

#[test]
fn ih_numbers_cover_the_catalog() {
    const ABSENT: [u8; 12] = [19, 35, 48, 60, 63, 65, 70, 75, 80, 87, 89, 92];
    let mut numbers: Vec<u8> = all_types().iter().map(|t| t.ih_number).collect();
    numbers.sort_unstable();
    let expected: Vec<u8> = (1..=93).filter(|n| !ABSENT.contains(n)).collect();
    assert_eq!(numbers, expected);

    for (idx, t) in all_types().iter().enumerate() {
        assert_eq!(index_of_ih(t.ih_number), Ok(idx));
    }
    for n in ABSENT.into_iter().chain([0, 94]) {
        assert_eq!(
            index_of_ih(n),
            Err(TilingError::UnknownIhNumber { number: n })
        );
    }
    // landmarks of the classification
    assert_eq!(type_data(index_of_ih(1).unwrap()).unwrap().symmetry_group, "p1");
    assert_eq!(type_data(index_of_ih(41).unwrap()).unwrap().vertex_config, "4.4.4.4");
    assert_eq!(type_data(index_of_ih(21).unwrap()).unwrap().vertex_config, "3.3.3.3.6");
    assert_eq!(type_data(index_of_ih(84).unwrap()).unwrap().symmetry_group, "p2");
}

#[test]
fn every_edge_class_occurs() {
    let mut classes = [0usize; 4];
    for t in all_types() {
        for s in t.edge_shapes {
            classes[*s as usize] += 1;
        }
        assert_eq!(t.edge_shape_string().len(), t.num_edge_shapes);
    }
    assert!(classes.iter().all(|&c| c > 0));
}
