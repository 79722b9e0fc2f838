use super::*;
use nalgebra::{matrix, vector, Matrix2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

/// Bare lattice with caller-chosen basis and aspect count.
struct Grid {
    t1: Vector2<f64>,
    t2: Vector2<f64>,
    aspects: Vec<Affine2>,
}

impl Grid {
    fn new(t1: Vector2<f64>, t2: Vector2<f64>, num_aspects: usize) -> Self {
        let aspects = (0..num_aspects)
            .map(|k| Affine2::translation(vector![0.1 * k as f64, 0.0]))
            .collect();
        Self { t1, t2, aspects }
    }

    fn unit() -> Self {
        Self::new(vector![1.0, 0.0], vector![0.0, 1.0], 1)
    }
}

impl Lattice for Grid {
    fn t1(&self) -> Vector2<f64> {
        self.t1
    }
    fn t2(&self) -> Vector2<f64> {
        self.t2
    }
    fn num_aspects(&self) -> usize {
        self.aspects.len()
    }
    fn aspect_transform(&self, index: usize) -> Affine2 {
        self.aspects[index]
    }
}

fn boxed(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> [Vector2<f64>; 4] {
    [
        vector![xmin, ymin],
        vector![xmax, ymin],
        vector![xmax, ymax],
        vector![xmin, ymax],
    ]
}

fn cells<L: Lattice + ?Sized>(fill: &FillAlgorithm<'_, L>) -> Vec<(i64, i64, usize)> {
    fill.iter().map(|p| (p.t1, p.t2, p.aspect)).collect()
}

#[test]
fn unit_box_yields_twelve_cells_in_row_major_order() {
    let grid = Grid::unit();
    let fill = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 3.0, 2.0), FillCfg::default());
    assert_eq!(fill.slabs().len(), 1);
    let got = cells(&fill);
    let want: Vec<_> = (0..=2).flat_map(|y| (0..=3).map(move |x| (x, y, 0))).collect();
    assert_eq!(got, want);
}

#[test]
fn clockwise_box_decomposes_like_counterclockwise() {
    let grid = Grid::unit();
    let ccw = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 3.0, 2.0), FillCfg::default());
    let cw = FillAlgorithm::new(
        &grid,
        [
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![3.0, 2.0],
            vector![3.0, 0.0],
        ],
        FillCfg::default(),
    );
    assert_eq!(ccw.slabs(), cw.slabs());
    assert_eq!(
        cw.slabs()[0],
        Slab {
            ymin: 0.0,
            ymax: 3.0,
            xlo: 0.0,
            dxlo: 0.0,
            xhi: 3.0,
            dxhi: 0.0
        }
    );
}

#[test]
fn left_handed_basis_swaps_axes() {
    let grid = Grid::new(vector![0.0, 1.0], vector![1.0, 0.0], 1);
    let fill = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 3.0, 2.0), FillCfg::default());
    let got: HashSet<_> = cells(&fill).into_iter().map(|(a, b, _)| (a, b)).collect();
    let want: HashSet<_> = (0..=2).flat_map(|a| (0..=3).map(move |b| (a, b))).collect();
    assert_eq!(got, want);
    for p in &fill {
        let origin = p.transform.apply(vector![0.0, 0.0]);
        assert!((origin - vector![p.t2 as f64, p.t1 as f64]).norm() < 1e-12);
    }
}

fn to_lattice_coords(grid: &Grid, quad: &[Vector2<f64>; 4]) -> [Vector2<f64>; 4] {
    let basis = Matrix2::from_columns(&[grid.t1, grid.t2]);
    let inv = basis.try_inverse().unwrap();
    quad.map(|p| inv * p)
}

fn projections(pts: &[Vector2<f64>], n: Vector2<f64>) -> (f64, f64) {
    pts.iter()
        .map(|p| p.dot(&n))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Separating-axis test of cell `[i, i+1] x [j, j+1]` against a convex quad.
/// Cells that only touch the quad along its boundary do not count.
fn cell_overlaps_quad(quad: &[Vector2<f64>; 4], i: f64, j: f64) -> bool {
    let cell = boxed(i, j, i + 1.0, j + 1.0);
    for poly in [&cell, quad] {
        for k in 0..4 {
            let (a, b) = (poly[k], poly[(k + 1) % 4]);
            let n = vector![b.y - a.y, a.x - b.x];
            let (clo, chi) = projections(&cell, n);
            let (qlo, qhi) = projections(quad, n);
            if chi <= qlo + 1e-9 || qhi <= clo + 1e-9 {
                return false;
            }
        }
    }
    true
}

fn random_basis(rng: &mut StdRng) -> (Vector2<f64>, Vector2<f64>) {
    let a: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let la = rng.gen_range(0.3..2.0);
    let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    let b = a + sign * rng.gen_range(0.3..2.8);
    let lb = rng.gen_range(0.3..2.0);
    (
        vector![la * a.cos(), la * a.sin()],
        vector![lb * b.cos(), lb * b.sin()],
    )
}

/// Convex quad: a box, or four sorted points on a rotated ellipse; either winding.
fn random_quad(rng: &mut StdRng, kind: usize) -> [Vector2<f64>; 4] {
    let mut quad = if kind == 0 {
        let (x0, y0) = (rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let (w, h) = (rng.gen_range(0.05..6.0), rng.gen_range(0.05..6.0));
        boxed(x0, y0, x0 + w, y0 + h)
    } else {
        let c = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let (rx, ry) = (rng.gen_range(0.2..5.0), rng.gen_range(0.2..5.0));
        let rot: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let frame = matrix![rot.cos(), -rot.sin(); rot.sin(), rot.cos()];
        let mut angles = [0.0f64; 4];
        for a in angles.iter_mut() {
            *a = rng.gen_range(0.0..std::f64::consts::TAU);
        }
        angles.sort_by(f64::total_cmp);
        angles.map(|t| c + frame * vector![rx * t.cos(), ry * t.sin()])
    };
    if rng.gen::<bool>() {
        quad.reverse();
    }
    quad
}

#[test]
fn random_fills_cover_every_touched_cell_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for case in 0..400 {
        let (t1, t2) = random_basis(&mut rng);
        let grid = Grid::new(t1, t2, rng.gen_range(1..=3));
        let quad = random_quad(&mut rng, case % 3);
        let fill = FillAlgorithm::new(&grid, quad, FillCfg::default());
        assert!((1..=3).contains(&fill.slabs().len()), "case {case}");

        let got = cells(&fill);
        let seen: HashSet<_> = got.iter().copied().collect();
        assert_eq!(seen.len(), got.len(), "case {case}: duplicate placement");

        let lq = to_lattice_coords(&grid, &quad);
        let (xmin, xmax) = projections(&lq, vector![1.0, 0.0]);
        let (ymin, ymax) = projections(&lq, vector![0.0, 1.0]);
        for i in (xmin.floor() as i64 - 2)..=(xmax.ceil() as i64 + 2) {
            for j in (ymin.floor() as i64 - 2)..=(ymax.ceil() as i64 + 2) {
                if !cell_overlaps_quad(&lq, i as f64, j as f64) {
                    continue;
                }
                for a in 0..grid.num_aspects() {
                    assert!(seen.contains(&(i, j, a)), "case {case}: missed ({i}, {j}, {a})");
                }
            }
        }
    }
}

/// Strictly convex quad with integer corners in `[-4, 4]^2`, in either winding.
fn integer_quad(rng: &mut StdRng) -> [Vector2<f64>; 4] {
    loop {
        let quad: [Vector2<f64>; 4] = std::array::from_fn(|_| {
            vector![
                f64::from(rng.gen_range(-4..=4)),
                f64::from(rng.gen_range(-4..=4))
            ]
        });
        let turns: Vec<f64> = (0..4)
            .map(|k| {
                let (a, b, c) = (quad[k], quad[(k + 1) % 4], quad[(k + 2) % 4]);
                (b - a).perp(&(c - b))
            })
            .collect();
        if turns.iter().all(|&t| t > 0.0) || turns.iter().all(|&t| t < 0.0) {
            return quad;
        }
    }
}

#[test]
fn integer_corner_quads_cover_every_overlapped_cell() {
    let grid = Grid::unit();
    let mut rng = StdRng::seed_from_u64(3);
    for case in 0..5000 {
        let quad = integer_quad(&mut rng);
        let fill = FillAlgorithm::new(&grid, quad, FillCfg::default());
        let got = cells(&fill);
        let seen: HashSet<_> = got.iter().copied().collect();
        assert_eq!(seen.len(), got.len(), "case {case}: duplicate placement");
        for i in -5..5 {
            for j in -5..5 {
                if cell_overlaps_quad(&quad, i as f64, j as f64) {
                    assert!(
                        seen.contains(&(i, j, 0)),
                        "case {case} {quad:?}: missed ({i}, {j})"
                    );
                }
            }
        }
    }
}

#[test]
fn slab_walk_is_bounded() {
    let mut rng = StdRng::seed_from_u64(11);
    for case in 0..200 {
        let (t1, t2) = random_basis(&mut rng);
        let grid = Grid::new(t1, t2, rng.gen_range(1..=3));
        let fill = FillAlgorithm::new(&grid, random_quad(&mut rng, case % 3), FillCfg::default());
        let slabs = fill.slabs();
        let (Some(first), Some(last)) = (slabs.first(), slabs.last()) else {
            continue;
        };
        let rows = last.ymax.floor() - first.ymin.floor() + 1.0 + slabs.len() as f64;
        let width = slabs
            .iter()
            .flat_map(|s| [s.row_bounds(s.ymin.floor()), s.row_bounds(s.ymax.floor())])
            .map(|(lo, hi)| hi - lo)
            .fold(0.0, f64::max);
        let bound = rows * (width + 3.0) * grid.num_aspects() as f64;
        assert!((fill.iter().count() as f64) <= bound, "case {case}");
    }
}

#[test]
fn cursor_walk_matches_iterator() {
    let grid = Grid::new(vector![1.0, 0.2], vector![-0.3, 0.9], 2);
    let fill = FillAlgorithm::new(&grid, boxed(-1.5, -1.0, 2.0, 1.5), FillCfg::default());
    let end = fill.end();
    let mut cursor = fill.begin();
    let mut walked = Vec::new();
    while cursor != end {
        walked.push(cursor.placement().unwrap());
        cursor.advance();
    }
    let iterated: Vec<_> = fill.iter().collect();
    assert_eq!(walked, iterated);
    assert!(cursor.is_done());
    assert!(cursor.placement().is_none());
    cursor.advance();
    assert!(cursor.is_done());
}

#[test]
fn cursor_equality_needs_the_same_fill() {
    let grid = Grid::unit();
    let a = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 3.0, 2.0), FillCfg::default());
    let b = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 3.0, 2.0), FillCfg::default());
    assert_eq!(a.begin(), a.begin());
    assert_ne!(a.begin(), b.begin());
    assert_eq!(a.end(), b.end());
    assert_ne!(a.begin(), a.end());

    let mut c = a.begin();
    let copy = c;
    c.advance();
    assert_ne!(c, copy);
    assert_eq!((c.t1(), c.t2(), c.aspect(), c.slab_index()), (1, 0, 0, 0));
}

#[test]
fn placements_offset_the_aspect_transform() {
    let grid = Grid::new(vector![2.0, 0.0], vector![0.5, 1.5], 3);
    let fill = FillAlgorithm::new(&grid, boxed(-2.0, -2.0, 2.0, 2.0), FillCfg::default());
    for p in &fill {
        let offset = grid.t1 * p.t1 as f64 + grid.t2 * p.t2 as f64;
        assert_eq!(p.transform, grid.aspects[p.aspect].translated(offset));
    }
}

#[test]
fn far_regions_keep_lattice_coordinates_past_i32() {
    let grid = Grid::unit();
    let (x0, y0) = (3.0e9, -5.0e9);
    let fill = FillAlgorithm::new(&grid, boxed(x0, y0, x0 + 2.0, y0 + 1.0), FillCfg::default());
    let got: HashSet<_> = cells(&fill).into_iter().map(|(a, b, _)| (a, b)).collect();
    for cell in [(3_000_000_000, -5_000_000_000), (3_000_000_001, -5_000_000_000)] {
        assert!(got.contains(&cell), "missing {cell:?} in {got:?}");
    }
    assert!(got
        .iter()
        .all(|&(a, b)| (3_000_000_000..=3_000_000_002).contains(&a)
            && (-5_000_000_000..=-4_999_999_999).contains(&b)));
}

#[test]
fn empty_lattice_yields_nothing() {
    let grid = Grid::new(vector![1.0, 0.0], vector![0.0, 1.0], 0);
    let fill = FillAlgorithm::new(&grid, boxed(0.0, 0.0, 1.0, 1.0), FillCfg::default());
    assert!(fill.begin().is_done());
    assert_eq!(fill.begin(), fill.end());
    assert_eq!(fill.iter().count(), 0);
    assert_eq!(fill.end().to_string(), "fill cursor: done");
}

#[test]
fn debug_flag_does_not_change_the_decomposition() {
    let grid = Grid::new(vector![1.0, 0.4], vector![-0.2, 1.1], 1);
    let quad = boxed(-1.0, -1.0, 2.0, 3.0);
    let quiet = FillAlgorithm::new(&grid, quad, FillCfg::default());
    let loud = FillAlgorithm::new(
        &grid,
        quad,
        FillCfg {
            debug: true,
            ..FillCfg::default()
        },
    );
    assert_eq!(quiet.slabs(), loud.slabs());
    assert!(loud.begin().to_string().starts_with("fill cursor: slab 0/3"));
}

#[test]
fn tiling_box_fill_covers_the_box() {
    let tiling = IsohedralTiling::new(20).unwrap();
    let fill = tiling.fill_box(-3.0, -2.0, 4.0, 5.0);
    let placements: Vec<_> = fill.iter().collect();
    assert!(!placements.is_empty());
    let per_cell = placements.len() % tiling.num_aspects();
    assert_eq!(per_cell, 0);
    let a = tiling.fill_region(
        vector![-3.0, -2.0],
        vector![4.0, -2.0],
        vector![4.0, 5.0],
        vector![-3.0, 5.0],
    );
    assert_eq!(a.slabs(), fill.slabs());
}
