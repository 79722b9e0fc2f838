//! Shared helpers for unit tests: sample edge curves, boundary tracing, a
//! coarse spatial hash for point matching and perturbed parameter vectors.

use std::collections::HashMap;

use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::catalog::{EdgeShape, TilingTypeData};
use crate::geom::Affine2;
use crate::tiling::IsohedralTiling;

/// Defaults of `data`, then `count` vectors with every entry moved by up to 0.05.
/// Types without parameters give the defaults only.
pub fn perturbed_params(data: &TilingTypeData, count: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut out = vec![data.default_params.to_vec()];
    if data.num_params == 0 {
        return out;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        out.push(
            data.default_params
                .iter()
                .map(|p| p + rng.gen_range(-0.05..0.05))
                .collect(),
        );
    }
    out
}

/// Canonical curve for one edge shape, `(0,0)` to `(1,0)`.
///
/// U and S get half-curves; the part transforms complete them.
pub fn sample_curve(shape: EdgeShape, id: usize) -> Vec<Vector2<f64>> {
    let k = id as f64;
    match shape {
        EdgeShape::J => vec![
            vector![0.0, 0.0],
            vector![0.3, 0.12 + 0.03 * k],
            vector![0.7, -0.07],
            vector![1.0, 0.0],
        ],
        EdgeShape::U => vec![vector![0.0, 0.0], vector![0.5, 0.15 + 0.02 * k], vector![1.0, 0.0]],
        EdgeShape::S => vec![vector![0.0, 0.0], vector![0.4, 0.1 + 0.02 * k], vector![1.0, 0.0]],
        EdgeShape::I => vec![vector![0.0, 0.0], vector![1.0, 0.0]],
    }
}

/// Tile boundary in prototile coordinates, one polyline per part, in drawing order.
pub fn trace_boundary(tiling: &IsohedralTiling) -> Vec<Vec<Vector2<f64>>> {
    tiling
        .parts()
        .map(|part| {
            let mut pts: Vec<_> = sample_curve(part.shape, part.id)
                .into_iter()
                .map(|p| part.transform.apply(p))
                .collect();
            if part.reversed {
                pts.reverse();
            }
            pts
        })
        .collect()
}

pub fn centroid(pts: &[Vector2<f64>]) -> Vector2<f64> {
    pts.iter().sum::<Vector2<f64>>() / pts.len() as f64
}

pub fn close(a: Vector2<f64>, b: Vector2<f64>, tol: f64) -> bool {
    (a - b).norm() < tol
}

/// Points tagged with an owner index, bucketed on a fixed grid.
#[derive(Default)]
pub struct PointIndex {
    cells: HashMap<(i64, i64), Vec<(Vector2<f64>, usize)>>,
}

const CELL: f64 = 1e-3;

fn key(p: Vector2<f64>) -> (i64, i64) {
    ((p.x / CELL).floor() as i64, (p.y / CELL).floor() as i64)
}

impl PointIndex {
    pub fn insert(&mut self, p: Vector2<f64>, owner: usize) {
        self.cells.entry(key(p)).or_default().push((p, owner));
    }

    /// Distinct owners other than `skip` with a point within `tol` of `p`.
    pub fn owners_near(&self, p: Vector2<f64>, tol: f64, skip: usize) -> Vec<usize> {
        let (kx, ky) = key(p);
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = self.cells.get(&(kx + dx, ky + dy)) else {
                    continue;
                };
                for &(q, owner) in bucket {
                    if owner != skip && close(p, q, tol) && !out.contains(&owner) {
                        out.push(owner);
                    }
                }
            }
        }
        out
    }
}

/// Map every point through `m`.
pub fn mapped(m: &Affine2, pts: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    pts.iter().map(|&p| m.apply(p)).collect()
}
