//! Quad → slabs in lattice coordinates.

use nalgebra::{Matrix2, Vector2};
use tracing::debug;

use super::FillCfg;

/// Trapezoid `ymin <= y < ymax` between two quad edges, in lattice coordinates.
///
/// `xlo`/`xhi` are the boundary x-intercepts at `ymin`; `dxlo`/`dxhi` are their
/// change per unit `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slab {
    pub ymin: f64,
    pub ymax: f64,
    pub xlo: f64,
    pub dxlo: f64,
    pub xhi: f64,
    pub dxhi: f64,
}

impl Slab {
    /// Leftmost left boundary and rightmost right boundary over the cell row `[y, y + 1]`.
    #[inline]
    pub fn row_bounds(&self, y: f64) -> (f64, f64) {
        let dy = y - self.ymin;
        (
            self.xlo + self.dxlo * dy + self.dxlo.min(0.0),
            self.xhi + self.dxhi * dy + self.dxhi.max(0.0),
        )
    }
}

fn slope(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> f64 {
    let dy = b.y - a.y;
    if dy.abs() < eps {
        0.0
    } else {
        (b.x - a.x) / dy
    }
}

/// Corners in lattice coordinates, counterclockwise whenever the input was.
fn to_lattice(t1: Vector2<f64>, t2: Vector2<f64>, quad: [Vector2<f64>; 4]) -> [Vector2<f64>; 4] {
    let det = 1.0 / (t1.x * t2.y - t1.y * t2.x);
    let inv = Matrix2::new(t2.y * det, -t2.x * det, -t1.y * det, t1.x * det);
    let mut pts = quad.map(|p| inv * p);
    if det < 0.0 {
        pts.swap(1, 3);
    }
    pts
}

/// Single slab for a quad whose edges `a-b` and `c-d` are both horizontal.
fn flat_pair(
    mut a: Vector2<f64>,
    mut b: Vector2<f64>,
    mut c: Vector2<f64>,
    mut d: Vector2<f64>,
    eps: f64,
) -> Slab {
    if a.y > c.y {
        std::mem::swap(&mut a, &mut c);
        std::mem::swap(&mut b, &mut d);
    }
    if a.x > b.x {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut c, &mut d);
    }
    Slab {
        ymin: a.y,
        ymax: c.y + 1.0,
        xlo: a.x,
        dxlo: slope(a, d, eps),
        xhi: b.x,
        dxhi: slope(b, c, eps),
    }
}

/// `x` and slope of a y-monotone chain at height `y`.
fn chain_at(chain: &[Vector2<f64>], y: f64, eps: f64) -> (f64, f64) {
    for w in chain.windows(2) {
        let (a, b) = (w[0], w[1]);
        if b.y >= y - eps && b.y - a.y >= eps {
            let s = slope(a, b, eps);
            return (a.x + (y - a.y) * s, s);
        }
    }
    match chain.last() {
        Some(v) => (v.x, 0.0),
        None => (0.0, 0.0),
    }
}

/// General convex quad: split at the bottom and top corners into two monotone
/// chains, then cut the y range at every interior chain vertex.
fn monotone_slabs(pts: &[Vector2<f64>; 4], eps: f64) -> Vec<Slab> {
    let mut lowest = 0;
    let mut highest = 0;
    for (k, p) in pts.iter().enumerate() {
        if p.y < pts[lowest].y {
            lowest = k;
        }
        if p.y > pts[highest].y {
            highest = k;
        }
    }
    let walk = |step: usize| {
        let mut chain = vec![pts[lowest]];
        let mut k = lowest;
        while k != highest {
            k = (k + step) % 4;
            chain.push(pts[k]);
        }
        chain
    };
    let chain_a = walk(1);
    let chain_b = walk(3);

    let ylo = pts[lowest].y;
    let yhi = pts[highest].y;
    let mut levels: Vec<f64> = pts
        .iter()
        .map(|p| p.y)
        .filter(|&y| y > ylo + eps && y < yhi - eps)
        .collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup_by(|a, b| (*a - *b).abs() < eps);
    levels.insert(0, ylo);
    levels.push(yhi);

    let last = levels.len() - 2;
    let mut slabs = Vec::with_capacity(last + 1);
    for (k, w) in levels.windows(2).enumerate() {
        let (y0, y1) = (w[0], w[1]);
        let top = k == last;
        if !top && y1 - y0 < eps {
            continue;
        }
        let mid = 0.5 * (y0 + y1);
        let (xa, sa) = chain_at(&chain_a, mid, eps);
        let (xb, sb) = chain_at(&chain_b, mid, eps);
        let mut lo = (xa + sa * (y0 - mid), sa);
        let mut hi = (xb + sb * (y0 - mid), sb);
        // chains can meet at y0; order them where they are apart
        if xa > xb {
            std::mem::swap(&mut lo, &mut hi);
        }
        slabs.push(Slab {
            ymin: y0,
            ymax: if top { y1 + 1.0 } else { y1 },
            xlo: lo.0,
            dxlo: lo.1,
            xhi: hi.0,
            dxhi: hi.1,
        });
    }
    slabs
}

pub(super) fn decompose(
    t1: Vector2<f64>,
    t2: Vector2<f64>,
    quad: [Vector2<f64>; 4],
    cfg: &FillCfg,
) -> Vec<Slab> {
    let eps = cfg.eps;
    let pts = to_lattice(t1, t2, quad);
    let flat = |i: usize, j: usize| (pts[i].y - pts[j].y).abs() < eps;

    let slabs = if flat(0, 1) && flat(2, 3) {
        vec![flat_pair(pts[0], pts[1], pts[2], pts[3], eps)]
    } else if flat(1, 2) && flat(3, 0) {
        vec![flat_pair(pts[1], pts[2], pts[3], pts[0], eps)]
    } else {
        monotone_slabs(&pts, eps)
    };

    if cfg.debug {
        debug!(corners = ?pts, "fill corners in lattice coordinates");
        for (k, s) in slabs.iter().enumerate() {
            debug!(
                slab = k,
                ymin = s.ymin,
                ymax = s.ymax,
                xlo = s.xlo,
                dxlo = s.dxlo,
                xhi = s.xhi,
                dxhi = s.dxhi,
                "fill slab"
            );
        }
    }
    slabs
}
