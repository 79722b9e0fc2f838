//! Coefficient-row evaluation and the fixed canonical-segment transforms.
//!
//! A coefficient row for `n` parameters has `n + 1` entries: one weight per
//! parameter followed by the affine bias.

use nalgebra::{Matrix2, Vector2};

use super::types::Affine2;
use crate::catalog::EdgeShape;

/// `row[..n] · params + row[n]` with `n = params.len()`.
#[inline]
pub fn eval_scalar(row: &[f64], params: &[f64]) -> f64 {
    let np = params.len();
    debug_assert!(row.len() > np, "coefficient row too short");
    let dot: f64 = row[..np].iter().zip(params).map(|(c, p)| c * p).sum();
    dot + row[np]
}

/// Two consecutive rows → `(x, y)`.
#[inline]
pub fn eval_point(rows: &[f64], params: &[f64]) -> Vector2<f64> {
    let stride = params.len() + 1;
    Vector2::new(
        eval_scalar(&rows[..stride], params),
        eval_scalar(&rows[stride..2 * stride], params),
    )
}

/// Six consecutive rows → affine map, in row-major `m00 m01 tx m10 m11 ty` order.
pub fn eval_affine(rows: &[f64], params: &[f64]) -> Affine2 {
    let stride = params.len() + 1;
    let mut v = [0.0; 6];
    for (k, out) in v.iter_mut().enumerate() {
        *out = eval_scalar(&rows[k * stride..(k + 1) * stride], params);
    }
    Affine2 {
        m: Matrix2::new(v[0], v[1], v[3], v[4]),
        t: Vector2::new(v[2], v[5]),
    }
}

/// Orientation applied on the canonical segment before matching it to a tiling edge.
///
/// | flip | rot | map        |
/// |------|-----|------------|
/// | no   | no  | identity   |
/// | no   | yes | `(1-x, -y)`|
/// | yes  | no  | `(1-x, y)` |
/// | yes  | yes | `(x, -y)`  |
pub fn orientation(flip: bool, rot: bool) -> Affine2 {
    match (flip, rot) {
        (false, false) => Affine2::identity(),
        (false, true) => Affine2::new(Matrix2::new(-1.0, 0.0, 0.0, -1.0), Vector2::new(1.0, 0.0)),
        (true, false) => Affine2::new(Matrix2::new(-1.0, 0.0, 0.0, 1.0), Vector2::new(1.0, 0.0)),
        (true, true) => Affine2::new(Matrix2::new(1.0, 0.0, 0.0, -1.0), Vector2::zeros()),
    }
}

/// Map of a caller's half-curve onto half `index` (0 or 1) of a U or S edge.
///
/// Half 0 covers local `[0, 0.5]`; half 1 covers `[0.5, 1]` and lands its local
/// `(1,0)` on the midpoint. U halves mirror across `x = 0.5`, S halves rotate
/// by 180° about `(0.5, 0)`. J and I edges have no halves and map to identity.
pub fn half_transform(shape: EdgeShape, index: usize) -> Affine2 {
    let first = index == 0;
    match shape {
        EdgeShape::U | EdgeShape::S if first => {
            Affine2::new(Matrix2::new(0.5, 0.0, 0.0, 0.5), Vector2::zeros())
        }
        EdgeShape::U => Affine2::new(Matrix2::new(-0.5, 0.0, 0.0, 0.5), Vector2::new(1.0, 0.0)),
        EdgeShape::S => Affine2::new(Matrix2::new(-0.5, 0.0, 0.0, -0.5), Vector2::new(1.0, 0.0)),
        EdgeShape::J | EdgeShape::I => Affine2::identity(),
    }
}
