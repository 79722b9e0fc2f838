//! The 2D affine map shared by edges, aspects and placements.
//!
//! - `Affine2`: `x ↦ M x + t`, composable with `*` (right operand applied first).
//! - Conversions to and from homogeneous 3×3 matrices for renderers that
//!   expect a column-major `[a c tx; b d ty; 0 0 1]` layout.

use std::ops::Mul;

use nalgebra::{Matrix2, Matrix3, Vector2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn new(m: Matrix2<f64>, t: Vector2<f64>) -> Self {
        Self { m, t }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }

    /// The orientation-preserving similarity carrying `(0,0) → p` and `(1,0) → q`.
    #[inline]
    pub fn match_segment(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        let d = q - p;
        Self {
            m: Matrix2::new(d.x, -d.y, d.y, d.x),
            t: p,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// Linear part only (directions, lattice steps).
    #[inline]
    pub fn apply_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.m * v
    }

    /// `self ∘ rhs`.
    #[inline]
    pub fn compose(&self, rhs: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * rhs.m,
            t: self.m * rhs.t + self.t,
        }
    }

    /// Post-translate by `v` (translation column offset).
    #[inline]
    pub fn translated(&self, v: Vector2<f64>) -> Affine2 {
        Affine2 {
            m: self.m,
            t: self.t + v,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }

    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.m[(0, 0)],
            self.m[(0, 1)],
            self.t.x,
            self.m[(1, 0)],
            self.m[(1, 1)],
            self.t.y,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Drops the projective row; callers pass affine matrices only.
    pub fn from_homogeneous(h: &Matrix3<f64>) -> Self {
        Self {
            m: Matrix2::new(h[(0, 0)], h[(0, 1)], h[(1, 0)], h[(1, 1)]),
            t: Vector2::new(h[(0, 2)], h[(1, 2)]),
        }
    }

    /// Row-major `[m00, m01, tx, m10, m11, ty]`, the layout of the catalog's aspect rows.
    pub fn to_rows(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(0, 1)],
            self.t.x,
            self.m[(1, 0)],
            self.m[(1, 1)],
            self.t.y,
        ]
    }
}

impl Mul for Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: Affine2) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Mul<&Affine2> for &Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: &Affine2) -> Self::Output {
        self.compose(rhs)
    }
}
