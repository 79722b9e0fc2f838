//! Planar affine geometry for the tiling pipeline.
//!
//! Purpose
//! - One affine map type (`Affine2`, `x ↦ M x + t`) used for edge, aspect and
//!   placement transforms alike.
//! - Evaluation of the catalog's coefficient rows: every derived quantity is a
//!   dot product of a row with the parameter vector plus a trailing bias.
//! - The fixed sub-transforms applied on the canonical edge segment
//!   `(0,0) → (1,0)`: orientation flips and U/S half-edge maps.
//!
//! Code cross-refs: `tiling::IsohedralTiling::recompute`, `shape::PartIter`.

pub(crate) mod cfg;
mod eval;
mod types;

pub use cfg::EPS;
pub use eval::{eval_affine, eval_point, eval_scalar, half_transform, orientation};
pub use types::Affine2;

#[cfg(test)]
mod tests;
