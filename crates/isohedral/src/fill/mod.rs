//! Region fill: every placed copy of the tile that may touch a convex quadrilateral.
//!
//! The quad is mapped into lattice coordinates (where `t1`, `t2` are the unit
//! axes) and cut into at most three horizontal slabs bounded by one quad edge
//! on each side. A cursor then walks the slabs row by row over integer cells,
//! yielding every aspect of every candidate cell.
//!
//! - `Lattice`: the two basis vectors and aspect transforms the fill needs.
//! - `FillAlgorithm`: the slab decomposition; produces cursors and iterators.
//! - `FillCursor` / `FillIter`: explicit cursor with equality, and its `Iterator` form.

use nalgebra::Vector2;

use crate::geom::{Affine2, EPS};
use crate::tiling::IsohedralTiling;

mod cursor;
mod region;

pub use cursor::{FillCursor, FillIter, Placement};
pub use region::Slab;

/// Periodic structure consumed by the region fill.
pub trait Lattice {
    fn t1(&self) -> Vector2<f64>;
    fn t2(&self) -> Vector2<f64>;
    fn num_aspects(&self) -> usize;
    /// Caller guarantees `index < num_aspects()`.
    fn aspect_transform(&self, index: usize) -> Affine2;
}

/// Fill configuration.
#[derive(Clone, Copy, Debug)]
pub struct FillCfg {
    /// Absolute tolerance for flat-edge tests, row ends and cursor equality.
    pub eps: f64,
    /// Log mapped corners and slabs at `debug` level.
    pub debug: bool,
}

impl Default for FillCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            debug: false,
        }
    }
}

/// Slab decomposition of one quad over one lattice.
#[derive(Debug)]
pub struct FillAlgorithm<'a, L: Lattice + ?Sized = IsohedralTiling> {
    lattice: &'a L,
    slabs: Vec<Slab>,
    cfg: FillCfg,
}

impl<'a, L: Lattice + ?Sized> FillAlgorithm<'a, L> {
    /// Decompose the convex quad `quad` (either winding) over `lattice`.
    pub fn new(lattice: &'a L, quad: [Vector2<f64>; 4], cfg: FillCfg) -> Self {
        let slabs = region::decompose(lattice.t1(), lattice.t2(), quad, &cfg);
        Self {
            lattice,
            slabs,
            cfg,
        }
    }

    #[inline]
    pub fn lattice(&self) -> &'a L {
        self.lattice
    }

    #[inline]
    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    #[inline]
    pub fn cfg(&self) -> &FillCfg {
        &self.cfg
    }

    /// Cursor at the first candidate placement; done if there are no slabs.
    pub fn begin(&self) -> FillCursor<'_, L> {
        FillCursor::first(self)
    }

    /// The past-the-end cursor.
    pub fn end(&self) -> FillCursor<'_, L> {
        FillCursor::finished(self)
    }

    pub fn iter(&self) -> FillIter<'_, L> {
        FillIter::new(self.begin())
    }
}

impl<'f, 'a: 'f, L: Lattice + ?Sized> IntoIterator for &'f FillAlgorithm<'a, L> {
    type Item = Placement;
    type IntoIter = FillIter<'f, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
