//! Lazy walk over the slabs of a `FillAlgorithm`.
//!
//! Order: aspects fastest, then x within a row, then rows, then slabs. Cells are
//! integer lattice coordinates held as integer-valued floats.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::{FillAlgorithm, Lattice};
use crate::geom::Affine2;
use crate::tiling::IsohedralTiling;

/// One placed copy of the tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Prototile → plane: aspect transform, then the lattice offset.
    pub transform: Affine2,
    pub t1: i64,
    pub t2: i64,
    pub aspect: usize,
}

/// Explicit fill position; compare against `FillAlgorithm::end()` to stop.
pub struct FillCursor<'f, L: Lattice + ?Sized = IsohedralTiling> {
    fill: &'f FillAlgorithm<'f, L>,
    slab: usize,
    x: f64,
    y: f64,
    xlo: f64,
    xhi: f64,
    aspect: usize,
    done: bool,
}

impl<'f, L: Lattice + ?Sized> FillCursor<'f, L> {
    pub(super) fn finished(fill: &'f FillAlgorithm<'f, L>) -> Self {
        Self {
            fill,
            slab: 0,
            x: 0.0,
            y: 0.0,
            xlo: 0.0,
            xhi: 0.0,
            aspect: 0,
            done: true,
        }
    }

    pub(super) fn first(fill: &'f FillAlgorithm<'f, L>) -> Self {
        let mut cursor = Self::finished(fill);
        if fill.lattice().num_aspects() == 0 {
            return cursor;
        }
        if let Some(s) = fill.slabs().first() {
            let y = s.ymin.floor();
            let (xlo, xhi) = s.row_bounds(y);
            cursor.y = y;
            cursor.xlo = xlo;
            cursor.xhi = xhi;
            cursor.x = xlo.floor();
            cursor.done = false;
        }
        cursor
    }

    /// Step to the next candidate placement. No-op once done.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }
        let slabs = self.fill.slabs();
        let eps = self.fill.cfg().eps;

        self.aspect += 1;
        if self.aspect < self.fill.lattice().num_aspects() {
            return;
        }
        self.aspect = 0;
        self.x += 1.0;
        if self.x < self.xhi + eps {
            return;
        }

        let s = slabs[self.slab];
        self.xlo += s.dxlo;
        self.xhi += s.dxhi;
        self.y += 1.0;
        self.x = self.xlo.floor();
        if self.y.floor() < s.ymax.floor() {
            return;
        }

        self.slab += 1;
        match slabs.get(self.slab) {
            Some(next) => {
                self.y = self.y.max(next.ymin.floor());
                let (xlo, xhi) = next.row_bounds(self.y);
                self.xlo = xlo;
                self.xhi = xhi;
                self.x = xlo.floor();
            }
            None => self.done = true,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Lattice column. Cells are exact up to `2^53`; beyond that `f64` cannot
    /// hold them and the fill is meaningless anyway.
    #[inline]
    pub fn t1(&self) -> i64 {
        self.x.floor() as i64
    }

    #[inline]
    pub fn t2(&self) -> i64 {
        self.y.floor() as i64
    }

    #[inline]
    pub fn aspect(&self) -> usize {
        self.aspect
    }

    #[inline]
    pub fn slab_index(&self) -> usize {
        self.slab
    }

    /// Placement transform, read from the lattice now. Meaningless once done.
    pub fn transform(&self) -> Affine2 {
        let lattice = self.fill.lattice();
        let offset = lattice.t1() * self.x.floor() + lattice.t2() * self.y.floor();
        lattice.aspect_transform(self.aspect).translated(offset)
    }

    pub fn placement(&self) -> Option<Placement> {
        if self.done {
            return None;
        }
        Some(Placement {
            transform: self.transform(),
            t1: self.t1(),
            t2: self.t2(),
            aspect: self.aspect,
        })
    }
}

impl<L: Lattice + ?Sized> Clone for FillCursor<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Lattice + ?Sized> Copy for FillCursor<'_, L> {}

impl<L: Lattice + ?Sized> PartialEq for FillCursor<'_, L> {
    fn eq(&self, other: &Self) -> bool {
        if self.done || other.done {
            return self.done && other.done;
        }
        let eps = self.fill.cfg().eps;
        ptr::eq(self.fill, other.fill)
            && self.slab == other.slab
            && (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && self.aspect == other.aspect
    }
}

impl<L: Lattice + ?Sized> fmt::Display for FillCursor<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.done {
            return write!(f, "fill cursor: done");
        }
        write!(
            f,
            "fill cursor: slab {}/{} cell ({}, {}) aspect {} row [{:.6}, {:.6}]",
            self.slab,
            self.fill.slabs().len(),
            self.x,
            self.y,
            self.aspect,
            self.xlo,
            self.xhi
        )
    }
}

impl<L: Lattice + ?Sized> fmt::Debug for FillCursor<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FillCursor")
            .field("slab", &self.slab)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("aspect", &self.aspect)
            .field("done", &self.done)
            .finish()
    }
}

/// `Iterator` over the placements of a fill.
pub struct FillIter<'f, L: Lattice + ?Sized = IsohedralTiling> {
    cursor: FillCursor<'f, L>,
}

impl<'f, L: Lattice + ?Sized> FillIter<'f, L> {
    pub(super) fn new(cursor: FillCursor<'f, L>) -> Self {
        Self { cursor }
    }
}

impl<L: Lattice + ?Sized> Iterator for FillIter<'_, L> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        let p = self.cursor.placement()?;
        self.cursor.advance();
        Some(p)
    }
}

impl<L: Lattice + ?Sized> FusedIterator for FillIter<'_, L> {}
