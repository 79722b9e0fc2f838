//! Boundary traversal of the prototile.
//!
//! `ShapeIter` walks whole tiling edges; `PartIter` splits U and S edges into
//! two halves so a caller supplying one half-curve can draw the full edge.
//! Part 1 of a split edge is reported reversed: drawn from its local end, it
//! starts at the edge midpoint where part 0 stopped.

use std::iter::FusedIterator;

use crate::catalog::EdgeShape;
use crate::geom::{half_transform, Affine2};
use crate::tiling::IsohedralTiling;

/// One tiling edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeInfo {
    /// Position along the tile boundary.
    pub index: usize,
    /// Edge-shape id; edges sharing an id carry the same curve.
    pub id: usize,
    pub shape: EdgeShape,
    pub transform: Affine2,
    pub reversed: bool,
}

fn edge_info(tiling: &IsohedralTiling, index: usize) -> EdgeInfo {
    let id = tiling.edge_shape_id(index);
    EdgeInfo {
        index,
        id,
        shape: tiling.type_data().edge_shapes[id],
        transform: tiling.edge_transform(index),
        reversed: tiling.is_edge_reversed(index),
    }
}

/// Iterator over the tiling edges, both ends supported.
#[derive(Clone, Debug)]
pub struct ShapeIter<'a> {
    tiling: &'a IsohedralTiling,
    front: usize,
    back: usize,
}

impl<'a> ShapeIter<'a> {
    pub(crate) fn new(tiling: &'a IsohedralTiling) -> Self {
        Self {
            tiling,
            front: 0,
            back: tiling.num_vertices(),
        }
    }
}

impl Iterator for ShapeIter<'_> {
    type Item = EdgeInfo;

    fn next(&mut self) -> Option<EdgeInfo> {
        if self.front >= self.back {
            return None;
        }
        let info = edge_info(self.tiling, self.front);
        self.front += 1;
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for ShapeIter<'_> {
    fn next_back(&mut self) -> Option<EdgeInfo> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(edge_info(self.tiling, self.back))
    }
}

impl ExactSizeIterator for ShapeIter<'_> {}
impl FusedIterator for ShapeIter<'_> {}

/// One drawable piece of a tiling edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartInfo {
    /// Tiling edge this part belongs to.
    pub edge: usize,
    pub id: usize,
    pub shape: EdgeShape,
    /// Canonical segment → this part, half transform included.
    pub transform: Affine2,
    /// Draw the canonical curve from `(1,0)` back to `(0,0)`.
    pub reversed: bool,
    /// 0 or 1; always 0 for J and I edges.
    pub part: usize,
}

impl PartInfo {
    #[inline]
    pub fn is_second_part(&self) -> bool {
        self.part == 1
    }
}

/// Iterator over edge parts in boundary order.
#[derive(Clone, Debug)]
pub struct PartIter<'a> {
    tiling: &'a IsohedralTiling,
    edge: usize,
    part: usize,
}

impl<'a> PartIter<'a> {
    pub(crate) fn new(tiling: &'a IsohedralTiling) -> Self {
        Self {
            tiling,
            edge: 0,
            part: 0,
        }
    }

    fn shape_of(&self, edge: usize) -> EdgeShape {
        self.tiling.type_data().edge_shapes[self.tiling.edge_shape_id(edge)]
    }
}

impl Iterator for PartIter<'_> {
    type Item = PartInfo;

    fn next(&mut self) -> Option<PartInfo> {
        if self.edge >= self.tiling.num_vertices() {
            return None;
        }
        let edge = edge_info(self.tiling, self.edge);
        let info = match edge.shape {
            EdgeShape::J | EdgeShape::I => {
                self.edge += 1;
                PartInfo {
                    edge: edge.index,
                    id: edge.id,
                    shape: edge.shape,
                    transform: edge.transform,
                    reversed: edge.reversed,
                    part: 0,
                }
            }
            EdgeShape::U | EdgeShape::S => {
                let part = self.part;
                let half = if edge.reversed { 1 - part } else { part };
                if part == 0 {
                    self.part = 1;
                } else {
                    self.part = 0;
                    self.edge += 1;
                }
                PartInfo {
                    edge: edge.index,
                    id: edge.id,
                    shape: edge.shape,
                    transform: edge.transform * half_transform(edge.shape, half),
                    reversed: part == 1,
                    part,
                }
            }
        };
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let nv = self.tiling.num_vertices();
        let n = (self.edge..nv).map(|e| self.shape_of(e).num_parts()).sum::<usize>() - self.part;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PartIter<'_> {}
impl FusedIterator for PartIter<'_> {}

#[cfg(test)]
mod tests;
