//! The tiling engine: one selected type, its parameters, and the derived geometry.
//!
//! - `IsohedralTiling`: owns the type selector and parameter vector; every mutation
//!   recomputes vertices, edge transforms, aspect transforms and the lattice basis.
//! - `colour`: lattice-equivariant colouring of placed copies.
//! - Entry points into traversal (`shape`, `parts`) and region fill (`fill_region*`).
//!
//! Derived state is a pure function of `(type, parameters)`; there is no lazy or
//! partial recompute.

use nalgebra::Vector2;
use tracing::debug;

use crate::catalog::{self, EdgeShape, TilingTypeData, MAX_ASPECTS, MAX_PARAMS, MAX_VERTICES};
use crate::error::{Result, TilingError};
use crate::fill::{FillAlgorithm, FillCfg, Lattice};
use crate::geom::{eval_affine, eval_point, orientation, Affine2};
use crate::shape::{PartIter, ShapeIter};

/// A parametrised isohedral tiling of the plane.
#[derive(Clone, Debug)]
pub struct IsohedralTiling {
    tiling_type: usize,
    data: &'static TilingTypeData,
    params: [f64; MAX_PARAMS],
    verts: [Vector2<f64>; MAX_VERTICES],
    edges: [Affine2; MAX_VERTICES],
    reversed: [bool; MAX_VERTICES],
    aspects: [Affine2; MAX_ASPECTS],
    t1: Vector2<f64>,
    t2: Vector2<f64>,
}

impl IsohedralTiling {
    /// Tiling of type `tiling_type` at its default parameters.
    pub fn new(tiling_type: usize) -> Result<Self> {
        let data = catalog::type_data(tiling_type)?;
        let mut tiling = Self {
            tiling_type,
            data,
            params: [0.0; MAX_PARAMS],
            verts: [Vector2::zeros(); MAX_VERTICES],
            edges: [Affine2::identity(); MAX_VERTICES],
            reversed: [false; MAX_VERTICES],
            aspects: [Affine2::identity(); MAX_ASPECTS],
            t1: Vector2::zeros(),
            t2: Vector2::zeros(),
        };
        tiling.load_defaults();
        Ok(tiling)
    }

    /// Switch to `tiling_type` and reset to its default parameters.
    ///
    /// On error the tiling is left unchanged.
    pub fn reset(&mut self, tiling_type: usize) -> Result<()> {
        self.data = catalog::type_data(tiling_type)?;
        self.tiling_type = tiling_type;
        self.load_defaults();
        Ok(())
    }

    fn load_defaults(&mut self) {
        let np = self.data.num_params;
        self.params = [0.0; MAX_PARAMS];
        self.params[..np].copy_from_slice(self.data.default_params);
        debug!(
            tiling_type = self.tiling_type,
            group = self.data.symmetry_group,
            params = np,
            aspects = self.data.num_aspects,
            "tiling type selected"
        );
        self.recompute();
    }

    #[inline]
    pub fn tiling_type(&self) -> usize {
        self.tiling_type
    }

    /// Raw catalog record of the selected type.
    #[inline]
    pub fn type_data(&self) -> &'static TilingTypeData {
        self.data
    }

    #[inline]
    pub fn num_parameters(&self) -> usize {
        self.data.num_params
    }

    /// The stored parameter vector, exactly as last set.
    #[inline]
    pub fn parameters(&self) -> &[f64] {
        &self.params[..self.data.num_params]
    }

    /// Replace the parameter vector and recompute.
    ///
    /// `params.len()` must equal `num_parameters()`; otherwise nothing changes.
    pub fn set_parameters(&mut self, params: &[f64]) -> Result<()> {
        let expected = self.data.num_params;
        if params.len() != expected {
            return Err(TilingError::ParameterCount {
                expected,
                got: params.len(),
            });
        }
        self.params[..expected].copy_from_slice(params);
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        let data = self.data;
        let p = &self.params[..data.num_params];
        let stride = data.stride();
        let nv = data.num_vertices;

        for (k, v) in self.verts[..nv].iter_mut().enumerate() {
            *v = eval_point(&data.tiling_vertex_coeffs[2 * k * stride..], p);
        }
        for i in 0..nv {
            let (flip, rot) = data.edge_orientation(i);
            let fit = Affine2::match_segment(self.verts[i], self.verts[(i + 1) % nv]);
            self.edges[i] = fit * orientation(flip, rot);
            self.reversed[i] = flip ^ rot;
        }
        for (a, m) in self.aspects[..data.num_aspects].iter_mut().enumerate() {
            *m = eval_affine(&data.aspect_xform_coeffs[6 * a * stride..], p);
        }
        self.t1 = eval_point(&data.translation_vector_coeffs, p);
        self.t2 = eval_point(&data.translation_vector_coeffs[2 * stride..], p);
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.data.num_vertices
    }

    /// Tiling vertex `i`. Caller guarantees `i < num_vertices()`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vector2<f64> {
        self.verts[i]
    }

    /// Tile polygon, counterclockwise from the origin.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts[..self.data.num_vertices]
    }

    #[inline]
    pub fn num_edge_shapes(&self) -> usize {
        self.data.num_edge_shapes
    }

    pub fn edge_shape(&self, id: usize) -> Result<EdgeShape> {
        self.data
            .edge_shapes
            .get(id)
            .copied()
            .ok_or(TilingError::EdgeShapeOutOfRange {
                id,
                count: self.data.num_edge_shapes,
            })
    }

    /// Edge-shape id of tiling edge `edge`.
    #[inline]
    pub fn edge_shape_id(&self, edge: usize) -> usize {
        self.data.edge_shape_ids[edge]
    }

    /// Canonical segment → tiling edge `edge`, orientation included.
    #[inline]
    pub fn edge_transform(&self, edge: usize) -> Affine2 {
        self.edges[edge]
    }

    /// Whether the canonical curve runs from `v[edge + 1]` back to `v[edge]`.
    #[inline]
    pub fn is_edge_reversed(&self, edge: usize) -> bool {
        self.reversed[edge]
    }

    #[inline]
    pub fn num_aspects(&self) -> usize {
        self.data.num_aspects
    }

    /// Aspect `i`. Caller guarantees `i < num_aspects()`.
    #[inline]
    pub fn aspect_transform(&self, i: usize) -> Affine2 {
        self.aspects[i]
    }

    pub fn try_aspect_transform(&self, i: usize) -> Result<Affine2> {
        if i < self.data.num_aspects {
            Ok(self.aspects[i])
        } else {
            Err(TilingError::AspectOutOfRange {
                index: i,
                count: self.data.num_aspects,
            })
        }
    }

    #[inline]
    pub fn t1(&self) -> Vector2<f64> {
        self.t1
    }

    #[inline]
    pub fn t2(&self) -> Vector2<f64> {
        self.t2
    }

    #[inline]
    pub fn num_colours(&self) -> u8 {
        self.data.colour_count()
    }

    /// Colour of the copy at lattice offset `(t1, t2)` with aspect `aspect`.
    ///
    /// Caller guarantees `aspect < num_aspects()`.
    pub fn colour(&self, t1: i64, t2: i64, aspect: usize) -> u8 {
        let table = &self.data.colouring;
        let nc = i64::from(table[18]);
        let mut c = table[aspect];
        for _ in 0..t1.rem_euclid(nc) {
            c = table[12 + usize::from(c)];
        }
        for _ in 0..t2.rem_euclid(nc) {
            c = table[15 + usize::from(c)];
        }
        c
    }

    /// Whole edges of the tile, in boundary order.
    pub fn shape(&self) -> ShapeIter<'_> {
        ShapeIter::new(self)
    }

    /// Edges split into independently drawable parts (two for U and S edges).
    pub fn parts(&self) -> PartIter<'_> {
        PartIter::new(self)
    }

    /// Placements covering the convex quadrilateral `a b c d` (either winding).
    pub fn fill_region(
        &self,
        a: Vector2<f64>,
        b: Vector2<f64>,
        c: Vector2<f64>,
        d: Vector2<f64>,
    ) -> FillAlgorithm<'_> {
        FillAlgorithm::new(self, [a, b, c, d], FillCfg::default())
    }

    pub fn fill_region_with(&self, quad: [Vector2<f64>; 4], cfg: FillCfg) -> FillAlgorithm<'_> {
        FillAlgorithm::new(self, quad, cfg)
    }

    /// Axis-aligned shorthand for `fill_region`.
    pub fn fill_box(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> FillAlgorithm<'_> {
        self.fill_region(
            Vector2::new(xmin, ymin),
            Vector2::new(xmax, ymin),
            Vector2::new(xmax, ymax),
            Vector2::new(xmin, ymax),
        )
    }
}

impl Lattice for IsohedralTiling {
    fn t1(&self) -> Vector2<f64> {
        self.t1
    }

    fn t2(&self) -> Vector2<f64> {
        self.t2
    }

    fn num_aspects(&self) -> usize {
        self.data.num_aspects
    }

    fn aspect_transform(&self, index: usize) -> Affine2 {
        self.aspects[index]
    }
}

#[cfg(test)]
mod tests;
