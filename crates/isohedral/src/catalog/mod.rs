//! The 81 isohedral tiling types as immutable coefficient tables.
//!
//! Every type is described by the same record shape: structural counts, per-edge
//! shape ids and orientation flags, default parameters, and three coefficient
//! tables (tiling vertices, aspect transforms, lattice basis vectors). Rows hold
//! `num_params` weights followed by one affine bias; see `geom::eval_scalar`.
//!
//! Ordering: types are grouped by the Laves topology of the underlying tiling
//! (hexagons first, down to triangles), then by wallpaper group, then by
//! decreasing parameter count. Indices are stable. `ih_number` gives the
//! Grünbaum–Shephard number of each entry and `index_of_ih` inverts it. IH19, 35,
//! 48, 60, 63, 65, 70, 75, 80, 87, 89 and 92 have no entry.
//!
//! Conventions baked into the tables
//! - Vertex 0 sits at the origin and vertex 1 at `x = 1`.
//! - The tile boundary runs counterclockwise.
//! - Aspect 0 is the identity; every aspect lies in the lattice cell of aspect 0.
//! - `det(t1, t2) > 0`.

use std::fmt;

use crate::error::TilingError;

mod table;

/// Number of tiling types in the catalog.
pub const NUM_TYPES: usize = 81;
/// Upper bounds over all types.
pub const MAX_PARAMS: usize = 6;
pub const MAX_VERTICES: usize = 6;
pub const MAX_ASPECTS: usize = 12;

/// Symmetry class of one edge shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeShape {
    /// No symmetry: any curve from `(0,0)` to `(1,0)`.
    J,
    /// Mirror-symmetric about the perpendicular bisector.
    U,
    /// Point-symmetric about the midpoint.
    S,
    /// Straight segment.
    I,
}

impl EdgeShape {
    /// Traversal parts contributed by one edge of this class.
    #[inline]
    pub fn num_parts(self) -> usize {
        match self {
            EdgeShape::J | EdgeShape::I => 1,
            EdgeShape::U | EdgeShape::S => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            EdgeShape::J => 'J',
            EdgeShape::U => 'U',
            EdgeShape::S => 'S',
            EdgeShape::I => 'I',
        }
    }
}

impl fmt::Display for EdgeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Immutable description of one tiling type.
#[derive(Debug)]
pub struct TilingTypeData {
    pub num_params: usize,
    pub num_aspects: usize,
    pub num_vertices: usize,
    pub num_edge_shapes: usize,
    /// Indexed by edge-shape id.
    pub edge_shapes: &'static [EdgeShape],
    /// Two flags per tiling edge: `(flip, rot)`.
    pub edge_orientations: &'static [bool],
    /// Edge-shape id of each tiling edge.
    pub edge_shape_ids: &'static [usize],
    pub default_params: &'static [f64],
    /// Two rows per vertex.
    pub tiling_vertex_coeffs: &'static [f64],
    /// Four rows: `t1.x, t1.y, t2.x, t2.y`.
    pub translation_vector_coeffs: &'static [f64],
    /// Six rows per aspect.
    pub aspect_xform_coeffs: &'static [f64],
    /// `[0..12)` base colour per aspect, `[12..15)` t1 permutation,
    /// `[15..18)` t2 permutation, `[18]` colour count.
    pub colouring: [u8; 19],
    /// Wallpaper group in crystallographic notation.
    pub symmetry_group: &'static str,
    /// Laves vertex configuration of the topology, e.g. `"4.8.8"`.
    pub vertex_config: &'static str,
    /// Grünbaum–Shephard isohedral type number, `IH1..=IH93`.
    pub ih_number: u8,
}

impl TilingTypeData {
    /// `(flip, rot)` flags of tiling edge `edge`.
    #[inline]
    pub fn edge_orientation(&self, edge: usize) -> (bool, bool) {
        (
            self.edge_orientations[2 * edge],
            self.edge_orientations[2 * edge + 1],
        )
    }

    #[inline]
    pub fn colour_count(&self) -> u8 {
        self.colouring[18]
    }

    /// Edge classes of every edge shape as a compact string, e.g. `"SJS"`.
    pub fn edge_shape_string(&self) -> String {
        self.edge_shapes.iter().map(|s| s.as_char()).collect()
    }

    /// Coefficient row stride.
    #[inline]
    pub(crate) fn stride(&self) -> usize {
        self.num_params + 1
    }
}

/// The type descriptor at `index`.
pub fn type_data(index: usize) -> Result<&'static TilingTypeData, TilingError> {
    table::TILING_TYPES
        .get(index)
        .ok_or(TilingError::UnknownType {
            index,
            count: NUM_TYPES,
        })
}

/// Catalog index of isohedral type `IH<number>`.
pub fn index_of_ih(number: u8) -> Result<usize, TilingError> {
    table::TILING_TYPES
        .iter()
        .position(|t| t.ih_number == number)
        .ok_or(TilingError::UnknownIhNumber { number })
}

/// All type descriptors, in catalog order.
pub fn all_types() -> &'static [TilingTypeData] {
    &table::TILING_TYPES
}

#[cfg(test)]
mod tests;
