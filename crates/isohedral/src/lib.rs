//! Isohedral tilings of the plane.
//!
//! One prototile, one of 81 isohedral tiling types, and a few continuous shape
//! parameters determine a periodic tiling. This crate computes the transforms
//! needed to draw the tile and its edges, enumerates the placed copies that
//! cover a convex viewing region, and colours them so that neighbours differ.
//!
//! Layout
//! - `geom`: `Affine2` and coefficient-row evaluation.
//! - `catalog`: the static table of tiling types.
//! - `tiling`: `IsohedralTiling`, the parametrised engine.
//! - `shape`: edge and half-edge traversal of the tile boundary.
//! - `fill`: slab decomposition of a region and the placement cursor.
//!
//! ```
//! use isohedral::IsohedralTiling;
//!
//! let tiling = IsohedralTiling::new(0).unwrap();
//! let fill = tiling.fill_box(-2.0, -2.0, 2.0, 2.0);
//! for p in &fill {
//!     let _colour = tiling.colour(p.t1, p.t2, p.aspect);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod fill;
pub mod geom;
pub mod shape;
pub mod tiling;

#[cfg(test)]
mod testutil;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use catalog::{all_types, index_of_ih, type_data, EdgeShape, TilingTypeData, NUM_TYPES};
pub use error::{Result, TilingError};
pub use fill::{FillAlgorithm, FillCfg, FillCursor, FillIter, Lattice, Placement, Slab};
pub use geom::Affine2;
pub use shape::{EdgeInfo, PartInfo, PartIter, ShapeIter};
pub use tiling::IsohedralTiling;

/// Common exports for drawing code.
pub mod prelude {
    pub use crate::catalog::EdgeShape;
    pub use crate::fill::{FillCfg, Lattice, Placement};
    pub use crate::geom::Affine2;
    pub use crate::tiling::IsohedralTiling;
    pub use nalgebra::Vector2 as Vec2;
}
