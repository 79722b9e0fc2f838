//! Error type shared by the checked entry points.

use thiserror::Error;

/// Result alias for tiling operations.
pub type Result<T> = std::result::Result<T, TilingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// Type selector outside the catalog.
    #[error("unknown tiling type {index} (catalog has {count})")]
    UnknownType { index: usize, count: usize },

    /// IH number outside `1..=93`, or one of the types without a catalog entry.
    #[error("no catalog entry for isohedral type IH{number}")]
    UnknownIhNumber { number: u8 },

    /// Parameter vector length differs from the type's parameter count.
    #[error("tiling type expects {expected} parameters, got {got}")]
    ParameterCount { expected: usize, got: usize },

    #[error("edge shape id {id} out of range (type has {count})")]
    EdgeShapeOutOfRange { id: usize, count: usize },

    #[error("aspect {index} out of range (type has {count})")]
    AspectOutOfRange { index: usize, count: usize },
}
