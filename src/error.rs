use thiserror::Error;

/// Top-level error type for the chipgeom kernel.
#[derive(Debug, Error)]
pub enum ChipgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to queries and conversions.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ChipgeomError`].
pub type Result<T> = std::result::Result<T, ChipgeomError>;
