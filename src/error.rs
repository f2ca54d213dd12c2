use thiserror::Error;

/// Top-level error type for the geoprim kernel.
#[derive(Debug, Error)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric constructions.
///
/// Every failure in this crate is detected at construction time; no
/// partially built shape is ever returned.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
