use thiserror::Error;

/// Error type for the **isohedral-tiles** library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    #[error("malformed boundary word: {0}")]
    MalformedBoundary(String),
    #[error("boundary word too long: {len} letters (max {max})")]
    BoundaryTooLong { len: usize, max: usize },
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolated(String),
    #[error("tiling generator exceeded its budget")]
    GeneratorBudgetExceeded,
}
