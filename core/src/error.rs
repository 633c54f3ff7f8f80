//! Errors raised while outlining hexagonal regions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter was out of range, e.g. a non-positive radius or
    /// a corner index outside of `[0,5]`. Always a caller mistake.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The boundary edges of a region do not form exactly one closed
    /// loop, e.g. because the region consists of several disconnected
    /// groups of tiles or encloses a hole.
    #[error("disjoint boundary: {0}")]
    DisjointBoundary(String),
}

pub type Result<T> = std::result::Result<T, Error>;
