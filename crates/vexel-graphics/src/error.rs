//! Error types for geometry, collision and model-file operations.
//!
//! Structural errors (wrong boundary point counts, mismatched path lengths,
//! malformed model files) are hard failures for the operation in progress.
//! Data-absence conditions during collision testing are recoverable and are
//! reported through the external error sink instead (see
//! [`crate::collision`]).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphicsError>;

#[derive(Error, Debug)]
pub enum GraphicsError {
    /// Two paths compared point-by-point had different command counts.
    /// The message carries both lengths.
    #[error("Path lengths differ\nPath 1 had a length of {first}, but path 2 had a length of {second}.")]
    PathLengthMismatch { first: usize, second: usize },

    /// A point set was used as a rectangular boundary without exactly 4
    /// points.
    #[error("The boundaries for a shape must only have 4 points, but {count} were given.")]
    BoundaryPointCount { count: usize },

    /// A collision test was attempted against a shape with no collision
    /// path. Recoverable: reported to the error sink, never propagated.
    #[error("Collision path for shape with id {id} is unset")]
    MissingCollisionPath { id: String },

    /// A model file line could not be parsed.
    #[error("Malformed model file at line {line}: {reason}")]
    ModelFormat { line: usize, reason: String },

    /// A model file's declared record count disagreed with its contents.
    #[error("Model file declared {declared} shapes, but {found} were found")]
    ModelCountMismatch { declared: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
