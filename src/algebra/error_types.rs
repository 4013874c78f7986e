use crate::algebra::SegmentShape;
use thiserror::Error;

/// Error type returned by element access on the symmetric containers.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IndexError {
    /// The number of coordinates does not match the container dimensionality
    #[error("Index {found:?} has the wrong number of keys (expected {expected})")]
    WrongArity { expected: usize, found: Vec<usize> },
    /// A coordinate is not strictly less than the container dimension
    #[error("Index {index} (axis {axis}) is out of range for dimension {dim}")]
    OutOfRange {
        axis: usize,
        index: usize,
        dim: usize,
    },
}

/// Error type returned when a container or fill block cannot be constructed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigurationError {
    /// Containers must have dimension at least 1
    #[error("Array dimension must be at least 1")]
    ZeroDimension,
    /// A fill function produced a block of the wrong shape
    #[error("Fill function returned shape {found} for segment {segment}, expected {expected}")]
    FillShapeMismatch {
        segment: usize,
        expected: SegmentShape,
        found: SegmentShape,
    },
    /// Block data length is incompatible with its declared shape
    #[error("Block of shape {shape} cannot hold {len} values")]
    BlockLength { shape: SegmentShape, len: usize },
    /// Sampling interval for a random fill contains no values
    #[error("Sampling range is empty (low must be strictly less than high)")]
    EmptyRange,
    /// Sampling interval for a random fill has an infinite bound or width
    #[error("Sampling range must have finite bounds and a width representable by the element type")]
    InvalidRange,
    /// Storage for an array of this dimension cannot be addressed
    #[error("Array dimension {n} is too large")]
    DimensionTooLarge { n: usize },
    /// Source matrix for packing is not square
    #[error("Matrix of size {m}x{n} is not square")]
    NotSquare { m: usize, n: usize },
}
