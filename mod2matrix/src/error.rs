use thiserror::Error;

/// Errors raised by [`SquareMatrix`](crate::SquareMatrix) construction and arithmetic
///
/// Every condition is detected before any computation starts, so an error never leaves a
/// partially built result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row passed to [`SquareMatrix::from_rows`](crate::SquareMatrix::from_rows) does not
    /// have as many entries as there are rows
    #[error("not a square matrix: row {row} has {len} entries, expected {order}")]
    NotSquare { row: usize, len: usize, order: usize },

    /// No rows were given, but a square matrix has order at least 1
    #[error("not a square matrix: no rows given")]
    Empty,

    /// The operands of a binary operation have different orders
    #[error("size mismatch: order {left} vs order {right}")]
    SizeMismatch { left: usize, right: usize },

    /// Recursive multiplication needs an order of the form 2^k
    #[error("order {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Only matrices of even order can be split into quadrants
    #[error("order {0} is odd and cannot be split into quadrants")]
    OddOrder(usize),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
