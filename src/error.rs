//! Error types for sparse_arith

use thiserror::Error;

/// Result type alias using sparse_arith's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparse_arith operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operand dimensions are incompatible for the requested operation
    #[error("Dimension mismatch in {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape (rows, cols)
        lhs: (usize, usize),
        /// Right-hand side shape (rows, cols)
        rhs: (usize, usize),
    },

    /// Coordinate outside the declared matrix extent
    #[error("Index ({row}, {col}) out of bounds for {n_rows}x{n_cols} matrix")]
    IndexOutOfBounds {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// Number of rows in the matrix
        n_rows: usize,
        /// Number of columns in the matrix
        n_cols: usize,
    },

    /// Integer overflow while computing an entry
    #[error("Integer overflow computing entry ({row}, {col})")]
    Overflow {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// Dense view would need more cells than allowed
    #[error("Matrix of {n_rows}x{n_cols} is too large for a dense view (limit {limit} elements)")]
    DenseTooLarge {
        /// Number of rows in the matrix
        n_rows: usize,
        /// Number of columns in the matrix
        n_cols: usize,
        /// Maximum number of cells
        limit: usize,
    },

    /// Unrecognized operation name
    #[error("Invalid operation '{0}': expected add, subtract or multiply")]
    InvalidOperation(String),

    /// Unrecognized multiplication strategy name
    #[error("Invalid multiply strategy '{0}': expected pairwise or indexed")]
    InvalidStrategy(String),

    /// Malformed matrix text input
    #[error("Wrong input format at line {line}: {message}")]
    Format {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// I/O error while reading or writing a matrix
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Create a format error for the given 1-based line
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
