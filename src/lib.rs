//! # sparse_arith: coordinate-keyed sparse integer matrices
//!
//! Stores only the non-zero entries of a matrix, keyed by `(row, col)`, and
//! provides addition, subtraction and multiplication that return new
//! matrices. Memory is proportional to the number of non-zeros rather than
//! to `rows × cols`.
//!
//! ## Components
//!
//! 1. **Data model** ([`SparseMatrix`]): declared dimensions plus a map of
//!    non-zero values. Writing a zero removes the entry, so no stored value
//!    is ever zero.
//!
//! 2. **Arithmetic** ([`matrix::ops`]): `add` and `subtract` require equal
//!    shapes; `multiply` requires the left column count to equal the right
//!    row count. Cancelled entries are pruned from every result.
//!
//! 3. **Multiplication strategies** ([`MultiplyStrategy`]): a pairwise scan
//!    over all non-zero pairs, or an indexed walk that visits only the
//!    matching row of the right operand. Both give the same result.
//!
//! 4. **Text I/O** ([`io`]): a `rows=` / `cols=` / `(row, col, value)` format
//!    for loading operands and printing results.
//!
//! ## Usage
//!
//! ```
//! use sparse_arith::SparseMatrix;
//!
//! let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3i64), (1, 1, 5)])?;
//! let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, -3i64), (0, 1, 2)])?;
//!
//! let sum = a.add(&b)?;
//! assert!(!sum.contains(0, 0));
//! assert_eq!(sum.to_triplets(), vec![(0, 1, 2), (1, 1, 5)]);
//!
//! let product = a.multiply(&b)?;
//! assert_eq!(product.to_triplets(), vec![(0, 0, -9), (0, 1, 6)]);
//! # Ok::<(), sparse_arith::Error>(())
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod operation;
pub mod utils;

// Re-export primary components
pub use error::{Error, Result};
pub use io::{load_matrix, read_matrix, write_matrix};
pub use matrix::{MatrixConfig, MultiplyStrategy, SparseMatrix};
pub use operation::Operation;
pub use utils::{from_sprs, to_sprs_csr};

/// Version information for the sparse_arith library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
