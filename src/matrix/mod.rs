// Matrix data structures and operations

pub mod config;
pub mod ops;
pub mod sparse;

pub use config::{MatrixConfig, MultiplyStrategy};
pub use sparse::{SparseMatrix, MAX_DENSE_ELEMENTS};
