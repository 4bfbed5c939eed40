//! Text input and output for matrices

pub mod reader;
pub mod writer;

pub use reader::{load_matrix, read_matrix};
pub use writer::write_matrix;
