//! Presenter: writes a matrix in the same triple text format the loader reads

use std::fmt;
use std::io::Write;

use num_traits::{PrimInt, Signed};

use crate::error::Result;
use crate::matrix::SparseMatrix;

/// Writes `matrix` as `rows=`/`cols=` headers followed by one
/// `(row, col, value)` line per stored entry, in row-major order
pub fn write_matrix<T, W>(matrix: &SparseMatrix<T>, mut out: W) -> Result<()>
where
    T: PrimInt + Signed + fmt::Display,
    W: Write,
{
    write!(out, "{}", matrix)?;
    out.flush()?;
    Ok(())
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.n_rows())?;
        writeln!(f, "cols={}", self.n_cols())?;
        for (row, col, val) in self.iter() {
            writeln!(f, "({}, {}, {})", row, col, val)?;
        }
        Ok(())
    }
}
