//! Utilities for converting between our matrix and the `sprs` crate
//!
//! Used to cross-check results against an independent sparse library.

use sprs::CsMat;
use num_traits::{PrimInt, Signed};

use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::utils::exclusive_scan;

/// Converts our matrix to a sprs CsMat in CSR layout
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: PrimInt + Signed + Default,
{
    let mut row_counts = vec![0; matrix.n_rows()];
    let mut col_idx = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    // Entries come out row-major, so columns are already sorted within each row
    for (row, col, &val) in matrix.iter() {
        row_counts[row] += 1;
        col_idx.push(col);
        values.push(val);
    }

    CsMat::new(
        matrix.shape(),
        exclusive_scan(&row_counts),
        col_idx,
        values,
    )
}

/// Converts a sprs CsMat (CSR or CSC) to our matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: PrimInt + Signed + Default,
{
    let (n_rows, n_cols) = matrix.shape();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        matrix.iter().map(|(&val, (row, col))| (row, col, val)),
    )
}
