//! Coordinate-keyed sparse matrix

use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array2;
use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};

/// Largest number of cells [`SparseMatrix::to_dense`] will allocate
///
/// 2^24 cells is 128 MiB of `i64`, well beyond any matrix worth printing.
pub const MAX_DENSE_ELEMENTS: usize = 1 << 24;

/// A sparse integer matrix stored as a map from `(row, col)` to value
///
/// Only non-zero entries are stored: writing a zero removes the key, so a
/// stored entry is never zero. Keys are ordered row-major, which keeps
/// iteration and printing deterministic and lets a single row be read back
/// as a range of the map.
///
/// Dimensions are fixed at construction, so every stored key stays inside
/// them. Arithmetic never mutates its operands; see [`crate::matrix::ops`].
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    entries: BTreeMap<(usize, usize), T>,
}

impl<T> SparseMatrix<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order through [`set_element`](Self::set_element),
    /// so a later triple overwrites an earlier one for the same coordinate and
    /// zero values are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for the first triple outside the
    /// declared dimensions.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let entries = (0..n).map(|i| ((i, i), T::one())).collect();

        Self {
            n_rows: n,
            n_cols: n,
            entries,
        }
    }

    /// Returns the value at `(row, col)`, or zero when nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// Writes `value` at `(row, col)`
    ///
    /// A zero value removes the entry (a no-op if it was absent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate lies outside the
    /// matrix.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Returns true if an entry is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows in the matrix
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns in the matrix
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Iterates over stored entries as `(row, col, &value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.entries.iter().map(|(&(row, col), val)| (row, col, val))
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col, value), in increasing column order.
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.entries
            .range((i, 0)..=(i, usize::MAX))
            .map(|(&(_, col), val)| (col, val))
    }

    /// Returns the stored entries as `(row, col, value)` in row-major order
    pub fn to_triplets(&self) -> Vec<(usize, usize, T)> {
        self.iter().map(|(row, col, &val)| (row, col, val)).collect()
    }

    /// Expands the matrix into a dense array
    ///
    /// This allocates `n_rows × n_cols` values and is meant for display and
    /// verification of small matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DenseTooLarge`] when the cell count overflows `usize`
    /// or exceeds [`MAX_DENSE_ELEMENTS`].
    pub fn to_dense(&self) -> Result<Array2<T>> {
        match self.n_rows.checked_mul(self.n_cols) {
            Some(cells) if cells <= MAX_DENSE_ELEMENTS => {}
            _ => {
                return Err(Error::DenseTooLarge {
                    n_rows: self.n_rows,
                    n_cols: self.n_cols,
                    limit: MAX_DENSE_ELEMENTS,
                })
            }
        }

        let mut dense = Array2::zeros((self.n_rows, self.n_cols));
        for (&(row, col), &val) in &self.entries {
            dense[[row, col]] = val;
        }
        Ok(dense)
    }

    /// Returns a new matrix with every entry negated
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if an entry is the minimum value of `T`.
    pub fn negate(&self) -> Result<Self> {
        let mut result = Self::new(self.n_rows, self.n_cols);
        for (&(row, col), &val) in &self.entries {
            let negated = T::zero()
                .checked_sub(&val)
                .ok_or(Error::Overflow { row, col })?;
            result.entries.insert((row, col), negated);
        }
        Ok(result)
    }
}

impl<T: fmt::Debug + PrimInt + Signed> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_entries_to_print = 10.min(self.nnz());

        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for (row, col, val) in self.iter().take(max_entries_to_print) {
                writeln!(f, "    ({}, {}): {:?}", row, col, val)?;
            }

            if self.nnz() > max_entries_to_print {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
