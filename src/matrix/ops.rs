//! Addition, subtraction and multiplication of sparse matrices
//!
//! Every operation borrows its operands and returns a new matrix. An entry
//! whose exact value does not fit in `T` fails the whole operation with
//! [`Error::Overflow`] instead of producing a partial result.

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Sub};

use num_traits::ops::overflowing::OverflowingAdd;
use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};
use crate::matrix::config::{MatrixConfig, MultiplyStrategy};
use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T>
where
    T: PrimInt + Signed,
{
    /// Element-wise sum `self + other`
    ///
    /// Coordinates whose sum is zero are absent from the result.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless both operands have the same shape;
    /// [`Error::Overflow`] if a sum does not fit in `T`.
    pub fn add(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.check_same_shape("add", other)?;

        let mut result = SparseMatrix::new(self.n_rows(), self.n_cols());

        // Keys of self: covers both operands' shared keys and self-only keys
        for (row, col, &val) in self.iter() {
            let sum = val
                .checked_add(&other.get_element(row, col))
                .ok_or(Error::Overflow { row, col })?;
            result.set_element(row, col, sum)?;
        }

        // Keys only in other
        for (row, col, &val) in other.iter() {
            if !self.contains(row, col) {
                result.set_element(row, col, val)?;
            }
        }

        Ok(result)
    }

    /// Element-wise difference `self - other`
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn subtract(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.check_same_shape("subtract", other)?;

        let mut result = SparseMatrix::new(self.n_rows(), self.n_cols());

        for (row, col, &val) in self.iter() {
            let diff = val
                .checked_sub(&other.get_element(row, col))
                .ok_or(Error::Overflow { row, col })?;
            result.set_element(row, col, diff)?;
        }

        // Absent from self, so the entry is 0 - other
        for (row, col, &val) in other.iter() {
            if !self.contains(row, col) {
                let negated = T::zero()
                    .checked_sub(&val)
                    .ok_or(Error::Overflow { row, col })?;
                result.set_element(row, col, negated)?;
            }
        }

        Ok(result)
    }

    fn check_same_shape(&self, op: &'static str, other: &SparseMatrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}

impl<T> SparseMatrix<T>
where
    T: PrimInt + Signed + OverflowingAdd,
{
    /// Matrix product `self × other` using the default configuration
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless `self.n_cols() == other.n_rows()`;
    /// [`Error::Overflow`] if a single product, or the final sum for an
    /// entry, does not fit in `T`. Intermediate sums may leave the range of
    /// `T` as long as the total comes back into it.
    pub fn multiply(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.multiply_with(other, &MatrixConfig::default())
    }

    /// Matrix product `self × other` using the strategy from `config`
    ///
    /// Both strategies produce identical results, and since only the final
    /// sum of each entry is range-checked, overflow behavior does not depend
    /// on the strategy or the order of contributions either.
    pub fn multiply_with(
        &self,
        other: &SparseMatrix<T>,
        config: &MatrixConfig,
    ) -> Result<SparseMatrix<T>> {
        if self.n_cols() != other.n_rows() {
            return Err(Error::dimension_mismatch(
                "multiply",
                self.shape(),
                other.shape(),
            ));
        }

        let accum = match config.multiply_strategy {
            MultiplyStrategy::Pairwise => self.accumulate_pairwise(other)?,
            MultiplyStrategy::Indexed => self.accumulate_indexed(other)?,
        };

        let mut result = SparseMatrix::new(self.n_rows(), other.n_cols());
        for ((row, col), partial) in accum {
            if partial.carry != 0 {
                return Err(Error::Overflow { row, col });
            }
            // Cancelled sums are dropped here
            result.set_element(row, col, partial.sum)?;
        }

        Ok(result)
    }

    /// Reference nested scan over every pair of non-zeros
    fn accumulate_pairwise(&self, other: &SparseMatrix<T>) -> Result<Accumulator<T>> {
        let mut accum = BTreeMap::new();

        for (row_a, col_a, &val_a) in self.iter() {
            for (row_b, col_b, &val_b) in other.iter() {
                if col_a == row_b {
                    accumulate(&mut accum, row_a, col_b, val_a, val_b)?;
                }
            }
        }

        Ok(accum)
    }

    /// For each non-zero `(i, k)` of self, visit only row `k` of other
    fn accumulate_indexed(&self, other: &SparseMatrix<T>) -> Result<Accumulator<T>> {
        let mut accum = BTreeMap::new();

        for (i, k, &a_val) in self.iter() {
            for (j, &b_val) in other.row_iter(k) {
                accumulate(&mut accum, i, j, a_val, b_val)?;
            }
        }

        Ok(accum)
    }
}

/// Running sum of one output entry
///
/// `sum` wraps on overflow and `carry` counts the wraps: +1 past the top of
/// `T`, -1 past the bottom. The exact total fits in `T` if and only if the
/// carry is zero at the end, and then it equals `sum`.
#[derive(Debug, Clone, Copy)]
struct Partial<T> {
    sum: T,
    carry: isize,
}

type Accumulator<T> = BTreeMap<(usize, usize), Partial<T>>;

/// Multiply and accumulate into `accum[(row, col)]`
fn accumulate<T>(
    accum: &mut Accumulator<T>,
    row: usize,
    col: usize,
    a_val: T,
    b_val: T,
) -> Result<()>
where
    T: PrimInt + Signed + OverflowingAdd,
{
    let product = a_val
        .checked_mul(&b_val)
        .ok_or(Error::Overflow { row, col })?;

    let slot = accum.entry((row, col)).or_insert(Partial {
        sum: T::zero(),
        carry: 0,
    });
    let (sum, wrapped) = slot.sum.overflowing_add(&product);
    slot.sum = sum;
    if wrapped {
        slot.carry += if product.is_positive() { 1 } else { -1 };
    }
    Ok(())
}

impl<'a, T> Add<&'a SparseMatrix<T>> for &'a SparseMatrix<T>
where
    T: PrimInt + Signed,
{
    type Output = Result<SparseMatrix<T>>;

    fn add(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        SparseMatrix::add(self, rhs)
    }
}

impl<'a, T> Sub<&'a SparseMatrix<T>> for &'a SparseMatrix<T>
where
    T: PrimInt + Signed,
{
    type Output = Result<SparseMatrix<T>>;

    fn sub(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, T> Mul<&'a SparseMatrix<T>> for &'a SparseMatrix<T>
where
    T: PrimInt + Signed + OverflowingAdd,
{
    type Output = Result<SparseMatrix<T>>;

    fn mul(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, i64)]) -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(n_rows, n_cols, triplets.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_prunes_cancellation() {
        let a = matrix(2, 2, &[(0, 0, 3), (1, 1, 5)]);
        let b = matrix(2, 2, &[(0, 0, -3), (0, 1, 2)]);

        let c = a.add(&b).unwrap();

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_triplets(), vec![(0, 1, 2), (1, 1, 5)]);
        assert!(!c.contains(0, 0));
    }

    #[test]
    fn test_subtract_sign_flip() {
        let a = matrix(2, 2, &[(0, 0, 3), (1, 1, 5)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 2)]);

        let c = a.subtract(&b).unwrap();

        assert_eq!(c.to_triplets(), vec![(0, 1, -2), (1, 1, 5)]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = matrix(2, 3, &[]);
        let b = matrix(3, 2, &[]);

        assert!(matches!(
            a.add(&b),
            Err(Error::DimensionMismatch { op: "add", lhs: (2, 3), rhs: (3, 2) })
        ));
        assert!(matches!(
            a.subtract(&b),
            Err(Error::DimensionMismatch { op: "subtract", .. })
        ));
    }

    #[test]
    fn test_reference_multiplication() {
        // A = [1 2; 0 3]
        // B = [4 5; 6 7]
        // Expected result: C = A*B = [16 19; 18 21]
        let a = matrix(2, 2, &[(0, 0, 1), (0, 1, 2), (1, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, 4), (0, 1, 5), (1, 0, 6), (1, 1, 7)]);

        for strategy in [MultiplyStrategy::Pairwise, MultiplyStrategy::Indexed] {
            let c = a
                .multiply_with(&b, &MatrixConfig::with_strategy(strategy))
                .unwrap();

            assert_eq!(c.shape(), (2, 2));
            assert_eq!(
                c.to_triplets(),
                vec![(0, 0, 16), (0, 1, 19), (1, 0, 18), (1, 1, 21)]
            );
        }
    }

    #[test]
    fn test_multiply_cancellation_is_pruned() {
        // Row 0 of A dotted with column 0 of B: 1*1 + 1*(-1) = 0
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 1), (1, 0, -1)]);

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), (1, 1));
        assert!(c.is_empty());
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = matrix(2, 3, &[(0, 0, 1)]);
        let b = matrix(2, 3, &[(0, 0, 1)]);

        assert!(matches!(
            a.multiply(&b),
            Err(Error::DimensionMismatch { op: "multiply", lhs: (2, 3), rhs: (2, 3) })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = SparseMatrix::from_triplets(1, 1, vec![(0, 0, i32::MAX)]).unwrap();
        let b = SparseMatrix::from_triplets(1, 1, vec![(0, 0, 1)]).unwrap();

        assert!(matches!(a.add(&b), Err(Error::Overflow { row: 0, col: 0 })));
        assert!(matches!(
            a.multiply(&SparseMatrix::from_triplets(1, 1, vec![(0, 0, 2)]).unwrap()),
            Err(Error::Overflow { row: 0, col: 0 })
        ));

        let min = SparseMatrix::from_triplets(1, 1, vec![(0, 0, i32::MIN)]).unwrap();
        let empty = SparseMatrix::<i32>::new(1, 1);
        assert!(matches!(empty.subtract(&min), Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_intermediate_overflow_that_cancels() {
        // MAX + 1 - 1 passes above the range of i64 before coming back
        let a = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, 1), (0, 2, -1)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, 1), (2, 0, 1)]);

        // MIN - 1 + 1 passes below it
        let c = matrix(1, 3, &[(0, 0, i64::MIN), (0, 1, -1), (0, 2, 1)]);

        // MAX + MAX - MAX wraps twice, once in each direction
        let d = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, i64::MAX), (0, 2, -i64::MAX)]);

        for strategy in [MultiplyStrategy::Pairwise, MultiplyStrategy::Indexed] {
            let config = MatrixConfig::with_strategy(strategy);
            assert_eq!(a.multiply_with(&b, &config).unwrap().to_triplets(), vec![(0, 0, i64::MAX)]);
            assert_eq!(c.multiply_with(&b, &config).unwrap().to_triplets(), vec![(0, 0, i64::MIN)]);
            assert_eq!(d.multiply_with(&b, &config).unwrap().to_triplets(), vec![(0, 0, i64::MAX)]);
        }
    }

    #[test]
    fn test_final_sum_overflow_is_reported() {
        let ones = matrix(2, 1, &[(0, 0, 1), (1, 0, 1)]);
        let high = matrix(2, 2, &[(0, 0, 1), (1, 0, i64::MAX), (1, 1, 1)]);
        let low = matrix(1, 2, &[(0, 0, i64::MIN), (0, 1, -1)]);

        for strategy in [MultiplyStrategy::Pairwise, MultiplyStrategy::Indexed] {
            let config = MatrixConfig::with_strategy(strategy);
            assert!(matches!(
                high.multiply_with(&ones, &config),
                Err(Error::Overflow { row: 1, col: 0 })
            ));
            assert!(matches!(
                low.multiply_with(&ones, &config),
                Err(Error::Overflow { row: 0, col: 0 })
            ));
        }
    }

    #[test]
    fn test_operators() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = SparseMatrix::<i64>::identity(2);

        assert_eq!((&a + &b).unwrap().to_triplets(), vec![(0, 0, 2), (1, 1, 3)]);
        assert_eq!((&a - &b).unwrap().to_triplets(), vec![(1, 1, 1)]);
        assert_eq!((&a * &b).unwrap(), a);
    }

    #[test]
    fn test_operands_untouched() {
        let a = matrix(2, 2, &[(0, 0, 3), (1, 1, 5)]);
        let b = matrix(2, 2, &[(0, 0, -3), (0, 1, 2)]);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.add(&b).unwrap();
        let _ = a.subtract(&b).unwrap();
        let _ = a.multiply(&b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
