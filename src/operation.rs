//! Named arithmetic operations, as selected on the command line

use std::fmt;
use std::str::FromStr;

use num_traits::ops::overflowing::OverflowingAdd;
use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};
use crate::matrix::{MatrixConfig, SparseMatrix};

/// One of the three binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise sum
    Add,
    /// Element-wise difference
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// Name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    ///
    /// `config` only affects [`Operation::Multiply`].
    pub fn apply<T>(
        &self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
        config: &MatrixConfig,
    ) -> Result<SparseMatrix<T>>
    where
        T: PrimInt + Signed + OverflowingAdd,
    {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply_with(rhs, config),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(Error::InvalidOperation(other.to_string())),
        }
    }
}
