//! Configuration for sparse matrix operations

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{Error, Result};

/// How multiplication matches left entries `(i, k)` with right entries `(k, j)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MultiplyStrategy {
    /// Scan every pair of non-zeros and keep the ones whose inner index agrees.
    ///
    /// Cost is O(nnz(A) × nnz(B)). Kept as the reference behavior.
    Pairwise,
    /// Group the right operand's entries by row once, then visit only the
    /// matching row for each left entry.
    #[default]
    Indexed,
}

impl MultiplyStrategy {
    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            MultiplyStrategy::Pairwise => "pairwise",
            MultiplyStrategy::Indexed => "indexed",
        }
    }
}

impl fmt::Display for MultiplyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MultiplyStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pairwise" => Ok(MultiplyStrategy::Pairwise),
            "indexed" => Ok(MultiplyStrategy::Indexed),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

/// Configuration for matrix operations
#[derive(Debug, Clone, Default)]
pub struct MatrixConfig {
    /// Matching strategy used by multiplication
    pub multiply_strategy: MultiplyStrategy,
}

impl MatrixConfig {
    /// Create a config using a specific multiplication strategy
    pub fn with_strategy(strategy: MultiplyStrategy) -> Self {
        Self {
            multiply_strategy: strategy,
        }
    }
}
