//! Loader for the triple text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -7)
//! ```
//!
//! Blank lines are ignored. The first two non-blank lines are the `rows=`
//! and `cols=` headers; every other line must be a `(row, col, value)`
//! triple.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info, trace};
use regex::Regex;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

fn triple_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // `\d` would also accept non-ASCII digits, which `parse` then rejects
        Regex::new(r"^\(([0-9]+),\s*([0-9]+),\s*(-?[0-9]+)\)$").expect("triple pattern is valid")
    })
}

/// Reads a matrix from the file at `path`
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix<i64>> {
    let path = path.as_ref();
    info!("loading matrix from {}", path.display());

    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

/// Reads a matrix in the triple text format
///
/// Zero-valued triples are skipped and a repeated coordinate keeps the last
/// value.
///
/// # Errors
///
/// [`Error::Format`] for a missing or malformed header or triple line,
/// [`Error::IndexOutOfBounds`] for a triple outside the declared extent,
/// [`Error::Io`] if reading fails.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<SparseMatrix<i64>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|text| (idx + 1, text)))
        .filter(|line| !matches!(line, Ok((_, text)) if text.trim().is_empty()));

    let n_rows = parse_header(lines.next().transpose()?, "rows")?;
    let n_cols = parse_header(lines.next().transpose()?, "cols")?;
    debug!("matrix header: {} rows, {} cols", n_rows, n_cols);

    let mut matrix = SparseMatrix::new(n_rows, n_cols);

    for line in lines {
        let (line_no, text) = line?;
        let (row, col, value) = parse_triple(line_no, text.trim())?;

        if value == 0 {
            trace!("line {}: skipping zero entry ({}, {})", line_no, row, col);
            continue;
        }
        matrix.set_element(row, col, value)?;
    }

    debug!("loaded {}x{} matrix with {} non-zeros", n_rows, n_cols, matrix.nnz());
    Ok(matrix)
}

/// Parses a `<key>=<count>` header line
fn parse_header(line: Option<(usize, String)>, key: &str) -> Result<usize> {
    let (line_no, text) = line.ok_or_else(|| Error::format(0, format!("missing '{}=' header", key)))?;

    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| Error::format(line_no, format!("expected '{}=<count>'", key)))?;

    if name.trim() != key {
        return Err(Error::format(
            line_no,
            format!("expected '{}=' header, found '{}'", key, name.trim()),
        ));
    }

    value
        .trim()
        .parse()
        .map_err(|_| Error::format(line_no, format!("invalid {} count '{}'", key, value.trim())))
}

/// Parses a trimmed `(row, col, value)` line
fn parse_triple(line_no: usize, text: &str) -> Result<(usize, usize, i64)> {
    let caps = triple_pattern()
        .captures(text)
        .ok_or_else(|| Error::format(line_no, format!("expected '(row, col, value)', found '{}'", text)))?;

    let out_of_range = |what: &str| Error::format(line_no, format!("{} out of range", what));

    let row = caps[1].parse().map_err(|_| out_of_range("row"))?;
    let col = caps[2].parse().map_err(|_| out_of_range("column"))?;
    let value = caps[3].parse().map_err(|_| out_of_range("value"))?;

    Ok((row, col, value))
}
