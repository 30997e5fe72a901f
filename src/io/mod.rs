//! Reading and writing matrices in the textual coordinate-list format.
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,5)
//! (2,1,-4)
//! ```
//!
//! The two header lines declare the matrix dimensions; every following
//! non-blank line is one stored entry. Rendering mirrors the input format
//! and is deterministic: entries are ordered by ascending row, then column.
//!
//! The canonical parsing contract is strict about whitespace inside entry
//! tuples; see [`ParseSettings`] for the documented relaxation.

#![allow(non_snake_case)]

use crate::algebra::{IndexError, IntT, SparseMatrix};
use derive_builder::Builder;
use itertools::Itertools;
use std::fmt::Write as _;
use std::io::Write;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Error type returned when coordinate-list text is malformed.
///
/// Line numbers are 1-based and refer to the input as given, blank lines
/// included.
#[derive(Error, Debug)]
pub enum FormatError {
    /// A `rows=` or `cols=` header line is missing or not `key=<int>`
    #[error("line {line}: expected `{key}=<int>` header")]
    BadHeader { line: usize, key: &'static str },
    /// An entry line is not wrapped in literal parentheses
    #[error("line {line}: entry must have the form (row,col,value)")]
    BadDelimiters { line: usize },
    /// An entry line does not hold exactly three comma-separated tokens
    #[error("line {line}: expected 3 comma-separated values, found {count}")]
    WrongTokenCount { line: usize, count: usize },
    /// A token failed integer parsing
    #[error("line {line}: bad integer `{token}`")]
    BadInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error type returned by [`SparseMatrix::load_from_file`] and the other
/// loading entry points.
#[derive(Error, Debug)]
pub enum LoadError {
    /// malformed coordinate-list text
    #[error(transparent)]
    Format(#[from] FormatError),
    /// an entry coordinate outside the declared dimensions
    #[error(transparent)]
    Index(#[from] IndexError),
    /// an underlying file read failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parser options for the coordinate-list format.
#[derive(Builder, Debug, Clone)]
pub struct ParseSettings {
    /// tolerate whitespace around the three tokens inside an entry tuple,
    /// e.g. `( 1, 2, -3 )`. The canonical format is strict and rejects it.
    #[builder(default = "false")]
    pub trim_entry_whitespace: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        ParseSettingsBuilder::default().build().unwrap()
    }
}

impl<T> SparseMatrix<T>
where
    T: IntT,
{
    /// Reads a matrix from the coordinate-list file at `path`.
    ///
    /// Any failure aborts the whole load; no partially populated matrix is
    /// ever returned.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_from_file_with(path, &ParseSettings::default())
    }

    /// As [`load_from_file`](Self::load_from_file), with explicit
    /// [`ParseSettings`].
    pub fn load_from_file_with(
        path: impl AsRef<Path>,
        settings: &ParseSettings,
    ) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_from_str_with(&text, settings)
    }

    /// Parses a matrix from coordinate-list text.
    pub fn load_from_str(text: &str) -> Result<Self, LoadError> {
        Self::load_from_str_with(text, &ParseSettings::default())
    }

    /// As [`load_from_str`](Self::load_from_str), with explicit
    /// [`ParseSettings`].
    pub fn load_from_str_with(text: &str, settings: &ParseSettings) -> Result<Self, LoadError> {
        let mut lines = text.lines().enumerate();

        let m = parse_header(lines.next(), 1, "rows")?;
        let n = parse_header(lines.next(), 2, "cols")?;
        let mut A = Self::zeros(m, n);

        for (idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let (row, col, value) = parse_entry::<T>(idx + 1, line, settings)?;
            apply_entry(&mut A, row, col, value)?;
        }
        Ok(A)
    }

    /// Renders the matrix to coordinate-list text: a `rows=` / `cols=`
    /// header followed by one `(row,col,value)` line per stored entry,
    /// ordered by ascending row then column.
    pub fn render(&self) -> String {
        let mut out = format!("rows={}\ncols={}\n", self.m, self.n);
        for (row, col) in self.entries.keys().copied().sorted() {
            writeln!(out, "({},{},{})", row, col, self.get(row, col)).unwrap();
        }
        out
    }

    /// Writes the rendered coordinate-list form to `w`.
    pub fn save_to_file(&self, w: &mut impl Write) -> std::io::Result<()> {
        w.write_all(self.render().as_bytes())
    }
}

fn parse_header(
    line: Option<(usize, &str)>,
    lineno: usize,
    key: &'static str,
) -> Result<usize, FormatError> {
    let bad = || FormatError::BadHeader { line: lineno, key };
    let (_, line) = line.ok_or_else(bad)?;
    let digits = line
        .trim()
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(bad)?;
    digits.parse().map_err(|source| FormatError::BadInteger {
        line: lineno,
        token: digits.to_string(),
        source,
    })
}

// Coordinates parse as signed integers so that a negative index surfaces
// as the bounds failure it is, rather than a formatting failure.
fn parse_entry<T: IntT>(
    lineno: usize,
    line: &str,
    settings: &ParseSettings,
) -> Result<(i64, i64, T), FormatError> {
    let body = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(FormatError::BadDelimiters { line: lineno })?;

    let tokens: Vec<&str> = body.split(',').collect();
    if tokens.len() != 3 {
        return Err(FormatError::WrongTokenCount {
            line: lineno,
            count: tokens.len(),
        });
    }

    let tok = |i: usize| {
        if settings.trim_entry_whitespace {
            tokens[i].trim()
        } else {
            tokens[i]
        }
    };
    let row = parse_int::<i64>(lineno, tok(0))?;
    let col = parse_int::<i64>(lineno, tok(1))?;
    let value = parse_int::<T>(lineno, tok(2))?;
    Ok((row, col, value))
}

fn parse_int<T>(lineno: usize, token: &str) -> Result<T, FormatError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| FormatError::BadInteger {
        line: lineno,
        token: token.to_string(),
        source,
    })
}

fn apply_entry<T: IntT>(
    A: &mut SparseMatrix<T>,
    row: i64,
    col: i64,
    value: T,
) -> Result<(), IndexError> {
    let oob = || IndexError {
        row,
        col,
        nrows: A.m,
        ncols: A.n,
    };
    let r = usize::try_from(row).map_err(|_| oob())?;
    let c = usize::try_from(col).map_err(|_| oob())?;
    A.set(r, c, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let A: SparseMatrix = SparseMatrix::load_from_str(
            "rows=2\n\
             cols=2\n\
             (0,0,5)\n\
             (1,1,-3)\n",
        )
        .unwrap();

        assert_eq!((A.m, A.n), (2, 2));
        assert_eq!(A.get(0, 0), 5);
        assert_eq!(A.get(1, 1), -3);
        assert_eq!(A.get(0, 1), 0);
        assert_eq!(A.nnz(), 2);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_zero_values() {
        let A: SparseMatrix = SparseMatrix::load_from_str(
            "rows=3\n\
             cols=3\n\
             \n\
             (0,1,4)\n\
             \n\
             (2,2,0)\n",
        )
        .unwrap();

        // the explicit zero is legal input and stores nothing
        assert_eq!(A.nnz(), 1);
        assert_eq!(A.get(0, 1), 4);
        assert_eq!(A.get(2, 2), 0);
    }

    #[test]
    fn test_parse_header_must_declare_dimensions() {
        let missing = SparseMatrix::<i64>::load_from_str("rows=2\n").unwrap_err();
        assert!(matches!(
            missing,
            LoadError::Format(FormatError::BadHeader { line: 2, key: "cols" })
        ));

        let noequals = SparseMatrix::<i64>::load_from_str("rows 2\ncols=2\n").unwrap_err();
        assert!(matches!(
            noequals,
            LoadError::Format(FormatError::BadHeader { line: 1, key: "rows" })
        ));

        let nonnumeric = SparseMatrix::<i64>::load_from_str("rows=two\ncols=2\n").unwrap_err();
        assert!(matches!(
            nonnumeric,
            LoadError::Format(FormatError::BadInteger { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = SparseMatrix::<i64>::load_from_str(
            "rows=2\n\
             cols=2\n\
             (1,2)\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::WrongTokenCount { line: 3, count: 2 })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_parentheses() {
        let err = SparseMatrix::<i64>::load_from_str(
            "rows=2\n\
             cols=2\n\
             0,0,5\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::BadDelimiters { line: 3 })
        ));
    }

    #[test]
    fn test_parse_whitespace_strict_by_default() {
        let text = "rows=2\ncols=2\n(0, 1, 5)\n";

        let err = SparseMatrix::<i64>::load_from_str(text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::BadInteger { line: 3, .. })
        ));

        let settings = ParseSettingsBuilder::default()
            .trim_entry_whitespace(true)
            .build()
            .unwrap();
        let A: SparseMatrix = SparseMatrix::load_from_str_with(text, &settings).unwrap();
        assert_eq!(A.get(0, 1), 5);
    }

    #[test]
    fn test_parse_rejects_out_of_bounds_entry() {
        let oob = SparseMatrix::<i64>::load_from_str(
            "rows=2\n\
             cols=2\n\
             (2,0,1)\n",
        )
        .unwrap_err();
        assert!(matches!(oob, LoadError::Index(IndexError { row: 2, col: 0, .. })));

        let negative = SparseMatrix::<i64>::load_from_str(
            "rows=2\n\
             cols=2\n\
             (-1,0,1)\n",
        )
        .unwrap_err();
        assert!(matches!(
            negative,
            LoadError::Index(IndexError { row: -1, col: 0, .. })
        ));
    }

    #[test]
    fn test_render_is_sorted_by_row_then_col() {
        let A: SparseMatrix =
            SparseMatrix::from_entries(3, 3, [(2, 0, 9), (0, 2, -1), (0, 1, 4)]).unwrap();

        assert_eq!(
            A.render(),
            "rows=3\n\
             cols=3\n\
             (0,1,4)\n\
             (0,2,-1)\n\
             (2,0,9)\n"
        );
    }

    #[test]
    fn test_render_empty_matrix() {
        let Z = SparseMatrix::<i64>::zeros(2, 5);
        assert_eq!(Z.render(), "rows=2\ncols=5\n");
    }

    #[test]
    fn test_render_parse_round_trip() {
        let A: SparseMatrix =
            SparseMatrix::from_entries(4, 4, [(0, 0, 1), (1, 3, -7), (3, 2, 12)]).unwrap();
        let B = SparseMatrix::load_from_str(&A.render()).unwrap();
        assert_eq!(A, B);
    }
}
