//! Grid cell references and the `A7` text format.
//!
//! Columns and rows are 1-indexed. A column may be given as a number or as a
//! letter (`A` = 1); both forms produce the same `Coordinate`, so equality and
//! ordering never depend on how a cell was written.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::common::TargetError;
use crate::config::MAX_COLUMNS;

/// Hit status of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    Untargeted,
    Hit,
    Missed,
}

/// A `(column, row)` cell reference. Status is tracked by the owner of the
/// cell, never by the coordinate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    column: usize,
    row: usize,
}

impl Coordinate {
    /// Build a coordinate from numeric column and row.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Build a coordinate from a column letter (case-insensitive) and row.
    pub fn from_letter(letter: char, row: usize) -> Result<Self, TargetError> {
        if !letter.is_ascii_alphabetic() {
            return Err(TargetError::InvalidColumn(letter));
        }
        let column = (letter.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        Ok(Self { column, row })
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// `(column, row)` as integers.
    pub fn to_numeric_pair(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    /// Column letter, if the column is representable as one.
    pub fn column_letter(&self) -> Option<char> {
        if (1..=MAX_COLUMNS).contains(&self.column) {
            Some((b'A' + (self.column - 1) as u8) as char)
        } else {
            None
        }
    }

    /// True iff `1 <= column <= x_dimension` and `1 <= row <= y_dimension`.
    pub fn is_within(&self, x_dimension: usize, y_dimension: usize) -> bool {
        (1..=x_dimension).contains(&self.column) && (1..=y_dimension).contains(&self.row)
    }

    /// Offset by `(d_column, d_row)` cells, or `None` past `usize::MAX`.
    pub(crate) fn offset(&self, d_column: usize, d_row: usize) -> Option<Self> {
        Some(Self::new(
            self.column.checked_add(d_column)?,
            self.row.checked_add(d_row)?,
        ))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

/// Parses one letter followed by one or more digits, e.g. `a7` or `J10`.
///
/// Bounds are not checked here; they depend on the board being targeted.
impl FromStr for Coordinate {
    type Err = TargetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let letter = chars.next().ok_or(TargetError::Empty)?;
        let row_text = chars.as_str();
        if !letter.is_ascii_alphabetic() {
            return Err(TargetError::InvalidColumn(letter));
        }
        if row_text.is_empty() {
            return Err(TargetError::MissingRow);
        }
        if !row_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TargetError::InvalidRow(String::from(row_text)));
        }
        let row = row_text
            .parse::<usize>()
            .map_err(|_| TargetError::InvalidRow(String::from(row_text)))?;
        Coordinate::from_letter(letter, row)
    }
}
