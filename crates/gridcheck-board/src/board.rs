//! Board representation and structural validation.
//!
//! This module provides [`Board`], an immutable 2-D grid of [`Symbol`]s,
//! together with the validator that decides whether the grid is a
//! structurally valid number-place board.
//!
//! A board imposes no shape at construction time: ragged, empty, and
//! non-perfect-square grids are all representable. Shape problems are
//! reported by [`Board::check`], never by a constructor, so that every
//! grid a caller can supply maps to a result rather than a panic.
//!
//! # Examples
//!
//! ```
//! use gridcheck_board::{Board, BoardError};
//!
//! let board: Board = "
//!     1-3-
//!     3---
//!     -1--
//!     ---1
//! "
//! .parse()
//! .unwrap();
//! assert!(board.is_valid());
//!
//! let ragged = Board::from_rows(vec![vec![], vec![]]);
//! assert_eq!(
//!     ragged.check(),
//!     Err(BoardError::RaggedRow {
//!         row: 0,
//!         len: 0,
//!         rows: 2
//!     })
//! );
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{shape::BoardShape, symbol::Symbol, value_set::ValueSet};

/// The kind of house (row, column, or sub-box) in which a duplicate value
/// clashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HouseKind {
    /// A row of the board.
    #[display("row")]
    Row,
    /// A column of the board.
    #[display("column")]
    Column,
    /// A k×k sub-box of the board.
    #[display("box")]
    Box,
}

/// The first structural rule a board violates.
///
/// Rules are checked in the order the variants are listed: shape first
/// (rows, squareness, supported size), then a single row-major pass over
/// the cells (symbol decoding, value range, duplicates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board has no rows.
    #[display("board has no rows")]
    NoRows,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {rows}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Number of rows on the board.
        rows: usize,
    },
    /// The side length is not a perfect square.
    #[display("{size} is not a perfect square")]
    NotPerfectSquare {
        /// Side length of the board.
        size: usize,
    },
    /// The side length exceeds what single-character symbols can encode.
    #[display("unsupported board size {size}")]
    UnsupportedSize {
        /// Side length of the board.
        size: usize,
    },
    /// A filled cell's symbol is neither a digit nor an uppercase letter.
    #[display("symbol '{symbol}' at ({row}, {col}) encodes no value")]
    UndecodableSymbol {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The offending symbol.
        symbol: Symbol,
    },
    /// A filled cell's value lies outside `1..=N`.
    #[display("value {value} at ({row}, {col}) is out of range for a {size}x{size} board")]
    ValueOutOfRange {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The decoded value.
        value: u8,
        /// Side length of the board.
        size: usize,
    },
    /// A value appears twice in the same row, column, or sub-box.
    #[display("duplicate value {value} in {house} at ({row}, {col})")]
    Duplicate {
        /// Row of the second occurrence.
        row: usize,
        /// Column of the second occurrence.
        col: usize,
        /// The duplicated value.
        value: u8,
        /// The kind of house containing both occurrences.
        house: HouseKind,
    },
}

/// Error parsing the text form of a board.
///
/// Only characters that could never be a cell — anything other than the
/// `-` empty marker, ASCII letters, and digits — are parse errors.
/// Whitespace separates cells and is never part of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unexpected character '{ch}' at line {line}, column {column}")]
pub struct ParseBoardError {
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based character position within the line.
    pub column: usize,
    /// The offending character.
    pub ch: char,
}

/// An immutable 2-D grid of cell symbols.
///
/// The grid may have any shape; validity is a question answered by
/// [`check`](Self::check) and [`is_valid`](Self::is_valid), not a property
/// enforced at construction. Validation never mutates the board and never
/// panics, whatever the contents.
///
/// # Text form
///
/// Boards parse from and display as plain text: one row per line, one
/// character per cell, with blank lines and spacing between cells ignored.
/// `-` marks an empty cell.
///
/// # Examples
///
/// ```
/// use gridcheck_board::Board;
///
/// let board: Board = "
///     53--7----
///     6--195---
///     -98----6-
///     8---6---3
///     4--8-3--1
///     7---2---6
///     -6----28-
///     ---419--5
///     ----8--79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board.num_rows(), 9);
/// assert!(board.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Symbol>>,
}

impl Board {
    /// Creates a board from rows of symbols.
    ///
    /// The rows are taken as-is; shape and contents are examined by
    /// [`check`](Self::check).
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Checks the board against the structural rules, reporting the first
    /// violated one.
    ///
    /// The rules, in priority order:
    ///
    /// 1. The board has at least one row.
    /// 2. Every row has exactly as many cells as there are rows.
    /// 3. The side length N is a perfect square no larger than
    ///    [`Symbol::MAX_VALUE`].
    ///
    /// Then every cell, in row-major order: empty cells are skipped; a
    /// filled cell must decode to a value in `1..=N` that has not yet
    /// appeared in its row, column, or sub-box.
    ///
    /// A filled board need not be solvable or solved; only the
    /// no-duplicate constraint is checked.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`BoardError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcheck_board::{Board, BoardError, HouseKind};
    ///
    /// let board: Board = "
    ///     1--1
    ///     ----
    ///     ----
    ///     ----
    /// "
    /// .parse()
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     board.check(),
    ///     Err(BoardError::Duplicate {
    ///         row: 0,
    ///         col: 3,
    ///         value: 1,
    ///         house: HouseKind::Row
    ///     })
    /// );
    /// ```
    pub fn check(&self) -> Result<(), BoardError> {
        let size = self.rows.len();
        if size == 0 {
            return Err(BoardError::NoRows);
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    rows: size,
                });
            }
        }
        let Some(shape) = BoardShape::of(size) else {
            return Err(if size > usize::from(Symbol::MAX_VALUE) {
                BoardError::UnsupportedSize { size }
            } else {
                BoardError::NotPerfectSquare { size }
            });
        };

        let mut row_seen = vec![ValueSet::EMPTY; size];
        let mut col_seen = vec![ValueSet::EMPTY; size];
        let mut box_seen = vec![ValueSet::EMPTY; size];

        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &symbol) in cells.iter().enumerate() {
                if symbol.is_empty() {
                    continue;
                }
                let Some(value) = symbol.value() else {
                    return Err(BoardError::UndecodableSymbol { row, col, symbol });
                };
                if value == 0 || usize::from(value) > size {
                    return Err(BoardError::ValueOutOfRange {
                        row,
                        col,
                        value,
                        size,
                    });
                }
                // row and col fit in u8 once the shape checks pass
                #[expect(clippy::cast_possible_truncation)]
                let box_index = usize::from(shape.box_index(row as u8, col as u8));
                let house = if row_seen[row].contains(value) {
                    Some(HouseKind::Row)
                } else if col_seen[col].contains(value) {
                    Some(HouseKind::Column)
                } else if box_seen[box_index].contains(value) {
                    Some(HouseKind::Box)
                } else {
                    None
                };
                if let Some(house) = house {
                    return Err(BoardError::Duplicate {
                        row,
                        col,
                        value,
                        house,
                    });
                }
                row_seen[row].insert(value);
                col_seen[col].insert(value);
                box_seen[box_index].insert(value);
            }
        }
        Ok(())
    }

    /// Returns `true` if the board violates none of the structural rules.
    ///
    /// Equivalent to `self.check().is_ok()`; see [`check`](Self::check)
    /// for the rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the text form: one row per line, one character per cell.
    ///
    /// Spaces and tabs between cells are ignored, as are blank lines, so
    /// rows and boxes may be grouped visually. Characters that could never
    /// be a cell (anything but `-`, letters, and digits) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (line_index, line) in s.lines().enumerate() {
            let mut cells = Vec::new();
            for (char_index, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                if ch != '-' && !ch.is_ascii_alphanumeric() {
                    return Err(ParseBoardError {
                        line: line_index + 1,
                        column: char_index + 1,
                        ch,
                    });
                }
                cells.push(Symbol::new(ch));
            }
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        Ok(Self { rows })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (col, symbol) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
