//! Structural validation of generalized number-place (Sudoku) boards.
//!
//! This crate checks whether an N×N grid of single-character symbols is a
//! structurally valid (not necessarily solved) number-place board: square,
//! with N a perfect square, every filled cell encoding a value in `1..=N`,
//! and no value repeated within a row, column, or sub-box.
//!
//! # Overview
//!
//! The crate is organized around a few small types:
//!
//! - [`symbol`]: [`Symbol`], a single-character cell symbol with total
//!   decoding (digits, uppercase letters, the `-` empty marker)
//! - [`value_set`]: [`ValueSet`], a bitmask set of cell values used to
//!   track which values a row, column, or box has already seen
//! - [`shape`]: [`BoardShape`], dimension bookkeeping (side length N and
//!   sub-box side k, with k² = N)
//! - [`board`]: [`Board`], the grid itself, its text form, and the
//!   validator ([`Board::check`] and [`Board::is_valid`])
//!
//! Validation never panics and never mutates the board: every input,
//! however malformed, maps to a result. [`Board::check`] names the first
//! violated rule as a [`BoardError`]; [`Board::is_valid`] collapses that to
//! a boolean.
//!
//! # Examples
//!
//! ```
//! use gridcheck_board::Board;
//!
//! let board: Board = "
//!     53--7----
//!     6--195---
//!     -98----6-
//!     8---6---3
//!     4--8-3--1
//!     7---2---6
//!     -6----28-
//!     ---419--5
//!     ----8--79
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(board.is_valid());
//! ```
//!
//! Boards are not limited to 9×9; any perfect-square side length whose
//! values fit in one symbol works the same way:
//!
//! ```
//! use gridcheck_board::Board;
//!
//! let board: Board = "
//!     12 34
//!     34 12
//!
//!     21 43
//!     43 21
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(board.is_valid());
//! ```

pub mod board;
pub mod shape;
pub mod symbol;
pub mod value_set;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, HouseKind, ParseBoardError},
    shape::BoardShape,
    symbol::Symbol,
    value_set::ValueSet,
};
