//! Error type shared by the tessera crates.
//!
//! Every variant describes a structurally invalid argument handed to a
//! constructor or to the text layout engine. Drawing outside a surface is
//! never an error: it is clipped cell by cell.

use thiserror::Error;

use crate::geom::{Position, Size};

/// Invalid-argument conditions raised before any mutation takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position was built from a negative column or row.
    #[error("a position needs a non-negative column and row, got ({column}, {row})")]
    NegativeCoordinate { column: i64, row: i64 },

    /// A size was built from a negative column or row count.
    #[error("a size needs non-negative columns and rows, got {columns}x{rows}")]
    NegativeDimension { columns: i64, rows: i64 },

    /// Subtracting one position from another went below zero.
    #[error("subtracting {rhs} from {lhs} leaves the non-negative quadrant")]
    PositionUnderflow { lhs: Position, rhs: Position },

    /// A text layout was asked to start outside of its target surface.
    #[error("starting offset {offset} is outside of a {size} surface")]
    OffsetOutOfBounds { offset: Position, size: Size },
}

impl Error {
    /// All variants are programmer errors of the invalid-argument kind.
    ///
    /// Kept as a method so callers can tell "bad call" apart from a draw
    /// that was merely clipped, without matching on every variant.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeCoordinate { .. }
                | Self::NegativeDimension { .. }
                | Self::PositionUnderflow { .. }
                | Self::OffsetOutOfBounds { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
