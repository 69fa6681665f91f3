//! Geometry primitives: [`Position`] and [`Size`].
//!
//! Coordinates are zero-based and unsigned: column grows right, row grows
//! down. A [`Size`] owns the row-major index mapping used by every piece of
//! storage in the crate, so there is exactly one place where a position is
//! turned into a slot index and back.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on a surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    /// The top-left corner (0, 0).
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    /// One cell right and one cell down from the origin.
    pub const OFFSET_1X1: Self = Self { column: 1, row: 1 };

    /// Stands in for "no position", e.g. a hidden cursor. Never contained in
    /// any [`Size`].
    pub const UNKNOWN: Self = Self {
        column: usize::MAX,
        row: usize::MAX,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Create a position from signed coordinates, rejecting negatives.
    pub fn try_new(column: i64, row: i64) -> Result<Self> {
        match (usize::try_from(column), usize::try_from(row)) {
            (Ok(c), Ok(r)) => Ok(Self::new(c, r)),
            _ => Err(Error::NegativeCoordinate { column, row }),
        }
    }

    /// Component-wise sum. `None` on overflow (only reachable from
    /// [`UNKNOWN`](Self::UNKNOWN) or similarly huge values).
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match (
            self.column.checked_add(other.column),
            self.row.checked_add(other.row),
        ) {
            (Some(column), Some(row)) => Some(Self { column, row }),
            _ => None,
        }
    }

    /// Component-wise sum, clamped at `usize::MAX`. Anything added to
    /// [`UNKNOWN`](Self::UNKNOWN) stays `UNKNOWN`.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            column: self.column.saturating_add(other.column),
            row: self.row.saturating_add(other.row),
        }
    }

    /// Component-wise difference. Fails if either component would go below
    /// zero.
    pub fn minus(self, other: Self) -> Result<Self> {
        match (
            self.column.checked_sub(other.column),
            self.row.checked_sub(other.row),
        ) {
            (Some(column), Some(row)) => Ok(Self { column, row }),
            _ => Err(Error::PositionUnderflow {
                lhs: self,
                rhs: other,
            }),
        }
    }

    /// Same row, different column.
    #[inline]
    pub const fn with_column(self, column: usize) -> Self {
        Self { column, ..self }
    }

    /// Same column, different row.
    #[inline]
    pub const fn with_row(self, row: usize) -> Self {
        Self { row, ..self }
    }

    /// Shift the column by a signed delta.
    pub fn with_relative_column(self, delta: i64) -> Result<Self> {
        self.shifted(delta, 0)
    }

    /// Shift the row by a signed delta.
    pub fn with_relative_row(self, delta: i64) -> Result<Self> {
        self.shifted(0, delta)
    }

    /// Positive deltas saturate at `usize::MAX`; going below zero is a
    /// [`PositionUnderflow`](Error::PositionUnderflow).
    fn shifted(self, dc: i64, dr: i64) -> Result<Self> {
        let (forward_c, back_c) = split_delta(dc);
        let (forward_r, back_r) = split_delta(dr);
        self.saturating_add(Self::new(forward_c, forward_r))
            .minus(Self::new(back_c, back_r))
    }

    /// Reinterpret as a size: `(2, 3)` becomes 2 columns by 3 rows.
    #[inline]
    pub fn to_size(self) -> Size {
        Size::new(self.column, self.row)
    }
}

/// Split a signed delta into `(forward, back)` magnitudes.
fn split_delta(delta: i64) -> (usize, usize) {
    let magnitude = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
    if delta < 0 { (0, magnitude) } else { (magnitude, 0) }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    /// Row-major: lower row first, then lower column.
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = Error;

    fn try_from((column, row): (i32, i32)) -> Result<Self> {
        Self::try_new(column.into(), row.into())
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A rectangular extent anchored at the origin.
///
/// A size with zero columns or zero rows is always the canonical
/// [`Size::ZERO`], so `Size::new(3, 0) == Size::new(0, 7)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSize", into = "RawSize"))]
pub struct Size {
    columns: usize,
    rows: usize,
}

impl Size {
    pub const ZERO: Self = Self {
        columns: 0,
        rows: 0,
    };

    pub const ONE: Self = Self {
        columns: 1,
        rows: 1,
    };

    /// The classic 80x24 terminal.
    pub const DEFAULT_TERMINAL: Self = Self {
        columns: 80,
        rows: 24,
    };

    /// Create a new size, normalizing degenerate extents to [`Size::ZERO`].
    #[inline]
    pub const fn new(columns: usize, rows: usize) -> Self {
        if columns == 0 || rows == 0 {
            Self::ZERO
        } else {
            Self { columns, rows }
        }
    }

    /// Create a size from signed dimensions, rejecting negatives.
    pub fn try_new(columns: i64, rows: i64) -> Result<Self> {
        match (usize::try_from(columns), usize::try_from(rows)) {
            (Ok(c), Ok(r)) => Ok(Self::new(c, r)),
            _ => Err(Error::NegativeDimension { columns, rows }),
        }
    }

    #[inline]
    pub const fn columns(self) -> usize {
        self.columns
    }

    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of cells.
    #[inline]
    pub const fn area(self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.columns == 0
    }

    /// Whether `0 <= p.column < columns` and `0 <= p.row < rows`.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.column < self.columns && p.row < self.rows
    }

    /// Row-major slot index of `p`, or `None` when `p` lies outside.
    #[inline]
    pub const fn index_of(self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.row * self.columns + p.column)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub const fn position_at(self, index: usize) -> Option<Position> {
        if index >= self.area() {
            return None;
        }
        let row = index / self.columns;
        let column = index - row * self.columns;
        Some(Position::new(column, row))
    }

    /// Every contained position, left to right then top to bottom.
    #[inline]
    pub fn positions(self) -> Positions {
        Positions {
            size: self,
            next: 0,
        }
    }

    pub fn top_left(self) -> Option<Position> {
        self.corner(0, 0)
    }

    pub fn top_right(self) -> Option<Position> {
        self.corner(self.columns.saturating_sub(1), 0)
    }

    pub fn bottom_left(self) -> Option<Position> {
        self.corner(0, self.rows.saturating_sub(1))
    }

    pub fn bottom_right(self) -> Option<Position> {
        self.corner(self.columns.saturating_sub(1), self.rows.saturating_sub(1))
    }

    fn corner(self, column: usize, row: usize) -> Option<Position> {
        if self.is_zero() {
            None
        } else {
            Some(Position::new(column, row))
        }
    }

    #[inline]
    pub const fn with_columns(self, columns: usize) -> Self {
        Self::new(columns, self.rows)
    }

    #[inline]
    pub const fn with_rows(self, rows: usize) -> Self {
        Self::new(self.columns, rows)
    }

    /// Component-wise sum, clamped at `usize::MAX`.
    #[inline]
    pub const fn plus(self, other: Self) -> Self {
        Self::new(
            self.columns.saturating_add(other.columns),
            self.rows.saturating_add(other.rows),
        )
    }

    /// Largest extent on each axis: 3x5 and 5x3 give 5x5.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.columns.max(other.columns),
            self.rows.max(other.rows),
        )
    }

    /// Smallest extent on each axis: 3x5 and 5x3 give 3x3.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.columns.min(other.columns),
            self.rows.min(other.rows),
        )
    }

    /// The cell just past the top-right corner, for placing something to the
    /// right of this extent.
    #[inline]
    pub const fn to_right_position(self) -> Position {
        Position::new(self.columns, 0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl IntoIterator for Size {
    type Item = Position;
    type IntoIter = Positions;
    #[inline]
    fn into_iter(self) -> Positions {
        self.positions()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSize {
    columns: usize,
    rows: usize,
}

#[cfg(feature = "serde")]
impl From<RawSize> for Size {
    fn from(raw: RawSize) -> Self {
        Self::new(raw.columns, raw.rows)
    }
}

#[cfg(feature = "serde")]
impl From<Size> for RawSize {
    fn from(size: Size) -> Self {
        Self {
            columns: size.columns,
            rows: size.rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions of a [`Size`].
#[derive(Clone, Debug)]
pub struct Positions {
    size: Size,
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let p = self.size.position_at(self.next)?;
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.area().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}
