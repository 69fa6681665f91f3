//! Placing a run of tiles onto a surface of a given size.
//!
//! [`layout`] is pure: it only computes where each tile goes. Anything that
//! would land past the last column or row is left out.

use tessera_core::{Error, Position, Result, Size, Tile};

/// How a run of text continues once a row is full.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextWrap {
    /// Stay on the starting row; the rest is truncated.
    NoWrap,
    /// Continue at column 0 of the next row, splitting anywhere.
    CharacterWrap,
    /// Move whole words to the next row when they do not fit. Words longer
    /// than a full row are split like [`CharacterWrap`](TextWrap::CharacterWrap).
    #[default]
    WordWrap,
}

/// Compute the position of every tile of `tiles` laid out on a `bounds`
/// surface starting at `offset`.
///
/// Fails with [`Error::OffsetOutOfBounds`] if `offset` is not inside
/// `bounds`. Tiles that do not fit are dropped from the result.
pub fn layout(
    tiles: &[Tile],
    wrap: TextWrap,
    bounds: Size,
    offset: Position,
) -> Result<Vec<(Position, Tile)>> {
    if !bounds.contains(offset) {
        return Err(Error::OffsetOutOfBounds {
            offset,
            size: bounds,
        });
    }
    let mut cursor = Cursor::new(bounds, offset);
    match wrap {
        TextWrap::NoWrap => {
            for &tile in tiles {
                if !cursor.place_on_row(tile) {
                    break;
                }
            }
        }
        TextWrap::CharacterWrap => {
            for &tile in tiles {
                if !cursor.place_wrapping(tile) {
                    break;
                }
            }
        }
        TextWrap::WordWrap => word_wrap(tiles, &mut cursor),
    }
    Ok(cursor.placed)
}

fn word_wrap(tiles: &[Tile], cursor: &mut Cursor) {
    let width = cursor.bounds.columns();
    for (word, separator) in Words::new(tiles) {
        if word.len() > width {
            for &tile in word {
                if !cursor.place_wrapping(tile) {
                    return;
                }
            }
        } else if !word.is_empty() {
            let needed = (word.len() + separator.len()).min(width);
            if cursor.column + needed > width && !cursor.next_row() {
                return;
            }
            for &tile in word {
                cursor.place_on_row(tile);
            }
        }
        // Separators never start a new row; the ones past the edge vanish.
        for &tile in separator {
            if !cursor.place_on_row(tile) {
                break;
            }
        }
        if cursor.exhausted() {
            return;
        }
    }
}

#[derive(Debug)]
struct Cursor {
    bounds: Size,
    column: usize,
    row: usize,
    placed: Vec<(Position, Tile)>,
}

impl Cursor {
    fn new(bounds: Size, start: Position) -> Self {
        Self {
            bounds,
            column: start.column,
            row: start.row,
            placed: Vec::new(),
        }
    }

    fn exhausted(&self) -> bool {
        self.row >= self.bounds.rows()
    }

    /// Move to the start of the next row. `false` once the rows run out.
    fn next_row(&mut self) -> bool {
        self.column = 0;
        self.row += 1;
        !self.exhausted()
    }

    /// Place at the cursor without wrapping. `false` if the row is full.
    fn place_on_row(&mut self, tile: Tile) -> bool {
        if self.exhausted() || self.column >= self.bounds.columns() {
            return false;
        }
        self.placed
            .push((Position::new(self.column, self.row), tile));
        self.column += 1;
        true
    }

    /// Place at the cursor, wrapping first if the row is full.
    fn place_wrapping(&mut self, tile: Tile) -> bool {
        if self.column >= self.bounds.columns() && !self.next_row() {
            return false;
        }
        self.place_on_row(tile)
    }
}

/// Splits a run into `(word, trailing whitespace)` pairs. Leading whitespace
/// comes out as a pair with an empty word.
struct Words<'a> {
    rest: &'a [Tile],
}

impl<'a> Words<'a> {
    fn new(tiles: &'a [Tile]) -> Self {
        Self { rest: tiles }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (&'a [Tile], &'a [Tile]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let word_end = self
            .rest
            .iter()
            .position(|t| t.ch.is_whitespace())
            .unwrap_or(self.rest.len());
        let (word, after) = self.rest.split_at(word_end);
        let sep_end = after
            .iter()
            .position(|t| !t.ch.is_whitespace())
            .unwrap_or(after.len());
        let (separator, rest) = after.split_at(sep_end);
        self.rest = rest;
        Some((word, separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(s: &str) -> Vec<Tile> {
        s.chars().map(Tile::new).collect()
    }

    /// Render the placements as one string per row, `.` for untouched cells.
    fn render(placed: &[(Position, Tile)], bounds: Size) -> Vec<String> {
        let mut rows = vec![vec!['.'; bounds.columns()]; bounds.rows()];
        for (p, t) in placed {
            rows[p.row][p.column] = t.ch;
        }
        rows.into_iter().map(|r| r.into_iter().collect()).collect()
    }

    fn run(s: &str, wrap: TextWrap, columns: usize, rows: usize, offset: Position) -> Vec<String> {
        let bounds = Size::new(columns, rows);
        let placed = layout(&tiles(s), wrap, bounds, offset).unwrap();
        render(&placed, bounds)
    }

    #[test]
    fn words_split_keeps_separators() {
        let t = tiles("  ab c  d");
        let words: Vec<(usize, usize)> = Words::new(&t).map(|(w, s)| (w.len(), s.len())).collect();
        assert_eq!(words, vec![(0, 2), (2, 1), (1, 2), (1, 0)]);
    }

    #[test]
    fn no_wrap_truncates_at_the_edge() {
        assert_eq!(run("TEXT", TextWrap::NoWrap, 2, 2, Position::ORIGIN), vec!["TE", ".."]);
        assert_eq!(
            run("TEXT", TextWrap::NoWrap, 2, 2, Position::OFFSET_1X1),
            vec!["..", ".T"]
        );
    }

    #[test]
    fn character_wrap_continues_at_column_zero() {
        assert_eq!(
            run("TEXT", TextWrap::CharacterWrap, 2, 2, Position::new(1, 0)),
            vec![".T", "EX"]
        );
        assert_eq!(
            run("TEXTTEXT", TextWrap::CharacterWrap, 2, 2, Position::ORIGIN),
            vec!["TE", "XT"]
        );
    }

    #[test]
    fn word_wrap_moves_words_and_splits_long_ones() {
        assert_eq!(
            run("a test thghty", TextWrap::WordWrap, 5, 4, Position::ORIGIN),
            vec!["a ...", "test ", "thght", "y...."]
        );
    }

    #[test]
    fn word_wrap_keeps_short_words_together() {
        assert_eq!(
            run("ab cd ef", TextWrap::WordWrap, 4, 3, Position::ORIGIN),
            vec!["ab .", "cd .", "ef.."]
        );
    }

    #[test]
    fn word_wrap_reserves_room_for_the_trailing_separator() {
        // "to " needs three cells but only two are left after "hello ".
        assert_eq!(
            run("hello to you", TextWrap::WordWrap, 8, 2, Position::ORIGIN),
            vec!["hello ..", "to you.."]
        );
    }

    #[test]
    fn word_wrap_long_word_starts_at_the_cursor() {
        assert_eq!(
            run("TEXT", TextWrap::WordWrap, 2, 2, Position::new(1, 0)),
            vec![".T", "EX"]
        );
    }

    #[test]
    fn word_wrap_truncates_when_rows_run_out() {
        assert_eq!(
            run("one two three", TextWrap::WordWrap, 5, 2, Position::ORIGIN),
            vec!["one .", "two ."]
        );
    }

    #[test]
    fn word_wrap_honours_the_starting_offset() {
        assert_eq!(
            run("ab cd", TextWrap::WordWrap, 5, 2, Position::new(2, 0)),
            vec!["..ab ", "cd..."]
        );
    }

    #[test]
    fn leading_whitespace_is_drawn() {
        assert_eq!(
            run("  x", TextWrap::WordWrap, 4, 1, Position::ORIGIN),
            vec!["  x."]
        );
    }

    #[test]
    fn offset_outside_is_rejected() {
        let t = tiles("TEXT");
        for offset in [Position::new(2, 1), Position::new(1, 2)] {
            let err = layout(&t, TextWrap::NoWrap, Size::new(2, 2), offset).unwrap_err();
            assert_eq!(
                err,
                Error::OffsetOutOfBounds {
                    offset,
                    size: Size::new(2, 2)
                }
            );
        }
        assert!(layout(&t, TextWrap::WordWrap, Size::ZERO, Position::ORIGIN).is_err());
    }

    #[test]
    fn empty_text_places_nothing() {
        for wrap in [TextWrap::NoWrap, TextWrap::CharacterWrap, TextWrap::WordWrap] {
            assert!(layout(&[], wrap, Size::new(3, 3), Position::ORIGIN).unwrap().is_empty());
        }
    }
}
