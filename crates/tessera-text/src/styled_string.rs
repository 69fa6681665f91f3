//! [`StyledString`]: text turned into styled tiles, ready to be laid out.

use std::ops::Add;

use tessera_core::{Color, Modifiers, Position, Result, Style, Tile, TileGraphics};

use crate::layout::{TextWrap, layout};

/// Drawn in place of NUL, whose default-styled tile is [`Tile::EMPTY`].
const NUL_REPLACEMENT: char = '\u{FFFD}';

/// A string turned into a run of styled tiles, plus the wrap policy used
/// when it is drawn.
///
/// Building one never touches a surface; only [`draw_onto`](Self::draw_onto)
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledString {
    tiles: Vec<Tile>,
    wrap: TextWrap,
}

impl StyledString {
    // -- Constructors --

    /// `text` in the default style, word-wrapped.
    pub fn new(text: &str) -> Self {
        Self::styled(text, Style::default())
    }

    /// Every character of `text` gets `style`. NUL becomes U+FFFD so that
    /// text can never produce an empty tile and erase what it is drawn over.
    pub fn styled(text: &str, style: Style) -> Self {
        Self {
            tiles: text
                .chars()
                .map(|ch| if ch == '\0' { NUL_REPLACEMENT } else { ch })
                .map(|ch| Tile::styled(ch, style))
                .collect(),
            wrap: TextWrap::default(),
        }
    }

    // -- Builders --

    pub fn with_wrap(mut self, wrap: TextWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Restyle every tile.
    pub fn with_style(mut self, style: Style) -> Self {
        for t in &mut self.tiles {
            t.style = style;
        }
        self
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        for t in &mut self.tiles {
            t.style.fg = fg;
        }
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        for t in &mut self.tiles {
            t.style.bg = bg;
        }
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        for t in &mut self.tiles {
            t.style.modifiers = modifiers;
        }
        self
    }

    // -- Accessors --

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn wrap(&self) -> TextWrap {
        self.wrap
    }

    /// Number of characters (one tile each).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The plain characters, without styling.
    pub fn text(&self) -> String {
        self.tiles.iter().map(|t| t.ch).collect()
    }

    /// Concatenate. The result keeps `self`'s wrap policy; nothing is laid
    /// out.
    pub fn plus(&self, other: &StyledString) -> StyledString {
        let mut tiles = Vec::with_capacity(self.tiles.len() + other.tiles.len());
        tiles.extend_from_slice(&self.tiles);
        tiles.extend_from_slice(&other.tiles);
        StyledString {
            tiles,
            wrap: self.wrap,
        }
    }

    // -- Drawing --

    /// Lay the string out on `target` starting at `offset`.
    ///
    /// Returns the number of tiles drawn; the rest was truncated at the
    /// surface edge. Fails without drawing anything if `offset` is outside
    /// of `target`. All tiles are written in a single blit, so a concurrent
    /// snapshot sees either none or all of them.
    pub fn draw_onto(&self, target: &dyn TileGraphics, offset: Position) -> Result<usize> {
        let size = target.size();
        let placed = layout(&self.tiles, self.wrap, size, offset)?;
        log::trace!(
            "laid out {} of {} tiles on a {size} surface at {offset}",
            placed.len(),
            self.tiles.len()
        );
        target.draw_tiles(&placed, Position::ORIGIN, size);
        Ok(placed.len())
    }

    /// [`draw_onto`](Self::draw_onto) at the origin.
    pub fn draw_onto_origin(&self, target: &dyn TileGraphics) -> Result<usize> {
        self.draw_onto(target, Position::ORIGIN)
    }
}

impl Add for StyledString {
    type Output = StyledString;

    fn add(mut self, rhs: StyledString) -> StyledString {
        self.tiles.extend(rhs.tiles);
        self
    }
}

impl From<&str> for StyledString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
