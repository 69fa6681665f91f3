//! The [`Tile`] type: a single styled character cell, or nothing at all.

use crate::style::{Color, Modifiers, Style};

/// A styled character cell.
///
/// [`Tile::EMPTY`] means "no content". Surfaces never store it: writing an
/// empty tile removes whatever was at that position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub ch: char,
    pub style: Style,
}

impl Tile {
    /// The empty sentinel.
    pub const EMPTY: Self = Self {
        ch: '\0',
        style: Style::DEFAULT,
    };

    /// A tile showing `ch` in the default style.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::DEFAULT,
        }
    }

    #[inline]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.style = self.style.with_fg(fg);
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.style = self.style.with_bg(bg);
        self
    }

    #[inline]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.style = self.style.with_modifiers(modifiers);
        self
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
