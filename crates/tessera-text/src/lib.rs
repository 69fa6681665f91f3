//! Styled strings and text layout for tessera surfaces.
//!
//! A [`StyledString`] is a run of [`Tile`](tessera_core::Tile)s with a
//! [`TextWrap`] policy. Drawing it computes every placement with [`layout`]
//! first and then writes them to the surface in one blit.

mod layout;
mod styled_string;

pub use layout::{TextWrap, layout};
pub use styled_string::StyledString;
