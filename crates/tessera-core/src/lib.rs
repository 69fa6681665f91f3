//! **tessera-core**: the tile-graphics compositing engine.
//!
//! This crate provides the value types of a character-cell display
//! (positions, sizes, styled tiles, tileset handles), the [`TileMap`]
//! storage, and the drawing surfaces built on top of it. Surfaces implement
//! the [`TileGraphics`] contract: point draws, clipped region blits,
//! full-surface overlays, fill, transform, clear, and atomic snapshots.

pub mod builder;
pub mod error;
pub mod fast;
pub mod geom;
pub mod graphics;
pub mod sparse;
pub mod style;
pub mod tile;
pub mod tile_map;
pub mod tileset;

pub use builder::{Backing, TileGraphicsBuilder};
pub use error::{Error, Result};
pub use fast::FastTileGraphics;
pub use geom::{Position, Positions, Size};
pub use graphics::{StorageLayout, TileComposite, TileGraphics, TileGraphicsState, TileSource};
pub use sparse::SparseTileGraphics;
pub use style::{Color, Modifiers, Style};
pub use tile::Tile;
pub use tile_map::{Entry, TileMap};
pub use tileset::Tileset;
