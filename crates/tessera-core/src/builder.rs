//! Surface configuration.

use crate::fast::FastTileGraphics;
use crate::geom::{Position, Size};
use crate::graphics::TileGraphics;
use crate::sparse::SparseTileGraphics;
use crate::tile::Tile;
use crate::tileset::Tileset;

/// Storage strategy behind a surface built by [`TileGraphicsBuilder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Backing {
    /// One slot per cell ([`FastTileGraphics`]).
    #[default]
    Dense,
    /// Occupied cells only ([`SparseTileGraphics`]).
    Sparse,
}

/// Configuration for a new surface.
#[derive(Debug, Clone)]
pub struct TileGraphicsBuilder {
    /// Fixed size of the surface.
    pub size: Size,
    /// Resource handle carried along for the renderer.
    pub tileset: Tileset,
    /// Initial content. Entries outside of `size` are dropped.
    pub tiles: Vec<(Position, Tile)>,
    /// Storage strategy.
    pub backing: Backing,
}

impl Default for TileGraphicsBuilder {
    fn default() -> Self {
        Self {
            size: Size::DEFAULT_TERMINAL,
            tileset: Tileset::anonymous(),
            tiles: Vec::new(),
            backing: Backing::Dense,
        }
    }
}

impl TileGraphicsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_tileset(mut self, tileset: Tileset) -> Self {
        self.tileset = tileset;
        self
    }

    /// Add one pre-populated tile.
    pub fn with_tile(mut self, p: Position, tile: Tile) -> Self {
        self.tiles.push((p, tile));
        self
    }

    pub fn with_tiles(mut self, tiles: impl IntoIterator<Item = (Position, Tile)>) -> Self {
        self.tiles.extend(tiles);
        self
    }

    pub fn with_backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    /// Build a surface with the configured backing.
    pub fn build(self) -> Box<dyn TileGraphics> {
        match self.backing {
            Backing::Dense => Box::new(self.build_fast()),
            Backing::Sparse => Box::new(self.build_sparse()),
        }
    }

    /// Build a dense surface regardless of [`backing`](Self::backing).
    pub fn build_fast(self) -> FastTileGraphics {
        FastTileGraphics::with_tiles(self.size, self.tileset, self.tiles)
    }

    /// Build a sparse surface regardless of [`backing`](Self::backing).
    pub fn build_sparse(self) -> SparseTileGraphics {
        SparseTileGraphics::with_tiles(self.size, self.tileset, self.tiles)
    }
}
