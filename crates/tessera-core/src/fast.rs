//! [`FastTileGraphics`]: the array-backed surface.
//!
//! Trades memory for speed: every cell owns a slot in a [`TileMap`], so a
//! point draw is one index computation and an overlay between two surfaces
//! of the same shape is a straight slot-by-slot copy.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::geom::{Position, Size};
use crate::graphics::{
    StorageLayout, TileComposite, TileGraphics, TileGraphicsState, TileSource, blit,
};
use crate::tile::Tile;
use crate::tile_map::TileMap;
use crate::tileset::Tileset;

/// A dense, thread-safe drawing surface.
///
/// Size and tileset are fixed at construction. To change the size, build a
/// new surface with [`resized`](FastTileGraphics::resized).
#[derive(Debug)]
pub struct FastTileGraphics {
    size: Size,
    tileset: Tileset,
    tiles: Mutex<TileMap>,
}

impl FastTileGraphics {
    /// An empty surface.
    pub fn new(size: Size, tileset: Tileset) -> Self {
        Self {
            size,
            tileset,
            tiles: Mutex::new(TileMap::new(size)),
        }
    }

    /// A surface pre-populated with `tiles`. Tiles outside of `size` are
    /// dropped.
    pub fn with_tiles(
        size: Size,
        tileset: Tileset,
        tiles: impl IntoIterator<Item = (Position, Tile)>,
    ) -> Self {
        let mut map = TileMap::new(size);
        let mut dropped = 0usize;
        for (p, tile) in tiles {
            if !map.set(p, tile) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::warn!("dropped {dropped} initial tiles outside of a {size} surface");
        }
        log::debug!("created {size} dense surface with {} tiles", map.len());
        Self {
            size,
            tileset,
            tiles: Mutex::new(map),
        }
    }

    /// Occupied cells, in row-major order.
    pub fn contents(&self) -> Vec<(Position, Tile)> {
        self.lock().entries().collect()
    }

    /// A new surface of `size` holding the tiles of this one that still fit.
    pub fn resized(&self, size: Size) -> Self {
        log::debug!("resizing dense surface {} -> {size}", self.size);
        Self::with_tiles(
            size,
            self.tileset.clone(),
            self.lock().entries().filter(|&(p, _)| size.contains(p)),
        )
    }

    fn lock(&self) -> MutexGuard<'_, TileMap> {
        self.tiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `other` keeps its tiles exactly the way this surface does, so
    /// an overlay can skip per-entry clipping.
    fn shares_layout_with(&self, other: &dyn TileComposite) -> bool {
        other.layout() == StorageLayout::Dense
            && other.size() == self.size
            && other
                .source_tileset()
                .is_some_and(|t| t.same_as(&self.tileset))
    }
}

impl TileComposite for FastTileGraphics {
    fn size(&self) -> Size {
        self.size
    }

    fn tile_at(&self, p: Position) -> Option<Tile> {
        self.lock().get(p)
    }

    fn tiles(&self) -> TileMap {
        self.lock().create_copy()
    }

    fn layout(&self) -> StorageLayout {
        StorageLayout::Dense
    }

    fn source_tileset(&self) -> Option<Tileset> {
        Some(self.tileset.clone())
    }
}

impl TileGraphics for FastTileGraphics {
    fn tileset(&self) -> Tileset {
        self.tileset.clone()
    }

    fn draw_tile(&self, tile: Tile, p: Position) {
        if self.size.contains(p) {
            self.lock().set(p, tile);
        }
    }

    fn draw_tiles(&self, source: &dyn TileSource, offset: Position, area: Size) {
        let mut map = self.lock();
        let written = blit(source, offset, area, self.size, |p, tile| {
            map.set(p, tile);
        });
        log::trace!("blit wrote {written} tiles at offset {offset}");
    }

    fn draw_composite(&self, other: &dyn TileComposite) {
        // Copy the source before locking ourselves: `other` may be this very
        // surface, and its lock is not reentrant.
        let src = other.tiles();
        if self.shares_layout_with(other) {
            let written = self.lock().overlay_same_layout(&src);
            log::trace!("overlay took the same-layout path, {written} tiles");
        } else {
            self.draw_tiles(&src, Position::ORIGIN, other.size());
        }
    }

    fn fill(&self, filler: Tile) {
        if filler.is_empty() {
            return;
        }
        self.lock().fill_absent(filler);
    }

    fn transform(&self, f: &mut dyn FnMut(Position, Tile) -> Tile) {
        self.lock().transform(f);
    }

    fn clear(&self) {
        log::debug!("clearing {} dense surface", self.size);
        self.lock().clear();
    }

    fn state(&self) -> TileGraphicsState {
        let tiles = self.lock().create_copy();
        TileGraphicsState {
            size: self.size,
            tileset: self.tileset.clone(),
            tiles,
        }
    }
}
