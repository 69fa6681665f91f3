//! [`SparseTileGraphics`]: a surface that only stores occupied cells.
//!
//! Useful for large, mostly empty surfaces. It honours the same contract as
//! [`FastTileGraphics`](crate::FastTileGraphics), with readers sharing the
//! lock and writers taking it exclusively.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::geom::{Position, Size};
use crate::graphics::{
    StorageLayout, TileComposite, TileGraphics, TileGraphicsState, TileSource, blit,
};
use crate::tile::Tile;
use crate::tile_map::TileMap;
use crate::tileset::Tileset;

#[derive(Debug)]
pub struct SparseTileGraphics {
    size: Size,
    tileset: Tileset,
    tiles: RwLock<BTreeMap<Position, Tile>>,
}

impl SparseTileGraphics {
    pub fn new(size: Size, tileset: Tileset) -> Self {
        Self::with_tiles(size, tileset, std::iter::empty())
    }

    /// A surface pre-populated with `tiles`. Tiles outside of `size` and
    /// empty tiles are dropped.
    pub fn with_tiles(
        size: Size,
        tileset: Tileset,
        tiles: impl IntoIterator<Item = (Position, Tile)>,
    ) -> Self {
        let mut map = BTreeMap::new();
        let mut dropped = 0usize;
        for (p, tile) in tiles {
            if !size.contains(p) {
                dropped += 1;
            } else if !tile.is_empty() {
                map.insert(p, tile);
            }
        }
        if dropped > 0 {
            log::warn!("dropped {dropped} initial tiles outside of a {size} surface");
        }
        Self {
            size,
            tileset,
            tiles: RwLock::new(map),
        }
    }

    /// Occupied cells, in row-major order.
    pub fn contents(&self) -> Vec<(Position, Tile)> {
        self.read().iter().map(|(&p, &t)| (p, t)).collect()
    }

    /// A new surface of `size` holding the tiles of this one that still fit.
    pub fn resized(&self, size: Size) -> Self {
        log::debug!("resizing sparse surface {} -> {size}", self.size);
        Self::with_tiles(
            size,
            self.tileset.clone(),
            self.contents().into_iter().filter(|&(p, _)| size.contains(p)),
        )
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<Position, Tile>> {
        self.tiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<Position, Tile>> {
        self.tiles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn put(map: &mut BTreeMap<Position, Tile>, p: Position, tile: Tile) {
    if tile.is_empty() {
        map.remove(&p);
    } else {
        map.insert(p, tile);
    }
}

impl TileComposite for SparseTileGraphics {
    fn size(&self) -> Size {
        self.size
    }

    fn tile_at(&self, p: Position) -> Option<Tile> {
        self.read().get(&p).copied()
    }

    fn tiles(&self) -> TileMap {
        TileMap::from_entries(self.size, self.read().iter().map(|(&p, &t)| (p, t)))
    }

    fn layout(&self) -> StorageLayout {
        StorageLayout::Sparse
    }

    fn source_tileset(&self) -> Option<Tileset> {
        Some(self.tileset.clone())
    }
}

impl TileGraphics for SparseTileGraphics {
    fn tileset(&self) -> Tileset {
        self.tileset.clone()
    }

    fn draw_tile(&self, tile: Tile, p: Position) {
        if self.size.contains(p) {
            put(&mut self.write(), p, tile);
        }
    }

    fn draw_tiles(&self, source: &dyn TileSource, offset: Position, area: Size) {
        let mut map = self.write();
        let written = blit(source, offset, area, self.size, |p, tile| {
            put(&mut map, p, tile);
        });
        log::trace!("blit wrote {written} tiles at offset {offset}");
    }

    fn fill(&self, filler: Tile) {
        if filler.is_empty() {
            return;
        }
        let mut map = self.write();
        for p in self.size.positions() {
            map.entry(p).or_insert(filler);
        }
    }

    fn transform(&self, f: &mut dyn FnMut(Position, Tile) -> Tile) {
        let mut map = self.write();
        let before = std::mem::take(&mut *map);
        for p in self.size.positions() {
            let current = before.get(&p).copied().unwrap_or(Tile::EMPTY);
            put(&mut map, p, f(p, current));
        }
    }

    fn clear(&self) {
        log::debug!("clearing {} sparse surface", self.size);
        self.write().clear();
    }

    fn state(&self) -> TileGraphicsState {
        let map = self.read();
        TileGraphicsState {
            size: self.size,
            tileset: self.tileset.clone(),
            tiles: TileMap::from_entries(self.size, map.iter().map(|(&p, &t)| (p, t))),
        }
    }
}
