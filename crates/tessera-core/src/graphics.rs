//! The drawing contract shared by every surface implementation.
//!
//! * [`TileSource`]: anything that can enumerate `(Position, Tile)` pairs;
//!   the input of a region blit.
//! * [`TileComposite`]: a readable, fixed-size block of tiles that can be
//!   overlaid onto a surface.
//! * [`TileGraphics`]: a mutable surface. Every method takes `&self`: each
//!   implementation guards its storage with one lock of its own, so a
//!   surface can be shared between threads behind an `Arc` and every call is
//!   atomic with respect to the others.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::geom::{Position, Size};
use crate::tile::Tile;
use crate::tile_map::TileMap;
use crate::tileset::Tileset;

// ---------------------------------------------------------------------------
// TileSource
// ---------------------------------------------------------------------------

/// A collection of positioned tiles.
pub trait TileSource {
    /// Call `f` once per stored `(position, tile)` pair.
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile));
}

impl TileSource for TileMap {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        for (p, tile) in self.entries() {
            f(p, tile);
        }
    }
}

impl TileSource for BTreeMap<Position, Tile> {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        for (&p, &tile) in self {
            f(p, tile);
        }
    }
}

impl<S: BuildHasher> TileSource for HashMap<Position, Tile, S> {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        for (&p, &tile) in self {
            f(p, tile);
        }
    }
}

impl TileSource for &[(Position, Tile)] {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        for &(p, tile) in self.iter() {
            f(p, tile);
        }
    }
}

impl<const N: usize> TileSource for [(Position, Tile); N] {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        self.as_slice().for_each_tile(f);
    }
}

impl TileSource for Vec<(Position, Tile)> {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        self.as_slice().for_each_tile(f);
    }
}

// ---------------------------------------------------------------------------
// TileComposite
// ---------------------------------------------------------------------------

/// How a composite keeps its tiles. Surfaces report this so a destination
/// can pick a bulk copy when both sides share a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StorageLayout {
    /// One row-major slot per cell (see [`TileMap`]).
    Dense,
    /// Only occupied cells are stored.
    Sparse,
}

/// A readable block of tiles with a fixed size.
pub trait TileComposite {
    fn size(&self) -> Size;

    /// The tile at `p`, or `None` when nothing is stored there or `p` lies
    /// outside of [`size`](TileComposite::size).
    fn tile_at(&self, p: Position) -> Option<Tile>;

    /// An independent copy of the current content.
    fn tiles(&self) -> TileMap;

    fn layout(&self) -> StorageLayout;

    /// The tileset the content was drawn for, if the composite has one.
    fn source_tileset(&self) -> Option<Tileset> {
        None
    }
}

impl TileComposite for TileMap {
    fn size(&self) -> Size {
        TileMap::size(self)
    }

    fn tile_at(&self, p: Position) -> Option<Tile> {
        self.get(p)
    }

    fn tiles(&self) -> TileMap {
        self.create_copy()
    }

    fn layout(&self) -> StorageLayout {
        StorageLayout::Dense
    }
}

// ---------------------------------------------------------------------------
// TileGraphicsState
// ---------------------------------------------------------------------------

/// A snapshot of a surface, captured atomically by
/// [`TileGraphics::state`]. It owns its tiles: later changes to the surface
/// are not visible through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGraphicsState {
    pub size: Size,
    pub tileset: Tileset,
    pub tiles: TileMap,
}

impl TileComposite for TileGraphicsState {
    fn size(&self) -> Size {
        self.size
    }

    fn tile_at(&self, p: Position) -> Option<Tile> {
        self.tiles.get(p)
    }

    fn tiles(&self) -> TileMap {
        self.tiles.create_copy()
    }

    fn layout(&self) -> StorageLayout {
        StorageLayout::Dense
    }

    fn source_tileset(&self) -> Option<Tileset> {
        Some(self.tileset.clone())
    }
}

impl TileSource for TileGraphicsState {
    fn for_each_tile(&self, f: &mut dyn FnMut(Position, Tile)) {
        self.tiles.for_each_tile(f);
    }
}

// ---------------------------------------------------------------------------
// TileGraphics
// ---------------------------------------------------------------------------

/// A mutable, fixed-size drawing surface.
///
/// Drawing outside of the surface is silently clipped cell by cell. Writing
/// [`Tile::EMPTY`] removes the content of a cell.
///
/// Callbacks handed to [`transform`](TileGraphics::transform) run while the
/// surface is locked and must not call back into the same surface.
pub trait TileGraphics: TileComposite + Send + Sync {
    fn tileset(&self) -> Tileset;

    /// Overwrite the cell at `p`. No-op when `p` is outside.
    fn draw_tile(&self, tile: Tile, p: Position);

    /// Blit: every `(p, tile)` of `source` with `p` inside `area` is written
    /// at `p + offset`, unless that lands outside of this surface.
    fn draw_tiles(&self, source: &dyn TileSource, offset: Position, area: Size);

    /// Overlay `other` at the origin. Same result as
    /// `draw_tiles(&other.tiles(), Position::ORIGIN, other.size())`.
    fn draw_composite(&self, other: &dyn TileComposite) {
        self.draw_tiles(&other.tiles(), Position::ORIGIN, other.size());
    }

    /// Put `filler` into every empty cell. Occupied cells are kept; an empty
    /// filler does nothing.
    fn fill(&self, filler: Tile);

    /// Replace every cell with `f(position, current)`. `current` is
    /// [`Tile::EMPTY`] for empty cells, and always reflects the state before
    /// this call.
    fn transform(&self, f: &mut dyn FnMut(Position, Tile) -> Tile);

    /// Remove all content.
    fn clear(&self);

    /// Size, tileset and a deep copy of the tiles, taken under one lock.
    fn state(&self) -> TileGraphicsState;
}

/// Clip `source` against `area` and `bounds` and hand every surviving,
/// translated tile to `write`. Returns how many tiles were written.
pub(crate) fn blit(
    source: &dyn TileSource,
    offset: Position,
    area: Size,
    bounds: Size,
    mut write: impl FnMut(Position, Tile),
) -> usize {
    let mut written = 0;
    source.for_each_tile(&mut |p, tile| {
        if !area.contains(p) {
            return;
        }
        if let Some(target) = p.checked_add(offset) {
            if bounds.contains(target) {
                write(target, tile);
                written += 1;
            }
        }
    });
    written
}
