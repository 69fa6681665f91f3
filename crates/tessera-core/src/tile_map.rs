//! [`TileMap`]: fixed-size, array-backed storage of `Position -> Tile`.
//!
//! Storage is dense (one slot per cell, row-major) but behaves like a sparse
//! map: empty tiles are never stored, so a slot is either absent or holds a
//! non-empty tile together with its position.

use crate::geom::{Position, Size};
use crate::tile::Tile;

/// An occupied slot. The position always equals the slot's row-major
/// decoding; it is kept so enumeration and copies need no index math.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub position: Position,
    pub tile: Tile,
}

/// A fixed-size 2D map of tiles.
///
/// Reads and writes outside of [`size`](TileMap::size) are ignored: `get`
/// answers `None` and `set` reports that nothing was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    size: Size,
    slots: Vec<Option<Entry>>,
}

impl TileMap {
    /// An empty map of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            slots: vec![None; size.area()],
        }
    }

    /// Build a map from `(Position, Tile)` pairs, dropping pairs outside of
    /// `size` and empty tiles.
    pub fn from_entries(size: Size, entries: impl IntoIterator<Item = (Position, Tile)>) -> Self {
        let mut map = Self::new(size);
        for (p, tile) in entries {
            map.set(p, tile);
        }
        map
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The tile stored at `p`, if any.
    #[inline]
    pub fn get(&self, p: Position) -> Option<Tile> {
        let i = self.size.index_of(p)?;
        self.slots[i].map(|e| e.tile)
    }

    /// Whether a tile is stored at `p`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.get(p).is_some()
    }

    /// Write `tile` at `p`. An empty tile clears the slot. Returns `false`
    /// if `p` is outside of the map and nothing was written.
    pub fn set(&mut self, p: Position, tile: Tile) -> bool {
        match self.size.index_of(p) {
            Some(i) => {
                self.slots[i] = occupied(p, tile);
                true
            }
            None => false,
        }
    }

    /// Clear the slot at `p`, returning what was there.
    pub fn remove(&mut self, p: Position) -> Option<Tile> {
        let i = self.size.index_of(p)?;
        self.slots[i].take().map(|e| e.tile)
    }

    /// Occupied slots in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.slots.iter().flatten().map(|e| (e.position, e.tile))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// An independent deep copy. Nothing is shared with `self`.
    #[inline]
    pub fn create_copy(&self) -> Self {
        self.clone()
    }

    /// Mark every slot absent by swapping in fresh storage.
    pub fn clear(&mut self) {
        self.slots = vec![None; self.size.area()];
    }

    /// Populate absent slots with `filler`; occupied slots are left alone.
    /// Returns the number of slots written.
    pub(crate) fn fill_absent(&mut self, filler: Tile) -> usize {
        if filler.is_empty() {
            return 0;
        }
        let size = self.size;
        let mut written = 0;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                if let Some(position) = size.position_at(i) {
                    *slot = Some(Entry {
                        position,
                        tile: filler,
                    });
                    written += 1;
                }
            }
        }
        written
    }

    /// Replace every cell with `f(position, current)`, where `current` is the
    /// stored tile or [`Tile::EMPTY`]. All inputs come from the state before
    /// the call.
    pub(crate) fn transform(&mut self, f: &mut dyn FnMut(Position, Tile) -> Tile) {
        let before = std::mem::take(&mut self.slots);
        self.slots = self
            .size
            .positions()
            .zip(before)
            .map(|(p, slot)| {
                let current = slot.map_or(Tile::EMPTY, |e| e.tile);
                occupied(p, f(p, current))
            })
            .collect();
    }

    /// Copy every occupied slot of `src` into the same slot of `self`.
    ///
    /// Only valid when both maps have the same size; callers check that
    /// first. Absent source slots leave the destination untouched, which is
    /// exactly what a per-entry blit at the origin does.
    pub(crate) fn overlay_same_layout(&mut self, src: &TileMap) -> usize {
        debug_assert_eq!(self.size, src.size);
        let mut written = 0;
        for (dst, slot) in self.slots.iter_mut().zip(&src.slots) {
            if slot.is_some() {
                *dst = *slot;
                written += 1;
            }
        }
        written
    }
}

#[inline]
fn occupied(position: Position, tile: Tile) -> Option<Entry> {
    if tile.is_empty() {
        None
    } else {
        Some(Entry { position, tile })
    }
}
