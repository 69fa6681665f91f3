//! Tileset handles.
//!
//! The compositor never looks inside a tileset: it stores the handle, hands
//! it back in snapshots, and compares two handles by identity when deciding
//! whether two surfaces share a storage layout.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
struct TilesetInfo {
    id: u64,
    name: String,
    tile_width: u32,
    tile_height: u32,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A shared, opaque reference to a font or tile-image resource.
///
/// Cloning yields another handle to the same resource. Two handles are equal
/// only if they came from the same [`Tileset::new`] call.
#[derive(Clone)]
pub struct Tileset {
    info: Arc<TilesetInfo>,
}

impl Tileset {
    /// Register a new tileset. `tile_width`/`tile_height` are in pixels and
    /// only carried for the rendering backend.
    pub fn new(name: impl Into<String>, tile_width: u32, tile_height: u32) -> Self {
        Self {
            info: Arc::new(TilesetInfo {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                name: name.into(),
                tile_width,
                tile_height,
            }),
        }
    }

    /// A fresh tileset with no backing resource.
    pub fn anonymous() -> Self {
        Self::new("anonymous", 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Tile size in pixels (width, height).
    pub fn tile_size(&self) -> (u32, u32) {
        (self.info.tile_width, self.info.tile_height)
    }

    /// Identity comparison.
    #[inline]
    pub fn same_as(&self, other: &Tileset) -> bool {
        Arc::ptr_eq(&self.info, &other.info)
    }
}

impl Default for Tileset {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl PartialEq for Tileset {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Tileset {}

impl fmt::Debug for Tileset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tileset")
            .field("id", &self.info.id)
            .field("name", &self.info.name)
            .field("tile_size", &self.tile_size())
            .finish()
    }
}
