//! A writer thread repaints whole rows while a reader keeps taking
//! snapshots. Every row of every snapshot must be uniform: a mixed row would
//! mean a snapshot was taken in the middle of a blit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tessera_core::{
    FastTileGraphics, Position, Size, SparseTileGraphics, Tile, TileGraphics, Tileset,
};

const SIZE: Size = Size::new(16, 8);

fn row_of(ch: char) -> Vec<(Position, Tile)> {
    SIZE.positions().map(|p| (p, Tile::new(ch))).collect()
}

fn hammer(surface: Arc<dyn TileGraphics>) {
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let surface = Arc::clone(&surface);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let frames = [row_of('a'), row_of('b'), row_of('c')];
            for i in 0..2_000 {
                surface.draw_tiles(&frames[i % frames.len()], Position::ORIGIN, SIZE);
                if i % 97 == 0 {
                    surface.clear();
                }
            }
            done.store(true, Ordering::SeqCst);
        })
    };

    let mut snapshots = 0usize;
    while !done.load(Ordering::SeqCst) || snapshots == 0 {
        let state = surface.state();
        assert_eq!(state.size, SIZE);
        let chars: Vec<Option<char>> = SIZE
            .positions()
            .map(|p| state.tiles.get(p).map(|t| t.ch))
            .collect();
        assert!(
            chars.windows(2).all(|w| w[0] == w[1]),
            "torn snapshot: {chars:?}"
        );
        snapshots += 1;
    }
    writer.join().unwrap();
}

#[test]
fn dense_snapshots_are_never_torn() {
    hammer(Arc::new(FastTileGraphics::new(SIZE, Tileset::anonymous())));
}

#[test]
fn sparse_snapshots_are_never_torn() {
    hammer(Arc::new(SparseTileGraphics::new(SIZE, Tileset::anonymous())));
}

#[test]
fn surfaces_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastTileGraphics>();
    assert_send_sync::<SparseTileGraphics>();
}
