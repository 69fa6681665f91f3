//! Property tests for the compositing contract.
//!
//! Every property runs against both storage strategies so the dense and
//! sparse surfaces cannot drift apart.

use proptest::prelude::*;
use tessera_core::{
    FastTileGraphics, Position, Size, SparseTileGraphics, Tile, TileComposite, TileGraphics,
    TileMap, Tileset,
};

fn size_strategy() -> impl Strategy<Value = Size> {
    (1usize..12, 1usize..12).prop_map(|(c, r)| Size::new(c, r))
}

fn tile_strategy() -> impl Strategy<Value = Tile> {
    prop_oneof![
        1 => Just(Tile::EMPTY),
        4 => proptest::char::range('a', 'z').prop_map(Tile::new),
    ]
}

fn draws_strategy() -> impl Strategy<Value = Vec<(Position, Tile)>> {
    prop::collection::vec(
        ((0usize..16, 0usize..16), tile_strategy())
            .prop_map(|((c, r), t)| (Position::new(c, r), t)),
        0..40,
    )
}

fn surfaces(size: Size) -> [Box<dyn TileGraphics>; 2] {
    let tileset = Tileset::anonymous();
    [
        Box::new(FastTileGraphics::new(size, tileset.clone())),
        Box::new(SparseTileGraphics::new(size, tileset)),
    ]
}

/// Reference model: a plain vector of cells, written one draw at a time.
fn model(size: Size, draws: &[(Position, Tile)]) -> Vec<Option<Tile>> {
    let mut cells = vec![None; size.area()];
    for &(p, t) in draws {
        if p.column < size.columns() && p.row < size.rows() {
            let i = p.row * size.columns() + p.column;
            cells[i] = if t.is_empty() { None } else { Some(t) };
        }
    }
    cells
}

proptest! {
    #[test]
    fn index_is_a_bijection(size in size_strategy()) {
        let mut seen = vec![false; size.area()];
        for p in size.positions() {
            let i = size.index_of(p).unwrap();
            prop_assert!(i < size.area());
            prop_assert!(!seen[i], "index {} hit twice", i);
            seen[i] = true;
            prop_assert_eq!(size.position_at(i), Some(p));
        }
        prop_assert!(seen.iter().all(|&s| s));
        prop_assert_eq!(size.position_at(size.area()), None);
    }

    #[test]
    fn point_draws_match_the_model(size in size_strategy(), draws in draws_strategy()) {
        let expected = model(size, &draws);
        for g in surfaces(size) {
            for &(p, t) in &draws {
                g.draw_tile(t, p);
            }
            let state = g.state();
            for p in size.positions() {
                let i = size.index_of(p).unwrap();
                prop_assert_eq!(state.tiles.get(p), expected[i]);
                prop_assert_eq!(g.tile_at(p), expected[i]);
            }
        }
    }

    #[test]
    fn fill_never_overwrites(size in size_strategy(), draws in draws_strategy()) {
        for g in surfaces(size) {
            for &(p, t) in &draws {
                g.draw_tile(t, p);
            }
            let before = g.tiles();
            g.fill(Tile::new('#'));
            for p in size.positions() {
                match before.get(p) {
                    Some(t) => prop_assert_eq!(g.tile_at(p), Some(t)),
                    None => prop_assert_eq!(g.tile_at(p), Some(Tile::new('#'))),
                }
            }
        }
    }

    #[test]
    fn transform_reads_only_the_prior_state(size in size_strategy(), draws in draws_strategy()) {
        for g in surfaces(size) {
            for &(p, t) in &draws {
                g.draw_tile(t, p);
            }
            let before = g.tiles();
            let mut inputs = Vec::new();
            // Every call writes a marker; none of them may show up as the
            // input of a later call.
            g.transform(&mut |p, t| {
                inputs.push((p, t));
                Tile::new('!')
            });
            prop_assert_eq!(inputs.len(), size.area());
            for (i, (p, t)) in inputs.into_iter().enumerate() {
                prop_assert_eq!(Some(p), size.position_at(i));
                prop_assert_eq!(t, before.get(p).unwrap_or(Tile::EMPTY));
            }
            prop_assert!(g.tiles().entries().all(|(_, t)| t == Tile::new('!')));
        }
    }

    #[test]
    fn same_layout_overlay_equals_general_blit(
        size in size_strategy(),
        below in draws_strategy(),
        above in draws_strategy(),
    ) {
        let tileset = Tileset::anonymous();
        let build = |ts: &Tileset, draws: &[(Position, Tile)]| {
            let g = FastTileGraphics::new(size, ts.clone());
            for &(p, t) in draws {
                g.draw_tile(t, p);
            }
            g
        };
        let src = build(&tileset, &above[..]);
        // Same tileset and size: the bulk slot copy applies.
        let fast = build(&tileset, &below[..]);
        fast.draw_composite(&src);
        // Different tileset: falls back to the per-entry blit.
        let general = build(&Tileset::anonymous(), &below[..]);
        general.draw_composite(&src);
        // And the spelled-out blit.
        let manual = build(&tileset, &below[..]);
        manual.draw_tiles(&src.tiles(), Position::ORIGIN, src.size());

        prop_assert_eq!(fast.tiles(), general.tiles());
        prop_assert_eq!(fast.tiles(), manual.tiles());
    }

    #[test]
    fn region_blit_lands_inside_or_nowhere(
        size in size_strategy(),
        draws in draws_strategy(),
        (oc, or) in (0usize..6, 0usize..6),
        (ac, ar) in (1usize..10, 1usize..10),
    ) {
        let source = TileMap::from_entries(Size::new(16, 16), draws);
        let offset = Position::new(oc, or);
        let area = Size::new(ac, ar);
        for g in surfaces(size) {
            g.draw_tiles(&source, offset, area);
            for p in size.positions() {
                let expected = p
                    .minus(offset)
                    .ok()
                    .filter(|&q| area.contains(q))
                    .and_then(|q| source.get(q));
                prop_assert_eq!(g.tile_at(p), expected);
            }
        }
    }

    #[test]
    fn snapshots_do_not_alias(size in size_strategy(), draws in draws_strategy()) {
        for g in surfaces(size) {
            for &(p, t) in &draws {
                g.draw_tile(t, p);
            }
            let snap = g.state();
            let copy = snap.tiles.create_copy();
            g.clear();
            g.fill(Tile::new('z'));
            prop_assert_eq!(&snap.tiles, &copy);
        }
    }
}
