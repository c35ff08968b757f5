use engine_core::tiles::tile::{GridPos, TileCategory};
use engine_core::tiles::tilemap::TileStore;

fn variant_at(store: &TileStore, x: i32, y: i32) -> u32 {
    store.get(GridPos::new(x, y)).map(|t| t.variant).unwrap()
}

/// A 3x3 block of grass with a lone stone beside it.
fn block() -> TileStore {
    let mut store = TileStore::new(16);
    for x in 0..3 {
        for y in 0..3 {
            store.set(GridPos::new(x, y), TileCategory::Grass, 0);
        }
    }
    store.set(GridPos::new(5, 5), TileCategory::Stone, 4);
    store
}

#[test]
fn block_edges_get_their_variants() {
    let mut store = block();
    store.autotile();

    assert_eq!(variant_at(&store, 0, 0), 0);
    assert_eq!(variant_at(&store, 1, 0), 1);
    assert_eq!(variant_at(&store, 2, 0), 2);
    assert_eq!(variant_at(&store, 2, 1), 3);
    assert_eq!(variant_at(&store, 2, 2), 4);
    assert_eq!(variant_at(&store, 1, 2), 5);
    assert_eq!(variant_at(&store, 0, 2), 6);
    assert_eq!(variant_at(&store, 0, 1), 7);
    assert_eq!(variant_at(&store, 1, 1), 8);
}

#[test]
fn unmatched_layouts_keep_their_variant() {
    let mut store = block();
    store.autotile();
    assert_eq!(variant_at(&store, 5, 5), 4);
}

#[test]
fn non_autotile_categories_are_untouched() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(0, 0), TileCategory::Decor, 2);
    store.set(GridPos::new(1, 0), TileCategory::Decor, 2);
    store.set(GridPos::new(0, 1), TileCategory::Decor, 2);

    store.autotile();

    assert_eq!(variant_at(&store, 0, 0), 2);
}

#[test]
fn autotile_is_idempotent() {
    let mut store = block();
    store.set(GridPos::new(7, 0), TileCategory::Stone, 0);
    store.set(GridPos::new(7, 1), TileCategory::Stone, 0);
    store.set(GridPos::new(8, 1), TileCategory::Stone, 0);

    store.autotile();
    let first = store.clone();
    store.autotile();

    assert_eq!(store, first);
}
