use engine_core::tiles::tile::{GridPos, OffgridTile, TileCategory};
use engine_core::tiles::tilemap::TileStore;
use macroquad::prelude::*;

fn cell_center(store: &TileStore, pos: GridPos) -> Vec2 {
    store.grid_to_pixel(pos) + Vec2::splat(store.tile_size() as f32 / 2.0)
}

#[test]
fn placed_tile_is_seen_from_every_adjacent_cell() {
    let mut store = TileStore::new(16);
    let placed = GridPos::new(4, -2);
    store.set(placed, TileCategory::Grass, 3);

    for dx in -1..=1 {
        for dy in -1..=1 {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let cell = placed.offset(dx, dy).unwrap();
            let neighbors = store.get_neighbors(cell);
            assert!(
                neighbors.iter().any(|tile| tile.grid_position == placed
                    && tile.category == TileCategory::Grass
                    && tile.variant == 3),
                "missing from neighbours of {:?}",
                cell
            );
        }
    }
}

#[test]
fn neighbors_are_sparse() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(0, 0), TileCategory::Stone, 0);
    store.set(GridPos::new(1, 1), TileCategory::Decor, 0);

    assert_eq!(store.get_neighbors(GridPos::new(5, 5)).len(), 0);
    assert_eq!(store.get_neighbors(GridPos::new(1, 0)).len(), 2);
}

#[test]
fn removed_solid_tile_stops_blocking() {
    let mut store = TileStore::new(16);
    let pos = GridPos::new(2, 7);
    store.set(pos, TileCategory::Stone, 0);
    assert!(store.solid_check(cell_center(&store, pos)));

    store.remove(pos);
    assert!(!store.solid_check(cell_center(&store, pos)));

    // Removing again is a no-op
    assert_eq!(store.remove(pos), None);
}

#[test]
fn only_solid_categories_block() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(0, 0), TileCategory::Decor, 0);
    store.set(GridPos::new(1, 0), TileCategory::Spawners, 1);
    store.set(GridPos::new(2, 0), TileCategory::LargeDecor, 0);
    store.set(GridPos::new(3, 0), TileCategory::Grass, 0);

    assert!(!store.solid_check(vec2(8.0, 8.0)));
    assert!(!store.solid_check(vec2(24.0, 8.0)));
    assert!(store.solid_check(vec2(40.0, 8.0)));
    assert!(store.solid_check(vec2(56.0, 8.0)));
    // Cell edges belong to the cell on their right
    assert!(!store.solid_check(vec2(64.0, 8.0)));
}

#[test]
fn physics_rects_cover_the_solid_block_around_a_point() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(5, 5), TileCategory::Stone, 0);
    store.set(GridPos::new(6, 6), TileCategory::Grass, 0);
    store.set(GridPos::new(4, 4), TileCategory::Decor, 0);
    // Too far away
    store.set(GridPos::new(8, 5), TileCategory::Stone, 0);

    let mut rects = store.physics_rects_around(vec2(90.0, 90.0));
    rects.sort_by(|a, b| a.x.total_cmp(&b.x));

    assert_eq!(
        rects,
        vec![Rect::new(80.0, 80.0, 16.0, 16.0), Rect::new(96.0, 96.0, 16.0, 16.0)]
    );
}

#[test]
fn extract_spawner_returns_pixel_position_and_removes_it() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(2, 3), TileCategory::Spawners, 0);
    store.set(GridPos::new(0, 0), TileCategory::Stone, 0);

    let extracted = store.extract(&[(TileCategory::Spawners, 0)], false);

    assert_eq!(
        extracted,
        vec![OffgridTile::new(vec2(32.0, 48.0), TileCategory::Spawners, 0)]
    );
    assert_eq!(store.get(GridPos::new(2, 3)), None);
    assert!(store.get(GridPos::new(0, 0)).is_some());
}

#[test]
fn extract_with_keep_copies() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(1, 1), TileCategory::LargeDecor, 2);

    let extracted = store.extract(&[(TileCategory::LargeDecor, 2)], true);

    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted[0].pixel_position, vec2(16.0, 16.0));
    assert!(store.get(GridPos::new(1, 1)).is_some());
}

#[test]
fn extract_is_ordered_and_leaves_other_tiles_in_place() {
    let mut store = TileStore::new(16);
    store.push_offgrid(OffgridTile::new(vec2(1.0, 1.0), TileCategory::Decor, 0));
    store.push_offgrid(OffgridTile::new(vec2(2.0, 2.0), TileCategory::Spawners, 1));
    store.push_offgrid(OffgridTile::new(vec2(3.0, 3.0), TileCategory::Decor, 1));
    store.set(GridPos::new(9, 1), TileCategory::Spawners, 1);
    store.set(GridPos::new(0, 2), TileCategory::Spawners, 0);
    store.set(GridPos::new(3, 1), TileCategory::Spawners, 0);
    store.set(GridPos::new(5, 5), TileCategory::Spawners, 2);

    let extracted = store.extract(
        &[(TileCategory::Spawners, 0), (TileCategory::Spawners, 1)],
        false,
    );

    let positions: Vec<Vec2> = extracted.iter().map(|t| t.pixel_position).collect();
    assert_eq!(
        positions,
        vec![vec2(2.0, 2.0), vec2(48.0, 16.0), vec2(144.0, 16.0), vec2(0.0, 32.0)]
    );

    let remaining: Vec<Vec2> = store.offgrid().iter().map(|t| t.pixel_position).collect();
    assert_eq!(remaining, vec![vec2(1.0, 1.0), vec2(3.0, 3.0)]);
    assert_eq!(store.len(), 1);
    assert!(store.get(GridPos::new(5, 5)).is_some());
}

#[test]
fn cells_at_the_grid_edge_have_no_wrapped_neighbors() {
    let mut store = TileStore::new(16);
    let edge = GridPos::new(i32::MAX, 0);
    store.set(edge, TileCategory::Grass, 3);
    store.set(GridPos::new(i32::MIN, 0), TileCategory::Grass, 0);
    store.set(GridPos::new(i32::MAX - 1, 0), TileCategory::Grass, 0);

    let neighbors = store.get_neighbors(edge);
    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].grid_position, GridPos::new(i32::MAX - 1, 0));

    assert!(store.get_neighbors(GridPos::new(i32::MIN, i32::MIN)).is_empty());

    // Only the left neighbour counts, which no rule covers
    store.autotile();
    assert_eq!(store.get(edge).map(|tile| tile.variant), Some(3));
}

#[test]
fn far_away_pixels_saturate_instead_of_wrapping() {
    let mut store = TileStore::new(16);
    store.set(GridPos::new(i32::MIN, 0), TileCategory::Stone, 0);
    store.set(GridPos::new(i32::MAX, 0), TileCategory::Stone, 0);

    assert_eq!(store.pixel_to_grid(vec2(1.0e12, 0.0)), GridPos::new(i32::MAX, 0));

    let rects = store.physics_rects_around(vec2(1.0e12, 0.0));
    assert_eq!(rects.len(), 1);
    assert!(rects[0].x > 0.0);

    assert_eq!(store.tiles_around(vec2(-1.0e12, 0.0)).len(), 1);
    assert!(store.solid_check(vec2(1.0e12, 0.0)));
}
