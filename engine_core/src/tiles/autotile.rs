// engine_core/src/tiles/autotile.rs
use bitflags::bitflags;
use crate::tiles::tile::GridPos;
use crate::tiles::tilemap::TileStore;

bitflags! {
    /// Cardinal neighbours holding a tile of the same category.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Neighbors: u8 {
        const UP = 0b0001;
        const RIGHT = 0b0010;
        const DOWN = 0b0100;
        const LEFT = 0b1000;
    }
}

const CARDINALS: [(Neighbors, i32, i32); 4] = [
    (Neighbors::UP, 0, -1),
    (Neighbors::RIGHT, 1, 0),
    (Neighbors::DOWN, 0, 1),
    (Neighbors::LEFT, -1, 0),
];

/// Neighbour layouts that select a specific variant.
const AUTOTILE_RULES: [(Neighbors, u32); 9] = [
    (Neighbors::RIGHT.union(Neighbors::DOWN), 0),
    (Neighbors::LEFT.union(Neighbors::RIGHT).union(Neighbors::DOWN), 1),
    (Neighbors::LEFT.union(Neighbors::DOWN), 2),
    (Neighbors::LEFT.union(Neighbors::UP).union(Neighbors::DOWN), 3),
    (Neighbors::LEFT.union(Neighbors::UP), 4),
    (Neighbors::LEFT.union(Neighbors::UP).union(Neighbors::RIGHT), 5),
    (Neighbors::RIGHT.union(Neighbors::UP), 6),
    (Neighbors::RIGHT.union(Neighbors::UP).union(Neighbors::DOWN), 7),
    (Neighbors::all(), 8),
];

/// Variant for a neighbour layout, or `None` when no rule covers it.
pub fn autotile_variant(mask: Neighbors) -> Option<u32> {
    AUTOTILE_RULES
        .iter()
        .find(|(rule, _)| *rule == mask)
        .map(|(_, variant)| *variant)
}

impl TileStore {
    /// Which cardinal neighbours of `position` share its category.
    /// Empty cells produce an empty mask.
    pub fn neighbor_mask(&self, position: GridPos) -> Neighbors {
        let Some(tile) = self.get(position) else {
            return Neighbors::empty();
        };

        CARDINALS
            .iter()
            .filter(|(_, dx, dy)| {
                position
                    .offset(*dx, *dy)
                    .and_then(|neighbor| self.get(neighbor))
                    .is_some_and(|other| other.category == tile.category)
            })
            .fold(Neighbors::empty(), |mask, (flag, _, _)| mask | *flag)
    }

    /// Re-derive the variant of every autotiled tile from its neighbours.
    pub fn autotile(&mut self) {
        let updates: Vec<(GridPos, u32)> = self
            .tiles()
            .filter(|tile| tile.category.is_autotiled())
            .filter_map(|tile| {
                let variant = autotile_variant(self.neighbor_mask(tile.grid_position))?;
                Some((tile.grid_position, variant))
            })
            .collect();

        for (position, variant) in updates {
            if let Some(tile) = self.tiles.get_mut(&position) {
                tile.variant = variant;
            }
        }
    }
}
