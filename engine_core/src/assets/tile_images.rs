// engine_core/src/assets/tile_images.rs
use std::collections::HashMap;
use crate::tiles::tile::TileCategory;

/// Images for every tile variant, keyed by category then variant index.
#[derive(Debug, Clone)]
pub struct TileImages<I> {
    images: HashMap<TileCategory, Vec<I>>,
}

impl<I> Default for TileImages<I> {
    fn default() -> Self {
        Self { images: HashMap::new() }
    }
}

impl<I> TileImages<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the variants of a category.
    pub fn insert(&mut self, category: TileCategory, variants: Vec<I>) {
        self.images.insert(category, variants);
    }

    pub fn get(&self, category: TileCategory, variant: u32) -> Option<&I> {
        self.images.get(&category)?.get(variant as usize)
    }

    pub fn variants(&self, category: TileCategory) -> &[I] {
        self.images.get(&category).map_or(&[], Vec::as_slice)
    }
}
