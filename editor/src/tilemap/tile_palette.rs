// editor/src/tilemap/tile_palette.rs
use engine_core::assets::tile_images::TileImages;
use engine_core::tiles::tile::TileCategory;
use macroquad::prelude::*;
use strum::IntoEnumIterator;

/// One category in the palette, with the image size of each variant.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub category: TileCategory,
    pub sizes: Vec<Vec2>,
}

/// The tile the editor paints with.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePalette {
    entries: Vec<PaletteEntry>,
    group: usize,
    variant: usize,
}

impl TilePalette {
    /// Entries without variants are dropped.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        let entries = entries.into_iter().filter(|e| !e.sizes.is_empty()).collect();
        Self { entries, group: 0, variant: 0 }
    }

    /// One entry per category that has images, in category order.
    pub fn from_images<I, F>(images: &TileImages<I>, size_of: F) -> Self
    where
        F: Fn(&I) -> Vec2,
    {
        let entries = TileCategory::iter()
            .map(|category| PaletteEntry {
                category,
                sizes: images.variants(category).iter().map(&size_of).collect(),
            })
            .collect();
        Self::new(entries)
    }

    /// Returns the selected category and variant, or `None` when the palette
    /// is empty.
    #[inline]
    pub fn selected(&self) -> Option<(TileCategory, u32)> {
        self.entries
            .get(self.group)
            .map(|entry| (entry.category, self.variant as u32))
    }

    /// Steps to another category and resets the variant.
    pub fn cycle_category(&mut self, step: i32) {
        if self.entries.is_empty() {
            return;
        }
        self.group = wrap(self.group, step, self.entries.len());
        self.variant = 0;
    }

    /// Steps to another variant of the selected category.
    pub fn cycle_variant(&mut self, step: i32) {
        if let Some(entry) = self.entries.get(self.group) {
            self.variant = wrap(self.variant, step, entry.sizes.len());
        }
    }

    /// Image size of a variant, if the palette knows it.
    pub fn image_size(&self, category: TileCategory, variant: u32) -> Option<Vec2> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)?
            .sizes
            .get(variant as usize)
            .copied()
    }
}

fn wrap(index: usize, step: i32, len: usize) -> usize {
    (index as i64 + step as i64).rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> TilePalette {
        let mut images = TileImages::new();
        images.insert(TileCategory::Decor, vec![vec2(16.0, 16.0); 4]);
        images.insert(TileCategory::Grass, vec![vec2(16.0, 16.0); 9]);
        images.insert(TileCategory::LargeDecor, vec![vec2(50.0, 40.0); 3]);
        images.insert(TileCategory::Spawners, vec![vec2(16.0, 16.0); 2]);
        TilePalette::from_images(&images, |size| *size)
    }

    #[test]
    fn categories_without_images_are_skipped() {
        let mut palette = palette();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(palette.selected().unwrap().0);
            palette.cycle_category(1);
        }
        assert_eq!(
            seen,
            vec![TileCategory::Decor, TileCategory::Grass, TileCategory::LargeDecor, TileCategory::Spawners]
        );
        assert_eq!(palette.selected(), Some((TileCategory::Decor, 0)));
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut palette = palette();
        palette.cycle_category(-1);
        assert_eq!(palette.selected(), Some((TileCategory::Spawners, 0)));

        palette.cycle_variant(-1);
        assert_eq!(palette.selected(), Some((TileCategory::Spawners, 1)));
        palette.cycle_variant(1);
        assert_eq!(palette.selected(), Some((TileCategory::Spawners, 0)));
    }

    #[test]
    fn changing_category_resets_variant() {
        let mut palette = palette();
        palette.cycle_variant(3);
        assert_eq!(palette.selected(), Some((TileCategory::Decor, 3)));
        palette.cycle_category(1);
        assert_eq!(palette.selected(), Some((TileCategory::Grass, 0)));
    }

    #[test]
    fn empty_palette_selects_nothing() {
        let mut palette = TilePalette::new(Vec::new());
        palette.cycle_category(1);
        palette.cycle_variant(1);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn image_sizes_are_looked_up_by_variant() {
        let palette = palette();
        assert_eq!(palette.image_size(TileCategory::LargeDecor, 2), Some(vec2(50.0, 40.0)));
        assert_eq!(palette.image_size(TileCategory::LargeDecor, 3), None);
        assert_eq!(palette.image_size(TileCategory::Stone, 0), None);
    }
}
