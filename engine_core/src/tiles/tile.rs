// engine_core/src/tiles/tile.rs
use std::fmt;
use std::str::FromStr;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, FromInto};
use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

/// Every kind of tile the editor can place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, EnumIter, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileCategory {
    Decor,
    Grass,
    LargeDecor,
    Stone,
    Spawners,
}

/// What a category is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTraits {
    /// Blocks movement.
    pub solid: bool,
    /// Picks its variant from its neighbours when autotiling.
    pub autotile: bool,
}

/// Indexed by `TileCategory as usize`.
const CATEGORY_TABLE: [CategoryTraits; 5] = [
    // Decor
    CategoryTraits { solid: false, autotile: false },
    // Grass
    CategoryTraits { solid: true, autotile: true },
    // LargeDecor
    CategoryTraits { solid: true, autotile: false },
    // Stone
    CategoryTraits { solid: true, autotile: true },
    // Spawners
    CategoryTraits { solid: false, autotile: false },
];

impl TileCategory {
    pub const fn traits(self) -> CategoryTraits {
        CATEGORY_TABLE[self as usize]
    }

    pub const fn is_solid(self) -> bool {
        self.traits().solid
    }

    pub const fn is_autotiled(self) -> bool {
        self.traits().autotile
    }
}

/// Integer cell coordinate on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos(pub IVec2);

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        GridPos(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 { self.0.x }
    pub fn y(&self) -> i32 { self.0.y }

    /// The cell `dx`, `dy` cells away from this one, or `None` past the
    /// edge of the `i32` grid.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(GridPos::new(self.0.x.checked_add(dx)?, self.0.y.checked_add(dy)?))
    }
}

impl From<[i32; 2]> for GridPos {
    fn from([x, y]: [i32; 2]) -> Self {
        GridPos::new(x, y)
    }
}

impl From<GridPos> for [i32; 2] {
    fn from(pos: GridPos) -> Self {
        [pos.x(), pos.y()]
    }
}

/// Renders as the `x;y` key used in map files.
impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.0.x, self.0.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grid key '{0}', expected 'x;y'")]
pub struct ParseGridPosError(pub String);

impl FromStr for GridPos {
    type Err = ParseGridPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGridPosError(s.to_string());
        let (x, y) = s.split_once(';').ok_or_else(err)?;
        let x = x.trim().parse::<i32>().map_err(|_| err())?;
        let y = y.trim().parse::<i32>().map_err(|_| err())?;
        Ok(GridPos::new(x, y))
    }
}

/// A tile snapped to a grid cell.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(alias = "type")]
    pub category: TileCategory,
    pub variant: u32,
    #[serde(alias = "pos")]
    #[serde_as(as = "FromInto<[i32; 2]>")]
    pub grid_position: GridPos,
}

impl Tile {
    pub fn new(grid_position: GridPos, category: TileCategory, variant: u32) -> Self {
        Self { category, variant, grid_position }
    }

    pub fn is_solid(&self) -> bool {
        self.category.is_solid()
    }

    pub fn matches(&self, filters: &[(TileCategory, u32)]) -> bool {
        filters.contains(&(self.category, self.variant))
    }
}

/// A decorative tile placed at raw pixel coordinates.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffgridTile {
    #[serde(alias = "type")]
    pub category: TileCategory,
    pub variant: u32,
    #[serde(alias = "pos")]
    #[serde_as(as = "FromInto<[f32; 2]>")]
    pub pixel_position: Vec2,
}

impl OffgridTile {
    pub fn new(pixel_position: Vec2, category: TileCategory, variant: u32) -> Self {
        Self { category, variant, pixel_position }
    }

    pub fn matches(&self, filters: &[(TileCategory, u32)]) -> bool {
        filters.contains(&(self.category, self.variant))
    }
}
