use crate::state::Dimensions;

/// Tunable parameters for one puzzle session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Board rows.
    pub rows: u32,
    /// Board columns.
    pub cols: u32,
    /// Value of every freshly spawned tile. Must be a positive power of two.
    pub spawn_value: u32,
    /// Tiles placed by the facade when a session starts.
    pub opening_tiles: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DIMENSION: u32 = 4;
    pub const MIN_TILE_VALUE: u32 = 2;
    pub const DEFAULT_OPENING_TILES: u32 = 2;

    pub fn new() -> Self {
        Self {
            rows: Self::DEFAULT_DIMENSION,
            cols: Self::DEFAULT_DIMENSION,
            spawn_value: Self::MIN_TILE_VALUE,
            opening_tiles: Self::DEFAULT_OPENING_TILES,
        }
    }

    pub fn with_dimensions(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::new()
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
