//! Board state: positions, tiles, and the grid itself.
//!
//! The grid owns every tile; consumers read state through [`GridView`]
//! copies and mutate it exclusively through [`Grid`] operations.
mod grid;
mod position;
mod tile;

pub use grid::{Grid, GridView, MigrateOutcome};
pub use position::{Dimensions, Position};
pub use tile::Tile;
