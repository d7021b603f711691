use std::collections::BTreeSet;
use std::fmt;

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::GridError;
use crate::rng::{RngOracle, compute_seed};

use super::{Dimensions, Position, Tile};

/// The mutable board: a rows×cols array of optional tiles, plus the
/// independent snapshot array backing one level of undo.
///
/// Cells are stored flat in row-major order. Invariants: at most one tile
/// per cell, and a tile's stored position always matches its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<Option<Tile>>,
    snapshot: Vec<Option<Tile>>,
    current_max: u32,
    spawn_value: u32,

    /// Base seed for spawn placement, fixed at construction.
    game_seed: u64,
    /// Increments on every spawn so each placement draws an independent
    /// seed from the same reproducible sequence.
    spawn_nonce: u64,
}

impl Grid {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_seed(config, 0)
    }

    pub fn with_seed(config: &GameConfig, game_seed: u64) -> Self {
        let dimensions = config.dimensions();
        Self {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
            snapshot: vec![None; dimensions.cell_count()],
            current_max: 0,
            spawn_value: config.spawn_value,
            game_seed,
            spawn_nonce: 0,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Highest tile value reached so far in this grid's lifetime. Raised on
    /// spawn, placement, and merge; never lowered, not even by [`clear`].
    ///
    /// [`clear`]: Grid::clear
    pub fn current_max(&self) -> u32 {
        self.current_max
    }

    /// The tile at `position`, or `None` for an empty or out-of-range cell.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        self.cells[self.dimensions.index(position)].as_ref()
    }

    /// Unoccupied positions in row-major order, recomputed on each call.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.dimensions.position_at(index))
            .collect()
    }

    /// Occupied positions in row-major order, recomputed on each call.
    pub fn filled_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(index, _)| self.dimensions.position_at(index))
            .collect()
    }

    /// True while some swipe can still change the board: an empty cell
    /// exists, or two row- or column-adjacent tiles hold equal values.
    ///
    /// Checks immediate neighbors only. A full board without an adjacent
    /// equal pair has no legal move in any direction, so this is the
    /// complete game-over check despite never simulating a slide.
    pub fn is_moving_possible(&self) -> bool {
        if self.cells.iter().any(|cell| cell.is_none()) {
            return true;
        }
        for position in self.filled_positions() {
            for direction in [Direction::Down, Direction::Right] {
                if let Some(next) = self.dimensions.step(position, direction)
                    && let (Some(tile), Some(neighbor)) = (self.tile(position), self.tile(next))
                    && tile.merges_with(neighbor)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Read-only structural copy of the current cell values.
    pub fn view(&self) -> GridView {
        GridView {
            dimensions: self.dimensions,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.as_ref().map(|tile| tile.value()))
                .collect(),
        }
    }

    // ========================================================================
    // Spawning and placement
    // ========================================================================

    /// Places a minimum-value tile on a uniformly random empty cell.
    ///
    /// No-op on a full board. Returns the chosen position.
    pub fn spawn_tile<R: RngOracle + ?Sized>(&mut self, rng: &R) -> Option<Position> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let seed = compute_seed(self.game_seed, self.spawn_nonce);
        self.spawn_nonce += 1;

        let position = empty[rng.pick_index(seed, empty.len())];
        self.set_tile(Tile::new(position, self.spawn_value));
        self.current_max = self.current_max.max(self.spawn_value);
        Some(position)
    }

    /// Places a specific tile, for session start-up and scenario tests.
    pub fn place_tile(&mut self, position: Position, value: u32) -> Result<(), GridError> {
        if !self.dimensions.contains(position) {
            return Err(GridError::OutOfBounds { position });
        }
        if self.tile(position).is_some() {
            return Err(GridError::Occupied { position });
        }
        self.set_tile(Tile::new(position, value));
        self.current_max = self.current_max.max(value);
        Ok(())
    }

    // ========================================================================
    // Snapshot / undo
    // ========================================================================

    /// Copies the current cells into the snapshot array, overwriting any
    /// previous snapshot. Tiles are plain values, so the copy is fully
    /// independent of later cell mutation.
    pub fn take_snapshot(&mut self) {
        self.snapshot = self.cells.clone();
    }

    /// Replaces the cells with the snapshot contents: exactly one level of
    /// undo.
    pub fn restore_snapshot(&mut self) {
        self.cells = self.snapshot.clone();
    }

    /// Empties every cell. The snapshot array is left untouched.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    // ========================================================================
    // Migration
    // ========================================================================

    /// Slides every tile as far as possible toward `direction`, merging
    /// equal-valued tiles that collide.
    ///
    /// Occupied cells are resolved nearest-to-the-target-edge first, so a
    /// tile that has settled earlier in the pass is seen by the tiles behind
    /// it, at its current value, as an obstacle or a merge target. A tile
    /// absorbs at most one merge per call; a freshly merged tile blocks
    /// further merges until the next swipe.
    pub fn migrate(&mut self, direction: Direction) -> Result<MigrateOutcome, GridError> {
        let mut origins = self.filled_positions();
        origins.sort_by(direction.position_order());

        let mut outcome = MigrateOutcome::default();
        let mut merged = BTreeSet::new();

        for origin in origins {
            let destination = self.furthest_position(origin, direction, &merged)?;
            self.apply_move(origin, destination, &mut merged, &mut outcome)?;
        }

        Ok(outcome)
    }

    /// Final resting cell for the tile at `origin`.
    fn furthest_position(
        &self,
        origin: Position,
        direction: Direction,
        merged: &BTreeSet<Position>,
    ) -> Result<Position, GridError> {
        let moving = self
            .tile(origin)
            .ok_or(GridError::VacantCell { position: origin })?;
        Ok(self.probe(moving, origin, direction, merged))
    }

    /// Recursively probes one step at a time from `current` toward the
    /// target edge. Stops at the edge, at a merge target holding the moving
    /// tile's value, or just short of any other occupant.
    fn probe(
        &self,
        moving: &Tile,
        current: Position,
        direction: Direction,
        merged: &BTreeSet<Position>,
    ) -> Position {
        let Some(next) = self.dimensions.step(current, direction) else {
            return current;
        };
        match self.tile(next) {
            None => self.probe(moving, next, direction, merged),
            Some(resident) if resident.merges_with(moving) && !merged.contains(&next) => next,
            Some(_) => current,
        }
    }

    fn apply_move(
        &mut self,
        origin: Position,
        destination: Position,
        merged: &mut BTreeSet<Position>,
        outcome: &mut MigrateOutcome,
    ) -> Result<(), GridError> {
        if destination == origin {
            return Ok(());
        }

        let mut tile = self
            .take_tile(origin)
            .ok_or(GridError::VacantCell { position: origin })?;

        let slot = self.dimensions.index(destination);
        if let Some(resident) = self.cells[slot].as_mut() {
            // Same-value occupant: the moving tile is consumed.
            let value = resident.double();
            self.current_max = self.current_max.max(value);
            merged.insert(destination);
            outcome.merged += 1;
        } else {
            tile.set_position(destination);
            self.set_tile(tile);
            outcome.moved += 1;
        }

        Ok(())
    }

    fn set_tile(&mut self, tile: Tile) {
        let slot = self.dimensions.index(tile.position());
        self.cells[slot] = Some(tile);
    }

    fn take_tile(&mut self, position: Position) -> Option<Tile> {
        let slot = self.dimensions.index(position);
        self.cells[slot].take()
    }
}

/// What a single migration did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MigrateOutcome {
    /// Tiles that relocated without merging.
    pub moved: u32,
    /// Merges absorbed (each consumes one tile).
    pub merged: u32,
}

impl MigrateOutcome {
    /// True when the swipe changed the board at all.
    pub fn changed(&self) -> bool {
        self.moved > 0 || self.merged > 0
    }
}

/// Read-only structural copy of a board, for rendering and transport.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridView {
    dimensions: Dimensions,
    cells: Vec<Option<u32>>,
}

impl GridView {
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Value at `position`, or `None` for an empty or out-of-range cell.
    pub fn value_at(&self, position: Position) -> Option<u32> {
        if !self.dimensions.contains(position) {
            return None;
        }
        self.cells[self.dimensions.index(position)]
    }

    /// Rows top to bottom, each a slice of cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(self.dimensions.cols as usize)
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
