//! Deterministic rules engine for a sliding-tile merge puzzle.
//!
//! `puzzle-core` owns the grid state machine: position arithmetic, the
//! slide/merge resolution order, tile spawning, movability detection, and
//! one-level undo via snapshotting. All board mutation flows through
//! [`state::Grid`]; the session facade consumes the types re-exported here
//! and performs no rules logic of its own.
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use error::{CoreError, ErrorSeverity, GridError};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{Dimensions, Grid, GridView, MigrateOutcome, Position, Tile};
