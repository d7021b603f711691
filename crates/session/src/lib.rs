//! Game-session facade over the puzzle rules engine.
//!
//! One [`GameSession`] owns one [`puzzle_core::Grid`] and drives it through
//! the public game contract: start, the four swipes, one-level undo, and
//! reset. All rules live in `puzzle-core`; this crate adds move counting,
//! undo availability tracking, and structured logging of session events.
mod error;
mod session;

pub use error::SessionError;
pub use session::{Game, GameSession};

pub use puzzle_core::{Direction, GameConfig, GridView};
