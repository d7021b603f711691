use puzzle_core::{Direction, GameConfig, Grid, GridView, PcgRng, RngOracle};

use crate::error::SessionError;

/// The public game contract. Every mutation returns the rendered board.
pub trait Game {
    /// Swipes applied since the last start or reset; undo un-counts one.
    fn moves_count(&self) -> u32;

    /// Clears the board, spawns the opening tiles, and begins play.
    fn start(&mut self) -> Result<GridView, SessionError>;

    fn swipe_up(&mut self) -> Result<GridView, SessionError>;
    fn swipe_down(&mut self) -> Result<GridView, SessionError>;
    fn swipe_left(&mut self) -> Result<GridView, SessionError>;
    fn swipe_right(&mut self) -> Result<GridView, SessionError>;

    /// Restores the board to just before the last swipe. One level only.
    fn undo(&mut self) -> Result<GridView, SessionError>;

    /// Returns to the pristine pre-`start` state.
    fn reset(&mut self);
}

/// One game: a grid, its RNG oracle, and the session bookkeeping.
pub struct GameSession<R = PcgRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    game_seed: u64,
    moves: u32,
    started: bool,
    undo_available: bool,
}

impl GameSession<PcgRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, 0)
    }

    pub fn with_seed(config: GameConfig, game_seed: u64) -> Self {
        Self::with_rng(config, game_seed, PcgRng)
    }
}

impl<R: RngOracle> GameSession<R> {
    /// Builds a session around a custom RNG oracle, for scripted or replayed
    /// games.
    pub fn with_rng(config: GameConfig, game_seed: u64, rng: R) -> Self {
        Self {
            grid: Grid::with_seed(&config, game_seed),
            config,
            rng,
            game_seed,
            moves: 0,
            started: false,
            undo_available: false,
        }
    }

    /// Highest tile value reached this session.
    pub fn best_tile(&self) -> u32 {
        self.grid.current_max()
    }

    /// True once no swipe can change the board.
    pub fn is_over(&self) -> bool {
        !self.grid.is_moving_possible()
    }

    /// Rendered copy of the current board.
    pub fn view(&self) -> GridView {
        self.grid.view()
    }

    fn swipe(&mut self, direction: Direction) -> Result<GridView, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }

        self.grid.take_snapshot();
        let outcome = self.grid.migrate(direction)?;
        let spawned = self.grid.spawn_tile(&self.rng);
        self.moves += 1;
        self.undo_available = true;

        tracing::debug!(
            "swipe {} resolved: {} moved, {} merged, spawned at {:?}",
            direction,
            outcome.moved,
            outcome.merged,
            spawned
        );
        Ok(self.grid.view())
    }
}

impl<R: RngOracle> Game for GameSession<R> {
    fn moves_count(&self) -> u32 {
        self.moves
    }

    fn start(&mut self) -> Result<GridView, SessionError> {
        self.grid.clear();
        for _ in 0..self.config.opening_tiles {
            self.grid.spawn_tile(&self.rng);
        }
        self.moves = 0;
        self.started = true;
        self.undo_available = false;

        tracing::info!(
            "session started on a {}x{} board",
            self.config.rows,
            self.config.cols
        );
        Ok(self.grid.view())
    }

    fn swipe_up(&mut self) -> Result<GridView, SessionError> {
        self.swipe(Direction::Up)
    }

    fn swipe_down(&mut self) -> Result<GridView, SessionError> {
        self.swipe(Direction::Down)
    }

    fn swipe_left(&mut self) -> Result<GridView, SessionError> {
        self.swipe(Direction::Left)
    }

    fn swipe_right(&mut self) -> Result<GridView, SessionError> {
        self.swipe(Direction::Right)
    }

    fn undo(&mut self) -> Result<GridView, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        if !self.undo_available {
            tracing::warn!("undo requested with no snapshot to restore");
            return Err(SessionError::NothingToUndo);
        }

        self.grid.restore_snapshot();
        self.undo_available = false;
        self.moves = self.moves.saturating_sub(1);

        tracing::debug!("snapshot restored, {} moves on record", self.moves);
        Ok(self.grid.view())
    }

    fn reset(&mut self) {
        self.grid = Grid::with_seed(&self.config, self.game_seed);
        self.moves = 0;
        self.started = false;
        self.undo_available = false;

        tracing::info!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_session() -> GameSession {
        let mut session = GameSession::with_seed(GameConfig::new(), 7);
        session.start().unwrap();
        session
    }

    #[test]
    fn start_places_opening_tiles() {
        let view = GameSession::with_seed(GameConfig::new(), 7).start().unwrap();
        assert_eq!(view.tile_count(), 2);
    }

    #[test]
    fn swipe_before_start_is_rejected() {
        let mut session = GameSession::new(GameConfig::new());
        assert_eq!(session.swipe_left(), Err(SessionError::NotStarted));
        assert_eq!(session.undo(), Err(SessionError::NotStarted));
    }

    #[test]
    fn swipe_counts_the_move_and_spawns_a_tile() {
        let mut session = started_session();
        let before = session.view().tile_count();

        let after = session.swipe_left().unwrap();

        assert_eq!(session.moves_count(), 1);
        // Merging can shrink the board by at most before/2 tiles; the spawn
        // always adds exactly one while any cell is free.
        assert!(after.tile_count() <= before + 1);
        assert!(after.tile_count() > before / 2);
        assert!(session.best_tile() >= 2);
    }

    #[test]
    fn undo_restores_the_pre_swipe_board() {
        let mut session = started_session();
        let before = session.view();

        session.swipe_left().unwrap();
        let restored = session.undo().unwrap();

        assert_eq!(restored, before);
        assert_eq!(session.moves_count(), 0);
    }

    #[test]
    fn undo_is_single_level() {
        let mut session = started_session();
        session.swipe_left().unwrap();
        session.undo().unwrap();

        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn undo_before_any_swipe_is_rejected() {
        let mut session = started_session();
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn reset_returns_to_pristine() {
        let mut session = started_session();
        session.swipe_left().unwrap();
        session.swipe_up().unwrap();

        session.reset();

        assert_eq!(session.moves_count(), 0);
        assert_eq!(session.view().tile_count(), 0);
        assert_eq!(session.swipe_down(), Err(SessionError::NotStarted));

        let reopened = session.start().unwrap();
        assert_eq!(reopened.tile_count(), 2);
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut first = GameSession::with_seed(GameConfig::new(), 1234);
        let mut second = GameSession::with_seed(GameConfig::new(), 1234);

        assert_eq!(first.start().unwrap(), second.start().unwrap());
        assert_eq!(first.swipe_left().unwrap(), second.swipe_left().unwrap());
        assert_eq!(first.swipe_down().unwrap(), second.swipe_down().unwrap());
        assert_eq!(first.swipe_right().unwrap(), second.swipe_right().unwrap());
    }

    #[test]
    fn reset_replays_the_same_opening() {
        let mut session = GameSession::with_seed(GameConfig::new(), 42);
        let first_opening = session.start().unwrap();

        session.swipe_left().unwrap();
        session.reset();

        assert_eq!(session.start().unwrap(), first_opening);
    }

    #[test]
    fn fresh_session_is_not_over() {
        let session = started_session();
        assert!(!session.is_over());
    }
}
