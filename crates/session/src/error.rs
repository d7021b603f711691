use puzzle_core::{CoreError, ErrorSeverity, GridError};

/// Errors surfaced by the session facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A swipe or undo arrived before `start`.
    #[error("session not started")]
    NotStarted,

    /// Nothing was swiped since the last start, reset, or undo, so there is
    /// no snapshot to restore.
    #[error("nothing to undo")]
    NothingToUndo,

    /// A grid contract violation bubbled up from the core.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl CoreError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::NotStarted | SessionError::NothingToUndo => ErrorSeverity::Validation,
            SessionError::Grid(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::NotStarted => "SESSION_NOT_STARTED",
            SessionError::NothingToUndo => "SESSION_NOTHING_TO_UNDO",
            SessionError::Grid(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::Position;

    #[test]
    fn facade_misuse_is_validation_severity() {
        assert_eq!(SessionError::NothingToUndo.severity(), ErrorSeverity::Validation);
        assert_eq!(SessionError::NotStarted.error_code(), "SESSION_NOT_STARTED");
    }

    #[test]
    fn wrapped_grid_errors_keep_their_classification() {
        let inner = GridError::VacantCell {
            position: Position::ORIGIN,
        };
        let error = SessionError::from(inner);
        assert!(error.severity().is_internal());
        assert_eq!(error.error_code(), "GRID_VACANT_CELL");
    }
}
