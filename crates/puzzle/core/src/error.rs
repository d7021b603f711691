//! Common error infrastructure.
//!
//! Every operation in this crate is total over valid grid states; errors
//! exist only for contract violations. Each error enum implements
//! [`CoreError`] so callers can classify failures uniformly.

use crate::state::Position;

/// Severity of a contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, rejected at the boundary. Should not be retried
    /// without changes.
    Validation,

    /// State inconsistency that indicates a bug. These must surface loudly
    /// and should be investigated, never papered over with defaults.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for error types in this workspace.
pub trait CoreError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant, for
    /// categorization and testing.
    fn error_code(&self) -> &'static str;
}

/// Errors surfaced by grid operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// The position lies outside the board.
    #[error("position {position} is outside the board")]
    OutOfBounds { position: Position },

    /// The cell already holds a tile.
    #[error("position {position} is already occupied")]
    Occupied { position: Position },

    /// A migration step found an empty cell where the resolution order
    /// proves a tile must exist.
    #[error("expected a tile at {position} but the cell is vacant")]
    VacantCell { position: Position },
}

impl CoreError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GridError::OutOfBounds { .. } | GridError::Occupied { .. } => {
                ErrorSeverity::Validation
            }
            GridError::VacantCell { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            GridError::Occupied { .. } => "GRID_OCCUPIED",
            GridError::VacantCell { .. } => "GRID_VACANT_CELL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_desync_as_internal() {
        let error = GridError::VacantCell {
            position: Position::ORIGIN,
        };
        assert!(error.severity().is_internal());
        assert_eq!(error.error_code(), "GRID_VACANT_CELL");
    }

    #[test]
    fn classifies_placement_failures_as_validation() {
        let error = GridError::Occupied {
            position: Position::new(1, 2),
        };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.severity().as_str(), "validation");
    }
}
