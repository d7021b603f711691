use std::cmp::Ordering;

use crate::state::Position;

/// Swipe direction.
///
/// A direction selects two things at once: the per-step coordinate delta a
/// tile follows while sliding, and the total order in which occupied cells
/// are resolved during a migration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Per-step `(row, col)` delta toward the target edge.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Total order placing positions nearest the target edge first.
    ///
    /// Migration resolves occupied cells in this order so that a tile which
    /// has already settled is seen by the tiles behind it, at its current
    /// value, as either an obstacle or a merge target.
    pub fn position_order(self) -> fn(&Position, &Position) -> Ordering {
        match self {
            Direction::Up => Position::cmp_rows_asc,
            Direction::Down => Position::cmp_rows_desc,
            Direction::Left => Position::cmp_cols_asc,
            Direction::Right => Position::cmp_cols_desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_point_toward_the_target_edge() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn orders_resolve_edge_nearest_positions_first() {
        let mut positions = vec![
            Position::new(2, 1),
            Position::new(0, 3),
            Position::new(1, 0),
            Position::new(2, 3),
        ];

        positions.sort_by(Direction::Up.position_order());
        assert_eq!(positions[0], Position::new(0, 3));

        positions.sort_by(Direction::Down.position_order());
        assert_eq!(positions[0], Position::new(2, 3));

        positions.sort_by(Direction::Left.position_order());
        assert_eq!(positions[0], Position::new(1, 0));

        positions.sort_by(Direction::Right.position_order());
        assert_eq!(positions[0], Position::new(2, 3));
    }

    #[test]
    fn renders_as_snake_case() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
    }
}
