use crate::snake::Position;

/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell offset for this direction.
    ///
    /// The y axis grows downward, so `Up` is `(0, -1)`.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Maps a target point to a movement direction along the dominant axis.
///
/// Intended for pointer-style steering: the snake turns toward `to` on
/// whichever axis the distance is larger. The current direction is kept
/// when the turn would be a direct reversal or when the target sits on
/// the current cell.
#[must_use]
pub fn direction_toward(from: Position, to: Position, current: Direction) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() > dy.abs() {
        if dx > 0 && current != Direction::Left {
            return Direction::Right;
        }
        if dx < 0 && current != Direction::Right {
            return Direction::Left;
        }
    } else {
        if dy > 0 && current != Direction::Up {
            return Direction::Down;
        }
        if dy < 0 && current != Direction::Down {
            return Direction::Up;
        }
    }

    current
}
