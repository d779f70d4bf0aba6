use std::collections::VecDeque;

use crate::config::EngineConfig;
use crate::direction::Direction;

/// Grid position in pixel units.
///
/// Coordinates are always multiples of the arena's `cell_size`; movement
/// steps a whole cell at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the arena.
    #[must_use]
    pub fn is_within_bounds(self, config: &EngineConfig) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < config.width && self.y < config.height
    }

    /// Returns the position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Mutable snake state: body segments plus direction handling.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
        }
    }

    /// Stores a pending direction change, overwriting any prior un-applied one.
    ///
    /// A change that is the exact opposite of the current travel direction is
    /// rejected while the snake is longer than one segment; applying it would
    /// drive the head straight into the neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.len() > 1 && direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Returns the head position for the next movement tick, accounting for
    /// any pending direction change.
    #[must_use]
    pub fn next_head_position(&self, cell_size: i32) -> Position {
        let direction = self.pending_direction.unwrap_or(self.direction);
        self.head().stepped(direction, cell_size)
    }

    /// Applies one movement step.
    ///
    /// The pending direction (if any) becomes the travel direction, the new
    /// head is pushed, and the tail cell is dropped unless `grow` is set, in
    /// which case the body gains one segment.
    pub fn move_forward(&mut self, cell_size: i32, grow: bool) {
        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let next_head = self.head().stepped(self.direction, cell_size);
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;

    use super::{Position, Snake};

    fn three_segment_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position { x: 150, y: 150 },
                Position { x: 140, y: 150 },
                Position { x: 130, y: 150 },
            ],
            Direction::Right,
        )
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = three_segment_snake();

        snake.move_forward(10, false);

        assert_eq!(snake.head(), Position { x: 160, y: 150 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 130, y: 150 }));
    }

    #[test]
    fn growth_keeps_the_tail_cell() {
        let mut snake = three_segment_snake();

        snake.move_forward(10, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position { x: 130, y: 150 }));
    }

    #[test]
    fn pending_direction_applies_on_next_move() {
        let mut snake = three_segment_snake();

        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);

        snake.move_forward(10, false);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Position { x: 150, y: 140 });
    }

    #[test]
    fn last_direction_change_wins() {
        let mut snake = three_segment_snake();

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);
        snake.move_forward(10, false);

        assert_eq!(snake.head(), Position { x: 150, y: 160 });
    }

    #[test]
    fn reversal_is_rejected_for_long_snake() {
        let mut snake = three_segment_snake();

        snake.set_direction(Direction::Left);
        snake.move_forward(10, false);

        // The reversal was dropped; the snake kept heading Right.
        assert_eq!(snake.head(), Position { x: 160, y: 150 });
    }

    #[test]
    fn single_segment_snake_may_reverse() {
        let mut snake =
            Snake::from_segments(vec![Position { x: 50, y: 50 }], Direction::Right);

        snake.set_direction(Direction::Left);
        snake.move_forward(10, false);

        assert_eq!(snake.head(), Position { x: 40, y: 50 });
    }

    #[test]
    fn next_head_position_accounts_for_pending_direction() {
        let mut snake = three_segment_snake();

        assert_eq!(
            snake.next_head_position(10),
            Position { x: 160, y: 150 }
        );

        snake.set_direction(Direction::Down);
        assert_eq!(
            snake.next_head_position(10),
            Position { x: 150, y: 160 }
        );
    }

    #[test]
    fn head_overlap_detection_skips_the_head_itself() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 20, y: 20 },
                Position { x: 30, y: 20 },
                Position { x: 30, y: 30 },
                Position { x: 20, y: 30 },
                Position { x: 20, y: 20 },
            ],
            Direction::Up,
        );

        assert!(snake.head_overlaps_body());
        assert!(!three_segment_snake().head_overlaps_body());
    }
}
