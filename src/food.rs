use rand::Rng;

use crate::config::EngineConfig;
use crate::snake::{Position, Snake};

/// Picks a food position uniformly among all unoccupied grid cells.
///
/// Candidates are the cell-aligned pixel positions
/// `(0..columns, 0..rows) * cell_size` minus the cells the snake occupies.
/// Returns `None` when the snake fills the whole board, so callers can
/// treat the full board as a terminal state instead of spinning on a
/// rejection loop.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    config: &EngineConfig,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(config.total_cells());

    for row in 0..config.rows() {
        for column in 0..config.columns() {
            let position = Position {
                x: column * config.cell_size,
                y: row * config.cell_size,
            };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::EngineConfig;
    use crate::direction::Direction;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = EngineConfig::new(80, 60, 10);
        let snake = Snake::from_segments(
            vec![
                Position { x: 20, y: 0 },
                Position { x: 10, y: 0 },
                Position { x: 0, y: 0 },
            ],
            Direction::Right,
        );

        for _ in 0..100 {
            let food = spawn_position(&mut rng, &config, &snake)
                .expect("board has free cells");
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn food_positions_are_cell_aligned_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = EngineConfig::new(50, 30, 10);
        let snake = Snake::from_segments(vec![Position { x: 20, y: 10 }], Direction::Right);

        for _ in 0..100 {
            let food = spawn_position(&mut rng, &config, &snake)
                .expect("board has free cells");
            assert!(food.is_within_bounds(&config));
            assert_eq!(food.x % config.cell_size, 0);
            assert_eq!(food.y % config.cell_size, 0);
        }
    }

    #[test]
    fn full_board_yields_no_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = EngineConfig::new(20, 10, 10);
        // A 2x1 board fully covered by the snake.
        let snake = Snake::from_segments(
            vec![Position { x: 10, y: 0 }, Position { x: 0, y: 0 }],
            Direction::Right,
        );

        assert_eq!(spawn_position(&mut rng, &config, &snake), None);
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = EngineConfig::new(20, 10, 10);
        let snake = Snake::from_segments(vec![Position { x: 0, y: 0 }], Direction::Right);

        let food = spawn_position(&mut rng, &config, &snake);
        assert_eq!(food, Some(Position { x: 10, y: 0 }));
    }
}
