use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, EngineConfig, INITIAL_SNAKE_LENGTH};
use crate::direction::Direction;
use crate::food;
use crate::snake::{Position, Snake};

/// Outcome of one `advance()` call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    Continue,
    GameOver,
}

/// Current high-level gameplay state.
///
/// `Running -> GameOver` fires only inside [`GameEngine::advance`];
/// `GameOver -> Running` only via an explicit [`GameEngine::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete game state and per-tick rules for one snake session.
///
/// The engine owns the snake body, food, score and RNG; it performs no I/O
/// and assumes exclusive, non-reentrant access per call. A driver feeds it
/// direction changes between ticks, calls [`advance`](Self::advance) once
/// per tick, and reads state afterward to render and detect termination.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with an entropy-seeded RNG.
    ///
    /// Rejects configs with non-positive dimensions or dimensions that are
    /// not exact multiples of the cell size.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible simulations.
    pub fn new_with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            snake: starting_snake(&config),
            food: None,
            score: 0,
            status: GameStatus::Running,
            config,
            rng,
        };
        engine.food = food::spawn_position(&mut engine.rng, &engine.config, &engine.snake);

        Ok(engine)
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Order of operations: the collision predicate is evaluated against the
    /// *current* head first; a terminal tick mutates nothing. Otherwise the
    /// snake moves one cell, growing in place when the new head lands on
    /// food, the score is recomputed as `length - 3`, and the food respawns.
    /// A board with no free cell left after growth is terminal as well.
    pub fn advance(&mut self) -> TickResult {
        if self.status == GameStatus::GameOver || self.collision_detected() {
            self.status = GameStatus::GameOver;
            return TickResult::GameOver;
        }

        let next_head = self.snake.next_head_position(self.config.cell_size);
        let ate = self.food == Some(next_head);
        self.snake.move_forward(self.config.cell_size, ate);

        if ate {
            self.score = self.snake.len().saturating_sub(INITIAL_SNAKE_LENGTH) as u32;
            self.food = food::spawn_position(&mut self.rng, &self.config, &self.snake);
            if self.food.is_none() {
                self.status = GameStatus::GameOver;
                return TickResult::GameOver;
            }
        }

        TickResult::Continue
    }

    /// Stores a pending direction change applied on the next tick.
    ///
    /// Later calls between ticks overwrite earlier ones. A direct reversal
    /// of the current travel direction is dropped while the snake is longer
    /// than one segment.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Returns true when the session is terminal.
    ///
    /// Mirrors the collision predicate of [`advance`](Self::advance), so a
    /// driver can check it before ticking to render a terminal state
    /// instead of ticking again.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver || self.collision_detected()
    }

    /// Restores the starting state: a three-segment line centered on the
    /// grid heading Right, score zero, and freshly spawned food.
    pub fn reset(&mut self) {
        self.snake = starting_snake(&self.config);
        self.score = 0;
        self.status = GameStatus::Running;
        self.food = food::spawn_position(&mut self.rng, &self.config, &self.snake);
    }

    /// Overrides the current food position.
    ///
    /// Meant for drivers and tests that script food placement; the position
    /// is taken as-is, without the occupancy check engine-chosen spawns get.
    pub fn set_food(&mut self, position: Position) {
        self.food = Some(position);
    }

    /// Returns the snake for read-only inspection.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the current food position, `None` only on a full board.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Returns the current score (`body length - 3`).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current gameplay status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The terminal predicate: head out of bounds, or — when body collisions
    /// are enabled — head on a non-head segment that is not the food cell.
    fn collision_detected(&self) -> bool {
        let head = self.snake.head();
        if !head.is_within_bounds(&self.config) {
            return true;
        }

        !self.config.ignore_body
            && self.snake.head_overlaps_body()
            && Some(head) != self.food
    }
}

/// Builds the starting body: head on the cell-aligned grid center with two
/// segments trailing left, opposite the default Right direction.
fn starting_snake(config: &EngineConfig) -> Snake {
    let cell = config.cell_size;
    let center = Position {
        x: config.columns() / 2 * cell,
        y: config.rows() / 2 * cell,
    };

    let segments = (0..INITIAL_SNAKE_LENGTH as i32)
        .map(|i| Position {
            x: center.x - i * cell,
            y: center.y,
        })
        .collect();

    Snake::from_segments(segments, Direction::Right)
}
