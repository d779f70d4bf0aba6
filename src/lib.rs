//! Game-state engine for a single-player grid snake game.
//!
//! The crate models the snake body, direction handling, food placement,
//! growth, score and terminal collision rules on a fixed discrete grid.
//! Everything presentation-side (windowing, key dispatch, drawing, timers)
//! belongs to an external driver: it feeds [`GameEngine::set_direction`]
//! between ticks, calls [`GameEngine::advance`] once per tick, and reads
//! engine state afterward to render and to detect game over.
//!
//! ```
//! use snake_engine::{Direction, EngineConfig, GameEngine, TickResult};
//!
//! let mut engine = GameEngine::new_with_seed(EngineConfig::default(), 42)?;
//! engine.set_direction(Direction::Right);
//! assert_eq!(engine.advance(), TickResult::Continue);
//! assert_eq!(engine.score(), engine.snake().len() as u32 - 3);
//! # Ok::<(), snake_engine::ConfigError>(())
//! ```

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod snake;

pub use config::{ConfigError, EngineConfig};
pub use direction::Direction;
pub use engine::{GameEngine, GameStatus, TickResult};
pub use snake::{Position, Snake};
