use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snake body length immediately after construction and `reset()`.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default arena width in pixel units.
pub const DEFAULT_GRID_WIDTH: i32 = 300;

/// Default arena height in pixel units.
pub const DEFAULT_GRID_HEIGHT: i32 = 300;

/// Default edge length of one grid cell in pixel units.
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Default tick interval in milliseconds, consumed by the driver's timer.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 75;

/// Engine configuration, fixed at construction.
///
/// Dimensions are measured in pixel units; `width` and `height` must be
/// exact multiples of `cell_size` so every cell is addressable without
/// remainder. Use [`EngineConfig::validate`] (called by the engine
/// constructors) to reject degenerate geometry up front.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Arena width in pixel units.
    pub width: i32,
    /// Arena height in pixel units.
    pub height: i32,
    /// Edge length of one grid cell in pixel units.
    pub cell_size: i32,
    /// When true, the snake passes through its own body without dying.
    pub ignore_body: bool,
    /// Tick interval for the driver's timer. The engine itself never reads
    /// this; timing is owned by the driver.
    pub tick_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            ignore_body: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    /// Creates a config with custom arena dimensions and default behavior.
    #[must_use]
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            ..Self::default()
        }
    }

    /// Checks grid geometry, rejecting non-positive or misaligned dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 || self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveDimension {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(ConfigError::MisalignedDimension {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }

    /// Returns the number of cell columns.
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Returns the number of cell rows.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }
}

/// Rejected engine configuration.
///
/// Construction with bad geometry is a programming error, surfaced as a
/// constructor error rather than producing an arena with unreachable or
/// fractional cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive: {width}x{height}, cell size {cell_size}")]
    NonPositiveDimension {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("grid dimensions must be exact multiples of the cell size: {width}x{height}, cell size {cell_size}")]
    MisalignedDimension {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}
