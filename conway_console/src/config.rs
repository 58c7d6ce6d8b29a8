// config.rs - Run configuration for the console simulator

use std::time::Duration;

use crate::error::{LifeError, Result};
use crate::patterns::{self, Pattern};

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 25;
pub const DEFAULT_GENERATIONS: u32 = 25;
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Initial population placed on the board before the first generation.
#[derive(Debug, Clone, Copy)]
pub enum Seed {
    /// A catalog pattern with its top-left corner at `origin`.
    Pattern {
        pattern: &'static Pattern,
        origin: (usize, usize),
    },
    /// Roughly a third of the cells alive, derived from the seed value.
    Random(u64),
}

/// Everything the driver needs to know about a run.
#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: u32,
    pub pause: Duration,
    pub seed: Seed,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            generations: DEFAULT_GENERATIONS,
            pause: DEFAULT_PAUSE,
            seed: Seed::Pattern {
                pattern: &patterns::GLIDER,
                origin: (0, 0),
            },
        }
    }
}

impl LifeConfig {
    /// Default configuration resized to `rows x cols`.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Seed with a catalog pattern looked up by name.
    pub fn seed_named(self, name: &str, origin: (usize, usize)) -> Result<Self> {
        let pattern =
            patterns::find_pattern(name).ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;
        Ok(self.seed(Seed::Pattern { pattern, origin }))
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
