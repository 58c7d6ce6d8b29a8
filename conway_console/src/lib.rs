// lib.rs - Conway's Game of Life on a fixed-size board, rendered as console text

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod pacing;
pub mod patterns;
pub mod rules;
pub mod simulator;

pub use config::{LifeConfig, Seed};
pub use driver::{RunSummary, initial_board, run};
pub use error::{LifeError, Result};
pub use grid::Board;
pub use pacing::{IntervalPacer, NoPause, Pacer};
pub use rules::{advance, advance_into};
pub use simulator::{Simulator, StepOutcome};
