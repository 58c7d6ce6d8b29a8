// simulator.rs - Double-buffered generation stepping with cycle detection

use crate::error::Result;
use crate::grid::Board;
use crate::rules;

const HISTORY_LEN: usize = 10;

/// Result of a single [`Simulator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub generation: u32,
    pub population: usize,
    /// The new state matches one of the last few generations.
    pub repeats: bool,
}

/// Owns the current and next boards and swaps them each generation.
pub struct Simulator {
    current: Board,
    next: Board,
    generation: u32,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulator {
    /// Start at generation 1 with `board` as the current state.
    pub fn new(board: Board) -> Self {
        let next = board.clone();
        let mut sim = Self {
            current: board,
            next,
            generation: 1,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        };
        sim.remember(sim.current.fingerprint());
        sim
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn extinct(&self) -> bool {
        self.current.population() == 0
    }

    pub fn step(&mut self) -> Result<StepOutcome> {
        rules::advance_into(&self.current, &mut self.next)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        let hash = self.current.fingerprint();
        let repeats = self.seen(hash);
        self.remember(hash);

        Ok(StepOutcome {
            generation: self.generation,
            population: self.current.population(),
            repeats,
        })
    }

    fn seen(&self, hash: u64) -> bool {
        let filled = self.history_count.min(HISTORY_LEN);
        self.grid_history[..filled].contains(&hash)
    }

    fn remember(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}
