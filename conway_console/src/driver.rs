// driver.rs - Render, pause, advance loop

use std::io::Write;

use tracing::{debug, info};

use crate::config::LifeConfig;
use crate::error::Result;
use crate::grid::Board;
use crate::pacing::Pacer;
use crate::patterns;
use crate::simulator::Simulator;

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of generations rendered.
    pub generations: u32,
    /// Live cells on the board after the last advance.
    pub final_population: usize,
    /// First generation whose state repeated a recent one, if any.
    pub first_repeat: Option<u32>,
}

/// Build the seeded starting board described by `config`.
pub fn initial_board(config: &LifeConfig) -> Result<Board> {
    let mut board = Board::from_config(config)?;
    patterns::apply_seed(&mut board, &config.seed);
    Ok(board)
}

/// Write `board` under a `Generation <n>:` header.
pub fn write_generation<W: Write + ?Sized>(out: &mut W, generation: u32, board: &Board) -> Result<()> {
    writeln!(out, "Generation {generation}:")?;
    board.write_to(out)?;
    Ok(())
}

/// Run `config.generations` generations starting from the simulator's state.
pub async fn run<W, P>(
    config: &LifeConfig,
    sim: &mut Simulator,
    out: &mut W,
    pacer: &mut P,
) -> Result<RunSummary>
where
    W: Write + ?Sized,
    P: Pacer,
{
    let mut first_repeat = None;
    let mut rendered = 0;

    for _ in 0..config.generations {
        let generation = sim.generation();
        write_generation(out, generation, sim.board())?;
        out.flush()?;
        rendered += 1;

        pacer.pause().await;

        let outcome = sim.step()?;
        debug!(generation = outcome.generation, population = outcome.population, "advanced");
        if outcome.repeats && first_repeat.is_none() {
            info!(generation = outcome.generation, "board state repeats a recent generation");
            first_repeat = Some(outcome.generation);
        }
    }

    Ok(RunSummary {
        generations: rendered,
        final_population: sim.board().population(),
        first_repeat,
    })
}
