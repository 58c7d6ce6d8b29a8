// main.rs - Console Conway's Game of Life

use std::error::Error;
use std::io;

use tracing::Level;

use conway_console::{IntervalPacer, LifeConfig, Simulator, initial_board, run};

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr so stdout carries only the rendered board.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let config = LifeConfig::default();
    let mut sim = Simulator::new(initial_board(&config)?);
    let mut pacer = IntervalPacer::new(config.pause);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(run(&config, &mut sim, &mut out, &mut pacer))?;
    Ok(())
}
