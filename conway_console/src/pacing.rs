// pacing.rs - Delay between rendered generations

use std::time::Duration;

/// Paces the driver loop. Purely cosmetic; the simulation result never
/// depends on it.
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn pause(&mut self);
}

/// Sleeps a fixed interval on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct IntervalPacer {
    pub interval: Duration,
}

impl IntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Pacer for IntervalPacer {
    async fn pause(&mut self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    async fn pause(&mut self) {}
}
