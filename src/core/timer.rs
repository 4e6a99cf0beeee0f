//! The single session timer

use crate::clock::{TickHandle, Ticker};
use crate::consts::TICK_INTERVAL_MS;

/// Elapsed-seconds counter gated by `running`. Holds at most one tick
/// registration at a time.
#[derive(Debug, Default)]
pub(crate) struct Timer {
    running: bool,
    elapsed_secs: u64,
    handle: Option<TickHandle>,
}

impl Timer {
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub(crate) fn start(&mut self, ticker: &mut Ticker, now_ms: u64) {
        self.cancel_tick(ticker);
        self.handle = Some(ticker.schedule(TICK_INTERVAL_MS, now_ms));
        self.running = true;
    }

    /// Stop counting, keep the elapsed time for a later resume
    pub(crate) fn pause(&mut self, ticker: &mut Ticker) {
        self.cancel_tick(ticker);
        self.running = false;
    }

    /// Stop and hand back the elapsed seconds, leaving the counter at zero
    pub(crate) fn complete(&mut self, ticker: &mut Ticker) -> u64 {
        self.pause(ticker);
        std::mem::take(&mut self.elapsed_secs)
    }

    /// Stop and discard whatever was counted
    pub(crate) fn reset(&mut self, ticker: &mut Ticker) {
        self.pause(ticker);
        self.elapsed_secs = 0;
    }

    /// Apply `count` ticks and return how many were counted. Ticks from any
    /// handle other than the live one are stale and ignored.
    pub(crate) fn on_tick(&mut self, handle: TickHandle, count: u64) -> u64 {
        if self.running && self.handle == Some(handle) {
            self.elapsed_secs = self.elapsed_secs.saturating_add(count);
            count
        } else {
            0
        }
    }

    fn cancel_tick(&mut self, ticker: &mut Ticker) {
        if let Some(handle) = self.handle.take() {
            ticker.cancel(handle);
        }
    }
}

/// `HH:MM:SS`, each field zero-padded to two digits
pub(crate) fn format_elapsed(secs: u64) -> String {
    let hrs = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rem = secs % 60;
    format!("{hrs:02}:{mins:02}:{rem:02}")
}
