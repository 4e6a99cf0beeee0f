//! Cooperative tick scheduling
//!
//! There are no threads here. The host loop reads a [`Clock`], asks the
//! [`Ticker`] which registrations are due, and dispatches those ticks one at a
//! time. A handle that has been cancelled is gone from the ticker, so it can
//! never fire again even if its due time already passed.

use std::cell::Cell;
use std::time::Instant;
use tracing::debug;

/// Identifies one repeating registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TickHandle(u64);

#[derive(Debug)]
struct Registration {
    handle: TickHandle,
    interval_ms: u64,
    /// `None` once the next due time no longer fits in a `u64`
    next_due_ms: Option<u64>,
}

/// Repeating-interval scheduler driven by explicit clock readings
#[derive(Debug, Default)]
pub(crate) struct Ticker {
    next_id: u64,
    registrations: Vec<Registration>,
}

impl Ticker {
    /// Register a tick every `interval_ms`, first firing one interval after `now_ms`
    pub(crate) fn schedule(&mut self, interval_ms: u64, now_ms: u64) -> TickHandle {
        let interval_ms = interval_ms.max(1);
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.registrations.push(Registration {
            handle,
            interval_ms,
            next_due_ms: now_ms.checked_add(interval_ms),
        });
        debug!(?handle, interval_ms, now_ms, "tick scheduled");
        handle
    }

    pub(crate) fn cancel(&mut self, handle: TickHandle) {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.handle != handle);
        if self.registrations.len() != before {
            debug!(?handle, "tick cancelled");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self, handle: TickHandle) -> bool {
        self.registrations.iter().any(|r| r.handle == handle)
    }

    pub(crate) fn active_count(&self) -> usize {
        self.registrations.len()
    }

    /// Registrations due at or before `now_ms` with how many intervals
    /// elapsed, ordered by their first missed due time. A late poll gets the
    /// whole backlog as one count so it catches up instead of drifting.
    pub(crate) fn due(&mut self, now_ms: u64) -> Vec<(TickHandle, u64)> {
        let mut fired: Vec<(u64, TickHandle, u64)> = Vec::new();
        for reg in &mut self.registrations {
            let Some(next) = reg.next_due_ms else {
                continue;
            };
            if next > now_ms {
                continue;
            }
            let count = (now_ms - next) / reg.interval_ms + 1;
            reg.next_due_ms = count
                .checked_mul(reg.interval_ms)
                .and_then(|step| next.checked_add(step));
            fired.push((next, reg.handle, count));
        }
        fired.sort_by_key(|(first, _, _)| *first);
        fired
            .into_iter()
            .map(|(_, handle, count)| (handle, count))
            .collect()
    }
}

/// Millisecond time source
pub(crate) trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock milliseconds since the program started
#[derive(Debug)]
pub(crate) struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub(crate) fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub(crate) struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub(crate) fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
