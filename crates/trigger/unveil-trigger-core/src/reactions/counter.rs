//! Counter run: frame-paced count-up to an integer target.
//!
//! Pacing is tick-based, not wall-clock based: the increment is
//! `target / counter_steps`, so every counter completes in roughly the
//! same number of ticks regardless of magnitude. Displayed values are
//! `ceil(total)` while running and exactly `target` on the final write,
//! which keeps the sequence non-decreasing and free of float overshoot in
//! the visible text.

/// Parse the stored dataset value for a counter target.
/// Strict: an optional surrounding-whitespace-trimmed base-10 integer.
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// One tick's outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterStep {
    /// Intermediate value to display.
    Value(u64),
    /// Final write; the run is finished.
    Final(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterRun {
    target: u64,
    total: f32,
    increment: f32,
}

impl CounterRun {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            total: 0.0,
            increment: target as f32 / steps.max(1) as f32,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Advance one tick. Must not be called again after `Final` is returned.
    pub fn tick(&mut self) -> CounterStep {
        self.total += self.increment;
        if self.total >= self.target as f32 {
            CounterStep::Final(self.target)
        } else {
            // total < target here, so ceil can never overshoot the target.
            CounterStep::Value(self.total.ceil() as u64)
        }
    }
}
