//! Core configuration for unveil-trigger-core.

use serde::{Deserialize, Serialize};

/// What happens to in-flight timed reactions when the hosting page is
/// hidden. The source-of-truth page behavior was asymmetric (CSS paused,
/// JS timers ran on); here the choice is explicit.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HidePolicy {
    /// Freeze counter/typing/stagger runs while hidden; resume on show.
    #[default]
    Pause,
    /// Keep advancing runs regardless of page visibility.
    Continue,
}

/// Configuration for engine pacing and per-tick limits.
/// Keep this minimal in v1; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Number of engine ticks a counter takes to reach its target.
    pub counter_steps: u32,

    /// Delay between consecutive child reveals in a stagger group.
    pub stagger_step_ms: u32,

    /// Delay between consecutive characters in a typing run.
    pub typing_step_ms: u32,

    /// Maximum events to retain per tick before backpressure policy applies.
    pub max_events_per_tick: usize,

    /// Behavior of in-flight runs while the page is hidden.
    pub hide_policy: HidePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter_steps: 200,
            stagger_step_ms: 100,
            typing_step_ms: 100,
            max_events_per_tick: 1024,
            hide_policy: HidePolicy::default(),
        }
    }
}
