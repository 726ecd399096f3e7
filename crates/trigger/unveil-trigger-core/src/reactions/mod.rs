//! Reaction strategies: what happens when an observed element enters.
//!
//! Every element moves through the same state machine,
//! Idle -> Animating -> Done, with no transition back. `Skipped` is the
//! terminal state for elements whose stored target failed validation at
//! mount; they are never observed at all. Single-step reactions (reveal,
//! morph, progress) pass through Animating within one tick. Timed runs
//! (counter, typing, stagger) live in the engine's active table and step
//! once per tick until they finish.

pub mod counter;
pub mod progress;
pub mod stagger;
pub mod typing;

use serde::{Deserialize, Serialize};

pub use counter::{parse_counter_target, CounterRun, CounterStep};
pub use progress::parse_percent;
pub use stagger::StaggerRun;
pub use typing::TypingRun;

/// Per-element reaction lifecycle. Owned by the engine, one per observed
/// element.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReactionState {
    #[default]
    Idle,
    Animating,
    Done,
    /// Target failed validation at mount; the reaction never arms.
    Skipped,
}

impl ReactionState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ReactionState::Done | ReactionState::Skipped)
    }
}

/// Which strategy a trigger group runs. Class names are owned by the row so
/// hosts can align them with their stylesheets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReactionKind {
    /// Add `class` to the element itself.
    Reveal { class: String },
    /// Add `class` to each matching child, `stagger_step_ms` apart.
    Stagger {
        child_markers: Vec<String>,
        class: String,
    },
    /// Count text up to the stored integer target.
    Counter,
    /// Set the width style to the stored percentage.
    Progress,
    /// Re-type the captured text one character at a time.
    Typing,
    /// Add `class` to hand the element to a CSS keyframe animation.
    Morph { class: String },
}

impl ReactionKind {
    /// Strictly one-shot strategies unobserve their element on first enter
    /// instead of relying on the state guard alone. Both policies satisfy
    /// the fire-at-most-once contract; which one a strategy uses is part of
    /// its observable behavior.
    #[inline]
    pub fn unobserves_on_enter(&self) -> bool {
        matches!(self, ReactionKind::Typing)
    }
}

/// Live state of a timed run in the engine's active table.
#[derive(Clone, Debug, PartialEq)]
pub enum ReactionRun {
    Counter(CounterRun),
    Typing(TypingRun),
    Stagger(StaggerRun),
}
