//! Output contracts from the core engine.
//!
//! Outputs carry only the DOM writes for this tick, keyed by ElementPath,
//! and a separate list of semantic events. Hosts apply the writes to their
//! document layer and may transport events to tooling.

use serde::{Deserialize, Serialize};

use crate::registry::GroupTag;
use unveil_api_core::{DomWrite, ElementPath, Mutation, WriteBatch};

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum CoreEvent {
    /// An observed element crossed into view.
    ElementEntered { path: ElementPath, group: GroupTag },
    ReactionStarted { path: ElementPath, group: GroupTag },
    ReactionCompleted { path: ElementPath, group: GroupTag },
    /// A stored target failed validation at mount; the element will never
    /// animate.
    TargetSkipped {
        path: ElementPath,
        group: GroupTag,
        raw: String,
    },
    PageHidden,
    PageShown,
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub writes: WriteBatch,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.writes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_write(&mut self, path: ElementPath, mutation: Mutation) {
        self.writes.push(DomWrite::new(path, mutation));
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.events.is_empty()
    }
}
