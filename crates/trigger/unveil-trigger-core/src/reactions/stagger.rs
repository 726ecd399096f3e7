//! Stagger run: cascaded child reveals on a linear delay ramp.
//!
//! Child i's class lands at `i * stagger_step_ms` relative to the trigger,
//! index 0 on the trigger tick itself. There is no cancellation; once the
//! parent fires, every scheduled child write is delivered even if the
//! parent scrolls back out of view.

use unveil_api_core::ElementPath;

#[derive(Clone, Debug, PartialEq)]
struct PendingChild {
    due_ms: f32,
    path: ElementPath,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaggerRun {
    pending: Vec<PendingChild>,
    class: String,
    elapsed_ms: f32,
}

impl StaggerRun {
    /// `children` in document order; the ramp follows that order.
    pub fn new(children: Vec<ElementPath>, step_ms: f32, class: impl Into<String>) -> Self {
        let pending = children
            .into_iter()
            .enumerate()
            .map(|(i, path)| PendingChild {
                due_ms: i as f32 * step_ms,
                path,
            })
            .collect();
        Self {
            pending,
            class: class.into(),
            elapsed_ms: 0.0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance by `dt_ms` and emit `(path, class)` for every child whose
    /// delay has elapsed. Pass `dt_ms = 0` to flush the index-0 child on
    /// the trigger tick.
    pub fn tick(&mut self, dt_ms: f32, mut emit: impl FnMut(&ElementPath, &str)) -> bool {
        self.elapsed_ms += dt_ms;
        // pending is due-ordered by construction, so drain from the front.
        while let Some(next) = self.pending.first() {
            if next.due_ms > self.elapsed_ms {
                break;
            }
            emit(&next.path, &self.class);
            self.pending.remove(0);
        }
        self.finished()
    }
}
