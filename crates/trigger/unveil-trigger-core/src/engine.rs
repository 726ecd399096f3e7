//! Engine: data ownership and public API with enter-edge sweep + reaction
//! stepping (v1).
//!
//! Methods:
//! - new, with_standard_triggers, with_watcher, register_trigger, mount,
//!   update (sweep -> start -> advance)

use hashbrown::HashMap;

use crate::config::{Config, HidePolicy};
use crate::error::TriggerError;
use crate::geometry::Viewport;
use crate::ids::{ElementId, IdAllocator, RunId};
use crate::inputs::{Inputs, PageCommand};
use crate::outputs::{CoreEvent, Outputs};
use crate::page::PageSnapshot;
use crate::reactions::{
    parse_counter_target, parse_percent, CounterRun, CounterStep, ReactionKind, ReactionRun,
    ReactionState, StaggerRun, TypingRun,
};
use crate::registry::{GroupTag, TriggerRegistry, TriggerRow};
use crate::watcher::{PollWatcher, ViewportWatcher};
use unveil_api_core::{ElementPath, Mutation};

/// Value captured from an element at mount, read once and never mutated.
#[derive(Clone, Debug, PartialEq)]
enum StoredTarget {
    /// Reveal/morph need nothing beyond the class in their row.
    None,
    /// Counter target integer.
    Count(u64),
    /// Progress width percentage.
    Percent(f32),
    /// Typing text, captured before the element is ever cleared.
    Text(String),
    /// Stagger children, document order.
    Children(Vec<ElementPath>),
}

/// One observed element and its reaction cell.
#[derive(Debug)]
struct ElementEntry {
    id: ElementId,
    path: ElementPath,
    group: GroupTag,
    state: ReactionState,
    target: StoredTarget,
}

/// A timed reaction in flight.
#[derive(Debug)]
struct ActiveRun {
    id: RunId,
    element: ElementId,
    group: GroupTag,
    run: ReactionRun,
}

/// Engine (core), host-agnostic: geometry in, DOM writes out.
pub struct Engine {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    registry: TriggerRegistry,
    elements: Vec<ElementEntry>,
    index: HashMap<ElementPath, ElementId>,

    // Systems
    watcher: Box<dyn ViewportWatcher>,
    active: Vec<ActiveRun>,

    // Page state
    viewport: Viewport,
    hidden: bool,
    mounted: bool,

    // Per-tick outputs. Mount-time events park in `pending_events` until
    // the next update so hosts see them on the regular stream.
    outputs: Outputs,
    pending_events: Vec<CoreEvent>,
}

impl Engine {
    /// Create a new engine with the given config and an empty registry.
    pub fn new(cfg: Config) -> Self {
        Self::with_watcher(cfg, Box::new(PollWatcher::new()))
    }

    /// Create a new engine preloaded with the stock trigger groups.
    pub fn with_standard_triggers(cfg: Config) -> Self {
        let mut engine = Self::new(cfg);
        engine.registry = TriggerRegistry::standard();
        engine
    }

    /// Create an engine over a custom visibility source.
    pub fn with_watcher(cfg: Config, watcher: Box<dyn ViewportWatcher>) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            registry: TriggerRegistry::new(),
            elements: Vec::new(),
            index: HashMap::new(),
            watcher,
            active: Vec::new(),
            viewport: Viewport::default(),
            hidden: false,
            mounted: false,
            outputs: Outputs::default(),
            pending_events: Vec::new(),
        }
    }

    /// Register a trigger group. Rejected after mount: there is no re-scan,
    /// so a late row could never match anything.
    pub fn register_trigger(
        &mut self,
        group: GroupTag,
        row: TriggerRow,
    ) -> Result<(), TriggerError> {
        if self.mounted {
            return Err(TriggerError::AlreadyMounted);
        }
        self.registry.register(group, row)
    }

    /// One-shot page setup: resolve every registry row against the
    /// snapshot, observe matches, and capture their stored targets.
    /// Malformed targets fail closed: the element is marked Skipped, a
    /// warning is logged, and a TargetSkipped event is queued.
    pub fn mount(&mut self, snapshot: &PageSnapshot) -> Result<(), TriggerError> {
        if self.mounted {
            return Err(TriggerError::AlreadyMounted);
        }
        snapshot
            .validate_basic()
            .map_err(|reason| TriggerError::InvalidSnapshot { reason })?;

        for decl in &snapshot.elements {
            // First matching row in registration order claims the element.
            let claimed = self
                .registry
                .iter()
                .find(|(_, row)| row.selector.matches(&decl.markers));
            let (group, row) = match claimed {
                Some((group, row)) => (group, row.clone()),
                None => continue,
            };

            let resolved: Result<StoredTarget, String> = match &row.reaction {
                ReactionKind::Reveal { .. } | ReactionKind::Morph { .. } => Ok(StoredTarget::None),
                ReactionKind::Counter => {
                    let raw = decl.data("target").unwrap_or("");
                    parse_counter_target(raw)
                        .map(StoredTarget::Count)
                        .ok_or_else(|| raw.to_string())
                }
                ReactionKind::Progress => {
                    let raw = decl.data("width").unwrap_or("");
                    parse_percent(raw)
                        .map(StoredTarget::Percent)
                        .ok_or_else(|| raw.to_string())
                }
                ReactionKind::Typing => Ok(StoredTarget::Text(decl.text.clone())),
                ReactionKind::Stagger { child_markers, .. } => Ok(StoredTarget::Children(
                    decl.children
                        .iter()
                        .filter(|c| child_markers.iter().any(|m| c.has_marker(m)))
                        .map(|c| c.path.clone())
                        .collect(),
                )),
            };

            let id = self.ids.alloc_element();
            let (state, target) = match resolved {
                Ok(target) => {
                    self.watcher.observe(id, row.config);
                    (ReactionState::Idle, target)
                }
                Err(raw) => {
                    log::warn!(
                        "skipping {group:?} reaction for '{}': invalid stored target {raw:?}",
                        decl.path
                    );
                    self.pending_events.push(CoreEvent::TargetSkipped {
                        path: decl.path.clone(),
                        group,
                        raw,
                    });
                    (ReactionState::Skipped, StoredTarget::None)
                }
            };

            self.index.insert(decl.path.clone(), id);
            self.elements.push(ElementEntry {
                id,
                path: decl.path.clone(),
                group,
                state,
                target,
            });
        }

        self.mounted = true;
        Ok(())
    }

    /// Step the engine by dt seconds with given inputs, producing outputs.
    /// Order: commands/geometry -> watcher sweep -> start reactions ->
    /// advance runs that were already in flight.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        for ev in self.pending_events.drain(..) {
            self.outputs.events.push(ev);
        }

        // 1) Page commands
        for cmd in inputs.page_cmds {
            match cmd {
                PageCommand::Hidden => {
                    if !self.hidden {
                        self.hidden = true;
                        self.outputs.push_event(CoreEvent::PageHidden);
                    }
                }
                PageCommand::Shown => {
                    if self.hidden {
                        self.hidden = false;
                        self.outputs.push_event(CoreEvent::PageShown);
                    }
                }
            }
        }

        // 2) Geometry
        if let Some(vp) = inputs.viewport {
            self.viewport = vp;
        }
        for update in inputs.rects {
            // Geometry for unknown elements is tolerated and ignored.
            if let Some(id) = self.index.get(&update.path) {
                self.watcher.set_rect(*id, update.rect);
            }
        }

        // 3) Enter edges -> new reactions. Runs started here first advance
        // on the next tick, matching timer-registration semantics.
        let in_flight_before = self.active.len();
        let entered = self.watcher.sweep(self.viewport);
        for enter in entered {
            self.start_reaction(enter.element);
        }

        // 4) Advance pre-existing runs
        let paused = self.hidden && self.cfg.hide_policy == HidePolicy::Pause;
        if !paused {
            self.advance_runs(dt * 1000.0, in_flight_before);
        }

        // Backpressure: keep the earliest events of the tick.
        self.outputs.events.truncate(self.cfg.max_events_per_tick);
        &self.outputs
    }

    /// First qualifying enter-event for an element arms its reaction. The
    /// state guard makes duplicate edges in one sweep (or a re-entry before
    /// completion) a no-op; one-shot strategies additionally unobserve.
    fn start_reaction(&mut self, id: ElementId) {
        let idx = id.0 as usize;
        let (path, group) = match self.elements.get(idx) {
            Some(entry) if entry.state == ReactionState::Idle => {
                // Elements are stored dense: index == id.
                debug_assert_eq!(entry.id, id);
                (entry.path.clone(), entry.group)
            }
            _ => return,
        };
        let row = match self.registry.get(group) {
            Some(row) => row.clone(),
            None => return,
        };

        self.outputs.push_event(CoreEvent::ElementEntered {
            path: path.clone(),
            group,
        });
        if row.reaction.unobserves_on_enter() {
            self.watcher.unobserve(id);
        }
        self.outputs.push_event(CoreEvent::ReactionStarted {
            path: path.clone(),
            group,
        });
        self.elements[idx].state = ReactionState::Animating;

        let target = self.elements[idx].target.clone();
        match (row.reaction, target) {
            (ReactionKind::Reveal { class }, _) | (ReactionKind::Morph { class }, _) => {
                self.outputs
                    .push_write(path.clone(), Mutation::AddClass(class));
                self.finish(idx, path, group);
            }
            (ReactionKind::Progress, StoredTarget::Percent(percent)) => {
                self.outputs
                    .push_write(path.clone(), Mutation::SetWidthPercent(percent));
                self.finish(idx, path, group);
            }
            (ReactionKind::Counter, StoredTarget::Count(count)) => {
                let run = CounterRun::new(count, self.cfg.counter_steps);
                self.push_run(id, group, ReactionRun::Counter(run));
            }
            (ReactionKind::Typing, StoredTarget::Text(text)) => {
                self.outputs
                    .push_write(path.clone(), Mutation::SetText(String::new()));
                let run = TypingRun::new(&text);
                if run.finished() {
                    self.finish(idx, path, group);
                } else {
                    self.push_run(id, group, ReactionRun::Typing(run));
                }
            }
            (
                ReactionKind::Stagger {
                    class,
                    child_markers: _,
                },
                StoredTarget::Children(children),
            ) => {
                let mut run =
                    StaggerRun::new(children, self.cfg.stagger_step_ms as f32, class);
                // Child 0 lands on the trigger tick itself.
                let mut emitted: Vec<(ElementPath, Mutation)> = Vec::new();
                let finished = run.tick(0.0, |child, cls| {
                    emitted.push((child.clone(), Mutation::AddClass(cls.to_string())));
                });
                for (child, mutation) in emitted {
                    self.outputs.push_write(child, mutation);
                }
                if finished {
                    self.finish(idx, path, group);
                } else {
                    self.push_run(id, group, ReactionRun::Stagger(run));
                }
            }
            // Kind/target mismatch cannot be built through mount; treat as
            // a no-op rather than panic (fail-soft).
            _ => {
                self.finish(idx, path, group);
            }
        }
    }

    fn push_run(&mut self, element: ElementId, group: GroupTag, run: ReactionRun) {
        let id = self.ids.alloc_run();
        self.active.push(ActiveRun {
            id,
            element,
            group,
            run,
        });
    }

    fn finish(&mut self, idx: usize, path: ElementPath, group: GroupTag) {
        self.elements[idx].state = ReactionState::Done;
        self.outputs
            .push_event(CoreEvent::ReactionCompleted { path, group });
    }

    /// Advance the first `limit` runs (those in flight before this tick's
    /// sweep) by dt, retiring any that complete.
    fn advance_runs(&mut self, dt_ms: f32, limit: usize) {
        let typing_step = self.cfg.typing_step_ms as f32;
        let mut remaining = limit.min(self.active.len());
        let mut i = 0;
        while i < remaining {
            let mut emitted: Vec<(ElementPath, Mutation)> = Vec::new();
            let (finished, element, group) = {
                let active = &mut self.active[i];
                let path = &self.elements[active.element.0 as usize].path;
                let finished = match &mut active.run {
                    ReactionRun::Counter(run) => match run.tick() {
                        CounterStep::Value(v) => {
                            emitted.push((path.clone(), Mutation::SetText(v.to_string())));
                            false
                        }
                        CounterStep::Final(v) => {
                            emitted.push((path.clone(), Mutation::SetText(v.to_string())));
                            true
                        }
                    },
                    ReactionRun::Typing(run) => run.tick(dt_ms, typing_step, |prefix| {
                        emitted.push((path.clone(), Mutation::SetText(prefix.to_string())));
                    }),
                    ReactionRun::Stagger(run) => run.tick(dt_ms, |child, class| {
                        emitted.push((child.clone(), Mutation::AddClass(class.to_string())));
                    }),
                };
                (finished, active.element, active.group)
            };

            for (target, mutation) in emitted {
                self.outputs.push_write(target, mutation);
            }

            if finished {
                let idx = element.0 as usize;
                let path = self.elements[idx].path.clone();
                log::debug!("run {:?} for '{path}' finished", self.active[i].id);
                self.finish(idx, path, group);
                self.active.remove(i);
                remaining -= 1;
            } else {
                i += 1;
            }
        }
    }

    /// Reaction state for an element, if it was claimed at mount.
    pub fn element_state(&self, path: &ElementPath) -> Option<ReactionState> {
        let id = self.index.get(path)?;
        self.elements.get(id.0 as usize).map(|e| e.state)
    }

    /// Whether the watcher still holds a registration for the element.
    pub fn is_observed(&self, path: &ElementPath) -> bool {
        self.index
            .get(path)
            .is_some_and(|id| self.watcher.is_observed(*id))
    }

    /// Number of timed runs currently in flight.
    pub fn active_runs(&self) -> usize {
        self.active.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("elements", &self.elements.len())
            .field("active", &self.active.len())
            .field("mounted", &self.mounted)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}
