//! Viewport watcher: enter-edge detection behind a substitutable trait.
//!
//! The engine only ever needs "element X crossed into view"; everything
//! else (leave edges, fraction streams) stays internal. The shipped
//! implementation is a polling sweep over host-reported rectangles, so the
//! core runs anywhere a per-tick geometry feed exists. Hosts with a native
//! visibility primitive can substitute their own `ViewportWatcher`.

use serde::{Deserialize, Serialize};

use crate::geometry::{visible_fraction, Rect, RootMargin, Viewport};
use crate::ids::ElementId;

/// Observation parameters; immutable once an element is observed.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriggerConfig {
    /// Visible fraction that counts as "entered", in [0, 1]. A threshold of
    /// zero means any intersection at all.
    pub threshold_fraction: f32,
    pub root_margin: RootMargin,
}

impl TriggerConfig {
    pub fn new(threshold_fraction: f32, root_margin: RootMargin) -> Self {
        Self {
            threshold_fraction: threshold_fraction.clamp(0.0, 1.0),
            root_margin,
        }
    }

    pub fn threshold(threshold_fraction: f32) -> Self {
        Self::new(threshold_fraction, RootMargin::default())
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.1,
            root_margin: RootMargin::default(),
        }
    }
}

/// One rising edge: the element went from not-visible to visible this sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnterEvent {
    pub element: ElementId,
}

/// Visibility source contract. `sweep` reports enter edges only; there is
/// no leave callback. An element observed while already visible delivers
/// exactly one enter on the first sweep.
pub trait ViewportWatcher {
    fn observe(&mut self, element: ElementId, config: TriggerConfig);
    fn unobserve(&mut self, element: ElementId);
    /// Record the element's latest rectangle in viewport coordinates.
    /// Unknown elements are ignored.
    fn set_rect(&mut self, element: ElementId, rect: Rect);
    /// Evaluate all observed elements against the viewport and drain the
    /// rising edges detected since the previous sweep.
    fn sweep(&mut self, viewport: Viewport) -> Vec<EnterEvent>;
    fn is_observed(&self, element: ElementId) -> bool;
}

#[derive(Debug)]
struct WatchRow {
    element: ElementId,
    config: TriggerConfig,
    /// Last host-reported rectangle; None until geometry arrives, which
    /// models a detached node (never fires, no error).
    rect: Option<Rect>,
    /// Whether the element was at-or-above threshold at the last sweep.
    above: bool,
}

/// Polling implementation over host-reported rectangles.
#[derive(Debug, Default)]
pub struct PollWatcher {
    rows: Vec<WatchRow>,
}

impl PollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, element: ElementId) -> Option<&mut WatchRow> {
        self.rows.iter_mut().find(|r| r.element == element)
    }
}

impl ViewportWatcher for PollWatcher {
    fn observe(&mut self, element: ElementId, config: TriggerConfig) {
        // Re-observing replaces the registration and restarts edge tracking.
        self.unobserve(element);
        self.rows.push(WatchRow {
            element,
            config,
            rect: None,
            above: false,
        });
    }

    fn unobserve(&mut self, element: ElementId) {
        self.rows.retain(|r| r.element != element);
    }

    fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(row) = self.row_mut(element) {
            row.rect = Some(rect);
        }
    }

    fn sweep(&mut self, viewport: Viewport) -> Vec<EnterEvent> {
        let mut entered = Vec::new();
        for row in &mut self.rows {
            let rect = match row.rect {
                Some(r) => r,
                None => continue,
            };
            let fraction = visible_fraction(&rect, viewport, &row.config.root_margin);
            let threshold = row.config.threshold_fraction;
            let now_above = if threshold <= 0.0 {
                fraction > 0.0
            } else {
                fraction >= threshold
            };
            if now_above && !row.above {
                entered.push(EnterEvent {
                    element: row.element,
                });
            }
            row.above = now_above;
        }
        entered
    }

    fn is_observed(&self, element: ElementId) -> bool {
        self.rows.iter().any(|r| r.element == element)
    }
}
