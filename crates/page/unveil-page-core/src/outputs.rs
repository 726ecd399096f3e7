//! Output contracts from the page runtime.
//!
//! Writes mutate elements that already exist; overlay ops mount and
//! remove host-created nodes (toasts, ripples) the runtime only knows by
//! id. Events mirror the trigger engine's semantic stream.

use serde::{Deserialize, Serialize};

use crate::notifications::{ToastId, ToastKind};
use crate::ripple::RippleId;
use unveil_api_core::{DomWrite, ElementPath, Mutation, WriteBatch};

/// Why a toast went away.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    /// The TTL ran out.
    Expired,
    /// The close button (or host code) asked for it.
    Requested,
}

/// Mount/remove instructions for host-created overlay nodes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum OverlayOp {
    MountToast {
        id: ToastId,
        kind: ToastKind,
        message: String,
    },
    RemoveToast {
        id: ToastId,
    },
    MountRipple {
        id: RippleId,
        target: ElementPath,
        x: f32,
        y: f32,
    },
    RemoveRipple {
        id: RippleId,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum PageEvent {
    NavOpened,
    NavClosed,
    ToastShown { id: ToastId },
    ToastDismissed { id: ToastId, reason: DismissReason },
    PageHidden,
    PageShown,
    ViewportResized { width: f32, height: f32 },
}

/// Outputs returned by PageRuntime::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageOutputs {
    #[serde(default)]
    pub writes: WriteBatch,
    #[serde(default)]
    pub overlays: Vec<OverlayOp>,
    #[serde(default)]
    pub events: Vec<PageEvent>,
}

impl PageOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.writes.clear();
        self.overlays.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_write(&mut self, path: ElementPath, mutation: Mutation) {
        self.writes.push(DomWrite::new(path, mutation));
    }

    #[inline]
    pub fn push_overlay(&mut self, op: OverlayOp) {
        self.overlays.push(op);
    }

    #[inline]
    pub fn push_event(&mut self, event: PageEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.overlays.is_empty() && self.events.is_empty()
    }
}
