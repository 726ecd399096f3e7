//! Toast notifications: show, auto-dismiss on TTL, manual dismiss.

use serde::{Deserialize, Serialize};

use crate::outputs::{DismissReason, OverlayOp, PageEvent, PageOutputs};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u32);

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug)]
struct ActiveToast {
    id: ToastId,
    remaining_ms: f32,
}

#[derive(Clone, Debug)]
pub struct NotificationCenter {
    next: u32,
    ttl_ms: u32,
    active: Vec<ActiveToast>,
}

impl NotificationCenter {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            next: 0,
            ttl_ms,
            active: Vec::new(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Mount a toast and start its TTL countdown.
    pub fn show(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        out: &mut PageOutputs,
    ) -> ToastId {
        let id = ToastId(self.next);
        self.next = self.next.wrapping_add(1);
        self.active.push(ActiveToast {
            id,
            remaining_ms: self.ttl_ms as f32,
        });
        out.push_overlay(OverlayOp::MountToast {
            id,
            kind,
            message: message.into(),
        });
        out.push_event(PageEvent::ToastShown { id });
        id
    }

    /// Manual dismissal (close button). Unknown ids are a no-op; the toast
    /// may already have expired.
    pub fn dismiss(&mut self, id: ToastId, out: &mut PageOutputs) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id == id) else {
            return false;
        };
        self.active.remove(pos);
        out.push_overlay(OverlayOp::RemoveToast { id });
        out.push_event(PageEvent::ToastDismissed {
            id,
            reason: DismissReason::Requested,
        });
        true
    }

    /// Advance TTLs; expired toasts are removed in show order.
    pub fn tick(&mut self, dt_ms: f32, out: &mut PageOutputs) {
        let mut i = 0;
        while i < self.active.len() {
            self.active[i].remaining_ms -= dt_ms;
            if self.active[i].remaining_ms <= 0.0 {
                let id = self.active[i].id;
                self.active.remove(i);
                out.push_overlay(OverlayOp::RemoveToast { id });
                out.push_event(PageEvent::ToastDismissed {
                    id,
                    reason: DismissReason::Expired,
                });
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let mut center = NotificationCenter::new(5000);
        let mut out = PageOutputs::default();
        let id = center.show(ToastKind::Success, "saved", &mut out);

        out.clear();
        center.tick(4999.0, &mut out);
        assert!(out.is_empty());
        assert_eq!(center.active_count(), 1);

        center.tick(1.0, &mut out);
        assert_eq!(out.overlays, vec![OverlayOp::RemoveToast { id }]);
        assert_eq!(
            out.events,
            vec![PageEvent::ToastDismissed {
                id,
                reason: DismissReason::Expired
            }]
        );
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn manual_dismiss_beats_the_timer() {
        let mut center = NotificationCenter::new(5000);
        let mut out = PageOutputs::default();
        let id = center.show(ToastKind::Error, "boom", &mut out);

        out.clear();
        assert!(center.dismiss(id, &mut out));
        assert_eq!(
            out.events,
            vec![PageEvent::ToastDismissed {
                id,
                reason: DismissReason::Requested
            }]
        );
        // Second dismissal of the same id is a no-op.
        assert!(!center.dismiss(id, &mut out));
    }

    #[test]
    fn ids_are_unique_across_toasts() {
        let mut center = NotificationCenter::new(5000);
        let mut out = PageOutputs::default();
        let a = center.show(ToastKind::Info, "a", &mut out);
        let b = center.show(ToastKind::Info, "b", &mut out);
        assert_ne!(a, b);
    }
}
