//! Ripple overlays: a pointer press mounts a short-lived circle at the
//! press point; the runtime removes it once its lifetime elapses.

use serde::{Deserialize, Serialize};

use crate::outputs::{OverlayOp, PageOutputs};
use unveil_api_core::ElementPath;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RippleId(pub u32);

#[derive(Clone, Debug)]
struct ActiveRipple {
    id: RippleId,
    remaining_ms: f32,
}

#[derive(Clone, Debug)]
pub struct RippleField {
    next: u32,
    lifetime_ms: u32,
    active: Vec<ActiveRipple>,
}

impl RippleField {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            next: 0,
            lifetime_ms,
            active: Vec::new(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn press(&mut self, target: ElementPath, x: f32, y: f32, out: &mut PageOutputs) -> RippleId {
        let id = RippleId(self.next);
        self.next = self.next.wrapping_add(1);
        self.active.push(ActiveRipple {
            id,
            remaining_ms: self.lifetime_ms as f32,
        });
        out.push_overlay(OverlayOp::MountRipple { id, target, x, y });
        id
    }

    pub fn tick(&mut self, dt_ms: f32, out: &mut PageOutputs) {
        let mut i = 0;
        while i < self.active.len() {
            self.active[i].remaining_ms -= dt_ms;
            if self.active[i].remaining_ms <= 0.0 {
                let id = self.active[i].id;
                self.active.remove(i);
                out.push_overlay(OverlayOp::RemoveRipple { id });
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
    fn ripple_lives_for_its_lifetime() {
        let mut field = RippleField::new(600);
        let mut out = PageOutputs::default();
        let target = ElementPath::parse("cta/button").unwrap();
        let id = field.press(target, 12.0, 8.0, &mut out);
        assert_eq!(field.active_count(), 1);

        out.clear();
        field.tick(599.0, &mut out);
        assert!(out.is_empty());
        field.tick(1.0, &mut out);
        assert_eq!(out.overlays, vec![OverlayOp::RemoveRipple { id }]);
        assert_eq!(field.active_count(), 0);
    }

    #[test]
    fn overlapping_presses_retire_independently() {
        let mut field = RippleField::new(600);
        let mut out = PageOutputs::default();
        let target = ElementPath::parse("cta/button").unwrap();
        let first = field.press(target.clone(), 0.0, 0.0, &mut out);
        field.tick(300.0, &mut out);
        let second = field.press(target, 4.0, 4.0, &mut out);

        out.clear();
        field.tick(300.0, &mut out);
        assert_eq!(out.overlays, vec![OverlayOp::RemoveRipple { id: first }]);
        out.clear();
        field.tick(300.0, &mut out);
        assert_eq!(out.overlays, vec![OverlayOp::RemoveRipple { id: second }]);
    }
}
