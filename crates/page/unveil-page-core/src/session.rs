//! Page session: visibility and resize handling.
//!
//! Hide/show flips the stylesheet side of the animations via a global
//! animation-play-state write; both transitions and resizes are logged at
//! debug level. The trigger engine handles its own timers separately via
//! its HidePolicy.

use unveil_api_core::{ElementPath, Mutation, PlayState};

use crate::outputs::{PageEvent, PageOutputs};

#[derive(Clone, Debug)]
pub struct PageSession {
    animation_root: ElementPath,
    hidden: bool,
}

impl PageSession {
    pub fn new(animation_root: ElementPath) -> Self {
        Self {
            animation_root,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_visibility(&mut self, hidden: bool, out: &mut PageOutputs) {
        if self.hidden == hidden {
            return;
        }
        self.hidden = hidden;
        let (state, event) = if hidden {
            (PlayState::Paused, PageEvent::PageHidden)
        } else {
            (PlayState::Running, PageEvent::PageShown)
        };
        log::debug!(
            "page visibility changed: {}",
            if hidden { "hidden" } else { "visible" }
        );
        out.push_write(self.animation_root.clone(), Mutation::SetPlayState(state));
        out.push_event(event);
    }

    pub fn resized(&self, width: f32, height: f32, out: &mut PageOutputs) {
        log::debug!("viewport resized to {width}x{height}");
        out.push_event(PageEvent::ViewportResized { width, height });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_then_show_toggles_play_state() {
        let mut session = PageSession::new(ElementPath::parse("page").unwrap());
        let mut out = PageOutputs::default();

        session.set_visibility(true, &mut out);
        assert!(session.is_hidden());
        assert_eq!(
            out.writes.iter().next().unwrap().mutation,
            Mutation::SetPlayState(PlayState::Paused)
        );
        assert_eq!(out.events, vec![PageEvent::PageHidden]);

        out.clear();
        // Repeated hide is a no-op.
        session.set_visibility(true, &mut out);
        assert!(out.is_empty());

        session.set_visibility(false, &mut out);
        assert_eq!(
            out.writes.iter().next().unwrap().mutation,
            Mutation::SetPlayState(PlayState::Running)
        );
        assert_eq!(out.events, vec![PageEvent::PageShown]);
    }
}
