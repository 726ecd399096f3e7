//! Navigation toggle: the hamburger/menu open-close pair.
//!
//! Two elements flip an `active` class in lockstep. Closing on link
//! activation is the caller's command (CloseNav); the toggle itself has no
//! idea what a link is.

use unveil_api_core::{ElementPath, Mutation};

use crate::outputs::{PageEvent, PageOutputs};

const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug)]
pub struct NavToggle {
    menu: ElementPath,
    button: ElementPath,
    open: bool,
}

impl NavToggle {
    pub fn new(menu: ElementPath, button: ElementPath) -> Self {
        Self {
            menu,
            button,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, out: &mut PageOutputs) {
        if self.open {
            self.close(out);
        } else {
            self.open = true;
            self.write_class(out, true);
            out.push_event(PageEvent::NavOpened);
        }
    }

    /// Close if open; a no-op otherwise.
    pub fn close(&mut self, out: &mut PageOutputs) {
        if !self.open {
            return;
        }
        self.open = false;
        self.write_class(out, false);
        out.push_event(PageEvent::NavClosed);
    }

    fn write_class(&self, out: &mut PageOutputs, add: bool) {
        for path in [&self.menu, &self.button] {
            let mutation = if add {
                Mutation::AddClass(ACTIVE_CLASS.to_string())
            } else {
                Mutation::RemoveClass(ACTIVE_CLASS.to_string())
            };
            out.push_write(path.clone(), mutation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavToggle {
        NavToggle::new(
            ElementPath::parse("navbar/menu").unwrap(),
            ElementPath::parse("navbar/hamburger").unwrap(),
        )
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut nav = nav();
        let mut out = PageOutputs::default();
        nav.toggle(&mut out);
        assert!(nav.is_open());
        assert_eq!(out.writes.len(), 2);
        assert_eq!(out.events, vec![PageEvent::NavOpened]);

        out.clear();
        nav.toggle(&mut out);
        assert!(!nav.is_open());
        assert_eq!(out.events, vec![PageEvent::NavClosed]);
    }

    #[test]
    fn close_when_closed_is_silent() {
        let mut nav = nav();
        let mut out = PageOutputs::default();
        nav.close(&mut out);
        assert!(out.is_empty());
    }
}
