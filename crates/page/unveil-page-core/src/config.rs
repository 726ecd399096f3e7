//! Configuration for the page runtime.

use serde::{Deserialize, Serialize};
use unveil_api_core::ElementPath;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageConfig {
    /// How long a toast stays up before auto-dismissal.
    pub toast_ttl_ms: u32,

    /// How long a ripple overlay lives after a pointer press.
    pub ripple_lifetime_ms: u32,

    /// Menu container that receives the `active` class when open.
    pub nav_menu: ElementPath,

    /// Hamburger button, toggled in lockstep with the menu.
    pub nav_toggle: ElementPath,

    /// Root element whose animation-play-state is flipped on page
    /// hide/show (pauses the stylesheet side of the animations).
    pub animation_root: ElementPath,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ms: 5000,
            ripple_lifetime_ms: 600,
            nav_menu: ElementPath::new(vec!["navbar".into()], "menu"),
            nav_toggle: ElementPath::new(vec!["navbar".into()], "hamburger"),
            animation_root: ElementPath::new(Vec::new(), "page"),
        }
    }
}
