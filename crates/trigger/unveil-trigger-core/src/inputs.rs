//! Input contracts for the core engine.
//!
//! v1 keeps this minimal: per-element geometry, viewport updates, and page
//! commands. Hosts build and pass these into Engine::update() each tick.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Viewport};
use unveil_api_core::ElementPath;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Latest element rectangles, viewport coordinates.
    #[serde(default)]
    pub rects: Vec<RectUpdate>,
    /// New viewport dimensions, if they changed this tick.
    #[serde(default)]
    pub viewport: Option<Viewport>,
    /// Page-level commands applied before sweeping.
    #[serde(default)]
    pub page_cmds: Vec<PageCommand>,
}

impl Inputs {
    /// Convenience for the common geometry-only tick.
    pub fn rects(rects: Vec<RectUpdate>) -> Self {
        Self {
            rects,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RectUpdate {
    pub path: ElementPath,
    pub rect: Rect,
}

impl RectUpdate {
    pub fn new(path: ElementPath, rect: Rect) -> Self {
        Self { path, rect }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PageCommand {
    /// The hosting page became hidden (tab switch, minimize).
    Hidden,
    /// The hosting page became visible again.
    Shown,
}
