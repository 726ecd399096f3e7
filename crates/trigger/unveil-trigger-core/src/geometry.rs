//! Viewport geometry: rectangles, margins, and visible-fraction math.
//!
//! The watcher never touches a real layout engine; hosts report element
//! rectangles in viewport coordinates each tick and the math below decides
//! how much of each element is inside the (margin-adjusted) viewport.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in viewport coordinates (y grows downward).
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Area of the intersection with `other` (0 when disjoint).
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        let left = self.x.max(other.x);
        let right = (self.x + self.width).min(other.x + other.width);
        let top = self.y.max(other.y);
        let bottom = (self.y + self.height).min(other.y + other.height);
        (right - left).max(0.0) * (bottom - top).max(0.0)
    }
}

/// Viewport dimensions; the viewport box starts at the origin.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // A common desktop size; hosts overwrite this on the first tick.
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Four-inset margin applied to the viewport box before intersection.
/// Positive values grow the box (elements trigger earlier), negative
/// values shrink it (elements must scroll further in), matching the CSS
/// root-margin convention. Pixels only.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    pub fn uniform(inset: f32) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Bottom-only inset, the common "reveal a little before the fold" case.
    pub fn bottom_only(inset: f32) -> Self {
        Self {
            bottom: inset,
            ..Self::default()
        }
    }

    /// The viewport box adjusted by this margin.
    pub fn apply(&self, viewport: Viewport) -> Rect {
        Rect {
            x: -self.left,
            y: -self.top,
            width: (viewport.width + self.left + self.right).max(0.0),
            height: (viewport.height + self.top + self.bottom).max(0.0),
        }
    }
}

/// Fraction of `rect` inside the margin-adjusted viewport, in [0, 1].
/// Degenerate rects (zero area) report 0.
pub fn visible_fraction(rect: &Rect, viewport: Viewport, margin: &RootMargin) -> f32 {
    let area = rect.area();
    if area <= 0.0 {
        return 0.0;
    }
    let root = margin.apply(viewport);
    (rect.intersection_area(&root) / area).clamp(0.0, 1.0)
}
