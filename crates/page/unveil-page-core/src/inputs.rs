//! Input contracts for the page runtime.

use serde::{Deserialize, Serialize};

use crate::notifications::{ToastId, ToastKind};
use unveil_api_core::ElementPath;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PageInputs {
    /// Vertical scroll offset in px, if it changed this tick.
    #[serde(default)]
    pub scroll_y: Option<f32>,
    /// Pointer presses on ripple-enabled elements.
    #[serde(default)]
    pub pointer_presses: Vec<PointerPress>,
    /// Discrete page commands.
    #[serde(default)]
    pub commands: Vec<PageCmd>,
}

/// A press at (x, y) in the target element's local coordinates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PointerPress {
    pub target: ElementPath,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum PageCmd {
    /// Hamburger pressed.
    ToggleNav,
    /// A nav link was activated; the menu closes if open.
    CloseNav,
    ShowToast {
        kind: ToastKind,
        message: String,
    },
    /// Close button on a toast.
    DismissToast {
        id: ToastId,
    },
    VisibilityChanged {
        hidden: bool,
    },
    Resized {
        width: f32,
        height: f32,
    },
}
