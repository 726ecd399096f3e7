//! unveil-page-core: the page behaviors around the trigger engine.
//!
//! Everything here is event-to-style glue: navigation toggling, parallax,
//! toasts, ripples, and page-session logging. It shares the trigger
//! engine's contracts (DOM writes out, commands in, one update per tick)
//! but none of its state; the two runtimes only share the document.

pub mod config;
pub mod inputs;
pub mod nav;
pub mod notifications;
pub mod outputs;
pub mod parallax;
pub mod ripple;
pub mod runtime;
pub mod session;

pub use config::PageConfig;
pub use inputs::{PageCmd, PageInputs, PointerPress};
pub use nav::NavToggle;
pub use notifications::{NotificationCenter, ToastId, ToastKind};
pub use outputs::{DismissReason, OverlayOp, PageEvent, PageOutputs};
pub use parallax::{ParallaxField, ParallaxLayer};
pub use ripple::{RippleField, RippleId};
pub use runtime::PageRuntime;
pub use session::PageSession;
pub use unveil_api_core::{DomWrite, ElementPath, Mutation, PlayState, WriteBatch};
