//! PageRuntime: one update() per tick over all the page behaviors.

use crate::config::PageConfig;
use crate::inputs::{PageCmd, PageInputs};
use crate::nav::NavToggle;
use crate::notifications::{NotificationCenter, ToastId, ToastKind};
use crate::outputs::PageOutputs;
use crate::parallax::ParallaxField;
use crate::ripple::RippleField;
use crate::session::PageSession;
use unveil_api_core::ElementPath;

pub struct PageRuntime {
    nav: NavToggle,
    parallax: ParallaxField,
    toasts: NotificationCenter,
    ripples: RippleField,
    session: PageSession,
    outputs: PageOutputs,
    /// Ops requested between ticks (show_toast); drained into the next
    /// update()'s outputs.
    pending: PageOutputs,
}

impl PageRuntime {
    pub fn new(cfg: PageConfig) -> Self {
        Self {
            nav: NavToggle::new(cfg.nav_menu, cfg.nav_toggle),
            parallax: ParallaxField::new(),
            toasts: NotificationCenter::new(cfg.toast_ttl_ms),
            ripples: RippleField::new(cfg.ripple_lifetime_ms),
            session: PageSession::new(cfg.animation_root),
            outputs: PageOutputs::default(),
            pending: PageOutputs::default(),
        }
    }

    /// Add a parallax layer; effective from the next scroll input.
    pub fn register_parallax_layer(&mut self, path: ElementPath, factor: f32) {
        self.parallax.register(path, factor);
    }

    /// Programmatic toast, outside the command stream. The mount op lands
    /// in the next update()'s outputs.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.toasts.show(kind, message, &mut self.pending)
    }

    /// Step the page behaviors by dt seconds with given inputs.
    pub fn update(&mut self, dt: f32, inputs: PageInputs) -> &PageOutputs {
        self.outputs.clear();
        self.outputs.writes.extend(std::mem::take(&mut self.pending.writes));
        self.outputs.overlays.append(&mut self.pending.overlays);
        self.outputs.events.append(&mut self.pending.events);
        let dt_ms = dt * 1000.0;

        for cmd in inputs.commands {
            match cmd {
                PageCmd::ToggleNav => self.nav.toggle(&mut self.outputs),
                PageCmd::CloseNav => self.nav.close(&mut self.outputs),
                PageCmd::ShowToast { kind, message } => {
                    self.toasts.show(kind, message, &mut self.outputs);
                }
                PageCmd::DismissToast { id } => {
                    self.toasts.dismiss(id, &mut self.outputs);
                }
                PageCmd::VisibilityChanged { hidden } => {
                    self.session.set_visibility(hidden, &mut self.outputs);
                }
                PageCmd::Resized { width, height } => {
                    self.session.resized(width, height, &mut self.outputs);
                }
            }
        }

        if let Some(scroll_y) = inputs.scroll_y {
            self.parallax.on_scroll(scroll_y, &mut self.outputs);
        }

        for press in inputs.pointer_presses {
            self.ripples
                .press(press.target, press.x, press.y, &mut self.outputs);
        }

        // Toast TTLs and ripple lifetimes run on wall-clock regardless of
        // visibility; only the stylesheet animations pause on hide.
        self.toasts.tick(dt_ms, &mut self.outputs);
        self.ripples.tick(dt_ms, &mut self.outputs);

        &self.outputs
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn active_toasts(&self) -> usize {
        self.toasts.active_count()
    }

    pub fn active_ripples(&self) -> usize {
        self.ripples.active_count()
    }

    pub fn is_hidden(&self) -> bool {
        self.session.is_hidden()
    }
}

impl std::fmt::Debug for PageRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRuntime")
            .field("nav_open", &self.nav.is_open())
            .field("toasts", &self.toasts.active_count())
            .field("ripples", &self.ripples.active_count())
            .field("hidden", &self.session.is_hidden())
            .finish_non_exhaustive()
    }
}
