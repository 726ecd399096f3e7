//! Unveil Trigger Core (host-agnostic)
//!
//! A viewport-visibility trigger engine: hosts describe their document
//! once (PageSnapshot), feed per-tick geometry and page commands into
//! Engine::update(), and apply the returned DOM writes. Reaction
//! strategies (reveal, stagger, counter, progress, typing, morph) arm on
//! enter edges reported by a substitutable ViewportWatcher and run as
//! short per-tick steps, never blocking the host loop.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod page;
pub mod reactions;
pub mod registry;
pub mod stored_page;
pub mod watcher;

// Re-exports for consumers (hosts)
pub use config::{Config, HidePolicy};
pub use engine::Engine;
pub use error::TriggerError;
pub use geometry::{visible_fraction, Rect, RootMargin, Viewport};
pub use ids::{ElementId, RunId};
pub use inputs::{Inputs, PageCommand, RectUpdate};
pub use outputs::{CoreEvent, Outputs};
pub use page::{ElementDecl, PageSnapshot};
pub use reactions::{ReactionKind, ReactionState};
pub use registry::{GroupTag, Selector, TriggerRegistry, TriggerRow};
pub use stored_page::parse_page_snapshot_json;
pub use watcher::{EnterEvent, PollWatcher, TriggerConfig, ViewportWatcher};
pub use unveil_api_core::{DomWrite, ElementPath, Mutation, PlayState, WriteBatch};
