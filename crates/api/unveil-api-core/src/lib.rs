//! unveil-api-core: shared ElementPath & Mutation API (core, engine-agnostic)

pub mod element_path;
pub mod mutation;
pub mod write_ops;

pub use element_path::ElementPath;
pub use mutation::{Mutation, MutationKind, PlayState};
pub use write_ops::{DomWrite, WriteBatch};
