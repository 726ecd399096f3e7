//! Error types for the trigger engine

use crate::registry::GroupTag;

/// Errors surfaced by engine setup. Runtime stepping never fails: absent
/// elements and empty selector matches degrade to no-ops by contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TriggerError {
    /// A trigger group was registered twice
    #[error("trigger group already registered: {group:?}")]
    DuplicateGroup { group: GroupTag },

    /// Mount was called on an engine that already holds a page
    #[error("page already mounted")]
    AlreadyMounted,

    /// The page snapshot failed basic validation
    #[error("page snapshot rejected: {reason}")]
    InvalidSnapshot { reason: String },
}
