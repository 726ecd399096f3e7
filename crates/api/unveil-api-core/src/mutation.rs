//! Mutation: the DOM-facing writes an engine may request.
//! Mutations describe the change only; applying them is the host's job.

use serde::{Deserialize, Serialize};

/// Lightweight kind enum for convenience, useful for pattern-matching and
/// quick dispatch without cloning payloads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutationKind {
    SetText,
    AddClass,
    RemoveClass,
    SetWidthPercent,
    SetTranslateY,
    SetPlayState,
}

/// CSS animation-play-state values an engine may request globally.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    Running,
    Paused,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Mutation {
    /// Replace the element's text content
    SetText(String),

    /// Add a marker class (idempotent at the host)
    AddClass(String),

    /// Remove a marker class
    RemoveClass(String),

    /// Set the width style to a percentage (0..100, not clamped here)
    SetWidthPercent(f32),

    /// Set a translateY transform in pixels (parallax)
    SetTranslateY(f32),

    /// Set the animation-play-state style
    SetPlayState(PlayState),
}

impl Mutation {
    /// Return the coarse kind of this mutation.
    #[inline]
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::SetText(_) => MutationKind::SetText,
            Mutation::AddClass(_) => MutationKind::AddClass,
            Mutation::RemoveClass(_) => MutationKind::RemoveClass,
            Mutation::SetWidthPercent(_) => MutationKind::SetWidthPercent,
            Mutation::SetTranslateY(_) => MutationKind::SetTranslateY,
            Mutation::SetPlayState(_) => MutationKind::SetPlayState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Mutation::SetText("42".into()).kind(),
            MutationKind::SetText
        );
        assert_eq!(
            Mutation::AddClass("visible".into()).kind(),
            MutationKind::AddClass
        );
        assert_eq!(
            Mutation::SetPlayState(PlayState::Paused).kind(),
            MutationKind::SetPlayState
        );
    }

    #[test]
    fn serde_uses_tagged_form() {
        let m = Mutation::SetWidthPercent(75.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"type":"set-width-percent","data":75.0}"#);
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
