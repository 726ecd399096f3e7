//! Trigger registry: group tag -> selector + observer config + reaction.
//!
//! Rows are applied once, at mount: every snapshot element matching a
//! row's selector is resolved, observed, and given an Idle reaction cell.
//! There is no re-scan afterwards. Registration order is the resolution
//! order, and the first matching row claims an element.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TriggerError;
use crate::geometry::RootMargin;
use crate::reactions::ReactionKind;
use crate::watcher::TriggerConfig;

/// The recognized trigger groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupTag {
    Reveal,
    StaggerParent,
    Counter,
    Progress,
    Typing,
    Morph,
}

/// Marker-class selector: matches any element carrying the marker.
/// The CSS-selector equivalence the host promises is exactly this.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selector(pub String);

impl Selector {
    pub fn marker(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn matches(&self, markers: &[String]) -> bool {
        markers.iter().any(|m| *m == self.0)
    }
}

/// One registered trigger group.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriggerRow {
    pub selector: Selector,
    pub config: TriggerConfig,
    pub reaction: ReactionKind,
}

/// Ordered group table. IndexMap keeps mount resolution deterministic.
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry {
    rows: IndexMap<GroupTag, TriggerRow>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    /// The stock six groups with the marker names and thresholds the
    /// shipped stylesheets assume.
    pub fn standard() -> Self {
        let mut reg = Self::new();
        let rows = [
            (
                GroupTag::Reveal,
                TriggerRow {
                    selector: Selector::marker("reveal"),
                    config: TriggerConfig::new(0.1, RootMargin::bottom_only(-50.0)),
                    reaction: ReactionKind::Reveal {
                        class: "visible".into(),
                    },
                },
            ),
            (
                GroupTag::StaggerParent,
                TriggerRow {
                    selector: Selector::marker("stagger"),
                    config: TriggerConfig::threshold(0.1),
                    reaction: ReactionKind::Stagger {
                        child_markers: vec!["stagger-item".into()],
                        class: "visible".into(),
                    },
                },
            ),
            (
                GroupTag::Counter,
                TriggerRow {
                    selector: Selector::marker("counter"),
                    config: TriggerConfig::threshold(0.5),
                    reaction: ReactionKind::Counter,
                },
            ),
            (
                GroupTag::Progress,
                TriggerRow {
                    selector: Selector::marker("progress-bar"),
                    config: TriggerConfig::threshold(0.5),
                    reaction: ReactionKind::Progress,
                },
            ),
            (
                GroupTag::Typing,
                TriggerRow {
                    selector: Selector::marker("typing-text"),
                    config: TriggerConfig::threshold(0.8),
                    reaction: ReactionKind::Typing,
                },
            ),
            (
                GroupTag::Morph,
                TriggerRow {
                    selector: Selector::marker("morph"),
                    config: TriggerConfig::threshold(0.3),
                    reaction: ReactionKind::Morph {
                        class: "animated".into(),
                    },
                },
            ),
        ];
        for (tag, row) in rows {
            // Fresh registry, tags are distinct; cannot collide.
            let _ = reg.register(tag, row);
        }
        reg
    }

    /// Add a group row. Each group can be registered once; the config is
    /// immutable after that (observers are created from it at mount).
    pub fn register(&mut self, group: GroupTag, row: TriggerRow) -> Result<(), TriggerError> {
        if self.rows.contains_key(&group) {
            return Err(TriggerError::DuplicateGroup { group });
        }
        self.rows.insert(group, row);
        Ok(())
    }

    pub fn get(&self, group: GroupTag) -> Option<&TriggerRow> {
        self.rows.get(&group)
    }

    /// Rows in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupTag, &TriggerRow)> {
        self.rows.iter().map(|(tag, row)| (*tag, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_group_is_rejected() {
        let mut reg = TriggerRegistry::standard();
        let err = reg.register(
            GroupTag::Counter,
            TriggerRow {
                selector: Selector::marker("counter"),
                config: TriggerConfig::default(),
                reaction: ReactionKind::Counter,
            },
        );
        assert_eq!(
            err,
            Err(TriggerError::DuplicateGroup {
                group: GroupTag::Counter
            })
        );
    }

    #[test]
    fn selector_matches_marker_lists() {
        let sel = Selector::marker("typing-text");
        assert!(sel.matches(&["hero".into(), "typing-text".into()]));
        assert!(!sel.matches(&["typing".into()]));
        assert!(!sel.matches(&[]));
    }

    #[test]
    fn standard_registry_covers_all_groups() {
        let reg = TriggerRegistry::standard();
        assert_eq!(reg.len(), 6);
        assert!(reg.get(GroupTag::Typing).is_some());
        let order: Vec<GroupTag> = reg.iter().map(|(t, _)| t).collect();
        assert_eq!(order[0], GroupTag::Reveal);
    }
}
