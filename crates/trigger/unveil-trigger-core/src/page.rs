//! Canonical page snapshot model (PageSnapshot).
//!
//! A snapshot is the host's one-shot scan of its document at page-ready
//! time: every element carrying a recognized marker class, with its dataset
//! and initial text. The engine never re-scans; elements added to the
//! document later are never observed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use unveil_api_core::ElementPath;

/// One scanned element. Children are included only one level deep and only
/// matter for stagger parents; everything else ignores them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ElementDecl {
    pub path: ElementPath,
    /// Marker classes present on the node (e.g. "counter", "typing-text").
    #[serde(default)]
    pub markers: Vec<String>,
    /// data-* attributes, raw strings as the host read them.
    #[serde(default)]
    pub dataset: HashMap<String, String>,
    /// Initial text content.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<ElementDecl>,
}

impl ElementDecl {
    pub fn new(path: ElementPath) -> Self {
        Self {
            path,
            markers: Vec::new(),
            dataset: HashMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(|s| s.as_str())
    }

    // Builder-style helpers for hosts assembling scans by hand.

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: ElementDecl) -> Self {
        self.children.push(child);
        self
    }
}

/// The host's full scan, in document order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    pub elements: Vec<ElementDecl>,
}

impl PageSnapshot {
    pub fn new(elements: Vec<ElementDecl>) -> Self {
        Self { elements }
    }

    /// Validate basic invariants (unique paths, children scoped under their
    /// parent's path).
    pub fn validate_basic(&self) -> Result<(), String> {
        let mut seen: hashbrown::HashSet<String> = hashbrown::HashSet::new();
        for decl in &self.elements {
            let key = decl.path.to_string();
            if !seen.insert(key.clone()) {
                return Err(format!("duplicate element path '{key}'"));
            }
            for child in &decl.children {
                let child_key = child.path.to_string();
                if !seen.insert(child_key.clone()) {
                    return Err(format!("duplicate element path '{child_key}'"));
                }
                if !child_key.starts_with(&format!("{key}/")) {
                    return Err(format!(
                        "child path '{child_key}' is not under its parent '{key}'"
                    ));
                }
            }
        }
        Ok(())
    }
}
