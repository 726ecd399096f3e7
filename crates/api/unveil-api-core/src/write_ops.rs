//! Write operations produced by engines (trigger, page) to describe DOM
//! mutations the host should apply this tick.
//!
//! DomWrite serializes to JSON as:
//!   { "path": "hero/stats/stat-1", "mutation": { "type": "set-text", "data": "42" } }
//!
//! WriteBatch is a simple Vec<DomWrite> with helpers.

use crate::{ElementPath, Mutation};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomWrite {
    pub path: ElementPath,
    pub mutation: Mutation,
}

impl DomWrite {
    pub fn new(path: ElementPath, mutation: Mutation) -> Self {
        Self { path, mutation }
    }
}

// Display mirrors the JSON wire form, handy in logs and test failures.
impl fmt::Display for DomWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = serde_json::to_string(&self.mutation).map_err(|_| fmt::Error)?;
        write!(f, "{{\"path\":\"{}\",\"mutation\":{}}}", self.path, m)
    }
}

/// Ordered batch of writes for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WriteBatch(pub Vec<DomWrite>);

impl WriteBatch {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, write: DomWrite) {
        self.0.push(write);
    }

    #[inline]
    pub fn set(&mut self, path: ElementPath, mutation: Mutation) {
        self.0.push(DomWrite::new(path, mutation));
    }

    pub fn extend(&mut self, other: WriteBatch) {
        self.0.extend(other.0);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomWrite> {
        self.0.iter()
    }
}

impl IntoIterator for WriteBatch {
    type Item = DomWrite;
    type IntoIter = std::vec::IntoIter<DomWrite>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WriteBatch {
    type Item = &'a DomWrite;
    type IntoIter = std::slice::Iter<'a, DomWrite>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<DomWrite> for WriteBatch {
    fn from_iter<T: IntoIterator<Item = DomWrite>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> ElementPath {
        ElementPath::parse(s).unwrap()
    }

    #[test]
    fn write_serializes_with_string_path() {
        let w = DomWrite::new(path("hero/title"), Mutation::AddClass("visible".into()));
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(
            json,
            r#"{"path":"hero/title","mutation":{"type":"add-class","data":"visible"}}"#
        );
        let back: DomWrite = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn batch_preserves_order() {
        let mut batch = WriteBatch::new();
        batch.set(path("a"), Mutation::SetText("1".into()));
        batch.set(path("b"), Mutation::SetText("2".into()));
        let texts: Vec<_> = batch
            .iter()
            .map(|w| w.path.element_name().to_string())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
