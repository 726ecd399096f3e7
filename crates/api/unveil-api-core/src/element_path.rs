//! ElementPath parsing and formatting.
//!
//! Grammar (simple, host-agnostic):
//!   section/.../element
//! - '/' separates container segments
//! - The last segment names the element itself
//!   Examples:
//!   "hero/stats/stat-1" -> containers=["hero","stats"], element="stat-1"
//!   "about/skills" -> containers=["about"], element="skills"
//!   "navbar" -> containers=[], element="navbar"
//!
//! ElementPath is intentionally simple and string-based; hosts resolve it
//! against whatever node handles their document layer uses.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementPath {
    /// Container segments preceding the element (may be empty)
    pub containers: Vec<String>,
    /// Element name (last segment)
    pub element: String,
}

impl ElementPath {
    /// Construct an ElementPath from components.
    pub fn new(containers: Vec<String>, element: impl Into<String>) -> Self {
        Self {
            containers,
            element: element.into(),
        }
    }

    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("empty path".to_string());
        }
        let mut parts: Vec<&str> = s.split('/').collect();
        if parts.iter().any(|seg| seg.is_empty()) {
            return Err("invalid element path: empty segment".to_string());
        }
        if parts
            .iter()
            .any(|seg| seg.chars().any(char::is_whitespace))
        {
            return Err("invalid element path: segment contains whitespace".to_string());
        }
        let element = parts.pop().unwrap().to_string();
        let containers = parts.into_iter().map(|s| s.to_string()).collect();
        Ok(ElementPath {
            containers,
            element,
        })
    }

    /// Return a container segment by index, or `None` if out of bounds.
    pub fn container_segment(&self, index: usize) -> Option<&str> {
        self.containers.get(index).map(|s| s.as_str())
    }

    /// Iterate over all container segments.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|s| s.as_str())
    }

    /// Return the element name component of the path.
    pub fn element_name(&self) -> &str {
        &self.element
    }

    /// Build a child path underneath this one.
    pub fn child(&self, name: impl Into<String>) -> ElementPath {
        let mut containers = self.containers.clone();
        containers.push(self.element.clone());
        ElementPath {
            containers,
            element: name.into(),
        }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.containers.clone();
        parts.push(self.element.clone());
        f.write_str(&parts.join("/"))
    }
}

impl FromStr for ElementPath {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementPath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for ElementPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ElementPath {
    fn deserialize<D>(deserializer: D) -> Result<ElementPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ElementPath::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested() {
        let p = ElementPath::parse("hero/stats/stat-1").unwrap();
        assert_eq!(p.containers, vec!["hero".to_string(), "stats".to_string()]);
        assert_eq!(p.element, "stat-1");
        assert_eq!(p.to_string(), "hero/stats/stat-1");
    }

    #[test]
    fn parse_only_element() {
        let p = ElementPath::parse("navbar").unwrap();
        assert!(p.containers.is_empty());
        assert_eq!(p.element, "navbar");
        assert_eq!(p.to_string(), "navbar");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(ElementPath::parse("").is_err());
        assert!(ElementPath::parse("hero//stat").is_err());
        assert!(ElementPath::parse("hero/").is_err());
        assert!(ElementPath::parse("hero stats/stat").is_err());
    }

    #[test]
    fn child_extends_path() {
        let p = ElementPath::parse("about/skills").unwrap();
        let c = p.child("bar-2");
        assert_eq!(c.to_string(), "about/skills/bar-2");
    }

    #[test]
    fn serde_roundtrips_as_string() {
        let p = ElementPath::parse("hero/stats/stat-1").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"hero/stats/stat-1\"");
        let back: ElementPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
