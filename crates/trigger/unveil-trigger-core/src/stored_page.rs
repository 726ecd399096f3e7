use hashbrown::HashMap;
use serde::Deserialize;

use crate::page::{ElementDecl, PageSnapshot};
use unveil_api_core::ElementPath;

/// Public API: parse a host-serialized page scan (see fixtures/pages/*.json)
/// into unveil-trigger-core's canonical PageSnapshot (page.rs).
///
/// Notes:
/// - Paths are slash-separated strings and are parsed strictly.
/// - Dataset values stay raw strings; numeric interpretation happens at
///   mount time so malformed targets can fail closed per element.
/// - Children nest one level; deeper nesting is rejected here rather than
///   silently flattened.
pub fn parse_page_snapshot_json(s: &str) -> Result<PageSnapshot, String> {
    let raw: RawPage = serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))?;

    let mut elements: Vec<ElementDecl> = Vec::with_capacity(raw.elements.len());
    for re in raw.elements {
        elements.push(to_decl(re, true)?);
    }

    let snapshot = PageSnapshot { elements };
    // Basic validation (unique paths, children under their parent)
    snapshot.validate_basic()?;
    Ok(snapshot)
}

fn to_decl(raw: RawElement, allow_children: bool) -> Result<ElementDecl, String> {
    let path = ElementPath::parse(&raw.path)?;
    let mut children = Vec::with_capacity(raw.children.len());
    for child in raw.children {
        if !allow_children {
            return Err(format!(
                "element '{}' nests children more than one level deep",
                raw.path
            ));
        }
        children.push(to_decl(child, false)?);
    }
    let mut dataset = HashMap::with_capacity(raw.dataset.len());
    for (k, v) in raw.dataset {
        dataset.insert(k, v);
    }
    Ok(ElementDecl {
        path,
        markers: raw.markers,
        dataset,
        text: raw.text,
        children,
    })
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    path: String,
    #[serde(default)]
    markers: Vec<String>,
    #[serde(default)]
    dataset: std::collections::BTreeMap<String, String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    children: Vec<RawElement>,
}
