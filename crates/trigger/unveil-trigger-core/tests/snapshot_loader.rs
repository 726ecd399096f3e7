use unveil_trigger_core::{
    parse_page_snapshot_json, Config, CoreEvent, ElementPath, Engine, GroupTag, Inputs,
    ReactionState,
};

fn path(s: &str) -> ElementPath {
    ElementPath::parse(s).unwrap()
}

/// it should parse the landing fixture into the canonical model
#[test]
fn landing_fixture_parses() {
    let json = unveil_test_fixtures::load_page_json("landing").unwrap();
    let snapshot = parse_page_snapshot_json(&json).unwrap();
    assert_eq!(snapshot.elements.len(), 8);

    let tagline = snapshot
        .elements
        .iter()
        .find(|e| e.path == path("hero/tagline"))
        .unwrap();
    assert!(tagline.has_marker("typing-text"));
    assert_eq!(tagline.text, "Build once, delight everywhere.");

    let projects = snapshot
        .elements
        .iter()
        .find(|e| e.path == path("stats/projects"))
        .unwrap();
    assert_eq!(projects.data("target"), Some("250"));

    let grid = snapshot
        .elements
        .iter()
        .find(|e| e.path == path("services/grid"))
        .unwrap();
    assert_eq!(grid.children.len(), 4);
}

/// it should list fixture pages through the manifest
#[test]
fn manifest_names_are_stable() {
    assert_eq!(
        unveil_test_fixtures::page_names(),
        vec!["invalid-targets".to_string(), "landing".to_string()]
    );
}

/// it should reject duplicate paths
#[test]
fn duplicate_paths_are_rejected() {
    let json = r#"{"elements":[{"path":"a/b"},{"path":"a/b"}]}"#;
    let err = parse_page_snapshot_json(json).unwrap_err();
    assert!(err.contains("duplicate"), "{err}");
}

/// it should reject children that escape their parent
#[test]
fn stray_children_are_rejected() {
    let json = r#"{"elements":[{"path":"grid","children":[{"path":"elsewhere/item"}]}]}"#;
    let err = parse_page_snapshot_json(json).unwrap_err();
    assert!(err.contains("not under its parent"), "{err}");
}

/// it should reject nesting deeper than one level
#[test]
fn deep_nesting_is_rejected() {
    let json = r#"{"elements":[{"path":"grid","children":[
        {"path":"grid/row","children":[{"path":"grid/row/cell"}]}
    ]}]}"#;
    let err = parse_page_snapshot_json(json).unwrap_err();
    assert!(err.contains("one level"), "{err}");
}

/// it should reject malformed paths at parse time
#[test]
fn malformed_paths_are_rejected() {
    let json = r#"{"elements":[{"path":"hero//title"}]}"#;
    assert!(parse_page_snapshot_json(json).is_err());
    let json = r#"{"elements":[{"path":"hero title"}]}"#;
    assert!(parse_page_snapshot_json(json).is_err());
}

/// it should skip only the malformed targets when mounting the fixture
#[test]
fn invalid_targets_fixture_fails_closed_per_element() {
    let json = unveil_test_fixtures::load_page_json("invalid-targets").unwrap();
    let snapshot = parse_page_snapshot_json(&json).unwrap();

    let mut eng = Engine::with_standard_triggers(Config::default());
    eng.mount(&snapshot).unwrap();

    for broken in ["stats/broken-counter", "stats/missing-counter", "about/skills/broken-bar"] {
        assert_eq!(
            eng.element_state(&path(broken)),
            Some(ReactionState::Skipped),
            "{broken}"
        );
        assert!(!eng.is_observed(&path(broken)), "{broken}");
    }
    assert_eq!(
        eng.element_state(&path("stats/good-counter")),
        Some(ReactionState::Idle)
    );
    assert!(eng.is_observed(&path("stats/good-counter")));

    let out = eng.update(0.016, Inputs::default());
    let skipped: Vec<_> = out
        .events
        .iter()
        .filter(|e| matches!(e, CoreEvent::TargetSkipped { .. }))
        .collect();
    assert_eq!(skipped.len(), 3);
    assert!(skipped.iter().all(|e| matches!(
        e,
        CoreEvent::TargetSkipped {
            group: GroupTag::Counter | GroupTag::Progress,
            ..
        }
    )));
}
