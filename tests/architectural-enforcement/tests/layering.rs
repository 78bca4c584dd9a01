//! Layering rules for the workspace

use architectural_enforcement::{find_violations, rust_sources, workspace_root};

#[test]
fn test_plan_core_is_headless() {
    let core = workspace_root().join("plan/core/src");
    assert!(!rust_sources(&core).is_empty(), "plan core sources not found");

    for needle in ["ratatui", "crossterm"] {
        let violations = find_violations(&core, needle);
        assert!(
            violations.is_empty(),
            "plan-core must not depend on {needle}: {violations:?}"
        );
    }
}

#[test]
fn test_no_blocking_sleep_in_production_code() {
    let root = workspace_root();
    for dir in ["plan/core/src", "tui/src"] {
        let violations = find_violations(&root.join(dir), "thread::sleep");
        assert!(violations.is_empty(), "blocking sleep found: {violations:?}");
    }
}

#[test]
fn test_no_unwrap_in_production_code() {
    let root = workspace_root();
    for dir in ["plan/core/src", "tui/src"] {
        let violations = find_violations(&root.join(dir), ".unwrap()");
        assert!(violations.is_empty(), "unwrap() found: {violations:?}");
    }
}
