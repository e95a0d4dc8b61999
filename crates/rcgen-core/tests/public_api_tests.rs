//! Integration tests for the public domain API: config parsing and the
//! scaffold plan built from it.

use std::path::PathBuf;

use rcgen_core::{
    domain::{ArtifactKind, DomainError, ScaffoldPlan, ScaffoldStep},
    prelude::*,
};

fn plan(config: &str, level: u64, name: &str) -> ScaffoldPlan {
    let config: RcConfig = config.parse().unwrap();
    let request = ScaffoldRequest::from_config(
        Level::new(level),
        ComponentName::new(name).unwrap(),
        &config,
    );
    ScaffoldPlan::for_request(&request)
}

#[test]
fn well_formed_lines_parse() {
    for (input, root) in [
        ("root=src", "src"),
        ("root=src/components", "src/components"),
        ("  root=app/ui\n", "app/ui"),
        ("root=src/components/", "src/components/"),
    ] {
        let config: RcConfig = input.parse().unwrap();
        assert_eq!(config.root(), root, "input {input:?}");
    }
}

#[test]
fn malformed_lines_are_invalid_format() {
    for input in [
        "",
        "   ",
        "base=src",
        "root='src'",
        "root=\"src\"",
        "root src",
        "root=a=b",
        "root=",
        "root=///",
    ] {
        let err = input.parse::<RcConfig>().unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidFormat { .. }),
            "input {input:?} gave {err:?}"
        );
    }
}

#[test]
fn badge_plan_lists_every_entry_in_order() {
    let plan = plan("root=src/components", 2, "Badge");
    let root = PathBuf::from("src/components");

    let paths: Vec<PathBuf> = plan.steps().iter().map(|s| s.path().to_path_buf()).collect();
    assert_eq!(
        paths,
        vec![
            root.join("utils"),
            root.join("utils/cn.ts"),
            root.join("index.ts"),
            root.join("L2"),
            root.join("L2/Badge"),
            root.join("L2/Badge/Badge.tsx"),
            root.join("L2/Badge/Badge.stories.tsx"),
            root.join("L2/Badge/Badge.test.tsx"),
            root.join("L2/Badge/index.ts"),
            root.join("L2/index.ts"),
        ]
    );
}

#[test]
fn only_the_component_folder_is_exclusive() {
    let plan = plan("root=src", 0, "Card");
    let exclusive: Vec<_> = plan
        .steps()
        .iter()
        .filter(|s| matches!(s, ScaffoldStep::CreateComponentDirectory(_)))
        .collect();

    assert_eq!(exclusive.len(), 1);
    assert_eq!(exclusive[0].path(), PathBuf::from("src/L0/Card"));
}

#[test]
fn plan_carries_render_context() {
    let plan = plan("root=src", 0, "Badge");
    assert_eq!(plan.context().component_name(), "Badge");
    assert_eq!(plan.context().lower_name(), "badge");
    assert!(
        plan.steps()
            .iter()
            .any(|s| s.artifact() == Some(ArtifactKind::SharedUtil))
    );
}
