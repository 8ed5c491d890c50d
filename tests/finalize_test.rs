use std::fs;
use std::path::{Path, PathBuf};

use stencil::finalize::{
    apply_actions, ensure_tests_dir, finalize, plan_actions, remove_path, FileAction,
    DOCKERIGNORE,
};
use stencil::flags::FeatureFlags;
use stencil::params::{build_context, Parameters};
use stencil::renderer::MiniJinjaRenderer;
use tempfile::TempDir;

fn params() -> Parameters {
    let mut params = Parameters::new();
    params.insert("project_name".to_string(), serde_json::json!("My Api"));
    params.insert("project_slug".to_string(), serde_json::json!("my_api"));
    params
}

/// Lays out an output tree as the materializer would leave it with every
/// optional file set present.
fn materialized_tree(root: &Path) {
    fs::create_dir_all(root.join("app/tools")).unwrap();
    fs::write(root.join("Dockerfile"), "FROM python:3.11\n").unwrap();
    fs::write(root.join(".dockerignore"), "stale\n").unwrap();
    fs::write(root.join("app/tools/__init__.py"), "from .example_tools import *\n")
        .unwrap();
    fs::write(root.join("app/tools/example_tools.py"), "def roll_dice(): ...\n")
        .unwrap();
    fs::write(root.join("main.py"), "print('hi')\n").unwrap();
}

#[test]
fn test_plan_actions_docker_disabled() {
    let flags = FeatureFlags { use_docker: false, include_example_tools: true };
    let actions = plan_actions(&flags);

    assert_eq!(
        actions,
        vec![
            FileAction::Remove { path: PathBuf::from("Dockerfile") },
            FileAction::Remove { path: PathBuf::from(".dockerignore") },
        ]
    );
}

#[test]
fn test_plan_actions_docker_enabled_tools_disabled() {
    let flags = FeatureFlags { use_docker: true, include_example_tools: false };
    let actions = plan_actions(&flags);

    assert_eq!(actions.len(), 3);
    assert!(matches!(
        &actions[0],
        FileAction::Write { path, .. } if path == &PathBuf::from(".dockerignore")
    ));
    assert!(matches!(
        &actions[1],
        FileAction::Remove { path } if path == &PathBuf::from("app/tools/example_tools.py")
    ));
    assert!(matches!(
        &actions[2],
        FileAction::Write { path, .. } if path == &PathBuf::from("app/tools/__init__.py")
    ));
}

#[test]
fn test_remove_path_is_noop_for_missing() {
    let temp_dir = TempDir::new().unwrap();
    assert!(remove_path(temp_dir.path().join("does_not_exist")).is_ok());
}

#[test]
fn test_remove_path_handles_files_and_directories() {
    let temp_dir = TempDir::new().unwrap();

    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    remove_path(&file).unwrap();
    assert!(!file.exists());

    let dir = temp_dir.path().join("nested");
    fs::create_dir_all(dir.join("deep")).unwrap();
    fs::write(dir.join("deep/file.txt"), "x").unwrap();
    remove_path(&dir).unwrap();
    assert!(!dir.exists());
}

#[test]
fn test_docker_disabled_removes_docker_files() {
    let temp_dir = TempDir::new().unwrap();
    materialized_tree(temp_dir.path());

    let engine = MiniJinjaRenderer::new();
    let params = params();
    let flags = FeatureFlags { use_docker: false, include_example_tools: true };

    finalize(temp_dir.path(), &flags, &engine, &build_context(&params), &params).unwrap();

    assert!(!temp_dir.path().join("Dockerfile").exists());
    assert!(!temp_dir.path().join(".dockerignore").exists());
    assert!(temp_dir.path().join("app/tools/example_tools.py").exists());
    assert!(temp_dir.path().join("tests/__init__.py").exists());
    assert!(temp_dir.path().join("tests/test_api.py").exists());
}

#[test]
fn test_docker_enabled_writes_generated_dockerignore() {
    let temp_dir = TempDir::new().unwrap();
    materialized_tree(temp_dir.path());

    let engine = MiniJinjaRenderer::new();
    let params = params();
    let flags = FeatureFlags { use_docker: true, include_example_tools: true };

    finalize(temp_dir.path(), &flags, &engine, &build_context(&params), &params).unwrap();

    let content = fs::read_to_string(temp_dir.path().join(".dockerignore")).unwrap();
    assert_eq!(content, DOCKERIGNORE);
    assert!(temp_dir.path().join("Dockerfile").exists());
}

#[test]
fn test_tools_disabled_leaves_empty_registry() {
    let temp_dir = TempDir::new().unwrap();
    materialized_tree(temp_dir.path());

    let engine = MiniJinjaRenderer::new();
    let params = params();
    let flags = FeatureFlags { use_docker: false, include_example_tools: false };

    finalize(temp_dir.path(), &flags, &engine, &build_context(&params), &params).unwrap();

    assert!(!temp_dir.path().join("app/tools/example_tools.py").exists());

    let registry =
        fs::read_to_string(temp_dir.path().join("app/tools/__init__.py")).unwrap();
    assert!(registry.contains("custom_tools = ToolRegistry([])"));
    assert!(registry.contains("My Api"));
}

#[test]
fn test_ensure_tests_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let params = params();
    let context = build_context(&params);

    ensure_tests_dir(temp_dir.path(), &engine, &context).unwrap();
    ensure_tests_dir(temp_dir.path(), &engine, &context).unwrap();

    let marker = fs::read_to_string(temp_dir.path().join("tests/__init__.py")).unwrap();
    assert_eq!(marker, "\"\"\"Tests for My Api.\"\"\"\n");
}

#[test]
fn test_finalization_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let params = params();
    let context = build_context(&params);
    let flags = FeatureFlags { use_docker: true, include_example_tools: false };

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for root in [first.path(), second.path()] {
        materialized_tree(root);
        finalize(root, &flags, &engine, &context, &params).unwrap();
    }

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_apply_actions_stops_on_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let params = params();
    let context = build_context(&params);

    // Writing below a path occupied by a file fails.
    fs::write(temp_dir.path().join("app"), "not a directory").unwrap();
    let actions = vec![FileAction::Write {
        path: PathBuf::from("app/tools/__init__.py"),
        template: "x",
    }];

    let err = apply_actions(temp_dir.path(), &actions, &engine, &context).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("app"), "diagnostic should name the path: {}", message);
}
