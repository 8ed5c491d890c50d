//! Post-generation finalization for Stencil.
//! After materialization the output tree still contains every optional file
//! set. This module plans the variant cleanup from the decoded feature
//! flags, applies it, synthesizes the derived files that cannot be
//! expressed as static templates, and prints next-step guidance.
//!
//! Finalization is a single linear pass: nothing is retried and applied
//! actions are not rolled back on a later failure, so an aborted run can
//! leave a partially finalized tree behind.

use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::flags::FeatureFlags;
use crate::params::Parameters;
use crate::renderer::TemplateRenderer;

/// Ignore patterns written into generated Docker-enabled projects.
pub const DOCKERIGNORE: &str = include_str!("../assets/dockerignore");

/// Empty tool registry module written when example tools are excluded.
pub const EMPTY_TOOL_REGISTRY: &str = include_str!("../assets/tool_registry.py.j2");

/// Package marker for the generated tests directory.
pub const TESTS_INIT: &str = include_str!("../assets/tests_init.py.j2");

/// Starter API test written into every generated project.
pub const TESTS_API: &str = include_str!("../assets/test_api.py.j2");

/// A single finalization instruction, relative to the output root.
#[derive(Debug, PartialEq, Eq)]
pub enum FileAction {
    /// Delete the path; a file is removed singly, a directory recursively,
    /// a missing path is a no-op.
    Remove { path: PathBuf },
    /// Render the asset payload with the parameter context and write it.
    Write { path: PathBuf, template: &'static str },
}

/// Plans the variant cleanup for the given feature flags.
/// Pure function, performs no I/O.
pub fn plan_actions(flags: &FeatureFlags) -> Vec<FileAction> {
    let mut actions = Vec::new();

    if flags.use_docker {
        actions.push(FileAction::Write {
            path: PathBuf::from(".dockerignore"),
            template: DOCKERIGNORE,
        });
    } else {
        actions.push(FileAction::Remove { path: PathBuf::from("Dockerfile") });
        actions.push(FileAction::Remove { path: PathBuf::from(".dockerignore") });
    }

    if !flags.include_example_tools {
        actions.push(FileAction::Remove {
            path: PathBuf::from("app/tools/example_tools.py"),
        });
        actions.push(FileAction::Write {
            path: PathBuf::from("app/tools/__init__.py"),
            template: EMPTY_TOOL_REGISTRY,
        });
    }

    actions
}

/// Removes a path from the output tree.
/// Missing paths are a no-op; the templating pass may already have
/// excluded them conditionally.
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::Filesystem {
            operation: "remove directory",
            path: path.to_path_buf(),
            source: e,
        })
    } else if path.is_file() {
        fs::remove_file(path).map_err(|e| Error::Filesystem {
            operation: "remove",
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        debug!("Nothing to remove at '{}'", path.display());
        Ok(())
    }
}

fn write_rendered(
    engine: &dyn TemplateRenderer,
    path: &Path,
    template: &str,
    context: &serde_json::Value,
) -> Result<()> {
    let content = engine.render(template, context)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| Error::Filesystem {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Applies the planned actions against the output root.
/// Stops at the first failure; earlier actions stay applied.
pub fn apply_actions<P: AsRef<Path>>(
    output_root: P,
    actions: &[FileAction],
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<()> {
    let output_root = output_root.as_ref();
    for action in actions {
        match action {
            FileAction::Remove { path } => remove_path(output_root.join(path))?,
            FileAction::Write { path, template } => {
                write_rendered(engine, &output_root.join(path), template, context)?
            }
        }
    }
    Ok(())
}

/// Ensures the generated project has a tests directory with the package
/// marker and a starter API test. Idempotent.
pub fn ensure_tests_dir<P: AsRef<Path>>(
    output_root: P,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<()> {
    let tests_dir = output_root.as_ref().join("tests");
    fs::create_dir_all(&tests_dir).map_err(|e| Error::Filesystem {
        operation: "create directory",
        path: tests_dir.clone(),
        source: e,
    })?;

    write_rendered(engine, &tests_dir.join("__init__.py"), TESTS_INIT, context)?;
    write_rendered(engine, &tests_dir.join("test_api.py"), TESTS_API, context)
}

fn value_as_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Prints next-step guidance for the generated project.
/// Best-effort: a failed write to stdout never fails the generation.
pub fn print_next_steps(params: &Parameters, flags: &FeatureFlags) {
    let slug = params.get("project_slug").map(value_as_string).unwrap_or_default();
    let name = params.get("project_name").map(value_as_string).unwrap_or_else(|| slug.clone());

    let mut stdout = io::stdout();
    let _ = writeln!(stdout, "\nProject '{}' created successfully!", name);
    let _ = writeln!(stdout, "\nNext steps:");
    let _ = writeln!(stdout, "1. cd {}", slug);
    let _ = writeln!(stdout, "2. cp .env.example .env");
    let _ = writeln!(stdout, "3. Edit .env and add your LLM API key");
    let _ = writeln!(stdout, "4. uv sync --group dev");
    let _ = writeln!(stdout, "5. uv run python main.py");
    if flags.use_docker {
        let _ = writeln!(stdout, "\nOr with Docker: docker build -t {} .", slug);
    }
}

/// Runs the full finalization pass over a materialized output tree.
pub fn finalize<P: AsRef<Path>>(
    output_root: P,
    flags: &FeatureFlags,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
    params: &Parameters,
) -> Result<()> {
    let output_root = output_root.as_ref();
    let actions = plan_actions(flags);
    apply_actions(output_root, &actions, engine, context)?;
    ensure_tests_dir(output_root, engine, context)?;
    print_next_steps(params, flags);
    Ok(())
}
