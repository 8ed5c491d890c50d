//! Template materialization for Stencil.
//! Walks the template tree and writes the concrete project tree: relative
//! paths are rendered through the template engine (so a path may reference
//! parameters, or render to nothing and be excluded), `.j2` files get their
//! content rendered with the suffix stripped, and everything else is copied
//! verbatim.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

fn fs_error(operation: &'static str, path: &Path, source: io::Error) -> Error {
    Error::Filesystem { operation, path: path.to_path_buf(), source }
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExists` if the directory exists and `force` is
///   not set
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExists {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Returns true for files whose content should be rendered: a `.j2` suffix
/// on top of a non-empty file name.
pub fn is_template_file(filename: &str) -> bool {
    match filename.strip_suffix(".j2") {
        Some(stem) => !stem.is_empty(),
        None => false,
    }
}

/// A rendered relative path is usable when it is non-empty, stays relative
/// and contains no empty segments (a conditional expression that rendered
/// to nothing mid-path).
pub fn is_rendered_path_valid(rendered: &str) -> bool {
    !rendered.is_empty() && !rendered.starts_with('/') && !rendered.contains("//")
}

/// Maps a rendered relative path to its target under the output directory,
/// stripping the `.j2` suffix for template files.
///
/// Returns the target path and whether the file content should be rendered.
pub fn resolve_target_path<P: AsRef<Path>>(
    rendered_path: &str,
    output_dir: P,
) -> (PathBuf, bool) {
    let output_dir = output_dir.as_ref();
    let rendered = Path::new(rendered_path);

    if let Some(filename) = rendered.file_name().and_then(|n| n.to_str()) {
        if is_template_file(filename) {
            let stripped = filename.strip_suffix(".j2").unwrap_or(filename);
            return (output_dir.join(rendered.with_file_name(stripped)), true);
        }
    }

    (output_dir.join(rendered), false)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error("create directory", parent, e))?;
    }
    fs::write(path, content).map_err(|e| fs_error("write", path, e))
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error("create directory", parent, e))?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(|e| fs_error("copy", dest, e))
}

/// Materializes the template tree into the output directory.
///
/// Ignored paths and paths whose rendered form is empty or invalid are
/// skipped; the latter is how whole files and directories are conditionally
/// excluded by feature-flag expressions in path names.
pub fn materialize<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    template_root: P,
    output_root: P,
    context: &serde_json::Value,
    ignored: &GlobSet,
) -> Result<()> {
    let template_root = template_root.as_ref();
    let output_root = output_root.as_ref();

    for entry in WalkDir::new(template_root) {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = relative_path
            .to_str()
            .ok_or_else(|| Error::TemplateError("Invalid path".to_string()))?;

        if relative_path.is_empty() {
            continue;
        }

        if ignored.is_match(relative_path) {
            debug!("Skipping ignored path {}", relative_path);
            continue;
        }

        let rendered_path = engine.render(relative_path, context)?;
        if !is_rendered_path_valid(rendered_path.trim()) {
            debug!("Skipping '{}': path rendered to nothing", relative_path);
            continue;
        }

        let (target_path, render_content) =
            resolve_target_path(rendered_path.trim(), output_root);

        if path.is_dir() {
            fs::create_dir_all(&target_path)
                .map_err(|e| fs_error("create directory", &target_path, e))?;
        } else if render_content {
            let content =
                fs::read_to_string(path).map_err(|e| fs_error("read", path, e))?;
            let rendered_content = engine.render(&content, context)?;
            write_file(&target_path, &rendered_content)?;
            debug!("Rendered '{}'", target_path.display());
        } else {
            copy_file(path, &target_path)?;
            debug!("Copied '{}'", target_path.display());
        }
    }

    Ok(())
}
