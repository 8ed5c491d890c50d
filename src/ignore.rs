//! File and directory ignore pattern handling for Stencil templates.
//! This module processes .stencilignore files to exclude specific paths
//! from template processing, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Stencil's ignore file name
pub const IGNORE_FILE: &str = ".stencilignore";

/// Patterns that are always excluded from materialization: template
/// metadata that must never land in the generated project.
pub const DEFAULT_PATTERNS: [&str; 9] = [
    "stencil.json",
    "stencil.yml",
    "stencil.yaml",
    ".stencilignore",
    "hooks",
    "hooks/**",
    ".git",
    ".git/**",
    "**/.DS_Store",
];

/// Reads the template's ignore file and compiles it, together with the
/// default patterns, into a set of glob patterns.
///
/// # Notes
/// - If the ignore file doesn't exist, only the default patterns apply
/// - Each line in the file is treated as a separate glob pattern
/// - Invalid patterns result in an `Error::IgnoreError`
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnoreError(format!("default pattern failed to compile: {}", e))
        })?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e))
            })?);
        }
    } else {
        debug!("{} does not exist", IGNORE_FILE)
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e)))
}
