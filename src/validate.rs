//! Template parameter validation for Stencil.
//! Runs after parameter resolution and before anything is written to disk.
//! Agent-service templates share a set of well-known parameters; the rules
//! here mirror what the generated project requires of them downstream.

use crate::error::{Error, Result};
use crate::params::Parameters;
use regex::Regex;

/// The project slug becomes both a filesystem path component and an
/// importable module name in the generated project.
pub const SLUG_PATTERN: &str = "^[a-z][a-z0-9_]*$";

/// Minimum supported runtime version for generated projects.
pub const MIN_PYTHON_VERSION: (u32, u32) = (3, 11);

fn invalid(name: &str, reason: String) -> Error {
    Error::InvalidParameter { name: name.to_string(), reason }
}

/// Validates the project slug: non-empty, lowercase start, lowercase
/// letters, digits and underscores only.
pub fn validate_slug(slug: &str) -> Result<()> {
    let pattern = Regex::new(SLUG_PATTERN).expect("slug pattern is valid");
    if pattern.is_match(slug) {
        return Ok(());
    }
    Err(invalid(
        "project_slug",
        format!(
            "'{}' must start with a lowercase letter and contain only lowercase letters, numbers, and underscores",
            slug
        ),
    ))
}

/// Validates the port: an integer in `[1, 65535]`.
pub fn validate_port(port: &str) -> Result<()> {
    match port.parse::<i64>() {
        Ok(n) if (1..=65535).contains(&n) => Ok(()),
        Ok(n) => Err(invalid("port", format!("{} is out of range, must be between 1 and 65535", n))),
        Err(_) => Err(invalid("port", format!("'{}' must be a number", port))),
    }
}

/// Validates the runtime version: exactly `MAJOR.MINOR`, at or above the
/// minimum supported version.
pub fn validate_python_version(version: &str) -> Result<()> {
    let parsed = match version.split('.').collect::<Vec<_>>()[..] {
        [major, minor] => match (major.parse::<u32>(), minor.parse::<u32>()) {
            (Ok(major), Ok(minor)) => Some((major, minor)),
            _ => None,
        },
        _ => None,
    };

    let (major, minor) = parsed.ok_or_else(|| {
        invalid(
            "python_version",
            format!("'{}' is not a valid version, expected format: X.Y (e.g. 3.11)", version),
        )
    })?;

    let (min_major, min_minor) = MIN_PYTHON_VERSION;
    if major < min_major || (major == min_major && minor < min_minor) {
        return Err(invalid(
            "python_version",
            format!(
                "{}.{} is not supported, minimum version is {}.{}",
                major, minor, min_major, min_minor
            ),
        ));
    }
    Ok(())
}

fn value_as_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validates the resolved parameter set.
///
/// `project_slug` must be present and valid. `port` and `python_version`
/// are validated when present; a template that does not declare them is
/// not forced to.
pub fn validate_parameters(params: &Parameters) -> Result<()> {
    let slug = params
        .get("project_slug")
        .map(value_as_string)
        .ok_or_else(|| invalid("project_slug", "parameter is required".to_string()))?;
    validate_slug(&slug)?;

    if let Some(port) = params.get("port") {
        validate_port(&value_as_string(port))?;
    }

    if let Some(version) = params.get("python_version") {
        validate_python_version(&value_as_string(version))?;
    }

    Ok(())
}
