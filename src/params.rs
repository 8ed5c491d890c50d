//! Template parameter resolution for Stencil.
//! Parameters are assembled from three sources with decreasing precedence:
//! inline `-p key=value` arguments, a JSON parameter file carrying a
//! `default_context` mapping, and finally the template's own defaults
//! (prompted for interactively unless `--no-input` is set).
//!
//! Resolution walks the template defaults in declaration order and builds
//! the context incrementally, so a later default may reference an earlier
//! answer, e.g. `"{{ stencil.project_name | snake_case }}"`.

use crate::config::Defaults;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Resolved template parameters, in declaration order.
pub type Parameters = IndexMap<String, serde_json::Value>;

#[derive(Debug, Deserialize)]
struct ParamsFile {
    default_context: Parameters,
}

/// Parses repeated `key=value` CLI arguments into a parameter mapping.
///
/// # Errors
/// * `Error::InvalidParameter` for an argument without a `=` separator or
///   with an empty key
pub fn parse_inline(definitions: &[String]) -> Result<Parameters> {
    let mut params = Parameters::new();
    for definition in definitions {
        let (key, value) = definition.split_once('=').ok_or_else(|| Error::InvalidParameter {
            name: definition.clone(),
            reason: "expected key=value".to_string(),
        })?;
        if key.is_empty() {
            return Err(Error::InvalidParameter {
                name: definition.clone(),
                reason: "parameter name must not be empty".to_string(),
            });
        }
        params.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    }
    Ok(params)
}

/// Loads a parameter file and returns its `default_context` mapping.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or is not a JSON
///   object with a `default_context` key
pub fn load_params_file<P: AsRef<Path>>(path: P) -> Result<Parameters> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::Filesystem {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: ParamsFile = serde_json::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid parameter file: {}", e)))?;
    Ok(file.default_context)
}

fn render_default(
    engine: &dyn TemplateRenderer,
    value: &serde_json::Value,
    context: &serde_json::Value,
) -> serde_json::Value {
    if let Some(s) = value.as_str() {
        let rendered = engine.render(s, context).unwrap_or_else(|_| s.to_string());
        serde_json::Value::String(rendered)
    } else {
        value.clone()
    }
}

fn value_as_prompt_default(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolves the final parameter set from template defaults and caller input.
///
/// Precedence per parameter: inline > parameter file > prompt > default.
/// Caller-supplied parameters not declared by the template are kept and
/// appended after the declared ones.
pub fn resolve(
    engine: &dyn TemplateRenderer,
    prompter: &dyn Prompter,
    defaults: Defaults,
    file_params: Parameters,
    inline_params: Parameters,
    no_input: bool,
) -> Result<Parameters> {
    let mut answers = Parameters::new();

    for (key, default) in defaults {
        let current_context = serde_json::json!({ "stencil": &answers });

        let value = if let Some(value) = inline_params.get(&key) {
            value.clone()
        } else if let Some(value) = file_params.get(&key) {
            value.clone()
        } else {
            let rendered = render_default(engine, &default, &current_context);
            if no_input {
                rendered
            } else {
                let input =
                    prompter.input(key.clone(), value_as_prompt_default(&rendered))?;
                serde_json::Value::String(input)
            }
        };
        answers.insert(key, value);
    }

    // Caller-supplied parameters the template did not declare.
    for (key, value) in file_params.into_iter().chain(inline_params) {
        answers.entry(key).or_insert(value);
    }

    Ok(answers)
}

/// Wraps resolved parameters in the rendering context the templates see,
/// namespaced under `stencil`.
pub fn build_context(params: &Parameters) -> serde_json::Value {
    serde_json::json!({ "stencil": params })
}
