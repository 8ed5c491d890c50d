//! Feature flag decoding for Stencil.
//! Templates encode booleans as the literal strings "y"/"n". That encoding
//! is decoded exactly once here; everything past this boundary works with
//! real booleans.

use crate::error::{Error, Result};
use crate::params::Parameters;

/// The decoded feature switches driving variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Whether the generated project keeps its Docker assets.
    pub use_docker: bool,
    /// Whether the generated project keeps the example tool module.
    pub include_example_tools: bool,
}

fn decode_flag(name: &str, value: Option<&serde_json::Value>) -> Result<bool> {
    let value = value.ok_or_else(|| Error::InvalidParameter {
        name: name.to_string(),
        reason: "parameter is required".to_string(),
    })?;

    match value {
        serde_json::Value::Bool(b) => Ok(*b),
        serde_json::Value::String(s) if s == "y" => Ok(true),
        serde_json::Value::String(s) if s == "n" => Ok(false),
        other => Err(Error::InvalidParameter {
            name: name.to_string(),
            reason: format!("expected 'y' or 'n', got {}", other),
        }),
    }
}

impl FeatureFlags {
    /// Decodes the feature flags from the resolved parameters.
    ///
    /// # Errors
    /// * `Error::InvalidParameter` when a flag is missing or carries any
    ///   value other than a boolean or the literals "y"/"n"
    pub fn from_parameters(params: &Parameters) -> Result<Self> {
        Ok(Self {
            use_docker: decode_flag("use_docker", params.get("use_docker"))?,
            include_example_tools: decode_flag(
                "include_example_tools",
                params.get("include_example_tools"),
            )?,
        })
    }
}
