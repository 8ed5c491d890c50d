//! Stencil is a project scaffolding tool specialized for agent API services.
//! It generates a concrete project tree from a template, validates the
//! well-known template parameters, and finalizes the output according to the
//! selected feature flags.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Template defaults handling for Stencil templates
/// Supports JSON and YAML formats (stencil.json, stencil.yml, stencil.yaml)
pub mod config;

/// Error types and handling for the Stencil application
pub mod error;

/// Feature flag decoding
/// Converts the stringly-typed "y"/"n" parameter encoding into booleans
pub mod flags;

/// Post-generation finalization
/// Variant selection, derived file synthesis and output cleanup
pub mod finalize;

/// Pre and post generation hook processing
/// Handles execution of scripts in:
/// - hooks/pre_gen
/// - hooks/post_gen
pub mod hooks;

/// File and directory ignore patterns
/// Processes .stencilignore files to exclude specific paths
pub mod ignore;

/// Template source loading (local filesystem and git repositories)
pub mod loader;

/// Template parameter resolution from CLI, parameter files and prompts
pub mod params;

/// Template materialization
/// Walks the template tree and renders it into the output directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engine built on MiniJinja
pub mod renderer;

/// Template parameter validation
pub mod validate;
