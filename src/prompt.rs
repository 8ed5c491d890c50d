//! User input and interaction handling for Stencil.
//! Prompting happens in two places: filling in template parameters the
//! caller did not supply, and the safety confirmation before hook execution.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Trait for interactive user input.
/// Abstracted so orchestration code can be exercised without a terminal.
pub trait Prompter {
    /// Asks a yes/no question. When `skip` is set the question is not shown
    /// and the answer is assumed to be yes.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Asks for a line of text with a prefilled default.
    fn input(&self, prompt: String, default: String) -> Result<String>;
}

/// Prompter implementation backed by the dialoguer crate.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }

    fn input(&self, prompt: String, default: String) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }
}
