//! Pre and post generation hook processing for Stencil templates.
//! Stencil performs validation and finalization itself, but a template may
//! additionally ship its own executable hooks; they receive the generation
//! context as JSON on stdin.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// The JSON document passed to hook scripts on stdin.
#[derive(Serialize)]
pub struct Output<'a> {
    pub template_dir: &'a str,
    pub output_dir: &'a str,
    pub context: &'a serde_json::Value,
}

/// Returns the paths of the template's pre and post generation hooks.
pub fn get_hooks<P: AsRef<Path>>(template_dir: P) -> (PathBuf, PathBuf) {
    let template_dir = template_dir.as_ref();
    let pre_hook = template_dir.join("hooks").join("pre_gen");
    let post_hook = template_dir.join("hooks").join("post_gen");

    (pre_hook, post_hook)
}

/// Asks the user to confirm hook execution unless the check is skipped or
/// the template ships no hooks at all.
pub fn confirm_hooks_execution<P: AsRef<Path>>(
    prompter: &dyn Prompter,
    template_dir: P,
    skip_hooks_check: bool,
) -> Result<bool> {
    let (pre_hook, post_hook) = get_hooks(template_dir);
    if !pre_hook.exists() && !post_hook.exists() {
        return Ok(false);
    }
    prompter.confirm(
        skip_hooks_check,
        "WARNING: This template contains hooks that will execute commands on your system. Do you want to run these hooks?".to_string(),
    )
}

/// Executes a single hook script, passing the generation context on stdin.
/// A hook that does not exist is a no-op.
///
/// # Errors
/// * `Error::HookError` if the hook exits with a nonzero status
pub fn run_hook<P: AsRef<Path>>(
    template_dir: P,
    output_dir: P,
    script_path: P,
    context: &serde_json::Value,
) -> Result<()> {
    let script_path = script_path.as_ref();
    if !script_path.exists() {
        return Ok(());
    }

    let template_dir = template_dir.as_ref().display().to_string();
    let output_dir = output_dir.as_ref().display().to_string();
    let output = Output {
        template_dir: &template_dir,
        output_dir: &output_dir,
        context,
    };
    let stdin_payload = serde_json::to_string(&output)
        .map_err(|e| Error::HookError(format!("cannot serialize hook context: {}", e)))?;

    let mut child = Command::new(script_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(Error::IoError)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(stdin_payload.as_bytes()).map_err(Error::IoError)?;
    }

    let status = child.wait().map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::HookError(format!("Hook failed with status: {}", status)));
    }

    Ok(())
}
