//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, parameter resolution and
//! validation, and coordinates materialization and finalization.

use stencil::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    finalize::finalize,
    flags::FeatureFlags,
    hooks::{confirm_hooks_execution, get_hooks, run_hook},
    ignore::{parse_ignore_file, IGNORE_FILE},
    loader::load_template,
    params::{build_context, load_params_file, parse_inline, resolve, Parameters},
    processor::{ensure_output_dir, materialize},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    validate::validate_parameters,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the output directory and loads the template
/// 2. Resolves the parameter set from template defaults and caller input
/// 3. Validates parameters and decodes feature flags before any write
/// 4. Executes the pre-generation hook
/// 5. Materializes the template tree
/// 6. Finalizes the output (variant cleanup, derived files, guidance)
/// 7. Executes the post-generation hook
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();

    let output_root = ensure_output_dir(&args.output_dir, args.force)?;
    let template_root = load_template(&prompter, args.template, args.force)?;

    let defaults = get_config(&template_root)?;
    let inline_params = parse_inline(&args.params)?;
    let file_params = match &args.params_file {
        Some(path) => load_params_file(path)?,
        None => Parameters::new(),
    };
    let params =
        resolve(&engine, &prompter, defaults, file_params, inline_params, args.no_input)?;

    // Everything that can reject the run happens before any file is written.
    validate_parameters(&params)?;
    let flags = FeatureFlags::from_parameters(&params)?;

    let context = build_context(&params);

    let execute_hooks =
        confirm_hooks_execution(&prompter, &template_root, args.skip_hooks_check)?;
    let (pre_hook, post_hook) = get_hooks(&template_root);

    if execute_hooks {
        run_hook(&template_root, &output_root, &pre_hook, &context)?;
    }

    let ignored = parse_ignore_file(template_root.join(IGNORE_FILE))?;
    materialize(&engine, &template_root, &output_root, &context, &ignored)?;

    finalize(&output_root, &flags, &engine, &context, &params)?;

    if execute_hooks {
        run_hook(&template_root, &output_root, &post_hook, &context)?;
    }

    println!("Template generation completed successfully in {}.", output_root.display());
    Ok(())
}
