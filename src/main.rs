//! plugen's application entry point.
//! Parses arguments, resolves settings and runs the generator.

use plugen::{
    cli::{get_args, Args},
    config::get_settings,
    context::Context,
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves settings from flags, config file and defaults
/// 2. Sets up the renderer over the selected templates
/// 3. Generates the processor, parameter and editor files
fn run(args: Args) -> Result<()> {
    let settings = get_settings(&args)?;

    let renderer = MiniJinjaRenderer::new(&settings.templates)?;
    let generator = Generator::new(&renderer, &settings.output_dir);
    let context = Context::new(settings.author, settings.year, settings.project_name);

    for path in generator.run(context, &settings.table)? {
        println!("Generated: '{}'", path.display());
    }

    println!(
        "Plugin sources generated successfully in {}.",
        settings.output_dir.display()
    );
    Ok(())
}
