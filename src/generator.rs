//! Generation run orchestration.
//! Renders the fixed template sequence and writes one source file per template.

use crate::constants::{PARAMETER_TEMPLATES, PROCESSOR_TEMPLATES};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::table::load_parameters_from_path;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes generated sources for one project into an output directory.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    output_dir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(renderer: &'a dyn TemplateRenderer, output_dir: P) -> Self {
        Self {
            renderer,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Target path for `template_name`: `<output_dir>/<projectName><template_name>`.
    pub fn output_path(&self, template_name: &str, context: &Context) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", context.project_name, template_name))
    }

    /// Renders one template and writes it, replacing any existing file.
    ///
    /// Nothing is written if rendering fails.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written file
    pub fn generate_file(&self, template_name: &str, context: &Context) -> Result<PathBuf> {
        let content = self.renderer.render(template_name, context)?;
        let target = self.output_path(template_name, context);
        write_file(&target, &content)?;
        Ok(target)
    }

    /// Runs the full generation sequence.
    ///
    /// # Flow
    /// 1. Renders the processor files from the project identity alone
    /// 2. Loads the parameter table rows for the project; the parameter and
    ///    editor templates need at least one
    /// 3. Renders the parameter and editor files with the loaded params
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Written files, in generation order
    ///
    /// # Errors
    /// * `Error::ConfigError` if the table has no rows for the project
    pub fn run<P: AsRef<Path>>(&self, context: Context, table: P) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(PROCESSOR_TEMPLATES.len() + PARAMETER_TEMPLATES.len());

        for template_name in PROCESSOR_TEMPLATES {
            written.push(self.generate_file(template_name, &context)?);
        }

        let table = table.as_ref();
        let params = load_parameters_from_path(table, &context.project_name)?;
        if params.is_empty() {
            return Err(Error::ConfigError(format!(
                "no parameters for project '{}' in '{}'",
                context.project_name,
                table.display()
            )));
        }
        info!(
            "Loaded {} parameter(s) for project '{}'",
            params.len(),
            context.project_name
        );
        let context = context.with_params(params);

        for template_name in PARAMETER_TEMPLATES {
            written.push(self.generate_file(template_name, &context)?);
        }

        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(Error::IoError)
}
