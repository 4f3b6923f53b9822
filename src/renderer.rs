//! Template renderer for plugen.
//! Wraps a MiniJinja environment configured with plugen's filters and
//! strict handling of undefined values.
use crate::context::Context;
use crate::error::{Error, Result};
use crate::filters;
use crate::loader::TemplateSource;
use log::debug;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `template_name` - Name of the template in the collection, e.g. `Editor.h`
    /// * `context` - Values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template_name: &str, context: &Context) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer over the templates of `source`.
    ///
    /// Block tags swallow their own line, matching how the plugin templates
    /// are laid out, and any reference to an undefined value is an error.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a template directory does not exist
    /// * `Error::RenderError` if a built-in template fails to parse
    pub fn new(source: &TemplateSource) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        filters::register(&mut env);
        source.install(&mut env)?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a named template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the collection has no such template
    /// * `Error::FormatError` if a numeric filter rejects its input
    /// * `Error::RenderError` for syntax errors and undefined values
    fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        debug!("Rendering template '{template_name}'");
        let template = self.env.get_template(template_name).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                Error::TemplateNotFound(template_name.to_string())
            } else {
                render_error(template_name, err)
            }
        })?;

        template
            .render(context)
            .map_err(|err| render_error(template_name, err))
    }
}

/// Maps a MiniJinja error, surfacing a filter's `FormatError` unchanged.
fn render_error(template_name: &str, err: minijinja::Error) -> Error {
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        if let Some(Error::FormatError { value, expected }) = cause.downcast_ref::<Error>() {
            return Error::FormatError {
                value: value.clone(),
                expected: format!("{expected} (in template '{template_name}')"),
            };
        }
        source = cause.source();
    }

    Error::RenderError {
        template: template_name.to_string(),
        source: err,
    }
}
