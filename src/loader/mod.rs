//! Template collection selection.
//! Templates come either from a directory on disk or from the set embedded
//! in the binary.

use crate::error::{Error, Result};
use log::debug;
use minijinja::Environment;
use std::path::PathBuf;

pub mod builtin;

/// Represents where the six plugin templates are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into plugen
    Builtin,
    /// Directory holding `Processor.h`, `Parameters.cpp`, ...
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Builtin => write!(f, "built-in templates"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Picks the file-system source when a directory is given, the built-in set otherwise.
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(path) => Self::FileSystem(path),
            None => Self::Builtin,
        }
    }

    /// Checks that a file-system source points to an existing directory.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the directory does not exist
    pub fn validate(&self) -> Result<()> {
        match self {
            TemplateSource::Builtin => Ok(()),
            TemplateSource::FileSystem(path) if path.is_dir() => Ok(()),
            TemplateSource::FileSystem(path) => Err(Error::ConfigError(format!(
                "template directory '{}' does not exist",
                path.display()
            ))),
        }
    }

    /// Makes this source's templates available to `env`.
    ///
    /// Built-in templates are parsed up front; directory templates are loaded
    /// lazily by name.
    pub(crate) fn install(&self, env: &mut Environment<'static>) -> Result<()> {
        debug!("Using {self}");
        match self {
            TemplateSource::Builtin => {
                for (name, source) in builtin::TEMPLATES {
                    env.add_template(name, source)
                        .map_err(|err| Error::RenderError {
                            template: name.to_string(),
                            source: err,
                        })?;
                }
            }
            TemplateSource::FileSystem(path) => {
                self.validate()?;
                env.set_loader(minijinja::path_loader(path));
            }
        }
        Ok(())
    }
}
