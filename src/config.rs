//! Configuration handling for plugen.
//! Settings come from three layers: command-line flags, an optional
//! `plugen.json`/`plugen.yml`/`plugen.yaml` file, and built-in defaults.

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_AUTHOR, DEFAULT_TABLE_FILE};
use crate::context::current_year;
use crate::error::{Error, Result};
use crate::loader::TemplateSource;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of a plugen configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub project: Option<String>,
    pub author: Option<String>,
    pub table: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Fully resolved settings for one generation run.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub project_name: String,
    pub author: String,
    pub year: String,
    pub table: PathBuf,
    pub templates: TemplateSource,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Merges command-line arguments over `file`, falling back to defaults.
    ///
    /// # Errors
    /// * `Error::ConfigError` if no project name is given anywhere
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self> {
        let project_name = args.project.clone().or(file.project).ok_or_else(|| {
            Error::ConfigError(
                "no project name given (use --project or set 'project' in the config file)"
                    .to_string(),
            )
        })?;

        Ok(Self {
            project_name,
            author: args
                .author
                .clone()
                .or(file.author)
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            year: args.year.clone().unwrap_or_else(current_year),
            table: args
                .table
                .clone()
                .or(file.table)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_FILE)),
            templates: TemplateSource::from_option(args.templates.clone().or(file.templates)),
            output_dir: args
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

/// Returns the first configuration file from `config_files` present in `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<FileConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Reads and parses the configuration file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Resolves the settings for this run.
///
/// An explicit `--config` file must exist; otherwise the current directory is
/// searched for one of [`CONFIG_FILES`] and defaults apply if none is found.
pub fn get_settings(args: &Args) -> Result<Settings> {
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => match find_config(std::env::current_dir()?, &CONFIG_FILES) {
            Some(path) => load_config(path)?,
            None => {
                debug!("No configuration file found, using defaults");
                FileConfig::default()
            }
        },
    };

    Settings::resolve(args, file_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("plugen").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_json_config() {
        let config = parse_config(r#"{"project": "Leslie", "author": "Jane"}"#).unwrap();
        assert_eq!(config.project.as_deref(), Some("Leslie"));
        assert_eq!(config.author.as_deref(), Some("Jane"));
        assert_eq!(config.table, None);
    }

    #[test]
    fn test_parse_yaml_config() {
        let config = parse_config("project: Chorus\ntable: tables/params.csv\n").unwrap();
        assert_eq!(config.project.as_deref(), Some("Chorus"));
        assert_eq!(config.table, Some(PathBuf::from("tables/params.csv")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            parse_config("projekt: Chorus\n"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            project: Some("FromFile".to_string()),
            author: Some("File Author".to_string()),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(&args(&["-p", "FromCli", "--year", "2020"]), file).unwrap();
        assert_eq!(settings.project_name, "FromCli");
        assert_eq!(settings.author, "File Author");
        assert_eq!(settings.year, "2020");
        assert_eq!(settings.table, PathBuf::from(DEFAULT_TABLE_FILE));
        assert_eq!(settings.templates, TemplateSource::Builtin);
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let result = Settings::resolve(&args(&[]), FileConfig::default());
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
