//! plugen generates the source files of an audio plugin project.
//! It reads parameter descriptions from a comma-separated table and renders
//! processor, parameter and editor classes through MiniJinja templates.

/// Command-line interface module for the plugen application
pub mod cli;

/// Settings resolution from flags, config files and defaults
/// Supports JSON and YAML formats (plugen.json, plugen.yml, plugen.yaml)
pub mod config;

/// Common constants: template names, table layout, defaults
pub mod constants;

/// The render context shared by all templates of a run
pub mod context;

/// Error types and handling for the plugen application
pub mod error;

/// Filters available to templates
pub mod filters;

/// Runs the template sequence and writes the output files
pub mod generator;

/// C/C++ numeric literal formatting
pub mod literal;

/// Template collection selection: a directory or the built-in set
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Template rendering
pub mod renderer;

/// Parameter table parsing
pub mod table;
