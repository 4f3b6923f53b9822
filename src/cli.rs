//! Command-line interface implementation for plugen.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for plugen.
#[derive(Parser, Debug)]
#[command(author, version, about = "plugen: generate audio plugin sources from a parameter table", long_about = None)]
pub struct Args {
    /// Project name; selects table rows and prefixes output file names
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Parameter table file [default: Parameters.csv]
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Directory holding the templates (built-in templates are used otherwise)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Directory where the generated files are written [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Author written into file headers
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Copyright year written into file headers [default: current year]
    #[arg(long, value_name = "YEAR", value_parser = parse_year)]
    pub year: Option<String>,

    /// Configuration file (plugen.json, plugen.yml or plugen.yaml is picked up otherwise)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_year(value: &str) -> Result<String, String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a year"))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
