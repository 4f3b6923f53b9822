//! Parameter table parsing.
//!
//! A table is plain text with one parameter per line and exactly
//! [`TABLE_FIELD_COUNT`] comma-separated fields, in this order:
//!
//! ```text
//! project,descriptiveName,baseName,labelText,enumCount,unit,min,max,default,step,workingVar
//! ```
//!
//! There is no header row and no escaping, so field values cannot contain commas.

use crate::constants::TABLE_FIELD_COUNT;
use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One tunable parameter of the generated processor.
///
/// Numeric fields are kept as the raw table text; templates turn them into
/// literals with the `makeDouble`/`makeFloat` filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub descriptive_name: String,
    pub base_name: String,
    pub label_text: String,
    /// 0 for continuous parameters, otherwise the number of discrete values
    pub enum_count: u32,
    pub unit_of_measure: String,
    pub min_value: String,
    pub max_value: String,
    pub default_value: String,
    pub step_value: String,
    pub working_var: String,
}

impl ParameterRecord {
    /// Builds a record from the fields of a single table row.
    ///
    /// `fields` must already hold exactly [`TABLE_FIELD_COUNT`] entries.
    fn from_fields(line: usize, fields: &[&str]) -> Result<Self> {
        let record = Self {
            descriptive_name: fields[1].to_string(),
            base_name: fields[2].to_string(),
            label_text: fields[3].to_string(),
            enum_count: parse_enum_count(line, fields[4])?,
            unit_of_measure: fields[5].to_string(),
            min_value: fields[6].to_string(),
            max_value: fields[7].to_string(),
            default_value: fields[8].to_string(),
            step_value: fields[9].to_string(),
            working_var: fields[10].to_string(),
        };
        if record.is_enumerated() {
            check_enum_default(line, &record)?;
        }
        Ok(record)
    }

    /// Whether the parameter takes one of a fixed set of named values.
    pub fn is_enumerated(&self) -> bool {
        self.enum_count > 0
    }
}

fn parse_enum_count(line: usize, text: &str) -> Result<u32> {
    if text.is_empty() {
        return Ok(0);
    }
    text.trim().parse().map_err(|_| Error::FormatError {
        value: text.to_string(),
        expected: format!("enum count on line {line}"),
    })
}

/// An enumerated default is an index into the enum values; empty means the first.
fn check_enum_default(line: usize, record: &ParameterRecord) -> Result<()> {
    let text = record.default_value.trim();
    if text.is_empty() {
        return Ok(());
    }
    match text.parse::<u32>() {
        Ok(index) if index < record.enum_count => Ok(()),
        _ => Err(Error::FormatError {
            value: record.default_value.clone(),
            expected: format!(
                "enum default on line {line} (an index below {})",
                record.enum_count
            ),
        }),
    }
}

/// Parses a parameter table and returns the records for `project_name`.
///
/// Rows for other projects are skipped silently, and a table with no rows for
/// the project yields an empty list. Every row is checked for the
/// field count regardless of its project, and the first malformed row aborts
/// the whole load.
///
/// # Arguments
/// * `source` - Full text of the parameter table
/// * `project_name` - Project whose rows should be kept (exact, case-sensitive)
///
/// # Returns
/// * `Result<Vec<ParameterRecord>>` - Matching records in table order
///
/// # Errors
/// * `Error::SchemaError` if a row does not have exactly 11 fields
/// * `Error::FormatError` if a matching row has a non-numeric enum count or
///   an enumerated default that is not an index into its values
pub fn load_parameters(source: &str, project_name: &str) -> Result<Vec<ParameterRecord>> {
    let params = source
        .lines()
        .enumerate()
        .map(|(index, row)| (index + 1, row))
        .filter(|(line, row)| {
            let blank = row.trim().is_empty();
            if blank {
                debug!("Skipping blank table line {line}");
            }
            !blank
        })
        .map(|(line, row)| {
            let fields: Vec<&str> = row.split(',').collect();
            if fields.len() != TABLE_FIELD_COUNT {
                return Err(Error::SchemaError {
                    line,
                    found: fields.len(),
                    expected: TABLE_FIELD_COUNT,
                });
            }
            if fields[0] != project_name {
                return Ok(None);
            }
            debug!("Loading parameter '{}' from line {line}", fields[2]);
            ParameterRecord::from_fields(line, &fields).map(Some)
        })
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>>>()?;

    Ok(params)
}

/// Reads the parameter table at `path` and delegates to [`load_parameters`].
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
pub fn load_parameters_from_path<P: AsRef<Path>>(
    path: P,
    project_name: &str,
) -> Result<Vec<ParameterRecord>> {
    let path = path.as_ref();
    debug!("Reading parameter table from {}", path.display());
    let source = fs::read_to_string(path).map_err(Error::IoError)?;
    load_parameters(&source, project_name)
}
