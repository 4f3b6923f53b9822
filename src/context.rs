//! The render context shared by every template of a generation run.

use crate::table::ParameterRecord;
use chrono::Datelike;
use serde::Serialize;

/// Values available to templates during rendering.
///
/// Built once per run and never mutated; [`Context::with_params`] consumes the
/// identity-only context and returns the full one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub author: String,
    pub year: String,
    pub project_name: String,
    pub params: Vec<ParameterRecord>,
}

impl Context {
    /// Creates a context carrying only the project identity.
    pub fn new(
        author: impl Into<String>,
        year: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            year: year.into(),
            project_name: project_name.into(),
            params: Vec::new(),
        }
    }

    /// Returns the context with `params` attached.
    pub fn with_params(self, params: Vec<ParameterRecord>) -> Self {
        Self { params, ..self }
    }
}

/// The current local year, as written into generated file headers.
pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}
