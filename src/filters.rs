//! Filters exposed to templates by name.

use crate::literal::{format_double, format_float};
use minijinja::{Environment, Error, ErrorKind};

pub const CAPITALIZE_FILTER: &str = "capitalizeFirstLetterOnly";
pub const DOUBLE_FILTER: &str = "makeDouble";
pub const FLOAT_FILTER: &str = "makeFloat";

/// Registers every plugen filter on `env`.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter(CAPITALIZE_FILTER, capitalize_first_letter_only);
    env.add_filter(DOUBLE_FILTER, make_double);
    env.add_filter(FLOAT_FILTER, make_float);
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// Unlike the builtin `capitalize`, `gainDb` becomes `GainDb`, not `Gaindb`.
pub fn capitalize_first_letter_only(value: String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn make_double(value: String) -> Result<String, Error> {
    format_double(&value).map_err(into_filter_error)
}

pub fn make_float(value: String) -> Result<String, Error> {
    format_float(&value).map_err(into_filter_error)
}

// The original error rides along as the source so the renderer can surface it.
fn into_filter_error(err: crate::error::Error) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}
