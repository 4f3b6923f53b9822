//! Common constants used throughout plugen.

/// Author written into generated file headers when none is configured
pub const DEFAULT_AUTHOR: &str = "Shane Dunne";

/// Parameter table read when no `--table` is given
pub const DEFAULT_TABLE_FILE: &str = "Parameters.csv";

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["plugen.json", "plugen.yml", "plugen.yaml"];

/// Number of comma-separated fields in every parameter table row
pub const TABLE_FIELD_COUNT: usize = 11;

/// Templates that only need the project identity
pub const PROCESSOR_TEMPLATES: [&str; 2] = ["Processor.h", "Processor.cpp"];

/// Templates rendered after the parameter table has been loaded
pub const PARAMETER_TEMPLATES: [&str; 4] =
    ["Parameters.h", "Parameters.cpp", "Editor.h", "Editor.cpp"];
