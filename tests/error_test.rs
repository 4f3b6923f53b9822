use std::io;

use plugen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::SchemaError { line: 3, found: 10, expected: 11 };
    assert_eq!(err.to_string(), "Schema error: line 3 has 10 fields, expected 11.");

    let err = Error::TemplateNotFound("Mixer.h".to_string());
    assert_eq!(err.to_string(), "Template not found: 'Mixer.h'.");

    let err = Error::FormatError {
        value: "abc".to_string(),
        expected: "number".to_string(),
    };
    assert_eq!(err.to_string(), "Format error: 'abc' is not a valid number.");
}
