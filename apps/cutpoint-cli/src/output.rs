//! Output formatting for command responses.
//!
//! Supports both human-readable and JSON output so results can be read on
//! the line or consumed by scripts.

use std::io::{self, Write};

use crate::error::ApiError;

/// Trait for types that can be output in multiple formats.
pub trait Outputable {
    /// Convert to JSON value for structured output.
    fn to_json(&self) -> serde_json::Value;

    /// Convert to human-readable string.
    fn to_human(&self) -> String;
}

/// Writes a value in the requested format.
pub fn print_output<T: Outputable>(value: &T, json: bool, out: &mut impl Write) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&value.to_json())
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize: {}\"}}", e));
        writeln!(out, "{}", text)
    } else {
        writeln!(out, "{}", value.to_human())
    }
}

/// Writes a value as a single line of compact JSON.
///
/// Used where several documents share one stream, so each line parses on its own.
pub fn print_json_line<T: Outputable>(value: &T, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", value.to_json())
}

/// Writes a command failure.
///
/// JSON mode keeps errors on stdout so a script gets one parseable document;
/// text mode sends the message to stderr.
pub fn print_error(
    err: &ApiError,
    json: bool,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(err)
            .unwrap_or_else(|_| format!("{{\"message\": \"{}\"}}", err.message));
        writeln!(stdout, "{}", text)
    } else {
        writeln!(stderr, "Error: {}", err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl Outputable for Sample {
        fn to_json(&self) -> serde_json::Value {
            serde_json::json!({ "value": 1 })
        }

        fn to_human(&self) -> String {
            "value: 1".to_string()
        }
    }

    #[test]
    fn test_print_output_formats() {
        let mut out = Vec::new();
        print_output(&Sample, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "value: 1\n");

        let mut out = Vec::new();
        print_output(&Sample, true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"value\": 1\n}\n");
    }

    #[test]
    fn test_print_json_line() {
        let mut out = Vec::new();
        print_json_line(&Sample, &mut out).unwrap();
        print_json_line(&Sample, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"value\":1}\n{\"value\":1}\n");
    }

    #[test]
    fn test_print_error_routes_by_mode() {
        let err = ApiError::validation("bad input");

        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        print_error(&err, false, &mut stdout, &mut stderr).unwrap();
        assert!(stdout.is_empty());
        assert_eq!(String::from_utf8(stderr).unwrap(), "Error: bad input\n");

        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        print_error(&err, true, &mut stdout, &mut stderr).unwrap();
        assert!(stderr.is_empty());
        assert!(String::from_utf8(stdout).unwrap().contains("\"VALIDATION_ERROR\""));
    }
}
