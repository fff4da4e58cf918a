//! Rendering match results for the terminal.

use std::fmt::Write;

use argspec_matcher::ParseResult;

use crate::RuntimeError;
use crate::config::OutputFormat;

/// Renders a match result in the requested format.
///
/// # Errors
/// Returns [`RuntimeError::Json`] if JSON serialization fails.
pub fn render(result: &ParseResult, format: OutputFormat) -> Result<String, RuntimeError> {
    match format {
        OutputFormat::Human => Ok(human(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// One line per supplied option in name order, then one per positional.
///
/// Flags supplied without a value print their name alone.
#[must_use]
pub fn human(result: &ParseResult) -> String {
    let mut out = String::new();
    for (name, value) in &result.options {
        if value.is_presence() {
            let _ = writeln!(out, "{name}");
        } else {
            let _ = writeln!(out, "{name} = {value}");
        }
    }
    for (index, value) in result.rest.iter().enumerate() {
        let _ = writeln!(out, "rest[{index}] = {value}");
    }
    out
}
