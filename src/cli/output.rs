//! Output formatting
//!
//! Plain-text and JSON rendering shared by the commands.

use anyhow::Result;
use serde::Serialize;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Only errors are printed
    pub quiet: bool,
    /// Results are printed as JSON
    pub json: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Print a line of human-readable output
    pub fn line(&self, text: impl AsRef<str>) {
        if !self.quiet && !self.json {
            println!("{}", text.as_ref());
        }
    }

    /// Print a success message
    pub fn success(&self, text: impl AsRef<str>) {
        self.line(format!("{} {}", status::SUCCESS, text.as_ref()));
    }

    /// Print an informational message
    pub fn info(&self, text: impl AsRef<str>) {
        self.line(format!("{} {}", status::INFO, text.as_ref()));
    }

    /// Print a value as pretty JSON when JSON output is enabled
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.json {
            print_json(value)?;
        }
        Ok(())
    }
}

/// Print a value as pretty JSON regardless of output mode
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_plain() {
        let output = OutputConfig::default();
        assert!(!output.quiet);
        assert!(!output.json);
    }

    #[test]
    fn test_json_is_noop_in_text_mode() {
        let output = OutputConfig::new(false, false);
        assert!(output.json(&serde_json::json!({"a": 1})).is_ok());
    }
}
