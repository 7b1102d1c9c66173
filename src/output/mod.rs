//
//  gerrit-rest-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Rendering for the `gerrit` command-line front end:
//!
//! - **Table format**: human-readable output for interactive terminal use
//! - **JSON format**: machine-readable output for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available output formats
//! - [`OutputWriter`]: entry point for writing formatted output
//! - [`TableOutput`]: types that know how to print themselves for humans
//!
//! ## Example
//!
//! ```rust,ignore
//! use gerrit_rest_client::output::OutputWriter;
//!
//! let writer = OutputWriter::new_for(json_flag);
//! writer.write(&server_version)?;
//! writer.write_success("Added host review.example.com");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Represents the available output formats for CLI output.
///
/// The default is [`OutputFormat::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

/// A unified output writer over the supported formats.
///
/// Data goes to stdout; errors and warnings go to stderr. Color output is
/// detected from the terminal and disabled when output is piped or
/// `NO_COLOR` is set.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a new output writer with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, table otherwise.
    ///
    /// Matches the global `--json` flag.
    pub fn new_for(json: bool) -> Self {
        if json {
            Self::json()
        } else {
            Self::table()
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Forces color on or off regardless of terminal detection.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a value to stdout using the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes an error message to stderr, prefixed with `error:`.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr, prefixed with `warning:`.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes a success message to stdout.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// A type that can render itself for a terminal.
///
/// For JSON output, types must also implement [`Serialize`].
///
/// ```rust,ignore
/// impl TableOutput for ChangeRow {
///     fn print_table(&self, color: bool) {
///         print_header(&format!("Change {}", self.number));
///         print_field("Subject", &self.subject, color);
///         print_field("Status", &format_status(&self.status, color), color);
///     }
/// }
/// ```
pub trait TableOutput {
    /// Renders the value; `color` says whether styling may be applied.
    fn print_table(&self, color: bool);
}

/// Prints a bold header with a dashed underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line, dimming the key when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_new_for_json_flag() {
        assert_eq!(OutputWriter::new_for(true).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::new_for(false).format(), OutputFormat::Table);
    }

    #[test]
    fn test_with_color_overrides_detection() {
        assert!(OutputWriter::table().with_color(true).color_enabled());
        assert!(!OutputWriter::table().with_color(false).color_enabled());
    }
}
