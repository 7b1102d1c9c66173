//
//  gerrit-rest-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tabular terminal output built on `comfy_table`, plus small helpers for
//! styling change states and shortening long values.
//!
//! ```rust,ignore
//! use gerrit_rest_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Number", "Project", "Status", "Subject"])
//!     .row(["1024", "gerrit", "NEW", "Fix NPE in index"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for formatted tables with a fluent API.
///
/// Color support is detected on creation; override it with
/// [`color`](TableBuilder::color).
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    /// Enables or disables header coloring.
    ///
    /// Call before [`headers`](TableBuilder::headers).
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row; headers are cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a change status or verification outcome.
///
/// | Status | Color |
/// |--------|-------|
/// | `NEW` | green |
/// | `MERGED` | blue |
/// | `ABANDONED` | red |
/// | `DRAFT` | yellow |
///
/// Matching is case-insensitive; anything else is returned unstyled.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_ascii_uppercase().as_str() {
        "NEW" => style(status).green().to_string(),
        "MERGED" => style(status).blue().to_string(),
        "ABANDONED" => style(status).red().to_string(),
        "DRAFT" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Colors a verification vote: positive green, negative red, zero dimmed.
pub fn format_vote(value: i32, color: bool) -> String {
    let text = if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    };
    if !color {
        return text;
    }

    use console::style;
    match value {
        v if v > 0 => style(text).green().to_string(),
        v if v < 0 => style(text).red().to_string(),
        _ => style(text).dim().to_string(),
    }
}

/// Formats a boolean as `Yes`/`No`.
pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Truncates to at most `max_len` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text never splits.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
