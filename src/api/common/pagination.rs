//
//  gerrit-rest-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! List and Query Options for Gerrit Endpoints
//!
//! Gerrit list endpoints use offset-based pagination driven by query
//! parameters rather than response envelopes:
//!
//! | Option | Parameter | Endpoints |
//! |--------|-----------|-----------|
//! | `limit` | `n` | changes, accounts, projects, groups, branches, tags |
//! | `start` | `S` (changes, accounts) / `s` (refs) | same |
//! | `prefix` | `p` | projects, groups |
//! | `substring` | `m` | projects, groups, branches, tags |
//! | `regex` | `r` | projects, groups, branches, tags |
//! | `options` | `o` (repeated) | changes, accounts |
//!
//! The last element of a truncated change list carries `_more_changes: true`;
//! that flag lives on the element types themselves.
//!
//! # Example
//!
//! ```rust
//! use gerrit_rest_client::api::common::ListOptions;
//!
//! let options = ListOptions::new().limit(25).start(50).option("CURRENT_REVISION");
//! let query = options.to_query();
//! assert!(query.contains(&("n".to_string(), "25".to_string())));
//! assert!(query.contains(&("S".to_string(), "50".to_string())));
//! assert!(query.contains(&("o".to_string(), "CURRENT_REVISION".to_string())));
//! ```

/// Options applied to list and query endpoints.
///
/// All fields are optional; an empty `ListOptions` produces no query
/// parameters and the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of results (`n`).
    pub limit: Option<u32>,

    /// Number of results to skip (`S`).
    pub start: Option<u32>,

    /// Only names starting with this prefix (`p`).
    pub prefix: Option<String>,

    /// Only names containing this substring (`m`).
    pub substring: Option<String>,

    /// Only names matching this regular expression (`r`).
    pub regex: Option<String>,

    /// Additional output options such as `DETAILED_ACCOUNTS` (`o`).
    pub options: Vec<String>,
}

impl ListOptions {
    /// Creates an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of results to skip.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Restricts results to names with the given prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Restricts results to names containing the given substring.
    pub fn substring(mut self, substring: impl Into<String>) -> Self {
        self.substring = Some(substring.into());
        self
    }

    /// Restricts results to names matching the given regular expression.
    pub fn regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }

    /// Adds an output option (repeatable).
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Converts the options into query parameters for change and account queries.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.build_query("S")
    }

    /// Converts the options into query parameters for ref listings
    /// (branches and tags), which spell the skip parameter `s`.
    pub fn to_ref_query(&self) -> Vec<(String, String)> {
        self.build_query("s")
    }

    fn build_query(&self, start_key: &str) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("n".to_string(), limit.to_string()));
        }
        if let Some(start) = self.start {
            query.push((start_key.to_string(), start.to_string()));
        }
        if let Some(prefix) = &self.prefix {
            query.push(("p".to_string(), prefix.clone()));
        }
        if let Some(substring) = &self.substring {
            query.push(("m".to_string(), substring.clone()));
        }
        if let Some(regex) = &self.regex {
            query.push(("r".to_string(), regex.clone()));
        }
        for option in &self.options {
            query.push(("o".to_string(), option.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_produce_no_query() {
        assert!(ListOptions::new().to_query().is_empty());
    }

    #[test]
    fn test_ref_query_uses_lowercase_start() {
        let query = ListOptions::new().start(10).to_ref_query();
        assert_eq!(query, vec![("s".to_string(), "10".to_string())]);
    }

    #[test]
    fn test_options_repeat() {
        let query = ListOptions::new()
            .option("LABELS")
            .option("DETAILED_ACCOUNTS")
            .to_query();
        assert_eq!(
            query,
            vec![
                ("o".to_string(), "LABELS".to_string()),
                ("o".to_string(), "DETAILED_ACCOUNTS".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_filters() {
        let query = ListOptions::new().prefix("plat").substring("core").regex("^a.*").to_query();
        assert_eq!(query.len(), 3);
        assert_eq!(query[0], ("p".to_string(), "plat".to_string()));
        assert_eq!(query[1], ("m".to_string(), "core".to_string()));
        assert_eq!(query[2], ("r".to_string(), "^a.*".to_string()));
    }
}
