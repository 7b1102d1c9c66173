//
//  gerrit-rest-client
//  extensions/preferences.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User and server-default preference sets.
//!
//! These records are read from and written back to the same endpoints, so
//! every field is optional: on write, absent fields are left unchanged by
//! the server.

use serde::{Deserialize, Serialize};

/// An entry of the user's "My" menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// General preferences (`/accounts/{id}/preferences`, `/config/server/preferences`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralPreferencesInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes_per_page: Option<i32>,

    /// `STD`, `US`, `ISO`, `EURO`, `UK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    /// `HHMM_12` or `HHMM_24`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,

    /// `SIDE_BY_SIDE` or `UNIFIED_DIFF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_view: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_scheme: Option<String>,

    /// `ENABLED`, `CC_ON_OWN_COMMENTS`, `ATTENTION_SET_ONLY` or `DISABLED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_strategy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_inline_diffs: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_date_in_change_table: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bar_in_change_table: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mute_common_path_prefixes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_comments_on_push: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my: Option<Vec<MenuItem>>,
}

/// Diff preferences (`/accounts/{id}/preferences.diff`, `/config/server/preferences.diff`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPreferencesInfo {
    /// Lines of context; `-1` means the whole file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_length: Option<i32>,

    /// `IGNORE_NONE`, `IGNORE_TRAILING`, `IGNORE_LEADING_AND_TRAILING` or `IGNORE_ALL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_whitespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intraline_difference: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tabs: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_whitespace_errors: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_highlighting: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_all_comments: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_not_written() {
        let prefs = GeneralPreferencesInfo {
            changes_per_page: Some(50),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&prefs).unwrap(), json!({"changes_per_page": 50}));
    }

    #[test]
    fn test_diff_preferences_parse() {
        let prefs: DiffPreferencesInfo = serde_json::from_value(json!({
            "context": 10,
            "tab_size": 8,
            "line_length": 100,
            "ignore_whitespace": "IGNORE_NONE",
            "intraline_difference": true,
            "unknown_future_flag": false
        }))
        .unwrap();
        assert_eq!(prefs.line_length, Some(100));
        assert_eq!(prefs.ignore_whitespace.as_deref(), Some("IGNORE_NONE"));
        assert_eq!(prefs.show_tabs, None);
    }
}
