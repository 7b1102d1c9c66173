//
//  gerrit-rest-client
//  api/parser.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Parser
//!
//! Converts a [`RawResponse`] into typed results.
//!
//! Shapes are declared once, as `serde` derives on the result types in
//! [`extensions`](crate::extensions); [`parse`] is the single routine that
//! interprets any of them. The rules are the derive's rules:
//!
//! - non-`Option` fields are required; a missing one fails the whole parse
//! - a value of the wrong JSON type fails the whole parse
//! - unknown fields are ignored
//!
//! Failures surface as [`ApiError::MalformedResponse`]. A parse never returns
//! a partially populated record and never modifies the raw tree.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use super::common::ApiError;
use super::transport::RawResponse;
use crate::extensions::common::{BinaryResult, CommitInfo, IncludedInInfo};

/// Parses a raw response into the shape described by `T`.
///
/// An empty body is treated as JSON `null`, so `()` and `Option<_>` targets
/// accept it. A text body is treated as a JSON string.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::parser;
/// use gerrit_rest_client::api::RawResponse;
/// use gerrit_rest_client::extensions::common::CommitInfo;
/// use serde_json::json;
///
/// let raw = RawResponse::Json(json!({"commit": "abc123", "message": "Fix bug"}));
/// let info: CommitInfo = parser::parse(&raw).unwrap();
/// assert_eq!(info.message.as_deref(), Some("Fix bug"));
/// ```
pub fn parse<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    let parsed = match raw {
        RawResponse::Json(value) => T::deserialize(value),
        RawResponse::Text(text) => T::deserialize(Value::String(text.clone())),
        RawResponse::Empty => T::deserialize(Value::Null),
    };
    Ok(parsed?)
}

/// A single JSON scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
}

impl Scalar {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an `i64`, if this is an integral number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Consumes the scalar and returns the string, if this is a string.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Extracts one scalar field without parsing the whole object.
///
/// `field_path` is walked from the root: object keys by name, array
/// elements by decimal index. An empty path selects the root itself, which
/// is how a bare JSON string such as a version number is read.
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] if a step of the path is missing
/// or the selected value is `null`, an object, or an array.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::parser::{extract_scalar, Scalar};
/// use gerrit_rest_client::api::RawResponse;
/// use serde_json::json;
///
/// let raw = RawResponse::Json(json!({"gerrit": {"doc_url": "https://review/Documentation/"}}));
/// let url = extract_scalar(&raw, &["gerrit", "doc_url"]).unwrap();
/// assert_eq!(url.as_str(), Some("https://review/Documentation/"));
///
/// let version = RawResponse::Json(json!("2.9"));
/// assert_eq!(extract_scalar(&version, &[]).unwrap(), Scalar::String("2.9".into()));
/// ```
pub fn extract_scalar(raw: &RawResponse, field_path: &[&str]) -> Result<Scalar, ApiError> {
    let text_root;
    let mut current = match raw {
        RawResponse::Json(value) => value,
        RawResponse::Text(text) => {
            text_root = Value::String(text.clone());
            &text_root
        }
        RawResponse::Empty => {
            return Err(ApiError::MalformedResponse("empty response body".to_string()))
        }
    };

    for (depth, key) in field_path.iter().enumerate() {
        let next = match current {
            Value::Object(map) => map.get(*key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.ok_or_else(|| {
            ApiError::MalformedResponse(format!(
                "missing field `{}`",
                field_path[..=depth].join(".")
            ))
        })?;
    }

    match current {
        Value::String(s) => Ok(Scalar::String(s.clone())),
        Value::Number(n) => Ok(Scalar::Number(n.clone())),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        other => Err(ApiError::MalformedResponse(format!(
            "expected a scalar at `{}`, found {}",
            field_path.join("."),
            json_kind(other)
        ))),
    }
}

/// Returns a text body, or the string a JSON body consists of.
pub fn parse_text(raw: &RawResponse) -> Result<String, ApiError> {
    match raw {
        RawResponse::Text(text) => Ok(text.clone()),
        RawResponse::Json(Value::String(s)) => Ok(s.clone()),
        RawResponse::Json(other) => Err(ApiError::MalformedResponse(format!(
            "expected text, found {}",
            json_kind(other)
        ))),
        RawResponse::Empty => Err(ApiError::MalformedResponse("empty response body".to_string())),
    }
}

/// Decodes a base64 body, the encoding Gerrit uses for file content.
///
/// Line breaks inside the payload are ignored.
pub fn parse_base64(raw: &RawResponse) -> Result<BinaryResult, ApiError> {
    let text = parse_text(raw)?;
    let compact: String = text.split_whitespace().collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::MalformedResponse(format!("invalid base64 content: {e}")))?;
    Ok(BinaryResult::new(bytes))
}

/// Parses a single commit, as returned by `GET /projects/{project}/commits/{commit}`.
pub fn parse_single_commit_info(raw: &RawResponse) -> Result<CommitInfo, ApiError> {
    parse(raw)
}

/// Parses the branches and tags containing a commit, as returned by
/// `GET /projects/{project}/commits/{commit}/in`.
pub fn parse_included_in_info(raw: &RawResponse) -> Result<IncludedInInfo, ApiError> {
    parse(raw)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_commit_info() {
        let raw = RawResponse::Json(json!({"commit": "abc123", "message": "Fix bug"}));
        let info = parse_single_commit_info(&raw).unwrap();
        assert_eq!(info.commit.as_deref(), Some("abc123"));
        assert_eq!(info.message.as_deref(), Some("Fix bug"));
    }

    #[test]
    fn test_parse_included_in_info() {
        let raw = RawResponse::Json(json!({
            "branches": ["master", "branch1"],
            "tags": ["tag1"]
        }));
        let info = parse_included_in_info(&raw).unwrap();
        assert_eq!(info.branches.len(), 2);
        assert_eq!(info.branches, vec!["master", "branch1"]);
        assert_eq!(info.tags.len(), 1);
        assert_eq!(info.tags, vec!["tag1"]);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let raw = RawResponse::Json(json!({"branches": ["master"]}));
        let err = parse_included_in_info(&raw).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn test_type_mismatch_is_malformed() {
        let raw = RawResponse::Json(json!({"branches": "master", "tags": []}));
        assert!(matches!(
            parse_included_in_info(&raw),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let plain = RawResponse::Json(json!({"commit": "abc", "subject": "s"}));
        let extended = RawResponse::Json(json!({
            "commit": "abc",
            "subject": "s",
            "future_field": {"nested": [1, 2, 3]}
        }));
        assert_eq!(
            parse_single_commit_info(&plain).unwrap(),
            parse_single_commit_info(&extended).unwrap()
        );
    }

    #[test]
    fn test_parse_does_not_modify_raw() {
        let raw = RawResponse::Json(json!({"commit": "abc", "extra": true}));
        let before = raw.clone();
        let _ = parse_single_commit_info(&raw).unwrap();
        assert_eq!(raw, before);
    }

    #[test]
    fn test_empty_parses_as_unit_and_none() {
        parse::<()>(&RawResponse::Empty).unwrap();
        assert_eq!(parse::<Option<String>>(&RawResponse::Empty).unwrap(), None);
        assert!(parse::<CommitInfo>(&RawResponse::Empty).is_err());
    }

    #[test]
    fn test_extract_scalar_root_string() {
        let raw = RawResponse::Json(json!("3.9.1"));
        let scalar = extract_scalar(&raw, &[]).unwrap();
        assert_eq!(scalar.into_string().as_deref(), Some("3.9.1"));
    }

    #[test]
    fn test_extract_scalar_array_index() {
        let raw = RawResponse::Json(json!({"tags": ["v1", "v2"], "count": 2, "ok": true}));
        assert_eq!(extract_scalar(&raw, &["tags", "1"]).unwrap().as_str(), Some("v2"));
        assert_eq!(extract_scalar(&raw, &["count"]).unwrap().as_i64(), Some(2));
        assert_eq!(extract_scalar(&raw, &["ok"]).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_extract_scalar_missing_field() {
        let raw = RawResponse::Json(json!({"a": {"b": 1}}));
        let err = extract_scalar(&raw, &["a", "c"]).unwrap_err();
        assert_eq!(err.to_string(), "Malformed response: missing field `a.c`");
    }

    #[test]
    fn test_extract_scalar_rejects_objects() {
        let raw = RawResponse::Json(json!({"a": {"b": 1}}));
        assert!(extract_scalar(&raw, &["a"]).is_err());
        assert!(extract_scalar(&RawResponse::Empty, &[]).is_err());
    }

    #[test]
    fn test_parse_base64() {
        let raw = RawResponse::Text("aGVsbG8g\nd29ybGQ=".to_string());
        let content = parse_base64(&raw).unwrap();
        assert_eq!(content.as_string().unwrap(), "hello world");
    }

    #[test]
    fn test_parse_base64_invalid() {
        let raw = RawResponse::Text("not base64!".to_string());
        assert!(matches!(parse_base64(&raw), Err(ApiError::MalformedResponse(_))));
    }
}
