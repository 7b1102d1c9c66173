//
//  gerrit-rest-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Contract
//!
//! Every resource handle talks to the server through the [`Transport`] trait.
//! The crate ships one implementation, [`GerritClient`](crate::api::GerritClient),
//! backed by `reqwest`; tests and embedders can supply their own.
//!
//! A request is plain data ([`RestRequest`]); a response is an untyped tree
//! ([`RawResponse`]) that the [`parser`](crate::api::parser) turns into typed
//! results.
//!
//! ## Paths
//!
//! [`ResourcePath`] stores raw, unencoded segments. Encoding happens once,
//! per segment, when the transport builds the final URL, so a project named
//! `platform/build` is sent as `platform%2Fbuild`.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::common::ApiError;

/// HTTP verbs used by the Gerrit REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A server-relative path made of unencoded segments.
///
/// Paths are values: [`join`](Self::join) returns a new path and never
/// modifies the receiver.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::ResourcePath;
///
/// let path = ResourcePath::root("projects").join("platform/build").join("commits");
/// assert_eq!(path.segments(), ["projects", "platform/build", "commits"]);
/// assert_eq!(path.to_string(), "/projects/platform/build/commits");
///
/// let list = ResourcePath::collection("changes");
/// assert_eq!(list.to_string(), "/changes/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Creates an empty path (the server root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path with a single top-level segment, e.g. `/changes`.
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Creates a collection path with a trailing slash, e.g. `/changes/`.
    ///
    /// Gerrit serves list and query endpoints on the slash-terminated form.
    pub fn collection(segment: impl Into<String>) -> Self {
        Self::root(segment).join("")
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns a new path with every segment of `relative` appended.
    pub fn extend<I, S>(&self, relative: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.extend(relative.into_iter().map(Into::into));
        Self { segments }
    }

    /// The raw, unencoded segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.segments.is_empty() {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// A single REST exchange described as plain data.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::{Method, ResourcePath, RestRequest};
///
/// let request = RestRequest::get(ResourcePath::collection("changes"))
///     .query("q", "status:open")
///     .query("n", "10");
/// assert_eq!(request.method, Method::Get);
/// assert_eq!(request.query.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    /// The HTTP verb.
    pub method: Method,
    /// The server-relative path.
    pub path: ResourcePath,
    /// Query parameters in order; keys may repeat.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl RestRequest {
    /// Creates a request with no query and no body.
    pub fn new(method: Method, path: ResourcePath) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get(path: ResourcePath) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: ResourcePath) -> Self {
        Self::new(Method::Post, path)
    }

    /// Creates a PUT request.
    pub fn put(path: ResourcePath) -> Self {
        Self::new(Method::Put, path)
    }

    /// Creates a DELETE request.
    pub fn delete(path: ResourcePath) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Appends one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends several query parameters.
    pub fn queries<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// An untyped response body as delivered by the transport.
///
/// Exists only for the duration of one call; parsers borrow it and never
/// modify it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// A JSON document (anti-XSSI prefix already removed).
    Json(Value),
    /// A non-JSON body, such as base64 file content.
    Text(String),
    /// No body (e.g. `204 No Content`).
    Empty,
}

impl RawResponse {
    /// Returns the JSON tree, if this is a JSON response.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the response has no body.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The transport collaborator: performs one HTTP exchange.
///
/// Implementations own authentication, connection handling, timeouts and
/// any retry policy. They must report every non-2xx status as
/// [`ApiError::Http`] carrying the status code, and connection failures as
/// some other variant with no status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded body.
    async fn request(&self, request: RestRequest) -> Result<RawResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_does_not_modify_receiver() {
        let base = ResourcePath::root("projects");
        let child = base.join("gerrit");
        assert_eq!(base.segments(), ["projects"]);
        assert_eq!(child.segments(), ["projects", "gerrit"]);
    }

    #[test]
    fn test_display_empty_path() {
        assert_eq!(ResourcePath::new().to_string(), "/");
    }

    #[test]
    fn test_extend() {
        let path = ResourcePath::root("config").extend(["server", "version"]);
        assert_eq!(path.to_string(), "/config/server/version");
    }

    #[test]
    fn test_json_body() {
        let request = RestRequest::post(ResourcePath::root("changes"))
            .json(&json!({"message": "done"}))
            .unwrap();
        assert_eq!(request.body, Some(json!({"message": "done"})));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
