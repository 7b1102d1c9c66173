//
//  gerrit-rest-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Gerrit REST API
//!
//! This module provides [`GerritClient`], the crate's [`Transport`]
//! implementation backed by `reqwest`.
//!
//! ## Features
//!
//! - Base URLs with a path prefix (`https://host/gerrit`)
//! - The `/a/` prefix for authenticated requests
//! - Per-segment percent-encoding of resource paths
//! - Removal of Gerrit's `)]}'` anti-XSSI prefix from JSON bodies
//! - Custom User-Agent header

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use url::Url;

use super::common::ApiError;
use super::transport::{RawResponse, RestRequest, Transport};
use crate::auth::AuthCredential;
use crate::config::HostConfig;

/// The prefix Gerrit puts in front of every JSON body.
pub const XSSI_PREFIX: &str = ")]}'";

/// Builds an [`ApiError::Http`] from a failed response.
///
/// Gerrit reports errors as plain text (`Not found`, `change is closed`).
/// The trimmed body becomes the message; an empty body falls back to the
/// status' canonical reason.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = body.trim();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        message.to_string()
    };

    ApiError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Removes the anti-XSSI prefix, if present.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::client::strip_xssi_prefix;
///
/// assert_eq!(strip_xssi_prefix(")]}'\n{\"a\":1}"), "\n{\"a\":1}");
/// assert_eq!(strip_xssi_prefix("plain"), "plain");
/// ```
pub fn strip_xssi_prefix(body: &str) -> &str {
    body.strip_prefix(XSSI_PREFIX).unwrap_or(body)
}

/// Turns a successful response body into a [`RawResponse`].
///
/// A body is JSON when the server says so or when it carries the XSSI
/// prefix; anything else (such as base64 file content) is kept as text.
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] for a JSON body that does not
/// parse.
pub fn decode_body(content_type: Option<&str>, body: &str) -> Result<RawResponse, ApiError> {
    if body.trim().is_empty() {
        return Ok(RawResponse::Empty);
    }

    let stripped = strip_xssi_prefix(body);
    let declared_json = content_type
        .map(|ct| ct.trim_start().starts_with("application/json"))
        .unwrap_or(false);

    if declared_json || stripped.len() != body.len() {
        Ok(RawResponse::Json(serde_json::from_str(stripped)?))
    } else {
        Ok(RawResponse::Text(body.to_string()))
    }
}

fn http_client(timeout: Option<Duration>) -> Result<Client, ApiError> {
    let mut builder = Client::builder().user_agent(format!("gerrit-rest-client/{}", crate::VERSION));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// The HTTP client for a single Gerrit server.
///
/// Owns everything the resource handles deliberately know nothing about:
/// the base URL, credentials, timeouts and the wire details of Gerrit's
/// JSON responses.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use gerrit_rest_client::api::GerritClient;
/// use gerrit_rest_client::auth::AuthCredential;
///
/// let anonymous = GerritClient::new("https://review.example.com")?;
/// assert!(!anonymous.is_authenticated());
///
/// let client = GerritClient::new("https://review.example.com/gerrit")?
///     .with_auth(AuthCredential::basic("jdoe", "http-password"));
/// assert!(client.is_authenticated());
/// # Ok::<(), gerrit_rest_client::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GerritClient {
    /// The underlying HTTP client
    http: Client,
    /// Server base URL, possibly with a path prefix
    base_url: Url,
    /// Optional authentication credentials
    auth: Option<AuthCredential>,
}

impl GerritClient {
    /// Creates an anonymous client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse or
    /// cannot carry a path (e.g. `mailto:`), and [`ApiError::Network`] if
    /// the HTTP client could not be created.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        Ok(Self {
            http: http_client(None)?,
            base_url,
            auth: None,
        })
    }

    /// Creates a client from a host configuration.
    ///
    /// Credentials are attached when both username and HTTP password are set.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gerrit_rest_client::api::GerritClient;
    /// use gerrit_rest_client::config::HostConfig;
    ///
    /// let config = HostConfig {
    ///     url: "https://review.example.com".to_string(),
    ///     username: Some("jdoe".to_string()),
    ///     http_password: Some("secret".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let client = GerritClient::from_config(&config)?;
    /// assert!(client.is_authenticated());
    /// # Ok::<(), gerrit_rest_client::api::common::ApiError>(())
    /// ```
    pub fn from_config(config: &HostConfig) -> Result<Self, ApiError> {
        let client = Self::new(&config.url)?;
        Ok(match config.credential() {
            Some(credential) => client.with_auth(credential),
            None => client,
        })
    }

    /// Sets the authentication credentials for this client.
    ///
    /// Authenticated clients send every request under `/a/`.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Applies a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ApiError> {
        self.http = http_client(Some(timeout))?;
        Ok(self)
    }

    /// Replaces the underlying `reqwest` client (proxies, custom TLS roots).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Builds the full URL for `request`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gerrit_rest_client::api::{GerritClient, ResourcePath, RestRequest};
    ///
    /// let client = GerritClient::new("https://review.example.com/gerrit/")?;
    /// let request = RestRequest::get(
    ///     ResourcePath::root("projects").join("platform/build").join("commits").join("abc"),
    /// );
    /// assert_eq!(
    ///     client.url_for(&request)?.as_str(),
    ///     "https://review.example.com/gerrit/projects/platform%2Fbuild/commits/abc"
    /// );
    /// # Ok::<(), gerrit_rest_client::api::common::ApiError>(())
    /// ```
    pub fn url_for(&self, request: &RestRequest) -> Result<Url, ApiError> {
        // `PathSegmentsMut` silently drops `.` and `..`.
        if let Some(dot) = request
            .path
            .segments()
            .iter()
            .find(|s| s.as_str() == "." || s.as_str() == "..")
        {
            return Err(ApiError::InvalidRequest(format!(
                "path segment '{}' in {} is not a valid identifier",
                dot, request.path
            )));
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            segments.pop_if_empty();
            if self.auth.is_some() {
                segments.push("a");
            }
            segments.extend(request.path.segments());
        }

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        Ok(url)
    }
}

#[async_trait]
impl Transport for GerritClient {
    async fn request(&self, request: RestRequest) -> Result<RawResponse, ApiError> {
        let url = self.url_for(&request)?;
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(ACCEPT, "application/json");

        if let Some(auth) = &self.auth {
            builder = auth.apply_to_request(builder);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), path = %request.path, "request failed");
            return Err(format_api_error(status, &text));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await?;

        decode_body(content_type.as_deref(), &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::ResourcePath;
    use serde_json::json;

    #[test]
    fn test_rejects_cannot_be_a_base() {
        assert!(matches!(
            GerritClient::new("mailto:jdoe@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(GerritClient::new("not a url").is_err());
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let client = GerritClient::new("https://review.example.com").unwrap();
        for dot in ["..", "."] {
            let request =
                RestRequest::get(ResourcePath::root("projects").join(dot).join("description"));
            assert!(matches!(
                client.url_for(&request),
                Err(ApiError::InvalidRequest(_))
            ));
        }

        let request = RestRequest::get(ResourcePath::root("projects").join("a/b").join("100%"));
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://review.example.com/projects/a%2Fb/100%25"
        );
    }

    #[test]
    fn test_authenticated_prefix() {
        let client = GerritClient::new("https://review.example.com")
            .unwrap()
            .with_auth(AuthCredential::basic("jdoe", "pw"));
        let request = RestRequest::get(ResourcePath::root("accounts").join("self"));
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://review.example.com/a/accounts/self"
        );
    }

    #[test]
    fn test_collection_and_query() {
        let client = GerritClient::new("https://review.example.com").unwrap();
        let request = RestRequest::get(ResourcePath::collection("changes"))
            .query("q", "status:open")
            .query("n", "2");
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://review.example.com/changes/?q=status%3Aopen&n=2"
        );
    }

    #[test]
    fn test_plugin_view_segment_is_not_escaped() {
        let client = GerritClient::new("https://review.example.com").unwrap();
        let path = ResourcePath::root("changes")
            .extend(["1", "revisions", "current", "verify-status~verifications"]);
        let url = client.url_for(&RestRequest::get(path)).unwrap();
        assert!(url.path().ends_with("/verify-status~verifications"));
    }

    #[test]
    fn test_format_api_error() {
        let err = format_api_error(StatusCode::CONFLICT, "change is closed\n");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "HTTP 409: change is closed");

        let err = format_api_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(None, "").unwrap(), RawResponse::Empty);
        assert_eq!(
            decode_body(Some("application/json; charset=UTF-8"), ")]}'\n{\"a\":1}").unwrap(),
            RawResponse::Json(json!({"a": 1}))
        );
        assert_eq!(
            decode_body(Some("text/plain"), ")]}'\n\"2.9\"").unwrap(),
            RawResponse::Json(json!("2.9"))
        );
        assert_eq!(
            decode_body(Some("text/plain; charset=ISO-8859-1"), "aGVsbG8=").unwrap(),
            RawResponse::Text("aGVsbG8=".to_string())
        );
        assert!(matches!(
            decode_body(Some("application/json"), ")]}'\n{broken"),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}
