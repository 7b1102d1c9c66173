//
//  gerrit-rest-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every Gerrit resource handle: the
//! unified [`ApiError`] taxonomy and the [`ListOptions`] used by list and query
//! endpoints.
//!
//! # Error Taxonomy
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `Http` | transport | non-2xx response, carries the status code |
//! | `Network` | transport | connection failure, no status code |
//! | `InvalidUrl` | transport | base URL or path could not be turned into a URL |
//! | `InvalidRequest` | endpoint | request body could not be serialized |
//! | `MalformedResponse` | parser | response does not match the requested shape |
//! | `NotImplemented` | stubs | the capability is not provided by this implementation |
//!
//! # Example
//!
//! ```rust
//! use gerrit_rest_client::api::common::ApiError;
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err {
//!         e if e.is_not_found() => "missing",
//!         e if e.is_client_error() => "rejected",
//!         ApiError::NotImplemented(_) => "unsupported",
//!         _ => "failed",
//!     }
//! }
//!
//! let err = ApiError::Http { status: 404, message: "Not found".into() };
//! assert_eq!(describe(&err), "missing");
//! ```

use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Gerrit API operations.
///
/// Endpoint methods propagate transport and parser failures unchanged; no
/// variant is ever produced by swallowing another error.
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - `serde_json::Error` converts into `MalformedResponse`
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// # Parameters
    ///
    /// - `status` - The numeric HTTP status code
    /// - `message` - The error text returned by Gerrit (plain text in most cases)
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues. There is no status code.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The base URL could not be parsed or cannot carry path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be encoded as JSON.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The response could not be coerced into the requested shape.
    ///
    /// Raised for missing required fields, type mismatches, invalid JSON,
    /// and undecodable file content.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The operation is not provided by this implementation.
    ///
    /// The payload names the trait method, e.g. `"FileApi::content"`.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ApiError {
    /// Returns the HTTP status code, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error is an HTTP status in the 400-499 range.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// Whether the error is an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
