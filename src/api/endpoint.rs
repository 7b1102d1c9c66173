//
//  gerrit-rest-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Handles
//!
//! A [`Resource`] is the shared core of every REST-backed handle: the
//! identifying path of one server-side resource plus the transport used to
//! reach it. Endpoint methods build a request relative to that path, send it,
//! and route the raw response through the [`parser`](super::parser).
//!
//! Handles hold no server state and are never modified; a child handle is a
//! new value.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::common::ApiError;
use super::parser;
use super::transport::{Method, RawResponse, ResourcePath, RestRequest, Transport};

/// A server-side resource bound to its path and a shared transport.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gerrit_rest_client::api::{GerritClient, Resource, ResourcePath};
/// use gerrit_rest_client::extensions::common::CommitInfo;
///
/// # async fn example() -> Result<(), gerrit_rest_client::api::common::ApiError> {
/// let client = Arc::new(GerritClient::new("https://review.example.com")?);
/// let commit = Resource::new(client, ResourcePath::root("projects"))
///     .child("gerrit")
///     .child("commits")
///     .child("abc123");
///
/// let info: CommitInfo = commit.fetch(commit.get(&[])).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Resource {
    transport: Arc<dyn Transport>,
    path: ResourcePath,
}

impl Resource {
    /// Binds `path` to `transport`.
    pub fn new(transport: Arc<dyn Transport>, path: ResourcePath) -> Self {
        Self { transport, path }
    }

    /// The identifying path of this resource.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The shared transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns the handle for a sub-resource, e.g. a revision of a change.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            path: self.path.join(segment),
        }
    }

    /// Builds a request for `relative` below this resource.
    pub fn request(&self, method: Method, relative: &[&str]) -> RestRequest {
        RestRequest::new(method, self.path.extend(relative.iter().copied()))
    }

    /// Builds a GET request for `relative` below this resource.
    pub fn get(&self, relative: &[&str]) -> RestRequest {
        self.request(Method::Get, relative)
    }

    /// Builds a POST request for `relative` below this resource.
    pub fn post(&self, relative: &[&str]) -> RestRequest {
        self.request(Method::Post, relative)
    }

    /// Builds a PUT request for `relative` below this resource.
    pub fn put(&self, relative: &[&str]) -> RestRequest {
        self.request(Method::Put, relative)
    }

    /// Builds a DELETE request for `relative` below this resource.
    pub fn delete(&self, relative: &[&str]) -> RestRequest {
        self.request(Method::Delete, relative)
    }

    /// Builds a GET for the slash-terminated collection form of this resource.
    pub fn list(&self) -> RestRequest {
        self.get(&[""])
    }

    /// Sends `request` and returns the raw body.
    ///
    /// Transport failures propagate unchanged.
    pub async fn send(&self, request: RestRequest) -> Result<RawResponse, ApiError> {
        self.transport.request(request).await
    }

    /// Sends `request` and parses the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T, ApiError> {
        let raw = self.send(request).await?;
        parser::parse(&raw)
    }

    /// Sends `request` and discards the body.
    pub async fn execute(&self, request: RestRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.path.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! An in-memory transport that records requests and replays canned
    //! responses in order.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    pub struct RecordingTransport {
        responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
        requests: Mutex<Vec<RestRequest>>,
    }

    impl RecordingTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn respond(&self, response: Result<RawResponse, ApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub fn requests(&self) -> Vec<RestRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn last(&self) -> RestRequest {
            self.requests().pop().expect("no request recorded")
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn request(&self, request: RestRequest) -> Result<RawResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(RawResponse::Empty))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use crate::extensions::common::CommitInfo;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_parses_response() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({"commit": "abc", "subject": "s"}))));

        let resource = Resource::new(transport.clone(), ResourcePath::root("projects"))
            .child("gerrit")
            .child("commits")
            .child("abc");
        let info: CommitInfo = resource.fetch(resource.get(&[])).await.unwrap();

        assert_eq!(info.commit.as_deref(), Some("abc"));
        assert_eq!(transport.last().path.to_string(), "/projects/gerrit/commits/abc");
        assert_eq!(transport.last().method, Method::Get);
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let transport = RecordingTransport::new();
        transport.respond(Err(ApiError::Http {
            status: 503,
            message: "down".into(),
        }));

        let resource = Resource::new(transport, ResourcePath::root("changes"));
        let err = resource.execute(resource.post(&["1", "abandon"])).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_child_does_not_modify_parent() {
        let transport = RecordingTransport::new();
        let parent = Resource::new(transport, ResourcePath::root("changes"));
        let child = parent.child("42");
        assert_eq!(parent.path().to_string(), "/changes");
        assert_eq!(child.path().to_string(), "/changes/42");
        assert_eq!(parent.list().path.to_string(), "/changes/");
        assert_eq!(format!("{child:?}"), "Resource { path: \"/changes/42\", .. }");
    }
}
