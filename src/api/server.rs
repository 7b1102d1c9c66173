//
//  gerrit-rest-client
//  api/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Server Configuration Handles
//!
//! `/config/server/` endpoints, including the version lookup with its
//! compatibility fallback.
//!
//! ## Version Fallback
//!
//! `GET /config/server/version` first appeared in Gerrit 2.8. Older servers
//! answer it with a client error, so:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx | the version string |
//! | HTTP 400-499 | the pre-versioning sentinel (default [`PRE_VERSIONING_SENTINEL`]) |
//! | any other error | the error, unchanged |
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gerrit_rest_client::api::{GerritClient, server::ConfigRestClient};
//! use gerrit_rest_client::extensions::config::ConfigApi;
//!
//! # async fn example() -> Result<(), gerrit_rest_client::api::common::ApiError> {
//! let config = ConfigRestClient::new(Arc::new(GerritClient::new("https://review.example.com")?));
//! let version = config.server()?.get_version().await?;
//! println!("Gerrit {version}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use super::common::ApiError;
use super::endpoint::Resource;
use super::parser::{self, Scalar};
use super::transport::{RawResponse, ResourcePath, Transport};
use crate::extensions::common::ServerInfo;
use crate::extensions::config::{ConfigApi, ServerApi};
use crate::extensions::preferences::{DiffPreferencesInfo, GeneralPreferencesInfo};

/// Version reported for servers that predate the version endpoint.
pub const PRE_VERSIONING_SENTINEL: &str = "<2.8";

/// Decides the result of a version lookup.
///
/// Client errors become `sentinel`; every other error is returned as-is.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::api::common::ApiError;
/// use gerrit_rest_client::api::server::{resolve_version, PRE_VERSIONING_SENTINEL};
/// use gerrit_rest_client::api::RawResponse;
/// use serde_json::json;
///
/// let ok = resolve_version(Ok(RawResponse::Json(json!("2.9"))), PRE_VERSIONING_SENTINEL);
/// assert_eq!(ok.unwrap(), "2.9");
///
/// let old = resolve_version(
///     Err(ApiError::Http { status: 404, message: "Not Found".into() }),
///     PRE_VERSIONING_SENTINEL,
/// );
/// assert_eq!(old.unwrap(), "<2.8");
///
/// let down = resolve_version(
///     Err(ApiError::Http { status: 500, message: "Internal Server Error".into() }),
///     PRE_VERSIONING_SENTINEL,
/// );
/// assert_eq!(down.unwrap_err().status(), Some(500));
/// ```
pub fn resolve_version(
    outcome: Result<RawResponse, ApiError>,
    sentinel: &str,
) -> Result<String, ApiError> {
    match outcome {
        Ok(raw) => match parser::extract_scalar(&raw, &[])? {
            Scalar::String(version) => Ok(version),
            other => Err(ApiError::MalformedResponse(format!(
                "expected a version string, found {other:?}"
            ))),
        },
        Err(err) if err.is_client_error() => {
            tracing::info!(
                error = %err,
                sentinel,
                "version endpoint unavailable, assuming pre-versioning server"
            );
            Ok(sentinel.to_string())
        }
        Err(err) => Err(err),
    }
}

/// `/config/`
#[derive(Debug, Clone)]
pub struct ConfigRestClient {
    root: Resource,
    version_sentinel: String,
}

impl ConfigRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("config")),
            version_sentinel: PRE_VERSIONING_SENTINEL.to_string(),
        }
    }

    /// Overrides the version reported for pre-versioning servers.
    pub fn with_version_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.version_sentinel = sentinel.into();
        self
    }
}

impl ConfigApi for ConfigRestClient {
    fn server(&self) -> Result<Box<dyn ServerApi>, ApiError> {
        Ok(Box::new(ServerApiRestClient {
            resource: self.root.child("server"),
            version_sentinel: self.version_sentinel.clone(),
        }))
    }
}

/// `/config/server`
#[derive(Debug, Clone)]
pub struct ServerApiRestClient {
    resource: Resource,
    version_sentinel: String,
}

impl ServerApiRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            resource: Resource::new(transport, ResourcePath::root("config").join("server")),
            version_sentinel: PRE_VERSIONING_SENTINEL.to_string(),
        }
    }

    /// Overrides the version reported for pre-versioning servers.
    pub fn with_version_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.version_sentinel = sentinel.into();
        self
    }

    /// The version reported for pre-versioning servers.
    pub fn version_sentinel(&self) -> &str {
        &self.version_sentinel
    }
}

#[async_trait]
impl ServerApi for ServerApiRestClient {
    async fn get_version(&self) -> Result<String, ApiError> {
        let outcome = self.resource.send(self.resource.get(&["version"])).await;
        resolve_version(outcome, &self.version_sentinel)
    }

    async fn get_info(&self) -> Result<ServerInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["info"])).await
    }

    async fn get_default_preferences(&self) -> Result<GeneralPreferencesInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["preferences"])).await
    }

    async fn set_default_preferences(
        &self,
        input: &GeneralPreferencesInfo,
    ) -> Result<GeneralPreferencesInfo, ApiError> {
        let request = self.resource.put(&["preferences"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn get_default_diff_preferences(&self) -> Result<DiffPreferencesInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["preferences.diff"])).await
    }

    async fn set_default_diff_preferences(
        &self,
        input: &DiffPreferencesInfo,
    ) -> Result<DiffPreferencesInfo, ApiError> {
        let request = self.resource.put(&["preferences.diff"]).json(input)?;
        self.resource.fetch(request).await
    }
}
