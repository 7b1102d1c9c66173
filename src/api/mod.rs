//
//  gerrit-rest-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! REST-backed implementations of the [`extensions`](crate::extensions)
//! traits for the Gerrit Code Review REST API.
//!
//! ## Architecture
//!
//! Every call follows the same path:
//!
//! ```text
//! caller ─> endpoint method ─> Transport ─> parser ─> typed result
//! ```
//!
//! - [`transport`]: the [`Transport`] contract and request/response values
//! - [`client`]: [`GerritClient`], the `reqwest`-backed transport
//! - [`endpoint`]: [`Resource`], the shared core of every handle
//! - [`parser`]: turns raw responses into typed results
//! - [`common`]: [`ApiError`](common::ApiError) and list options
//! - [`accounts`], [`changes`], [`groups`], [`plugins`], [`projects`],
//!   [`server`]: one handle type per resource
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gerrit_rest_client::api::{GerritClient, GerritRestApi};
//! use gerrit_rest_client::auth::AuthCredential;
//! use gerrit_rest_client::extensions::GerritApi;
//!
//! # async fn example() -> Result<(), gerrit_rest_client::api::common::ApiError> {
//! let client = GerritClient::new("https://review.example.com")?
//!     .with_auth(AuthCredential::basic("jdoe", "http-password"));
//! let api = GerritRestApi::from_client(client);
//!
//! let included = api
//!     .projects()?
//!     .name("gerrit")?
//!     .commit("674ac754f91e64a0efb8087e59a176484bd534d1")?
//!     .included_in()
//!     .await?;
//! println!("in branches: {:?}", included.branches);
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod changes;
pub mod client;
pub mod common;
pub mod endpoint;
pub mod groups;
pub mod parser;
pub mod plugins;
pub mod projects;
pub mod server;
pub mod transport;

use std::sync::Arc;

pub use client::GerritClient;
pub use common::{ApiError, ListOptions};
pub use endpoint::Resource;
pub use server::PRE_VERSIONING_SENTINEL;
pub use transport::{Method, RawResponse, ResourcePath, RestRequest, Transport};

use crate::extensions::accounts::Accounts;
use crate::extensions::changes::Changes;
use crate::extensions::config::ConfigApi;
use crate::extensions::groups::Groups;
use crate::extensions::plugins::Plugins;
use crate::extensions::projects::Projects;
use crate::extensions::GerritApi;

/// Root handle over one transport.
///
/// Cloning is cheap; every handle created from it shares the transport.
#[derive(Clone)]
pub struct GerritRestApi {
    transport: Arc<dyn Transport>,
    version_sentinel: String,
}

impl GerritRestApi {
    /// Creates the root handle over any transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            version_sentinel: PRE_VERSIONING_SENTINEL.to_string(),
        }
    }

    /// Creates the root handle over a [`GerritClient`].
    pub fn from_client(client: GerritClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Overrides the version reported for pre-versioning servers.
    pub fn with_version_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.version_sentinel = sentinel.into();
        self
    }
}

impl std::fmt::Debug for GerritRestApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GerritRestApi")
            .field("version_sentinel", &self.version_sentinel)
            .finish_non_exhaustive()
    }
}

impl GerritApi for GerritRestApi {
    fn accounts(&self) -> Result<Box<dyn Accounts>, ApiError> {
        Ok(Box::new(accounts::AccountsRestClient::new(self.transport.clone())))
    }

    fn changes(&self) -> Result<Box<dyn Changes>, ApiError> {
        Ok(Box::new(changes::ChangesRestClient::new(self.transport.clone())))
    }

    fn config(&self) -> Result<Box<dyn ConfigApi>, ApiError> {
        Ok(Box::new(
            server::ConfigRestClient::new(self.transport.clone())
                .with_version_sentinel(self.version_sentinel.clone()),
        ))
    }

    fn groups(&self) -> Result<Box<dyn Groups>, ApiError> {
        Ok(Box::new(groups::GroupsRestClient::new(self.transport.clone())))
    }

    fn projects(&self) -> Result<Box<dyn Projects>, ApiError> {
        Ok(Box::new(projects::ProjectsRestClient::new(self.transport.clone())))
    }

    fn plugins(&self) -> Result<Box<dyn Plugins>, ApiError> {
        Ok(Box::new(plugins::PluginsRestClient::new(self.transport.clone())))
    }
}
