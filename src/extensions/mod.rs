//
//  gerrit-rest-client
//  extensions/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Extension Points
//!
//! Capability contracts that mirror Gerrit's own plugin API, so code written
//! against these traits works with any implementation: the REST-backed
//! handles in [`api`](crate::api), an in-process fake, or a partial
//! adapter.
//!
//! ## Growing a Contract
//!
//! Every trait method has a default body that fails with
//! [`ApiError::NotImplemented`]. Adding a method to a trait therefore never
//! breaks an existing implementer; callers of the new method on an old
//! implementation get a clear error instead. Each module also exports a
//! `NotImplemented` stub that implements all of its traits with the
//! defaults, for implementations that delegate unsupported operations.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use gerrit_rest_client::api::common::ApiError;
//! use gerrit_rest_client::extensions::common::BinaryResult;
//! use gerrit_rest_client::extensions::changes::FileApi;
//!
//! struct FixedFile(&'static str);
//!
//! #[async_trait]
//! impl FileApi for FixedFile {
//!     async fn content(&self) -> Result<BinaryResult, ApiError> {
//!         Ok(BinaryResult::new(self.0.as_bytes().to_vec()))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let file = FixedFile("hello");
//! assert_eq!(file.content().await.unwrap().as_string().unwrap(), "hello");
//! assert!(matches!(file.diff().await, Err(ApiError::NotImplemented(_))));
//! # });
//! ```

pub mod accounts;
pub mod changes;
pub mod common;
pub mod config;
pub mod groups;
pub mod plugins;
pub mod preferences;
pub mod projects;

use crate::api::common::ApiError;

use accounts::Accounts;
use changes::Changes;
use config::ConfigApi;
use groups::Groups;
use plugins::Plugins;
use projects::Projects;

/// Root of the API: one accessor per top-level REST collection.
pub trait GerritApi: Send + Sync {
    fn accounts(&self) -> Result<Box<dyn Accounts>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::accounts"))
    }

    fn changes(&self) -> Result<Box<dyn Changes>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::changes"))
    }

    fn config(&self) -> Result<Box<dyn ConfigApi>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::config"))
    }

    fn groups(&self) -> Result<Box<dyn Groups>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::groups"))
    }

    fn projects(&self) -> Result<Box<dyn Projects>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::projects"))
    }

    fn plugins(&self) -> Result<Box<dyn Plugins>, ApiError> {
        Err(ApiError::NotImplemented("GerritApi::plugins"))
    }
}

/// Stub whose every accessor fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl GerritApi for NotImplemented {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_stub_fails_everywhere() {
        let api: &dyn GerritApi = &NotImplemented;
        assert!(matches!(
            api.accounts(),
            Err(ApiError::NotImplemented("GerritApi::accounts"))
        ));
        assert!(api.changes().is_err());
        assert!(api.config().is_err());
        assert!(api.groups().is_err());
        assert!(api.projects().is_err());
        assert!(api.plugins().is_err());
    }
}
