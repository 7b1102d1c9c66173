//
//  gerrit-rest-client
//  extensions/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server configuration capabilities (`/config/server/`).

use async_trait::async_trait;

use super::common::ServerInfo;
use super::preferences::{DiffPreferencesInfo, GeneralPreferencesInfo};
use crate::api::common::ApiError;

/// Entry point for configuration endpoints.
pub trait ConfigApi: Send + Sync {
    fn server(&self) -> Result<Box<dyn ServerApi>, ApiError> {
        Err(ApiError::NotImplemented("ConfigApi::server"))
    }
}

/// Server-wide information and defaults.
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// The server version.
    ///
    /// Servers that predate the version endpoint answer with a client error;
    /// implementations report those as a pre-versioning sentinel rather than
    /// an error.
    async fn get_version(&self) -> Result<String, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::get_version"))
    }

    async fn get_info(&self) -> Result<ServerInfo, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::get_info"))
    }

    async fn get_default_preferences(&self) -> Result<GeneralPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::get_default_preferences"))
    }

    async fn set_default_preferences(
        &self,
        _input: &GeneralPreferencesInfo,
    ) -> Result<GeneralPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::set_default_preferences"))
    }

    async fn get_default_diff_preferences(&self) -> Result<DiffPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::get_default_diff_preferences"))
    }

    async fn set_default_diff_preferences(
        &self,
        _input: &DiffPreferencesInfo,
    ) -> Result<DiffPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("ServerApi::set_default_diff_preferences"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl ConfigApi for NotImplemented {}

impl ServerApi for NotImplemented {}
