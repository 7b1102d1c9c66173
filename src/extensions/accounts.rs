//
//  gerrit-rest-client
//  extensions/accounts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account capabilities.

use async_trait::async_trait;

use super::common::{AccountInfo, EmailInfo};
use super::preferences::{DiffPreferencesInfo, GeneralPreferencesInfo};
use crate::api::common::{ApiError, ListOptions};

/// Entry point for account lookups (`/accounts/`).
#[async_trait]
pub trait Accounts: Send + Sync {
    /// Returns a handle for the account identified by `id`.
    ///
    /// `id` may be a numeric id, a username, an email address or `self`.
    fn id(&self, _id: &str) -> Result<Box<dyn AccountApi>, ApiError> {
        Err(ApiError::NotImplemented("Accounts::id"))
    }

    /// Returns a handle for the calling user.
    fn self_account(&self) -> Result<Box<dyn AccountApi>, ApiError> {
        Err(ApiError::NotImplemented("Accounts::self_account"))
    }

    /// Queries accounts, e.g. `name:john`.
    async fn query(
        &self,
        _query: &str,
        _options: &ListOptions,
    ) -> Result<Vec<AccountInfo>, ApiError> {
        Err(ApiError::NotImplemented("Accounts::query"))
    }
}

/// Operations on a single account (`/accounts/{id}`).
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get(&self) -> Result<AccountInfo, ApiError> {
        Err(ApiError::NotImplemented("AccountApi::get"))
    }

    async fn get_preferences(&self) -> Result<GeneralPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("AccountApi::get_preferences"))
    }

    /// Updates the fields set in `input`; returns the resulting preferences.
    async fn set_preferences(
        &self,
        _input: &GeneralPreferencesInfo,
    ) -> Result<GeneralPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("AccountApi::set_preferences"))
    }

    async fn get_diff_preferences(&self) -> Result<DiffPreferencesInfo, ApiError> {
        Err(ApiError::NotImplemented("AccountApi::get_diff_preferences"))
    }

    async fn star_change(&self, _change_id: &str) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("AccountApi::star_change"))
    }

    async fn unstar_change(&self, _change_id: &str) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("AccountApi::unstar_change"))
    }

    async fn get_emails(&self) -> Result<Vec<EmailInfo>, ApiError> {
        Err(ApiError::NotImplemented("AccountApi::get_emails"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
///
/// Implementations can delegate to it for operations they do not support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl Accounts for NotImplemented {}

impl AccountApi for NotImplemented {}
