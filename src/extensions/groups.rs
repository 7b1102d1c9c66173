//
//  gerrit-rest-client
//  extensions/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group capabilities.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::common::{AccountInfo, GroupInfo};
use crate::api::common::{ApiError, ListOptions};

/// Request body for creating a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInput {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to_all: Option<bool>,

    /// UUID of the owning group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Request body for adding several members at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersInput {
    pub members: Vec<String>,
}

/// Entry point for group operations (`/groups/`).
#[async_trait]
pub trait Groups: Send + Sync {
    /// Visible groups keyed by name.
    async fn list(&self, _options: &ListOptions) -> Result<BTreeMap<String, GroupInfo>, ApiError> {
        Err(ApiError::NotImplemented("Groups::list"))
    }

    /// Returns a handle for a group by UUID, legacy numeric id, or name.
    fn id(&self, _id: &str) -> Result<Box<dyn GroupApi>, ApiError> {
        Err(ApiError::NotImplemented("Groups::id"))
    }

    async fn create(&self, _input: &GroupInput) -> Result<GroupInfo, ApiError> {
        Err(ApiError::NotImplemented("Groups::create"))
    }
}

/// Operations on one group (`/groups/{id}`).
#[async_trait]
pub trait GroupApi: Send + Sync {
    async fn get(&self) -> Result<GroupInfo, ApiError> {
        Err(ApiError::NotImplemented("GroupApi::get"))
    }

    async fn description(&self) -> Result<String, ApiError> {
        Err(ApiError::NotImplemented("GroupApi::description"))
    }

    async fn members(&self) -> Result<Vec<AccountInfo>, ApiError> {
        Err(ApiError::NotImplemented("GroupApi::members"))
    }

    /// Adds accounts (by id, username or email); returns the added members.
    async fn add_members(&self, _members: &[String]) -> Result<Vec<AccountInfo>, ApiError> {
        Err(ApiError::NotImplemented("GroupApi::add_members"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl Groups for NotImplemented {}

impl GroupApi for NotImplemented {}
