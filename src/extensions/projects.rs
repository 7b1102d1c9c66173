//
//  gerrit-rest-client
//  extensions/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project Capabilities
//!
//! Contracts for projects, their branches and individual commits.
//!
//! ```text
//! Projects ── name(project) ──> ProjectApi ─┬─ branch(name) ──> BranchApi
//!                                           └─ commit(id)   ──> CommitApi
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::common::{BinaryResult, BranchInfo, CommitInfo, IncludedInInfo, ProjectInfo, TagInfo};
use crate::api::common::{ApiError, ListOptions};

/// Request body for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_empty_commit: Option<bool>,

    /// Branches to create; the first becomes `HEAD`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
}

/// Request body for creating a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInput {
    /// Base revision; defaults to `HEAD` on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

/// Entry point for project operations (`/projects/`).
#[async_trait]
pub trait Projects: Send + Sync {
    /// Visible projects keyed by name.
    async fn list(&self, _options: &ListOptions) -> Result<BTreeMap<String, ProjectInfo>, ApiError> {
        Err(ApiError::NotImplemented("Projects::list"))
    }

    /// Returns a handle for the project called `name` (e.g. `platform/build`).
    fn name(&self, _name: &str) -> Result<Box<dyn ProjectApi>, ApiError> {
        Err(ApiError::NotImplemented("Projects::name"))
    }

    async fn create(&self, _name: &str, _input: &ProjectInput) -> Result<ProjectInfo, ApiError> {
        Err(ApiError::NotImplemented("Projects::create"))
    }
}

/// Operations on a single project (`/projects/{name}`).
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn get(&self) -> Result<ProjectInfo, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::get"))
    }

    /// The project description, or an empty string.
    async fn description(&self) -> Result<String, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::description"))
    }

    async fn branches(&self, _options: &ListOptions) -> Result<Vec<BranchInfo>, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::branches"))
    }

    async fn tags(&self, _options: &ListOptions) -> Result<Vec<TagInfo>, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::tags"))
    }

    /// Direct child projects.
    async fn children(&self) -> Result<Vec<ProjectInfo>, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::children"))
    }

    fn branch(&self, _name: &str) -> Result<Box<dyn BranchApi>, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::branch"))
    }

    fn commit(&self, _commit: &str) -> Result<Box<dyn CommitApi>, ApiError> {
        Err(ApiError::NotImplemented("ProjectApi::commit"))
    }
}

/// Operations on one branch (`/projects/{name}/branches/{branch}`).
#[async_trait]
pub trait BranchApi: Send + Sync {
    async fn get(&self) -> Result<BranchInfo, ApiError> {
        Err(ApiError::NotImplemented("BranchApi::get"))
    }

    async fn create(&self, _input: &BranchInput) -> Result<BranchInfo, ApiError> {
        Err(ApiError::NotImplemented("BranchApi::create"))
    }

    async fn delete(&self) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("BranchApi::delete"))
    }

    /// Content of `path` at the branch tip.
    async fn file(&self, _path: &str) -> Result<BinaryResult, ApiError> {
        Err(ApiError::NotImplemented("BranchApi::file"))
    }
}

/// Operations on one commit (`/projects/{name}/commits/{commit}`).
#[async_trait]
pub trait CommitApi: Send + Sync {
    async fn get(&self) -> Result<CommitInfo, ApiError> {
        Err(ApiError::NotImplemented("CommitApi::get"))
    }

    /// Branches and tags containing the commit.
    async fn included_in(&self) -> Result<IncludedInInfo, ApiError> {
        Err(ApiError::NotImplemented("CommitApi::included_in"))
    }

    /// Content of `path` at this commit.
    async fn file(&self, _path: &str) -> Result<BinaryResult, ApiError> {
        Err(ApiError::NotImplemented("CommitApi::file"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl Projects for NotImplemented {}

impl ProjectApi for NotImplemented {}

impl BranchApi for NotImplemented {}

impl CommitApi for NotImplemented {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_input_serialization() {
        let input = ProjectInput {
            description: Some("This is a demo project.".into()),
            create_empty_commit: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"description": "This is a demo project.", "create_empty_commit": true})
        );
    }

    #[tokio::test]
    async fn test_stub_fails_everywhere() {
        let stub = NotImplemented;
        assert!(Projects::list(&stub, &ListOptions::new()).await.is_err());
        assert!(Projects::name(&stub, "demo").is_err());
        assert!(Projects::create(&stub, "demo", &ProjectInput::default()).await.is_err());

        let project: &dyn ProjectApi = &stub;
        assert!(project.get().await.is_err());
        assert!(project.description().await.is_err());
        assert!(project.branches(&ListOptions::new()).await.is_err());
        assert!(project.tags(&ListOptions::new()).await.is_err());
        assert!(project.children().await.is_err());
        assert!(project.branch("master").is_err());
        assert!(project.commit("abc").is_err());

        let branch: &dyn BranchApi = &stub;
        assert!(branch.get().await.is_err());
        assert!(branch.create(&BranchInput::default()).await.is_err());
        assert!(branch.delete().await.is_err());
        assert!(branch.file("README").await.is_err());

        let commit: &dyn CommitApi = &stub;
        assert!(matches!(
            commit.get().await,
            Err(ApiError::NotImplemented("CommitApi::get"))
        ));
        assert!(commit.included_in().await.is_err());
        assert!(commit.file("README").await.is_err());
    }
}
