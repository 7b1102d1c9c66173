//
//  gerrit-rest-client
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # REST-backed Project Handles
//!
//! Projects, their branches, and individual commits. Project names may
//! contain slashes (`platform/build`); they are sent as a single encoded
//! path segment.
//!
//! ## API Endpoints
//!
//! ```text
//! GET        /projects/
//! PUT        /projects/{name}
//! GET        /projects/{name}
//! GET        /projects/{name}/description
//! GET        /projects/{name}/branches/
//! GET        /projects/{name}/tags/
//! GET        /projects/{name}/children/
//! GET/PUT/DELETE /projects/{name}/branches/{branch}
//! GET        /projects/{name}/branches/{branch}/files/{path}/content
//! GET        /projects/{name}/commits/{commit}
//! GET        /projects/{name}/commits/{commit}/in
//! GET        /projects/{name}/commits/{commit}/files/{path}/content
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::common::{ApiError, ListOptions};
use super::endpoint::Resource;
use super::parser;
use super::transport::{ResourcePath, Transport};
use crate::extensions::common::{
    BinaryResult, BranchInfo, CommitInfo, IncludedInInfo, ProjectInfo, TagInfo,
};
use crate::extensions::projects::{
    BranchApi, BranchInput, CommitApi, ProjectApi, ProjectInput, Projects,
};

/// `/projects/`
#[derive(Debug, Clone)]
pub struct ProjectsRestClient {
    root: Resource,
}

impl ProjectsRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("projects")),
        }
    }
}

#[async_trait]
impl Projects for ProjectsRestClient {
    async fn list(&self, options: &ListOptions) -> Result<BTreeMap<String, ProjectInfo>, ApiError> {
        let request = self.root.list().queries(options.to_query());
        self.root.fetch(request).await
    }

    fn name(&self, name: &str) -> Result<Box<dyn ProjectApi>, ApiError> {
        Ok(Box::new(ProjectApiRestClient {
            resource: self.root.child(name),
        }))
    }

    async fn create(&self, name: &str, input: &ProjectInput) -> Result<ProjectInfo, ApiError> {
        let request = self.root.put(&[name]).json(input)?;
        self.root.fetch(request).await
    }
}

/// `/projects/{name}`
#[derive(Debug, Clone)]
pub struct ProjectApiRestClient {
    resource: Resource,
}

#[async_trait]
impl ProjectApi for ProjectApiRestClient {
    async fn get(&self) -> Result<ProjectInfo, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn description(&self) -> Result<String, ApiError> {
        let description: Option<String> =
            self.resource.fetch(self.resource.get(&["description"])).await?;
        Ok(description.unwrap_or_default())
    }

    async fn branches(&self, options: &ListOptions) -> Result<Vec<BranchInfo>, ApiError> {
        let request = self
            .resource
            .get(&["branches", ""])
            .queries(options.to_ref_query());
        self.resource.fetch(request).await
    }

    async fn tags(&self, options: &ListOptions) -> Result<Vec<TagInfo>, ApiError> {
        let request = self
            .resource
            .get(&["tags", ""])
            .queries(options.to_ref_query());
        self.resource.fetch(request).await
    }

    async fn children(&self) -> Result<Vec<ProjectInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&["children", ""])).await
    }

    fn branch(&self, name: &str) -> Result<Box<dyn BranchApi>, ApiError> {
        Ok(Box::new(BranchApiRestClient {
            resource: self.resource.child("branches").child(name),
        }))
    }

    fn commit(&self, commit: &str) -> Result<Box<dyn CommitApi>, ApiError> {
        Ok(Box::new(CommitApiRestClient {
            resource: self.resource.child("commits").child(commit),
        }))
    }
}

/// `/projects/{name}/branches/{branch}`
#[derive(Debug, Clone)]
pub struct BranchApiRestClient {
    resource: Resource,
}

#[async_trait]
impl BranchApi for BranchApiRestClient {
    async fn get(&self) -> Result<BranchInfo, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn create(&self, input: &BranchInput) -> Result<BranchInfo, ApiError> {
        let request = self.resource.put(&[]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn delete(&self) -> Result<(), ApiError> {
        self.resource.execute(self.resource.delete(&[])).await
    }

    async fn file(&self, path: &str) -> Result<BinaryResult, ApiError> {
        let raw = self
            .resource
            .send(self.resource.get(&["files", path, "content"]))
            .await?;
        parser::parse_base64(&raw)
    }
}

/// `/projects/{name}/commits/{commit}`
#[derive(Debug, Clone)]
pub struct CommitApiRestClient {
    resource: Resource,
}

#[async_trait]
impl CommitApi for CommitApiRestClient {
    async fn get(&self) -> Result<CommitInfo, ApiError> {
        let raw = self.resource.send(self.resource.get(&[])).await?;
        parser::parse_single_commit_info(&raw)
    }

    async fn included_in(&self) -> Result<IncludedInInfo, ApiError> {
        let raw = self.resource.send(self.resource.get(&["in"])).await?;
        parser::parse_included_in_info(&raw)
    }

    async fn file(&self, path: &str) -> Result<BinaryResult, ApiError> {
        let raw = self
            .resource
            .send(self.resource.get(&["files", path, "content"]))
            .await?;
        parser::parse_base64(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::testing::RecordingTransport;
    use crate::api::transport::{Method, RawResponse};
    use serde_json::json;

    #[tokio::test]
    async fn test_commit_info() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "commit": "abc123",
            "message": "Fix bug"
        }))));

        let commit = ProjectsRestClient::new(transport.clone())
            .name("platform/build")
            .unwrap()
            .commit("abc123")
            .unwrap()
            .get()
            .await
            .unwrap();

        assert_eq!(commit.message.as_deref(), Some("Fix bug"));
        assert_eq!(
            transport.last().path.segments(),
            ["projects", "platform/build", "commits", "abc123"]
        );
    }

    #[tokio::test]
    async fn test_included_in() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "branches": ["master", "branch1"],
            "tags": ["tag1"]
        }))));

        let included = ProjectsRestClient::new(transport.clone())
            .name("gerrit")
            .unwrap()
            .commit("abc123")
            .unwrap()
            .included_in()
            .await
            .unwrap();

        assert_eq!(included.branches, vec!["master", "branch1"]);
        assert_eq!(included.tags, vec!["tag1"]);
        assert_eq!(transport.last().path.to_string(), "/projects/gerrit/commits/abc123/in");
    }

    #[tokio::test]
    async fn test_branches_use_ref_pagination() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!([
            {"ref": "HEAD", "revision": "master"},
            {"ref": "refs/heads/master", "revision": "67ebf73496383c6777035e374d2d664009e2aa5c"}
        ]))));

        let branches = ProjectsRestClient::new(transport.clone())
            .name("gerrit")
            .unwrap()
            .branches(&ListOptions::new().limit(2).start(4))
            .await
            .unwrap();

        assert_eq!(branches[1].git_ref, "refs/heads/master");
        let request = transport.last();
        assert_eq!(request.path.to_string(), "/projects/gerrit/branches/");
        assert!(request.query.contains(&("s".to_string(), "4".to_string())));
    }

    #[tokio::test]
    async fn test_create_project_and_branch() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "id": "MyProject",
            "name": "MyProject",
            "parent": "All-Projects"
        }))));
        transport.respond(Ok(RawResponse::Json(json!({
            "ref": "refs/heads/stable",
            "revision": "76016386a0d8ecc7b6be212424978bb45959d668"
        }))));

        let projects = ProjectsRestClient::new(transport.clone());
        let input = ProjectInput {
            description: Some("demo".into()),
            ..Default::default()
        };
        let project = projects.create("MyProject", &input).await.unwrap();
        assert_eq!(project.parent.as_deref(), Some("All-Projects"));
        assert_eq!(transport.last().method, Method::Put);

        let branch = projects
            .name("MyProject")
            .unwrap()
            .branch("stable")
            .unwrap()
            .create(&BranchInput {
                revision: Some("master".into()),
            })
            .await
            .unwrap();
        assert_eq!(branch.git_ref, "refs/heads/stable");
        assert_eq!(
            transport.last().path.to_string(),
            "/projects/MyProject/branches/stable"
        );
    }

    #[tokio::test]
    async fn test_branch_file_content() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Text("aGVsbG8=".into())));

        let content = ProjectsRestClient::new(transport.clone())
            .name("gerrit")
            .unwrap()
            .branch("master")
            .unwrap()
            .file("docs/README.md")
            .await
            .unwrap();

        assert_eq!(content.as_bytes(), b"hello");
        assert_eq!(
            transport.last().path.segments()[4..],
            ["files", "docs/README.md", "content"]
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_not_swallowed() {
        let transport = RecordingTransport::new();
        transport.respond(Err(ApiError::Http {
            status: 404,
            message: "Not found".into(),
        }));

        let err = ProjectsRestClient::new(transport)
            .name("missing")
            .unwrap()
            .get()
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
