//
//  gerrit-rest-client
//  api/changes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # REST-backed Change Handles
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST   /changes/
//! GET        /changes/{id}
//! GET        /changes/{id}/detail
//! POST       /changes/{id}/abandon
//! POST       /changes/{id}/restore
//! GET/PUT/DELETE /changes/{id}/topic
//! GET        /changes/{id}/reviewers/
//! POST       /changes/{id}/revisions/{rev}/review
//! POST       /changes/{id}/revisions/{rev}/submit
//! GET        /changes/{id}/revisions/{rev}/files/
//! GET        /changes/{id}/revisions/{rev}/commit
//! GET        /changes/{id}/revisions/{rev}/files/{path}/content
//! GET        /changes/{id}/revisions/{rev}/files/{path}/diff
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gerrit_rest_client::api::{GerritClient, changes::ChangesRestClient};
//! use gerrit_rest_client::extensions::changes::Changes;
//!
//! # async fn example() -> Result<(), gerrit_rest_client::api::common::ApiError> {
//! let changes = ChangesRestClient::new(Arc::new(GerritClient::new("https://review.example.com")?));
//! let content = changes
//!     .id("myProject~master~I8473b95934b5732ac55d26311a706c9c2bde9940")?
//!     .current()?
//!     .file("src/main.rs")?
//!     .content()
//!     .await?;
//! println!("{}", content.as_string()?);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::common::{ApiError, ListOptions};
use super::endpoint::Resource;
use super::parser;
use super::plugins::VerifyStatusRestClient;
use super::transport::{ResourcePath, Transport};
use crate::extensions::changes::{
    AbandonInput, ChangeApi, ChangeInput, Changes, FileApi, RestoreInput, ReviewInput, RevisionApi,
    SubmitInput, TopicInput,
};
use crate::extensions::common::{
    AccountInfo, BinaryResult, ChangeInfo, CommitInfo, DiffInfo, FileInfo, ReviewResult,
};
use crate::extensions::plugins::VerifyStatusApi;

/// `/changes/`
#[derive(Debug, Clone)]
pub struct ChangesRestClient {
    root: Resource,
}

impl ChangesRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("changes")),
        }
    }
}

#[async_trait]
impl Changes for ChangesRestClient {
    async fn query(&self, query: &str, options: &ListOptions) -> Result<Vec<ChangeInfo>, ApiError> {
        let mut request = self.root.list();
        if !query.is_empty() {
            request = request.query("q", query);
        }
        self.root.fetch(request.queries(options.to_query())).await
    }

    fn id(&self, id: &str) -> Result<Box<dyn ChangeApi>, ApiError> {
        Ok(Box::new(ChangeApiRestClient {
            resource: self.root.child(id),
        }))
    }

    async fn create(&self, input: &ChangeInput) -> Result<ChangeInfo, ApiError> {
        let request = self.root.post(&[""]).json(input)?;
        self.root.fetch(request).await
    }
}

/// `/changes/{id}`
#[derive(Debug, Clone)]
pub struct ChangeApiRestClient {
    resource: Resource,
}

#[async_trait]
impl ChangeApi for ChangeApiRestClient {
    async fn get(&self) -> Result<ChangeInfo, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn detail(&self) -> Result<ChangeInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["detail"])).await
    }

    async fn abandon(&self, input: &AbandonInput) -> Result<ChangeInfo, ApiError> {
        let request = self.resource.post(&["abandon"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn restore(&self, input: &RestoreInput) -> Result<ChangeInfo, ApiError> {
        let request = self.resource.post(&["restore"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn topic(&self) -> Result<String, ApiError> {
        // No topic comes back as an empty body.
        let topic: Option<String> = self.resource.fetch(self.resource.get(&["topic"])).await?;
        Ok(topic.unwrap_or_default())
    }

    async fn set_topic(&self, topic: &str) -> Result<(), ApiError> {
        let input = TopicInput {
            topic: Some(topic.to_string()),
        };
        let request = self.resource.put(&["topic"]).json(&input)?;
        self.resource.execute(request).await
    }

    async fn delete_topic(&self) -> Result<(), ApiError> {
        self.resource.execute(self.resource.delete(&["topic"])).await
    }

    async fn list_reviewers(&self) -> Result<Vec<AccountInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&["reviewers", ""])).await
    }

    fn revision(&self, revision: &str) -> Result<Box<dyn RevisionApi>, ApiError> {
        Ok(Box::new(RevisionApiRestClient {
            resource: self.resource.child("revisions").child(revision),
        }))
    }
}

/// `/changes/{id}/revisions/{revision}`
#[derive(Debug, Clone)]
pub struct RevisionApiRestClient {
    resource: Resource,
}

#[async_trait]
impl RevisionApi for RevisionApiRestClient {
    async fn review(&self, input: &ReviewInput) -> Result<ReviewResult, ApiError> {
        let request = self.resource.post(&["review"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn submit(&self, input: &SubmitInput) -> Result<ChangeInfo, ApiError> {
        let request = self.resource.post(&["submit"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn files(&self) -> Result<BTreeMap<String, FileInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&["files", ""])).await
    }

    async fn commit(&self) -> Result<CommitInfo, ApiError> {
        let raw = self.resource.send(self.resource.get(&["commit"])).await?;
        parser::parse_single_commit_info(&raw)
    }

    fn file(&self, path: &str) -> Result<Box<dyn FileApi>, ApiError> {
        Ok(Box::new(FileApiRestClient {
            resource: self.resource.child("files").child(path),
        }))
    }

    fn verify_status(&self) -> Result<Box<dyn VerifyStatusApi>, ApiError> {
        Ok(Box::new(VerifyStatusRestClient::new(&self.resource)))
    }
}

/// `/changes/{id}/revisions/{revision}/files/{path}`
#[derive(Debug, Clone)]
pub struct FileApiRestClient {
    resource: Resource,
}

#[async_trait]
impl FileApi for FileApiRestClient {
    async fn content(&self) -> Result<BinaryResult, ApiError> {
        let raw = self.resource.send(self.resource.get(&["content"])).await?;
        parser::parse_base64(&raw)
    }

    async fn diff(&self) -> Result<DiffInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["diff"])).await
    }

    async fn diff_against(&self, base: &str) -> Result<DiffInfo, ApiError> {
        let request = self.resource.get(&["diff"]).query("base", base);
        self.resource.fetch(request).await
    }
}
