//
//  gerrit-rest-client
//  extensions/changes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Change Capabilities
//!
//! Contracts for changes, their revisions (patch sets) and the files in a
//! revision, together with the request bodies they accept.
//!
//! ## Handle Hierarchy
//!
//! ```text
//! Changes ── id(change) ──> ChangeApi ── revision(rev) ──> RevisionApi ── file(path) ──> FileApi
//!                                                              └─ verify_status() ──> VerifyStatusApi
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::common::{
    AccountInfo, BinaryResult, ChangeInfo, ChangeStatus, CommitInfo, DiffInfo, FileInfo,
    ReviewResult,
};
use super::plugins::VerifyStatusApi;
use crate::api::common::{ApiError, ListOptions};

/// Request body for abandoning a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbandonInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// `NONE`, `OWNER`, `OWNER_REVIEWERS` or `ALL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
}

/// Request body for restoring an abandoned change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for setting a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// Request body for creating a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInput {
    pub project: String,
    pub branch: String,
    pub subject: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChangeStatus>,

    /// Change the new change is based on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_change: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_branch: Option<bool>,
}

impl ChangeInput {
    /// Creates an input with the required fields only.
    pub fn new(
        project: impl Into<String>,
        branch: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            branch: branch.into(),
            subject: subject.into(),
            topic: None,
            status: None,
            base_change: None,
            new_branch: None,
        }
    }
}

/// An inline comment posted as part of a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i32>,

    pub message: String,

    /// `REVISION` (default) or `PARENT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unresolved: Option<bool>,
}

/// Request body for reviewing a revision.
///
/// # Example
///
/// ```rust
/// use gerrit_rest_client::extensions::changes::ReviewInput;
///
/// let review = ReviewInput::new().message("Looks good").label("Code-Review", 2);
/// assert_eq!(review.labels["Code-Review"], 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, i16>,

    /// Inline comments keyed by file path.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub comments: BTreeMap<String, Vec<CommentInput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
}

impl ReviewInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the review message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Votes `value` on `label`.
    pub fn label(mut self, label: impl Into<String>, value: i16) -> Self {
        self.labels.insert(label.into(), value);
        self
    }

    /// Adds an inline comment on `path`.
    pub fn comment(mut self, path: impl Into<String>, comment: CommentInput) -> Self {
        self.comments.entry(path.into()).or_default().push(comment);
        self
    }
}

/// Request body for submitting a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
}

/// Entry point for change operations (`/changes/`).
#[async_trait]
pub trait Changes: Send + Sync {
    /// Runs a change query, e.g. `status:open owner:self`.
    async fn query(
        &self,
        _query: &str,
        _options: &ListOptions,
    ) -> Result<Vec<ChangeInfo>, ApiError> {
        Err(ApiError::NotImplemented("Changes::query"))
    }

    /// Returns a handle for the change identified by `id`.
    ///
    /// `id` may be the numeric id, the `Change-Id`, or the
    /// `project~branch~Change-Id` triplet.
    fn id(&self, _id: &str) -> Result<Box<dyn ChangeApi>, ApiError> {
        Err(ApiError::NotImplemented("Changes::id"))
    }

    async fn create(&self, _input: &ChangeInput) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("Changes::create"))
    }
}

/// Operations on a single change (`/changes/{id}`).
#[async_trait]
pub trait ChangeApi: Send + Sync {
    async fn get(&self) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::get"))
    }

    /// Like [`get`](Self::get) with labels, reviewers and messages populated.
    async fn detail(&self) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::detail"))
    }

    async fn abandon(&self, _input: &AbandonInput) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::abandon"))
    }

    async fn restore(&self, _input: &RestoreInput) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::restore"))
    }

    /// Returns the topic, or an empty string if none is set.
    async fn topic(&self) -> Result<String, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::topic"))
    }

    async fn set_topic(&self, _topic: &str) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::set_topic"))
    }

    async fn delete_topic(&self) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::delete_topic"))
    }

    async fn list_reviewers(&self) -> Result<Vec<AccountInfo>, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::list_reviewers"))
    }

    /// Returns a handle for a revision: a patch set number, a commit SHA-1,
    /// or `current`.
    fn revision(&self, _revision: &str) -> Result<Box<dyn RevisionApi>, ApiError> {
        Err(ApiError::NotImplemented("ChangeApi::revision"))
    }

    /// Returns a handle for the current revision.
    fn current(&self) -> Result<Box<dyn RevisionApi>, ApiError> {
        self.revision("current")
    }
}

/// Operations on one revision of a change.
#[async_trait]
pub trait RevisionApi: Send + Sync {
    async fn review(&self, _input: &ReviewInput) -> Result<ReviewResult, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::review"))
    }

    async fn submit(&self, _input: &SubmitInput) -> Result<ChangeInfo, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::submit"))
    }

    /// Files modified by the revision, keyed by path.
    async fn files(&self) -> Result<BTreeMap<String, FileInfo>, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::files"))
    }

    async fn commit(&self) -> Result<CommitInfo, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::commit"))
    }

    fn file(&self, _path: &str) -> Result<Box<dyn FileApi>, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::file"))
    }

    /// Verification results reported by the verify-status plugin.
    fn verify_status(&self) -> Result<Box<dyn VerifyStatusApi>, ApiError> {
        Err(ApiError::NotImplemented("RevisionApi::verify_status"))
    }
}

/// File content accessor for one file of a revision.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// The file content at this revision.
    async fn content(&self) -> Result<BinaryResult, ApiError> {
        Err(ApiError::NotImplemented("FileApi::content"))
    }

    /// Diff against the revision's parent.
    async fn diff(&self) -> Result<DiffInfo, ApiError> {
        Err(ApiError::NotImplemented("FileApi::diff"))
    }

    /// Diff against another patch set of the same change.
    async fn diff_against(&self, _base: &str) -> Result<DiffInfo, ApiError> {
        Err(ApiError::NotImplemented("FileApi::diff_against"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl Changes for NotImplemented {}

impl ChangeApi for NotImplemented {}

impl RevisionApi for NotImplemented {}

impl FileApi for NotImplemented {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_input_serialization() {
        let review = ReviewInput::new()
            .message("Some nits")
            .label("Code-Review", -1)
            .comment(
                "src/main.rs",
                CommentInput {
                    line: Some(23),
                    message: "[nit] trailing whitespace".into(),
                    ..Default::default()
                },
            );
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({
                "message": "Some nits",
                "labels": {"Code-Review": -1},
                "comments": {"src/main.rs": [{"line": 23, "message": "[nit] trailing whitespace"}]}
            })
        );
    }

    #[test]
    fn test_change_input_status() {
        let mut input = ChangeInput::new("demo", "master", "Let's support 100% Gerrit workflow");
        input.status = Some(ChangeStatus::New);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["status"], "NEW");
        assert!(value.get("topic").is_none());
    }

    #[test]
    fn test_current_delegates_to_revision() {
        let stub = NotImplemented;
        assert!(matches!(
            ChangeApi::current(&stub),
            Err(ApiError::NotImplemented("ChangeApi::revision"))
        ));
    }

    #[test]
    fn test_stub_fails_everywhere() {
        let stub = NotImplemented;
        tokio_test::block_on(async {
            assert!(Changes::query(&stub, "is:open", &ListOptions::new()).await.is_err());
            assert!(Changes::id(&stub, "1").is_err());
            assert!(stub.create(&ChangeInput::new("p", "b", "s")).await.is_err());

            let change: &dyn ChangeApi = &stub;
            assert!(change.get().await.is_err());
            assert!(change.detail().await.is_err());
            assert!(change.abandon(&AbandonInput::default()).await.is_err());
            assert!(change.restore(&RestoreInput::default()).await.is_err());
            assert!(change.topic().await.is_err());
            assert!(change.set_topic("t").await.is_err());
            assert!(change.delete_topic().await.is_err());
            assert!(change.list_reviewers().await.is_err());

            let revision: &dyn RevisionApi = &stub;
            assert!(revision.review(&ReviewInput::new()).await.is_err());
            assert!(revision.submit(&SubmitInput::default()).await.is_err());
            assert!(revision.files().await.is_err());
            assert!(revision.commit().await.is_err());
            assert!(revision.file("a").is_err());
            assert!(revision.verify_status().is_err());

            let file: &dyn FileApi = &stub;
            assert!(matches!(
                file.content().await,
                Err(ApiError::NotImplemented("FileApi::content"))
            ));
            assert!(file.diff().await.is_err());
            assert!(file.diff_against("1").await.is_err());
        });
    }
}
