//
//  gerrit-rest-client
//  extensions/common.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Typed Results
//!
//! Plain records populated by deserializing Gerrit responses. The `serde`
//! derive on each type is its shape descriptor:
//!
//! - `Option<T>` fields are optional and skipped on serialization when `None`
//! - `#[serde(default)]` collections may be absent and default to empty
//! - every other field is required
//!
//! Unknown fields are ignored, so newer servers can add fields freely.
//!
//! ## Timestamps
//!
//! Gerrit sends timestamps as `"2013-02-01 09:59:32.126000000"` in UTC.
//! The [`timestamp`] helpers map them to `chrono::DateTime<Utc>` and write
//! them back in the same format.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::ApiError;

/// Serde helpers for Gerrit's timestamp format.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f";
    const READ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    /// Parses a Gerrit timestamp string.
    pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, READ_FORMAT).map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Formats a timestamp the way Gerrit does.
    pub fn format(value: &DateTime<Utc>) -> String {
        value.format(WRITE_FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// The same helpers for `Option<DateTime<Utc>>` fields.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_str(&super::format(value)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|value| super::parse(&value).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// A Gerrit user account.
///
/// Which fields are populated depends on the endpoint and on options such
/// as `DETAILED_ACCOUNTS`; only the numeric id is present everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Numeric account id.
    #[serde(rename = "_account_id", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preferred email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Login username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Display name, if the user configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Set on the last element of a truncated account query.
    #[serde(rename = "_more_accounts", default, skip_serializing_if = "Option::is_none")]
    pub more_accounts: Option<bool>,
}

/// An email address registered on an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInfo {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_confirmation: Option<bool>,
}

/// Author or committer identity of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitPerson {
    pub name: String,
    pub email: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    /// Timezone offset from UTC in minutes.
    pub tz: i32,
}

/// A link to an external web tool (gitweb, CI, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebLinkInfo {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Commit metadata.
///
/// Parent entries carry only `commit` and `subject`, so every field is
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// The commit SHA-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<CommitInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<GitPerson>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<GitPerson>,

    /// First line of the commit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Full commit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

/// Branches and tags that contain a commit.
///
/// Both lists are always sent by the server; a response missing either is
/// malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedInInfo {
    pub branches: Vec<String>,
    pub tags: Vec<String>,

    /// Refs in external systems, keyed by system name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<BTreeMap<String, Vec<String>>>,
}

/// Lifecycle state of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    New,
    Merged,
    Abandoned,
    Draft,
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::New => "NEW",
            Self::Merged => "MERGED",
            Self::Abandoned => "ABANDONED",
            Self::Draft => "DRAFT",
        };
        f.write_str(label)
    }
}

/// A vote on a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalInfo {
    #[serde(flatten)]
    pub account: AccountInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// The state of one review label on a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<AccountInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<AccountInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<AccountInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disliked: Option<AccountInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,

    /// Individual votes (only with `DETAILED_LABELS`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all: Vec<ApprovalInfo>,

    /// Allowed values mapped to their descriptions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

/// Modification summary of a single file in a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// `A`dded, `D`eleted, `R`enamed, `C`opied, `W`ritten; absent means modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_inserted: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_deleted: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_delta: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// One patch set of a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    /// Patch set number.
    #[serde(rename = "_number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    /// Change kind, e.g. `REWORK` or `TRIVIAL_REBASE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<AccountInfo>,

    /// The Git ref of the patch set, e.g. `refs/changes/34/1234/2`.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, FileInfo>>,
}

/// A change (review request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Triplet id `project~branch~Change-Id`.
    pub id: String,
    pub project: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// The `Change-Id` footer value.
    pub change_id: String,
    pub subject: String,
    pub status: ChangeStatus,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub submitted: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mergeable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertions: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<i32>,

    /// Legacy numeric id.
    #[serde(rename = "_number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AccountInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, LabelInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revisions: Option<BTreeMap<String, RevisionInfo>>,

    /// Set on the last element of a truncated change query.
    #[serde(rename = "_more_changes", default, skip_serializing_if = "Option::is_none")]
    pub more_changes: Option<bool>,
}

/// Metadata about one side of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFileMetaInfo {
    pub name: String,
    pub content_type: String,
    pub lines: i32,
}

/// One hunk of a diff. Exactly one of `ab`, `a`/`b`, or `skip` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffContent {
    /// Lines common to both sides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ab: Option<Vec<String>>,

    /// Lines only on side A.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Vec<String>>,

    /// Lines only on side B.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Vec<String>>,

    /// Number of unchanged lines left out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<bool>,
}

/// The diff of one file in a revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_a: Option<DiffFileMetaInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_b: Option<DiffFileMetaInfo>,

    /// `ADDED`, `MODIFIED`, `DELETED`, `RENAMED`, `COPIED` or `REWRITE`.
    pub change_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intraline_status: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diff_header: Vec<String>,

    #[serde(default)]
    pub content: Vec<DiffContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<bool>,
}

/// Outcome of posting a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Labels actually applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, i16>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A project (repository).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// URL-encoded project name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Omitted when the project is a key of a project map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `ACTIVE`, `READ_ONLY` or `HIDDEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Branch name to revision, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

/// A branch of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Full ref name, e.g. `refs/heads/master`.
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// The revision the branch points to.
    pub revision: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_links: Vec<WebLinkInfo>,
}

/// A tag of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    #[serde(rename = "ref")]
    pub git_ref: String,

    pub revision: String,

    /// For annotated tags, the tagged object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagger: Option<GitPerson>,
}

/// Options of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOptionsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to_all: Option<bool>,
}

/// An account group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Group UUID (URL-encoded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GroupOptionsInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<AccountInfo>>,
}

/// An installed plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Authentication settings of the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    /// E.g. `LDAP`, `OAUTH`, `HTTP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_contributor_agreements: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable_account_fields: Option<Vec<String>>,
}

/// Change-related server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeConfigInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_change: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_delay: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_whole_topic: Option<bool>,
}

/// Core Gerrit settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GerritInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_projects: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_users: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_bug_url: Option<String>,
}

/// Server configuration visible to clients (`/config/server/info`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeConfigInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gerrit: Option<GerritInfo>,
}

/// Raw file content returned by the content endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryResult {
    bytes: Vec<u8>,
}

impl BinaryResult {
    /// Wraps decoded bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The decoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the result and returns the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Interprets the content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedResponse`] if the content is not valid UTF-8.
    pub fn as_string(&self) -> Result<String, ApiError> {
        String::from_utf8(self.bytes.clone())
            .map_err(|e| ApiError::MalformedResponse(format!("content is not UTF-8: {e}")))
    }
}
