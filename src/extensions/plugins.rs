//
//  gerrit-rest-client
//  extensions/plugins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Plugin capabilities: the plugin listing and the verify-status plugin.
//!
//! The verify-status plugin stores CI results per revision and exposes them
//! under the plugin-scoped view `verify-status~verifications`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{timestamp, PluginInfo};
use crate::api::common::ApiError;

/// One verification result (a CI job outcome).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInfo {
    /// `1` passed, `-1` failed, `0` neutral.
    pub value: i16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Link to the job run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Non-voting result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstain: Option<bool>,

    /// Whether the job was a rerun.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerun: Option<bool>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub granted: Option<DateTime<Utc>>,
}

/// Request body for reporting verifications, keyed by job name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyInput {
    pub verifications: BTreeMap<String, VerificationInfo>,
}

impl VerifyInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the result of one job.
    pub fn verification(mut self, job: impl Into<String>, info: VerificationInfo) -> Self {
        self.verifications.insert(job.into(), info);
        self
    }
}

/// Verification results of one revision.
#[async_trait]
pub trait VerifyStatusApi: Send + Sync {
    /// Results keyed by verification UUID.
    async fn verifications(&self) -> Result<BTreeMap<String, VerificationInfo>, ApiError> {
        Err(ApiError::NotImplemented("VerifyStatusApi::verifications"))
    }

    /// Reports new results.
    async fn verify(&self, _input: &VerifyInput) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented("VerifyStatusApi::verify"))
    }
}

/// Installed plugins (`/plugins/`).
#[async_trait]
pub trait Plugins: Send + Sync {
    /// Enabled plugins keyed by plugin id.
    async fn list(&self) -> Result<BTreeMap<String, PluginInfo>, ApiError> {
        Err(ApiError::NotImplemented("Plugins::list"))
    }
}

/// Stub whose every operation fails with [`ApiError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

impl VerifyStatusApi for NotImplemented {}

impl Plugins for NotImplemented {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verify_input_serialization() {
        let input = VerifyInput::new().verification(
            "gate-unit-tests",
            VerificationInfo {
                value: 1,
                url: Some("https://ci.example.com/job/1".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"verifications": {"gate-unit-tests": {"value": 1, "url": "https://ci.example.com/job/1"}}})
        );
    }

    #[test]
    fn test_verification_requires_value() {
        assert!(serde_json::from_value::<VerificationInfo>(json!({"name": "job"})).is_err());
    }

    #[tokio::test]
    async fn test_stub_fails_everywhere() {
        let stub = NotImplemented;
        assert!(matches!(
            stub.verifications().await,
            Err(ApiError::NotImplemented("VerifyStatusApi::verifications"))
        ));
        assert!(stub.verify(&VerifyInput::new()).await.is_err());
        assert!(stub.list().await.is_err());
    }
}
