//
//  gerrit-rest-client
//  api/plugins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! REST-backed plugin handles: the plugin listing and the verify-status
//! plugin's revision view.
//!
//! ```text
//! GET  /plugins/
//! GET  /changes/{id}/revisions/{rev}/verify-status~verifications
//! POST /changes/{id}/revisions/{rev}/verify-status~verifications
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::common::ApiError;
use super::endpoint::Resource;
use super::transport::{ResourcePath, Transport};
use crate::extensions::common::PluginInfo;
use crate::extensions::plugins::{Plugins, VerificationInfo, VerifyInput, VerifyStatusApi};

/// Plugin-scoped view name of the verify-status plugin.
pub const VERIFY_STATUS_VIEW: &str = "verify-status~verifications";

/// `/plugins/`
#[derive(Debug, Clone)]
pub struct PluginsRestClient {
    root: Resource,
}

impl PluginsRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("plugins")),
        }
    }
}

#[async_trait]
impl Plugins for PluginsRestClient {
    async fn list(&self) -> Result<BTreeMap<String, PluginInfo>, ApiError> {
        self.root.fetch(self.root.list()).await
    }
}

/// `.../revisions/{rev}/verify-status~verifications`
#[derive(Debug, Clone)]
pub struct VerifyStatusRestClient {
    resource: Resource,
}

impl VerifyStatusRestClient {
    /// Binds the view to a revision resource.
    pub fn new(revision: &Resource) -> Self {
        Self {
            resource: revision.child(VERIFY_STATUS_VIEW),
        }
    }
}

#[async_trait]
impl VerifyStatusApi for VerifyStatusRestClient {
    async fn verifications(&self) -> Result<BTreeMap<String, VerificationInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn verify(&self, input: &VerifyInput) -> Result<(), ApiError> {
        let request = self.resource.post(&[]).json(input)?;
        self.resource.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::changes::ChangesRestClient;
    use crate::api::endpoint::testing::RecordingTransport;
    use crate::api::transport::{Method, RawResponse};
    use crate::extensions::changes::Changes;
    use serde_json::json;

    #[tokio::test]
    async fn test_verifications() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "5081c5e5-e101-43eb-8e38-3e1e6e1a1f6b": {
                "name": "gate-horizon-pep8",
                "url": "https://ci.host.com/jobs/gate-horizon-pep8/1711",
                "value": 1,
                "reporter": "HP CI",
                "granted": "2015-07-23 21:14:36.000000000",
                "category": "cloud server",
                "duration": "15m 23s",
                "abstain": false
            }
        }))));

        let verifications = ChangesRestClient::new(transport.clone())
            .id("1")
            .unwrap()
            .current()
            .unwrap()
            .verify_status()
            .unwrap()
            .verifications()
            .await
            .unwrap();

        let job = &verifications["5081c5e5-e101-43eb-8e38-3e1e6e1a1f6b"];
        assert_eq!(job.value, 1);
        assert_eq!(job.name.as_deref(), Some("gate-horizon-pep8"));
        assert!(job.granted.is_some());
        assert_eq!(
            transport.last().path.to_string(),
            "/changes/1/revisions/current/verify-status~verifications"
        );
    }

    #[tokio::test]
    async fn test_verify_posts_input() {
        let transport = RecordingTransport::new();
        let input = VerifyInput::new().verification(
            "gate-horizon-python27",
            VerificationInfo {
                value: -1,
                url: Some("https://ci.host.com/jobs/1".into()),
                ..Default::default()
            },
        );

        ChangesRestClient::new(transport.clone())
            .id("1")
            .unwrap()
            .revision("2")
            .unwrap()
            .verify_status()
            .unwrap()
            .verify(&input)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(json!({
                "verifications": {
                    "gate-horizon-python27": {"value": -1, "url": "https://ci.host.com/jobs/1"}
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_list_plugins() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "delete-project": {
                "id": "delete-project",
                "index_url": "plugins/delete-project/",
                "version": "2.9-SNAPSHOT"
            }
        }))));

        let plugins = PluginsRestClient::new(transport.clone()).list().await.unwrap();
        assert_eq!(plugins["delete-project"].version.as_deref(), Some("2.9-SNAPSHOT"));
        assert_eq!(transport.last().path.to_string(), "/plugins/");
    }
}
