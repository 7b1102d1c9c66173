//
//  gerrit-rest-client
//  api/accounts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! REST-backed account handles.
//!
//! ```text
//! GET    /accounts/?q={query}
//! GET    /accounts/{id}
//! GET    /accounts/{id}/preferences
//! PUT    /accounts/{id}/preferences
//! GET    /accounts/{id}/preferences.diff
//! PUT    /accounts/{id}/starred.changes/{change}
//! DELETE /accounts/{id}/starred.changes/{change}
//! GET    /accounts/{id}/emails
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use super::common::{ApiError, ListOptions};
use super::endpoint::Resource;
use super::transport::{ResourcePath, Transport};
use crate::extensions::accounts::{AccountApi, Accounts};
use crate::extensions::common::{AccountInfo, EmailInfo};
use crate::extensions::preferences::{DiffPreferencesInfo, GeneralPreferencesInfo};

/// `/accounts/`
#[derive(Debug, Clone)]
pub struct AccountsRestClient {
    root: Resource,
}

impl AccountsRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("accounts")),
        }
    }
}

#[async_trait]
impl Accounts for AccountsRestClient {
    fn id(&self, id: &str) -> Result<Box<dyn AccountApi>, ApiError> {
        Ok(Box::new(AccountApiRestClient {
            resource: self.root.child(id),
        }))
    }

    fn self_account(&self) -> Result<Box<dyn AccountApi>, ApiError> {
        self.id("self")
    }

    async fn query(&self, query: &str, options: &ListOptions) -> Result<Vec<AccountInfo>, ApiError> {
        let request = self
            .root
            .list()
            .query("q", query)
            .queries(options.to_query());
        self.root.fetch(request).await
    }
}

/// `/accounts/{id}`
#[derive(Debug, Clone)]
pub struct AccountApiRestClient {
    resource: Resource,
}

#[async_trait]
impl AccountApi for AccountApiRestClient {
    async fn get(&self) -> Result<AccountInfo, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn get_preferences(&self) -> Result<GeneralPreferencesInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["preferences"])).await
    }

    async fn set_preferences(
        &self,
        input: &GeneralPreferencesInfo,
    ) -> Result<GeneralPreferencesInfo, ApiError> {
        let request = self.resource.put(&["preferences"]).json(input)?;
        self.resource.fetch(request).await
    }

    async fn get_diff_preferences(&self) -> Result<DiffPreferencesInfo, ApiError> {
        self.resource.fetch(self.resource.get(&["preferences.diff"])).await
    }

    async fn star_change(&self, change_id: &str) -> Result<(), ApiError> {
        let request = self.resource.put(&["starred.changes", change_id]);
        self.resource.execute(request).await
    }

    async fn unstar_change(&self, change_id: &str) -> Result<(), ApiError> {
        let request = self.resource.delete(&["starred.changes", change_id]);
        self.resource.execute(request).await
    }

    async fn get_emails(&self) -> Result<Vec<EmailInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&["emails"])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::testing::RecordingTransport;
    use crate::api::transport::{Method, RawResponse};
    use serde_json::json;

    #[tokio::test]
    async fn test_self_account() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "_account_id": 1000096,
            "name": "John Doe",
            "email": "john.doe@example.com",
            "username": "john"
        }))));

        let account = AccountsRestClient::new(transport.clone())
            .self_account()
            .unwrap()
            .get()
            .await
            .unwrap();

        assert_eq!(account.account_id, Some(1000096));
        assert_eq!(account.username.as_deref(), Some("john"));
        assert_eq!(transport.last().path.to_string(), "/accounts/self");
    }

    #[tokio::test]
    async fn test_query_parameters() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!([]))));

        let accounts = AccountsRestClient::new(transport.clone())
            .query("name:john", &ListOptions::new().limit(5))
            .await
            .unwrap();

        assert!(accounts.is_empty());
        let request = transport.last();
        assert_eq!(request.path.to_string(), "/accounts/");
        assert_eq!(
            request.query,
            vec![
                ("q".to_string(), "name:john".to_string()),
                ("n".to_string(), "5".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_star_and_unstar() {
        let transport = RecordingTransport::new();
        let account = AccountsRestClient::new(transport.clone()).id("jdoe").unwrap();

        account
            .star_change("myProject~master~I8473b95934b5732ac55d26311a706c9c2bde9940")
            .await
            .unwrap();
        account.unstar_change("42").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(
            requests[0].path.segments()[3],
            "myProject~master~I8473b95934b5732ac55d26311a706c9c2bde9940"
        );
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].path.to_string(), "/accounts/jdoe/starred.changes/42");
    }

    #[tokio::test]
    async fn test_set_preferences_sends_only_set_fields() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({"changes_per_page": 50}))));

        let input = GeneralPreferencesInfo {
            changes_per_page: Some(50),
            ..Default::default()
        };
        let prefs = AccountsRestClient::new(transport.clone())
            .self_account()
            .unwrap()
            .set_preferences(&input)
            .await
            .unwrap();

        assert_eq!(prefs.changes_per_page, Some(50));
        assert_eq!(transport.last().body, Some(json!({"changes_per_page": 50})));
    }
}
