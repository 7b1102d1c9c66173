//
//  gerrit-rest-client
//  api/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! REST-backed group handles.
//!
//! ```text
//! GET  /groups/
//! PUT  /groups/{name}
//! GET  /groups/{id}
//! GET  /groups/{id}/description
//! GET  /groups/{id}/members/
//! POST /groups/{id}/members.add
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::common::{ApiError, ListOptions};
use super::endpoint::Resource;
use super::transport::{ResourcePath, Transport};
use crate::extensions::common::{AccountInfo, GroupInfo};
use crate::extensions::groups::{GroupApi, GroupInput, Groups, MembersInput};

/// `/groups/`
#[derive(Debug, Clone)]
pub struct GroupsRestClient {
    root: Resource,
}

impl GroupsRestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Resource::new(transport, ResourcePath::root("groups")),
        }
    }
}

#[async_trait]
impl Groups for GroupsRestClient {
    async fn list(&self, options: &ListOptions) -> Result<BTreeMap<String, GroupInfo>, ApiError> {
        let request = self.root.list().queries(options.to_query());
        self.root.fetch(request).await
    }

    fn id(&self, id: &str) -> Result<Box<dyn GroupApi>, ApiError> {
        Ok(Box::new(GroupApiRestClient {
            resource: self.root.child(id),
        }))
    }

    async fn create(&self, input: &GroupInput) -> Result<GroupInfo, ApiError> {
        let request = self.root.put(&[input.name.as_str()]).json(input)?;
        self.root.fetch(request).await
    }
}

/// `/groups/{id}`
#[derive(Debug, Clone)]
pub struct GroupApiRestClient {
    resource: Resource,
}

#[async_trait]
impl GroupApi for GroupApiRestClient {
    async fn get(&self) -> Result<GroupInfo, ApiError> {
        self.resource.fetch(self.resource.get(&[])).await
    }

    async fn description(&self) -> Result<String, ApiError> {
        let description: Option<String> =
            self.resource.fetch(self.resource.get(&["description"])).await?;
        Ok(description.unwrap_or_default())
    }

    async fn members(&self) -> Result<Vec<AccountInfo>, ApiError> {
        self.resource.fetch(self.resource.get(&["members", ""])).await
    }

    async fn add_members(&self, members: &[String]) -> Result<Vec<AccountInfo>, ApiError> {
        let input = MembersInput {
            members: members.to_vec(),
        };
        let request = self.resource.post(&["members.add"]).json(&input)?;
        self.resource.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::testing::RecordingTransport;
    use crate::api::transport::{Method, RawResponse};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_groups() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({
            "Administrators": {
                "id": "6a1e70e1a88782771a91808c8af9bbb7a9871389",
                "url": "#/admin/groups/uuid-6a1e70e1a88782771a91808c8af9bbb7a9871389",
                "options": {},
                "description": "Gerrit Site Administrators",
                "group_id": 1
            }
        }))));

        let groups = GroupsRestClient::new(transport.clone())
            .list(&ListOptions::new().prefix("Admin"))
            .await
            .unwrap();

        assert_eq!(groups["Administrators"].group_id, Some(1));
        assert_eq!(
            transport.last().query,
            vec![("p".to_string(), "Admin".to_string())]
        );
    }

    #[tokio::test]
    async fn test_add_members() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!([
            {"_account_id": 1000057, "name": "Jane Roe"},
            {"_account_id": 1000058, "name": "John Doe"}
        ]))));

        let added = GroupsRestClient::new(transport.clone())
            .id("MyProject-Committers")
            .unwrap()
            .add_members(&["jroe".to_string(), "jdoe".to_string()])
            .await
            .unwrap();

        assert_eq!(added.len(), 2);
        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.path.to_string(),
            "/groups/MyProject-Committers/members.add"
        );
        assert_eq!(request.body, Some(json!({"members": ["jroe", "jdoe"]})));
    }

    #[tokio::test]
    async fn test_create_uses_name_in_path() {
        let transport = RecordingTransport::new();
        transport.respond(Ok(RawResponse::Json(json!({"name": "Reviewers", "group_id": 7}))));

        let input = GroupInput {
            name: "Reviewers".into(),
            ..Default::default()
        };
        let group = GroupsRestClient::new(transport.clone())
            .create(&input)
            .await
            .unwrap();

        assert_eq!(group.group_id, Some(7));
        assert_eq!(transport.last().path.to_string(), "/groups/Reviewers");
    }
}
