//
//  ibm-continuous-delivery
//  api/toolchain/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Toolchain API types and data structures.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pagination link of a toolchain or tool collection.
///
/// `start` is the cursor of the linked page; `first` links carry none. A
/// `next` link may carry only `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// URL of the linked page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Cursor of the linked page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// A toolchain: a set of tool integrations in one resource group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolchain {
    /// Toolchain ID.
    pub id: String,
    /// Toolchain name.
    pub name: String,
    /// Toolchain description.
    #[serde(default)]
    pub description: String,
    /// Account ID.
    #[serde(default)]
    pub account_id: Option<String>,
    /// IBM Cloud location.
    #[serde(default)]
    pub location: Option<String>,
    /// Resource group ID.
    #[serde(default)]
    pub resource_group_id: Option<String>,
    /// Toolchain CRN.
    #[serde(default)]
    pub crn: Option<String>,
    /// API URL of this toolchain.
    #[serde(default)]
    pub href: Option<String>,
    /// Dashboard URL of this toolchain.
    #[serde(default)]
    pub ui_href: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Identity that created the toolchain.
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Response of `GET /toolchains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainCollection {
    /// Total number of toolchains matching the query.
    #[serde(default)]
    pub total_count: u64,
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u32,
    /// Link to the first page.
    #[serde(default)]
    pub first: Option<PaginationLink>,
    /// Link to the previous page.
    #[serde(default)]
    pub previous: Option<PaginationLink>,
    /// Link to the next page; absent on the last page.
    #[serde(default)]
    pub next: Option<PaginationLink>,
    /// Link to the last page.
    #[serde(default)]
    pub last: Option<PaginationLink>,
    /// Toolchains on this page.
    #[serde(default)]
    pub toolchains: Vec<Toolchain>,
}

/// Body of `POST /toolchains`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolchainPrototype {
    /// Toolchain name.
    pub name: String,
    /// Resource group to create the toolchain in.
    pub resource_group_id: String,
    /// Toolchain description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolchainPrototype {
    /// A toolchain named `name` in `resource_group_id`.
    pub fn new(name: impl Into<String>, resource_group_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_group_id: resource_group_id.into(),
            description: None,
        }
    }
}

/// Merge-patch body of `PATCH /toolchains/{toolchain_id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolchainPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload of a toolchain event, in one of the two supported encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ToolchainEventData {
    /// JSON payload, sent with `content_type` `application/json`.
    #[serde(rename = "application_json")]
    ApplicationJson {
        /// The JSON document.
        content: Value,
    },
    /// Text payload, sent with `content_type` `text/plain`.
    #[serde(rename = "text_plain")]
    TextPlain {
        /// The text.
        content: String,
    },
}

impl ToolchainEventData {
    /// The `content_type` matching this payload.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::ApplicationJson { .. } => "application/json",
            Self::TextPlain { .. } => "text/plain",
        }
    }
}

/// Body of `POST /toolchains/{toolchain_id}/events`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolchainEventPrototype {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// `application/json`, `text/plain` or `none`.
    pub content_type: String,
    /// Event payload; omitted when `content_type` is `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ToolchainEventData>,
}

impl ToolchainEventPrototype {
    /// An event carrying `data`, with the matching content type.
    pub fn with_data(
        title: impl Into<String>,
        description: impl Into<String>,
        data: ToolchainEventData,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content_type: data.content_type().to_string(),
            data: Some(data),
        }
    }

    /// An event without payload.
    pub fn without_data(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content_type: "none".to_string(),
            data: None,
        }
    }
}

/// Response of `POST /toolchains/{toolchain_id}/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainEventPost {
    /// Event ID.
    pub id: String,
}

/// Service-side references of a tool integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolReferent {
    /// Dashboard URL of the integrated tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_href: Option<String>,
    /// API URL of the integrated tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_href: Option<String>,
}

/// A tool integration bound to a toolchain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool integration ID.
    pub id: String,
    /// Tool type ID, e.g. `pipeline` or `githubconsolidated`.
    pub tool_type_id: String,
    /// Tool integration name.
    #[serde(default)]
    pub name: Option<String>,
    /// Resource group ID.
    #[serde(default)]
    pub resource_group_id: Option<String>,
    /// Tool integration CRN.
    #[serde(default)]
    pub crn: Option<String>,
    /// Owning toolchain ID.
    #[serde(default)]
    pub toolchain_id: Option<String>,
    /// Owning toolchain CRN.
    #[serde(default)]
    pub toolchain_crn: Option<String>,
    /// API URL of this tool integration.
    #[serde(default)]
    pub href: Option<String>,
    /// Links to the integrated tool.
    #[serde(default)]
    pub referent: Option<ToolReferent>,
    /// Tool type specific parameters.
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,
    /// Integration state: `configured`, `configuring`, `misconfigured` or `unconfigured`.
    #[serde(default)]
    pub state: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `GET /toolchains/{toolchain_id}/tools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCollection {
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u32,
    /// Total number of tools in the toolchain.
    #[serde(default)]
    pub total_count: u64,
    /// Link to the first page.
    #[serde(default)]
    pub first: Option<PaginationLink>,
    /// Link to the previous page.
    #[serde(default)]
    pub previous: Option<PaginationLink>,
    /// Link to the next page; absent on the last page.
    #[serde(default)]
    pub next: Option<PaginationLink>,
    /// Link to the last page.
    #[serde(default)]
    pub last: Option<PaginationLink>,
    /// Tools on this page.
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Body of `POST /toolchains/{toolchain_id}/tools`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolPrototype {
    /// Tool type ID.
    pub tool_type_id: String,
    /// Tool integration name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool type specific parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
}

impl ToolPrototype {
    /// A tool of `tool_type_id` with no parameters.
    pub fn new(tool_type_id: impl Into<String>) -> Self {
        Self {
            tool_type_id: tool_type_id.into(),
            ..Default::default()
        }
    }

    /// Sets the integration name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds one parameter.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Merge-patch body of `PATCH /toolchains/{toolchain_id}/tools/{tool_id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New tool type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_type_id: Option<String>,
    /// Parameters to merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toolchain_collection_decodes_links() {
        let body = json!({
            "total_count": 3,
            "limit": 2,
            "first": {"href": "https://host/toolchains?limit=2&resource_group_id=rg"},
            "next": {"start": "tc3", "href": "https://host/toolchains?limit=2&start=tc3"},
            "last": {"start": "tc3", "href": "https://host/toolchains?limit=2&start=tc3"},
            "toolchains": [
                {"id": "tc1", "name": "one", "description": "", "created_at": "2024-01-01T00:00:00Z"},
                {"id": "tc2", "name": "two"}
            ]
        });

        let collection: ToolchainCollection = serde_json::from_value(body).unwrap();
        assert_eq!(collection.total_count, 3);
        assert_eq!(collection.toolchains.len(), 2);
        assert_eq!(collection.first.unwrap().start, None);
        assert_eq!(collection.next.unwrap().start.as_deref(), Some("tc3"));
        assert!(collection.previous.is_none());
    }

    #[test]
    fn test_event_prototype_shapes() {
        let event = ToolchainEventPrototype::with_data(
            "deploy",
            "deployed to prod",
            ToolchainEventData::ApplicationJson {
                content: json!({"version": "1.2.3"}),
            },
        );
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "title": "deploy",
                "description": "deployed to prod",
                "content_type": "application/json",
                "data": {"application_json": {"content": {"version": "1.2.3"}}}
            })
        );

        let bare = ToolchainEventPrototype::without_data("ping", "no payload");
        let value = serde_json::to_value(&bare).unwrap();
        assert_eq!(value["content_type"], "none");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_tool_prototype_parameters() {
        let tool = ToolPrototype::new("draservicebroker")
            .name("dra")
            .parameter("enabled", true);
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({"tool_type_id": "draservicebroker", "name": "dra", "parameters": {"enabled": true}})
        );
    }
}
