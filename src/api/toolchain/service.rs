//
//  ibm-continuous-delivery
//  api/toolchain/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The CD Toolchain API v2 client.

use super::models::*;
use super::service_url_for_region;
use crate::api::client::{require_non_empty, BaseService, DetailedResponse, RequestDescriptor};
use crate::api::common::ApiError;
use crate::auth::Authenticator;
use crate::config::ServiceSettings;

const TOOLCHAINS: &str = "toolchains";
const TOOLS: &str = "tools";

/// Parameters of `list_toolchains`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListToolchainsParams {
    /// Resource group to list toolchains from (required).
    pub resource_group_id: String,
    /// Page size (1-200).
    pub limit: Option<u32>,
    /// Cursor of the page to fetch.
    pub start: Option<String>,
    /// Only toolchains with exactly this name.
    pub name: Option<String>,
}

impl ListToolchainsParams {
    /// Lists toolchains in `resource_group_id`.
    pub fn new(resource_group_id: impl Into<String>) -> Self {
        Self {
            resource_group_id: resource_group_id.into(),
            ..Default::default()
        }
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page cursor.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Filters by toolchain name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Parameters of `list_tools`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListToolsParams {
    /// Toolchain whose tools are listed.
    pub toolchain_id: String,
    /// Page size (1-200).
    pub limit: Option<u32>,
    /// Cursor of the page to fetch.
    pub start: Option<String>,
}

impl ListToolsParams {
    /// Lists the tools of `toolchain_id`.
    pub fn new(toolchain_id: impl Into<String>) -> Self {
        Self {
            toolchain_id: toolchain_id.into(),
            ..Default::default()
        }
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page cursor.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

/// Client for the CD Toolchain API v2.
///
/// # Example
///
/// ```rust,no_run
/// use ibm_continuous_delivery::api::toolchain::{CdToolchainV2, ToolchainEventData, ToolchainEventPrototype};
///
/// # async fn example() -> Result<(), ibm_continuous_delivery::api::ApiError> {
/// let service = CdToolchainV2::from_config()?;
/// let event = ToolchainEventPrototype::with_data(
///     "Deployment",
///     "Deployed build 42",
///     ToolchainEventData::TextPlain { content: "ok".to_string() },
/// );
/// let posted = service.create_toolchain_event("toolchain-id", &event).await?;
/// println!("event {}", posted.result.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CdToolchainV2 {
    base: BaseService,
}

impl CdToolchainV2 {
    /// Name used to look the service up in configuration.
    pub const DEFAULT_SERVICE_NAME: &'static str = "cd_toolchain";

    /// The us-south endpoint.
    pub const DEFAULT_SERVICE_URL: &'static str =
        "https://api.us-south.devops.cloud.ibm.com/toolchain/v2";

    /// Creates a client for `service_url`.
    pub fn new(service_url: &str, authenticator: Authenticator) -> Result<Self, ApiError> {
        Ok(Self {
            base: BaseService::new(service_url, authenticator)?,
        })
    }

    /// Wraps an existing request executor.
    pub fn from_base(base: BaseService) -> Self {
        Self { base }
    }

    /// Creates a client from resolved settings.
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ApiError> {
        let url = settings.resolve_url(Self::DEFAULT_SERVICE_URL, service_url_for_region)?;
        Self::new(&url, settings.authenticator()?)
    }

    /// Creates a client from `CD_TOOLCHAIN_*` variables and the config file.
    pub fn from_config() -> Result<Self, ApiError> {
        let settings = ServiceSettings::load(Self::DEFAULT_SERVICE_NAME)?;
        Self::from_settings(&settings)
    }

    /// The underlying request executor.
    pub fn base(&self) -> &BaseService {
        &self.base
    }

    /// Mutable access to the request executor.
    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }

    /// Lists one page of toolchains in a resource group.
    pub async fn list_toolchains(
        &self,
        params: &ListToolchainsParams,
    ) -> Result<DetailedResponse<ToolchainCollection>, ApiError> {
        require_non_empty("resource_group_id", &params.resource_group_id)?;
        let request = RequestDescriptor::get([TOOLCHAINS])
            .query("resource_group_id", &params.resource_group_id)
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref())
            .query_opt("name", params.name.as_deref());
        self.base.request(request).await
    }

    /// Creates a toolchain.
    pub async fn create_toolchain(
        &self,
        toolchain: &ToolchainPrototype,
    ) -> Result<DetailedResponse<Toolchain>, ApiError> {
        require_non_empty("name", &toolchain.name)?;
        require_non_empty("resource_group_id", &toolchain.resource_group_id)?;
        let request = RequestDescriptor::post([TOOLCHAINS]).json(toolchain)?;
        self.base.request(request).await
    }

    /// Gets a toolchain.
    pub async fn get_toolchain_by_id(
        &self,
        toolchain_id: &str,
    ) -> Result<DetailedResponse<Toolchain>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        self.base
            .request(RequestDescriptor::get([TOOLCHAINS, toolchain_id]))
            .await
    }

    /// Updates a toolchain with a merge-patch.
    pub async fn update_toolchain(
        &self,
        toolchain_id: &str,
        patch: &ToolchainPatch,
    ) -> Result<DetailedResponse<Toolchain>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        let request = RequestDescriptor::patch([TOOLCHAINS, toolchain_id]).merge_patch(patch)?;
        self.base.request(request).await
    }

    /// Deletes a toolchain and its tool integrations.
    pub async fn delete_toolchain(
        &self,
        toolchain_id: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        self.base
            .request_empty(RequestDescriptor::delete([TOOLCHAINS, toolchain_id]))
            .await
    }

    /// Sends a custom event to the toolchain's Event Notifications integrations.
    pub async fn create_toolchain_event(
        &self,
        toolchain_id: &str,
        event: &ToolchainEventPrototype,
    ) -> Result<DetailedResponse<ToolchainEventPost>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        require_non_empty("title", &event.title)?;
        let request = RequestDescriptor::post([TOOLCHAINS, toolchain_id, "events"]).json(event)?;
        self.base.request(request).await
    }

    /// Lists one page of tool integrations.
    pub async fn list_tools(
        &self,
        params: &ListToolsParams,
    ) -> Result<DetailedResponse<ToolCollection>, ApiError> {
        require_non_empty("toolchain_id", &params.toolchain_id)?;
        let request = RequestDescriptor::get([TOOLCHAINS, params.toolchain_id.as_str(), TOOLS])
            .query_opt("limit", params.limit)
            .query_opt("start", params.start.as_deref());
        self.base.request(request).await
    }

    /// Adds a tool integration.
    pub async fn create_tool(
        &self,
        toolchain_id: &str,
        tool: &ToolPrototype,
    ) -> Result<DetailedResponse<Tool>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        require_non_empty("tool_type_id", &tool.tool_type_id)?;
        let request = RequestDescriptor::post([TOOLCHAINS, toolchain_id, TOOLS]).json(tool)?;
        self.base.request(request).await
    }

    /// Gets a tool integration.
    pub async fn get_tool_by_id(
        &self,
        toolchain_id: &str,
        tool_id: &str,
    ) -> Result<DetailedResponse<Tool>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        require_non_empty("tool_id", tool_id)?;
        self.base
            .request(RequestDescriptor::get([TOOLCHAINS, toolchain_id, TOOLS, tool_id]))
            .await
    }

    /// Updates a tool integration with a merge-patch.
    pub async fn update_tool(
        &self,
        toolchain_id: &str,
        tool_id: &str,
        patch: &ToolPatch,
    ) -> Result<DetailedResponse<Tool>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        require_non_empty("tool_id", tool_id)?;
        let request =
            RequestDescriptor::patch([TOOLCHAINS, toolchain_id, TOOLS, tool_id]).merge_patch(patch)?;
        self.base.request(request).await
    }

    /// Removes a tool integration.
    pub async fn delete_tool(
        &self,
        toolchain_id: &str,
        tool_id: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("toolchain_id", toolchain_id)?;
        require_non_empty("tool_id", tool_id)?;
        self.base
            .request_empty(RequestDescriptor::delete([TOOLCHAINS, toolchain_id, TOOLS, tool_id]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn service(url: &str) -> CdToolchainV2 {
        CdToolchainV2::new(url, Authenticator::bearer("tok")).unwrap()
    }

    #[tokio::test]
    async fn test_list_toolchains_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/toolchains")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("resource_group_id".into(), "rg1".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("name".into(), "prod".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"total_count":1,"limit":10,"toolchains":[{"id":"tc1","name":"prod"}]}"#)
            .create_async()
            .await;

        let params = ListToolchainsParams::new("rg1").limit(10).name("prod");
        let toolchains = service(&server.url())
            .list_toolchains(&params)
            .await
            .unwrap()
            .into_result();
        assert_eq!(toolchains.toolchains[0].id, "tc1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_toolchains_requires_resource_group() {
        let err = service("http://127.0.0.1:9")
            .list_toolchains(&ListToolchainsParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("resource_group_id")));
    }

    #[tokio::test]
    async fn test_create_toolchain_event() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/toolchains/tc1/events")
            .match_body(Matcher::Json(json!({
                "title": "build",
                "description": "done",
                "content_type": "text/plain",
                "data": {"text_plain": {"content": "ok"}}
            })))
            .with_status(202)
            .with_body(r#"{"id":"evt-1"}"#)
            .create_async()
            .await;

        let event = ToolchainEventPrototype::with_data(
            "build",
            "done",
            ToolchainEventData::TextPlain {
                content: "ok".to_string(),
            },
        );
        let posted = service(&server.url())
            .create_toolchain_event("tc1", &event)
            .await
            .unwrap();
        assert_eq!(posted.status, 202);
        assert_eq!(posted.result.id, "evt-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_tool_crud_paths() {
        let mut server = mockito::Server::new_async().await;
        let get = server
            .mock("GET", "/toolchains/tc1/tools/t1")
            .with_status(200)
            .with_body(
                r#"{"id":"t1","tool_type_id":"pipeline","name":"ci",
                    "parameters":{"type":"tekton"},"state":"configured"}"#,
            )
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/toolchains/tc1/tools/t1")
            .match_header("content-type", "application/merge-patch+json")
            .match_body(Matcher::Json(json!({"name": "ci-renamed"})))
            .with_status(200)
            .with_body(r#"{"id":"t1","tool_type_id":"pipeline","name":"ci-renamed"}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/toolchains/tc1/tools/t1")
            .with_status(204)
            .create_async()
            .await;

        let service = service(&server.url());
        let tool = service.get_tool_by_id("tc1", "t1").await.unwrap().into_result();
        assert_eq!(tool.parameters["type"], "tekton");
        assert_eq!(tool.state.as_deref(), Some("configured"));

        let renamed = service
            .update_tool(
                "tc1",
                "t1",
                &ToolPatch {
                    name: Some("ci-renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .into_result();
        assert_eq!(renamed.name.as_deref(), Some("ci-renamed"));

        assert_eq!(service.delete_tool("tc1", "t1").await.unwrap().status, 204);
        get.assert_async().await;
        patch.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_mapped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/toolchains/missing")
            .with_status(404)
            .with_body(r#"{"errors":[{"code":"not_found","message":"Toolchain not found"}]}"#)
            .create_async()
            .await;

        let err = service(&server.url())
            .get_toolchain_by_id("missing")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Toolchain not found"));
        assert_eq!(err.status_code(), Some(404));
    }
}
