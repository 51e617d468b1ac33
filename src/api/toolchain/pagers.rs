//
//  ibm-continuous-delivery
//  api/toolchain/pagers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pager adapters for toolchain and tool listings.
//!
//! Toolchain collections carry the cursor directly in `next.start`. A `next`
//! link without `start` falls back to its href; one with neither ends the
//! listing.

use async_trait::async_trait;

use super::models::{PaginationLink, Tool, ToolCollection, Toolchain, ToolchainCollection};
use super::service::{CdToolchainV2, ListToolchainsParams, ListToolsParams};
use crate::api::common::{ApiError, ContinuationRef, ListOperation, ListParams, Page, Pager};

fn continuation(next: PaginationLink) -> Option<ContinuationRef> {
    match (next.start, next.href) {
        (Some(start), _) => Some(ContinuationRef::Direct(start)),
        (None, Some(href)) => Some(ContinuationRef::Url(href)),
        (None, None) => None,
    }
}

impl From<ToolchainCollection> for Page<Toolchain> {
    fn from(collection: ToolchainCollection) -> Self {
        Page::new(collection.toolchains, collection.next.and_then(continuation))
    }
}

impl From<ToolCollection> for Page<Tool> {
    fn from(collection: ToolCollection) -> Self {
        Page::new(collection.tools, collection.next.and_then(continuation))
    }
}

impl ListParams for ListToolchainsParams {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn with_start(&self, start: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            ..self.clone()
        }
    }
}

impl ListParams for ListToolsParams {
    fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn with_start(&self, start: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            ..self.clone()
        }
    }
}

/// `list_toolchains` as a [`ListOperation`].
#[derive(Debug, Clone, Copy)]
pub struct ToolchainsList<'a> {
    service: &'a CdToolchainV2,
}

#[async_trait]
impl ListOperation for ToolchainsList<'_> {
    type Params = ListToolchainsParams;
    type Item = Toolchain;

    async fn list_page(&self, params: &ListToolchainsParams) -> Result<Page<Toolchain>, ApiError> {
        let collection = self.service.list_toolchains(params).await?.into_result();
        tracing::debug!(
            count = collection.toolchains.len(),
            total = collection.total_count,
            "fetched toolchains page"
        );
        Ok(collection.into())
    }
}

/// `list_tools` as a [`ListOperation`].
#[derive(Debug, Clone, Copy)]
pub struct ToolsList<'a> {
    service: &'a CdToolchainV2,
}

#[async_trait]
impl ListOperation for ToolsList<'_> {
    type Params = ListToolsParams;
    type Item = Tool;

    async fn list_page(&self, params: &ListToolsParams) -> Result<Page<Tool>, ApiError> {
        let collection = self.service.list_tools(params).await?.into_result();
        tracing::debug!(
            toolchain_id = %params.toolchain_id,
            count = collection.tools.len(),
            "fetched tools page"
        );
        Ok(collection.into())
    }
}

/// Iterates every page of a resource group's toolchains.
pub type ToolchainsPager<'a> = Pager<ToolchainsList<'a>>;

/// Iterates every page of a toolchain's tools.
pub type ToolsPager<'a> = Pager<ToolsList<'a>>;

impl CdToolchainV2 {
    /// Creates a pager over the toolchains selected by `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `params.start` is set.
    pub fn toolchains_pager(
        &self,
        params: ListToolchainsParams,
    ) -> Result<ToolchainsPager<'_>, ApiError> {
        Pager::new(ToolchainsList { service: self }, params)
    }

    /// Creates a pager over the tools selected by `params`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ibm_continuous_delivery::api::toolchain::{CdToolchainV2, ListToolsParams};
    ///
    /// # async fn example(service: &CdToolchainV2) -> Result<(), ibm_continuous_delivery::api::ApiError> {
    /// let tools = service.tools_pager(ListToolsParams::new("toolchain-id"))?.get_all().await?;
    /// for tool in tools {
    ///     println!("{} {}", tool.id, tool.tool_type_id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn tools_pager(&self, params: ListToolsParams) -> Result<ToolsPager<'_>, ApiError> {
        Pager::new(ToolsList { service: self }, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, start: Option<&str>) -> PaginationLink {
        PaginationLink {
            href: Some(href.to_string()),
            start: start.map(str::to_string),
        }
    }

    #[test]
    fn test_continuation_prefers_direct_start() {
        assert_eq!(
            continuation(link("https://host/toolchains?start=from-href", Some("direct"))),
            Some(ContinuationRef::Direct("direct".to_string()))
        );
        assert_eq!(
            continuation(link("https://host/toolchains?start=from-href", None)),
            Some(ContinuationRef::Url(
                "https://host/toolchains?start=from-href".to_string()
            ))
        );
    }

    #[test]
    fn test_continuation_without_href() {
        let start_only = PaginationLink {
            href: None,
            start: Some("XYZ987".to_string()),
        };
        assert_eq!(
            continuation(start_only),
            Some(ContinuationRef::Direct("XYZ987".to_string()))
        );

        let bare = PaginationLink {
            href: None,
            start: None,
        };
        assert_eq!(continuation(bare), None);
    }

    #[test]
    fn test_start_only_next_link_decodes() {
        let collection: ToolchainCollection = serde_json::from_value(serde_json::json!({
            "total_count": 2,
            "limit": 1,
            "next": {"start": "XYZ987"},
            "toolchains": [{"id": "tc1", "name": "one"}]
        }))
        .unwrap();
        let page: Page<Toolchain> = collection.into();
        assert_eq!(page.next_cursor(), Some("XYZ987"));
    }

    #[test]
    fn test_tool_collection_without_next_is_last_page() {
        let collection = ToolCollection {
            limit: 2,
            total_count: 1,
            first: Some(link("https://host/toolchains/tc/tools?limit=2", None)),
            previous: None,
            next: None,
            last: None,
            tools: vec![],
        };
        let page: Page<Tool> = collection.into();
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_pagers_reject_preset_start() {
        let service =
            CdToolchainV2::new("http://127.0.0.1:9", crate::auth::Authenticator::NoAuth).unwrap();
        assert!(matches!(
            service.toolchains_pager(ListToolchainsParams::new("rg").start("x")),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.tools_pager(ListToolsParams::new("tc").start("x")),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(service.tools_pager(ListToolsParams::new("tc")).is_ok());
    }
}
