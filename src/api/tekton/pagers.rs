//
//  ibm-continuous-delivery
//  api/tekton/pagers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pager adapter for pipeline run listings.
//!
//! Pipeline run collections link to the next page with `next.href`; the
//! cursor is read from that URL's `start` parameter by the pager core.

use async_trait::async_trait;

use super::models::{PipelineRun, PipelineRunsCollection};
use super::service::{CdTektonPipelineV2, ListTektonPipelineRunsParams};
use crate::api::common::{ApiError, ContinuationRef, ListOperation, ListParams, Page, Pager};

impl ListParams for ListTektonPipelineRunsParams {
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

impl From<PipelineRunsCollection> for Page<PipelineRun> {
    fn from(collection: PipelineRunsCollection) -> Self {
        Page::new(
            collection.pipeline_runs,
            collection.next.map(|next| ContinuationRef::Url(next.href)),
        )
    }
}

/// `list_tekton_pipeline_runs` as a [`ListOperation`].
#[derive(Debug, Clone, Copy)]
pub struct PipelineRunsList<'a> {
    service: &'a CdTektonPipelineV2,
}

#[async_trait]
impl ListOperation for PipelineRunsList<'_> {
    type Params = ListTektonPipelineRunsParams;
    type Item = PipelineRun;

    async fn list_page(
        &self,
        params: &ListTektonPipelineRunsParams,
    ) -> Result<Page<PipelineRun>, ApiError> {
        let collection = self
            .service
            .list_tekton_pipeline_runs(params)
            .await?
            .into_result();
        tracing::debug!(
            pipeline_id = %params.pipeline_id,
            count = collection.pipeline_runs.len(),
            "fetched pipeline runs page"
        );
        Ok(collection.into())
    }
}

/// Iterates every page of a pipeline's runs.
pub type TektonPipelineRunsPager<'a> = Pager<PipelineRunsList<'a>>;

impl CdTektonPipelineV2 {
    /// Creates a pager over the runs selected by `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `params.start` is set.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ibm_continuous_delivery::api::tekton::{CdTektonPipelineV2, ListTektonPipelineRunsParams};
    ///
    /// # async fn example(service: &CdTektonPipelineV2) -> Result<(), ibm_continuous_delivery::api::ApiError> {
    /// let mut pager = service
    ///     .tekton_pipeline_runs_pager(ListTektonPipelineRunsParams::new("pipeline-id").limit(50))?;
    /// while pager.has_next() {
    ///     for run in pager.get_next().await? {
    ///         println!("{} {}", run.id, run.status);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn tekton_pipeline_runs_pager(
        &self,
        params: ListTektonPipelineRunsParams,
    ) -> Result<TektonPipelineRunsPager<'_>, ApiError> {
        Pager::new(PipelineRunsList { service: self }, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Href;

    #[test]
    fn test_collection_maps_next_href_to_url_continuation() {
        let collection = PipelineRunsCollection {
            pipeline_runs: vec![],
            limit: 1,
            first: None,
            next: Some(Href {
                href: "https://host/tekton_pipelines/p/pipeline_runs?limit=1&start=n2".to_string(),
            }),
            last: None,
        };
        let page: Page<PipelineRun> = collection.into();
        assert_eq!(page.next_cursor(), Some("n2"));
    }

    #[test]
    fn test_with_start_preserves_filters() {
        let params = ListTektonPipelineRunsParams::new("p1").limit(3).status("running");
        let next = params.with_start("abc");
        assert_eq!(next.start.as_deref(), Some("abc"));
        assert_eq!(next.limit, Some(3));
        assert_eq!(next.status.as_deref(), Some("running"));
        assert_eq!(params.start, None);
    }

    #[test]
    fn test_pager_rejects_preset_start() {
        let service =
            CdTektonPipelineV2::new("http://127.0.0.1:9", crate::auth::Authenticator::NoAuth)
                .unwrap();
        let params = ListTektonPipelineRunsParams::new("p1").start("abc");
        assert!(matches!(
            service.tekton_pipeline_runs_pager(params),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
