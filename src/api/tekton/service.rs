//
//  ibm-continuous-delivery
//  api/tekton/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The CD Tekton Pipeline API v2 client.

use serde_json::json;

use super::models::*;
use super::service_url_for_region;
use crate::api::client::{require_non_empty, BaseService, DetailedResponse, RequestDescriptor};
use crate::api::common::ApiError;
use crate::auth::Authenticator;
use crate::config::ServiceSettings;

const TEKTON_PIPELINES: &str = "tekton_pipelines";
const PIPELINE_RUNS: &str = "pipeline_runs";
const DEFINITIONS: &str = "definitions";
const PROPERTIES: &str = "properties";
const TRIGGERS: &str = "triggers";

/// Parameters of `list_tekton_pipeline_runs`.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::tekton::ListTektonPipelineRunsParams;
///
/// let params = ListTektonPipelineRunsParams::new("pipeline-id")
///     .limit(20)
///     .status("failed")
///     .trigger_name("Nightly");
/// assert_eq!(params.start, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTektonPipelineRunsParams {
    /// Pipeline whose runs are listed.
    pub pipeline_id: String,
    /// Cursor of the page to fetch.
    pub start: Option<String>,
    /// Page size (1-100).
    pub limit: Option<u32>,
    /// Only runs in this status.
    pub status: Option<String>,
    /// Only runs started by this trigger.
    pub trigger_name: Option<String>,
}

impl ListTektonPipelineRunsParams {
    /// Lists the runs of `pipeline_id`.
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            ..Default::default()
        }
    }

    /// Sets the page cursor.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filters by run status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filters by trigger name.
    pub fn trigger_name(mut self, trigger_name: impl Into<String>) -> Self {
        self.trigger_name = Some(trigger_name.into());
        self
    }
}

/// Client for the CD Tekton Pipeline API v2.
///
/// # Example
///
/// ```rust,no_run
/// use ibm_continuous_delivery::api::tekton::CdTektonPipelineV2;
/// use ibm_continuous_delivery::auth::Authenticator;
///
/// # async fn example() -> Result<(), ibm_continuous_delivery::api::ApiError> {
/// let service = CdTektonPipelineV2::new(
///     CdTektonPipelineV2::DEFAULT_SERVICE_URL,
///     Authenticator::bearer("token"),
/// )?;
/// let pipeline = service.get_tekton_pipeline("pipeline-id").await?.into_result();
/// println!("{} has {} triggers", pipeline.name, pipeline.triggers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CdTektonPipelineV2 {
    base: BaseService,
}

impl CdTektonPipelineV2 {
    /// Name used to look the service up in configuration.
    pub const DEFAULT_SERVICE_NAME: &'static str = "cd_tekton_pipeline";

    /// The us-south endpoint.
    pub const DEFAULT_SERVICE_URL: &'static str =
        "https://api.us-south.devops.cloud.ibm.com/pipeline/v2";

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
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unknown region or incomplete
    /// authentication settings.
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ApiError> {
        let url = settings.resolve_url(Self::DEFAULT_SERVICE_URL, service_url_for_region)?;
        Self::new(&url, settings.authenticator()?)
    }

    /// Creates a client configured from the environment and config file.
    ///
    /// Reads `CD_TEKTON_PIPELINE_*` variables, falling back to the
    /// `[services.cd_tekton_pipeline]` table of the config file.
    pub fn from_config() -> Result<Self, ApiError> {
        let settings = ServiceSettings::load(Self::DEFAULT_SERVICE_NAME)?;
        Self::from_settings(&settings)
    }

    /// The underlying request executor.
    pub fn base(&self) -> &BaseService {
        &self.base
    }

    /// Mutable access to the request executor, e.g. to change the service URL.
    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }

    // Pipelines

    /// Creates a Tekton pipeline for an existing pipeline tool integration.
    pub async fn create_tekton_pipeline(
        &self,
        params: &CreateTektonPipelineParams,
    ) -> Result<DetailedResponse<TektonPipeline>, ApiError> {
        require_non_empty("id", &params.id)?;
        let request = RequestDescriptor::post([TEKTON_PIPELINES]).json(params)?;
        self.base.request(request).await
    }

    /// Gets a Tekton pipeline.
    pub async fn get_tekton_pipeline(
        &self,
        id: &str,
    ) -> Result<DetailedResponse<TektonPipeline>, ApiError> {
        require_non_empty("id", id)?;
        self.base
            .request(RequestDescriptor::get([TEKTON_PIPELINES, id]))
            .await
    }

    /// Updates a Tekton pipeline with a merge-patch.
    pub async fn update_tekton_pipeline(
        &self,
        id: &str,
        patch: &TektonPipelinePatch,
    ) -> Result<DetailedResponse<TektonPipeline>, ApiError> {
        require_non_empty("id", id)?;
        let request = RequestDescriptor::patch([TEKTON_PIPELINES, id]).merge_patch(patch)?;
        self.base.request(request).await
    }

    /// Deletes a Tekton pipeline. The tool integration must be deleted separately.
    pub async fn delete_tekton_pipeline(&self, id: &str) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("id", id)?;
        self.base
            .request_empty(RequestDescriptor::delete([TEKTON_PIPELINES, id]))
            .await
    }

    // Pipeline runs

    /// Lists one page of pipeline runs, most recent first.
    ///
    /// Use [`tekton_pipeline_runs_pager`](Self::tekton_pipeline_runs_pager) to
    /// walk every page.
    pub async fn list_tekton_pipeline_runs(
        &self,
        params: &ListTektonPipelineRunsParams,
    ) -> Result<DetailedResponse<PipelineRunsCollection>, ApiError> {
        require_non_empty("pipeline_id", &params.pipeline_id)?;
        let request =
            RequestDescriptor::get([TEKTON_PIPELINES, params.pipeline_id.as_str(), PIPELINE_RUNS])
                .query_opt("start", params.start.as_deref())
                .query_opt("limit", params.limit)
                .query_opt("status", params.status.as_deref())
                .query_opt("trigger.name", params.trigger_name.as_deref());
        self.base.request(request).await
    }

    /// Starts a pipeline run.
    pub async fn create_tekton_pipeline_run(
        &self,
        params: &CreateTektonPipelineRunParams,
    ) -> Result<DetailedResponse<PipelineRun>, ApiError> {
        require_non_empty("pipeline_id", &params.pipeline_id)?;
        let request =
            RequestDescriptor::post([TEKTON_PIPELINES, params.pipeline_id.as_str(), PIPELINE_RUNS])
                .json(params)?;
        self.base.request(request).await
    }

    /// Gets a pipeline run. `includes` may request extra data such as `definitions`.
    pub async fn get_tekton_pipeline_run(
        &self,
        pipeline_id: &str,
        id: &str,
        includes: Option<&str>,
    ) -> Result<DetailedResponse<PipelineRun>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("id", id)?;
        let request = RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, PIPELINE_RUNS, id])
            .query_opt("includes", includes);
        self.base.request(request).await
    }

    /// Deletes a pipeline run.
    pub async fn delete_tekton_pipeline_run(
        &self,
        pipeline_id: &str,
        id: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("id", id)?;
        self.base
            .request_empty(RequestDescriptor::delete([
                TEKTON_PIPELINES,
                pipeline_id,
                PIPELINE_RUNS,
                id,
            ]))
            .await
    }

    /// Cancels a running pipeline run. `force` skips graceful termination.
    pub async fn cancel_tekton_pipeline_run(
        &self,
        pipeline_id: &str,
        id: &str,
        force: bool,
    ) -> Result<DetailedResponse<PipelineRun>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("id", id)?;
        let request =
            RequestDescriptor::post([TEKTON_PIPELINES, pipeline_id, PIPELINE_RUNS, id, "cancel"])
                .json(&json!({ "force": force }))?;
        self.base.request(request).await
    }

    /// Starts a new run with the same trigger and properties as `id`.
    pub async fn rerun_tekton_pipeline_run(
        &self,
        pipeline_id: &str,
        id: &str,
    ) -> Result<DetailedResponse<PipelineRun>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("id", id)?;
        self.base
            .request(RequestDescriptor::post([
                TEKTON_PIPELINES,
                pipeline_id,
                PIPELINE_RUNS,
                id,
                "rerun",
            ]))
            .await
    }

    /// Lists the step logs of a pipeline run.
    pub async fn get_tekton_pipeline_run_logs(
        &self,
        pipeline_id: &str,
        id: &str,
    ) -> Result<DetailedResponse<LogsCollection>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("id", id)?;
        self.base
            .request(RequestDescriptor::get([
                TEKTON_PIPELINES,
                pipeline_id,
                PIPELINE_RUNS,
                id,
                "logs",
            ]))
            .await
    }

    /// Gets the content of one step log.
    pub async fn get_tekton_pipeline_run_log_content(
        &self,
        pipeline_id: &str,
        pipeline_run_id: &str,
        id: &str,
    ) -> Result<DetailedResponse<StepLog>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("pipeline_run_id", pipeline_run_id)?;
        require_non_empty("id", id)?;
        self.base
            .request(RequestDescriptor::get([
                TEKTON_PIPELINES,
                pipeline_id,
                PIPELINE_RUNS,
                pipeline_run_id,
                "logs",
                id,
            ]))
            .await
    }

    // Definitions

    /// Lists the definitions of a pipeline.
    pub async fn list_tekton_pipeline_definitions(
        &self,
        pipeline_id: &str,
    ) -> Result<DetailedResponse<DefinitionsCollection>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        self.base
            .request(RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, DEFINITIONS]))
            .await
    }

    /// Adds a definition to a pipeline.
    pub async fn create_tekton_pipeline_definition(
        &self,
        pipeline_id: &str,
        source: &DefinitionSource,
    ) -> Result<DetailedResponse<Definition>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        let request = RequestDescriptor::post([TEKTON_PIPELINES, pipeline_id, DEFINITIONS])
            .json(&DefinitionPrototype {
                source: source.clone(),
            })?;
        self.base.request(request).await
    }

    /// Gets a definition.
    pub async fn get_tekton_pipeline_definition(
        &self,
        pipeline_id: &str,
        definition_id: &str,
    ) -> Result<DetailedResponse<Definition>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("definition_id", definition_id)?;
        self.base
            .request(RequestDescriptor::get([
                TEKTON_PIPELINES,
                pipeline_id,
                DEFINITIONS,
                definition_id,
            ]))
            .await
    }

    /// Replaces a definition's source.
    pub async fn replace_tekton_pipeline_definition(
        &self,
        pipeline_id: &str,
        definition_id: &str,
        source: &DefinitionSource,
    ) -> Result<DetailedResponse<Definition>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("definition_id", definition_id)?;
        let request =
            RequestDescriptor::put([TEKTON_PIPELINES, pipeline_id, DEFINITIONS, definition_id])
                .json(&DefinitionPrototype {
                    source: source.clone(),
                })?;
        self.base.request(request).await
    }

    /// Deletes a definition.
    pub async fn delete_tekton_pipeline_definition(
        &self,
        pipeline_id: &str,
        definition_id: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("definition_id", definition_id)?;
        self.base
            .request_empty(RequestDescriptor::delete([
                TEKTON_PIPELINES,
                pipeline_id,
                DEFINITIONS,
                definition_id,
            ]))
            .await
    }

    // Environment properties

    /// Lists the environment properties of a pipeline.
    pub async fn list_tekton_pipeline_properties(
        &self,
        pipeline_id: &str,
        params: &ListPropertiesParams,
    ) -> Result<DetailedResponse<PropertiesCollection>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        let request = with_property_filters(
            RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, PROPERTIES]),
            params,
        );
        self.base.request(request).await
    }

    /// Creates an environment property.
    pub async fn create_tekton_pipeline_properties(
        &self,
        pipeline_id: &str,
        property: &PropertyPrototype,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("name", &property.name)?;
        let request =
            RequestDescriptor::post([TEKTON_PIPELINES, pipeline_id, PROPERTIES]).json(property)?;
        self.base.request(request).await
    }

    /// Gets an environment property.
    pub async fn get_tekton_pipeline_property(
        &self,
        pipeline_id: &str,
        property_name: &str,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("property_name", property_name)?;
        self.base
            .request(RequestDescriptor::get([
                TEKTON_PIPELINES,
                pipeline_id,
                PROPERTIES,
                property_name,
            ]))
            .await
    }

    /// Replaces an environment property.
    pub async fn replace_tekton_pipeline_property(
        &self,
        pipeline_id: &str,
        property_name: &str,
        property: &PropertyPrototype,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("property_name", property_name)?;
        let request =
            RequestDescriptor::put([TEKTON_PIPELINES, pipeline_id, PROPERTIES, property_name])
                .json(property)?;
        self.base.request(request).await
    }

    /// Deletes an environment property.
    pub async fn delete_tekton_pipeline_property(
        &self,
        pipeline_id: &str,
        property_name: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("property_name", property_name)?;
        self.base
            .request_empty(RequestDescriptor::delete([
                TEKTON_PIPELINES,
                pipeline_id,
                PROPERTIES,
                property_name,
            ]))
            .await
    }

    // Triggers

    /// Lists the triggers of a pipeline.
    pub async fn list_tekton_pipeline_triggers(
        &self,
        pipeline_id: &str,
        params: &ListTriggersParams,
    ) -> Result<DetailedResponse<TriggersCollection>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        let request = RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, TRIGGERS])
            .query_opt("type", join_non_empty(&params.types))
            .query_opt("name", params.name.as_deref())
            .query_opt("event_listener", params.event_listener.as_deref())
            .query_opt("worker.id", params.worker_id.as_deref())
            .query_opt("worker.name", params.worker_name.as_deref())
            .query_opt("disabled", params.disabled)
            .query_opt("tags", join_non_empty(&params.tags));
        self.base.request(request).await
    }

    /// Creates a trigger.
    pub async fn create_tekton_pipeline_trigger(
        &self,
        pipeline_id: &str,
        trigger: &TriggerPrototype,
    ) -> Result<DetailedResponse<Trigger>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("name", &trigger.name)?;
        let request =
            RequestDescriptor::post([TEKTON_PIPELINES, pipeline_id, TRIGGERS]).json(trigger)?;
        self.base.request(request).await
    }

    /// Gets a trigger.
    pub async fn get_tekton_pipeline_trigger(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
    ) -> Result<DetailedResponse<Trigger>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        self.base
            .request(RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, TRIGGERS, trigger_id]))
            .await
    }

    /// Updates a trigger with a merge-patch.
    pub async fn update_tekton_pipeline_trigger(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        patch: &TriggerPatch,
    ) -> Result<DetailedResponse<Trigger>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        let request =
            RequestDescriptor::patch([TEKTON_PIPELINES, pipeline_id, TRIGGERS, trigger_id])
                .merge_patch(patch)?;
        self.base.request(request).await
    }

    /// Deletes a trigger.
    pub async fn delete_tekton_pipeline_trigger(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        self.base
            .request_empty(RequestDescriptor::delete([
                TEKTON_PIPELINES,
                pipeline_id,
                TRIGGERS,
                trigger_id,
            ]))
            .await
    }

    /// Copies a trigger, with its properties, under a new name.
    pub async fn duplicate_tekton_pipeline_trigger(
        &self,
        pipeline_id: &str,
        source_trigger_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<Trigger>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("source_trigger_id", source_trigger_id)?;
        require_non_empty("name", name)?;
        let request = RequestDescriptor::post([
            TEKTON_PIPELINES,
            pipeline_id,
            TRIGGERS,
            source_trigger_id,
            "duplicate",
        ])
        .json(&json!({ "name": name }))?;
        self.base.request(request).await
    }

    // Trigger properties

    /// Lists the properties of a trigger.
    pub async fn list_tekton_pipeline_trigger_properties(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        params: &ListPropertiesParams,
    ) -> Result<DetailedResponse<PropertiesCollection>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        let request = with_property_filters(
            RequestDescriptor::get([TEKTON_PIPELINES, pipeline_id, TRIGGERS, trigger_id, PROPERTIES]),
            params,
        );
        self.base.request(request).await
    }

    /// Creates a trigger property.
    pub async fn create_tekton_pipeline_trigger_properties(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        property: &PropertyPrototype,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        require_non_empty("name", &property.name)?;
        let request =
            RequestDescriptor::post([TEKTON_PIPELINES, pipeline_id, TRIGGERS, trigger_id, PROPERTIES])
                .json(property)?;
        self.base.request(request).await
    }

    /// Gets a trigger property.
    pub async fn get_tekton_pipeline_trigger_property(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        property_name: &str,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        require_non_empty("property_name", property_name)?;
        self.base
            .request(RequestDescriptor::get([
                TEKTON_PIPELINES,
                pipeline_id,
                TRIGGERS,
                trigger_id,
                PROPERTIES,
                property_name,
            ]))
            .await
    }

    /// Replaces a trigger property.
    pub async fn replace_tekton_pipeline_trigger_property(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        property_name: &str,
        property: &PropertyPrototype,
    ) -> Result<DetailedResponse<Property>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        require_non_empty("property_name", property_name)?;
        let request = RequestDescriptor::put([
            TEKTON_PIPELINES,
            pipeline_id,
            TRIGGERS,
            trigger_id,
            PROPERTIES,
            property_name,
        ])
        .json(property)?;
        self.base.request(request).await
    }

    /// Deletes a trigger property.
    pub async fn delete_tekton_pipeline_trigger_property(
        &self,
        pipeline_id: &str,
        trigger_id: &str,
        property_name: &str,
    ) -> Result<DetailedResponse<()>, ApiError> {
        require_non_empty("pipeline_id", pipeline_id)?;
        require_non_empty("trigger_id", trigger_id)?;
        require_non_empty("property_name", property_name)?;
        self.base
            .request_empty(RequestDescriptor::delete([
                TEKTON_PIPELINES,
                pipeline_id,
                TRIGGERS,
                trigger_id,
                PROPERTIES,
                property_name,
            ]))
            .await
    }
}

fn with_property_filters(
    request: RequestDescriptor,
    params: &ListPropertiesParams,
) -> RequestDescriptor {
    request
        .query_opt("name", params.name.as_deref())
        .query_opt("type", join_non_empty(&params.types))
        .query_opt("sort", params.sort.as_deref())
}

/// Comma-joins a multi-valued filter; an empty list sends nothing.
fn join_non_empty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
