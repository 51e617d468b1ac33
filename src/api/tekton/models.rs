//
//  ibm-continuous-delivery
//  api/tekton/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tekton pipeline API types and data structures.
//!
//! Request and response bodies of the CD Tekton Pipeline API v2. Response
//! types are lenient (`#[serde(default)]` on everything the service may omit);
//! request types skip unset fields so that merge-patch bodies only carry what
//! the caller changed.
//!
//! # Pipeline Run Lifecycle
//!
//! ```text
//! pending -> waiting -> queued -> running -> succeeded | failed | cancelled | error
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::common::Href;

/// Reference to the resource group a pipeline belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroupReference {
    /// Resource group ID.
    #[serde(default)]
    pub id: Option<String>,
}

/// Reference to the toolchain a pipeline belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolchainReference {
    /// Toolchain ID.
    pub id: String,
    /// Toolchain CRN.
    #[serde(default)]
    pub crn: Option<String>,
}

/// Worker used to run a pipeline or trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Worker ID, or `public` for the IBM managed workers.
    pub id: String,
    /// Worker name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Worker type (`private` or `public`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<String>,
}

/// Worker selection in request bodies; only the ID is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerIdentity {
    /// Worker ID.
    pub id: String,
}

impl WorkerIdentity {
    /// Selects the IBM managed public worker.
    pub fn public() -> Self {
        Self {
            id: "public".to_string(),
        }
    }
}

/// A Tekton pipeline: definitions, properties and triggers bound to a
/// toolchain tool integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TektonPipeline {
    /// Pipeline ID (same as the toolchain tool integration ID).
    pub id: String,
    /// Pipeline name.
    #[serde(default)]
    pub name: String,
    /// Pipeline status (`configured` or `configuring`).
    #[serde(default)]
    pub status: String,
    /// Resource group of the owning toolchain.
    #[serde(default)]
    pub resource_group: Option<ResourceGroupReference>,
    /// Owning toolchain.
    #[serde(default)]
    pub toolchain: Option<ToolchainReference>,
    /// Definition repositories.
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Environment properties.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Triggers.
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    /// Default worker.
    #[serde(default)]
    pub worker: Option<Worker>,
    /// URL of the pipeline runs list.
    #[serde(default)]
    pub runs_url: Option<String>,
    /// API URL of this pipeline.
    #[serde(default)]
    pub href: Option<String>,
    /// Build number of the most recent run.
    #[serde(default)]
    pub build_number: Option<u64>,
    /// Build number to assign to the next run.
    #[serde(default)]
    pub next_build_number: Option<u64>,
    /// Whether run events are sent to the toolchain's notification tools.
    #[serde(default)]
    pub enable_notifications: bool,
    /// Whether partial (sparse) cloning is enabled for definition repositories.
    #[serde(default)]
    pub enable_partial_cloning: bool,
    /// Whether the pipeline is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /tekton_pipelines`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTektonPipelineParams {
    /// ID of the pipeline tool integration in the toolchain.
    pub id: String,
    /// Build number to assign to the first run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_build_number: Option<u64>,
    /// Send run events to notification tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_notifications: Option<bool>,
    /// Enable partial cloning of definition repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_partial_cloning: Option<bool>,
    /// Default worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerIdentity>,
}

impl CreateTektonPipelineParams {
    /// Creates the pipeline for the given tool integration ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Merge-patch body of `PATCH /tekton_pipelines/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TektonPipelinePatch {
    /// Build number to assign to the next run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_build_number: Option<u64>,
    /// Send run events to notification tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_notifications: Option<bool>,
    /// Enable partial cloning of definition repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_partial_cloning: Option<bool>,
    /// Default worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerIdentity>,
}

/// Identity of the user that started a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// IAM ID.
    pub iam_id: String,
    /// User email or service ID name.
    #[serde(default)]
    pub sub: Option<String>,
}

/// A single execution of a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Run ID.
    pub id: String,
    /// API URL of this run.
    #[serde(default)]
    pub href: Option<String>,
    /// User that started the run.
    #[serde(default)]
    pub user_info: Option<UserInfo>,
    /// Run status (`pending`, `running`, `succeeded`, `failed`, ...).
    pub status: String,
    /// Definition the run used.
    #[serde(default)]
    pub definition_id: Option<String>,
    /// Pipeline the run belongs to.
    #[serde(default)]
    pub pipeline: Option<Href>,
    /// Event listener the run was started through.
    #[serde(default)]
    pub listener_name: Option<String>,
    /// The trigger that started the run.
    #[serde(default)]
    pub trigger: Option<Trigger>,
    /// Raw event parameters, serialized.
    #[serde(default)]
    pub event_params_blob: Option<String>,
    /// Trigger headers, serialized.
    #[serde(default)]
    pub trigger_headers: Option<String>,
    /// Properties the run was started with.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Sequential build number within the pipeline.
    #[serde(default)]
    pub run_number: Option<u64>,
    /// Dashboard URL of the run.
    #[serde(default)]
    pub run_url: Option<String>,
    /// Error message for runs that failed to start.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `GET /tekton_pipelines/{pipeline_id}/pipeline_runs`.
///
/// `next` is absent on the last page; its href carries the `start` cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRunsCollection {
    /// Runs on this page.
    #[serde(default)]
    pub pipeline_runs: Vec<PipelineRun>,
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u32,
    /// Link to the first page.
    #[serde(default)]
    pub first: Option<Href>,
    /// Link to the next page.
    #[serde(default)]
    pub next: Option<Href>,
    /// Link to the last page.
    #[serde(default)]
    pub last: Option<Href>,
}

/// Trigger selection for a manual run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineRunTrigger {
    /// Name of a manual trigger.
    pub name: String,
    /// Properties overriding the trigger's and pipeline's properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Value>>,
    /// Secure properties, hidden in logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_properties: Option<BTreeMap<String, Value>>,
    /// Headers passed to the Tekton event listener.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Value>>,
    /// Body passed to the Tekton event listener.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BTreeMap<String, Value>>,
}

/// Body of `POST /tekton_pipelines/{pipeline_id}/pipeline_runs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTektonPipelineRunParams {
    /// Pipeline to run; sent in the path.
    #[serde(skip)]
    pub pipeline_id: String,
    /// Trigger to run the pipeline with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<PipelineRunTrigger>,
    /// Additional description shown for the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTektonPipelineRunParams {
    /// Runs `pipeline_id` with the named manual trigger.
    pub fn with_trigger(pipeline_id: impl Into<String>, trigger_name: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            trigger: Some(PipelineRunTrigger {
                name: trigger_name.into(),
                ..Default::default()
            }),
            description: None,
        }
    }
}

/// Link to the logs of one pipeline run step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Log ID.
    pub id: String,
    /// Step name, `<podName>/<containerName>`.
    pub name: String,
    /// API URL of the log content.
    #[serde(default)]
    pub href: Option<String>,
}

/// Response of `GET .../pipeline_runs/{id}/logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsCollection {
    /// Log references, one per step.
    #[serde(default)]
    pub logs: Vec<Log>,
}

/// Log content of one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepLog {
    /// Log ID.
    pub id: String,
    /// Log text.
    #[serde(default)]
    pub data: String,
}

/// Tool reference inside a definition or trigger source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolReference {
    /// Tool integration ID.
    pub id: String,
}

/// Repository location of pipeline definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSourceProperties {
    /// Repository URL.
    pub url: String,
    /// Branch; mutually exclusive with `tag`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Tag; mutually exclusive with `branch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Path to the definitions in the repository.
    pub path: String,
    /// Repository tool integration (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolReference>,
}

/// Source of a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSource {
    /// Source type; only `git` is supported.
    #[serde(rename = "type")]
    pub source_type: String,
    /// Repository location.
    pub properties: DefinitionSourceProperties,
}

impl DefinitionSource {
    /// A git source on `branch`.
    pub fn git_branch(
        url: impl Into<String>,
        branch: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            source_type: "git".to_string(),
            properties: DefinitionSourceProperties {
                url: url.into(),
                branch: Some(branch.into()),
                path: path.into(),
                ..Default::default()
            },
        }
    }
}

/// A pipeline definition: a repository path holding Tekton YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    /// Definition ID.
    pub id: String,
    /// Definition source.
    pub source: DefinitionSource,
    /// API URL of this definition.
    #[serde(default)]
    pub href: Option<String>,
}

/// Response of `GET .../definitions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionsCollection {
    /// Definitions.
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// Body of the definition create and replace operations.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionPrototype {
    /// Definition source.
    pub source: DefinitionSource,
}

/// An environment property of a pipeline or trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type: `secure`, `text`, `integration`, `single_select` or `appconfig`.
    #[serde(rename = "type")]
    pub property_type: String,
    /// Property value; masked for `secure` properties.
    #[serde(default)]
    pub value: Option<String>,
    /// Options of a `single_select` property.
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Locked properties cannot be overridden by triggers or runs.
    #[serde(default)]
    pub locked: bool,
    /// JSON path into an `integration` property's tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// API URL of this property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Response of the property list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesCollection {
    /// Properties.
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Body of the property create and replace operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyPrototype {
    /// Property name.
    pub name: String,
    /// Property type.
    #[serde(rename = "type")]
    pub property_type: String,
    /// Property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Options of a `single_select` property.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Prevent overriding by triggers and runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// JSON path into an `integration` property's tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PropertyPrototype {
    /// A plain `text` property.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: "text".to_string(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// A `secure` property.
    pub fn secure(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_type: "secure".to_string(),
            ..Self::text(name, value)
        }
    }
}

/// Filters of the property list operations.
#[derive(Debug, Clone, Default)]
pub struct ListPropertiesParams {
    /// Only properties with this name.
    pub name: Option<String>,
    /// Only properties of these types.
    pub types: Vec<String>,
    /// Sort field, e.g. `name` or `-type`.
    pub sort: Option<String>,
}

/// Secret used to validate generic webhook triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericSecret {
    /// Secret type: `token_matches`, `digest_matches` or `internal_validation`.
    #[serde(rename = "type")]
    pub secret_type: String,
    /// Secret value (write only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Where the secret is read from: `header`, `payload` or `query`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Name of the header, payload field or query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Digest algorithm for `digest_matches`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// Repository watched by an SCM trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerSourceProperties {
    /// Repository URL.
    pub url: String,
    /// Branch to watch; mutually exclusive with `pattern`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Branch or tag glob to watch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Repository reached through a private worker connection (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blind_connection: Option<bool>,
    /// Webhook ID registered on the repository (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_id: Option<String>,
    /// Repository tool integration (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolReference>,
}

/// Source of an SCM trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSource {
    /// Source type; only `git` is supported.
    #[serde(rename = "type")]
    pub source_type: String,
    /// Watched repository.
    pub properties: TriggerSourceProperties,
}

/// A pipeline trigger.
///
/// The service has four trigger kinds (`manual`, `scm`, `timer`, `generic`);
/// fields that do not apply to a kind are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger kind.
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Trigger name.
    pub name: String,
    /// Trigger ID.
    #[serde(default)]
    pub id: Option<String>,
    /// API URL of this trigger.
    #[serde(default)]
    pub href: Option<String>,
    /// Tekton event listener started by this trigger.
    #[serde(default)]
    pub event_listener: Option<String>,
    /// Trigger properties.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Worker overriding the pipeline's default.
    #[serde(default)]
    pub worker: Option<Worker>,
    /// Maximum number of concurrent runs; `None` means unlimited.
    #[serde(default)]
    pub max_concurrent_runs: Option<u32>,
    /// Whether the trigger is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Whether the trigger is marked as a favorite.
    #[serde(default)]
    pub favorite: bool,
    /// SCM triggers: also run for events from forks.
    #[serde(default)]
    pub enable_events_from_forks: bool,
    /// SCM triggers: watched repository.
    #[serde(default)]
    pub source: Option<TriggerSource>,
    /// SCM triggers: `push`, `pull_request`, `pull_request_closed`.
    #[serde(default)]
    pub events: Vec<String>,
    /// SCM and generic triggers: CEL filter expression.
    #[serde(default)]
    pub filter: Option<String>,
    /// Timer triggers: cron expression.
    #[serde(default)]
    pub cron: Option<String>,
    /// Timer triggers: IANA time zone of `cron`.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Generic triggers: webhook validation secret.
    #[serde(default)]
    pub secret: Option<GenericSecret>,
    /// Generic triggers: URL to post events to.
    #[serde(default)]
    pub webhook_url: Option<String>,
}

/// Response of `GET .../triggers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggersCollection {
    /// Triggers.
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

/// Body of `POST .../triggers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TriggerPrototype {
    /// Trigger kind.
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Trigger name.
    pub name: String,
    /// Tekton event listener.
    pub event_listener: String,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Worker override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerIdentity>,
    /// Maximum number of concurrent runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<u32>,
    /// Whether the trigger is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Generic webhook secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<GenericSecret>,
    /// Cron expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    /// Time zone of `cron`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Watched repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TriggerSource>,
    /// SCM events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// CEL filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Mark as favorite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    /// Run for events from forks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_events_from_forks: Option<bool>,
}

impl TriggerPrototype {
    /// A manual trigger.
    pub fn manual(name: impl Into<String>, event_listener: impl Into<String>) -> Self {
        Self {
            trigger_type: "manual".to_string(),
            name: name.into(),
            event_listener: event_listener.into(),
            ..Default::default()
        }
    }

    /// A timer trigger firing on `cron`.
    pub fn timer(
        name: impl Into<String>,
        event_listener: impl Into<String>,
        cron: impl Into<String>,
    ) -> Self {
        Self {
            trigger_type: "timer".to_string(),
            cron: Some(cron.into()),
            ..Self::manual(name, event_listener)
        }
    }
}

/// Merge-patch body of `PATCH .../triggers/{trigger_id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TriggerPatch {
    /// Trigger kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    /// Trigger name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tekton event listener.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_listener: Option<String>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Worker override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerIdentity>,
    /// Maximum number of concurrent runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<u32>,
    /// Whether the trigger is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Generic webhook secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<GenericSecret>,
    /// Cron expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    /// Time zone of `cron`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Watched repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TriggerSource>,
    /// SCM events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// CEL filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Mark as favorite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    /// Run for events from forks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_events_from_forks: Option<bool>,
}

/// Filters of `GET .../triggers`.
#[derive(Debug, Clone, Default)]
pub struct ListTriggersParams {
    /// Only triggers of these kinds.
    pub types: Vec<String>,
    /// Only triggers with this name.
    pub name: Option<String>,
    /// Only triggers starting this event listener.
    pub event_listener: Option<String>,
    /// Only triggers using this worker ID.
    pub worker_id: Option<String>,
    /// Only triggers using this worker name.
    pub worker_name: Option<String>,
    /// Only enabled (`false`) or disabled (`true`) triggers.
    pub disabled: Option<bool>,
    /// Only triggers carrying all of these tags.
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pipeline_run_collection_decodes() {
        let body = json!({
            "pipeline_runs": [{
                "id": "r1",
                "status": "succeeded",
                "user_info": {"iam_id": "IBMid-1", "sub": "me@example.com"},
                "trigger": {"type": "manual", "name": "Manual Trigger", "event_listener": "listener"},
                "properties": [{"name": "env", "type": "text", "value": "prod"}],
                "created_at": "2024-05-01T10:00:00Z"
            }],
            "limit": 1,
            "first": {"href": "https://host/tekton_pipelines/p/pipeline_runs?limit=1"},
            "next": {"href": "https://host/tekton_pipelines/p/pipeline_runs?limit=1&start=abc"}
        });

        let collection: PipelineRunsCollection = serde_json::from_value(body).unwrap();
        let run = &collection.pipeline_runs[0];
        assert_eq!(run.status, "succeeded");
        assert_eq!(run.trigger.as_ref().unwrap().trigger_type, "manual");
        assert_eq!(run.properties[0].value.as_deref(), Some("prod"));
        assert!(collection.next.is_some());
        assert!(collection.last.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TriggerPatch {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"enabled": false}));
    }

    #[test]
    fn test_run_params_skip_pipeline_id() {
        let params = CreateTektonPipelineRunParams::with_trigger("p1", "Manual Trigger");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"trigger": {"name": "Manual Trigger"}})
        );
    }

    #[test]
    fn test_property_prototype_enum_rename() {
        let prototype = PropertyPrototype {
            name: "region".to_string(),
            property_type: "single_select".to_string(),
            value: Some("us-south".to_string()),
            enum_values: Some(vec!["us-south".to_string(), "eu-de".to_string()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&prototype).unwrap();
        assert_eq!(value["enum"], json!(["us-south", "eu-de"]));
        assert_eq!(value["type"], "single_select");
    }
}
