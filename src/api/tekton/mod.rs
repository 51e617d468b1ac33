//
//  ibm-continuous-delivery
//  api/tekton/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CD Tekton Pipeline API v2
//!
//! Typed client for Tekton pipelines of IBM Cloud Continuous Delivery:
//! pipelines, runs and their logs, definitions, environment properties,
//! triggers and trigger properties.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_continuous_delivery::api::tekton::{
//!     CdTektonPipelineV2, CreateTektonPipelineRunParams, ListTektonPipelineRunsParams,
//! };
//!
//! # async fn example() -> Result<(), ibm_continuous_delivery::api::ApiError> {
//! let service = CdTektonPipelineV2::from_config()?;
//!
//! let run = service
//!     .create_tekton_pipeline_run(&CreateTektonPipelineRunParams::with_trigger(
//!         "pipeline-id",
//!         "Manual Trigger",
//!     ))
//!     .await?
//!     .into_result();
//! println!("started run {}", run.id);
//!
//! let failed = service
//!     .tekton_pipeline_runs_pager(ListTektonPipelineRunsParams::new("pipeline-id").status("failed"))?
//!     .get_all()
//!     .await?;
//! println!("{} failed runs", failed.len());
//! # Ok(())
//! # }
//! ```

mod models;
mod pagers;
mod service;

pub use models::*;
pub use pagers::{PipelineRunsList, TektonPipelineRunsPager};
pub use service::{CdTektonPipelineV2, ListTektonPipelineRunsParams};

/// Returns the service URL of the public deployment in `region`.
///
/// Returns `None` for a region without a deployment.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::tekton::service_url_for_region;
///
/// assert_eq!(
///     service_url_for_region("eu-de"),
///     Some("https://api.eu-de.devops.cloud.ibm.com/pipeline/v2")
/// );
/// assert_eq!(service_url_for_region("mars-1"), None);
/// ```
pub fn service_url_for_region(region: &str) -> Option<&'static str> {
    match region {
        "us-south" => Some("https://api.us-south.devops.cloud.ibm.com/pipeline/v2"),
        "us-east" => Some("https://api.us-east.devops.cloud.ibm.com/pipeline/v2"),
        "eu-de" => Some("https://api.eu-de.devops.cloud.ibm.com/pipeline/v2"),
        "eu-gb" => Some("https://api.eu-gb.devops.cloud.ibm.com/pipeline/v2"),
        "eu-es" => Some("https://api.eu-es.devops.cloud.ibm.com/pipeline/v2"),
        "jp-osa" => Some("https://api.jp-osa.devops.cloud.ibm.com/pipeline/v2"),
        "jp-tok" => Some("https://api.jp-tok.devops.cloud.ibm.com/pipeline/v2"),
        "au-syd" => Some("https://api.au-syd.devops.cloud.ibm.com/pipeline/v2"),
        "ca-tor" => Some("https://api.ca-tor.devops.cloud.ibm.com/pipeline/v2"),
        "br-sao" => Some("https://api.br-sao.devops.cloud.ibm.com/pipeline/v2"),
        _ => None,
    }
}
