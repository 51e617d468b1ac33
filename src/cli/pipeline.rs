//
//  ibm-continuous-delivery
//  cli/pipeline.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `cdctl pipeline`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::tekton::{CdTektonPipelineV2, ListTektonPipelineRunsParams};

use super::{collect, GlobalOptions};

/// Tekton pipeline commands.
#[derive(Args, Debug)]
pub struct PipelineCommand {
    #[command(subcommand)]
    pub command: PipelineSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PipelineSubcommand {
    /// List the runs of a pipeline, most recent first
    Runs(RunsArgs),
}

#[derive(Args, Debug)]
pub struct RunsArgs {
    /// Pipeline ID
    pub pipeline_id: String,

    /// Only runs in this status
    #[arg(long, short = 's', value_parser = [
        "pending", "waiting", "queued", "running", "succeeded", "failed", "cancelled", "error",
    ])]
    pub status: Option<String>,

    /// Only runs started by this trigger
    #[arg(long, short = 't')]
    pub trigger: Option<String>,

    /// Page size
    #[arg(long, short = 'L', value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: Option<u32>,

    /// Fetch every page instead of the first one
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl RunsArgs {
    fn params(&self) -> ListTektonPipelineRunsParams {
        ListTektonPipelineRunsParams {
            pipeline_id: self.pipeline_id.clone(),
            start: None,
            limit: self.limit,
            status: self.status.clone(),
            trigger_name: self.trigger.clone(),
        }
    }
}

impl PipelineCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PipelineSubcommand::Runs(args) => {
                let settings =
                    global.service_settings(CdTektonPipelineV2::DEFAULT_SERVICE_NAME)?;
                let service = CdTektonPipelineV2::from_settings(&settings)
                    .context("Failed to configure the Tekton pipeline service")?;

                let output = global.output();
                let pager = service.tekton_pipeline_runs_pager(args.params())?;
                let runs = collect(pager, args.all, &output)
                    .await
                    .with_context(|| format!("Failed to list runs of {}", args.pipeline_id))?;
                output.write_list(&runs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_runs_args_map_to_params() {
        let cli = Cli::try_parse_from([
            "cdctl", "pipeline", "runs", "p1", "--status", "failed", "-t", "Nightly", "-L", "5",
        ])
        .unwrap();
        let Commands::Pipeline(PipelineCommand {
            command: PipelineSubcommand::Runs(args),
        }) = cli.command
        else {
            panic!("expected pipeline runs");
        };

        let params = args.params();
        assert_eq!(params.pipeline_id, "p1");
        assert_eq!(params.status.as_deref(), Some("failed"));
        assert_eq!(params.trigger_name.as_deref(), Some("Nightly"));
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.start, None);
    }

    #[test]
    fn test_runs_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["cdctl", "pipeline", "runs", "p1", "-s", "done"]).is_err());
    }
}
