//
//  ibm-continuous-delivery
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CLI Module
//!
//! Command-line definitions for `cdctl`, built with clap's derive API.
//!
//! ## Command Structure
//!
//! ```text
//! cdctl
//! ├── toolchain list   List toolchains in a resource group
//! ├── tool list        List the tool integrations of a toolchain
//! ├── pipeline runs    List the runs of a Tekton pipeline
//! ├── region           Show the service endpoints of a region
//! └── version          Print the version
//! ```
//!
//! ## Global Options
//!
//! - `--json`: print JSON instead of tables
//! - `--region`: use the public endpoints of a region
//! - `--url`: send requests to an explicit service URL

mod pipeline;
mod region;
mod toolchain;

pub use pipeline::PipelineCommand;
pub use region::RegionCommand;
pub use toolchain::{ToolCommand, ToolchainCommand};

use clap::{Args, Parser, Subcommand};

use crate::api::common::{ListOperation, Pager};
use crate::config::ServiceSettings;
use crate::output::{OutputFormat, OutputWriter};

/// Root command.
#[derive(Parser, Debug)]
#[command(
    name = "cdctl",
    version,
    about = "Work with IBM Cloud Continuous Delivery from the command line",
    long_about = "cdctl lists toolchains, tool integrations and Tekton pipeline runs.\n\n\
                  Credentials are read from CD_TOOLCHAIN_* and CD_TEKTON_PIPELINE_* \
                  environment variables or the config file.",
    propagate_version = true,
    after_help = "Use 'cdctl <command> --help' for more information about a command."
)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Options shared by every command.
    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Region whose public endpoints to use (e.g. eu-de).
    #[arg(long, global = true, env = "CDCTL_REGION")]
    pub region: Option<String>,

    /// Explicit service URL; overrides --region.
    #[arg(long, global = true, env = "CDCTL_URL")]
    pub url: Option<String>,
}

impl GlobalOptions {
    /// Settings of `service_name`, with the command-line flags applied on top.
    pub fn service_settings(&self, service_name: &str) -> anyhow::Result<ServiceSettings> {
        let mut settings = ServiceSettings::load(service_name)?;
        if let Some(region) = &self.region {
            settings = settings.with_region(region.clone());
        }
        if let Some(url) = &self.url {
            settings = settings.with_url(url.clone());
        }
        Ok(settings)
    }

    /// A writer for the selected output format.
    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }
}

/// Runs a pager to the end, or fetches only its first page and tells the
/// user on stderr when more are left.
pub(crate) async fn collect<Op: ListOperation>(
    mut pager: Pager<Op>,
    all: bool,
    output: &OutputWriter,
) -> anyhow::Result<Vec<Op::Item>> {
    let items = if all {
        pager.get_all().await?
    } else {
        pager.get_next().await?
    };
    if pager.has_next() {
        output.write_info("More results available; pass --all to fetch every page");
    }
    Ok(items)
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with toolchains
    #[command(visible_alias = "tc")]
    Toolchain(ToolchainCommand),

    /// Work with tool integrations
    Tool(ToolCommand),

    /// Work with Tekton pipelines
    Pipeline(PipelineCommand),

    /// Show the service endpoints of a region
    Region(RegionCommand),

    /// Print the version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cdctl", "region", "eu-de", "--json"]).unwrap();
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::Region(_)));
    }

    #[test]
    fn test_list_commands_parse() {
        let cli = Cli::try_parse_from([
            "cdctl",
            "tool",
            "list",
            "tc1",
            "--all",
            "--url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(cli.global.url.as_deref(), Some("http://localhost:8080"));
        assert!(matches!(cli.command, Commands::Tool(_)));

        assert!(Cli::try_parse_from(["cdctl", "tc", "ls", "-g", "rg1", "-L", "500"]).is_err());
    }
}
