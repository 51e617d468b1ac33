//
//  ibm-continuous-delivery
//  cli/toolchain.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `cdctl toolchain` and `cdctl tool`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::toolchain::{CdToolchainV2, ListToolchainsParams, ListToolsParams};

use super::{collect, GlobalOptions};

/// Toolchain commands.
#[derive(Args, Debug)]
pub struct ToolchainCommand {
    #[command(subcommand)]
    pub command: ToolchainSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolchainSubcommand {
    /// List toolchains in a resource group
    #[command(visible_alias = "ls")]
    List(ListToolchainsArgs),
}

#[derive(Args, Debug)]
pub struct ListToolchainsArgs {
    /// Resource group ID
    #[arg(long, short = 'g', env = "CDCTL_RESOURCE_GROUP")]
    pub resource_group: String,

    /// Only toolchains with this exact name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Page size
    #[arg(long, short = 'L', value_parser = clap::value_parser!(u32).range(1..=200))]
    pub limit: Option<u32>,

    /// Fetch every page instead of the first one
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Tool integration commands.
#[derive(Args, Debug)]
pub struct ToolCommand {
    #[command(subcommand)]
    pub command: ToolSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolSubcommand {
    /// List the tool integrations of a toolchain
    #[command(visible_alias = "ls")]
    List(ListToolsArgs),
}

#[derive(Args, Debug)]
pub struct ListToolsArgs {
    /// Toolchain ID
    pub toolchain_id: String,

    /// Page size
    #[arg(long, short = 'L', value_parser = clap::value_parser!(u32).range(1..=200))]
    pub limit: Option<u32>,

    /// Fetch every page instead of the first one
    #[arg(long, short = 'a')]
    pub all: bool,
}

fn service(global: &GlobalOptions) -> Result<CdToolchainV2> {
    let settings = global.service_settings(CdToolchainV2::DEFAULT_SERVICE_NAME)?;
    CdToolchainV2::from_settings(&settings).context("Failed to configure the toolchain service")
}

impl ToolchainCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ToolchainSubcommand::List(args) => {
                let service = service(global)?;
                let mut params = ListToolchainsParams::new(&args.resource_group);
                params.limit = args.limit;
                params.name = args.name.clone();

                let output = global.output();
                let toolchains = collect(service.toolchains_pager(params)?, args.all, &output)
                    .await
                    .context("Failed to list toolchains")?;
                output.write_list(&toolchains)
            }
        }
    }
}

impl ToolCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ToolSubcommand::List(args) => {
                let service = service(global)?;
                let mut params = ListToolsParams::new(&args.toolchain_id);
                params.limit = args.limit;

                let output = global.output();
                let tools = collect(service.tools_pager(params)?, args.all, &output)
                    .await
                    .with_context(|| format!("Failed to list tools of {}", args.toolchain_id))?;
                output.write_list(&tools)
            }
        }
    }
}
