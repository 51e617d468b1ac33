//
//  ibm-continuous-delivery
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ibm_continuous_delivery::cli::{Cli, Commands};
use ibm_continuous_delivery::exit_codes;
use ibm_continuous_delivery::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::Table).write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CDCTL_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Toolchain(cmd) => cmd.run(&cli.global).await,
        Commands::Tool(cmd) => cmd.run(&cli.global).await,
        Commands::Pipeline(cmd) => cmd.run(&cli.global).await,
        Commands::Region(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("cdctl version {}", ibm_continuous_delivery::VERSION);
            Ok(())
        }
    }
}
