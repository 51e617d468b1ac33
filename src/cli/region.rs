//
//  ibm-continuous-delivery
//  cli/region.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `cdctl region`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::{tekton, toolchain, REGIONS};
use crate::output::{OutputFormat, TableBuilder};

use super::GlobalOptions;

/// Shows the service endpoints of a region.
#[derive(Args, Debug)]
pub struct RegionCommand {
    /// Region name, e.g. us-south
    #[arg(value_name = "REGION")]
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct RegionEndpoints {
    region: String,
    cd_tekton_pipeline: &'static str,
    cd_toolchain: &'static str,
}

fn endpoints(region: &str) -> Option<RegionEndpoints> {
    Some(RegionEndpoints {
        region: region.to_string(),
        cd_tekton_pipeline: tekton::service_url_for_region(region)?,
        cd_toolchain: toolchain::service_url_for_region(region)?,
    })
}

impl RegionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let Some(endpoints) = endpoints(&self.name) else {
            anyhow::bail!(
                "Unknown region '{}'. Known regions: {}",
                self.name,
                REGIONS.join(", ")
            );
        };

        let output = global.output();
        match output.format() {
            OutputFormat::Json => output.write_to(&mut std::io::stdout().lock(), &endpoints),
            OutputFormat::Table => {
                let table = TableBuilder::new(console::colors_enabled())
                    .headers(&["SERVICE", "URL"])
                    .row(vec![
                        "cd_tekton_pipeline".to_string(),
                        endpoints.cd_tekton_pipeline.to_string(),
                    ])
                    .row(vec![
                        "cd_toolchain".to_string(),
                        endpoints.cd_toolchain.to_string(),
                    ])
                    .build();
                println!("{}", table);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_known_region() {
        let found = endpoints("ca-tor").unwrap();
        assert_eq!(
            found.cd_toolchain,
            "https://api.ca-tor.devops.cloud.ibm.com/toolchain/v2"
        );
        assert!(found.cd_tekton_pipeline.ends_with("/pipeline/v2"));
    }

    #[test]
    fn test_endpoints_unknown_region() {
        assert_eq!(endpoints("atlantis"), None);
    }
}
