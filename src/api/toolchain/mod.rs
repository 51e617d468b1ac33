//
//  ibm-continuous-delivery
//  api/toolchain/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CD Toolchain API v2
//!
//! Typed client for toolchains, their tool integrations and toolchain events.

mod models;
mod pagers;
mod service;

pub use models::*;
pub use pagers::{ToolchainsList, ToolchainsPager, ToolsList, ToolsPager};
pub use service::{CdToolchainV2, ListToolchainsParams, ListToolsParams};

/// Returns the service URL of the public deployment in `region`.
///
/// Returns `None` for a region without a deployment.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::toolchain::service_url_for_region;
///
/// assert_eq!(
///     service_url_for_region("jp-tok"),
///     Some("https://api.jp-tok.devops.cloud.ibm.com/toolchain/v2")
/// );
/// assert!(service_url_for_region("nowhere").is_none());
/// ```
pub fn service_url_for_region(region: &str) -> Option<&'static str> {
    match region {
        "us-south" => Some("https://api.us-south.devops.cloud.ibm.com/toolchain/v2"),
        "us-east" => Some("https://api.us-east.devops.cloud.ibm.com/toolchain/v2"),
        "eu-de" => Some("https://api.eu-de.devops.cloud.ibm.com/toolchain/v2"),
        "eu-gb" => Some("https://api.eu-gb.devops.cloud.ibm.com/toolchain/v2"),
        "eu-es" => Some("https://api.eu-es.devops.cloud.ibm.com/toolchain/v2"),
        "jp-osa" => Some("https://api.jp-osa.devops.cloud.ibm.com/toolchain/v2"),
        "jp-tok" => Some("https://api.jp-tok.devops.cloud.ibm.com/toolchain/v2"),
        "au-syd" => Some("https://api.au-syd.devops.cloud.ibm.com/toolchain/v2"),
        "ca-tor" => Some("https://api.ca-tor.devops.cloud.ibm.com/toolchain/v2"),
        "br-sao" => Some("https://api.br-sao.devops.cloud.ibm.com/toolchain/v2"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_resolves_in_both_services() {
        for region in crate::api::REGIONS {
            let toolchain = service_url_for_region(region).unwrap();
            let pipeline = crate::api::tekton::service_url_for_region(region).unwrap();
            assert!(toolchain.contains(region));
            assert_eq!(pipeline.replace("/pipeline/", "/toolchain/"), toolchain);
        }
        assert_eq!(
            service_url_for_region("us-south"),
            Some(CdToolchainV2::DEFAULT_SERVICE_URL)
        );
    }
}
