//
//  ibm-continuous-delivery
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed clients for the two IBM Cloud Continuous Delivery REST APIs.
//!
//! ## Architecture
//!
//! - [`client`]: Request executor shared by both services
//! - [`common`]: Error type, link types and the pagination core
//! - [`tekton`]: CD Tekton Pipeline API v2
//! - [`toolchain`]: CD Toolchain API v2
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]. Non-success statuses map to variants:
//!
//! - `BadRequest`: 400
//! - `AuthFailed`: 401
//! - `Forbidden`: 403
//! - `NotFound`: 404
//! - `RateLimited`: 429
//! - `ServerError`: 5xx

/// Request executor: URL building, auth injection and status mapping.
pub mod client;

/// Types shared by both services.
pub mod common;

/// CD Tekton Pipeline API v2.
pub mod tekton;

/// CD Toolchain API v2.
pub mod toolchain;

pub use client::{BaseService, DetailedResponse};
pub use common::ApiError;

/// Regions with a public deployment of both services.
pub const REGIONS: [&str; 10] = [
    "us-south", "us-east", "eu-de", "eu-gb", "eu-es", "jp-osa", "jp-tok", "au-syd", "ca-tor",
    "br-sao",
];
