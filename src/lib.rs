//
//  ibm-continuous-delivery
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # IBM Continuous Delivery
//!
//! Typed async clients for the IBM Cloud Continuous Delivery Tekton Pipeline
//! and Toolchain APIs, and the `cdctl` command-line tool built on them.
//!
//! ## Module Structure
//!
//! - [`api`]: Service clients, models and pagers
//! - [`auth`]: Request authentication
//! - [`config`]: Service URL and credential resolution
//! - [`output`]: Table and JSON rendering for `cdctl`
//! - [`cli`]: Command-line definitions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ibm_continuous_delivery::api::toolchain::{CdToolchainV2, ListToolsParams};
//!
//! # async fn example() -> Result<(), ibm_continuous_delivery::api::ApiError> {
//! let service = CdToolchainV2::from_config()?;
//! let tools = service.tools_pager(ListToolsParams::new("toolchain-id"))?.get_all().await?;
//! for tool in tools {
//!     println!("{} ({})", tool.id, tool.tool_type_id);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// API clients for the Continuous Delivery services.
pub mod api;

/// Request authentication.
pub mod auth;

/// Configuration resolution from flags, environment and file.
pub mod config;

/// Output formatting for `cdctl`.
pub mod output;

pub use cli::Cli;

/// Application name, used for the binary and the config directory.
pub const APP_NAME: &str = "cdctl";

/// Crate version, from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for `cdctl`.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or configuration.
    pub const USAGE: i32 = 2;

    /// Credentials missing, invalid or insufficient.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// Rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// The exit code for an error returned by a command.
    ///
    /// ```rust
    /// use ibm_continuous_delivery::api::ApiError;
    /// use ibm_continuous_delivery::exit_codes;
    ///
    /// let err = anyhow::Error::new(ApiError::NotFound("gone".into())).context("Failed to get tool");
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        use crate::api::ApiError;

        match err.downcast_ref::<ApiError>() {
            Some(ApiError::AuthFailed(_) | ApiError::Forbidden(_)) => AUTH_ERROR,
            Some(ApiError::NotFound(_)) => NOT_FOUND,
            Some(ApiError::RateLimited(_)) => RATE_LIMIT,
            Some(ApiError::InvalidArgument(_) | ApiError::Config(_)) => USAGE,
            _ => ERROR,
        }
    }
}
