//
//  ibm-continuous-delivery
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Tekton Pipeline and Toolchain services
//!
//! This module provides shared types used by both Continuous Delivery services:
//! the unified error type, the link type the services embed in their
//! collections, and the pagination core.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all SDK operations
//! - [`Href`] - A bare `{ "href": "..." }` link object
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use ibm_continuous_delivery::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(reason)) => println!("Check your token: {}", reason),
//!         Err(ApiError::NotFound(resource)) => println!("Resource not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Continuous Delivery SDK operations.
///
/// HTTP failures are classified by status code; local misuse (a bad argument,
/// a pager driven past its end) gets its own variants so callers can tell a
/// programming error from a service failure.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `InvalidArgument` | A parameter failed local validation | N/A |
/// | `IteratorExhausted` | `get_next` called on a finished pager | N/A |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `AuthFailed` | Missing, invalid or expired credentials | 401 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests, retry later | 429 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Unknown` | Any other non-success status | other |
/// | `Network` | Transport failure | N/A |
/// | `Decode` | Response body did not match the model | N/A |
/// | `Config` | Service configuration could not be resolved | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A parameter failed local validation before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `get_next` was called after the pager observed its last page.
    #[error("No more pages: the pager is exhausted")]
    IteratorExhausted,

    /// The request was malformed or contained invalid parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failed due to missing, invalid or expired credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The authenticated identity may not perform this operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// An internal error occurred on the service side (HTTP 5xx).
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// The 5xx status code returned by the service
        status: u16,
        /// The message extracted from the error body
        message: String,
    },

    /// A non-success status that has no dedicated variant.
    #[error("Unexpected status {status}: {message}")]
    Unknown {
        /// The HTTP status code returned by the service
        status: u16,
        /// The message extracted from the error body
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response (or request) body could not be (de)serialized.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Service configuration is missing or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classifies a non-success HTTP response.
    ///
    /// The message is pulled out of the IBM Cloud error body when possible
    /// (see [`extract_error_message`]); otherwise the raw body is used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ibm_continuous_delivery::api::common::ApiError;
    /// use reqwest::StatusCode;
    ///
    /// let body = r#"{"errors":[{"code":"not_found","message":"Toolchain not found"}]}"#;
    /// let err = ApiError::from_status(StatusCode::NOT_FOUND, body);
    /// assert!(matches!(err, ApiError::NotFound(ref m) if m == "Toolchain not found"));
    /// ```
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = extract_error_message(status, body);
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited(message),
            code @ 500..=599 => Self::ServerError {
                status: code,
                message,
            },
            code => Self::Unknown {
                status: code,
                message,
            },
        }
    }

    /// Returns the HTTP status this error was built from, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimited(_) => Some(429),
            Self::ServerError { status, .. } | Self::Unknown { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pulls a human readable message out of an IBM Cloud error body.
///
/// IBM Cloud services return errors in the format:
/// ```json
/// {"errors": [{"code": "...", "message": "Human readable message"}], "trace": "..."}
/// ```
///
/// Older endpoints use a flat `{"message": "..."}` or `{"error": "..."}`.
/// If nothing matches, the raw body (or the status reason) is returned.
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json.get("error").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body.to_string()
    }
}

/// A bare link object, as embedded in collections (`first`, `next`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Href {
    /// Fully qualified URL of the linked resource or page.
    pub href: String,
}
