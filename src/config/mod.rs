//
//  ibm-continuous-delivery
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Resolves where a service client sends requests and how it authenticates.
//!
//! ## Resolution Order
//!
//! For each setting, the first source that provides it wins:
//!
//! 1. Explicit values (`with_url`, `with_region`, CLI flags)
//! 2. Environment variables `<PREFIX>_URL`, `<PREFIX>_REGION`,
//!    `<PREFIX>_AUTH_TYPE`, `<PREFIX>_BEARER_TOKEN`, `<PREFIX>_USERNAME`,
//!    `<PREFIX>_PASSWORD`, where `PREFIX` is the upper-cased service name
//!    (`CD_TEKTON_PIPELINE`, `CD_TOOLCHAIN`)
//! 3. The `[services.<name>]` table of the [config file](ConfigFile)
//! 4. The service's default URL (us-south) and no authentication
//!
//! A URL always takes precedence over a region.
//!
//! ## Example
//!
//! ```rust
//! use ibm_continuous_delivery::api::tekton;
//! use ibm_continuous_delivery::config::ServiceSettings;
//!
//! let settings = ServiceSettings::default().with_region("eu-de");
//! let url = settings
//!     .resolve_url("https://default.example.com", tekton::service_url_for_region)
//!     .unwrap();
//! assert_eq!(url, "https://api.eu-de.devops.cloud.ibm.com/pipeline/v2");
//! ```

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::auth::Authenticator;

/// Connection and authentication settings of one service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Full service URL.
    pub url: Option<String>,
    /// Region whose public endpoint to use when `url` is unset.
    pub region: Option<String>,
    /// `bearerToken`, `basic` or `noAuth`.
    pub auth_type: Option<String>,
    /// Token for `bearerToken`.
    pub bearer_token: Option<String>,
    /// Username for `basic`.
    pub username: Option<String>,
    /// Password for `basic`.
    pub password: Option<String>,
}

impl ServiceSettings {
    /// Environment variable prefix of `service_name`.
    ///
    /// ```rust
    /// use ibm_continuous_delivery::config::ServiceSettings;
    ///
    /// assert_eq!(ServiceSettings::env_prefix("cd_toolchain"), "CD_TOOLCHAIN");
    /// ```
    pub fn env_prefix(service_name: &str) -> String {
        service_name.to_ascii_uppercase().replace('-', "_")
    }

    /// Reads the settings of `service_name` from the process environment.
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Reads the settings of `service_name` through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = Self::env_prefix(service_name);
        let get = |suffix: &str| lookup(&format!("{}_{}", prefix, suffix)).filter(|v| !v.is_empty());

        Self {
            url: get("URL"),
            region: get("REGION"),
            auth_type: get("AUTH_TYPE"),
            bearer_token: get("BEARER_TOKEN"),
            username: get("USERNAME"),
            password: get("PASSWORD"),
        }
    }

    /// Loads the settings of `service_name` from the environment, falling back
    /// to the config file.
    pub fn load(service_name: &str) -> Result<Self, ApiError> {
        let file = ConfigFile::load()?;
        let settings = Self::from_env(service_name).merged_over(file.service(service_name));
        tracing::debug!(
            service = service_name,
            url = ?settings.url,
            region = ?settings.region,
            auth_type = ?settings.auth_type,
            "loaded service settings"
        );
        Ok(settings)
    }

    /// Fills every unset field from `fallback`.
    pub fn merged_over(self, fallback: ServiceSettings) -> Self {
        Self {
            url: self.url.or(fallback.url),
            region: self.region.or(fallback.region),
            auth_type: self.auth_type.or(fallback.auth_type),
            bearer_token: self.bearer_token.or(fallback.bearer_token),
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
        }
    }

    /// Sets an explicit service URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Selects a region explicitly. Any configured URL is dropped so that the
    /// region takes effect.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self.url = None;
        self
    }

    /// Sets a bearer token, switching the auth type to `bearerToken`.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth_type = Some(crate::auth::AUTH_TYPE_BEARER_TOKEN.to_string());
        self.bearer_token = Some(token.into());
        self
    }

    /// Builds the authenticator these settings describe.
    ///
    /// Without an explicit auth type, a bearer token selects `bearerToken`, a
    /// username and password select `basic`, and anything else `noAuth`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unknown auth type or missing values.
    pub fn authenticator(&self) -> Result<Authenticator, ApiError> {
        if let Some(auth_type) = &self.auth_type {
            return Authenticator::from_parts(
                auth_type,
                self.bearer_token.as_deref(),
                self.username.as_deref(),
                self.password.as_deref(),
            );
        }

        Ok(match (&self.bearer_token, &self.username, &self.password) {
            (Some(token), _, _) => Authenticator::bearer(token.clone()),
            (None, Some(username), Some(password)) => {
                Authenticator::basic(username.clone(), password.clone())
            }
            _ => Authenticator::NoAuth,
        })
    }

    /// The service URL these settings select.
    ///
    /// Uses `url` if set, then `region` through `lookup`, then `default_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if `region` has no public deployment.
    pub fn resolve_url(
        &self,
        default_url: &str,
        lookup: fn(&str) -> Option<&'static str>,
    ) -> Result<String, ApiError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        match &self.region {
            Some(region) => lookup(region)
                .map(str::to_string)
                .ok_or_else(|| ApiError::Config(format!("unknown region '{}'", region))),
            None => Ok(default_url.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::toolchain;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_uses_service_prefix() {
        let settings = ServiceSettings::from_lookup(
            "cd_toolchain",
            lookup(&[
                ("CD_TOOLCHAIN_REGION", "ca-tor"),
                ("CD_TOOLCHAIN_BEARER_TOKEN", "tok"),
                ("CD_TOOLCHAIN_USERNAME", ""),
                ("CD_TEKTON_PIPELINE_URL", "http://other"),
            ]),
        );
        assert_eq!(settings.region.as_deref(), Some("ca-tor"));
        assert_eq!(settings.bearer_token.as_deref(), Some("tok"));
        assert_eq!(settings.username, None);
        assert_eq!(settings.url, None);
    }

    #[test]
    fn test_merged_over_prefers_self() {
        let env = ServiceSettings {
            region: Some("eu-de".to_string()),
            ..Default::default()
        };
        let file = ServiceSettings {
            region: Some("jp-tok".to_string()),
            bearer_token: Some("from-file".to_string()),
            ..Default::default()
        };
        let merged = env.merged_over(file);
        assert_eq!(merged.region.as_deref(), Some("eu-de"));
        assert_eq!(merged.bearer_token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_resolve_url_precedence() {
        let default = toolchain::CdToolchainV2::DEFAULT_SERVICE_URL;
        let lookup = toolchain::service_url_for_region;

        assert_eq!(
            ServiceSettings::default().resolve_url(default, lookup).unwrap(),
            default
        );
        assert_eq!(
            ServiceSettings::default()
                .with_region("au-syd")
                .resolve_url(default, lookup)
                .unwrap(),
            "https://api.au-syd.devops.cloud.ibm.com/toolchain/v2"
        );

        let explicit = ServiceSettings {
            url: Some("http://localhost:1234".to_string()),
            region: Some("au-syd".to_string()),
            ..Default::default()
        };
        assert_eq!(
            explicit.resolve_url(default, lookup).unwrap(),
            "http://localhost:1234"
        );
        assert_eq!(
            explicit
                .with_region("eu-es")
                .resolve_url(default, lookup)
                .unwrap(),
            "https://api.eu-es.devops.cloud.ibm.com/toolchain/v2"
        );
    }

    #[test]
    fn test_unknown_region_is_config_error() {
        let err = ServiceSettings::default()
            .with_region("moon-1")
            .resolve_url("https://x", toolchain::service_url_for_region)
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(ref m) if m.contains("moon-1")));
    }

    #[test]
    fn test_authenticator_inference() {
        assert!(matches!(
            ServiceSettings::default().authenticator(),
            Ok(Authenticator::NoAuth)
        ));
        assert!(matches!(
            ServiceSettings::default()
                .with_bearer_token("t")
                .authenticator(),
            Ok(Authenticator::BearerToken { .. })
        ));

        let basic = ServiceSettings {
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        assert!(matches!(basic.authenticator(), Ok(Authenticator::Basic { .. })));

        let incomplete = ServiceSettings {
            auth_type: Some("basic".to_string()),
            username: Some("u".to_string()),
            ..Default::default()
        };
        assert!(matches!(incomplete.authenticator(), Err(ApiError::Config(_))));
    }
}
