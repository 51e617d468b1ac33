//
//  ibm-continuous-delivery
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File
//!
//! The optional TOML file holding per-service settings.
//!
//! ## Location
//!
//! `CDCTL_CONFIG` if set, otherwise `config.toml` in the platform
//! configuration directory:
//!
//! - **Linux**: `~/.config/cdctl/config.toml`
//! - **macOS**: `~/Library/Application Support/cdctl/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cdctl\config.toml`
//!
//! ## Example
//!
//! ```toml
//! [services.cd_tekton_pipeline]
//! region = "eu-de"
//! auth_type = "bearerToken"
//! bearer_token = "eyJraWQiOi..."
//!
//! [services.cd_toolchain]
//! url = "https://toolchain.internal.example.com/v2"
//! auth_type = "noAuth"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::ServiceSettings;
use crate::api::ApiError;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CDCTL_CONFIG";

/// Parsed contents of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Settings keyed by service name (`cd_tekton_pipeline`, `cd_toolchain`).
    #[serde(default)]
    pub services: BTreeMap<String, ServiceSettings>,
}

impl ConfigFile {
    /// Loads the file from [`ConfigFile::config_path`].
    ///
    /// A missing file yields an empty configuration.
    pub fn load() -> Result<Self, ApiError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the file at `path`; a missing file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the file exists but cannot be read or
    /// is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ApiError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| ApiError::Config(format!("invalid config file {}: {}", path.display(), e)))
    }

    /// Where the configuration file is read from.
    pub fn config_path() -> Result<PathBuf, ApiError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME).ok_or_else(|| {
            ApiError::Config("could not determine the configuration directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Settings of `service_name`, empty if the file has none.
    pub fn service(&self, service_name: &str) -> ServiceSettings {
        self.services.get(service_name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.services.is_empty());
        assert_eq!(config.service("cd_toolchain"), ServiceSettings::default());
    }

    #[test]
    fn test_load_from_reads_service_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[services.cd_tekton_pipeline]
region = "eu-gb"
auth_type = "bearerToken"
bearer_token = "abc"

[services.cd_toolchain]
url = "http://localhost:8080/v2"
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        let tekton = config.service("cd_tekton_pipeline");
        assert_eq!(tekton.region.as_deref(), Some("eu-gb"));
        assert_eq!(tekton.bearer_token.as_deref(), Some("abc"));
        assert_eq!(
            config.service("cd_toolchain").url.as_deref(),
            Some("http://localhost:8080/v2")
        );
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[services.cd_toolchain\nurl = ").unwrap();
        assert!(matches!(
            ConfigFile::load_from(file.path()),
            Err(ApiError::Config(_))
        ));
    }
}
