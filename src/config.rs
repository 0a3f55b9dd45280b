// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration.
//!
//! Configuration is loaded once at process start and passed by value into
//! whatever consumes it; nothing in this library holds or mutates global
//! configuration state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Credentials;

/// Construction parameters for a gateway session.
///
/// # Examples
///
/// ```
/// use tradfri_lib::{Credentials, GatewayConfig};
///
/// let config = GatewayConfig::new(
///     "192.168.178.28",
///     Credentials::new("tradfri_0001", "8kVc2plyV7zBqE4m"),
/// )
/// .with_debug(true);
///
/// assert_eq!(config.host, "192.168.178.28");
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway host: a domain name or a dotted IP address.
    pub host: String,
    /// Credentials authorizing the session.
    pub credentials: Credentials,
    /// Whether the gateway client should log device updates.
    #[serde(default)]
    pub debug: bool,
}

impl GatewayConfig {
    /// Creates a configuration for the given host and credentials.
    #[must_use]
    pub fn new(host: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host: host.into(),
            credentials,
            debug: false,
        }
    }

    /// Enables or disables gateway client debug logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the string is not valid JSON, or
    /// `ConfigError::MissingHost` if no gateway host is given.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, and the same
    /// errors as [`from_json_str`](Self::from_json_str) otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), host = %config.host, "Loaded gateway configuration");
        Ok(config)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingHost);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_str_parses() {
        let config = GatewayConfig::from_json_str(
            r#"{
                "host": "192.168.178.28",
                "credentials": { "identity": "tradfri_0001", "psk": "secret" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.host, "192.168.178.28");
        assert_eq!(config.credentials.identity(), "tradfri_0001");
        assert!(!config.debug);
    }

    #[test]
    fn from_json_str_reads_debug_flag() {
        let config = GatewayConfig::from_json_str(
            r#"{
                "host": "gateway.local",
                "credentials": { "identity": "id", "psk": "key" },
                "debug": true
            }"#,
        )
        .unwrap();

        assert!(config.debug);
    }

    #[test]
    fn from_json_str_rejects_empty_host() {
        let result = GatewayConfig::from_json_str(
            r#"{ "host": "  ", "credentials": { "identity": "id", "psk": "key" } }"#,
        );
        assert!(matches!(result.unwrap_err(), ConfigError::MissingHost));
    }

    #[test]
    fn from_json_str_rejects_malformed_json() {
        let result = GatewayConfig::from_json_str("{ not json");
        assert!(matches!(result.unwrap_err(), ConfigError::Json(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = GatewayConfig::load("/nonexistent/tradfri.json");
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
