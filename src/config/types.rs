// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration types for the company service.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Prefix for every hypermedia link. Defaults to `http://localhost:<port>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub seed: SeedSettings,
}

/// Which document store backs the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", deny_unknown_fields)]
pub enum StoreConfig {
    /// Volatile, process-local collection.
    #[default]
    Memory,
    /// JSON document persisted at `<path>/<database>.json`.
    File {
        #[serde(default = "default_store_path")]
        path: PathBuf,
        #[serde(default = "default_database")]
        database: String,
    },
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Memory => "memory",
            StoreConfig::File { .. } => "file",
        }
    }
}

/// Limits for the bulk reseed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedSettings {
    /// Records created when the request does not specify an amount.
    #[serde(default = "default_seed_amount")]
    pub default_amount: u64,
    /// Upper bound accepted from callers.
    #[serde(default = "default_seed_max")]
    pub max_amount: u64,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            default_amount: default_seed_amount(),
            max_amount: default_seed_max(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            base_url: None,
            store: StoreConfig::default(),
            seed: SeedSettings::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_database() -> String {
    "companies".to_string()
}

fn default_seed_amount() -> u64 {
    10
}

fn default_seed_max() -> u64 {
    1000
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

impl ServerConfig {
    /// Base URL used for links, without a trailing slash.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow::anyhow!("Invalid port: 0 (cannot be 0)"));
        }

        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("host cannot be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid logLevel '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "Invalid baseUrl '{url}': must start with http:// or https://"
                ));
            }
        }

        if let StoreConfig::File { database, .. } = &self.store {
            if database.trim().is_empty() {
                return Err(anyhow::anyhow!("store database name cannot be empty"));
            }
            if database.contains(['/', '\\']) || database.contains("..") {
                return Err(anyhow::anyhow!(
                    "Invalid store database name '{database}': must not contain path separators"
                ));
            }
        }

        if self.seed.default_amount > self.seed.max_amount {
            return Err(anyhow::anyhow!(
                "seed.defaultAmount ({}) cannot exceed seed.maxAmount ({})",
                self.seed.default_amount,
                self.seed.max_amount
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.resolved_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ServerConfig {
            base_url: Some("https://api.example.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_port = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(zero_port.validate().is_err());

        let bad_url = ServerConfig {
            base_url: Some("localhost:3000".to_string()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_level = ServerConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(bad_level.validate().is_err());

        let bad_seed = ServerConfig {
            seed: SeedSettings {
                default_amount: 50,
                max_amount: 5,
            },
            ..Default::default()
        };
        assert!(bad_seed.validate().is_err());

        let escaping_db = ServerConfig {
            store: StoreConfig::File {
                path: PathBuf::from("./data"),
                database: "../etc".to_string(),
            },
            ..Default::default()
        };
        assert!(escaping_db.validate().is_err());
    }

    #[test]
    fn test_store_config_tagged_by_kind() {
        let yaml = "kind: file\npath: /var/lib/companies\ndatabase: prod\n";
        let store: StoreConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            store,
            StoreConfig::File {
                path: PathBuf::from("/var/lib/companies"),
                database: "prod".to_string()
            }
        );

        let store: StoreConfig = serde_yaml::from_str("kind: memory").unwrap();
        assert_eq!(store.kind(), "memory");
    }
}
