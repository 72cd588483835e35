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

use anyhow::Result;

use crate::config::{SeedSettings, ServerConfig, StoreConfig};
use crate::server::CompanyServer;
use crate::store::{open_store, SharedStore};

/// Builder for creating a CompanyServer programmatically, without a config file
pub struct CompanyServerBuilder {
    host: String,
    port: u16,
    base_url: Option<String>,
    store: Option<SharedStore>,
    store_config: StoreConfig,
    seed: SeedSettings,
}

impl Default for CompanyServerBuilder {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: defaults.port,
            base_url: None,
            store: None,
            store_config: StoreConfig::Memory,
            seed: defaults.seed,
        }
    }
}

impl CompanyServerBuilder {
    /// Create a new CompanyServerBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Origin used for hypermedia links. Defaults to `http://localhost:<port>`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use an already opened store. Takes precedence over [`Self::with_store_config`].
    pub fn with_store(mut self, store: SharedStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_store_config(mut self, config: StoreConfig) -> Self {
        self.store_config = config;
        self
    }

    pub fn with_seed_settings(mut self, seed: SeedSettings) -> Self {
        self.seed = seed;
        self
    }

    fn config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            base_url: self.base_url.clone(),
            store: self.store_config.clone(),
            seed: self.seed,
            ..ServerConfig::default()
        }
    }

    /// Validate the settings, open the store if none was injected, and build the server
    pub async fn build(self) -> Result<CompanyServer> {
        let config = self.config();
        config.validate()?;

        let store = match self.store {
            Some(store) => store,
            None => open_store(&config.store).await?,
        };

        Ok(CompanyServer::from_parts(
            config.host.clone(),
            config.port,
            config.resolved_base_url(),
            store,
            config.seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CompanyStore, MemoryStore, NewCompany};
    use std::sync::Arc;

    #[test]
    fn test_builder_defaults() {
        let builder = CompanyServerBuilder::new();
        assert_eq!(builder.host, "127.0.0.1");
        assert_eq!(builder.port, 8080);
        assert!(builder.store.is_none());
        assert_eq!(builder.config().resolved_base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_builder_fluent_api() {
        let server = CompanyServerBuilder::new()
            .with_host("0.0.0.0")
            .with_port(9090)
            .with_base_url("https://api.example.com/")
            .build()
            .await
            .unwrap();

        assert_eq!(server.host(), "0.0.0.0");
        assert_eq!(server.port(), 9090);
        assert_eq!(server.base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn test_builder_uses_injected_store() {
        let store = MemoryStore::new();
        store
            .insert(NewCompany::new("Acme", "Anvils", "Good"))
            .await
            .unwrap();

        let server = CompanyServerBuilder::new()
            .with_store(Arc::new(store))
            .build()
            .await
            .unwrap();

        assert_eq!(server.store().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_builder_rejects_invalid_settings() {
        let result = CompanyServerBuilder::new().with_port(0).build().await;
        assert!(result.is_err());

        let result = CompanyServerBuilder::new()
            .with_base_url("ftp://example.com")
            .build()
            .await;
        assert!(result.is_err());
    }
}
