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
use axum::Router;
use log::{error, info};
use std::sync::Arc;

use crate::api::{self, LinkBuilder};
use crate::config::{SeedSettings, ServerConfig};
use crate::store::{open_store, SharedStore};

/// The companies API server: one store handle shared by every request.
pub struct CompanyServer {
    host: String,
    port: u16,
    base_url: String,
    store: SharedStore,
    seed: SeedSettings,
}

impl CompanyServer {
    /// Create a server from a validated configuration, opening its store.
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        config.validate()?;
        let store = open_store(&config.store).await?;
        info!("Opened {} store", store.kind());

        Ok(Self::from_parts(
            config.host.clone(),
            config.port,
            config.resolved_base_url(),
            store,
            config.seed,
        ))
    }

    pub(crate) fn from_parts(
        host: String,
        port: u16,
        base_url: String,
        store: SharedStore,
        seed: SeedSettings,
    ) -> Self {
        Self {
            host,
            port,
            base_url,
            store,
            seed,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Origin used as the prefix of every hypermedia link.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// The complete application router.
    pub fn router(&self) -> Router {
        api::build_router(
            self.store.clone(),
            Arc::new(LinkBuilder::new(&self.base_url)),
            self.seed,
        )
    }

    /// Serve until Ctrl-C, then close the store.
    pub async fn run(self) -> Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting web API on {addr}");
        info!("Companies available at {}/companys", self.base_url);
        info!("Swagger UI available at http://{addr}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutting down company API");
        if let Err(e) = self.store.close().await {
            error!("Failed to close {} store: {e}", self.store.kind());
        }
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}
