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

//! File-backed company store.
//!
//! The whole collection lives in one JSON document (`<path>/<database>.json`).
//! Reads are served from memory. Every mutation builds the next state,
//! writes it to a temp file and renames it over the document, and only then
//! becomes visible to readers. A failed write leaves both the file and the
//! in-memory view untouched.

use async_trait::async_trait;
use indexmap::IndexMap;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::{generate_id, Company, CompanyPatch, CompanyStore, NewCompany, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    companies: Vec<Company>,
}

struct State {
    companies: IndexMap<String, Company>,
    closed: bool,
}

pub struct FileStore {
    path: PathBuf,
    state: RwLock<State>,
}

impl FileStore {
    /// Open (or create) the document at `path`.
    ///
    /// Missing parent directories are created. An existing document that
    /// cannot be parsed is reported rather than overwritten.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let companies = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => IndexMap::new(),
            Ok(content) => {
                let document: Document = serde_json::from_str(&content)?;
                document
                    .companies
                    .into_iter()
                    .map(|company| (company.id.clone(), company))
                    .collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened company store at {} ({} record(s))",
            path.display(),
            companies.len()
        );

        Ok(Self {
            path,
            state: RwLock::new(State {
                companies,
                closed: false,
            }),
        })
    }

    async fn persist(&self, companies: &IndexMap<String, Company>) -> Result<(), StoreError> {
        let document = Document {
            companies: companies.values().cloned().collect(),
        };
        let content = serde_json::to_string_pretty(&document)?;

        let temp_path = self.path.with_extension("tmp");
        if let Err(e) = tokio::fs::write(&temp_path, content).await {
            error!("Failed to write temp store file {}: {e}", temp_path.display());
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            error!(
                "Failed to rename temp store file {} to {}: {e}",
                temp_path.display(),
                self.path.display()
            );
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Persisted {} record(s) to {}", companies.len(), self.path.display());
        Ok(())
    }

    /// Run `mutate` against a copy of the collection, persist the copy and
    /// commit it only if the write succeeded.
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut IndexMap<String, Company>) -> T,
    ) -> Result<T, StoreError> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        let mut next = state.companies.clone();
        let output = mutate(&mut next);
        self.persist(&next).await?;
        state.companies = next;
        Ok(output)
    }
}

#[async_trait]
impl CompanyStore for FileStore {
    async fn find(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Company>, StoreError> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        Ok(state
            .companies
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, StoreError> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        Ok(state.companies.get(id).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        Ok(state.companies.len() as u64)
    }

    async fn insert(&self, company: NewCompany) -> Result<Company, StoreError> {
        company.validate()?;
        let company = company.into_company(generate_id());
        let stored = company.clone();
        self.mutate(move |companies| {
            companies.insert(company.id.clone(), company);
        })
        .await?;
        Ok(stored)
    }

    async fn update(&self, id: &str, patch: CompanyPatch) -> Result<Option<Company>, StoreError> {
        patch.validate()?;
        {
            // Skip the rewrite entirely for unknown ids.
            let state = self.state.read().await;
            if !state.closed && !state.companies.contains_key(id) {
                return Ok(None);
            }
        }
        self.mutate(|companies| {
            companies.get_mut(id).map(|company| {
                patch.apply_to(company);
                company.clone()
            })
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        {
            let state = self.state.read().await;
            if !state.closed && !state.companies.contains_key(id) {
                return Ok(false);
            }
        }
        self.mutate(|companies| companies.shift_remove(id).is_some())
            .await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        self.mutate(|companies| {
            let removed = companies.len() as u64;
            companies.clear();
            removed
        })
        .await
    }

    async fn close(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.closed = true;
        info!("Closed company store at {}", self.path.display());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
