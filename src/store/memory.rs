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

//! In-process company store.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{generate_id, Company, CompanyPatch, CompanyStore, NewCompany, StoreError};

/// Thread-safe, insertion-ordered collection held in memory.
///
/// Cloning yields another handle onto the same collection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    companies: Arc<RwLock<IndexMap<String, Company>>>,
    closed: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn find(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Company>, StoreError> {
        self.ensure_open()?;
        let companies = self.companies.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        Ok(companies.values().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, StoreError> {
        self.ensure_open()?;
        Ok(self.companies.read().await.get(id).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.ensure_open()?;
        Ok(self.companies.read().await.len() as u64)
    }

    async fn insert(&self, company: NewCompany) -> Result<Company, StoreError> {
        self.ensure_open()?;
        company.validate()?;
        let company = company.into_company(generate_id());
        self.companies
            .write()
            .await
            .insert(company.id.clone(), company.clone());
        Ok(company)
    }

    async fn update(&self, id: &str, patch: CompanyPatch) -> Result<Option<Company>, StoreError> {
        self.ensure_open()?;
        patch.validate()?;
        let mut companies = self.companies.write().await;
        Ok(companies.get_mut(id).map(|company| {
            patch.apply_to(company);
            company.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_open()?;
        Ok(self.companies.write().await.shift_remove(id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        self.ensure_open()?;
        let mut companies = self.companies.write().await;
        let removed = companies.len() as u64;
        companies.clear();
        Ok(removed)
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
