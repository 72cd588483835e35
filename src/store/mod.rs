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

//! Document store for company records.
//!
//! The store owns identity generation and persistence. Handlers talk to it
//! exclusively through the [`CompanyStore`] trait so the backing engine can
//! be swapped without touching the HTTP layer:
//!
//! - [`MemoryStore`] keeps the collection in process memory
//! - [`FileStore`] persists the collection as a single JSON document per database
//!
//! A single store handle is opened at startup and shared by every request.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::StoreConfig;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Shared, process-wide store handle injected into handlers.
pub type SharedStore = Arc<dyn CompanyStore>;

/// Errors raised by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write would violate the record schema.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store is closed")]
    Closed,
}

/// A persisted company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub title: String,
    pub description: String,
    pub review: String,
}

/// Field values for a record that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub title: String,
    pub description: String,
    pub review: String,
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
}

/// Returns true when a text field holds something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(StoreError::Validation(format!("'{field}' must be a non-empty string")))
    }
}

impl NewCompany {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        review: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            review: review.into(),
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("review", &self.review)
    }

    pub(crate) fn into_company(self, id: String) -> Company {
        Company {
            id,
            title: self.title,
            description: self.description,
            review: self.review,
        }
    }
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.review.is_none()
    }

    /// Checks every supplied field against the same rule used on create.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.is_empty() {
            return Err(StoreError::Validation(
                "at least one of 'title', 'description' or 'review' is required".to_string(),
            ));
        }
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("review", &self.review),
        ] {
            if let Some(value) = value {
                require(field, value)?;
            }
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, company: &mut Company) {
        if let Some(title) = self.title {
            company.title = title;
        }
        if let Some(description) = self.description {
            company.description = description;
        }
        if let Some(review) = self.review {
            company.review = review;
        }
    }
}

/// Generate a fresh record identifier.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Asynchronous document store for the companies collection.
///
/// Records are returned in insertion order. No operation spans more than a
/// single call, so callers composing several calls (reseed) observe
/// intermediate states.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Fetch up to `limit` records starting at offset `skip`.
    /// `limit = None` returns everything from `skip` onward.
    async fn find(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Company>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Insert a record, assigning it a new identifier.
    async fn insert(&self, company: NewCompany) -> Result<Company, StoreError>;

    /// Apply a partial update. Returns `None` when the identifier does not resolve.
    async fn update(&self, id: &str, patch: CompanyPatch) -> Result<Option<Company>, StoreError>;

    /// Remove a record. Returns `false` when the identifier does not resolve.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Remove every record, returning how many were deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Release the store. Further calls fail with [`StoreError::Closed`].
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short name of the backing engine, used in logs.
    fn kind(&self) -> &'static str;
}

/// Open the store described by the configuration.
pub async fn open_store(config: &StoreConfig) -> Result<SharedStore, StoreError> {
    match config {
        StoreConfig::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreConfig::File { path, database } => {
            let file = path.join(format!("{database}.json"));
            Ok(Arc::new(FileStore::open(file).await?))
        }
    }
}
