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

//! Request and response bodies for the companies API.
//!
//! Response types derive `Deserialize` as well so clients and tests can
//! read envelopes back into the same shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::CompanyPatch;

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Links carried by every company representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemLinks {
    /// URL of this company
    #[serde(rename = "self")]
    pub self_link: Link,
    /// URL of the companies collection
    pub collection: Link,
}

/// Public representation of a stored company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompanyResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub review: String,
    #[serde(rename = "_links")]
    pub links: ItemLinks,
}

/// Body of every single-company response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item: CompanyResource,
}

impl From<CompanyResource> for ItemResponse {
    fn from(item: CompanyResource) -> Self {
        Self { item }
    }
}

/// Links of the collection envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollectionLinks {
    /// The requested page (or the bare collection when unpaginated)
    #[serde(rename = "self")]
    pub self_link: Link,
    pub collection: Link,
}

/// Link to a specific page of the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageLink {
    pub page: u64,
    pub href: String,
}

/// Navigation links between pages. `previous`/`next` serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationLinks {
    pub first: PageLink,
    pub last: PageLink,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    /// Number of items on this page
    pub current_items: u64,
    pub total_pages: u64,
    pub total_items: u64,
    #[serde(rename = "_links")]
    pub links: PaginationLinks,
}

/// Response body of `GET /companys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompanyCollection {
    pub items: Vec<CompanyResource>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
    pub pagination: Pagination,
}

/// Body accepted by create (all fields required) and update (at least one field).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CompanyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
}

impl CompanyInput {
    /// Names of the fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("review", &self.review),
        ]
        .into_iter()
        .filter(|(_, value)| !value.as_deref().is_some_and(crate::store::is_present))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn into_patch(self) -> CompanyPatch {
        CompanyPatch {
            title: self.title,
            description: self.description,
            review: self.review,
        }
    }
}

/// Body of `POST /companys/seed`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SeedRequest {
    /// Number of records to create; a number or numeric string
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
}

/// Simple confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status of the server
    pub status: String,
    /// Current server timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
