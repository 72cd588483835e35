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

//! Hypermedia link construction and resource formatting.

use super::models::{CompanyResource, ItemLinks, Link};
use crate::store::Company;

/// Path of the companies collection, relative to the base URL.
pub const COLLECTION_PATH: &str = "/companys";

/// Builds absolute URLs for the companies collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    collection: String,
}

impl LinkBuilder {
    /// `base_url` is the externally visible origin, e.g. `https://api.example.com`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            collection: format!("{base}{COLLECTION_PATH}"),
        }
    }

    pub fn collection(&self) -> String {
        self.collection.clone()
    }

    pub fn item(&self, id: &str) -> String {
        format!("{}/{id}", self.collection)
    }

    pub fn page(&self, page: u64, limit: u64) -> String {
        format!("{}?page={page}&limit={limit}", self.collection)
    }

    /// Map a stored record to its public representation.
    pub fn format(&self, company: &Company) -> CompanyResource {
        CompanyResource {
            id: company.id.clone(),
            title: company.title.clone(),
            description: company.description.clone(),
            review: company.review.clone(),
            links: ItemLinks {
                self_link: Link::new(self.item(&company.id)),
                collection: Link::new(self.collection()),
            },
        }
    }
}
