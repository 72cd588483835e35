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

//! Offset/limit pagination of the companies collection.
//!
//! A request is either unpaginated (either parameter missing or not a
//! positive integer) and returns the full collection as page 1 of 1, or it
//! names a page and a page size and returns that slice together with
//! first/last/previous/next links computed from the live item count.

use log::debug;
use serde::Deserialize;
use std::num::NonZeroU64;
use utoipa::IntoParams;

use super::links::LinkBuilder;
use super::models::{CollectionLinks, CompanyCollection, Link, PageLink, Pagination, PaginationLinks};
use crate::store::{CompanyStore, StoreError};

/// Raw `page`/`limit` query parameters. Kept as strings so malformed
/// values fall back to "unset" instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Items per page
    pub limit: Option<String>,
}

/// What the caller asked for after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Return the whole collection as a single implicit page.
    All,
    Page { page: NonZeroU64, limit: NonZeroU64 },
}

/// Parse a positive base-10 integer. Anything else is "unset".
pub fn parse_positive(raw: Option<&str>) -> Option<NonZeroU64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .and_then(NonZeroU64::new)
}

impl PageRequest {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        match (parse_positive(page), parse_positive(limit)) {
            (Some(page), Some(limit)) => PageRequest::Page { page, limit },
            _ => PageRequest::All,
        }
    }
}

impl From<&PageQuery> for PageRequest {
    fn from(query: &PageQuery) -> Self {
        PageRequest::new(query.page.as_deref(), query.limit.as_deref())
    }
}

/// Page arithmetic for a paginated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PagePlan {
    pub fn new(page: NonZeroU64, limit: NonZeroU64, total_items: u64) -> Self {
        let page = page.get();
        let limit = limit.get();
        Self {
            page,
            limit,
            skip: (page - 1).saturating_mul(limit),
            total_items,
            total_pages: total_items.div_ceil(limit),
        }
    }

    /// Page targeted by the `last` link; never below 1.
    pub fn last_page(&self) -> u64 {
        self.total_pages.max(1)
    }

    pub fn previous_page(&self) -> Option<u64> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    fn links(&self, links: &LinkBuilder) -> PaginationLinks {
        let to = |page: u64| PageLink {
            page,
            href: links.page(page, self.limit),
        };
        PaginationLinks {
            first: to(1),
            last: to(self.last_page()),
            previous: self.previous_page().map(to),
            next: self.next_page().map(to),
        }
    }
}

/// Query the store and build the collection envelope for `request`.
pub async fn paginate(
    store: &dyn CompanyStore,
    links: &LinkBuilder,
    request: PageRequest,
) -> Result<CompanyCollection, StoreError> {
    match request {
        PageRequest::All => {
            let companies = store.find(0, None).await?;
            let total = companies.len() as u64;
            let items = companies.iter().map(|c| links.format(c)).collect();
            let bare = |page| PageLink {
                page,
                href: links.collection(),
            };

            Ok(CompanyCollection {
                items,
                links: CollectionLinks {
                    self_link: Link::new(links.collection()),
                    collection: Link::new(links.collection()),
                },
                pagination: Pagination {
                    current_page: 1,
                    current_items: total,
                    total_pages: 1,
                    total_items: total,
                    links: PaginationLinks {
                        first: bare(1),
                        last: bare(1),
                        previous: None,
                        next: None,
                    },
                },
            })
        }
        PageRequest::Page { page, limit } => {
            let total_items = store.count().await?;
            let plan = PagePlan::new(page, limit, total_items);
            debug!(
                "Paginating companies: page {} of {}, limit {}, skip {}",
                plan.page, plan.total_pages, plan.limit, plan.skip
            );

            let companies = store.find(plan.skip, Some(plan.limit)).await?;
            let items: Vec<_> = companies.iter().map(|c| links.format(c)).collect();

            Ok(CompanyCollection {
                links: CollectionLinks {
                    self_link: Link::new(links.page(plan.page, plan.limit)),
                    collection: Link::new(links.collection()),
                },
                pagination: Pagination {
                    current_page: plan.page,
                    current_items: items.len() as u64,
                    total_pages: plan.total_pages,
                    total_items: plan.total_items,
                    links: plan.links(links),
                },
                items,
            })
        }
    }
}
