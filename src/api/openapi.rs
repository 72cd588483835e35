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

//! OpenAPI documentation for the companies API.
//!
//! The document is served at `/openapi.json` and the Swagger UI at `/docs/`.

use utoipa::OpenApi;

use super::models::{
    CollectionLinks, CompanyCollection, CompanyInput, CompanyResource, ErrorResponse,
    HealthResponse, ItemLinks, ItemResponse, Link, MessageResponse, PageLink, Pagination,
    PaginationLinks, SeedRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::list_companies,
        super::handlers::get_company,
        super::handlers::create_company,
        super::handlers::update_company,
        super::handlers::delete_company,
        super::handlers::seed_companies,
        super::gate::collection_preflight,
        super::gate::item_preflight,
        super::gate::seed_preflight,
    ),
    components(
        schemas(
            Link,
            ItemLinks,
            CompanyResource,
            ItemResponse,
            CollectionLinks,
            PageLink,
            PaginationLinks,
            Pagination,
            CompanyCollection,
            CompanyInput,
            SeedRequest,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Companies", description = "Company collection management"),
    ),
    info(
        title = "Company API",
        version = "1.0.0",
        description = "REST API for a collection of companies.\n\nEvery request to `/companys` other than `OPTIONS` must send `Accept: application/json` or it is rejected with 406.\n\n## Pagination\n\n`GET /companys?page=P&limit=L` returns page `P` of size `L`. When either parameter is missing or not a positive integer the whole collection is returned as a single page.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
