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

//! REST API for the companies collection.
//!
//! ## API Structure
//!
//! ```text
//! /health                 - Health check (outside the request gate)
//! /docs, /openapi.json    - Swagger UI and OpenAPI document
//! /companys               - List (paginated), create, pre-flight
//! /companys/seed          - Bulk reseed
//! /companys/{id}          - Fetch, update, delete, pre-flight
//! ```
//!
//! ## Module Organization
//!
//! - `gate` - Accept header enforcement, CORS headers, pre-flight responses
//! - `pagination` - Page parsing, page arithmetic and the collection envelope
//! - `links` - Hypermedia URLs and resource formatting
//! - `handlers` - Request handlers
//! - `models` - Request and response bodies
//! - `error` - Error to response mapping

pub mod error;
pub mod gate;
pub mod handlers;
pub mod links;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod routes;

pub use error::ApiError;
pub use links::LinkBuilder;
pub use models::*;
pub use openapi::ApiDoc;
pub use pagination::{paginate, PageQuery, PageRequest};
pub use routes::{build_companies_router, build_router};
