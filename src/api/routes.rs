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

//! Route definitions.
//!
//! The companies routes sit behind the request gate and the CORS header
//! layers. `/health`, `/docs` and `/openapi.json` are operational and
//! bypass both.

use axum::{
    extract::Extension,
    http::header,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::gate::{self, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
use super::handlers;
use super::links::LinkBuilder;
use super::openapi::ApiDoc;
use crate::config::SeedSettings;
use crate::store::SharedStore;

/// Build the routes of the companies collection with their dependencies attached.
pub fn build_companies_router(
    store: SharedStore,
    links: Arc<LinkBuilder>,
    seed: SeedSettings,
) -> Router {
    Router::new()
        .route(
            "/companys",
            get(handlers::list_companies)
                .post(handlers::create_company)
                .options(gate::collection_preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/companys/seed",
            post(handlers::seed_companies)
                .options(gate::seed_preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/companys/:id",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company)
                .options(gate::item_preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(Extension(store))
        .layer(Extension(links))
        .layer(Extension(seed))
        .layer(middleware::from_fn(gate::request_gate))
        .layer(gate::default_header(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            ALLOW_ORIGIN,
        ))
        .layer(gate::default_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            ALLOW_METHODS,
        ))
        .layer(gate::default_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            ALLOW_HEADERS,
        ))
}

/// Build the complete application router.
pub fn build_router(store: SharedStore, links: Arc<LinkBuilder>, seed: SeedSettings) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(build_companies_router(store, links, seed))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
}
