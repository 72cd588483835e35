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

//! Shared helpers for the integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use company_api::store::{CompanyStore, MemoryStore, NewCompany};
use company_api::{CompanyServerBuilder, SeedSettings, SharedStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://api.test";

/// Router over a fresh in-memory store, plus a handle to that store.
pub async fn test_app() -> (Router, SharedStore) {
    test_app_with_seed(SeedSettings {
        default_amount: 10,
        max_amount: 50,
    })
    .await
}

pub async fn test_app_with_seed(seed: SeedSettings) -> (Router, SharedStore) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    (app_over(store.clone(), seed).await, store)
}

/// Router over a caller-supplied store.
pub async fn app_over(store: SharedStore, seed: SeedSettings) -> Router {
    CompanyServerBuilder::new()
        .with_base_url(BASE_URL)
        .with_store(store)
        .with_seed_settings(seed)
        .build()
        .await
        .unwrap()
        .router()
}

/// Insert `n` companies titled `company 0..n` directly into the store.
pub async fn populate(store: &SharedStore, n: usize) -> Vec<String> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let company = store
            .insert(NewCompany::new(
                format!("company {i}"),
                format!("description {i}"),
                format!("review {i}"),
            ))
            .await
            .unwrap();
        ids.push(company.id);
    }
    ids
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Send a request with `Accept: application/json`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_accept(app, method, uri, body, Some("application/json")).await
}

pub async fn send_with_accept(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    accept: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: body.to_vec(),
    }
}
