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

//! Content negotiation and CORS handling in front of the companies routes.
//!
//! Every non-OPTIONS request must send `Accept: application/json` or it is
//! answered with 406 before reaching a handler. OPTIONS requests are
//! pre-flight negotiation and always pass through to the pre-flight
//! handlers, which answer 204 with the allow-list for their path.
//!
//! CORS headers are added to every response, including rejections. The
//! pre-flight handlers set their own `Access-Control-Allow-Methods`, which
//! takes precedence over the default.

use axum::extract::Request;
use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::debug;
use tower_http::set_header::SetResponseHeaderLayer;

use super::error::ApiError;

pub const JSON_MEDIA_TYPE: &str = "application/json";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

pub const COLLECTION_ALLOW: &str = "GET, POST, OPTIONS";
pub const COLLECTION_PREFLIGHT_METHODS: &str = "GET, POST";
pub const ITEM_ALLOW: &str = "GET, PUT, DELETE, OPTIONS";
pub const ITEM_PREFLIGHT_METHODS: &str = "GET, PUT, DELETE";
pub const SEED_ALLOW: &str = "POST, OPTIONS";
pub const SEED_PREFLIGHT_METHODS: &str = "POST";

/// Returns true when the request may proceed past content negotiation.
pub fn is_acceptable(method: &Method, accept: Option<&HeaderValue>) -> bool {
    if *method == Method::OPTIONS {
        return true;
    }
    accept.is_some_and(|value| value.as_bytes() == JSON_MEDIA_TYPE.as_bytes())
}

/// Middleware rejecting requests that do not accept JSON.
pub async fn request_gate(request: Request, next: Next) -> Response {
    if !is_acceptable(request.method(), request.headers().get(header::ACCEPT)) {
        debug!(
            "Rejecting {} {}: Accept header {:?} is not {JSON_MEDIA_TYPE}",
            request.method(),
            request.uri().path(),
            request.headers().get(header::ACCEPT)
        );
        return ApiError::NotAcceptable.into_response();
    }
    next.run(request).await
}

/// Layer adding a CORS header unless a handler already set it.
pub fn default_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

fn preflight(allow: &'static str, methods: &'static str) -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ALLOW, allow),
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
        ],
    )
        .into_response()
}

/// `OPTIONS /companys`
#[utoipa::path(
    options,
    path = "/companys",
    responses(
        (status = 204, description = "Allowed methods for the collection", headers(("Allow" = String))),
    ),
    tag = "Companies"
)]
pub async fn collection_preflight() -> Response {
    preflight(COLLECTION_ALLOW, COLLECTION_PREFLIGHT_METHODS)
}

/// `OPTIONS /companys/{id}`
#[utoipa::path(
    options,
    path = "/companys/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 204, description = "Allowed methods for a single company", headers(("Allow" = String))),
    ),
    tag = "Companies"
)]
pub async fn item_preflight() -> Response {
    preflight(ITEM_ALLOW, ITEM_PREFLIGHT_METHODS)
}

/// `OPTIONS /companys/seed`
#[utoipa::path(
    options,
    path = "/companys/seed",
    responses(
        (status = 204, description = "Allowed methods for the reseed endpoint", headers(("Allow" = String))),
    ),
    tag = "Companies"
)]
pub async fn seed_preflight() -> Response {
    preflight(SEED_ALLOW, SEED_PREFLIGHT_METHODS)
}
