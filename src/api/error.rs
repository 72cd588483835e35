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

//! Error types and error handling utilities for the HTTP layer.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use super::models::ErrorResponse;
use crate::store::StoreError;

pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// Every way a request can fail. Each variant maps to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid input
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Known path, unsupported method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// `Accept` header is missing or is not `application/json`
    #[error("Not Acceptable: this API only serves application/json")]
    NotAcceptable,

    /// Unexpected failure. The detail is logged, never returned to the client.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn company_not_found() -> Self {
        ApiError::NotFound(COMPANY_NOT_FOUND.to_string())
    }

    /// Convert a store failure raised while performing `operation`.
    ///
    /// Schema violations become 400s; everything else is logged and hidden
    /// behind a generic 500.
    pub fn store(operation: &str, err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => ApiError::BadRequest(message),
            other => {
                error!("Store failure while {operation}: {other}");
                ApiError::Internal(other.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
