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

//! HTTP handlers for the companies collection.
//!
//! Handlers validate their input before touching the store, then map the
//! store outcome onto a status code. Store failures are logged and turned
//! into a generic 500 by [`ApiError::store`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use log::{debug, info};
use std::sync::Arc;

use super::error::ApiError;
use super::links::LinkBuilder;
use super::models::{
    CompanyCollection, CompanyInput, ErrorResponse, HealthResponse, ItemResponse,
    MessageResponse, SeedRequest,
};
use super::pagination::{paginate, PageQuery, PageRequest};
use crate::config::SeedSettings;
use crate::seed::placeholder_company;
use crate::store::{NewCompany, SharedStore};

pub const SEED_MESSAGE: &str = "Created companys";

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List companies, optionally paginated
///
/// Both `page` and `limit` must be positive integers for pagination to
/// apply; otherwise the whole collection is returned as a single page.
#[utoipa::path(
    get,
    path = "/companys",
    params(PageQuery),
    responses(
        (status = 200, description = "Collection envelope", body = CompanyCollection),
        (status = 406, description = "Accept header is not application/json", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn list_companies(
    Extension(store): Extension<SharedStore>,
    Extension(links): Extension<Arc<LinkBuilder>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CompanyCollection>, ApiError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            debug!("Ignoring malformed query string: {rejection}");
            PageQuery::default()
        }
    };

    let collection = paginate(store.as_ref(), &links, PageRequest::from(&query))
        .await
        .map_err(|e| ApiError::store("listing companies", e))?;
    Ok(Json(collection))
}

/// Get a company by id
#[utoipa::path(
    get,
    path = "/companys/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "The company", body = ItemResponse),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn get_company(
    Extension(store): Extension<SharedStore>,
    Extension(links): Extension<Arc<LinkBuilder>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let company = store
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::store("fetching company", e))?
        .ok_or_else(ApiError::company_not_found)?;
    Ok(Json(links.format(&company).into()))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/companys",
    request_body = CompanyInput,
    responses(
        (status = 201, description = "Company created", body = ItemResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn create_company(
    Extension(store): Extension<SharedStore>,
    Extension(links): Extension<Arc<LinkBuilder>>,
    body: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Json(input) = body?;

    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let new_company = NewCompany::new(
        input.title.unwrap_or_default(),
        input.description.unwrap_or_default(),
        input.review.unwrap_or_default(),
    );
    let company = store
        .insert(new_company)
        .await
        .map_err(|e| ApiError::store("creating company", e))?;

    debug!("Created company '{}'", company.id);
    Ok((StatusCode::CREATED, Json(links.format(&company).into())))
}

/// Update some or all fields of a company
#[utoipa::path(
    put,
    path = "/companys/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    request_body = CompanyInput,
    responses(
        (status = 200, description = "Company updated", body = ItemResponse),
        (status = 400, description = "No fields supplied or a field is blank", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn update_company(
    Extension(store): Extension<SharedStore>,
    Extension(links): Extension<Arc<LinkBuilder>>,
    Path(id): Path<String>,
    body: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(input) = body?;

    let patch = input.into_patch();
    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one of title, description or review is required".to_string(),
        ));
    }
    patch
        .validate()
        .map_err(|e| ApiError::store("validating update", e))?;

    let company = store
        .update(&id, patch)
        .await
        .map_err(|e| ApiError::store("updating company", e))?
        .ok_or_else(ApiError::company_not_found)?;
    Ok(Json(links.format(&company).into()))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/companys/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn delete_company(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = store
        .delete(&id)
        .await
        .map_err(|e| ApiError::store("deleting company", e))?;
    if !deleted {
        return Err(ApiError::company_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve the requested reseed count.
pub fn seed_amount(
    amount: Option<&serde_json::Value>,
    settings: SeedSettings,
) -> Result<u64, ApiError> {
    use serde_json::Value;

    let invalid = || {
        ApiError::BadRequest(format!(
            "'amount' must be a whole number between 0 and {}",
            settings.max_amount
        ))
    };

    let amount = match amount {
        None | Some(Value::Null) => settings.default_amount,
        Some(Value::Number(n)) => n.as_u64().ok_or_else(invalid)?,
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    if amount > settings.max_amount {
        return Err(invalid());
    }
    Ok(amount)
}

/// Replace the whole collection with generated companies
///
/// Deletes every existing record, then inserts `amount` records with
/// placeholder content. Not atomic: a failure part-way leaves the
/// collection partially reseeded. The amount is validated before anything
/// is deleted, so a bad amount is a 400 that leaves the collection untouched.
#[utoipa::path(
    post,
    path = "/companys/seed",
    request_body(content = SeedRequest, description = "Optional record count"),
    responses(
        (status = 200, description = "Collection reseeded", body = MessageResponse),
        (status = 400, description = "Invalid amount", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Companies"
)]
pub async fn seed_companies(
    Extension(store): Extension<SharedStore>,
    Extension(settings): Extension<SeedSettings>,
    body: Result<Json<SeedRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Seeding with default amount, body not usable: {rejection}");
            SeedRequest::default()
        }
    };
    let amount = seed_amount(request.amount.as_ref(), settings)?;

    let deleted = store
        .delete_all()
        .await
        .map_err(|e| ApiError::store("clearing companies for reseed", e))?;
    info!("Reseed removed {deleted} companies");

    for _ in 0..amount {
        store
            .insert(placeholder_company())
            .await
            .map_err(|e| ApiError::store("inserting seeded company", e))?;
    }
    info!("Reseed created {amount} companies");

    Ok(Json(MessageResponse {
        message: SEED_MESSAGE.to_string(),
    }))
}

/// JSON 405 for a known path called with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// JSON 404 for unrouted paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    const SETTINGS: SeedSettings = SeedSettings {
        default_amount: 10,
        max_amount: 100,
    };

    #[test_case(None => Some(10) ; "absent uses default")]
    #[test_case(Some(json!(null)) => Some(10) ; "null uses default")]
    #[test_case(Some(json!(5)) => Some(5) ; "number")]
    #[test_case(Some(json!("7")) => Some(7) ; "numeric string")]
    #[test_case(Some(json!(0)) => Some(0) ; "zero empties collection")]
    #[test_case(Some(json!(100)) => Some(100) ; "at maximum")]
    #[test_case(Some(json!(101)) => None ; "above maximum")]
    #[test_case(Some(json!(-1)) => None ; "negative")]
    #[test_case(Some(json!(2.5)) => None ; "fractional")]
    #[test_case(Some(json!("many")) => None ; "text")]
    #[test_case(Some(json!(true)) => None ; "boolean")]
    fn test_seed_amount(amount: Option<serde_json::Value>) -> Option<u64> {
        seed_amount(amount.as_ref(), SETTINGS).ok()
    }

    #[test]
    fn test_seed_amount_error_is_bad_request() {
        let err = seed_amount(Some(&json!(-3)), SETTINGS).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("100"), "{err}");
    }
}
