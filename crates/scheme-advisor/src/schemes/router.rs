use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantProfile, Identity, SchemeId};
use super::filter::FacetSelection;
use super::repository::StateStore;
use super::service::{RecommendationService, ServiceError};

/// Router builder exposing the scheme endpoints over the service facade.
pub fn scheme_router<S>(service: Arc<RecommendationService<S>>) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/profile", post(submit_profile_handler::<S>))
        .route("/api/v1/recommendations", get(recommendations_handler::<S>))
        .route("/api/v1/results", post(results_handler::<S>))
        .route("/api/v1/schemes", get(browse_handler::<S>))
        .route("/api/v1/saved", get(saved_handler::<S>))
        .route(
            "/api/v1/saved/:scheme_id",
            put(save_handler::<S>).delete(unsave_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BrowseQuery {
    q: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResultsRequest {
    facets: FacetSelection,
    search: String,
}

/// The identity collaborator arrives as an opaque header pair: a present
/// `x-user-id` means signed in. No authentication happens here.
fn identity_from_headers(headers: &HeaderMap) -> Identity {
    let user_id = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    Identity {
        is_signed_in: user_id.is_some(),
        user_id,
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::ProfileMissing | ServiceError::UnknownScheme(_) => StatusCode::NOT_FOUND,
        ServiceError::SignedOut => StatusCode::UNAUTHORIZED,
        ServiceError::Encoding(_) | ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(json!({ "error": error.to_string() }))).into_response()
}

pub(crate) async fn submit_profile_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.submit_profile(&profile) {
        Ok(()) => (
            StatusCode::ACCEPTED,
            axum::Json(json!({ "status": "saved" })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.recommendations() {
        Ok(recommended) => (StatusCode::OK, axum::Json(recommended)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    axum::Json(request): axum::Json<ResultsRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.results(&request.facets, &request.search) {
        Ok(schemes) => (StatusCode::OK, axum::Json(schemes)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn browse_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Query(query): Query<BrowseQuery>,
) -> Response
where
    S: StateStore + 'static,
{
    (StatusCode::OK, axum::Json(service.browse(&query.q))).into_response()
}

pub(crate) async fn saved_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: StateStore + 'static,
{
    let identity = identity_from_headers(&headers);
    match service.saved_schemes(&identity) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(scheme_id): Path<u32>,
    headers: HeaderMap,
) -> Response
where
    S: StateStore + 'static,
{
    let identity = identity_from_headers(&headers);
    match service.save_scheme(&identity, SchemeId(scheme_id)) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unsave_handler<S>(
    State(service): State<Arc<RecommendationService<S>>>,
    Path(scheme_id): Path<u32>,
    headers: HeaderMap,
) -> Response
where
    S: StateStore + 'static,
{
    let identity = identity_from_headers(&headers);
    match service.unsave_scheme(&identity, SchemeId(scheme_id)) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}
