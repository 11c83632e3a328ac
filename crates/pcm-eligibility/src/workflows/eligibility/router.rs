use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::certificate::CertificateRequest;
use super::domain::{CandidateId, ExperienceSubmission};
use super::repository::{CandidateRepository, RepositoryError};
use super::service::{EligibilityService, EligibilityServiceError};

/// Exam and education selection posted by intake forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRequest {
    pub exam_code: String,
    pub education_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionOpened {
    pub(crate) candidate_id: CandidateId,
}

/// Router builder exposing the eligibility workflow over HTTP.
pub fn eligibility_router<R>(service: Arc<EligibilityService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/exams", get(catalogue_handler::<R>))
        .route("/api/v1/candidates", post(open_handler::<R>))
        .route(
            "/api/v1/candidates/:candidate_id",
            get(progress_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/requirement",
            put(requirement_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/experiences",
            post(experience_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/certificate",
            post(certificate_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn catalogue_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    (StatusCode::OK, Json(service.catalogue())).into_response()
}

pub(crate) async fn open_handler<R>(State(service): State<Arc<EligibilityService<R>>>) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.open_session() {
        Ok(candidate_id) => {
            (StatusCode::CREATED, Json(SessionOpened { candidate_id })).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.progress(&CandidateId(candidate_id)) {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn requirement_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(candidate_id): Path<String>,
    Json(request): Json<RequirementRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.resolve(&id, &request.exam_code, &request.education_code) {
        Ok(requirement) => (StatusCode::OK, Json(requirement)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn experience_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(candidate_id): Path<String>,
    Json(submission): Json<ExperienceSubmission>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.record_experience(&CandidateId(candidate_id), submission) {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn certificate_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(candidate_id): Path<String>,
    Json(request): Json<CertificateRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.issue_certificate(&CandidateId(candidate_id), request) {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: EligibilityServiceError) -> Response {
    match err {
        EligibilityServiceError::Profile(error) => {
            let payload = json!({
                "error": error.to_string(),
                "kind": error.kind(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        EligibilityServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "candidate session not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        EligibilityServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({
                "error": "candidate session already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
