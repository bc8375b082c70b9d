use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::ServerState;
use crate::types::{AnalysisRequest, AnalysisResponse};

/// Failures other than bad input come back as `200` with `success: false`.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis result; check `success`", body = AnalysisResponse),
        (status = 400, description = "Missing or blank username", body = ApiErrorResponse),
        (status = 422, description = "Body is not a valid request", body = ApiErrorResponse),
    ),
    description = "Analyze a GitHub profile and produce hackathon project recommendations."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn analyze(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    Ok(Json(
        state.service.analyze(&request.username, &request.agent),
    ))
}
