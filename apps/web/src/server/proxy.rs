use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use recommender::server::ApiError;
use recommender::{AnalysisResponse, ProfileSummary};

use crate::error::ProxyError;
use crate::server::WebState;

#[derive(Debug, Deserialize)]
pub struct ProxyRequest {
    #[serde(default)]
    pub username: String,
}

/// What the browser sees: the upstream result minus the agent name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<AnalysisResponse> for ProxyResponse {
    fn from(response: AnalysisResponse) -> Self {
        if response.success {
            Self {
                success: true,
                recommendations: response.recommendations,
                profile: response.profile,
                error: None,
            }
        } else {
            Self {
                success: false,
                recommendations: None,
                profile: None,
                error: Some(
                    response
                        .error
                        .unwrap_or_else(|| "analysis failed".to_string()),
                ),
            }
        }
    }
}

/// POST /api/analyze
#[tracing::instrument(skip_all)]
pub(crate) async fn analyze(
    State(state): State<Arc<WebState>>,
    payload: Result<Json<ProxyRequest>, JsonRejection>,
) -> Result<Json<ProxyResponse>, ApiError> {
    let Json(request) = payload?;
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ProxyError::InvalidInput("Username is required".to_string()).into());
    }

    match state.client.analyze(username, &state.agent).await {
        Ok(response) => Ok(Json(response.into())),
        Err(error) => {
            tracing::error!(username, "analysis relay failed: {error}");
            Err(error.into())
        }
    }
}
